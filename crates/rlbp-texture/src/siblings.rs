//! Rotation sibling enumeration
//!
//! Full rotation invariance would require collapsing every circular
//! shift of a code into one class. The descriptor approximates this
//! more cheaply: the 3-bit sub-patterns `010` and `101` are the
//! principal cause of non-uniformity, and each can be "fixed" by
//! substituting `000` or `111` respectively. The *siblings* of a code
//! are all distinct codes reachable by applying such substitutions in
//! any combination.
//!
//! Windows are linear, not circular: offset `i` in `[0, 5]` covers bits
//! `i..=i+2` without wrapping. Substitutions at an earlier offset can
//! change which substitutions apply at later, overlapping offsets, so
//! the enumeration explores both the "substitute" and "skip"
//! continuation at every applicable offset, always moving to strictly
//! increasing offsets. The search is exhaustive but bounded: six
//! offsets, at most 2^6 substitution subsets per branch.

use rlbp_core::{Error, Result};
use std::collections::BTreeSet;

/// Replaceable window `010` and its substitution `000`.
const Y3: u8 = 0b010;
const Y3_SUB: u8 = 0b000;

/// Replaceable window `101` and its substitution `111`.
const Y6: u8 = 0b101;
const Y6_SUB: u8 = 0b111;

/// Window offsets run 0..WINDOW_OFFSETS, each covering 3 bits.
const WINDOW_OFFSETS: u32 = 6;

/// Hard cap on explored work items. The real bound is far lower; the
/// guard exists so a defect in the enumeration surfaces as an error
/// instead of a hang.
const MAX_WORK_ITEMS: usize = 1 << 12;

/// Enumerate the sibling set of a code: every distinct code reachable
/// through the window substitutions, excluding `code` itself.
///
/// # Errors
///
/// Returns [`Error::InvariantViolation`] if the enumeration exceeds its
/// bounded branch count (a defect, not an input condition).
///
/// # Example
///
/// ```
/// use rlbp_texture::siblings::sibling_set;
///
/// // Code 2 is the replaceable window itself, at offset 0.
/// let siblings = sibling_set(0b00000010).unwrap();
/// assert!(siblings.contains(&0));
/// assert!(!siblings.contains(&2));
/// ```
pub fn sibling_set(code: u8) -> Result<BTreeSet<u8>> {
    let mut result = BTreeSet::new();
    let mut stack: Vec<(u32, u8)> = vec![(0, code)];
    let mut budget = MAX_WORK_ITEMS;

    while let Some((next_offset, current)) = stack.pop() {
        if budget == 0 {
            return Err(Error::InvariantViolation(format!(
                "sibling enumeration for code {code} exceeded {MAX_WORK_ITEMS} work items"
            )));
        }
        budget -= 1;

        for i in next_offset..WINDOW_OFFSETS {
            let window = (current >> i) & 0b111;
            let replacement = match window {
                Y3 => Y3_SUB,
                Y6 => Y6_SUB,
                _ => continue,
            };
            // Both continuations resume from the next offset: keep the
            // current variant as-is, or apply the substitution.
            stack.push((i + 1, current));
            let mask = 0b111u8 << i;
            stack.push((i + 1, (current & !mask) | (replacement << i)));
        }

        if current != code {
            result.insert(current);
        }
    }

    Ok(result)
}
