//! Raw-histogram redistribution into the final 59 bins
//!
//! The finalize step converts the 256-bin code histogram into the
//! 59-bin descriptor: bin 0 aggregates non-uniform mass, bins 1..=58
//! are the uniform rotation-invariant classes. Each code's count is
//! split across the bins of its rotation siblings:
//!
//! - a code with no siblings keeps its count in its own bin;
//! - otherwise each uniform sibling receives `count / Ti` and each
//!   non-uniform sibling `count * ((Ti - Ti1) / Ti)`, where `Ti` is the
//!   sibling count and `Ti1` the number of uniform siblings.
//!
//! All divisions truncate toward zero, exactly as in the RLBP
//! reference formulation (Zhao et al., BMVC 2013); mass can be lost
//! whenever `Ti` does not divide the numerator. Note that a code with
//! siblings does not retain its own count - everything is routed to
//! the siblings' bins.

use crate::lbp::RawHistogram;
use crate::siblings::sibling_set;
use crate::uniform::{UNIFORM_PATTERN_COUNT, is_uniform_pattern};
use rlbp_core::Result;

/// Number of bins in the final descriptor histogram.
pub const RLBP_BINS: usize = UNIFORM_PATTERN_COUNT + 1;

/// Redistribute a raw code histogram into the 59 descriptor bins using
/// the given uniformity lookup table.
///
/// # Errors
///
/// Propagates [`rlbp_core::Error::InvariantViolation`] from the sibling
/// enumeration; no input-dependent failure exists.
pub fn redistribute(raw: &RawHistogram, lut: &[u8; 256]) -> Result<[i64; RLBP_BINS]> {
    let mut bins = [0i64; RLBP_BINS];

    for code in 0..=255u8 {
        let siblings = sibling_set(code)?;
        let count = raw.count(code);

        if siblings.is_empty() {
            bins[lut[code as usize] as usize] += count;
            continue;
        }

        let ti = siblings.len() as i64;
        let ti1 = siblings
            .iter()
            .filter(|&&s| is_uniform_pattern(s))
            .count() as i64;

        for &sibling in &siblings {
            let contribution = if is_uniform_pattern(sibling) {
                count / ti
            } else {
                count * ((ti - ti1) / ti)
            };
            bins[lut[sibling as usize] as usize] += contribution;
        }
    }

    Ok(bins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uniform::uniformity_lut;

    fn raw_with(entries: &[(u8, i64)]) -> RawHistogram {
        let mut raw = RawHistogram::new();
        for &(code, count) in entries {
            let one = unit(code);
            for _ in 0..count {
                raw.merge(&one);
            }
        }
        raw
    }

    /// A histogram holding a single observation of `code`.
    fn unit(code: u8) -> RawHistogram {
        use rlbp_core::GrayGrid;
        // Smallest grid whose single interior pixel produces `code`:
        // neighbor k gets an intensity >= center iff bit k is set.
        let center = 100u8;
        let neighbor = |bit: u8| if code & (1 << bit) != 0 { 200 } else { 0 };
        let grid = GrayGrid::from_raw(
            3,
            3,
            vec![
                neighbor(0),
                neighbor(1),
                neighbor(2),
                neighbor(7),
                center,
                neighbor(3),
                neighbor(6),
                neighbor(5),
                neighbor(4),
            ],
        )
        .unwrap();
        let mut raw = RawHistogram::new();
        raw.accumulate(&grid, 0, 3);
        assert_eq!(raw.count(code), 1, "unit grid must produce code {code}");
        raw
    }

    #[test]
    fn test_sibling_free_code_keeps_its_bin() {
        let lut = uniformity_lut();
        // 255 has no applicable windows; its mass stays in its bin.
        let raw = raw_with(&[(255, 9)]);
        let bins = redistribute(&raw, lut).unwrap();
        assert_eq!(bins[lut[255] as usize], 9);
        assert_eq!(bins.iter().sum::<i64>(), 9);
    }

    #[test]
    fn test_single_uniform_sibling_receives_everything() {
        let lut = uniformity_lut();
        // Siblings of 2 are exactly {0}; 0 is uniform, so the full
        // count moves to the bin of code 0 and none stays with code 2.
        let raw = raw_with(&[(2, 7)]);
        let bins = redistribute(&raw, lut).unwrap();
        assert_eq!(bins[lut[0] as usize], 7);
        assert_eq!(bins[lut[2] as usize], 0);
    }

    #[test]
    fn test_truncating_division_loses_mass() {
        let lut = uniformity_lut();
        // Siblings of 0b01010000 are {0, 16, 64, 112}, all uniform:
        // Ti = 4, so a count of 10 yields 10 / 4 = 2 per sibling.
        let raw = raw_with(&[(0b01010000, 10)]);
        let bins = redistribute(&raw, lut).unwrap();
        for sibling in [0u8, 16, 64, 112] {
            assert_eq!(bins[lut[sibling as usize] as usize], 2);
        }
        assert_eq!(bins.iter().sum::<i64>(), 8);
    }

    #[test]
    fn test_empty_histogram_stays_empty() {
        let raw = RawHistogram::new();
        let bins = redistribute(&raw, uniformity_lut()).unwrap();
        assert!(bins.iter().all(|&b| b == 0));
    }
}
