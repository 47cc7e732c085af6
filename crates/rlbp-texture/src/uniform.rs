//! Uniform pattern classification
//!
//! A local binary pattern code is *uniform* when, read as a circular
//! 8-bit sequence, it contains at most two 0-1 or 1-0 transitions
//! (e.g. `11110011`, `00110000`). Exactly 58 of the 256 codes are
//! uniform: the two constant codes plus the 56 single-run codes.
//!
//! The uniformity lookup table maps every code to a histogram bin:
//! bin 0 is shared by all non-uniform codes, and the uniform codes get
//! bins 1..=58 in ascending numeric order. The table is a pure function
//! of the 256-code domain, so it is built once per process and shared.

use std::sync::LazyLock;

/// Number of uniform 8-bit patterns.
pub const UNIFORM_PATTERN_COUNT: usize = 58;

static UNIFORMITY_LUT: LazyLock<[u8; 256]> = LazyLock::new(build_uniformity_lut);

/// Number of bit transitions in a code, counting bit 7 and bit 0 as
/// adjacent.
///
/// # Example
///
/// ```
/// use rlbp_texture::uniform::transition_count;
///
/// assert_eq!(transition_count(0b11110000), 2);
/// assert_eq!(transition_count(0b00000000), 0);
/// assert_eq!(transition_count(0b10101010), 8);
/// ```
#[inline]
pub fn transition_count(code: u8) -> u32 {
    (code ^ code.rotate_right(1)).count_ones()
}

/// Whether a code is a uniform pattern (at most two circular
/// transitions). The constant codes 0 and 255 are uniform with zero
/// transitions.
#[inline]
pub fn is_uniform_pattern(code: u8) -> bool {
    transition_count(code) <= 2
}

/// Build the code-to-bin lookup table.
///
/// Codes are visited in ascending order; each uniform code is assigned
/// the next bin starting from 1, and non-uniform codes map to bin 0.
/// The result assigns exactly [`UNIFORM_PATTERN_COUNT`] distinct
/// non-zero bins.
pub fn build_uniformity_lut() -> [u8; 256] {
    let mut lut = [0u8; 256];
    let mut uniforms = 0u8;
    for code in 0..=255u8 {
        if is_uniform_pattern(code) {
            uniforms += 1;
            lut[code as usize] = uniforms;
        }
    }
    lut
}

/// The process-wide uniformity lookup table, built on first use.
pub fn uniformity_lut() -> &'static [u8; 256] {
    &UNIFORMITY_LUT
}
