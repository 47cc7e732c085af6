//! Local binary pattern codes and the raw 256-bin histogram
//!
//! Each interior pixel is encoded by comparing its eight neighbors
//! against the center intensity. A neighbor contributes its bit weight
//! when `neighbor >= center`. Weights run clockwise from the top-left
//! corner:
//!
//! ```text
//!   1    2    4
//! 128         8
//!  64   32   16
//! ```
//!
//! Border pixels lack a full 3x3 neighborhood and are never sampled, so
//! grids smaller than 3x3 in either dimension produce an empty
//! histogram rather than an error.

use rlbp_core::GrayGrid;

/// Compute the local binary pattern code of the pixel at (x, y), or
/// `None` if the pixel is on the grid border (or the grid is smaller
/// than 3x3).
///
/// # Example
///
/// ```
/// use rlbp_core::GrayGrid;
/// use rlbp_texture::lbp::lbp_code;
///
/// // Constant grid: every neighbor compares >= center, all bits set.
/// let grid = GrayGrid::from_fn(3, 3, |_, _| 100);
/// assert_eq!(lbp_code(&grid, 1, 1), Some(255));
/// assert_eq!(lbp_code(&grid, 0, 1), None);
/// ```
pub fn lbp_code(grid: &GrayGrid, x: u32, y: u32) -> Option<u8> {
    if grid.width() < 3 || grid.height() < 3 {
        return None;
    }
    if x == 0 || y == 0 || x >= grid.width() - 1 || y >= grid.height() - 1 {
        return None;
    }

    let center = grid.get_unchecked(x, y);
    let neighbors = [
        grid.get_unchecked(x - 1, y - 1), // 1
        grid.get_unchecked(x, y - 1),     // 2
        grid.get_unchecked(x + 1, y - 1), // 4
        grid.get_unchecked(x + 1, y),     // 8
        grid.get_unchecked(x + 1, y + 1), // 16
        grid.get_unchecked(x, y + 1),     // 32
        grid.get_unchecked(x - 1, y + 1), // 64
        grid.get_unchecked(x - 1, y),     // 128
    ];

    let mut code = 0u8;
    for (i, &neighbor) in neighbors.iter().enumerate() {
        if neighbor >= center {
            code |= 1 << i;
        }
    }
    Some(code)
}

/// Raw 256-bin histogram of local binary pattern codes.
///
/// Counters are 64-bit so large images cannot overflow a bin. Workers
/// scanning disjoint row ranges each accumulate into a private
/// `RawHistogram` and combine them with [`RawHistogram::merge`] before
/// redistribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHistogram {
    counts: [i64; 256],
}

impl Default for RawHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl RawHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self { counts: [0; 256] }
    }

    /// Scan rows `[row_start, row_end)` of the grid and count the code
    /// of every interior pixel in that band.
    ///
    /// The range is clamped to the interior rows, so disjoint ranges
    /// compose exactly: `accumulate(g, 0, g.height())` visits every
    /// interior pixel once, and so does any partition of that range.
    pub fn accumulate(&mut self, grid: &GrayGrid, row_start: u32, row_end: u32) {
        if grid.width() < 3 || grid.height() < 3 {
            return;
        }
        let first = row_start.max(1);
        let last = row_end.min(grid.height() - 1);
        if first >= last {
            return;
        }

        let cols = grid.width() as usize;
        for y in first..last {
            let above = grid.row(y - 1);
            let line = grid.row(y);
            let below = grid.row(y + 1);
            for x in 1..cols - 1 {
                let center = line[x];
                let mut code = 0u8;
                if above[x - 1] >= center {
                    code |= 1;
                }
                if above[x] >= center {
                    code |= 2;
                }
                if above[x + 1] >= center {
                    code |= 4;
                }
                if line[x + 1] >= center {
                    code |= 8;
                }
                if below[x + 1] >= center {
                    code |= 16;
                }
                if below[x] >= center {
                    code |= 32;
                }
                if below[x - 1] >= center {
                    code |= 64;
                }
                if line[x - 1] >= center {
                    code |= 128;
                }
                self.counts[code as usize] += 1;
            }
        }
    }

    /// Element-wise sum of another histogram into this one.
    pub fn merge(&mut self, other: &RawHistogram) {
        for (dst, src) in self.counts.iter_mut().zip(other.counts.iter()) {
            *dst += src;
        }
    }

    /// Count for one code.
    #[inline]
    pub fn count(&self, code: u8) -> i64 {
        self.counts[code as usize]
    }

    /// All 256 counters, indexed by code.
    pub fn counts(&self) -> &[i64; 256] {
        &self.counts
    }

    /// Total mass: the number of interior pixels scanned.
    pub fn total(&self) -> i64 {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_grid_gives_all_ones_code() {
        let grid = GrayGrid::from_fn(5, 5, |_, _| 100);
        let mut hist = RawHistogram::new();
        hist.accumulate(&grid, 0, grid.height());
        // 3x3 interior pixels, every neighbor >= center.
        assert_eq!(hist.count(255), 9);
        assert_eq!(hist.total(), 9);
    }

    #[test]
    fn test_code_weights_exact() {
        // Center 50; top, right, bottom and left neighbors brighter,
        // corners darker: bits 1, 3, 5, 7 -> 2 + 8 + 32 + 128 = 170.
        let mut grid = GrayGrid::from_fn(3, 3, |_, _| 40);
        grid.set(1, 1, 50).unwrap();
        grid.set(1, 0, 60).unwrap();
        grid.set(2, 1, 60).unwrap();
        grid.set(1, 2, 60).unwrap();
        grid.set(0, 1, 60).unwrap();

        assert_eq!(lbp_code(&grid, 1, 1), Some(0b10101010));
        let mut hist = RawHistogram::new();
        hist.accumulate(&grid, 0, 3);
        assert_eq!(hist.count(170), 1);
        assert_eq!(hist.total(), 1);
    }

    #[test]
    fn test_border_pixels_excluded() {
        let grid = GrayGrid::from_fn(4, 4, |x, y| (x * 7 + y * 13) as u8);
        assert_eq!(lbp_code(&grid, 0, 0), None);
        assert_eq!(lbp_code(&grid, 3, 2), None);
        assert_eq!(lbp_code(&grid, 2, 3), None);
        assert!(lbp_code(&grid, 1, 2).is_some());
    }

    #[test]
    fn test_undersized_grid_yields_empty_histogram() {
        for (w, h) in [(0, 0), (2, 8), (8, 2), (1, 1)] {
            let grid = GrayGrid::from_fn(w, h, |x, y| (x + y) as u8);
            let mut hist = RawHistogram::new();
            hist.accumulate(&grid, 0, h);
            assert_eq!(hist.total(), 0, "{w}x{h} grid should scan nothing");
        }
    }

    #[test]
    fn test_total_equals_interior_pixel_count() {
        let grid = GrayGrid::from_fn(13, 9, |x, y| ((x * 31 + y * 17) % 251) as u8);
        let mut hist = RawHistogram::new();
        hist.accumulate(&grid, 0, grid.height());
        assert_eq!(hist.total(), 11 * 7);
    }

    #[test]
    fn test_disjoint_ranges_compose() {
        let grid = GrayGrid::from_fn(10, 12, |x, y| ((x * 89 + y * 57) % 256) as u8);

        let mut full = RawHistogram::new();
        full.accumulate(&grid, 0, grid.height());

        let mut lower = RawHistogram::new();
        lower.accumulate(&grid, 0, 5);
        let mut upper = RawHistogram::new();
        upper.accumulate(&grid, 5, grid.height());

        let mut merged = RawHistogram::new();
        merged.merge(&lower);
        merged.merge(&upper);
        assert_eq!(merged, full);
    }

    #[test]
    fn test_empty_and_reversed_ranges_are_no_ops() {
        let grid = GrayGrid::from_fn(6, 6, |x, y| (x ^ y) as u8);
        let mut hist = RawHistogram::new();
        hist.accumulate(&grid, 3, 3);
        hist.accumulate(&grid, 5, 2);
        assert_eq!(hist.total(), 0);
    }
}
