//! The RLBP descriptor pipeline
//!
//! Ties the pieces together as a three-stage [`Reduction`] over a
//! borrowed [`GrayGrid`]:
//!
//! 1. **prologue** - bind the uniformity lookup table;
//! 2. **process** - accumulate the raw 256-bin code histogram over a
//!    row range;
//! 3. **epilogue** - redistribute the raw histogram into the 59-bin
//!    rotation-invariant descriptor.
//!
//! Most callers want [`rlbp_histogram`], which runs all three stages
//! over the full grid.

use crate::error::TextureResult;
use crate::lbp::RawHistogram;
use crate::redistribute::{RLBP_BINS, redistribute};
use crate::uniform::uniformity_lut;
use rlbp_core::{Error, GrayGrid, Reduction, Result, RunOptions};

/// Options for the descriptor computation
#[derive(Debug, Clone, Default)]
pub struct RlbpOptions {
    /// Emit the processing-stage duration at info level.
    /// Never affects the computed histogram.
    pub verbose: bool,
}

impl RlbpOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the verbosity flag
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// The 59-bin rotation-invariant texture histogram.
///
/// Bin 0 aggregates all non-uniform pattern mass; bins 1..=58 are the
/// uniform texture classes, ordered by ascending pattern code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RlbpHistogram {
    bins: [i64; RLBP_BINS],
}

impl RlbpHistogram {
    /// All 59 bins.
    pub fn bins(&self) -> &[i64; RLBP_BINS] {
        &self.bins
    }

    /// The aggregated non-uniform mass (bin 0).
    pub fn non_uniform(&self) -> i64 {
        self.bins[0]
    }

    /// The 58 uniform class bins (bins 1..=58).
    pub fn uniform_bins(&self) -> &[i64] {
        &self.bins[1..]
    }

    /// The bins as a slice, for writing out or further reduction.
    pub fn as_slice(&self) -> &[i64] {
        &self.bins
    }
}

/// The rotation-invariant uniform LBP reduction over a grayscale grid.
///
/// # Example
///
/// ```
/// use rlbp_core::{GrayGrid, Reduction, RunOptions};
/// use rlbp_texture::descriptor::Rlbp;
///
/// let grid = GrayGrid::from_fn(5, 5, |_, _| 100);
/// let mut reduction = Rlbp::new(&grid);
/// let histogram = reduction.run(&RunOptions::new()).unwrap();
/// assert_eq!(histogram.bins().iter().sum::<i64>(), 9);
/// ```
pub struct Rlbp<'a> {
    grid: &'a GrayGrid,
    raw: RawHistogram,
    lut: Option<&'static [u8; 256]>,
}

impl<'a> Rlbp<'a> {
    /// Create a reduction over the given grid.
    pub fn new(grid: &'a GrayGrid) -> Self {
        Self {
            grid,
            raw: RawHistogram::new(),
            lut: None,
        }
    }
}

impl Reduction for Rlbp<'_> {
    type Output = RlbpHistogram;

    fn name(&self) -> &str {
        "rlbp"
    }

    fn row_count(&self) -> u32 {
        self.grid.height()
    }

    fn prologue(&mut self) -> Result<()> {
        self.lut = Some(uniformity_lut());
        Ok(())
    }

    fn process(&mut self, row_start: u32, row_end: u32) -> Result<()> {
        if self.lut.is_none() {
            return Err(Error::InvariantViolation(
                "rlbp process invoked before prologue".to_string(),
            ));
        }
        self.raw.accumulate(self.grid, row_start, row_end);
        Ok(())
    }

    fn epilogue(&mut self) -> Result<RlbpHistogram> {
        let lut = self.lut.ok_or_else(|| {
            Error::InvariantViolation("rlbp epilogue invoked before prologue".to_string())
        })?;
        let bins = redistribute(&self.raw, lut)?;
        Ok(RlbpHistogram { bins })
    }
}

/// Compute the 59-bin rotation-invariant texture histogram of a grid.
///
/// Grids smaller than 3x3 in either dimension have no interior pixels
/// and yield an all-zero histogram; this is not an error.
///
/// # Example
///
/// ```
/// use rlbp_core::GrayGrid;
/// use rlbp_texture::{RlbpOptions, rlbp_histogram};
///
/// let grid = GrayGrid::from_fn(8, 8, |x, y| ((x * 31 + y * 17) % 256) as u8);
/// let histogram = rlbp_histogram(&grid, &RlbpOptions::new()).unwrap();
/// assert_eq!(histogram.bins().len(), 59);
/// ```
pub fn rlbp_histogram(grid: &GrayGrid, options: &RlbpOptions) -> TextureResult<RlbpHistogram> {
    let mut reduction = Rlbp::new(grid);
    let run = RunOptions::new().with_verbose(options.verbose);
    Ok(reduction.run(&run)?)
}
