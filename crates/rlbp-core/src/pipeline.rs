//! The three-stage reduction contract
//!
//! An image reduction runs in three phases:
//!
//! - [`Reduction::prologue`]: single-threaded setup before any pixel is
//!   read (lookup tables, scratch buffers).
//! - [`Reduction::process`]: the scan over a row range. May be invoked
//!   several times with disjoint ranges so that a driver can partition
//!   the image across workers, each accumulating into private state
//!   that is merged before the epilogue.
//! - [`Reduction::epilogue`]: single-threaded finalization producing the
//!   reduction's output artifact.
//!
//! The provided [`Reduction::run`] drives the stages in order over the
//! full row range and measures the wall-clock duration of the
//! processing stage only. The measurement is reported through the
//! [`log`] facade and never affects results.

use crate::error::Result;
use std::time::Instant;

/// Options for [`Reduction::run`].
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Report the processing-stage duration at info level instead of
    /// debug level. Has no effect on the computed output.
    pub verbose: bool,
}

impl RunOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the verbosity flag.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// A three-stage image reduction.
///
/// Implementors hold their input and any accumulated state; the output
/// artifact is produced once by [`Reduction::epilogue`]. Stage order is
/// the implementor's contract: `prologue` exactly once, then any number
/// of `process` calls over disjoint row ranges, then `epilogue` exactly
/// once. Implementations must reject out-of-order invocation with
/// [`crate::Error::InvariantViolation`].
pub trait Reduction {
    /// The reduction's output artifact.
    type Output;

    /// Short name used in diagnostic reporting.
    fn name(&self) -> &str;

    /// Total number of rows in the input.
    fn row_count(&self) -> u32;

    /// Single-threaded setup. Must complete before any `process` call.
    fn prologue(&mut self) -> Result<()>;

    /// Scan rows `[row_start, row_end)` and accumulate.
    fn process(&mut self, row_start: u32, row_end: u32) -> Result<()>;

    /// Single-threaded finalization; consumes the accumulated state.
    fn epilogue(&mut self) -> Result<Self::Output>;

    /// Run all three stages over the full row range, timing the
    /// processing stage.
    fn run(&mut self, options: &RunOptions) -> Result<Self::Output> {
        self.prologue()?;

        let rows = self.row_count();
        let start = Instant::now();
        self.process(0, rows)?;
        let elapsed = start.elapsed();

        if options.verbose {
            log::info!(
                "{} processing stage: {} ms",
                self.name(),
                elapsed.as_millis()
            );
        } else {
            log::debug!(
                "{} processing stage: {} ms",
                self.name(),
                elapsed.as_millis()
            );
        }

        self.epilogue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// Counts rows seen by `process`, recording stage order.
    struct RowCounter {
        rows: u32,
        prologue_done: bool,
        seen: u32,
    }

    impl RowCounter {
        fn new(rows: u32) -> Self {
            Self {
                rows,
                prologue_done: false,
                seen: 0,
            }
        }
    }

    impl Reduction for RowCounter {
        type Output = u32;

        fn name(&self) -> &str {
            "row-counter"
        }

        fn row_count(&self) -> u32 {
            self.rows
        }

        fn prologue(&mut self) -> Result<()> {
            self.prologue_done = true;
            Ok(())
        }

        fn process(&mut self, row_start: u32, row_end: u32) -> Result<()> {
            if !self.prologue_done {
                return Err(Error::InvariantViolation(
                    "process called before prologue".to_string(),
                ));
            }
            self.seen += row_end.saturating_sub(row_start);
            Ok(())
        }

        fn epilogue(&mut self) -> Result<u32> {
            Ok(self.seen)
        }
    }

    #[test]
    fn test_run_covers_full_range() {
        let mut reduction = RowCounter::new(17);
        let seen = reduction.run(&RunOptions::new()).unwrap();
        assert_eq!(seen, 17);
    }

    #[test]
    fn test_run_verbose_does_not_change_output() {
        let mut quiet = RowCounter::new(8);
        let mut loud = RowCounter::new(8);
        let a = quiet.run(&RunOptions::new()).unwrap();
        let b = loud.run(&RunOptions::new().with_verbose(true)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_process_before_prologue_is_a_defect() {
        let mut reduction = RowCounter::new(4);
        let err = reduction.process(0, 4).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation(_)));
    }

    #[test]
    fn test_disjoint_ranges_compose() {
        let mut reduction = RowCounter::new(10);
        reduction.prologue().unwrap();
        reduction.process(0, 4).unwrap();
        reduction.process(4, 10).unwrap();
        assert_eq!(reduction.epilogue().unwrap(), 10);
    }
}
