//! Rotation-invariant uniform local binary pattern texture descriptor
//!
//! This crate turns a grayscale grid into a 59-bin texture histogram:
//!
//! - [`lbp`]: per-pixel 8-bit pattern codes and the raw 256-bin
//!   histogram;
//! - [`uniform`]: uniform pattern classification and the code-to-bin
//!   lookup table;
//! - [`siblings`]: enumeration of the codes a pattern can collapse into
//!   under the `010`/`101` window substitutions;
//! - [`redistribute`]: the finalize step mapping the raw histogram onto
//!   the 59 descriptor bins;
//! - [`descriptor`]: the [`Rlbp`] reduction tying the stages together
//!   and the [`rlbp_histogram`] convenience entry point.
//!
//! # Example
//!
//! ```
//! use rlbp_core::GrayGrid;
//! use rlbp_texture::{RlbpOptions, rlbp_histogram};
//!
//! let grid = GrayGrid::from_fn(32, 32, |x, y| ((x * 7 + y * 11) % 256) as u8);
//! let histogram = rlbp_histogram(&grid, &RlbpOptions::new()).unwrap();
//! assert_eq!(histogram.bins().len(), 59);
//! ```

pub mod descriptor;
mod error;
pub mod lbp;
pub mod redistribute;
pub mod siblings;
pub mod uniform;

pub use descriptor::{Rlbp, RlbpHistogram, RlbpOptions, rlbp_histogram};
pub use error::{TextureError, TextureResult};
pub use lbp::{RawHistogram, lbp_code};
pub use redistribute::{RLBP_BINS, redistribute};
pub use siblings::sibling_set;
pub use uniform::{UNIFORM_PATTERN_COUNT, is_uniform_pattern, transition_count, uniformity_lut};

pub use rlbp_core;
