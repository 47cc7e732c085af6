//! rlbp-core - Data structures and the reduction contract
//!
//! This crate provides the fundamental pieces shared by the texture
//! descriptor crates:
//!
//! - [`GrayGrid`] - 8-bit grayscale pixel grid (the reduction input)
//! - [`Reduction`] / [`RunOptions`] - the three-stage prologue /
//!   process / epilogue contract with timed execution
//! - [`Error`] / [`Result`] - the core error type
//!
//! The optional `image` feature adds conversions between [`GrayGrid`]
//! and `image::GrayImage` so grids can be fed from any loader built on
//! the `image` crate.

pub mod error;
pub mod grid;
pub mod pipeline;

pub use error::{Error, Result};
pub use grid::GrayGrid;
pub use pipeline::{Reduction, RunOptions};
