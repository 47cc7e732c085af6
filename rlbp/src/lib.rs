//! RLBP - rotation-invariant uniform texture descriptor
//!
//! Computes the 59-bin RLBP histogram of a grayscale image: per-pixel
//! local binary pattern codes, uniform pattern classification, and a
//! redistribution step that collapses each pattern onto its rotation
//! siblings.
//!
//! # Overview
//!
//! - Grayscale grid container and the staged reduction runner
//!   ([`GrayGrid`], [`Reduction`], [`RunOptions`])
//! - Texture descriptor computation under [`texture`]
//!
//! # Example
//!
//! ```
//! use rlbp::GrayGrid;
//! use rlbp::texture::{RlbpOptions, rlbp_histogram};
//!
//! let grid = GrayGrid::from_fn(64, 64, |x, y| ((x * 13 + y * 7) % 256) as u8);
//! let histogram = rlbp_histogram(&grid, &RlbpOptions::new()).unwrap();
//! assert_eq!(histogram.bins().len(), 59);
//! ```

// Re-export core types (the data structures used everywhere)
pub use rlbp_core::*;

// Re-export the descriptor crate as a module
pub use rlbp_texture as texture;
