//! rlbp-test - Regression test framework for the RLBP workspace
//!
//! Provides a small harness for regression tests, supporting three
//! modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files (default)
//! - **Display**: Run tests without comparison
//!
//! # Usage
//!
//! ```ignore
//! use rlbp_test::RegParams;
//!
//! let mut rp = RegParams::new("rlbp");
//! rp.compare_values(9.0, total as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use rlbp_core::GrayGrid;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // rlbp-test is at crates/rlbp-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// A deterministic synthetic grid for regression tests.
///
/// The pixel at (x, y) is `(x * a + y * b) mod 256`; different
/// coefficient pairs give unrelated textures.
pub fn synthetic_grid(width: u32, height: u32, a: u32, b: u32) -> GrayGrid {
    GrayGrid::from_fn(width, height, |x, y| ((x * a + y * b) % 256) as u8)
}
