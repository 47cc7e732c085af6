//! GrayGrid regression test - construction, access, row slicing

use rlbp_core::GrayGrid;
use rlbp_test::{RegParams, synthetic_grid};

#[test]
fn grid_reg() {
    let mut rp = RegParams::new("grid");

    // --- Test 1: construction and extents ---
    let grid = GrayGrid::new(640, 480);
    rp.compare_values(640.0, grid.width() as f64, 0.0);
    rp.compare_values(480.0, grid.height() as f64, 0.0);
    rp.compare_values(640.0 * 480.0, grid.as_raw().len() as f64, 0.0);

    // --- Test 2: from_raw size validation ---
    let ok = GrayGrid::from_raw(4, 4, vec![7; 16]);
    rp.compare_values(1.0, if ok.is_ok() { 1.0 } else { 0.0 }, 0.0);
    let short = GrayGrid::from_raw(4, 4, vec![7; 15]);
    rp.compare_values(1.0, if short.is_err() { 1.0 } else { 0.0 }, 0.0);

    // --- Test 3: get/set round trip and bounds ---
    let mut grid = GrayGrid::new(8, 8);
    grid.set(3, 5, 211).expect("in-bounds set");
    rp.compare_values(211.0, grid.get(3, 5).unwrap_or(0) as f64, 0.0);
    rp.compare_values(1.0, if grid.get(8, 0).is_none() { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if grid.set(0, 8, 1).is_err() { 1.0 } else { 0.0 }, 0.0);

    // --- Test 4: row-major layout ---
    let grid = synthetic_grid(4, 3, 1, 10);
    rp.compare_values(0.0, grid.row(0)[0] as f64, 0.0);
    rp.compare_values(3.0, grid.row(0)[3] as f64, 0.0);
    rp.compare_values(21.0, grid.row(2)[1] as f64, 0.0);

    // --- Test 5: zero-sized grids are valid ---
    let empty = GrayGrid::new(0, 17);
    rp.compare_values(0.0, empty.as_raw().len() as f64, 0.0);
    rp.compare_values(1.0, if empty.get(0, 0).is_none() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup());
}
