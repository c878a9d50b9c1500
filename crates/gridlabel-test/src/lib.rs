//! gridlabel-test - Regression test framework for gridlabel
//!
//! This crate provides a regression test harness supporting three
//! modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (manual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use gridlabel_test::RegParams;
//!
//! let mut rp = RegParams::new("conncomp");
//! rp.compare_values(4.0, count as f64, 0.0);
//! rp.compare_grids(&expected, &labeled);
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

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // gridlabel-test is at crates/gridlabel-test, so go up two directories
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
