//! spotter-test - Regression test helpers for spotter
//!
//! This crate provides the shared pieces of the regression tests under
//! each crate's `tests/` directory:
//!
//! - [`RegParams`] - counts checks and collects every failure before the
//!   test asserts on the overall result
//! - [`fixtures`] - synthetic captures and icons drawn in code
//!
//! # Usage
//!
//! ```ignore
//! use spotter_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("pattern");
//! let found = matcher.find_all(&fixtures::digit_strip())?;
//! rp.compare_points(&[fixtures::THREE_AT], &found);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: passed to `env_logger`, e.g. `RUST_LOG=spotter_search=debug`

pub mod fixtures;
mod params;

pub use params::RegParams;

/// Install `env_logger` for the current test binary.
///
/// Safe to call from every test; only the first call has an effect.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
