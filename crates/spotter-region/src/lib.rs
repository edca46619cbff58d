//! spotter-region - Region labeling and image differencing for spotter
//!
//! This crate provides:
//!
//! - **Label matrices** - one label per pixel of two compared images
//! - **Flood fill** - interchangeable recursive and scanline 8-connected
//!   fillers behind the [`FloodFill`] trait
//! - **Region diff** - bounding boxes of the regions where a sample
//!   differs from an original
//!
//! # Examples
//!
//! ## Labeling a matrix
//!
//! ```
//! use spotter_region::{FloodFill, LabelMatrix, ScanlineFloodFill};
//!
//! let mut m = LabelMatrix::from_cells(3, 3, vec![
//!     1, 0, 0,
//!     0, 1, 0,
//!     0, 0, 1,
//! ]).unwrap();
//! let filled = ScanlineFloodFill.fill(&mut m, 0, 0, LabelMatrix::DIFFERENT, 2);
//! assert_eq!(filled, 3);
//! ```
//!
//! ## Diffing two images
//!
//! ```
//! use spotter_core::{Image, Point};
//! use spotter_region::{DiffOptions, RegionDiffer};
//!
//! let a = Image::new_filled(16, 16, 0xFF10_2030).unwrap();
//! let differ = RegionDiffer::new(DiffOptions::default().with_tolerance(0.1));
//! assert!(differ.diff(&a, &a, Point::ORIGIN).unwrap().is_empty());
//! ```

pub mod diff;
pub mod error;
pub mod floodfill;
pub mod matrix;

// Re-export core types
pub use spotter_core;

pub use diff::{DiffOptions, RegionDiffer};
pub use error::{RegionError, RegionResult};
pub use floodfill::{FloodFill, FloodFillKind, RecursiveFloodFill, ScanlineFloodFill};
pub use matrix::LabelMatrix;
