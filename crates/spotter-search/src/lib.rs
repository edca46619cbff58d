//! spotter-search - Subimage location for spotter
//!
//! This crate finds small samples ("icons") inside larger captures:
//!
//! - **Color index** - exact, translation-consistent filtering through a
//!   color to positions index of the capture ([`ColorIndexLocator`])
//! - **Tolerance scan** - brute-force windowed comparison with a per-pixel
//!   color tolerance ([`ToleranceScanLocator`])
//! - **Pattern matching** - windows that show the sample up to a uniform
//!   recoloring, enumerated lazily and splittable for rayon
//!   ([`PatternMatcher`])
//! - **Queries** - the [`Locator`] strategy enum and the [`Finder`]
//!   geometry helpers built on it
//!
//! Pixels of a sample equal to its mask color are wildcards for every
//! strategy.
//!
//! # Examples
//!
//! ```
//! use spotter_core::{Icon, Image, ImageMut, Point, Rect};
//! use spotter_search::{ColorIndexLocator, PatternMatcher};
//!
//! let mut capture = ImageMut::new_filled(32, 24, 0xFF00_0000).unwrap();
//! capture.fill_rect(Rect::new_unchecked(10, 6, 2, 2), 0xFFFF_FFFF);
//! let capture: Image = capture.into();
//!
//! let mut dot = ImageMut::new_filled(4, 4, 0xFF00_0000).unwrap();
//! dot.fill_rect(Rect::new_unchecked(1, 1, 2, 2), 0xFFFF_FFFF);
//! let dot = Icon::new("dot", dot.into());
//!
//! let exact = ColorIndexLocator::new(&capture).locate(&dot).unwrap();
//! assert_eq!(exact, vec![Point::new(9, 5)]);
//!
//! let matcher = PatternMatcher::new(&capture, &dot);
//! assert_eq!(matcher.par_find_all(), exact);
//! ```

pub mod color_index;
pub mod compare;
pub mod error;
pub mod finder;
pub mod locator;
pub mod pattern;
mod raster;
pub mod tolerance;

// Re-export core types
pub use spotter_core;

pub use color_index::{ColorIndex, ColorIndexLocator};
pub use compare::ImageComparator;
pub use error::{SearchError, SearchResult};
pub use finder::Finder;
pub use locator::Locator;
pub use pattern::{ParPatternMatches, PatternMatcher, PatternMatches};
pub use tolerance::ToleranceScanLocator;
