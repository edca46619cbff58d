//! Spotter - find icons and changes in captured screen images
//!
//! # Overview
//!
//! Spotter answers the questions a screen automation script asks about a
//! captured image:
//!
//! - Where does an icon occur? Exactly, within a color tolerance, or up to
//!   a uniform recoloring ([`search`])
//! - Which geometry do located icons span on screen ([`search::Finder`])
//! - Which regions of a capture changed since a reference ([`region`])
//!
//! Icons may carry a mask color; masked pixels match anything.
//!
//! # Example
//!
//! ```
//! use spotter::search::{Finder, PatternMatcher};
//! use spotter::{Icon, Image, ImageMut, Point, Rect};
//!
//! let mut screen = ImageMut::new_filled(64, 32, 0xFF10_1010).unwrap();
//! screen.fill_rect(Rect::new_unchecked(40, 8, 6, 4), 0xFF30_A030);
//! let screen: Image = screen.into();
//!
//! let mut button = ImageMut::new_filled(8, 6, 0xFF10_1010).unwrap();
//! button.fill_rect(Rect::new_unchecked(1, 1, 6, 4), 0xFF30_A030);
//! let button = Icon::new("button", button.into());
//!
//! let finder = Finder::color_index(screen.clone());
//! assert_eq!(finder.locate(&button).unwrap(), Some(Point::new(39, 7)));
//!
//! // The same button drawn in other colors
//! let mut themed = ImageMut::new_filled(8, 6, 0xFFEE_EEEE).unwrap();
//! themed.fill_rect(Rect::new_unchecked(1, 1, 6, 4), 0xFF20_40C0);
//! let themed = Icon::new("themed button", themed.into());
//! assert!(!finder.is_visible(&themed).unwrap());
//! assert_eq!(
//!     PatternMatcher::new(&screen, &themed).find_all(),
//!     vec![Point::new(39, 7)]
//! );
//! ```

// Re-export core types (primary data structures used everywhere)
pub use spotter_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use spotter_region as region;
pub use spotter_search as search;
