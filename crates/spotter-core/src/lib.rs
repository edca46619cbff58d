//! Spotter Core - Basic data structures for image search
//!
//! This crate provides the fundamental data structures shared by the
//! search and region crates:
//!
//! - [`PixelBuffer`] / [`Sample`] - the read-only pixel contracts every
//!   algorithm consumes
//! - [`Image`] / [`ImageMut`] - owned ARGB buffers (immutable / mutable)
//! - [`Icon`] - a named sample with a mask color
//! - [`Window`] - a read-only sub-view of another buffer
//! - [`Point`] / [`Rect`] - coordinates and rectangle regions

pub mod buffer;
pub mod error;
pub mod icon;
pub mod pixmap;
pub mod point;
pub mod rect;

pub use buffer::{PixelBuffer, Sample, Window};
pub use error::{Error, Result};
pub use icon::Icon;
pub use pixmap::{Image, ImageMut};
pub use point::Point;
pub use rect::Rect;

/// Default "don't care" color: opaque pure magenta.
pub const MASK_COLOR: u32 = 0xFFFF_00FF;

/// Color channel helpers for 32-bit ARGB pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xAARRGGBB` (alpha in MSB, blue in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const ALPHA_SHIFT: u32 = 24;
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose an opaque 32-bit pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_argb(255, r, g, b)
    }

    /// Compose a 32-bit ARGB pixel.
    #[inline]
    pub fn compose_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
        ((a as u32) << ALPHA_SHIFT)
            | ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Squared Euclidean distance between two pixels in RGB space.
    ///
    /// Alpha is ignored. The maximum value is `3 * 255^2`.
    #[inline]
    pub fn distance_squared(a: u32, b: u32) -> u32 {
        let dr = red(a) as i32 - red(b) as i32;
        let dg = green(a) as i32 - green(b) as i32;
        let db = blue(a) as i32 - blue(b) as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

}
