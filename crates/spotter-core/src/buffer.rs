//! Pixel buffer contracts
//!
//! Every algorithm in spotter reads pixels through [`PixelBuffer`]: a
//! width, a height and a 32-bit ARGB accessor. Captures and icons come from
//! outside the library, so anything that can answer those three questions
//! can be searched. [`Sample`] adds the name and mask color an icon carries.
//!
//! Buffers are never mutated by the search and region algorithms.

use crate::MASK_COLOR;
use crate::error::{Error, Result};
use crate::pixmap::{Image, ImageMut};
use crate::point::Point;
use crate::rect::Rect;

/// Read-only view of a 32-bit ARGB raster.
pub trait PixelBuffer {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// ARGB value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `x >= width` or `y >= height`.
    fn pixel(&self, x: u32, y: u32) -> u32;

    /// `(width, height)`
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Rectangle covering the whole buffer, anchored at the origin.
    fn bounds(&self) -> Rect {
        Rect::new_unchecked(0, 0, self.width() as i32, self.height() as i32)
    }

    /// ARGB value at a signed position, `None` outside the buffer.
    fn pixel_at(&self, p: Point) -> Option<u32> {
        if p.x < 0 || p.y < 0 || p.x as u32 >= self.width() || p.y as u32 >= self.height() {
            return None;
        }
        Some(self.pixel(p.x as u32, p.y as u32))
    }

    /// Copy the visible pixels into an owned [`Image`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for an empty buffer.
    fn to_image(&self) -> Result<Image> {
        let mut out = ImageMut::new(self.width(), self.height())?;
        for y in 0..self.height() {
            for x in 0..self.width() {
                out.set_pixel_unchecked(x, y, self.pixel(x, y));
            }
        }
        Ok(out.into())
    }
}

/// A pixel buffer searched for inside a larger capture.
///
/// Pixels equal to [`Sample::mask_color`] are wildcards and are ignored
/// during comparison.
pub trait Sample: PixelBuffer {
    /// Identifying name, used in log messages and errors
    fn name(&self) -> &str;

    /// The "don't care" color of this sample
    fn mask_color(&self) -> u32 {
        MASK_COLOR
    }

    /// Whether the pixel at `(x, y)` is a wildcard
    fn is_masked(&self, x: u32, y: u32) -> bool {
        self.pixel(x, y) == self.mask_color()
    }
}

impl<T: PixelBuffer + ?Sized> PixelBuffer for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> u32 {
        (**self).pixel(x, y)
    }
}

impl<T: Sample + ?Sized> Sample for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn mask_color(&self) -> u32 {
        (**self).mask_color()
    }
}

/// Read-only rectangular sub-view of another buffer.
///
/// Coordinates passed to [`PixelBuffer::pixel`] are relative to the
/// window's top-left corner.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a, B: ?Sized> {
    base: &'a B,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl<'a, B: PixelBuffer + ?Sized> Window<'a, B> {
    /// Create a window that must lie entirely inside `base`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the rectangle is empty or
    /// sticks out of the base buffer.
    pub fn new(base: &'a B, rect: Rect) -> Result<Self> {
        if rect.is_empty() || rect.intersect(&base.bounds()) != Some(rect) {
            return Err(Error::InvalidParameter(format!(
                "window {:?} does not fit in {}x{} buffer",
                rect,
                base.width(),
                base.height()
            )));
        }
        Ok(Self::from_rect(base, rect))
    }

    /// Create a window clipped to the bounds of `base`.
    ///
    /// Returns `None` if the rectangle does not overlap the buffer.
    pub fn clipped(base: &'a B, rect: Rect) -> Option<Self> {
        rect.intersect(&base.bounds())
            .map(|clip| Self::from_rect(base, clip))
    }

    fn from_rect(base: &'a B, rect: Rect) -> Self {
        Self {
            base,
            x: rect.x as u32,
            y: rect.y as u32,
            width: rect.w as u32,
            height: rect.h as u32,
        }
    }

    /// Position of the window inside its base buffer
    pub fn origin(&self) -> Point {
        Point::from_xy(self.x, self.y)
    }
}

impl<B: PixelBuffer + ?Sized> PixelBuffer for Window<'_, B> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> u32 {
        self.base.pixel(self.x + x, self.y + y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Image {
        let mut img = ImageMut::new(width, height).unwrap();
        for y in 0..height {
            for x in 0..width {
                img.set_pixel(x, y, y * 100 + x).unwrap();
            }
        }
        img.into()
    }

    #[test]
    fn test_window_reads_relative_coordinates() {
        let img = gradient(10, 8);
        let w = Window::new(&img, Rect::new_unchecked(2, 3, 4, 4)).unwrap();
        assert_eq!(w.dimensions(), (4, 4));
        assert_eq!(w.pixel(0, 0), 302);
        assert_eq!(w.pixel(3, 3), 605);
        assert_eq!(w.origin(), Point::new(2, 3));
    }

    #[test]
    fn test_window_must_fit() {
        let img = gradient(10, 8);
        assert!(Window::new(&img, Rect::new_unchecked(8, 0, 4, 4)).is_err());
        assert!(Window::new(&img, Rect::new_unchecked(-1, 0, 4, 4)).is_err());
        assert!(Window::new(&img, Rect::new_unchecked(0, 0, 0, 4)).is_err());
    }

    #[test]
    fn test_window_clipped() {
        let img = gradient(10, 8);
        let w = Window::clipped(&img, Rect::new_unchecked(8, 6, 4, 4)).unwrap();
        assert_eq!(w.dimensions(), (2, 2));
        assert_eq!(w.pixel(1, 1), 709);
        assert!(Window::clipped(&img, Rect::new_unchecked(20, 20, 4, 4)).is_none());
    }

    #[test]
    fn test_pixel_at_signed() {
        let img = gradient(3, 3);
        assert_eq!(img.pixel_at(Point::new(2, 1)), Some(102));
        assert_eq!(img.pixel_at(Point::new(-1, 1)), None);
        assert_eq!(img.pixel_at(Point::new(3, 0)), None);
    }
}
