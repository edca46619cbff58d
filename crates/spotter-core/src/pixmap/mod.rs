//! Image - owned ARGB pixel buffers
//!
//! `Image` is the owned buffer type of spotter: a row-major vector of
//! 32-bit `0xAARRGGBB` pixels.
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for cheap cloning (shared ownership), so one capture
//! can be handed to several locators and parallel workers without copying.
//! To modify pixel data, convert to `ImageMut` via [`Image::try_into_mut`]
//! or [`Image::to_mut`], then convert back with `Into<Image>`.

mod access;
mod convert;

use crate::buffer::PixelBuffer;
use crate::error::{Error, Result};
use crate::rect::Rect;
use std::sync::Arc;

/// Internal image data
#[derive(Debug, Clone, PartialEq, Eq)]
struct ImageData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Row-major ARGB pixels, `width * height` entries
    data: Vec<u32>,
}

impl ImageData {
    fn filled(width: u32, height: u32, argb: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![argb; width as usize * height as usize],
        })
    }
}

/// Immutable, cheaply clonable ARGB image.
///
/// # Examples
///
/// ```
/// use spotter_core::{Image, PixelBuffer};
///
/// let img = Image::new(64, 48).unwrap();
/// assert_eq!(img.width(), 64);
/// assert_eq!(img.pixel(0, 0), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl Image {
    /// Create a new image with every pixel set to `0` (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, 0)
    }

    /// Create a new image with every pixel set to `argb`.
    pub fn new_filled(width: u32, height: u32, argb: u32) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(ImageData::filled(width, height, argb)?),
        })
    }

    /// Wrap row-major ARGB pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLength`] if `data.len() != width * height`.
    pub fn from_argb(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            inner: Arc::new(ImageData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Raw row-major pixel data.
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Number of `Image` handles sharing this pixel data.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check whether two images have the same width and height.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }

    /// Copy a rectangular region into a new image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the rectangle does not lie
    /// entirely inside the image.
    pub fn clip(&self, rect: Rect) -> Result<Image> {
        crate::buffer::Window::new(self, rect)?.to_image()
    }

    /// Try to get exclusive access to the pixel data.
    ///
    /// Succeeds only when this is the last handle to the data; otherwise
    /// the image is handed back unchanged.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(inner) => Ok(ImageMut { inner }),
            Err(inner) => Err(Image { inner }),
        }
    }

    /// Create a mutable copy of the pixel data.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: (*self.inner).clone(),
        }
    }
}

impl PixelBuffer for Image {
    fn width(&self) -> u32 {
        self.inner.width
    }

    fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> u32 {
        self.get_pixel_unchecked(x, y)
    }
}

/// Mutable ARGB image, used to build captures and icons.
#[derive(Debug, Clone)]
pub struct ImageMut {
    inner: ImageData,
}

impl ImageMut {
    /// Create a new mutable image with every pixel set to `0`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            inner: ImageData::filled(width, height, 0)?,
        })
    }

    /// Create a new mutable image with every pixel set to `argb`.
    pub fn new_filled(width: u32, height: u32, argb: u32) -> Result<Self> {
        Ok(Self {
            inner: ImageData::filled(width, height, argb)?,
        })
    }

    /// Get the width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Raw row-major pixel data.
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Mutable raw row-major pixel data.
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Set every pixel inside `rect` (clipped to the image) to `argb`.
    pub fn fill_rect(&mut self, rect: Rect, argb: u32) {
        let bounds = Rect::new_unchecked(0, 0, self.width() as i32, self.height() as i32);
        let Some(clip) = rect.intersect(&bounds) else {
            return;
        };
        for y in clip.y..clip.bottom() {
            for x in clip.x..clip.right() {
                self.set_pixel_unchecked(x as u32, y as u32, argb);
            }
        }
    }

    /// Draw another buffer with its top-left corner at `(x, y)`.
    ///
    /// Pixels falling outside this image are dropped.
    pub fn blit<B: PixelBuffer + ?Sized>(&mut self, src: &B, x: i32, y: i32) {
        for sy in 0..src.height() {
            for sx in 0..src.width() {
                let dx = x + sx as i32;
                let dy = y + sy as i32;
                if dx >= 0 && dy >= 0 && (dx as u32) < self.width() && (dy as u32) < self.height()
                {
                    self.set_pixel_unchecked(dx as u32, dy as u32, src.pixel(sx, sy));
                }
            }
        }
    }
}

impl PixelBuffer for ImageMut {
    fn width(&self) -> u32 {
        self.inner.width
    }

    fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> u32 {
        self.get_pixel_unchecked(x, y)
    }
}

impl From<ImageMut> for Image {
    fn from(img: ImageMut) -> Self {
        Image {
            inner: Arc::new(img.inner),
        }
    }
}
