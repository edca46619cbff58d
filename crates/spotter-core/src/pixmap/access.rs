//! Pixel access functions
//!
//! Getting and setting individual ARGB pixels. Data is row-major, one
//! `u32` per pixel, so the index of `(x, y)` is `y * width + x`.

use super::{Image, ImageMut};
use crate::error::{Error, Result};

#[inline]
fn index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

impl Image {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is outside the pixel data.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[index(self.inner.width, x, y)]
    }
}

impl ImageMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[index(self.inner.width, x, y)]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, argb: u32) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_pixel_unchecked(x, y, argb);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is outside the pixel data.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, argb: u32) {
        let i = index(self.inner.width, x, y);
        self.inner.data[i] = argb;
    }
}
