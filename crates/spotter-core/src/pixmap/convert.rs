//! Conversions between spotter images and the `image` crate
//!
//! Captures and icons are usually decoded with the `image` crate. An
//! `RgbaImage` can be searched directly through its [`PixelBuffer`] impl,
//! or copied once into an [`Image`] when it will be searched many times.

use super::Image;
use crate::buffer::PixelBuffer;
use crate::color;
use crate::error::Result;
use ::image::{Rgba, RgbaImage};

#[inline]
fn rgba_to_argb(px: &Rgba<u8>) -> u32 {
    let [r, g, b, a] = px.0;
    color::compose_argb(a, r, g, b)
}

impl PixelBuffer for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> u32 {
        rgba_to_argb(self.get_pixel(x, y))
    }
}

impl Image {
    /// Copy an `image::RgbaImage` into a new ARGB image.
    ///
    /// # Errors
    ///
    /// Returns an error if the source image is empty.
    pub fn from_rgba_image(src: &RgbaImage) -> Result<Image> {
        let data = src.pixels().map(rgba_to_argb).collect();
        Image::from_argb(src.width(), src.height(), data)
    }

    /// Convert to an `image::RgbaImage`.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            let p = self.get_pixel_unchecked(x, y);
            Rgba([
                color::red(p),
                color::green(p),
                color::blue(p),
                color::alpha(p),
            ])
        })
    }
}
