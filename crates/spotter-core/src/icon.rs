//! Icon - a named sample image
//!
//! Icons are the small reference images searched for inside a capture.
//! Pixels painted in the mask color (pure magenta by default) are
//! wildcards: they match anything.

use crate::MASK_COLOR;
use crate::buffer::{PixelBuffer, Sample};
use crate::pixmap::Image;
use crate::point::Point;
use crate::rect::Rect;

/// Named sample image with a mask color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    name: String,
    image: Image,
    mask_color: u32,
}

impl Icon {
    /// Create an icon using the default mask color.
    pub fn new(name: impl Into<String>, image: Image) -> Self {
        Self {
            name: name.into(),
            image,
            mask_color: MASK_COLOR,
        }
    }

    /// Use a different "don't care" color.
    pub fn with_mask_color(mut self, argb: u32) -> Self {
        self.mask_color = argb;
        self
    }

    /// Icon name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Underlying pixels
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// `(width, height)`
    pub fn size(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    /// Bounds of the icon anchored at the origin
    pub fn bounds(&self) -> Rect {
        self.image.bounds()
    }

    /// Center of the icon relative to its own top-left corner
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Whether every pixel is the mask color
    pub fn is_fully_masked(&self) -> bool {
        self.image.data().iter().all(|&p| p == self.mask_color)
    }
}

impl PixelBuffer for Icon {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> u32 {
        self.image.get_pixel_unchecked(x, y)
    }
}

impl Sample for Icon {
    fn name(&self) -> &str {
        &self.name
    }

    fn mask_color(&self) -> u32 {
        self.mask_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_geometry() {
        let icon = Icon::new("button", Image::new(9, 4).unwrap());
        assert_eq!(icon.size(), (9, 4));
        assert_eq!(icon.center(), Point::new(4, 2));
        assert_eq!(Sample::mask_color(&icon), MASK_COLOR);
    }

    #[test]
    fn test_custom_mask() {
        let icon = Icon::new("blank", Image::new_filled(2, 2, 5).unwrap()).with_mask_color(5);
        assert!(icon.is_fully_masked());
        assert!(icon.is_masked(1, 1));
    }
}
