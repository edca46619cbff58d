//! Brute-force location with a color tolerance
//!
//! [`ToleranceScanLocator`] tests every base position, column by column,
//! against the whole sample. A sample pixel matches a base pixel when the
//! colors are equal or their squared RGB distance is at most `tolerance²`.
//! Mask-colored sample pixels match anything.
//!
//! A hit moves the scan `sample width - 1` columns to the right without
//! restarting the column: the following rows are tested at the shifted x,
//! and the next column after that is one further right. Horizontally
//! overlapping repeats of one occurrence are therefore reported once, while
//! a repeat lower down may still be reported, at the shifted column.

use crate::error::SearchResult;
use crate::raster;
use spotter_core::{PixelBuffer, Point, Sample, color};
use std::time::Instant;

/// Locates samples by scanning every base position.
#[derive(Debug, Clone)]
pub struct ToleranceScanLocator<B> {
    base: B,
    tolerance: u32,
}

impl<B: PixelBuffer> ToleranceScanLocator<B> {
    /// Tolerance used by [`ToleranceScanLocator::new`]
    pub const DEFAULT_TOLERANCE: u32 = 1;

    /// Create a locator over `base` with the default tolerance.
    pub fn new(base: B) -> Self {
        Self {
            base,
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }

    /// Set the per-pixel color distance tolerance.
    pub fn with_tolerance(mut self, tolerance: u32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Per-pixel color distance tolerance
    pub fn tolerance(&self) -> u32 {
        self.tolerance
    }

    /// The scanned buffer
    pub fn base(&self) -> &B {
        &self.base
    }

    /// Find every occurrence of `sample`.
    ///
    /// Returns top-left corners in column-major order. A sample larger
    /// than the base yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::AllMaskedSample`](crate::SearchError::AllMaskedSample)
    /// if the sample has no non-mask pixel.
    pub fn locate<S: Sample + ?Sized>(&self, sample: &S) -> SearchResult<Vec<Point>> {
        let start = Instant::now();
        let anchor = raster::find_anchor(sample)?;
        if !raster::fits(&self.base, sample) {
            return Ok(Vec::new());
        }

        let (w, h) = self.base.dimensions();
        let mut found = Vec::new();
        let mut x = 0;
        while x < w {
            for y in 0..h {
                if self.window_matches(x, y, sample, anchor) {
                    found.push(Point::from_xy(x, y));
                    // The rest of the column is scanned at the shifted x
                    x += sample.width() - 1;
                }
            }
            x += 1;
        }

        raster::report("tolerance scan", sample.name(), found.len(), start.elapsed());
        Ok(found)
    }

    /// Test the sample with its top-left corner at `(x, y)`.
    ///
    /// Sample pixels are visited in column-major order from the anchor; the
    /// first failing pixel ends the test.
    fn window_matches<S: Sample + ?Sized>(&self, x: u32, y: u32, sample: &S, anchor: Point) -> bool {
        let (w, h) = self.base.dimensions();
        let limit = u64::from(self.tolerance) * u64::from(self.tolerance);
        for (sx, sy) in raster::column_major_from(sample.width(), sample.height(), anchor) {
            let expected = sample.pixel(sx, sy);
            if expected == sample.mask_color() {
                continue;
            }
            let (bx, by) = (x + sx, y + sy);
            if bx >= w || by >= h {
                return false;
            }
            let actual = self.base.pixel(bx, by);
            if expected == actual {
                continue;
            }
            if u64::from(color::distance_squared(expected, actual)) > limit {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchError;
    use spotter_core::{Icon, Image, ImageMut, MASK_COLOR, Rect};

    const BG: u32 = 0xFF10_1010;
    const DOT: u32 = 0xFF80_4020;

    fn dots(at: &[(i32, i32)]) -> Image {
        let mut m = ImageMut::new_filled(30, 20, BG).unwrap();
        for &(x, y) in at {
            m.fill_rect(Rect::new_unchecked(x, y, 2, 2), DOT);
        }
        m.into()
    }

    fn dot_icon(argb: u32) -> Icon {
        let mut m = ImageMut::new_filled(4, 4, BG).unwrap();
        m.fill_rect(Rect::new_unchecked(1, 1, 2, 2), argb);
        Icon::new("dot", m.into())
    }

    #[test]
    fn test_exact_hits_in_column_order() {
        let base = dots(&[(20, 3), (5, 10)]);
        let found = ToleranceScanLocator::new(&base).locate(&dot_icon(DOT)).unwrap();
        assert_eq!(found, vec![Point::new(4, 9), Point::new(19, 2)]);
    }

    #[test]
    fn test_tolerance() {
        let base = dots(&[(5, 10)]);
        // Distance² to DOT is 3² + 4² = 25
        let shifted = dot_icon(color::compose_rgb(0x83, 0x44, 0x20));
        assert!(ToleranceScanLocator::new(&base).locate(&shifted).unwrap().is_empty());
        let loose = ToleranceScanLocator::new(&base).with_tolerance(5);
        assert_eq!(loose.locate(&shifted).unwrap(), vec![Point::new(4, 9)]);
        let tight = ToleranceScanLocator::new(&base).with_tolerance(4);
        assert!(tight.locate(&shifted).unwrap().is_empty());
    }

    #[test]
    fn test_skip_after_hit_shifts_column() {
        let base = Image::new_filled(8, 3, BG).unwrap();
        let icon = Icon::new("flat", Image::new_filled(3, 2, BG).unwrap());
        let found = ToleranceScanLocator::new(&base).locate(&icon).unwrap();
        // Hit at (0, 0) moves row 1 to x = 2, hit there moves row 2 to
        // x = 4 where the icon no longer fits; the next column is 5
        assert_eq!(
            found,
            vec![Point::new(0, 0), Point::new(2, 1), Point::new(5, 0)]
        );
    }

    #[test]
    fn test_masked_pixels_may_hang_over_the_edge() {
        let base = dots(&[(28, 0)]);
        let mut m = ImageMut::new_filled(3, 2, MASK_COLOR).unwrap();
        m.fill_rect(Rect::new_unchecked(0, 0, 2, 2), DOT);
        let icon = Icon::new("edge", m.into());
        let found = ToleranceScanLocator::new(&base).locate(&icon).unwrap();
        assert_eq!(found, vec![Point::new(28, 0)]);
    }

    #[test]
    fn test_invalid_samples() {
        let base = dots(&[]);
        let locator = ToleranceScanLocator::new(base.clone());
        let blank = Icon::new("blank", Image::new_filled(2, 2, MASK_COLOR).unwrap());
        assert!(matches!(
            locator.locate(&blank),
            Err(SearchError::AllMaskedSample { .. })
        ));
        let big = Icon::new("big", Image::new_filled(31, 2, BG).unwrap());
        assert!(locator.locate(&big).unwrap().is_empty());
    }
}
