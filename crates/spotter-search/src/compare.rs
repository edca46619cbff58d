//! Pixel-by-pixel comparison of equally sized buffers

use crate::error::{SearchError, SearchResult};
use spotter_core::{PixelBuffer, Sample, color};
use std::time::Instant;

/// Compares a sample with a buffer of the same size.
///
/// Pixels that are mask-colored on either side are skipped. Other pixels
/// must be within `tolerance` squared RGB distance of each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageComparator {
    tolerance: u32,
}

impl ImageComparator {
    /// Create a comparator; `tolerance` is a squared RGB distance.
    pub fn new(tolerance: u32) -> Self {
        Self { tolerance }
    }

    /// Squared RGB distance tolerated per pixel
    pub fn tolerance(&self) -> u32 {
        self.tolerance
    }

    /// Whether `other` shows `sample`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::DimensionMismatch`] if the sizes differ.
    pub fn are_same<S, B>(&self, sample: &S, other: &B) -> SearchResult<bool>
    where
        S: Sample + ?Sized,
        B: PixelBuffer + ?Sized,
    {
        if sample.dimensions() != other.dimensions() {
            return Err(SearchError::DimensionMismatch {
                expected: sample.dimensions(),
                actual: other.dimensions(),
            });
        }

        let start = Instant::now();
        let mask = sample.mask_color();
        let (w, h) = sample.dimensions();
        for x in 0..w {
            for y in 0..h {
                let (a, b) = (sample.pixel(x, y), other.pixel(x, y));
                if a == mask || b == mask {
                    continue;
                }
                if color::distance_squared(a, b) > self.tolerance {
                    return Ok(false);
                }
            }
        }
        log::debug!("{:?} compared in {:?}", sample.name(), start.elapsed());
        Ok(true)
    }
}
