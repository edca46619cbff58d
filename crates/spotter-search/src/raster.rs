//! Raster walks shared by the locators
//!
//! Indexing and sample walks both go column by column: x in the outer
//! loop, y in the inner one.

use crate::error::{SearchError, SearchResult};
use spotter_core::{PixelBuffer, Point, Sample};
use std::time::Duration;

/// Locate calls slower than this are reported at warn level
const SLOW_LOCATE: Duration = Duration::from_millis(100);

/// Positions of a `width` x `height` raster in column-major order.
pub(crate) fn column_major(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    (0..width).flat_map(move |x| (0..height).map(move |y| (x, y)))
}

/// Column-major positions starting at `from` (inclusive).
pub(crate) fn column_major_from(
    width: u32,
    height: u32,
    from: Point,
) -> impl Iterator<Item = (u32, u32)> {
    let skip = from.x as usize * height as usize + from.y as usize;
    column_major(width, height).skip(skip)
}

/// First non-mask pixel of a sample in column-major order.
///
/// # Errors
///
/// Returns [`SearchError::AllMaskedSample`] if every pixel is masked.
pub(crate) fn find_anchor<S: Sample + ?Sized>(sample: &S) -> SearchResult<Point> {
    column_major(sample.width(), sample.height())
        .find(|&(x, y)| !sample.is_masked(x, y))
        .map(|(x, y)| Point::from_xy(x, y))
        .ok_or_else(|| SearchError::AllMaskedSample {
            name: sample.name().to_string(),
        })
}

/// Whether a sample can fit inside a base buffer at all.
pub(crate) fn fits<B, S>(base: &B, sample: &S) -> bool
where
    B: PixelBuffer + ?Sized,
    S: PixelBuffer + ?Sized,
{
    sample.width() <= base.width() && sample.height() <= base.height()
}

/// Log the outcome of one locate call.
pub(crate) fn report(strategy: &str, name: &str, found: usize, elapsed: Duration) {
    if elapsed > SLOW_LOCATE {
        log::warn!(
            "{strategy}: locating {name:?} took {elapsed:?} ({found} found); consider a sample whose first pixel color is rare"
        );
    } else {
        log::debug!("{strategy}: located {found} x {name:?} in {elapsed:?}");
    }
}
