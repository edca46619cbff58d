//! Choice of location strategy
//!
//! The three strategies answer "where is this sample?" under different
//! contracts, so they are kept as distinct variants rather than forced
//! behind one trait:
//!
//! | variant | precision | order of results | edges |
//! |---------|-----------|------------------|-------|
//! | [`Locator::ColorIndex`] | exact colors, mask skipped | column-major | masked pixels may hang over the right and bottom edges |
//! | [`Locator::ToleranceScan`] | RGB distance within tolerance, mask skipped | column-major, a hit shifts the rest of its column right | masked pixels may hang over the right and bottom edges |
//! | [`Locator::Pattern`] | any consistent recoloring | row-major | the whole pattern lies inside the image |
//!
//! Every returned corner lies inside the base buffer.

use crate::color_index::ColorIndexLocator;
use crate::error::SearchResult;
use crate::pattern::PatternMatcher;
use crate::tolerance::ToleranceScanLocator;
use spotter_core::{PixelBuffer, Point, Sample};

/// A location strategy bound to one base buffer.
#[derive(Debug, Clone)]
pub enum Locator<B> {
    /// Exact match through a prebuilt color index. Fastest for repeated
    /// queries against one capture; fails on any recoloring.
    ColorIndex(ColorIndexLocator),
    /// Brute-force scan with a per-pixel color tolerance. Survives mild
    /// color noise; all-mask samples are rejected.
    ToleranceScan(ToleranceScanLocator<B>),
    /// Bijective color correspondence. Survives a uniform recoloring of
    /// the sample; an all-mask sample matches every position.
    Pattern(B),
}

impl<B: PixelBuffer> Locator<B> {
    /// Index `base` for exact location.
    pub fn color_index<T: PixelBuffer + ?Sized>(base: &T) -> Self {
        Locator::ColorIndex(ColorIndexLocator::new(base))
    }

    /// Scan `base` with the given tolerance.
    pub fn tolerance_scan(base: B, tolerance: u32) -> Self {
        Locator::ToleranceScan(ToleranceScanLocator::new(base).with_tolerance(tolerance))
    }

    /// Match patterns against `base`.
    pub fn pattern(base: B) -> Self {
        Locator::Pattern(base)
    }

    /// Short name of the strategy, for logs
    pub fn strategy(&self) -> &'static str {
        match self {
            Locator::ColorIndex(_) => "color index",
            Locator::ToleranceScan(_) => "tolerance scan",
            Locator::Pattern(_) => "pattern",
        }
    }

    /// Every occurrence of `sample`, as top-left corners.
    ///
    /// # Errors
    ///
    /// The index and scan strategies return
    /// [`SearchError::AllMaskedSample`](crate::SearchError::AllMaskedSample)
    /// for a sample without any non-mask pixel.
    pub fn locate_all<S: Sample + ?Sized>(&self, sample: &S) -> SearchResult<Vec<Point>> {
        match self {
            Locator::ColorIndex(locator) => locator.locate(sample),
            Locator::ToleranceScan(locator) => locator.locate(sample),
            Locator::Pattern(base) => Ok(PatternMatcher::new(base, sample).find_all()),
        }
    }
}
