//! Exact location through a color index
//!
//! [`ColorIndex`] maps every ARGB value of a base buffer to the positions
//! where it occurs. [`ColorIndexLocator`] uses it to find a sample by
//! translation-consistent filtering:
//!
//! 1. the sample's first non-mask pixel (column-major) is the anchor; every
//!    base position holding the anchor's color is a candidate
//! 2. each further non-mask sample pixel, at displacement `d` from the
//!    anchor, keeps only the candidates `c` with its color at `c + d`
//! 3. surviving candidates, moved back by the anchor offset, are the
//!    top-left corners of the matches; corners left of or above the base
//!    are dropped
//!
//! Colors must be equal. Recolored or antialiased samples will not be
//! found; use [`ToleranceScanLocator`](crate::ToleranceScanLocator) or
//! [`PatternMatcher`](crate::PatternMatcher) for those.
//!
//! The first candidate list has the size of the anchor color's population,
//! so samples whose first non-mask pixel has a rare color are located
//! fastest.

use crate::error::SearchResult;
use crate::raster;
use spotter_core::{PixelBuffer, Point, Sample};
use std::borrow::Cow;
use std::collections::HashMap;
use std::time::Instant;

/// Color to positions map of one base buffer.
///
/// Every position of the base appears in exactly one list, under its own
/// color. Lists are in column-major order, which is ascending [`Point`]
/// order.
#[derive(Debug, Clone, Default)]
pub struct ColorIndex {
    width: u32,
    height: u32,
    entries: HashMap<u32, Vec<Point>>,
}

impl ColorIndex {
    /// Index every pixel of `base`.
    pub fn build<B: PixelBuffer + ?Sized>(base: &B) -> Self {
        let start = Instant::now();
        let mut entries: HashMap<u32, Vec<Point>> = HashMap::new();
        for (x, y) in raster::column_major(base.width(), base.height()) {
            entries
                .entry(base.pixel(x, y))
                .or_default()
                .push(Point::from_xy(x, y));
        }
        log::debug!(
            "indexed {}x{} buffer: {} colors in {:?}",
            base.width(),
            base.height(),
            entries.len(),
            start.elapsed()
        );
        Self {
            width: base.width(),
            height: base.height(),
            entries,
        }
    }

    /// Size of the indexed buffer
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of distinct colors
    pub fn color_count(&self) -> usize {
        self.entries.len()
    }

    /// Positions holding `argb`, in column-major order.
    pub fn positions(&self, argb: u32) -> &[Point] {
        self.entries
            .get(&argb)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether the pixel at `p` has color `argb`.
    pub fn contains(&self, argb: u32, p: Point) -> bool {
        self.positions(argb).binary_search(&p).is_ok()
    }
}

/// Locates samples by exact color through a [`ColorIndex`].
#[derive(Debug, Clone)]
pub struct ColorIndexLocator {
    index: ColorIndex,
}

impl ColorIndexLocator {
    /// Build the index of `base`.
    ///
    /// The locator is tied to this one buffer; build a new one for a new
    /// capture.
    pub fn new<B: PixelBuffer + ?Sized>(base: &B) -> Self {
        Self {
            index: ColorIndex::build(base),
        }
    }

    /// Use an index built earlier.
    pub fn from_index(index: ColorIndex) -> Self {
        Self { index }
    }

    /// The underlying index
    pub fn index(&self) -> &ColorIndex {
        &self.index
    }

    /// Find every exact occurrence of `sample`.
    ///
    /// Returns top-left corners in column-major order of the anchor pixel.
    /// Mask-colored sample pixels match anything. A sample larger than the
    /// base yields an empty list.
    ///
    /// Every returned corner lies inside the base. Masked sample pixels may
    /// hang over the right and bottom edges, as in
    /// [`ToleranceScanLocator`](crate::ToleranceScanLocator); non-mask pixels
    /// never leave the base.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::AllMaskedSample`](crate::SearchError::AllMaskedSample)
    /// if the sample has no non-mask pixel.
    pub fn locate<S: Sample + ?Sized>(&self, sample: &S) -> SearchResult<Vec<Point>> {
        let start = Instant::now();
        let anchor = raster::find_anchor(sample)?;
        let (w, h) = self.index.dimensions();
        if sample.width() > w || sample.height() > h {
            return Ok(Vec::new());
        }

        let (anchor_x, anchor_y) = (anchor.x as u32, anchor.y as u32);
        let mut candidates = Cow::Borrowed(self.index.positions(sample.pixel(anchor_x, anchor_y)));

        for (sx, sy) in raster::column_major_from(sample.width(), sample.height(), anchor).skip(1)
        {
            if candidates.is_empty() {
                break;
            }
            if sample.is_masked(sx, sy) {
                continue;
            }
            let d = Point::from_xy(sx, sy) - anchor;
            let entry = self.index.positions(sample.pixel(sx, sy));
            candidates = Cow::Owned(
                candidates
                    .iter()
                    .copied()
                    .filter(|&c| entry.binary_search(&(c + d)).is_ok())
                    .collect(),
            );
        }

        // Leading mask pixels may not hang over the left or top edge
        let found: Vec<Point> = candidates
            .iter()
            .map(|&c| c - anchor)
            .filter(|p| p.x >= 0 && p.y >= 0)
            .collect();
        raster::report("color index", sample.name(), found.len(), start.elapsed());
        Ok(found)
    }
}
