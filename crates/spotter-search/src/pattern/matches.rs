//! Lazy, splittable enumeration of pattern matches
//!
//! Window positions are addressed by a single offset `y * width + x` over
//! the image. An enumerator owns an inclusive offset range and walks it in
//! row-major order; whenever the window's right edge reaches the image's
//! right edge, the cursor jumps to the start of the next row.

use super::{Correspondence, PatternMatcher};
use spotter_core::{PixelBuffer, Point, Sample};
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

/// Ranges spanning fewer offsets than this are not split
const MIN_SPLIT: usize = 3;

/// Pull-based enumerator over the matches of a [`PatternMatcher`].
///
/// Each enumerator owns its cursor, its end offset and its correspondence
/// scratch space; the matcher is only read. Two enumerators obtained by
/// [`try_split`](Self::try_split) can be advanced on different threads.
///
/// Dropping the enumerator is all it takes to stop early.
#[derive(Debug)]
pub struct PatternMatches<'m, B, S> {
    matcher: &'m PatternMatcher<B, S>,
    offset: usize,
    /// Last offset to test (inclusive)
    end: usize,
    /// The pattern fits inside the image
    fits: bool,
    scratch: Correspondence,
}

impl<'m, B: PixelBuffer, S: Sample> PatternMatches<'m, B, S> {
    /// Enumerator over every valid window position of `matcher`.
    pub fn new(matcher: &'m PatternMatcher<B, S>) -> Self {
        let fits = matcher.pattern_fits();
        let end = if fits {
            let (w, h) = matcher.image().dimensions();
            let (pw, ph) = matcher.pattern().dimensions();
            (h - ph) as usize * w as usize + (w - pw) as usize
        } else {
            0
        };
        Self {
            matcher,
            offset: 0,
            end,
            fits,
            scratch: Correspondence::default(),
        }
    }

    fn with_range(matcher: &'m PatternMatcher<B, S>, offset: usize, end: usize) -> Self {
        Self {
            matcher,
            offset,
            end,
            fits: true,
            scratch: Correspondence::default(),
        }
    }

    /// Offsets this enumerator has yet to test, `None` once exhausted.
    pub fn offset_range(&self) -> Option<RangeInclusive<usize>> {
        self.has_work().then(|| self.offset..=self.end)
    }

    #[inline]
    fn has_work(&self) -> bool {
        self.fits && self.offset <= self.end
    }

    fn width(&self) -> usize {
        self.matcher.image().width() as usize
    }

    fn to_point(&self, offset: usize) -> Point {
        let w = self.width();
        Point::new((offset % w) as i32, (offset / w) as i32)
    }

    /// Move the cursor to the next window position.
    fn step(&mut self) {
        let w = self.width();
        let pw = self.matcher.pattern().width() as usize;
        let (x, y) = (self.offset % w, self.offset / w);
        if x >= w - pw {
            self.offset = (y + 1) * w;
        } else {
            self.offset += 1;
        }
    }

    /// Produce the next match, or `None` once the range is exhausted.
    pub fn advance(&mut self) -> Option<Point> {
        while self.has_work() {
            let at = self.to_point(self.offset);
            self.step();
            if self
                .matcher
                .test_with(at.x as u32, at.y as u32, &mut self.scratch)
            {
                return Some(at);
            }
        }
        None
    }

    /// Split off the first half of the remaining range.
    ///
    /// With `mid` the midpoint of the remaining offsets, the returned
    /// enumerator covers `[offset, mid]` and `self` keeps the positions
    /// after `mid`. The first half's matches followed by the second half's
    /// are exactly the matches of the unsplit range.
    ///
    /// Returns `None` when fewer than 3 offsets remain or the pattern does
    /// not fit.
    pub fn try_split(&mut self) -> Option<Self> {
        if !self.has_work() {
            return None;
        }
        let remaining = self.end - self.offset;
        if remaining < MIN_SPLIT {
            return None;
        }
        let mid = self.offset + remaining / 2;
        let prefix = Self::with_range(self.matcher, self.offset, mid);
        self.offset = mid;
        self.step();
        Some(prefix)
    }
}

impl<B: PixelBuffer, S: Sample> Iterator for PatternMatches<'_, B, S> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        self.advance()
    }
}

impl<B: PixelBuffer, S: Sample> FusedIterator for PatternMatches<'_, B, S> {}
