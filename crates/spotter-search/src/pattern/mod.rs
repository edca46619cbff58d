//! Recolor-invariant pattern matching
//!
//! [`PatternMatcher`] decides whether a window of an image shows a pattern
//! up to a consistent recoloring. Instead of comparing colors, it builds a
//! one-to-one correspondence between pattern colors and image colors while
//! walking the window; the window matches when the correspondence never
//! contradicts itself.
//!
//! Mask-colored pattern pixels are wildcards, with one restriction: an
//! image color seen under the mask may not also take part in the
//! correspondence, and the other way round. This keeps masked background
//! from aliasing matched content.
//!
//! Matches are produced lazily by [`PatternMatches`], which can be split
//! into independent halves and driven by rayon through
//! [`PatternMatcher::par_matches`].

mod matches;
mod parallel;

pub use matches::PatternMatches;
pub use parallel::ParPatternMatches;

use spotter_core::{PixelBuffer, Point, Sample};
use std::collections::{HashMap, HashSet};
use std::time::Instant;

/// Per-window color correspondence state.
///
/// Reused across windows by one enumerator; never shared between
/// enumerators.
#[derive(Debug, Default)]
pub(crate) struct Correspondence {
    /// pattern color -> image color
    forward: HashMap<u32, u32>,
    /// image color -> pattern color
    inverse: HashMap<u32, u32>,
    /// image colors seen under the mask
    ignored: HashSet<u32>,
}

impl Correspondence {
    fn clear(&mut self) {
        self.forward.clear();
        self.inverse.clear();
        self.ignored.clear();
    }
}

/// Why a window was rejected, for trace logging
#[derive(Debug, Clone, Copy)]
enum Conflict {
    /// An image color under the mask is already matched
    MaskedMatched,
    /// An image color already seen under the mask shows up unmasked
    UnmaskedIgnored,
    /// A pattern color maps to a second image color
    PatternRemapped,
    /// An image color maps to a second pattern color
    ImageRemapped,
}

/// Matches a pattern against windows of an image.
///
/// # Examples
///
/// ```
/// use spotter_core::{Icon, Image, ImageMut, Point, Rect};
/// use spotter_search::PatternMatcher;
///
/// let mut canvas = ImageMut::new_filled(20, 10, 0xFF00_0000).unwrap();
/// canvas.fill_rect(Rect::new_unchecked(12, 4, 2, 3), 0xFF00_FF00);
/// let image: Image = canvas.into();
///
/// // Same shape, other colors
/// let mut shape = ImageMut::new_filled(4, 5, 0xFFFF_FFFF).unwrap();
/// shape.fill_rect(Rect::new_unchecked(1, 1, 2, 3), 0xFF00_00FF);
/// let icon = Icon::new("bar", shape.into());
///
/// let matcher = PatternMatcher::new(&image, &icon);
/// assert_eq!(matcher.find_all(), vec![Point::new(11, 3)]);
/// ```
#[derive(Debug, Clone)]
pub struct PatternMatcher<B, S> {
    image: B,
    pattern: S,
}

impl<B: PixelBuffer, S: Sample> PatternMatcher<B, S> {
    /// Create a matcher for `pattern` inside `image`.
    pub fn new(image: B, pattern: S) -> Self {
        Self { image, pattern }
    }

    /// The searched image
    pub fn image(&self) -> &B {
        &self.image
    }

    /// The pattern
    pub fn pattern(&self) -> &S {
        &self.pattern
    }

    /// Whether the pattern fits inside the image at all
    pub fn pattern_fits(&self) -> bool {
        self.pattern.width() <= self.image.width() && self.pattern.height() <= self.image.height()
    }

    /// Test the window whose top-left corner is `(x, y)`.
    ///
    /// Returns `false` if the pattern does not fit there.
    pub fn test_pattern(&self, x: u32, y: u32) -> bool {
        self.test_with(x, y, &mut Correspondence::default())
    }

    pub(crate) fn test_with(&self, x: u32, y: u32, scratch: &mut Correspondence) -> bool {
        let (pw, ph) = self.pattern.dimensions();
        if !self.pattern_fits() || x > self.image.width() - pw || y > self.image.height() - ph {
            return false;
        }

        scratch.clear();
        let mask = self.pattern.mask_color();
        for px in 0..pw {
            for py in 0..ph {
                let expected = self.pattern.pixel(px, py);
                let actual = self.image.pixel(x + px, y + py);
                if let Err(conflict) = scratch.pair(expected, actual, mask) {
                    log::trace!(
                        "{:?} rejected at ({}, {}): {:?} at ({}, {}), image color {:#010x}",
                        self.pattern.name(),
                        x,
                        y,
                        conflict,
                        x + px,
                        y + py,
                        actual
                    );
                    return false;
                }
            }
        }
        true
    }

    /// Lazy enumerator over every matching window, in row-major order.
    pub fn matches(&self) -> PatternMatches<'_, B, S> {
        PatternMatches::new(self)
    }

    /// Every matching window, in row-major order.
    pub fn find_all(&self) -> Vec<Point> {
        let start = Instant::now();
        let found: Vec<Point> = self.matches().collect();
        log::debug!(
            "pattern {:?}: {} matches in {:?}",
            self.pattern.name(),
            found.len(),
            start.elapsed()
        );
        found
    }
}

impl<B, S> PatternMatcher<B, S>
where
    B: PixelBuffer + Sync,
    S: Sample + Sync,
{
    /// Parallel iterator over every matching window.
    ///
    /// Work is divided by splitting the offset range, see
    /// [`PatternMatches::try_split`]. Collecting keeps row-major order.
    pub fn par_matches(&self) -> ParPatternMatches<'_, B, S> {
        ParPatternMatches::new(self.matches())
    }

    /// Every matching window, found in parallel, in row-major order.
    pub fn par_find_all(&self) -> Vec<Point> {
        use rayon::iter::ParallelIterator;

        let start = Instant::now();
        let found: Vec<Point> = self.par_matches().collect();
        log::debug!(
            "pattern {:?}: {} matches in {:?} (parallel)",
            self.pattern.name(),
            found.len(),
            start.elapsed()
        );
        found
    }
}

impl Correspondence {
    /// Record that pattern color `expected` sits over image color `actual`.
    fn pair(&mut self, expected: u32, actual: u32, mask: u32) -> Result<(), Conflict> {
        if expected == mask {
            if self.inverse.contains_key(&actual) {
                return Err(Conflict::MaskedMatched);
            }
            self.ignored.insert(actual);
            return Ok(());
        }
        if self.ignored.contains(&actual) {
            return Err(Conflict::UnmaskedIgnored);
        }
        if self.forward.get(&expected).is_some_and(|&c| c != actual) {
            return Err(Conflict::PatternRemapped);
        }
        if self.inverse.get(&actual).is_some_and(|&c| c != expected) {
            return Err(Conflict::ImageRemapped);
        }
        self.forward.insert(expected, actual);
        self.inverse.insert(actual, expected);
        Ok(())
    }
}
