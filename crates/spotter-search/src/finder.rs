//! Geometry queries over one capture
//!
//! [`Finder`] answers the questions an automation script asks about a
//! captured screen area: where an icon is, where its middle is, which
//! rectangle two icons span, whether an icon sits at a given spot.
//!
//! Points returned by the `locate*` methods are in capture coordinates.
//! Rectangles returned by the area methods are translated by the finder's
//! offset, the capture's position on the physical screen.

use crate::compare::ImageComparator;
use crate::error::SearchResult;
use crate::locator::Locator;
use spotter_core::{PixelBuffer, Point, Rect, Sample, Window};

/// Location queries against one captured buffer.
///
/// # Examples
///
/// ```
/// use spotter_core::{Icon, Image, ImageMut, Point, Rect};
/// use spotter_search::Finder;
///
/// let mut screen = ImageMut::new_filled(50, 40, 0xFF00_0000).unwrap();
/// screen.fill_rect(Rect::new_unchecked(20, 10, 4, 4), 0xFFFF_0000);
/// let screen: Image = screen.into();
/// let button = Icon::new("button", Image::new_filled(4, 4, 0xFFFF_0000).unwrap());
///
/// let finder = Finder::color_index(screen).with_offset(Point::new(100, 0));
/// assert_eq!(finder.locate(&button).unwrap(), Some(Point::new(20, 10)));
/// assert_eq!(finder.locate_middle(&button).unwrap(), Some(Point::new(22, 12)));
/// assert!(finder.is_located_at(&button, Point::new(20, 10)).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Finder<B> {
    capture: B,
    locator: Locator<B>,
    comparator: ImageComparator,
    offset: Point,
}

impl<B: PixelBuffer + Clone> Finder<B> {
    /// Find icons by exact color through a color index of `capture`.
    pub fn color_index(capture: B) -> Self {
        let locator = Locator::color_index(&capture);
        Self::new(capture, locator)
    }

    /// Find icons by scanning `capture` with a color tolerance.
    pub fn tolerance_scan(capture: B, tolerance: u32) -> Self {
        let locator = Locator::tolerance_scan(capture.clone(), tolerance);
        Self::new(capture, locator)
    }

    /// Find icons up to a uniform recoloring.
    pub fn pattern(capture: B) -> Self {
        let locator = Locator::pattern(capture.clone());
        Self::new(capture, locator)
    }
}

impl<B: PixelBuffer> Finder<B> {
    /// Combine a capture with a locator built from the same capture.
    pub fn new(capture: B, locator: Locator<B>) -> Self {
        Self {
            capture,
            locator,
            comparator: ImageComparator::default(),
            offset: Point::ORIGIN,
        }
    }

    /// Set the capture's position on screen.
    pub fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    /// Set the comparator used by the `is_located_*` checks.
    pub fn with_comparator(mut self, comparator: ImageComparator) -> Self {
        self.comparator = comparator;
        self
    }

    /// The searched capture
    pub fn capture(&self) -> &B {
        &self.capture
    }

    /// The location strategy
    pub fn locator(&self) -> &Locator<B> {
        &self.locator
    }

    /// The capture's position on screen
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Top-left corners of every occurrence of `icon`.
    pub fn locate_all<S: Sample + ?Sized>(&self, icon: &S) -> SearchResult<Vec<Point>> {
        log::debug!("locating all {:?} ({})", icon.name(), self.locator.strategy());
        self.locator.locate_all(icon)
    }

    /// Top-left corner of the first occurrence of `icon`.
    pub fn locate<S: Sample + ?Sized>(&self, icon: &S) -> SearchResult<Option<Point>> {
        Ok(self.locate_all(icon)?.first().copied())
    }

    /// Middle of the first occurrence of `icon`.
    pub fn locate_middle<S: Sample + ?Sized>(&self, icon: &S) -> SearchResult<Option<Point>> {
        let (w, h) = icon.dimensions();
        Ok(self
            .locate(icon)?
            .map(|p| p.translate(w as i32 / 2, h as i32 / 2)))
    }

    /// Screen rectangle from the top-left corner of `upper_left` to the
    /// bottom-right corner of `lower_right`.
    ///
    /// `None` if either icon is absent. The rectangle is empty if
    /// `lower_right` does not end below and right of `upper_left`.
    pub fn locate_area<U, L>(&self, upper_left: &U, lower_right: &L) -> SearchResult<Option<Rect>>
    where
        U: Sample + ?Sized,
        L: Sample + ?Sized,
    {
        log::debug!(
            "locating area between {:?} and {:?}",
            upper_left.name(),
            lower_right.name()
        );
        let (Some(p1), Some(p2)) = (self.locate(upper_left)?, self.locate(lower_right)?) else {
            return Ok(None);
        };
        let p1 = p1 + self.offset;
        let p2 = p2.translate(lower_right.width() as i32, lower_right.height() as i32) + self.offset;
        Ok(Some(Rect::from_extents(p1.x, p1.y, p2.x - 1, p2.y - 1)))
    }

    /// Screen rectangle of `relative`, given relative to `from`.
    pub fn relative_area(&self, from: Point, relative: Rect) -> Rect {
        relative.translate(from + self.offset)
    }

    /// Screen rectangle of `relative`, given relative to the first
    /// occurrence of `icon`. `None` if the icon is absent.
    pub fn relative_area_of<S: Sample + ?Sized>(
        &self,
        icon: &S,
        relative: Rect,
    ) -> SearchResult<Option<Rect>> {
        Ok(self
            .locate(icon)?
            .map(|p| self.relative_area(p, relative)))
    }

    /// Whether `icon` is shown with its top-left corner at `at`.
    ///
    /// Positions where the icon would stick out of the capture are never
    /// a match.
    pub fn is_located_at<S: Sample + ?Sized>(&self, icon: &S, at: Point) -> SearchResult<bool> {
        let area = at.to_rect(icon.width() as i32, icon.height() as i32);
        if self.capture.bounds().intersect(&area) != Some(area) {
            return Ok(false);
        }
        let window = Window::new(&self.capture, area)?;
        self.comparator.are_same(icon, &window)
    }

    /// Whether `icon` is shown centered in `area`.
    pub fn is_located_at_center_of<S: Sample + ?Sized>(
        &self,
        icon: &S,
        area: Rect,
    ) -> SearchResult<bool> {
        let at = area.center() - icon.bounds().center();
        self.is_located_at(icon, at)
    }

    /// Whether `icon` occurs anywhere in the capture.
    pub fn is_visible<S: Sample + ?Sized>(&self, icon: &S) -> SearchResult<bool> {
        Ok(self.locate(icon)?.is_some())
    }
}
