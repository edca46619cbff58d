//! Point - integer image coordinates
//!
//! A `Point` is both a location and a displacement vector. Matches are
//! reported as points (the top-left anchor of the match) and the locators
//! compute candidate positions by adding displacements to them.

use crate::rect::Rect;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Integer (x, y) coordinate.
///
/// Ordering is lexicographic on `(x, y)`, which is the column-major raster
/// order used when indexing buffers by color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate the point by `(dx, dy)`.
    #[inline]
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Subtract a displacement vector.
    #[inline]
    pub fn minus(self, vector: Point) -> Self {
        self - vector
    }

    /// Euclidean distance to another point, truncated to an integer.
    pub fn distance(self, other: Point) -> i32 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt() as i32
    }

    /// Rectangle of the given size anchored at this point.
    pub fn to_rect(self, w: i32, h: i32) -> Rect {
        Rect::new_unchecked(self.x, self.y, w, h)
    }

    /// Convert unsigned buffer coordinates to a point.
    #[inline]
    pub fn from_xy(x: u32, y: u32) -> Self {
        Self::new(x as i32, y as i32)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
