//! Rect - rectangle regions
//!
//! Rectangles describe icon bounds, diff regions and sub-windows of a
//! captured buffer.

use crate::error::{Error, Result};
use crate::point::Point;

/// A rectangle region
///
/// A simple `Copy` type: origin plus width and height. A rectangle with
/// zero width or height is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Rect {
    /// Create a new rectangle
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "rectangle dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a rectangle without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Smallest rectangle covering the inclusive cell range
    /// `[min_x, max_x] x [min_y, max_y]`.
    ///
    /// Degenerate ranges (`min > max`) yield an empty rectangle.
    pub fn from_extents(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        if min_x > max_x || min_y > max_y {
            return Self::new_unchecked(min_x, min_y, 0, 0);
        }
        Self::new_unchecked(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
    }

    /// Top-left corner
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Center point (integer division)
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Check if the rectangle is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Compute the intersection of two rectangles
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect {
                x,
                y,
                w: right - x,
                h: bottom - y,
            })
        } else {
            None
        }
    }

    /// Move the rectangle by a displacement vector
    pub fn translate(&self, v: Point) -> Rect {
        Rect::new_unchecked(self.x + v.x, self.y + v.y, self.w, self.h)
    }
}
