//! Label matrix
//!
//! A [`LabelMatrix`] holds one `u32` cell per pixel of two compared images.
//! Cell values follow a fixed convention:
//!
//! - [`LabelMatrix::EQUAL`] (0) - the pixels are equal under the tolerance
//! - [`LabelMatrix::DIFFERENT`] (1) - marked different, not yet labeled
//! - [`LabelMatrix::FIRST_REGION`] (2) and up - id of a labeled region

use crate::error::{RegionError, RegionResult};
use spotter_core::Rect;
use std::collections::BTreeMap;

/// Row-major grid of cell labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMatrix {
    width: u32,
    height: u32,
    cells: Vec<u32>,
}

impl LabelMatrix {
    /// Cell value for pixels that are equal
    pub const EQUAL: u32 = 0;
    /// Cell value for pixels that differ and have no region yet
    pub const DIFFERENT: u32 = 1;
    /// First region id handed out by labeling
    pub const FIRST_REGION: u32 = 2;

    /// Create a matrix with every cell set to [`Self::EQUAL`].
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Self::EQUAL; width as usize * height as usize],
        }
    }

    /// Wrap row-major cell values.
    ///
    /// # Errors
    ///
    /// Returns a core `DataLength` error if `cells.len() != width * height`.
    pub fn from_cells(width: u32, height: u32, cells: Vec<u32>) -> RegionResult<Self> {
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(RegionError::Core(spotter_core::Error::DataLength {
                expected,
                actual: cells.len(),
            }));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Get the width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw row-major cells.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Cell value at a signed position, `None` outside the matrix.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set a cell.
    ///
    /// Returns `false` and leaves the matrix untouched if the position is
    /// outside the matrix.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: u32) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Number of cells holding `value`.
    pub fn count(&self, value: u32) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    /// Bounding box of every region id, in ascending id order.
    ///
    /// Boxes are inclusive of both extreme cells, so a single cell yields a
    /// 1x1 rectangle. Computed in a single pass over the matrix.
    pub fn region_bounds(&self) -> Vec<(u32, Rect)> {
        let mut extents: BTreeMap<u32, (i32, i32, i32, i32)> = BTreeMap::new();
        for y in 0..self.height as i32 {
            let row = &self.cells[y as usize * self.width as usize..][..self.width as usize];
            for (x, &id) in row.iter().enumerate() {
                if id < Self::FIRST_REGION {
                    continue;
                }
                let x = x as i32;
                extents
                    .entry(id)
                    .and_modify(|e| {
                        e.0 = e.0.min(x);
                        e.1 = e.1.min(y);
                        e.2 = e.2.max(x);
                        e.3 = e.3.max(y);
                    })
                    .or_insert((x, y, x, y));
            }
        }
        extents
            .into_iter()
            .map(|(id, (x0, y0, x1, y1))| (id, Rect::from_extents(x0, y0, x1, y1)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_bounds() {
        let mut m = LabelMatrix::new(3, 2);
        assert!(m.set(2, 1, 5));
        assert!(!m.set(3, 0, 5));
        assert_eq!(m.get(2, 1), Some(5));
        assert_eq!(m.get(-1, 0), None);
        assert_eq!(m.count(LabelMatrix::EQUAL), 5);
    }

    #[test]
    fn test_from_cells_checks_length() {
        assert!(LabelMatrix::from_cells(2, 2, vec![0; 4]).is_ok());
        assert!(matches!(
            LabelMatrix::from_cells(2, 2, vec![0; 5]),
            Err(RegionError::Core(spotter_core::Error::DataLength {
                expected: 4,
                actual: 5
            }))
        ));
    }

    #[test]
    fn test_region_bounds() {
        #[rustfmt::skip]
        let m = LabelMatrix::from_cells(5, 4, vec![
            0, 2, 0, 0, 0,
            0, 2, 2, 0, 3,
            0, 0, 0, 0, 0,
            1, 0, 0, 0, 0,
        ])
        .unwrap();
        let bounds = m.region_bounds();
        assert_eq!(
            bounds,
            vec![
                (2, Rect::new_unchecked(1, 0, 2, 2)),
                (3, Rect::new_unchecked(4, 1, 1, 1)),
            ]
        );
    }
}
