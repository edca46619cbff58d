//! Flood fill on label matrices
//!
//! Both fillers relabel the 8-connected region of cells holding one value,
//! starting from a seed cell. They are interchangeable and produce
//! identical matrices for every input:
//!
//! - [`ScanlineFloodFill`] - iterative, explicit stack of row seeds. Use
//!   this one for real captures.
//! - [`RecursiveFloodFill`] - depth-first recursion over the 8 neighbors.
//!   Recursion depth grows with the region size, so it is only suited to
//!   small matrices and to cross-checking the scanline filler in tests.

use crate::matrix::LabelMatrix;

/// Offsets of the 8 neighbors of a cell
const NEIGHBORS_8: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A connected-region relabeling algorithm.
pub trait FloodFill {
    /// Replace the 8-connected region of `searched` cells reachable from
    /// `(x, y)` with `replacement`.
    ///
    /// Does nothing if `searched == replacement`, if the seed is outside the
    /// matrix, or if the seed cell does not hold `searched`.
    ///
    /// Returns the number of relabeled cells.
    fn fill(&self, matrix: &mut LabelMatrix, x: i32, y: i32, searched: u32, replacement: u32)
    -> usize;
}

/// Depth-first recursive flood fill.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveFloodFill;

impl RecursiveFloodFill {
    fn spread(matrix: &mut LabelMatrix, x: i32, y: i32, searched: u32, replacement: u32) -> usize {
        if matrix.get(x, y) != Some(searched) {
            return 0;
        }
        matrix.set(x, y, replacement);
        let mut filled = 1;
        for (dx, dy) in NEIGHBORS_8 {
            filled += Self::spread(matrix, x + dx, y + dy, searched, replacement);
        }
        filled
    }
}

impl FloodFill for RecursiveFloodFill {
    fn fill(
        &self,
        matrix: &mut LabelMatrix,
        x: i32,
        y: i32,
        searched: u32,
        replacement: u32,
    ) -> usize {
        if searched == replacement {
            return 0;
        }
        Self::spread(matrix, x, y, searched, replacement)
    }
}

/// Iterative scanline flood fill.
///
/// Each popped seed is extended left and right along its row. The rows
/// above and below are then scanned over the span widened by one cell on
/// each side (diagonal neighbors), pushing one seed per run of `searched`
/// cells. Stack depth is bounded by the region's perimeter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanlineFloodFill;

impl FloodFill for ScanlineFloodFill {
    fn fill(
        &self,
        matrix: &mut LabelMatrix,
        x: i32,
        y: i32,
        searched: u32,
        replacement: u32,
    ) -> usize {
        if searched == replacement || matrix.get(x, y) != Some(searched) {
            return 0;
        }

        let mut filled = 0;
        let mut stack = vec![(x, y)];
        while let Some((sx, sy)) = stack.pop() {
            // Seeds can be relabeled by an earlier span before they are popped
            if matrix.get(sx, sy) != Some(searched) {
                continue;
            }

            let mut left = sx;
            while matrix.get(left - 1, sy) == Some(searched) {
                left -= 1;
            }
            let mut right = sx;
            while matrix.get(right + 1, sy) == Some(searched) {
                right += 1;
            }
            for cx in left..=right {
                matrix.set(cx, sy, replacement);
            }
            filled += (right - left + 1) as usize;

            for ny in [sy - 1, sy + 1] {
                let mut in_run = false;
                for cx in left - 1..=right + 1 {
                    if matrix.get(cx, ny) == Some(searched) {
                        if !in_run {
                            stack.push((cx, ny));
                            in_run = true;
                        }
                    } else {
                        in_run = false;
                    }
                }
            }
        }
        filled
    }
}

/// Selects a flood fill implementation at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FloodFillKind {
    /// [`RecursiveFloodFill`]
    Recursive,
    /// [`ScanlineFloodFill`]
    #[default]
    Scanline,
}

impl FloodFill for FloodFillKind {
    fn fill(
        &self,
        matrix: &mut LabelMatrix,
        x: i32,
        y: i32,
        searched: u32,
        replacement: u32,
    ) -> usize {
        match self {
            FloodFillKind::Recursive => RecursiveFloodFill.fill(matrix, x, y, searched, replacement),
            FloodFillKind::Scanline => ScanlineFloodFill.fill(matrix, x, y, searched, replacement),
        }
    }
}
