//! Region-based image differencing
//!
//! [`RegionDiffer`] compares a sample against the area of an original image
//! it is expected to cover and reports the bounding boxes of the regions
//! that differ:
//!
//! 1. mark every differing pixel in a [`LabelMatrix`]
//! 2. label 8-connected groups of marked cells with ids from
//!    [`LabelMatrix::FIRST_REGION`], scanning rows top to bottom
//! 3. take the bounding box of each id
//! 4. drop boxes whose area does not exceed `min_area`

use crate::error::{RegionError, RegionResult};
use crate::floodfill::{FloodFill, FloodFillKind};
use crate::matrix::LabelMatrix;
use spotter_core::{PixelBuffer, Point, Rect, Window, color};
use std::time::Instant;

/// Largest possible RGB distance, `sqrt(3 * 255^2)`
const MAX_RGB_DISTANCE: f64 = 441.672_955_930_063_7;

/// Options for [`RegionDiffer`]
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Tolerated color distance as a fraction of the largest RGB distance,
    /// in `[0, 1)`. `0` compares full ARGB values for equality.
    pub tolerance: f64,
    /// Regions whose bounding box area is not above this are dropped
    pub min_area: i64,
    /// Flood fill used for labeling
    pub flood_fill: FloodFillKind,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            tolerance: 0.0,
            min_area: 10,
            flood_fill: FloodFillKind::Scanline,
        }
    }
}

impl DiffOptions {
    /// Set the tolerance fraction
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the minimal region area
    pub fn with_min_area(mut self, min_area: i64) -> Self {
        self.min_area = min_area;
        self
    }

    /// Set the flood fill implementation
    pub fn with_flood_fill(mut self, flood_fill: FloodFillKind) -> Self {
        self.flood_fill = flood_fill;
        self
    }

    /// Squared distance above which two pixels differ, `None` in exact mode.
    fn threshold(&self) -> RegionResult<Option<f64>> {
        if !(0.0..1.0).contains(&self.tolerance) {
            return Err(RegionError::InvalidParameters(format!(
                "tolerance must be in [0, 1), got {}",
                self.tolerance
            )));
        }
        if self.tolerance == 0.0 {
            return Ok(None);
        }
        Ok(Some((self.tolerance * MAX_RGB_DISTANCE).powi(2)))
    }
}

/// Finds the regions where a sample differs from an original image.
///
/// # Examples
///
/// ```
/// use spotter_core::{Image, ImageMut, Point, Rect};
/// use spotter_region::RegionDiffer;
///
/// let original = Image::new_filled(40, 30, 0xFF00_0000).unwrap();
/// let mut sample = ImageMut::new_filled(20, 20, 0xFF00_0000).unwrap();
/// sample.fill_rect(Rect::new_unchecked(5, 5, 4, 4), 0xFFFF_FFFF);
///
/// let regions = RegionDiffer::default()
///     .diff(&original, &sample, Point::new(10, 5))
///     .unwrap();
/// assert_eq!(regions, vec![Rect::new_unchecked(5, 5, 4, 4)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegionDiffer {
    options: DiffOptions,
}

impl RegionDiffer {
    /// Create a differ with the given options
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    /// Options in use
    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Compare `sample` with the area of `original` whose top-left corner
    /// is `location`.
    ///
    /// Returns the bounding boxes of the surviving regions, in sample
    /// coordinates, ordered by region id (the row-major order in which each
    /// region was first seen). Identical images give an empty list.
    ///
    /// # Errors
    ///
    /// - [`RegionError::DimensionMismatch`] if the area at `location` does
    ///   not fit inside `original` with the sample's size
    /// - [`RegionError::InvalidParameters`] if the tolerance is outside
    ///   `[0, 1)`
    pub fn diff<O, S>(&self, original: &O, sample: &S, location: Point) -> RegionResult<Vec<Rect>>
    where
        O: PixelBuffer + ?Sized,
        S: PixelBuffer + ?Sized,
    {
        let start = Instant::now();
        let expected = sample.dimensions();
        let area = location.to_rect(expected.0 as i32, expected.1 as i32);
        let window = Window::clipped(original, area).ok_or(RegionError::DimensionMismatch {
            expected,
            actual: (0, 0),
        })?;

        let mut matrix = self.difference_matrix(&window, sample)?;
        let regions = self.label_regions(&mut matrix);

        let kept: Vec<Rect> = matrix
            .region_bounds()
            .into_iter()
            .map(|(_, rect)| rect)
            .filter(|rect| rect.area() > self.options.min_area)
            .collect();

        log::debug!(
            "diff {}x{} at {}: {} regions, {} kept in {:?}",
            expected.0,
            expected.1,
            location,
            regions,
            kept.len(),
            start.elapsed()
        );
        Ok(kept)
    }

    /// Mark every cell whose pixels differ.
    ///
    /// In exact mode (tolerance 0) any difference in the ARGB value marks
    /// the cell. Otherwise the cell is marked when the squared RGB distance
    /// exceeds the squared tolerated distance.
    ///
    /// # Errors
    ///
    /// - [`RegionError::DimensionMismatch`] if the buffers differ in size
    /// - [`RegionError::InvalidParameters`] if the tolerance is invalid
    pub fn difference_matrix<A, B>(&self, a: &A, b: &B) -> RegionResult<LabelMatrix>
    where
        A: PixelBuffer + ?Sized,
        B: PixelBuffer + ?Sized,
    {
        if a.dimensions() != b.dimensions() {
            return Err(RegionError::DimensionMismatch {
                expected: b.dimensions(),
                actual: a.dimensions(),
            });
        }
        let threshold = self.options.threshold()?;

        let (w, h) = a.dimensions();
        let mut cells = Vec::with_capacity(w as usize * h as usize);
        for y in 0..h {
            for x in 0..w {
                let (pa, pb) = (a.pixel(x, y), b.pixel(x, y));
                let differs = match threshold {
                    None => pa != pb,
                    Some(t) => color::distance_squared(pa, pb) as f64 > t,
                };
                cells.push(if differs {
                    LabelMatrix::DIFFERENT
                } else {
                    LabelMatrix::EQUAL
                });
            }
        }
        LabelMatrix::from_cells(w, h, cells)
    }

    /// Give every 8-connected group of [`LabelMatrix::DIFFERENT`] cells its
    /// own id, counting up from [`LabelMatrix::FIRST_REGION`] in row-major
    /// order of each group's first cell.
    ///
    /// Returns the number of regions found.
    pub fn label_regions(&self, matrix: &mut LabelMatrix) -> u32 {
        let mut next = LabelMatrix::FIRST_REGION;
        for y in 0..matrix.height() as i32 {
            for x in 0..matrix.width() as i32 {
                if matrix.get(x, y) == Some(LabelMatrix::DIFFERENT) {
                    self.options
                        .flood_fill
                        .fill(matrix, x, y, LabelMatrix::DIFFERENT, next);
                    next += 1;
                }
            }
        }
        next - LabelMatrix::FIRST_REGION
    }
}
