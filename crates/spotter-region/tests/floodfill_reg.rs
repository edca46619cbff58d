//! Flood fill regression test
//!
//! The recursive and scanline fillers must leave bit-identical matrices
//! behind for every grid and seed.

use rand::Rng;
use spotter_region::{
    DiffOptions, FloodFill, FloodFillKind, LabelMatrix, RecursiveFloodFill, RegionDiffer,
    ScanlineFloodFill,
};
use spotter_test::{RegParams, fixtures};

fn random_grid(rng: &mut impl Rng, w: u32, h: u32, density: f64) -> LabelMatrix {
    let cells = (0..w * h)
        .map(|_| {
            if rng.gen_bool(density) {
                LabelMatrix::DIFFERENT
            } else {
                LabelMatrix::EQUAL
            }
        })
        .collect();
    LabelMatrix::from_cells(w, h, cells).unwrap()
}

/// Label every region of `1` cells with `filler`, row by row.
fn label_all(filler: &dyn FloodFill, matrix: &mut LabelMatrix) -> Vec<usize> {
    let mut sizes = Vec::new();
    let mut next = LabelMatrix::FIRST_REGION;
    for y in 0..matrix.height() as i32 {
        for x in 0..matrix.width() as i32 {
            if matrix.get(x, y) == Some(LabelMatrix::DIFFERENT) {
                sizes.push(filler.fill(matrix, x, y, LabelMatrix::DIFFERENT, next));
                next += 1;
            }
        }
    }
    sizes
}

#[test]
fn floodfill_reg() {
    let mut rp = RegParams::new("floodfill");
    let mut rng = fixtures::seeded_rng(0x5107);

    // --- Random grids, every region labeled ---
    eprintln!("=== Random grids ===");
    for round in 0..60 {
        let w = rng.gen_range(1..=40);
        let h = rng.gen_range(1..=40);
        let density = [0.2, 0.45, 0.6, 0.85][round % 4];
        let grid = random_grid(&mut rng, w, h, density);

        let mut a = grid.clone();
        let mut b = grid.clone();
        let sizes_a = label_all(&RecursiveFloodFill, &mut a);
        let sizes_b = label_all(&ScanlineFloodFill, &mut b);

        rp.check(a == b, &format!("round {round}: {w}x{h} matrices identical"));
        rp.check(sizes_a == sizes_b, &format!("round {round}: region sizes"));
        rp.compare_values(
            grid.count(LabelMatrix::DIFFERENT) as f64,
            sizes_b.iter().sum::<usize>() as f64,
            0.0,
        );
        rp.compare_values(0.0, b.count(LabelMatrix::DIFFERENT) as f64, 0.0);
    }

    // --- Single fills from arbitrary seeds, arbitrary values ---
    eprintln!("=== Arbitrary seeds ===");
    for round in 0..40 {
        let (w, h) = (rng.gen_range(2..=30), rng.gen_range(2..=30));
        let grid = random_grid(&mut rng, w, h, 0.5);
        let x = rng.gen_range(-2..w as i32 + 2);
        let y = rng.gen_range(-2..h as i32 + 2);
        let searched = rng.gen_range(0..2);

        let mut a = grid.clone();
        let mut b = grid.clone();
        let na = RecursiveFloodFill.fill(&mut a, x, y, searched, 9);
        let nb = ScanlineFloodFill.fill(&mut b, x, y, searched, 9);
        rp.check(a == b, &format!("round {round}: seed ({x}, {y}) value {searched}"));
        rp.compare_values(na as f64, nb as f64, 0.0);
    }

    // --- Differ with either filler ---
    eprintln!("=== Differ labeling ===");
    for round in 0..10 {
        let palette = [0xFF00_0000, 0xFFFF_FFFF];
        let a = fixtures::random_image(&mut rng, 35, 28, &palette);
        let b = fixtures::random_image(&mut rng, 35, 28, &palette);
        let options = DiffOptions::default().with_min_area(0);
        let recursive = RegionDiffer::new(options.clone().with_flood_fill(FloodFillKind::Recursive));
        let scanline = RegionDiffer::new(options.with_flood_fill(FloodFillKind::Scanline));

        let mut ma = recursive.difference_matrix(&a, &b).unwrap();
        let mut mb = scanline.difference_matrix(&a, &b).unwrap();
        let na = recursive.label_regions(&mut ma);
        let nb = scanline.label_regions(&mut mb);
        rp.compare_values(na as f64, nb as f64, 0.0);
        rp.check(ma == mb, &format!("round {round}: labeled matrices identical"));
        rp.compare_rects(
            &recursive.diff(&a, &b, spotter_core::Point::ORIGIN).unwrap(),
            &scanline.diff(&a, &b, spotter_core::Point::ORIGIN).unwrap(),
        );
    }

    // --- Large region, scanline only ---
    eprintln!("=== Large region ===");
    let mut big = LabelMatrix::from_cells(600, 400, vec![1; 600 * 400]).unwrap();
    let n = ScanlineFloodFill.fill(&mut big, 599, 399, 1, 2);
    rp.compare_values((600 * 400) as f64, n as f64, 0.0);

    assert!(rp.cleanup());
}
