//! Tolerance scan regression test

use spotter_core::{Icon, ImageMut, Point, color};
use spotter_search::{ColorIndexLocator, SearchError, ToleranceScanLocator};
use spotter_test::{RegParams, fixtures};

/// The iron scene with red and blue raised by one everywhere
fn noisy_scene() -> ImageMut {
    let mut scene = fixtures::iron_scene().to_mut();
    for p in scene.data_mut() {
        let (r, g, b) = color::extract_rgb(*p);
        *p = color::compose_rgb(r + 1, g, b + 1);
    }
    scene
}

#[test]
fn tolerance_reg() {
    let mut rp = RegParams::new("tolerance");

    // --- Exact fixtures ---
    eprintln!("=== Exact fixtures ===");
    let strip = fixtures::digit_strip();
    let scan = ToleranceScanLocator::new(&strip);
    rp.compare_points(&[fixtures::THREE_AT], &scan.locate(&fixtures::digit_icon('3')).unwrap());
    rp.compare_points(&[], &scan.locate(&fixtures::digit_icon('8')).unwrap());

    let scene = fixtures::iron_scene();
    let scan = ToleranceScanLocator::new(&scene);
    let iron = fixtures::iron_icon();
    rp.compare_points(&fixtures::IRON_POSITIONS, &scan.locate(&iron).unwrap());
    rp.compare_points(
        &ColorIndexLocator::new(&scene).locate(&iron).unwrap(),
        &scan.locate(&iron).unwrap(),
    );
    rp.compare_points(&[], &scan.locate(&fixtures::iron_icon_altered_hue()).unwrap());

    // --- Color noise ---
    eprintln!("=== Color noise ===");
    let noisy = noisy_scene();
    rp.compare_points(&[], &ToleranceScanLocator::new(&noisy).locate(&iron).unwrap());
    rp.compare_points(
        &fixtures::IRON_POSITIONS,
        &ToleranceScanLocator::new(&noisy).with_tolerance(2).locate(&iron).unwrap(),
    );
    rp.compare_points(&[], &ColorIndexLocator::new(&noisy).locate(&iron).unwrap());

    // --- Overlapping repeats ---
    eprintln!("=== Overlapping repeats ===");
    let flat = fixtures::solid(5, 4, 0xFF40_4040);
    let square = Icon::new("square", fixtures::solid(2, 2, 0xFF40_4040));
    // Each hit shifts the rest of the column one to the right
    let expected = [Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)];
    rp.compare_points(&expected, &ToleranceScanLocator::new(&flat).locate(&square).unwrap());
    let wide = fixtures::solid(8, 3, 0xFF40_4040);
    let bar = Icon::new("bar", fixtures::solid(3, 2, 0xFF40_4040));
    rp.compare_points(
        &[Point::new(0, 0), Point::new(2, 1), Point::new(5, 0)],
        &ToleranceScanLocator::new(&wide).locate(&bar).unwrap(),
    );

    // --- Degenerate samples ---
    eprintln!("=== Degenerate samples ===");
    rp.check(
        matches!(
            scan.locate(&fixtures::fully_masked(3, 3)),
            Err(SearchError::AllMaskedSample { .. })
        ),
        "fully masked sample rejected",
    );
    let tall = Icon::new("tall", fixtures::solid(1, 261, fixtures::SCENE_BG));
    rp.compare_points(&[], &scan.locate(&tall).unwrap());

    assert!(rp.cleanup());
}
