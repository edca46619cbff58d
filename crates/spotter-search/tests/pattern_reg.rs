//! Pattern matcher regression test
//!
//! Recolor-invariant matching on the digit strip and the iron scene, and
//! the splitting contract of the match enumerator.

use rand::Rng;
use spotter_core::{Icon, PixelBuffer, Point, Rect, Sample};
use spotter_search::{ColorIndexLocator, PatternMatcher, PatternMatches, ToleranceScanLocator};
use spotter_test::{RegParams, fixtures};

/// Split recursively down to `depth`, then drain the pieces in order.
fn drain_split<B: PixelBuffer, S: Sample>(mut m: PatternMatches<'_, B, S>, depth: u32) -> Vec<Point> {
    if depth > 0 {
        if let Some(first) = m.try_split() {
            let mut found = drain_split(first, depth - 1);
            found.extend(drain_split(m, depth - 1));
            return found;
        }
    }
    m.collect()
}

#[test]
fn pattern_digits_reg() {
    let mut rp = RegParams::new("pattern_digits");
    let strip = fixtures::digit_strip();

    // --- Digit glyphs ---
    eprintln!("=== Digit glyphs ===");
    let three = fixtures::digit_icon('3');
    rp.compare_points(&[fixtures::THREE_AT], &PatternMatcher::new(&strip, &three).find_all());
    let eight = fixtures::digit_icon('8');
    let eights = PatternMatcher::new(&strip, &eight);
    rp.check(
        !eights.test_pattern(fixtures::THREE_AT.x as u32, fixtures::THREE_AT.y as u32),
        "8 over the 3",
    );
    rp.compare_points(&[], &eights.find_all());

    // --- Comma ---
    eprintln!("=== Comma ===");
    let comma = fixtures::comma_icon();
    rp.compare_points(&[fixtures::COMMA_AT], &PatternMatcher::new(&strip, &comma).find_all());

    // --- Fully masked pattern matches everywhere ---
    eprintln!("=== Fully masked ===");
    let mask = fixtures::fully_masked(10, 10);
    let matcher = PatternMatcher::new(&strip, &mask);
    let all = matcher.find_all();
    rp.compare_values(((175 - 10 + 1) * (31 - 10 + 1)) as f64, all.len() as f64, 0.0);
    rp.compare_values(3652.0, all.len() as f64, 0.0);
    rp.check(all.windows(2).all(|w| (w[0].y, w[0].x) < (w[1].y, w[1].x)), "row-major order");

    // --- One split ---
    eprintln!("=== Split ===");
    let mut second = matcher.matches();
    let first = second.try_split().expect("splittable");
    let head: Vec<Point> = first.collect();
    let tail: Vec<Point> = second.collect();
    rp.compare_values(1826.0, head.len() as f64, 0.0);
    rp.compare_values(1826.0, tail.len() as f64, 0.0);
    let joined: Vec<Point> = head.into_iter().chain(tail).collect();
    rp.compare_points(&all, &joined);

    // --- Deep splits and rayon ---
    eprintln!("=== Deep split ===");
    for depth in [2, 5, 9] {
        rp.compare_points(&all, &drain_split(matcher.matches(), depth));
    }
    rp.compare_points(&all, &matcher.par_find_all());

    // --- Patterns that cannot fit ---
    eprintln!("=== Oversized ===");
    for (w, h) in [(40, 40), (180, 10), (10, 32)] {
        let big = fixtures::fully_masked(w, h);
        rp.compare_points(&[], &PatternMatcher::new(&strip, &big).find_all());
    }

    // --- Self match ---
    eprintln!("=== Self match ===");
    let whole = Icon::new("strip", strip.clone());
    rp.compare_points(&[Point::ORIGIN], &PatternMatcher::new(&strip, &whole).find_all());

    assert!(rp.cleanup());
}

#[test]
fn pattern_irons_reg() {
    let mut rp = RegParams::new("pattern_irons");
    let scene = fixtures::iron_scene();
    let iron = fixtures::iron_icon();
    let altered = fixtures::iron_icon_altered_hue();

    // --- Both irons, original and recolored ---
    eprintln!("=== Irons ===");
    let matcher = PatternMatcher::new(&scene, &iron);
    rp.compare_points(&fixtures::IRON_POSITIONS, &matcher.find_all());
    let recolored = PatternMatcher::new(&scene, &altered);
    rp.compare_points(&fixtures::IRON_POSITIONS, &recolored.find_all());
    rp.compare_points(&fixtures::IRON_POSITIONS, &recolored.par_find_all());

    // --- Pixel-equality locators miss the recolored icon ---
    eprintln!("=== Exact locators ===");
    rp.compare_points(&[], &ColorIndexLocator::new(&scene).locate(&altered).unwrap());
    rp.compare_points(&[], &ToleranceScanLocator::new(&scene).locate(&altered).unwrap());

    // --- Halves find one iron each ---
    eprintln!("=== Split halves ===");
    let mut second = matcher.matches();
    let first = second.try_split().expect("splittable");
    // Last offset 250 * 300 + 288 = 75288, midpoint 37644 = (144, 125)
    rp.check(first.offset_range() == Some(0..=37644), "first half range");
    rp.compare_points(&[fixtures::IRON_POSITIONS[0]], &first.collect::<Vec<_>>());
    rp.compare_points(&[fixtures::IRON_POSITIONS[1]], &second.collect::<Vec<_>>());

    // --- Halves on separate threads ---
    eprintln!("=== Threads ===");
    let mut second = recolored.matches();
    let first = second.try_split().expect("splittable");
    let (head, tail) = std::thread::scope(|s| {
        let worker = s.spawn(move || first.collect::<Vec<_>>());
        let tail: Vec<Point> = second.collect();
        (worker.join().unwrap(), tail)
    });
    let mut joined = head;
    joined.extend(tail);
    rp.compare_points(&fixtures::IRON_POSITIONS, &joined);

    // --- Early stop ---
    let mut lazy = matcher.matches();
    rp.check(lazy.advance() == Some(fixtures::IRON_POSITIONS[0]), "first pull");
    drop(lazy);

    assert!(rp.cleanup());
}

#[test]
fn pattern_split_random_reg() {
    let mut rp = RegParams::new("pattern_split_random");
    let mut rng = fixtures::seeded_rng(0x0b1e);
    let palette = [0xFF10_2030, 0xFF80_8080, 0xFFF0_E0D0];

    for round in 0..25 {
        let (w, h) = (rng.gen_range(8..40), rng.gen_range(8..30));
        let image = fixtures::random_image(&mut rng, w, h, &palette);
        let (pw, ph) = (rng.gen_range(1..4), rng.gen_range(1..4));
        let at = Point::new(rng.gen_range(0..=(w - pw) as i32), rng.gen_range(0..=(h - ph) as i32));
        let pattern = image.clip(Rect::new_unchecked(at.x, at.y, pw as i32, ph as i32)).unwrap();
        let pattern = Icon::new(format!("random-{round}"), pattern);

        let matcher = PatternMatcher::new(&image, &pattern);
        let all = matcher.find_all();
        rp.check(all.contains(&at), &format!("round {round}: source position {at} found"));
        rp.compare_points(&all, &drain_split(matcher.matches(), 4));
        rp.compare_points(&all, &matcher.par_find_all());
        let tested: Vec<Point> = (0..=h - ph)
            .flat_map(|y| (0..=w - pw).map(move |x| (x, y)))
            .filter(|&(x, y)| matcher.test_pattern(x, y))
            .map(|(x, y)| Point::new(x as i32, y as i32))
            .collect();
        rp.compare_points(&tested, &all);
    }

    assert!(rp.cleanup());
}
