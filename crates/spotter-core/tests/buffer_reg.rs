//! Buffer regression test
//!
//! Windows, icons and `image` interop on the shared fixtures.

use spotter_core::{Icon, Image, PixelBuffer, Point, Rect, Sample, Window};
use spotter_test::{RegParams, fixtures};

#[test]
fn buffer_reg() {
    let mut rp = RegParams::new("buffer");
    let strip = fixtures::digit_strip();

    // --- Windows ---
    eprintln!("=== Windows ===");
    let glyph = Rect::new_unchecked(fixtures::THREE_AT.x, fixtures::THREE_AT.y, 10, 14);
    let window = Window::new(&strip, glyph).unwrap();
    let three = fixtures::digit_icon('3');
    rp.check(window.dimensions() == three.dimensions(), "window size");
    rp.check(window.origin() == fixtures::THREE_AT, "window origin");
    let same = (0..10).all(|x| (0..14).all(|y| window.pixel(x, y) == three.pixel(x, y)));
    rp.check(same, "window shows the 3");

    let overhang = Rect::new_unchecked(170, 25, 20, 20);
    rp.check(Window::new(&strip, overhang).is_err(), "strict window rejects overhang");
    let clipped = Window::clipped(&strip, overhang).unwrap();
    rp.check(clipped.dimensions() == (5, 6), "clipped window size");
    rp.check(Window::clipped(&strip, Rect::new_unchecked(175, 0, 4, 4)).is_none(), "disjoint");

    // --- Icons ---
    eprintln!("=== Icons ===");
    let iron = fixtures::iron_icon();
    rp.check(iron.size() == fixtures::IRON_SIZE, "iron size");
    rp.check(iron.center() == Point::new(6, 5), "iron center");
    rp.check(iron.is_masked(0, 0), "iron corner masked");
    rp.check(!iron.is_masked(1, 0), "iron outline unmasked");
    rp.check(!iron.is_fully_masked(), "iron has content");
    rp.check(fixtures::fully_masked(3, 2).is_fully_masked(), "mask icon");

    // A custom mask color turns the outline into wildcards
    let hollow = Icon::new("hollow", iron.image().clone()).with_mask_color(fixtures::IRON_OUTLINE);
    rp.check(hollow.is_masked(0, 4), "custom mask color");
    rp.check(!hollow.is_masked(0, 0), "default mask no longer special");

    // --- image crate interop ---
    eprintln!("=== image interop ===");
    let rgba = strip.to_rgba_image();
    rp.check(PixelBuffer::dimensions(&rgba) == strip.dimensions(), "rgba size");
    let p = fixtures::THREE_AT;
    rp.check(
        PixelBuffer::pixel(&rgba, p.x as u32, p.y as u32) == fixtures::STRIP_FG,
        "rgba pixel reads as argb",
    );
    let back = Image::from_rgba_image(&rgba).unwrap();
    rp.check(back.data() == strip.data(), "rgba copy keeps every pixel");

    assert!(rp.cleanup());
}
