//! Synthetic test images
//!
//! All fixtures are drawn in code so the regression tests carry no binary
//! data. Each scene is built so that its expected matches can be argued
//! from the drawing alone:
//!
//! - the digit strip uses seven-segment glyphs on a two-color background;
//!   full-width bars only occur inside one glyph, so a glyph pattern can
//!   only match a glyph cell exactly
//! - the iron scene places two icons far apart on a uniform background;
//!   the icon's outline ring forces any match to align with a drawn icon

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spotter_core::{Icon, Image, ImageMut, MASK_COLOR, PixelBuffer, Point, Rect, color};

/// Width of the digit strip
pub const STRIP_WIDTH: u32 = 175;
/// Height of the digit strip
pub const STRIP_HEIGHT: u32 = 31;
/// Top row of the text line in the strip
pub const STRIP_TEXT_Y: i32 = 10;
/// Strip background
pub const STRIP_BG: u32 = 0xFFFA_FAF0;
/// Strip ink
pub const STRIP_FG: u32 = 0xFF1E_1E1E;

/// Glyph cell width
pub const GLYPH_WIDTH: u32 = 10;
/// Glyph cell height
pub const GLYPH_HEIGHT: u32 = 14;

/// Characters drawn on the strip and their left x coordinate.
///
/// There is exactly one `3` and one `,`, and no `8`.
pub const STRIP_LAYOUT: [(char, i32); 10] = [
    ('9', 65),
    ('6', 77),
    ('1', 89),
    ('2', 101),
    ('4', 113),
    ('7', 125),
    (',', 137),
    ('3', 140),
    ('0', 152),
    ('5', 164),
];

/// Where the `3` glyph sits on the strip
pub const THREE_AT: Point = Point::new(140, 10);
/// Where the comma pattern matches on the strip
pub const COMMA_AT: Point = Point::new(137, 10);

/// Size of the iron scene
pub const SCENE_SIZE: (u32, u32) = (300, 260);
/// Size of the iron icon
pub const IRON_SIZE: (u32, u32) = (12, 10);
/// Top-left corners of the two irons, in raster order
pub const IRON_POSITIONS: [Point; 2] = [Point::new(120, 84), Point::new(201, 230)];

/// Scene background
pub const SCENE_BG: u32 = 0xFF22_5533;
/// Iron outline ring
pub const IRON_OUTLINE: u32 = 0xFF28_3C5A;
/// Iron sole plate
pub const IRON_PLATE: u32 = 0xFFC8_C8D2;
/// Iron handle
pub const IRON_HANDLE: u32 = 0xFF8C_5014;
/// Color drawn in the scene under the icon's masked corners
pub const IRON_SHADOW: u32 = 0xFF14_2D1E;

fn segments(ch: char) -> &'static str {
    match ch {
        '0' => "abcdef",
        '1' => "bc",
        '2' => "abdeg",
        '3' => "abcdg",
        '4' => "bcfg",
        '5' => "acdfg",
        '6' => "acdefg",
        '7' => "abc",
        '8' => "abcdefg",
        '9' => "abcdfg",
        _ => "",
    }
}

fn segment_rect(seg: char) -> Rect {
    match seg {
        'a' => Rect::new_unchecked(0, 0, 10, 2),
        'b' => Rect::new_unchecked(8, 0, 2, 8),
        'c' => Rect::new_unchecked(8, 6, 2, 8),
        'd' => Rect::new_unchecked(0, 12, 10, 2),
        'e' => Rect::new_unchecked(0, 6, 2, 8),
        'f' => Rect::new_unchecked(0, 0, 2, 8),
        _ => Rect::new_unchecked(0, 6, 10, 2),
    }
}

fn draw_digit(img: &mut ImageMut, ch: char, x: i32, y: i32) {
    for seg in segments(ch).chars() {
        img.fill_rect(segment_rect(seg).translate(Point::new(x, y)), STRIP_FG);
    }
}

fn draw_comma(img: &mut ImageMut, x: i32, y: i32) {
    img.fill_rect(Rect::new_unchecked(x, y + 11, 2, 5), STRIP_FG);
}

/// 175x31 strip of seven-segment digits, see [`STRIP_LAYOUT`].
pub fn digit_strip() -> Image {
    let mut img = filled(STRIP_WIDTH, STRIP_HEIGHT, STRIP_BG);
    for (ch, x) in STRIP_LAYOUT {
        if ch == ',' {
            draw_comma(&mut img, x, STRIP_TEXT_Y);
        } else {
            draw_digit(&mut img, ch, x, STRIP_TEXT_Y);
        }
    }
    img.into()
}

/// A single glyph cell (10x14, ink on background) as a pattern.
pub fn digit_icon(ch: char) -> Icon {
    let mut img = filled(GLYPH_WIDTH, GLYPH_HEIGHT, STRIP_BG);
    draw_digit(&mut img, ch, 0, 0);
    Icon::new(format!("digit-{}", ch), img.into())
}

/// The comma with its background context (3x16).
pub fn comma_icon() -> Icon {
    let mut img = filled(3, 16, STRIP_BG);
    draw_comma(&mut img, 0, 0);
    Icon::new("comma", img.into())
}

fn iron_pixels(corner: u32) -> Image {
    let (w, h) = IRON_SIZE;
    let mut img = filled(w, h, IRON_PLATE);
    let (w, h) = (w as i32, h as i32);
    img.fill_rect(Rect::new_unchecked(0, 0, w, 1), IRON_OUTLINE);
    img.fill_rect(Rect::new_unchecked(0, h - 1, w, 1), IRON_OUTLINE);
    img.fill_rect(Rect::new_unchecked(0, 0, 1, h), IRON_OUTLINE);
    img.fill_rect(Rect::new_unchecked(w - 1, 0, 1, h), IRON_OUTLINE);
    img.fill_rect(Rect::new_unchecked(3, 2, 6, 2), IRON_HANDLE);
    for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
        img.fill_rect(Rect::new_unchecked(x, y, 1, 1), corner);
    }
    img.into()
}

/// The iron icon; its four corners are masked.
pub fn iron_icon() -> Icon {
    Icon::new("iron", iron_pixels(MASK_COLOR))
}

/// The iron icon with every non-mask color rotated, see [`rotate_channels`].
pub fn iron_icon_altered_hue() -> Icon {
    recolor(&iron_icon(), rotate_channels)
}

/// 300x260 scene with two irons at [`IRON_POSITIONS`].
pub fn iron_scene() -> Image {
    let (w, h) = SCENE_SIZE;
    let mut img = filled(w, h, SCENE_BG);
    let iron = iron_pixels(IRON_SHADOW);
    for p in IRON_POSITIONS {
        img.blit(&iron, p.x, p.y);
    }
    img.into()
}

/// Rotate the color channels of a pixel: `(r, g, b) -> (g, b, r)`.
///
/// A bijection on colors, so it is a uniform recoloring.
pub fn rotate_channels(argb: u32) -> u32 {
    let (r, g, b) = color::extract_rgb(argb);
    color::compose_argb(color::alpha(argb), g, b, r)
}

/// Apply `f` to every non-mask pixel of an icon.
pub fn recolor(icon: &Icon, f: impl Fn(u32) -> u32) -> Icon {
    let mut img = icon.image().to_mut();
    let mask = spotter_core::Sample::mask_color(icon);
    for p in img.data_mut() {
        if *p != mask {
            *p = f(*p);
        }
    }
    Icon::new(format!("{}-recolored", icon.name()), img.into()).with_mask_color(mask)
}

/// Icon of the given size made only of the mask color.
pub fn fully_masked(width: u32, height: u32) -> Icon {
    Icon::new(
        format!("mask-{}x{}", width, height),
        Image::new_filled(width, height, MASK_COLOR).unwrap_or_else(|e| panic!("{e}")),
    )
}

/// Solid image of one color.
pub fn solid(width: u32, height: u32, argb: u32) -> Image {
    filled(width, height, argb).into()
}

/// Deterministic RNG for randomized tests.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Image with every pixel drawn uniformly from `palette`.
pub fn random_image(rng: &mut impl Rng, width: u32, height: u32, palette: &[u32]) -> Image {
    let mut img = filled(width, height, palette[0]);
    for p in img.data_mut() {
        *p = palette[rng.gen_range(0..palette.len())];
    }
    img.into()
}

/// Copy `icon` into `base` at `at`, returning the new image.
pub fn paste(base: &Image, icon: &impl PixelBuffer, at: Point) -> Image {
    let mut img = base.to_mut();
    img.blit(icon, at.x, at.y);
    img.into()
}

fn filled(width: u32, height: u32, argb: u32) -> ImageMut {
    ImageMut::new_filled(width, height, argb)
        .unwrap_or_else(|e| panic!("fixture of size {width}x{height}: {e}"))
}
