//! Coin glyph rendering with best-effort font lookup.
//!
//! The € on the coin is drawn from the first usable TrueType font found on
//! disk; when none resolves (or the font has no € at all) a built-in 5×7
//! bitmap glyph is scaled up instead. Either way the render completes —
//! a missing font only costs legibility, never the run.

use crate::draw::blend_pixel;
use image::{Rgba, RgbaImage};
use rusttype::{point, Font, GlyphId, Scale};

/// Font files probed for the coin glyph, in preference order.
const FONT_CANDIDATES: &[&str] = &[
    "arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/Library/Fonts/Arial.ttf",
];

/// Built-in € used when no real font resolves. One row per scanline.
const EURO_BITMAP: [&str; 7] = [
    " ####", "#    ", "#### ", "#    ", "#### ", "#    ", " ####",
];

/// First candidate font that both reads and parses.
pub fn load_glyph_font() -> Option<Font<'static>> {
    for path in FONT_CANDIDATES {
        if let Ok(data) = std::fs::read(path) {
            if let Some(font) = Font::try_from_vec(data) {
                return Some(font);
            }
        }
    }
    None
}

/// Draw `ch` centered on `(cx, cy)` at roughly `size_px` tall.
pub fn draw_centered_glyph(
    img: &mut RgbaImage,
    ch: char,
    cx: f32,
    cy: f32,
    size_px: f32,
    color: Rgba<u8>,
) {
    if let Some(font) = load_glyph_font() {
        if draw_font_glyph(img, &font, ch, cx, cy, size_px, color) {
            return;
        }
    }
    draw_bitmap_euro(img, cx, cy, size_px, color);
}

/// Rasterize via rusttype. Returns false when the font cannot represent the
/// character, so the caller can fall back to the bitmap glyph.
fn draw_font_glyph(
    img: &mut RgbaImage,
    font: &Font<'_>,
    ch: char,
    cx: f32,
    cy: f32,
    size_px: f32,
    color: Rgba<u8>,
) -> bool {
    if font.glyph(ch).id() == GlyphId(0) {
        return false;
    }
    let glyph = font
        .glyph(ch)
        .scaled(Scale::uniform(size_px))
        .positioned(point(0.0, 0.0));
    let bb = match glyph.pixel_bounding_box() {
        Some(bb) => bb,
        None => return false,
    };
    let left = (cx - bb.width() as f32 / 2.0).round() as i64;
    let top = (cy - bb.height() as f32 / 2.0).round() as i64;
    glyph.draw(|gx, gy, coverage| {
        let a = (coverage * color[3] as f32) as u8;
        if a > 0 {
            blend_pixel(
                img,
                left + gx as i64,
                top + gy as i64,
                Rgba([color[0], color[1], color[2], a]),
            );
        }
    });
    true
}

/// Scale the 5×7 bitmap € up to roughly `size_px` and blend it centered on
/// `(cx, cy)`. Never fails.
pub fn draw_bitmap_euro(img: &mut RgbaImage, cx: f32, cy: f32, size_px: f32, color: Rgba<u8>) {
    let rows = EURO_BITMAP.len() as i64;
    let cols = EURO_BITMAP[0].len() as i64;
    let cell = ((size_px / rows as f32).round() as i64).max(1);
    let left = cx.round() as i64 - cols * cell / 2;
    let top = cy.round() as i64 - rows * cell / 2;
    for (row, line) in EURO_BITMAP.iter().enumerate() {
        for (col, byte) in line.bytes().enumerate() {
            if byte != b'#' {
                continue;
            }
            let x0 = left + col as i64 * cell;
            let y0 = top + row as i64 * cell;
            for y in y0..y0 + cell {
                for x in x0..x0 + cell {
                    blend_pixel(img, x, y, color);
                }
            }
        }
    }
}
