//! Tiny 3x5 bitmap font for the scoreboard
//!
//! Covers digits, `-` and space, which is all `"<left> - <right>"` needs.

use glam::IVec2;

use super::framebuffer::{Framebuffer, Pixel};

pub const GLYPH_WIDTH: i32 = 3;
pub const GLYPH_HEIGHT: i32 = 5;
/// Blank column between glyphs
const GLYPH_SPACING: i32 = 1;

/// Rows top to bottom, bit 2 is the leftmost column
fn glyph(c: char) -> Option<[u8; 5]> {
    let rows = match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        ' ' => [0; 5],
        _ => return None,
    };
    Some(rows)
}

/// Rendered width in pixels
pub fn text_width(text: &str, scale: i32) -> i32 {
    let chars = text.chars().count() as i32;
    if chars == 0 {
        return 0;
    }
    (chars * (GLYPH_WIDTH + GLYPH_SPACING) - GLYPH_SPACING) * scale
}

/// Draw `text` with its top-left corner at `origin`. Unknown characters
/// render as blanks.
pub fn draw_text(fb: &mut Framebuffer, text: &str, origin: IVec2, scale: i32, color: Pixel) {
    let advance = (GLYPH_WIDTH + GLYPH_SPACING) * scale;
    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else {
            continue;
        };
        let glyph_origin = origin + IVec2::new(i as i32 * advance, 0);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                    let offset = IVec2::new(col, row as i32) * scale;
                    fb.fill_rect(glyph_origin + offset, IVec2::splat(scale), color);
                }
            }
        }
    }
}
