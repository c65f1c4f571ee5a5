//! Built-in 5×7 bitmap font
//!
//! Each glyph is seven rows of five bits, most significant bit on the left.
//! A line is `LINE_UNITS` cells tall, so `size` maps to a cell of
//! `size / LINE_UNITS` pixels.

use glam::Vec2;

use super::shapes::push_rect;
use super::vertex::Vertex;
use crate::sim::Rect;

pub const GLYPH_COLUMNS: usize = 5;
pub const GLYPH_ROWS: usize = 7;
/// Columns from one glyph to the next (one column of spacing)
pub const ADVANCE_UNITS: f32 = 6.0;
/// Vertical cells per line of text
pub const LINE_UNITS: f32 = 10.0;

type Glyph = [u8; GLYPH_ROWS];

const BLANK: Glyph = [0; GLYPH_ROWS];

/// Bitmap for a character; unknown characters render blank
pub fn glyph(c: char) -> Glyph {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '/' => [0b00001, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b10000],
        '\'' => [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => BLANK,
    }
}

/// Pixel size of one glyph cell for a line height
#[inline]
pub fn cell_size(size: f32) -> f32 {
    size / LINE_UNITS
}

/// Width of `text` in pixels at line height `size` (no trailing spacing)
pub fn text_width(text: &str, size: f32) -> f32 {
    let count = text.chars().count();
    if count == 0 {
        return 0.0;
    }
    (count as f32 * ADVANCE_UNITS - 1.0) * cell_size(size)
}

/// Append quads for every lit cell of `text`, top-left at `pos`
pub fn push_text(vertices: &mut Vec<Vertex>, text: &str, pos: Vec2, size: f32, color: [f32; 4]) {
    let cell = cell_size(size);

    for (i, c) in text.chars().enumerate() {
        let origin_x = pos.x + i as f32 * ADVANCE_UNITS * cell;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_COLUMNS {
                if bits & (1 << (GLYPH_COLUMNS - 1 - col)) != 0 {
                    let rect = Rect::new(
                        origin_x + col as f32 * cell,
                        pos.y + row as f32 * cell,
                        cell,
                        cell,
                    );
                    push_rect(vertices, rect, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_maps_to_uppercase() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('~'), BLANK);
        assert_eq!(glyph(' '), BLANK);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 20.0), 0.0);
        // One glyph: five columns of 2 px
        assert_eq!(text_width("A", 20.0), 10.0);
        assert_eq!(text_width("AB", 20.0), 22.0);
    }

    #[test]
    fn test_push_text_stays_in_bounds() {
        let mut vertices = Vec::new();
        let pos = Vec2::new(100.0, 50.0);
        push_text(&mut vertices, "GAME OVER", pos, 20.0, [1.0; 4]);
        assert!(!vertices.is_empty());
        assert_eq!(vertices.len() % 6, 0);

        let width = text_width("GAME OVER", 20.0);
        for v in &vertices {
            assert!(v.position[0] >= pos.x && v.position[0] <= pos.x + width + 0.001);
            assert!(v.position[1] >= pos.y && v.position[1] <= pos.y + 14.001);
        }
    }

    #[test]
    fn test_space_draws_nothing() {
        let mut vertices = Vec::new();
        push_text(&mut vertices, "   ", Vec2::ZERO, 20.0, [1.0; 4]);
        assert!(vertices.is_empty());
    }
}
