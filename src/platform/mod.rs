//! Platform abstraction layer
//!
//! The capabilities the game needs from its host, and nothing more:
//! - Drawing (`Canvas`)
//! - Keyboard state (`input`)
//! - Time/ticks (`time`)

pub mod input;
pub mod time;

pub use input::{Key, Keyboard};
pub use time::FrameClock;

use glam::Vec2;

use crate::sim::Rect;

/// RGBA colour, sRGB, 0-1 per channel
pub type Color = [f32; 4];

/// Immediate-mode drawing surface in screen pixels (origin top-left, y down)
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color);
    /// Draw text with its top-left corner at `pos`; `size` is the line height
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
    /// Width in pixels `draw_text` would cover
    fn measure_text(&self, text: &str, size: f32) -> f32;
}
