//! Scene recording
//!
//! A `Frame` collects everything drawn through [`Canvas`] into one triangle
//! list so the GPU side can upload it in a single buffer.

use glam::Vec2;

use super::font;
use super::shapes;
use super::vertex::Vertex;
use crate::platform::{Canvas, Color};
use crate::sim::Rect;
use crate::sim::state::colors;

#[derive(Debug, Clone)]
pub struct Frame {
    pub clear_color: Color,
    pub vertices: Vec<Vertex>,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    pub fn new() -> Self {
        Self {
            clear_color: colors::WHITE,
            vertices: Vec::new(),
        }
    }

    /// Start over, keeping the allocation
    pub fn reset(&mut self) {
        self.clear_color = colors::WHITE;
        self.vertices.clear();
    }
}

impl Canvas for Frame {
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let segments = shapes::circle_segments(radius);
        self.vertices
            .extend(shapes::circle(center, radius, color, segments));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        shapes::push_rect(&mut self.vertices, rect, color);
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        self.vertices
            .extend(shapes::rect_lines(rect, thickness, color));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        font::push_text(&mut self.vertices, text, pos, size, color);
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        font::text_width(text, size)
    }
}
