//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Segments used for a circle of the given radius
pub fn circle_segments(radius: f32) -> u32 {
    ((radius * 1.5) as u32).clamp(12, 96)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Append a filled rectangle as two triangles
pub fn push_rect(vertices: &mut Vec<Vertex>, rect: Rect, color: [f32; 4]) {
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.x + rect.width, rect.y + rect.height);

    vertices.push(Vertex::new(x0, y0, color));
    vertices.push(Vertex::new(x1, y0, color));
    vertices.push(Vertex::new(x0, y1, color));

    vertices.push(Vertex::new(x0, y1, color));
    vertices.push(Vertex::new(x1, y0, color));
    vertices.push(Vertex::new(x1, y1, color));
}

/// Generate vertices for a rectangle outline drawn inside `rect`
pub fn rect_lines(rect: Rect, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(rect.width / 2.0).min(rect.height / 2.0);
    let mut vertices = Vec::with_capacity(24);

    // Top and bottom span the full width, sides fill the gap between them
    push_rect(&mut vertices, Rect::new(rect.x, rect.y, rect.width, t), color);
    push_rect(
        &mut vertices,
        Rect::new(rect.x, rect.y + rect.height - t, rect.width, t),
        color,
    );
    push_rect(
        &mut vertices,
        Rect::new(rect.x, rect.y + t, t, rect.height - 2.0 * t),
        color,
    );
    push_rect(
        &mut vertices,
        Rect::new(rect.x + rect.width - t, rect.y + t, t, rect.height - 2.0 * t),
        color,
    );

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(400.0, 225.0);
        let vertices = circle(center, 25.0, RED, 32);
        assert_eq!(vertices.len(), 96);
        for v in &vertices {
            let p = Vec2::from(v.position);
            assert!(p.distance(center) <= 25.001);
        }
    }

    #[test]
    fn test_rect_covers_corners() {
        let mut vertices = Vec::new();
        push_rect(&mut vertices, Rect::new(300.0, 0.0, 50.0, 50.0), RED);
        assert_eq!(vertices.len(), 6);
        let xs: Vec<f32> = vertices.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = vertices.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 300.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 350.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 0.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 50.0);
    }

    #[test]
    fn test_rect_lines_four_bars() {
        let vertices = rect_lines(Rect::new(0.0, 0.0, 100.0, 40.0), 2.0, RED);
        assert_eq!(vertices.len(), 24);
    }

    #[test]
    fn test_circle_segments_bounds() {
        assert_eq!(circle_segments(1.0), 12);
        assert_eq!(circle_segments(25.0), 37);
        assert_eq!(circle_segments(1000.0), 96);
    }
}
