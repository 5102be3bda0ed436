//! Shape generation for 2D primitives
//!
//! All generators emit triangle lists in world coordinates (y down).

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(x, y, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x + w, y + h, color),
        Vertex::new(x, y + h, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ellipse(center, radius, radius, color, segments)
}

/// Generate vertices for a filled axis-aligned ellipse
pub fn ellipse(center: Vec2, rx: f32, ry: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + rx * theta1.cos(),
            center.y + ry * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + rx * theta2.cos(),
            center.y + ry * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Rotate vertices in place around a pivot (angle in radians, clockwise
/// in the y-down world)
pub fn rotate_about(vertices: &mut [Vertex], pivot: Vec2, angle: f32) {
    let (sin, cos) = angle.sin_cos();
    for v in vertices {
        let dx = v.position[0] - pivot.x;
        let dy = v.position[1] - pivot.y;
        v.position[0] = pivot.x + dx * cos - dy * sin;
        v.position[1] = pivot.y + dx * sin + dy * cos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_vertex_count() {
        assert_eq!(rect(0.0, 0.0, 10.0, 20.0, [1.0; 4]).len(), 6);
    }

    #[test]
    fn test_rect_corners() {
        let verts = rect(5.0, 10.0, 20.0, 30.0, [1.0; 4]);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert!(xs.iter().all(|&x| x == 5.0 || x == 25.0));
        assert!(ys.iter().all(|&y| y == 10.0 || y == 40.0));
    }

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 5.0, [1.0; 4], 16).len(), 48);
    }

    #[test]
    fn test_rotate_about_quarter_turn() {
        let mut verts = [Vertex::new(1.0, 0.0, [1.0; 4])];
        rotate_about(&mut verts, Vec2::ZERO, std::f32::consts::FRAC_PI_2);
        assert!(verts[0].position[0].abs() < 1e-6);
        assert!((verts[0].position[1] - 1.0).abs() < 1e-6);
    }
}
