//! Axis-aligned bounding-box collision detection
//!
//! Pure functions of current positions; called once per frame while
//! playing. Nothing here mutates state.

use glam::Vec2;

use super::state::Pipe;

/// Axis-aligned rectangle (y grows downward, like the world)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Overlap test with exclusive edges (touching rectangles do not
    /// intersect)
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Returns true if the bird is out of vertical bounds or overlaps any
/// pipe rectangle.
///
/// Wall checks are inclusive: resting exactly on the ceiling or floor
/// counts as a collision.
pub fn check_collision(bird: &Aabb, pipes: &[Pipe], world_height: f32) -> bool {
    if bird.y <= 0.0 || bird.y + bird.h >= world_height {
        return true;
    }

    pipes
        .iter()
        .any(|p| bird.intersects(&p.top_rect()) || bird.intersects(&p.bottom_rect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn bird_at(y: f32) -> Aabb {
        Aabb::new(BIRD_X, y, BIRD_SIZE, BIRD_SIZE)
    }

    #[test]
    fn test_top_wall_collision() {
        // Bird at y=0 collides regardless of velocity
        assert!(check_collision(&bird_at(0.0), &[], WORLD_HEIGHT));
        assert!(check_collision(&bird_at(-5.0), &[], WORLD_HEIGHT));
    }

    #[test]
    fn test_bottom_wall_collision() {
        assert!(check_collision(
            &bird_at(WORLD_HEIGHT - BIRD_SIZE),
            &[],
            WORLD_HEIGHT
        ));
        // Just above the floor - no collision
        assert!(!check_collision(
            &bird_at(WORLD_HEIGHT - BIRD_SIZE - 1.0),
            &[],
            WORLD_HEIGHT
        ));
    }

    #[test]
    fn test_pipe_collision_top_rect() {
        // Pipe at the bird's x, gap well below the bird
        let pipe = Pipe::new(BIRD_X, 400.0);
        assert!(check_collision(&bird_at(100.0), &[pipe], WORLD_HEIGHT));
    }

    #[test]
    fn test_pipe_collision_bottom_rect() {
        let pipe = Pipe::new(BIRD_X, 100.0);
        // Bird below the gap (gap spans 100..280)
        assert!(check_collision(&bird_at(300.0), &[pipe], WORLD_HEIGHT));
    }

    #[test]
    fn test_bird_in_gap_misses() {
        let pipe = Pipe::new(BIRD_X, 200.0);
        // Bird centered in the gap (200..380)
        assert!(!check_collision(&bird_at(280.0), &[pipe], WORLD_HEIGHT));
    }

    #[test]
    fn test_pipe_out_of_reach_misses() {
        // Pipe far to the right of the bird
        let pipe = Pipe::new(600.0, 100.0);
        assert!(!check_collision(&bird_at(300.0), &[pipe], WORLD_HEIGHT));
    }

    #[test]
    fn test_touching_pipe_edge_is_not_collision() {
        // Pipe's left edge exactly at the bird's right edge
        let pipe = Pipe::new(BIRD_X + BIRD_SIZE, 400.0);
        assert!(!check_collision(&bird_at(100.0), &[pipe], WORLD_HEIGHT));
    }

    #[test]
    fn test_aabb_center() {
        // The renderer pivots the bird around this point
        let bird = bird_at(300.0);
        assert_eq!(
            bird.center(),
            glam::Vec2::new(BIRD_X + BIRD_SIZE / 2.0, 300.0 + BIRD_SIZE / 2.0)
        );
    }

    #[test]
    fn test_aabb_intersects() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Aabb::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.intersects(&Aabb::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Aabb::new(0.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_pipe_rects_share_the_gap() {
        let pipe = Pipe::new(300.0, 150.0);
        let top = pipe.top_rect();
        let bottom = pipe.bottom_rect();
        assert_eq!(top.y + top.h, 150.0);
        assert_eq!(bottom.y, 150.0 + PIPE_GAP);
        assert_eq!(bottom.y + bottom.h, WORLD_HEIGHT);
    }
}
