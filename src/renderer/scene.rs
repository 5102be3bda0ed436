//! Frame building: turn a `GameState` into a vertex list
//!
//! Text (score, overlays, menus) is DOM-rendered by the platform layer;
//! this module only draws the world.

use glam::Vec2;

use super::shapes::{circle, ellipse, rect, rotate_about, triangle};
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{GamePhase, GameState, Pipe};

/// Pipe caps stick out past the pipe body
const CAP_WIDTH: f32 = 80.0;
const CAP_HEIGHT: f32 = 20.0;

/// Build all vertices for one frame
pub fn build_frame(state: &GameState, time_secs: f64, reduced_motion: bool) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    if !reduced_motion {
        push_clouds(&mut vertices, time_secs);
    }

    for pipe in &state.pipes {
        push_pipe(&mut vertices, pipe);
    }

    if state.phase != GamePhase::Menu {
        push_bird(&mut vertices, state, reduced_motion);
    }

    // Dim the world under the DOM overlays
    if state.phase != GamePhase::Playing {
        vertices.extend(rect(
            0.0,
            0.0,
            WORLD_WIDTH,
            WORLD_HEIGHT,
            colors::OVERLAY,
        ));
    }

    vertices
}

/// Three drifting clouds, each a cluster of circles
fn push_clouds(vertices: &mut Vec<Vertex>, time_secs: f64) {
    for i in 0..3u32 {
        let drift = (time_secs * 20.0) as f32 + i as f32 * 300.0;
        let x = drift % (WORLD_WIDTH + 100.0) - 50.0;
        let y = 50.0 + i as f32 * 30.0;

        vertices.extend(circle(Vec2::new(x, y), 20.0, colors::CLOUD, 16));
        vertices.extend(circle(Vec2::new(x + 20.0, y), 25.0, colors::CLOUD, 16));
        vertices.extend(circle(Vec2::new(x + 40.0, y), 20.0, colors::CLOUD, 16));
    }
}

fn push_pipe(vertices: &mut Vec<Vertex>, pipe: &Pipe) {
    let top = pipe.top_rect();
    let bottom = pipe.bottom_rect();

    vertices.extend(rect(top.x, top.y, top.w, top.h, colors::PIPE));
    vertices.extend(rect(bottom.x, bottom.y, bottom.w, bottom.h, colors::PIPE));

    // Caps at the gap edges, wider than the body
    let cap_x = pipe.x - (CAP_WIDTH - PIPE_WIDTH) / 2.0;
    vertices.extend(rect(
        cap_x,
        pipe.gap_top - CAP_HEIGHT,
        CAP_WIDTH,
        CAP_HEIGHT,
        colors::PIPE_CAP,
    ));
    vertices.extend(rect(
        cap_x,
        pipe.gap_top + PIPE_GAP,
        CAP_WIDTH,
        CAP_HEIGHT,
        colors::PIPE_CAP,
    ));
}

/// The bird: body, eye, animated wing and beak, tilted by velocity
fn push_bird(vertices: &mut Vec<Vertex>, state: &GameState, reduced_motion: bool) {
    let bird = &state.bird;
    let center = bird.aabb().center();
    let r = BIRD_SIZE / 2.0;

    let start = vertices.len();

    vertices.extend(circle(center, r, colors::BIRD_BODY, 20));

    // Wing flaps up and down while playing
    let wing_offset = if reduced_motion {
        0.0
    } else {
        3.0 * bird.wing_phase.sin().abs()
    };
    vertices.extend(ellipse(
        Vec2::new(center.x - r * 0.5, center.y - wing_offset),
        5.0,
        3.5,
        colors::BIRD_WING,
        12,
    ));

    // Beak points in the direction of travel
    vertices.extend(triangle(
        Vec2::new(center.x + r + 4.0, center.y),
        Vec2::new(center.x + r - 4.0, center.y - 3.0),
        Vec2::new(center.x + r - 4.0, center.y + 3.0),
        colors::BIRD_BEAK,
    ));

    vertices.extend(circle(
        Vec2::new(center.x + 5.0, center.y - 5.0),
        3.0,
        colors::BIRD_EYE,
        10,
    ));

    // Tilt the whole bird: dives nose-down, flaps nose-up
    rotate_about(
        &mut vertices[start..],
        center,
        bird.rotation.to_radians(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_frame_has_no_bird() {
        let state = GameState::new(1);
        let frame = build_frame(&state, 0.0, true);
        // Only the overlay quad (no clouds with reduced motion, no
        // pipes yet, no bird in the menu)
        assert_eq!(frame.len(), 6);
    }

    #[test]
    fn test_playing_frame_draws_pipes_and_bird() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Playing;
        state.pipes.push(Pipe::new(400.0, 200.0));
        let frame = build_frame(&state, 0.0, true);
        // Pipes + bird, no overlay
        assert!(frame.len() > 6);
        assert!(
            frame
                .iter()
                .all(|v| v.color != colors::OVERLAY)
        );
    }
}
