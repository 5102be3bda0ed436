//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one 60 Hz frame. The phase
//! state machine, physics, pipe management, scoring and collision all
//! live here; the platform layer only supplies inputs and drains events.

use rand::Rng;

use super::collision::check_collision;
use super::state::{GameEvent, GamePhase, GameState, Pipe};
use crate::consts::*;

/// Input commands for a single tick. All flags are one-shot key-down
/// events; the platform layer clears them after each processed tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap (also starts from the menu)
    pub flap: bool,
    /// Pause/resume toggle
    pub pause: bool,
    /// Restart from game over
    pub restart: bool,
    /// Return to menu from game over
    pub menu: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Menu => {
            if input.flap {
                log::info!("Starting run (seed {})", state.seed);
                state.phase = GamePhase::Playing;
            }
        }

        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
            }
        }

        GamePhase::GameOver => {
            if input.restart {
                reset_session(state, GamePhase::Playing);
            } else if input.menu {
                reset_session(state, GamePhase::Menu);
            }
        }

        GamePhase::Playing => {
            if input.pause {
                state.phase = GamePhase::Paused;
                return;
            }

            if input.flap {
                state.bird.flap();
                state.events.push(GameEvent::Flapped);
            }

            state.bird.update();

            // Spawn on a fixed cadence, starting with the first frame
            if state.frame % PIPE_SPAWN_INTERVAL == 0 {
                spawn_pipe(state);
            }

            for pipe in &mut state.pipes {
                pipe.advance();
            }
            state.pipes.retain(|p| !p.is_off_screen());

            // Score when a pipe's trailing edge moves behind the bird's
            // leading edge; the passed flag makes this count exactly once
            for pipe in &mut state.pipes {
                if !pipe.passed && pipe.x + PIPE_WIDTH < BIRD_X {
                    pipe.passed = true;
                    state.score += 1;
                    state.events.push(GameEvent::Scored);
                }
            }

            if check_collision(&state.bird.aabb(), &state.pipes, WORLD_HEIGHT) {
                log::info!("Game over at score {}", state.score);
                state.phase = GamePhase::GameOver;
                state.events.push(GameEvent::Died);
            }

            state.frame += 1;
        }
    }
}

/// Spawn a pipe at the right edge with a uniformly random gap position
fn spawn_pipe(state: &mut GameState) {
    let gap_top = state.rng.random_range(PIPE_GAP_MIN_TOP..=PIPE_GAP_MAX_TOP);
    state.pipes.push(Pipe::new(WORLD_WIDTH, gap_top));
}

/// Full session reset: score to 0, bird to start, pipes cleared. The
/// next seed is drawn from the old session's RNG so a whole multi-run
/// sitting stays deterministic from one initial seed.
fn reset_session(state: &mut GameState, phase: GamePhase) {
    let seed = state.rng.random::<u64>();
    *state = GameState::new(seed);
    state.phase = phase;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.phase = GamePhase::Playing;
        state
    }

    const FLAP: TickInput = TickInput {
        flap: true,
        pause: false,
        restart: false,
        menu: false,
    };

    #[test]
    fn test_menu_to_playing_on_flap() {
        let mut state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Menu);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Menu);

        tick(&mut state, &FLAP);
        assert_eq!(state.phase, GamePhase::Playing);
        // Starting from the menu does not flap the bird
        assert_eq!(state.bird.vel, 0.0);
    }

    #[test]
    fn test_gravity_applied_each_frame() {
        let mut state = playing_state(1);
        let v0 = state.bird.vel;
        let y0 = state.bird.y;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.bird.vel, v0 + GRAVITY);
        assert_eq!(state.bird.y, y0 + v0 + GRAVITY);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut state = playing_state(1);
        state.bird.vel = 7.5;

        tick(&mut state, &FLAP);
        // Flap sets the velocity before gravity integrates the frame
        assert_eq!(state.bird.vel, FLAP_STRENGTH + GRAVITY);
        assert!(state.events.contains(&GameEvent::Flapped));
    }

    #[test]
    fn test_pause_resume_roundtrip() {
        let mut state = playing_state(1);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Paused);
        let frozen_y = state.bird.y;

        // Nothing moves while paused
        tick(&mut state, &TickInput::default());
        assert_eq!(state.bird.y, frozen_y);

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.bird.y, frozen_y);
    }

    #[test]
    fn test_pipe_spawn_cadence() {
        let mut state = playing_state(42);
        // Keep the bird alive by re-centering it each frame; the first
        // spawn happens on frame 0, the second on frame 120
        for _ in 0..=PIPE_SPAWN_INTERVAL {
            state.bird.y = WORLD_HEIGHT / 2.0;
            state.bird.vel = 0.0;
            tick(&mut state, &TickInput::default());
            // Pipes must never spawn with the gap off the world
            for p in &state.pipes {
                assert!(p.gap_top >= PIPE_GAP_MIN_TOP);
                assert!(p.gap_top + PIPE_GAP < WORLD_HEIGHT);
            }
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.pipes.len(), 2);
    }

    #[test]
    fn test_score_counts_each_pipe_once() {
        let mut state = playing_state(1);
        // A pipe just about to pass the bird, gap around the bird
        state.bird.y = 300.0;
        let mut pipe = Pipe::new(BIRD_X - PIPE_WIDTH - 1.0, 250.0);
        pipe.x += PIPE_SPEED; // One advance away from counting
        state.pipes.push(pipe);

        state.bird.vel = 0.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 1);
        assert!(state.pipes[0].passed);

        // Further frames never re-count it
        for _ in 0..10 {
            state.bird.y = 300.0;
            state.bird.vel = 0.0;
            tick(&mut state, &TickInput::default());
            assert!(state.pipes.is_empty() || state.pipes[0].passed);
        }
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_collision_ends_run() {
        let mut state = playing_state(1);
        state.bird.y = -1.0;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::Died));
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = playing_state(1);
        state.score = 12;
        state.bird.y = -1.0;
        state.pipes.push(Pipe::new(400.0, 200.0));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.bird.y, WORLD_HEIGHT / 2.0);
        assert_eq!(state.bird.vel, 0.0);
        assert!(state.pipes.is_empty());
    }

    #[test]
    fn test_game_over_to_menu() {
        let mut state = playing_state(1);
        state.bird.y = WORLD_HEIGHT + 10.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);

        let menu = TickInput {
            menu: true,
            ..Default::default()
        };
        tick(&mut state, &menu);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0);
        assert!(state.pipes.is_empty());
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed and inputs stay identical
        let mut state1 = playing_state(99999);
        let mut state2 = playing_state(99999);

        for i in 0..600u32 {
            let input = TickInput {
                flap: i % 20 == 0,
                ..Default::default()
            };
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }

        assert_eq!(state1.frame, state2.frame);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.pipes.len(), state2.pipes.len());
        assert_eq!(state1.bird.y, state2.bird.y);
    }

    proptest! {
        /// While playing, each frame either adds exactly GRAVITY to the
        /// velocity or (on a flap) sets it to FLAP_STRENGTH first.
        #[test]
        fn prop_velocity_law(flaps in proptest::collection::vec(any::<bool>(), 1..120)) {
            let mut state = playing_state(7);
            for &flap in &flaps {
                // Re-center so the run never ends mid-sequence
                state.bird.y = WORLD_HEIGHT / 2.0;
                let before = state.bird.vel;
                tick(&mut state, &TickInput { flap, ..Default::default() });
                let expected = if flap { FLAP_STRENGTH + GRAVITY } else { before + GRAVITY };
                prop_assert_eq!(state.bird.vel, expected);
            }
        }

        /// The score never decreases, every passed pipe really is
        /// behind the bird, and in-flight passed pipes never revert.
        #[test]
        fn prop_passed_monotonic(seed in any::<u64>()) {
            let mut state = playing_state(seed);
            let mut prev_score = 0u32;
            for _ in 0..1000u32 {
                state.bird.y = WORLD_HEIGHT / 2.0;
                state.bird.vel = 0.0;
                let passed_before: Vec<f32> = state
                    .pipes
                    .iter()
                    .filter(|p| p.passed)
                    .map(|p| p.x)
                    .collect();
                tick(&mut state, &TickInput::default());
                prop_assert!(state.score >= prev_score);
                prev_score = state.score;
                for p in state.pipes.iter().filter(|p| p.passed) {
                    prop_assert!(p.x + PIPE_WIDTH < BIRD_X);
                }
                // Every previously-passed pipe still present is still passed
                for &old_x in &passed_before {
                    let expected_x = old_x - PIPE_SPEED;
                    if let Some(p) = state.pipes.iter().find(|p| p.x == expected_x) {
                        prop_assert!(p.passed);
                    }
                }
                prop_assert!((state.score as usize) >= state.pipes.iter().filter(|p| p.passed).count());
            }
        }

        /// Spawned gaps always fit inside the world
        #[test]
        fn prop_gap_always_fits(seed in any::<u64>()) {
            let mut state = playing_state(seed);
            spawn_pipe(&mut state);
            let pipe = state.pipes[0];
            prop_assert!(pipe.gap_top >= PIPE_GAP_MIN_TOP);
            prop_assert!(pipe.gap_top + PIPE_GAP + 20.0 <= WORLD_HEIGHT);
            let bottom = pipe.bottom_rect();
            prop_assert!(bottom.h > 0.0);
        }
    }
}
