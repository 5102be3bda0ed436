//! Game state and core simulation types
//!
//! One `GameState` per session; a restart builds a fresh one.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for start input
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended on a collision
    GameOver,
}

/// One-shot events emitted by the sim, drained by the platform layer
/// each frame (audio cues, high-score handling). The sim itself never
/// touches audio or storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Flap impulse applied
    Flapped,
    /// A pipe was passed
    Scored,
    /// Collision ended the run
    Died,
}

/// The player's bird
#[derive(Debug, Clone, Copy)]
pub struct Bird {
    /// Vertical position of the top edge (x is fixed at BIRD_X)
    pub y: f32,
    /// Vertical velocity, pixels per frame
    pub vel: f32,
    /// Visual tilt in degrees, derived from velocity each frame
    pub rotation: f32,
    /// Wing animation phase, advances while playing
    pub wing_phase: f32,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            y: WORLD_HEIGHT / 2.0,
            vel: 0.0,
            rotation: 0.0,
            wing_phase: 0.0,
        }
    }

    /// Apply gravity and integrate position (once per frame while playing).
    /// No bounds clamping here - out-of-bounds is a collision, not a
    /// position fix.
    pub fn update(&mut self) {
        self.vel += GRAVITY;
        self.y += self.vel;
        self.rotation = (self.vel * 3.0).clamp(-30.0, 90.0);
        self.wing_phase += 0.2;
    }

    /// Instantaneous upward impulse
    pub fn flap(&mut self) {
        self.vel = FLAP_STRENGTH;
    }

    /// Bounding box for collision checks
    pub fn aabb(&self) -> Aabb {
        Aabb::new(BIRD_X, self.y, BIRD_SIZE, BIRD_SIZE)
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// A pipe pair: a top rectangle down to `gap_top` and a bottom
/// rectangle from `gap_top + PIPE_GAP` to the floor.
#[derive(Debug, Clone, Copy)]
pub struct Pipe {
    /// Left edge, decreases each frame
    pub x: f32,
    /// Top of the vertical gap
    pub gap_top: f32,
    /// Set once when the bird passes this pipe; never reverts
    pub passed: bool,
}

impl Pipe {
    pub fn new(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            gap_top,
            passed: false,
        }
    }

    /// Move left at the constant pipe speed
    pub fn advance(&mut self) {
        self.x -= PIPE_SPEED;
    }

    pub fn top_rect(&self) -> Aabb {
        Aabb::new(self.x, 0.0, PIPE_WIDTH, self.gap_top)
    }

    pub fn bottom_rect(&self) -> Aabb {
        let bottom_y = self.gap_top + PIPE_GAP;
        Aabb::new(self.x, bottom_y, PIPE_WIDTH, WORLD_HEIGHT - bottom_y)
    }

    /// True once the right edge has left the world
    pub fn is_off_screen(&self) -> bool {
        self.x + PIPE_WIDTH < 0.0
    }
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Seeded RNG for pipe gap placement
    pub rng: Pcg32,
    /// Frame counter, drives the pipe spawn cadence
    pub frame: u64,
    /// Current phase
    pub phase: GamePhase,
    pub bird: Bird,
    /// Active pipes, oldest (leftmost) first
    pub pipes: Vec<Pipe>,
    /// Pipes passed this session
    pub score: u32,
    /// Events emitted since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session in the menu phase
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            frame: 0,
            phase: GamePhase::Menu,
            bird: Bird::new(),
            pipes: Vec::new(),
            score: 0,
            events: Vec::new(),
        }
    }

    /// Take the events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
