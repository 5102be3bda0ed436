//! Flap - a flappy-bird arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `audio`: Procedural Web Audio sound effects (wasm only)
//! - `highscores`: Persisted high score
//! - `settings`: Audio/HUD preferences

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz; physics constants are per-frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions (pixels, y grows downward)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Bird physics - gravity and flap impulse are per-frame deltas
    pub const GRAVITY: f32 = 0.6;
    pub const FLAP_STRENGTH: f32 = -12.0;
    /// Bird is a fixed-size square at a fixed horizontal position
    pub const BIRD_SIZE: f32 = 25.0;
    pub const BIRD_X: f32 = 100.0;

    /// Pipe defaults
    pub const PIPE_SPEED: f32 = 4.0;
    pub const PIPE_GAP: f32 = 180.0;
    pub const PIPE_WIDTH: f32 = 60.0;
    /// Frames between pipe spawns
    pub const PIPE_SPAWN_INTERVAL: u64 = 120;
    /// Gap top is drawn uniformly from this band; the band guarantees
    /// the full gap fits inside the world (max top + gap < height)
    pub const PIPE_GAP_MIN_TOP: f32 = 100.0;
    pub const PIPE_GAP_MAX_TOP: f32 = WORLD_HEIGHT - 200.0;
}
