//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, check_collision};
pub use state::{Bird, GameEvent, GamePhase, GameState, Pipe};
pub use tick::{TickInput, tick};
