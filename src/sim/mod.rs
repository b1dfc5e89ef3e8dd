//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, driven by the host
//! - Seeded RNG only (autopilot)
//! - Arena bounds passed in every tick, never cached
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod opponent;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{EdgeContact, deflection, resolve_edge, spans};
pub use opponent::update_opponent;
pub use state::{
    Arena, Ball, GameEvent, GamePhase, GameState, Paddle, Player, Scores, Side, Snapshot,
};
pub use tick::{TickInput, advance, reset_round, restart, tick};
