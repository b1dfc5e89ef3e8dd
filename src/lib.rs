//! Ping-a-Pong - classic two-paddle Pong against a computer opponent
//!
//! Core modules:
//! - `sim`: Deterministic simulation (opponent, physics, scoring, game phase)
//! - `host`: Fixed-step session driver and input adapter
//! - `renderer`: Frame layout and Canvas 2D presentation
//! - `settings`: Host and presentation preferences

pub mod host;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use host::Session;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Default host tick rate (simulation ticks per wall-clock second)
    pub const TICKS_PER_SECOND: u32 = 30;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta the host will feed the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Paddle dimensions, shared by both sides
    pub const PADDLE_HEIGHT: f32 = 120.0;
    pub const PADDLE_THICKNESS: f32 = 15.0;
    /// Both paddles start with their top edge here
    pub const PADDLE_START_Y: f32 = 250.0;

    /// Ball spawn (first serve only; later serves start at arena center)
    pub const BALL_START_X: f32 = 50.0;
    pub const BALL_START_Y: f32 = 50.0;
    pub const BALL_START_VX: f32 = 12.0;
    pub const BALL_START_VY: f32 = 7.0;
    /// Drawn radius of the ball (collision treats the ball as a point)
    pub const BALL_RADIUS: f32 = 10.0;

    /// Vertical deflection per unit of offset from paddle center
    pub const DEFLECTION_FACTOR: f32 = 0.25;

    /// Opponent holds still while the ball is within this band of its center
    pub const OPPONENT_DEAD_ZONE: f32 = 45.0;
    /// Opponent movement per tick
    pub const OPPONENT_STEP: f32 = 10.0;

    /// Points needed to win
    pub const WINNING_SCORE: u32 = 3;
}
