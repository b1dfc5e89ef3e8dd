//! Game state and core simulation types
//!
//! Everything the presentation layer reads after a tick lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// A player reached the winning score; waits for a restart
    GameOver,
}

/// Which edge of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The player credited when the ball gets past this side
    pub fn opponent(self) -> Player {
        match self {
            Side::Left => Player::Two,
            Side::Right => Player::One,
        }
    }
}

/// Player 1 is the human on the left, Player 2 the computer on the right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn side(self) -> Side {
        match self {
            Player::One => Side::Left,
            Player::Two => Side::Right,
        }
    }
}

/// Play area bounds, supplied by the render surface every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Left edge x of the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.width - PADDLE_THICKNESS,
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// The ball: a point with a per-tick velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Distance per tick
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BALL_START_X, BALL_START_Y),
            vel: Vec2::new(BALL_START_VX, BALL_START_VY),
        }
    }
}

impl Ball {
    /// Integrate one tick of motion
    pub fn step(&mut self) {
        self.pos += self.vel;
    }
}

/// A paddle, identified by the y of its top edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub y: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self { y: PADDLE_START_Y }
    }
}

impl Paddle {
    pub fn center(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + PADDLE_HEIGHT
    }

    /// Top-edge y that puts the paddle center at `y`
    pub fn top_for_center(y: f32) -> f32 {
        y - PADDLE_HEIGHT / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    pub player1: u32,
    pub player2: u32,
}

impl Scores {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    pub fn award(&mut self, player: Player) {
        match player {
            Player::One => self.player1 += 1,
            Player::Two => self.player2 += 1,
        }
    }

    /// First player at or past the winning score (player 1 checked first)
    pub fn winner(&self) -> Option<Player> {
        if self.player1 >= WINNING_SCORE {
            Some(Player::One)
        } else if self.player2 >= WINNING_SCORE {
            Some(Player::Two)
        } else {
            None
        }
    }
}

/// Things that happened during a tick (for logging, audio, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PaddleHit { side: Side, deflection: f32 },
    WallBounce,
    PointScored { scorer: Player },
    GameOver { winner: Player },
    Restarted,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    /// Human paddle
    pub left: Paddle,
    /// Computer paddle
    pub right: Paddle,
    pub scores: Scores,
    pub phase: GamePhase,
    /// Ticks actually simulated (not counted while game over)
    pub time_ticks: u64,
    /// Events from the most recent simulated tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Winner of a finished game
    pub fn winner(&self) -> Option<Player> {
        if self.is_over() {
            self.scores.winner()
        } else {
            None
        }
    }

    /// Read-only view for the presentation layer
    pub fn snapshot(&self, arena: Arena) -> Snapshot {
        Snapshot {
            arena,
            ball: self.ball,
            left: self.left,
            right: self.right,
            scores: self.scores,
            phase: self.phase,
            winner: self.winner(),
        }
    }
}

/// Everything a frame needs, taken once per tick after the physics step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub arena: Arena,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub scores: Scores,
    pub phase: GamePhase,
    pub winner: Option<Player>,
}
