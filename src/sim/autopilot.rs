//! Idle/demo mode player for the human paddle
//!
//! Eases the paddle toward the ball, aiming each return off a seeded spot on
//! the paddle. Off-center returns come back steep enough to beat the computer
//! now and then, and a wide aim sometimes costs the autopilot the point.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Arena, GameState, Paddle};
use super::tick::TickInput;

/// Largest distance from paddle center the autopilot aims to hit with
const AIM_SPREAD: f32 = 55.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    /// Fraction of the remaining distance covered each tick (0-1)
    reaction: f32,
    /// Offset of the paddle center from the ball for the current rally
    aim: f32,
    incoming: bool,
}

impl Autopilot {
    pub fn new(seed: u64, reaction: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            reaction: reaction.clamp(0.0, 1.0),
            aim: 0.0,
            incoming: false,
        }
    }

    /// Input for the next tick.
    ///
    /// Follows the ball while it heads for the left edge and drifts back to
    /// the middle otherwise. Asks for a restart as soon as the game is over.
    pub fn steer(&mut self, state: &GameState, arena: Arena) -> TickInput {
        let incoming = state.ball.vel.x < 0.0;
        if incoming && !self.incoming {
            self.aim = self.rng.random_range(-AIM_SPREAD..AIM_SPREAD);
        }
        self.incoming = incoming;

        let center = state.left.center();
        let target = if incoming {
            state.ball.pos.y + self.aim
        } else {
            arena.height / 2.0
        };
        let next_center = center + (target - center) * self.reaction;

        TickInput {
            paddle_y: Some(Paddle::top_for_center(next_center)),
            restart: state.is_over(),
        }
    }
}
