//! Computer opponent
//!
//! Chases the ball's height at a fixed speed, ignoring small misalignments so
//! the paddle doesn't jitter when the ball is roughly centered on it.

use super::state::{Ball, Paddle};
use crate::consts::{OPPONENT_DEAD_ZONE, OPPONENT_STEP};

/// Move the opponent paddle one step toward the ball.
///
/// The paddle is never clamped to the arena; it can chase a ball that bounces
/// past the top or bottom edge off screen.
pub fn update_opponent(ball: &Ball, paddle: &mut Paddle) {
    let center = paddle.center();
    if center < ball.pos.y - OPPONENT_DEAD_ZONE {
        paddle.y += OPPONENT_STEP;
    } else if center > ball.pos.y + OPPONENT_DEAD_ZONE {
        paddle.y -= OPPONENT_STEP;
    }
}
