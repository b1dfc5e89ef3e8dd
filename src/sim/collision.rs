//! Collision detection for the side edges
//!
//! The ball is treated as a point. A paddle only matters at the moment the
//! ball crosses its edge of the arena: if the ball's height falls inside the
//! paddle's span it rebounds, otherwise the point goes to the other player.

use super::state::{Arena, Ball, Paddle, Side};
use crate::consts::DEFLECTION_FACTOR;

/// Outcome of testing the ball against the left and right edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeContact {
    /// Ball is between the edges
    None,
    /// Ball crossed an edge inside the paddle span
    PaddleHit {
        side: Side,
        /// Vertical velocity after the rebound
        deflection: f32,
    },
    /// Ball crossed an edge past the paddle
    Miss { side: Side },
}

/// Whether `y` lies within the paddle's vertical span `[top, top + height)`
#[inline]
pub fn spans(paddle: &Paddle, y: f32) -> bool {
    y >= paddle.y && y < paddle.bottom()
}

/// Vertical speed after a paddle hit at height `y`.
///
/// Proportional to the distance from the paddle center: hits near the middle
/// come back nearly flat, hits near the ends leave at a steep angle.
#[inline]
pub fn deflection(paddle: &Paddle, y: f32) -> f32 {
    (y - paddle.center()) * DEFLECTION_FACTOR
}

/// Test the ball against both side edges.
///
/// The right edge is checked first; the ball can only be past one of them.
pub fn resolve_edge(ball: &Ball, left: &Paddle, right: &Paddle, arena: Arena) -> EdgeContact {
    let (side, paddle) = if ball.pos.x > arena.width {
        (Side::Right, right)
    } else if ball.pos.x < 0.0 {
        (Side::Left, left)
    } else {
        return EdgeContact::None;
    };

    if spans(paddle, ball.pos.y) {
        EdgeContact::PaddleHit {
            side,
            deflection: deflection(paddle, ball.pos.y),
        }
    } else {
        EdgeContact::Miss { side }
    }
}
