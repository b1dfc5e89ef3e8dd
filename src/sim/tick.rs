//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::collision::{EdgeContact, resolve_edge};
use super::opponent::update_opponent;
use super::state::{Arena, GameEvent, GamePhase, GameState, Scores};

/// Input commands for a single tick (sampled once, last write wins)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Top edge for the human paddle (from pointer position)
    pub paddle_y: Option<f32>,
    /// Start a new game (click/tap); ignored unless the game is over
    pub restart: bool,
}

/// Apply one tick of input, then advance the simulation.
///
/// Clears the previous tick's events first, so `state.events` afterwards holds
/// exactly what this tick produced.
pub fn tick(state: &mut GameState, input: &TickInput, arena: Arena) {
    state.events.clear();

    if let Some(y) = input.paddle_y {
        state.left.y = y;
    }
    if input.restart {
        restart(state);
    }

    advance(state, arena);
}

/// Physics step: opponent, ball motion, edge and wall resolution.
///
/// Does nothing once the game is over. Events are appended to `state.events`.
pub fn advance(state: &mut GameState, arena: Arena) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    update_opponent(&state.ball, &mut state.right);

    state.ball.step();

    match resolve_edge(&state.ball, &state.left, &state.right, arena) {
        EdgeContact::None => {}
        EdgeContact::PaddleHit { side, deflection } => {
            state.ball.vel.x = -state.ball.vel.x;
            state.ball.vel.y = deflection;
            log::debug!("{:?} paddle hit, vy = {:.2}", side, deflection);
            state.events.push(GameEvent::PaddleHit { side, deflection });
        }
        EdgeContact::Miss { side } => {
            let scorer = side.opponent();
            // Must land before the reset reads the scores
            state.scores.award(scorer);
            log::info!(
                "{:?} scores ({} - {})",
                scorer,
                state.scores.player1,
                state.scores.player2
            );
            state.events.push(GameEvent::PointScored { scorer });
            reset_round(state, arena);
        }
    }

    // No position correction: an overshooting ball turns around next tick
    if state.ball.pos.y > arena.height || state.ball.pos.y < 0.0 {
        state.ball.vel.y = -state.ball.vel.y;
        log::debug!("Wall bounce at y = {:.1}", state.ball.pos.y);
        state.events.push(GameEvent::WallBounce);
    }
}

/// Serve the next round after a point.
///
/// Ends the game if someone has reached the winning score. The serve always
/// reverses the ball's horizontal direction, whichever side scored.
pub fn reset_round(state: &mut GameState, arena: Arena) {
    if let Some(winner) = state.scores.winner() {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over, {:?} wins {} - {}",
            winner,
            state.scores.player1,
            state.scores.player2
        );
        state.events.push(GameEvent::GameOver { winner });
    }

    state.ball.vel.x = -state.ball.vel.x;
    state.ball.pos = arena.center();
}

/// Start a new game after game over. No effect while playing.
///
/// Only scores and phase change; the ball continues from where the final
/// reset left it.
pub fn restart(state: &mut GameState) {
    if state.phase != GamePhase::GameOver {
        return;
    }
    state.scores = Scores::default();
    state.phase = GamePhase::Playing;
    log::info!("Game restarted");
    state.events.push(GameEvent::Restarted);
}
