//! Draw list generation for 2D primitives
//!
//! Positions are in arena units, origin top-left. Later commands paint over
//! earlier ones.

use crate::consts::{BALL_RADIUS, PADDLE_HEIGHT, PADDLE_THICKNESS};
use crate::settings::Settings;
use crate::sim::{Player, Side, Snapshot};

/// Spacing between dashes of the center net
const NET_SPACING: f32 = 39.0;
const NET_DASH_WIDTH: f32 = 3.0;
const NET_DASH_HEIGHT: f32 = 20.0;

const SCORE_FONT: &str = "bold 36px sans-serif";
const PROMPT_FONT: &str = "12px sans-serif";

/// A single drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: String,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: String,
    },
    /// Text anchored at its left baseline
    Text {
        text: String,
        x: f32,
        y: f32,
        font: &'static str,
        color: String,
    },
}

fn rect(x: f32, y: f32, w: f32, h: f32, color: &str) -> DrawCmd {
    DrawCmd::Rect {
        x,
        y,
        w,
        h,
        color: color.to_string(),
    }
}

fn text(text: impl Into<String>, x: f32, y: f32, font: &'static str, color: &str) -> DrawCmd {
    DrawCmd::Text {
        text: text.into(),
        x,
        y,
        font,
        color: color.to_string(),
    }
}

/// Build the draw list for one frame
pub fn frame(snap: &Snapshot, settings: &Settings) -> Vec<DrawCmd> {
    let (w, h) = (snap.arena.width, snap.arena.height);
    let fg = settings.foreground_color.as_str();

    let mut cmds = vec![rect(0.0, 0.0, w, h, &settings.background_color)];

    if let Some(winner) = snap.winner {
        cmds.extend(winning_screen(winner, w, h, fg));
        return cmds;
    }

    if settings.show_net {
        let mut y = 0.0;
        while y <= h {
            cmds.push(rect(w / 2.0, y, NET_DASH_WIDTH, NET_DASH_HEIGHT, fg));
            y += NET_SPACING;
        }
    }

    for (side, paddle) in [(Side::Left, snap.left), (Side::Right, snap.right)] {
        cmds.push(rect(
            snap.arena.paddle_x(side),
            paddle.y,
            PADDLE_THICKNESS,
            PADDLE_HEIGHT,
            fg,
        ));
    }

    cmds.push(DrawCmd::Circle {
        x: snap.ball.pos.x,
        y: snap.ball.pos.y,
        radius: BALL_RADIUS,
        color: settings.ball_color.clone(),
    });

    cmds.push(text(snap.scores.player1.to_string(), 250.0, h - 450.0, SCORE_FONT, fg));
    cmds.push(text(
        snap.scores.player2.to_string(),
        w - 250.0,
        h - 450.0,
        SCORE_FONT,
        fg,
    ));

    cmds
}

fn winning_screen(winner: Player, w: f32, h: f32, fg: &str) -> [DrawCmd; 2] {
    match winner {
        Player::One => [
            text("YOU WON!!", w - 470.0, h - 350.0, "bold 21px sans-serif", fg),
            text("Click to Continue", w - 445.0, h - 150.0, PROMPT_FONT, fg),
        ],
        Player::Two => [
            text("The Computer Won!", w - 530.0, h - 350.0, "bold 24px sans-serif", fg),
            text("Click to Continue", w - 455.0, h - 150.0, PROMPT_FONT, fg),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Arena, GamePhase, GameState};

    fn texts(cmds: &[DrawCmd]) -> Vec<&str> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_playing_frame_layout() {
        let mut state = GameState::new();
        state.scores.player1 = 2;
        state.scores.player2 = 1;
        let cmds = frame(&state.snapshot(Arena::new(800.0, 600.0)), &Settings::default());

        assert_eq!(
            cmds[0],
            rect(0.0, 0.0, 800.0, 600.0, "#7f4bd1"),
            "background first"
        );
        // Net dashes at 0, 39, ..., 585
        let dashes = cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Rect { x, w, .. } if *x == 400.0 && *w == 3.0))
            .count();
        assert_eq!(dashes, 16);

        assert!(cmds.contains(&rect(0.0, 250.0, 15.0, 120.0, "white")));
        assert!(cmds.contains(&rect(785.0, 250.0, 15.0, 120.0, "white")));
        assert!(cmds.contains(&DrawCmd::Circle {
            x: 50.0,
            y: 50.0,
            radius: 10.0,
            color: "#ffff00".to_string(),
        }));
        assert_eq!(texts(&cmds), vec!["2", "1"]);
        assert!(cmds.contains(&text("1", 550.0, 150.0, SCORE_FONT, "white")));
    }

    #[test]
    fn test_net_can_be_hidden() {
        let settings = Settings {
            show_net: false,
            ..Default::default()
        };
        let cmds = frame(&GameState::new().snapshot(Arena::default()), &settings);
        // Background, two paddles, ball, two scores
        assert_eq!(cmds.len(), 6);
    }

    #[test]
    fn test_game_over_shows_only_result() {
        let mut state = GameState::new();
        state.scores.player2 = 3;
        state.phase = GamePhase::GameOver;
        let cmds = frame(&state.snapshot(Arena::new(800.0, 600.0)), &Settings::default());

        assert_eq!(cmds.len(), 3);
        assert_eq!(texts(&cmds), vec!["The Computer Won!", "Click to Continue"]);
        assert!(cmds.contains(&text(
            "The Computer Won!",
            270.0,
            250.0,
            "bold 24px sans-serif",
            "white"
        )));
    }

    #[test]
    fn test_player_win_message() {
        let mut state = GameState::new();
        state.scores.player1 = 3;
        state.phase = GamePhase::GameOver;
        let cmds = frame(&state.snapshot(Arena::default()), &Settings::default());
        assert_eq!(texts(&cmds), vec!["YOU WON!!", "Click to Continue"]);
    }
}
