//! Fixed-step session driver
//!
//! Sits between the platform (timer, pointer events) and the simulation.
//! Pointer events only record intent; the simulation samples it once per tick.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::settings::Settings;
use crate::sim::{Arena, Autopilot, GameEvent, GameState, Paddle, TickInput, tick};

/// A running game plus its pending input
pub struct Session {
    pub state: GameState,
    input: TickInput,
    accumulator: f32,
    sim_dt: f32,
    autopilot: Option<Autopilot>,
    autoplay_seed: u64,
    autoplay_reaction: f32,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: GameState::new(),
            input: TickInput::default(),
            accumulator: 0.0,
            sim_dt: settings.sim_dt(),
            autopilot: None,
            autoplay_seed: settings.autoplay_seed,
            autoplay_reaction: settings.autoplay_reaction,
        }
    }

    /// Pointer moved to `y` (surface coordinates); centers the paddle on it
    pub fn pointer_moved(&mut self, y: f32) {
        self.input.paddle_y = Some(Paddle::top_for_center(y));
    }

    /// Pointer pressed; restarts a finished game on the next tick
    pub fn pointer_pressed(&mut self) {
        self.input.restart = true;
    }

    pub fn autoplay(&self) -> bool {
        self.autopilot.is_some()
    }

    pub fn set_autoplay(&mut self, on: bool) {
        if on == self.autoplay() {
            return;
        }
        self.autopilot = on.then(|| Autopilot::new(self.autoplay_seed, self.autoplay_reaction));
        log::info!("Autoplay: {}", on);
    }

    pub fn toggle_autoplay(&mut self) {
        self.set_autoplay(!self.autoplay());
    }

    /// Run exactly one tick with the pending input
    pub fn step(&mut self, arena: Arena) -> Vec<GameEvent> {
        let input = match self.autopilot.as_mut() {
            Some(pilot) => pilot.steer(&self.state, arena),
            None => self.input.clone(),
        };
        tick(&mut self.state, &input, arena);

        // Restart is edge-triggered; the paddle target persists
        self.input.restart = false;

        self.state.events.clone()
    }

    /// Feed `dt` seconds of wall-clock time and run the ticks it covers
    pub fn update(&mut self, dt: f32, arena: Arena) -> Vec<GameEvent> {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= self.sim_dt && substeps < MAX_SUBSTEPS {
            events.extend(self.step(arena));
            self.accumulator -= self.sim_dt;
            substeps += 1;
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, Scores};

    const ARENA: Arena = Arena {
        width: 800.0,
        height: 600.0,
    };

    fn session() -> Session {
        Session::new(&Settings::default())
    }

    #[test]
    fn test_pointer_centers_paddle() {
        let mut session = session();
        session.pointer_moved(300.0);
        session.step(ARENA);
        assert_eq!(session.state.left.y, 240.0);
    }

    #[test]
    fn test_update_runs_whole_ticks() {
        let mut session = session();
        let dt = Settings::default().sim_dt();

        session.update(dt * 0.5, ARENA);
        assert_eq!(session.state.time_ticks, 0);

        session.update(dt * 0.6, ARENA);
        assert_eq!(session.state.time_ticks, 1);

        session.update(dt * 2.0, ARENA);
        assert_eq!(session.state.time_ticks, 3);
    }

    #[test]
    fn test_update_caps_long_frames() {
        let mut session = session();
        // A one-minute stall only counts as MAX_FRAME_DT (about three ticks)
        session.update(60.0, ARENA);
        assert!((2..=3).contains(&session.state.time_ticks));
    }

    #[test]
    fn test_restart_is_one_shot() {
        let mut session = session();
        session.pointer_pressed();
        session.step(ARENA);
        assert_eq!(session.state.phase, GamePhase::Playing);

        // A click during play must not linger until game over
        session.state.phase = GamePhase::GameOver;
        session.state.scores.player2 = 3;
        session.step(ARENA);
        assert_eq!(session.state.phase, GamePhase::GameOver);

        session.pointer_pressed();
        let events = session.step(ARENA);
        assert_eq!(session.state.phase, GamePhase::Playing);
        assert_eq!(session.state.scores, Scores::default());
        assert_eq!(events.first(), Some(&GameEvent::Restarted));
    }

    #[test]
    fn test_autoplay_toggle() {
        let mut session = session();
        assert!(!session.autoplay());
        session.toggle_autoplay();
        assert!(session.autoplay());
        session.set_autoplay(false);
        assert!(!session.autoplay());
    }

    #[test]
    fn test_autoplay_match_finishes() {
        let settings = Settings::default();
        let mut session = Session::new(&settings);
        session.set_autoplay(true);

        let mut finished = false;
        for _ in 0..settings.headless_max_ticks {
            let events = session.step(settings.headless_arena);
            if events.iter().any(|e| matches!(e, GameEvent::GameOver { .. })) {
                finished = true;
                break;
            }
        }
        assert!(finished, "demo match never ended: {:?}", session.state.scores);
    }
}
