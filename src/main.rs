//! Ping-a-Pong entry point
//!
//! Browser: wires the canvas and pointer events to a `Session` and runs the
//! animation loop. Native: plays a headless demo match and prints the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use ping_a_pong::renderer::{CanvasRenderer, frame};
    use ping_a_pong::sim::Arena;
    use ping_a_pong::{Session, Settings};

    /// Game instance holding all state
    struct Game {
        session: Session,
        settings: Settings,
        canvas: HtmlCanvasElement,
        renderer: CanvasRenderer,
        last_time: f64,
    }

    impl Game {
        /// Bounds are read from the canvas every frame so resizes take effect
        fn arena(&self) -> Arena {
            Arena::new(self.canvas.width() as f32, self.canvas.height() as f32)
        }

        fn update(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                self.settings.sim_dt()
            };
            self.last_time = time;

            let arena = self.arena();
            self.session.update(dt, arena);
        }

        fn render(&self) {
            let snapshot = self.session.state.snapshot(self.arena());
            if let Err(e) = self.renderer.draw(&frame(&snapshot, &self.settings)) {
                log::warn!("Render error: {:?}", e);
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Ping-a-Pong starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(&settings),
            renderer: CanvasRenderer::new(&canvas)?,
            settings,
            canvas: canvas.clone(),
            last_time: 0.0,
        }));

        setup_input_handlers(&canvas, game.clone())?;
        request_animation_frame(game)?;

        log::info!("Ping-a-Pong running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Mouse move - paddle follows the pointer
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let y = event.client_y() as f32 - rect.top() as f32;
                game.borrow_mut().session.pointer_moved(y);
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse down - restart after game over
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().session.pointer_pressed();
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard - idle/demo mode toggle
        {
            let window = web_sys::window().ok_or("no window")?;
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if matches!(event.key().as_str(), "i" | "I") {
                    game.borrow_mut().session.toggle_autoplay();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
        }

        if let Err(e) = request_animation_frame(game) {
            log::error!("Animation loop stopped: {:?}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use ping_a_pong::sim::GameEvent;
    use ping_a_pong::{Session, Settings};

    env_logger::init();
    log::info!("Ping-a-Pong (native) starting headless demo match...");

    let settings = Settings::load();
    let arena = settings.headless_arena;
    let mut session = Session::new(&settings);
    session.set_autoplay(true);

    let mut ticks = 0;
    while ticks < settings.headless_max_ticks {
        let events = session.step(arena);
        ticks += 1;
        if events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }))
        {
            break;
        }
    }

    match session.state.winner() {
        Some(winner) => log::info!("{:?} won after {} ticks", winner, ticks),
        None => log::warn!("No winner after {} ticks", ticks),
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&session.state.snapshot(arena))?
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
