//! Poke Shooter entry point
//!
//! Handles platform-specific initialization and runs the game loop. On the
//! web this wires DOM input and HUD elements to the simulation; natively it
//! runs a headless autopilot session and prints the final summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent};

    use poke_shooter::Settings;
    use poke_shooter::audio::BackgroundMusic;
    use poke_shooter::consts::*;
    use poke_shooter::platform::FrameClock;
    use poke_shooter::renderer::CanvasRenderer;
    use poke_shooter::sim::{
        Direction, GameEvent, GameState, InputCommand, Level, TickInput, autopilot, tick,
    };

    const MUSIC_SRC: &str = "images/pokesounds.mp3";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        music: BackgroundMusic,
        clock: FrameClock,
        input: TickInput,
        idle_mode: bool,
    }

    impl Game {
        /// Run one simulation tick for this animation frame
        fn update(&mut self, time: f64) {
            let elapsed = self.clock.advance(time);
            let input = if self.idle_mode {
                // Manual pause and restart still go through
                let mut input = autopilot(&self.state);
                input.commands.extend(self.input.session_commands());
                input
            } else {
                self.input.clone()
            };
            tick(&mut self.state, &input, elapsed);
            self.input.clear();

            // Music follows manual pause toggles, after they have been applied
            if input.contains(InputCommand::TogglePause) {
                if self.state.is_paused() {
                    self.music.pause();
                } else {
                    self.music.play_random_part();
                }
            }

            for event in &self.state.events {
                match event {
                    GameEvent::LevelUp(level) => log::info!("Now playing {}", level.label()),
                    GameEvent::GameOver => log::info!("Final score: {}", self.state.score()),
                    _ => {}
                }
            }
        }

        fn render(&self) {
            if let Err(e) = self.renderer.render(&self.state) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self, document: &Document) {
            let hud = self.state.snapshot();
            set_text(document, "score", &format!("Score: {}", hud.score));
            set_text(document, "lives", &format!("Lives: {}", hud.lives));
            set_text(document, "difficulty", &format!("Difficulty: {}", hud.difficulty));
            if self.state.is_running() {
                set_text(document, "timer", &format!("Time: {}", hud.elapsed_secs));
            }

            let level = self.state.level().number();
            set_highlight(document, "easyButton", true);
            set_highlight(document, "mediumButton", level >= Level::Medium.number());
            set_highlight(document, "hardButton", level >= Level::Hard.number());
        }

        fn handle_key_down(&mut self, key: &str) {
            if self.state.is_game_over() && key != "p" && key != "P" {
                self.input.push(InputCommand::Restart);
                return;
            }
            match key {
                "ArrowLeft" => self.input.push(InputCommand::Press(Direction::Left)),
                "ArrowRight" => self.input.push(InputCommand::Press(Direction::Right)),
                "ArrowUp" => self.input.push(InputCommand::Jump(true)),
                " " => self.input.push(InputCommand::Shoot),
                "p" | "P" => self.input.push(InputCommand::TogglePause),
                "s" | "S" => {
                    self.music.toggle_muted();
                }
                "i" | "I" => {
                    self.idle_mode = !self.idle_mode;
                    log::info!("Idle mode: {}", self.idle_mode);
                }
                _ => {}
            }
        }

        fn handle_key_up(&mut self, key: &str) {
            match key {
                "ArrowLeft" => self.input.push(InputCommand::Release(Direction::Left)),
                "ArrowRight" => self.input.push(InputCommand::Release(Direction::Right)),
                "ArrowUp" => self.input.push(InputCommand::Jump(false)),
                _ => {}
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_highlight(document: &Document, id: &str, on: bool) {
        let Some(el) = document.get_element_by_id(id) else {
            return;
        };
        let classes = el.class_list();
        let result = if on {
            classes.add_1("highlight")
        } else {
            classes.remove_1("highlight")
        };
        if let Err(e) = result {
            log::warn!("Failed to update #{} highlight: {:?}", id, e);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let settings_json = canvas.get_attribute("data-settings");
        let (settings, settings_error) = Settings::load(settings_json.as_deref());
        if let Some(level) = settings.level_filter().to_level() {
            if let Err(e) = console_log::init_with_level(level) {
                web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
            }
        }
        if let Some(e) = settings_error {
            log::warn!("Ignoring invalid data-settings ({}), using defaults", e);
        }

        log::info!("Poke Shooter starting...");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed),
            renderer: CanvasRenderer::new(ctx)?,
            music: BackgroundMusic::new(MUSIC_SRC, &settings)?,
            clock: FrameClock::new(),
            input: TickInput::default(),
            idle_mode: settings.autopilot,
        }));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&document, game.clone())?;
        request_animation_frame(game);

        log::info!("Poke Shooter running!");
        Ok(())
    }

    fn setup_input_handlers(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Browsers block autoplay until the first user interaction
        {
            let game = game.clone();
            let mut started = false;
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                if !started {
                    started = true;
                    game.borrow().music.play_random_part();
                }
            });
            document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == " " || event.key().starts_with("Arrow") {
                    event.prevent_default();
                }
                game.borrow_mut().handle_key_down(&event.key());
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().handle_key_up(&event.key());
            });
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_hud(&document);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use poke_shooter::Settings;
    use poke_shooter::consts::FRAME_MS;
    use poke_shooter::sim::{GameEvent, GameState, autopilot, tick};

    let (settings, settings_error) = Settings::load(std::env::args().nth(1).as_deref());
    env_logger::Builder::new()
        .filter_level(settings.level_filter())
        .parse_default_env()
        .init();
    if let Some(e) = settings_error {
        log::warn!("Ignoring invalid settings argument ({}), using defaults", e);
    }

    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    log::info!("Poke Shooter (native, headless autopilot) starting with seed {}", seed);

    // Three simulated minutes at 60 Hz, or until the first game over
    let mut state = GameState::new(seed);
    for _ in 0..(3 * 60 * 60) {
        let input = autopilot(&state);
        tick(&mut state, &input, FRAME_MS);
        if state.events.contains(&GameEvent::GameOver) {
            break;
        }
    }

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
