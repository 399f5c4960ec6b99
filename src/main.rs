//! Flappy Web entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use flappy_web::GameConfig;
    use flappy_web::leaderboard::LeaderboardStore;
    use flappy_web::platform::LocalStorage;
    use flappy_web::renderer::CanvasRenderer;
    use flappy_web::sim::{GameEvent, GamePhase, Session, autopilot};

    /// Game instance holding all state
    struct Game {
        session: Session,
        store: LeaderboardStore<LocalStorage>,
        renderer: CanvasRenderer,
        last_time: f64,
        /// Idle/demo mode - the autopilot plays
        idle_mode: bool,
        /// Leaderboard list needs rebuilding
        leaderboard_dirty: bool,
    }

    impl Game {
        fn new(
            session: Session,
            store: LeaderboardStore<LocalStorage>,
            renderer: CanvasRenderer,
        ) -> Self {
            Self {
                session,
                store,
                renderer,
                last_time: 0.0,
                idle_mode: false,
                leaderboard_dirty: true,
            }
        }

        /// Feed elapsed frame time to the session and react to its events
        fn update(&mut self, time: f64) {
            let elapsed = if self.last_time > 0.0 {
                time - self.last_time
            } else {
                0.0
            };
            self.last_time = time;

            if self.idle_mode {
                if self.session.phase() == GamePhase::GameOver {
                    self.session.restart();
                }
                if autopilot::should_jump(self.session.state()) {
                    self.jump();
                }
            }

            for event in self.session.advance(elapsed) {
                if let GameEvent::GameOver { score, .. } = event {
                    self.finish_run(score);
                }
            }
        }

        fn jump(&mut self) {
            for event in self.session.jump() {
                if event == GameEvent::Started {
                    // Don't count time spent idle as simulation time
                    self.last_time = 0.0;
                }
            }
        }

        fn restart(&mut self) {
            if self.session.restart() {
                log::info!("Game restarted");
            }
        }

        /// Ask for a name and save the score (skipped in demo mode)
        fn finish_run(&mut self, score: u32) {
            if self.idle_mode {
                log::info!("Demo run ended with score {}", score);
                return;
            }

            let default = self.store.last_player_name();
            let name = web_sys::window()
                .and_then(|w| {
                    w.prompt_with_message_and_default("Game over! Enter your name:", &default)
                        .ok()
                })
                .flatten();
            self.store.record(name.as_deref(), score);
            self.leaderboard_dirty = true;

            // The prompt blocks the page; resume timing fresh
            self.last_time = 0.0;
        }

        fn render(&self) {
            self.renderer.render(self.session.state());
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let score = self.session.score().to_string();
            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&score));
            }

            if let Some(el) = document.get_element_by_id("demo-badge") {
                let class = if self.idle_mode { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }

            // Show/hide game over
            if let Some(el) = document.get_element_by_id("game-over") {
                if self.session.phase() == GamePhase::GameOver && !self.idle_mode {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&score));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            if self.leaderboard_dirty {
                self.leaderboard_dirty = false;
                render_leaderboard(&document, &self.store);
            }
        }
    }

    /// Rebuild the best-scores list. Names go in as text, never markup.
    fn render_leaderboard(document: &Document, store: &LeaderboardStore<LocalStorage>) {
        let Some(list) = document.get_element_by_id("best-scores") else {
            return;
        };
        list.set_inner_html("");
        for entry in store.leaderboard().entries() {
            let Ok(item) = document.create_element("li") else {
                continue;
            };
            item.set_text_content(Some(&format!("{}: {}", entry.name, entry.score)));
            let _ = list.append_child(&item);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Web starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let config = match GameConfig::bundled() {
            Ok(config) => config,
            Err(e) => {
                log::error!("Invalid game config: {}", e);
                if let Some(el) = document.get_element_by_id("loading") {
                    el.set_text_content(Some(&format!("Invalid game config: {}", e)));
                }
                return;
            }
        };

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let renderer = CanvasRenderer::new(&canvas, &config).expect("Failed to get 2D context");
        let store = LeaderboardStore::open(LocalStorage::open());

        let seed = js_sys::Date::now() as u64;
        let session = Session::new(config, seed);
        let game = Rc::new(RefCell::new(Game::new(session, store, renderer)));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Flappy Web running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Click anywhere on the game surface
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().jump();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "Space" => {
                        // Keep the page from scrolling
                        event.prevent_default();
                        g.jump();
                    }
                    "Enter" | "KeyR" if g.session.phase() == GamePhase::GameOver => g.restart(),
                    "KeyI" => {
                        g.idle_mode = !g.idle_mode;
                        log::info!("Idle mode: {}", g.idle_mode);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().restart();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), flappy_web::ConfigError> {
    use flappy_web::{GameConfig, LeaderboardStore, MemoryStorage};

    env_logger::init();
    log::info!("Flappy Web (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let config = GameConfig::bundled()?;
    let mut store = LeaderboardStore::open(MemoryStorage::new());

    let base_seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    for run in 1..=demo::RUNS {
        let score = demo::play(config, base_seed.wrapping_add(run));
        store.save(&format!("autopilot #{}", run), score);
    }

    println!("\nBest scores:");
    for (rank, entry) in store.leaderboard().entries().iter().enumerate() {
        println!("{:>2}. {:<16} {}", rank + 1, entry.name, entry.score);
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use flappy_web::GameConfig;
    use flappy_web::sim::{GameEvent, Session, autopilot};

    /// Headless runs per invocation
    pub const RUNS: u64 = 3;
    /// Simulated 60 Hz display
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Stop a run that survives this long
    const LIMIT_MS: f64 = 120_000.0;

    /// Let the autopilot play one game; returns the final score
    pub fn play(config: GameConfig, seed: u64) -> u32 {
        let mut session = Session::new(config, seed);
        let mut elapsed = 0.0;

        while elapsed < LIMIT_MS {
            if autopilot::should_jump(session.state()) {
                session.jump();
            }
            for event in session.advance(FRAME_MS) {
                if let GameEvent::GameOver { score, cause } = event {
                    println!(
                        "seed {}: crashed into {} with score {}",
                        seed,
                        cause.as_str(),
                        score
                    );
                    return score;
                }
            }
            elapsed += FRAME_MS;
        }

        log::info!("seed {}: time limit reached", seed);
        println!("seed {}: survived with score {}", seed, session.score());
        session.score()
    }
}
