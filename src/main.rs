//! Jungle Run entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, HtmlInputElement, KeyboardEvent};

    use jungle_run::HudSnapshot;
    use jungle_run::Settings;
    use jungle_run::persistence;
    use jungle_run::platform::{FrameClock, InputAction, InputState, LocalStorage};
    use jungle_run::renderer::CanvasRenderer;
    use jungle_run::sim::{GameEvent, GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        renderer: Option<CanvasRenderer>,
        clock: FrameClock,
        input: InputState,
        storage: LocalStorage,
        player_name: String,
    }

    impl Game {
        fn new(seed: u64, viewport_width: f32) -> Self {
            let storage = LocalStorage::open();
            let settings = Settings::load(&storage);
            let high_score = persistence::load_high_score(&storage);
            let player_name = persistence::load_player_name(&storage);
            Self {
                state: GameState::new(settings.sim_config(viewport_width), seed, high_score),
                settings,
                renderer: None,
                clock: FrameClock::new(),
                input: InputState::new(),
                storage,
                player_name,
            }
        }

        /// Run simulation ticks for this frame
        fn update(&mut self, time: f64) {
            let steps = self.clock.advance(time);
            for _ in 0..steps {
                let input = self.input.take_tick_input();
                tick(&mut self.state, &input);
                self.handle_events();
            }
        }

        fn handle_events(&mut self) {
            for event in self.state.drain_events() {
                match event {
                    GameEvent::NewHighScore(score) => {
                        persistence::save_high_score(&mut self.storage, score);
                    }
                    GameEvent::Restarted => self.clock.reset(),
                    _ => {}
                }
            }
        }

        fn render(&self) {
            if let Some(ref renderer) = self.renderer {
                renderer.render(&self.state, self.settings.effective_screen_flash());
            }
        }

        fn set_player_name(&mut self, raw: &str) {
            self.player_name = persistence::save_player_name(&mut self.storage, raw);
        }

        /// Update HUD elements in DOM
        fn update_hud(&self, document: &Document) {
            let hud = HudSnapshot::from_state(&self.state);
            set_text(document, "score", &hud.score.to_string());
            set_text(document, "high-score", &hud.high_score.to_string());
            set_text(document, "deaths", &hud.deaths.to_string());
            set_text(document, "mega-status", &hud.mega_status);
            set_text(document, "status", hud.status);
            set_text(document, "pause-btn", hud.pause_label);
            set_text(document, "current-player", &self.player_name);
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            if el.text_content().as_deref() != Some(text) {
                el.set_text_content(Some(text));
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Jungle Run starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, canvas.width() as f32)));
        game.borrow_mut().renderer = CanvasRenderer::new(&canvas);
        if game.borrow().renderer.is_none() {
            log::error!("Canvas2D context unavailable");
        }

        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(&document, game.clone());
        setup_buttons(&document, game.clone());
        setup_player_name(&document, game.clone());
        setup_blur(game.clone());

        request_animation_frame(game);

        log::info!("Jungle Run running!");
    }

    fn setup_keyboard(document: &Document, game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                // Typing a name shouldn't move the player
                if is_text_input(&event) {
                    return;
                }
                if game.borrow_mut().input.key_down(&event.key()).is_some() {
                    event.prevent_default();
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.key());
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn is_text_input(event: &KeyboardEvent) -> bool {
        event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .is_some()
    }

    /// On-screen controls (`data-action`), plus the restart and pause buttons
    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        if let Ok(list) = document.query_selector_all("[data-action]") {
            for i in 0..list.length() {
                let Some(btn) = list.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                    continue;
                };
                let Some(action) = btn
                    .dataset()
                    .get("action")
                    .and_then(|name| InputAction::from_name(&name))
                else {
                    continue;
                };

                if action.is_held() {
                    bind_pointer(&btn, "pointerdown", game.clone(), move |input| {
                        input.press(action)
                    });
                    for release in ["pointerup", "pointerleave", "pointercancel"] {
                        bind_pointer(&btn, release, game.clone(), move |input| {
                            input.release(action)
                        });
                    }
                } else {
                    bind_pointer(&btn, "click", game.clone(), move |input| input.tap(action));
                }
            }
        }

        for (id, action) in [
            ("restart-btn", InputAction::Restart),
            ("pause-btn", InputAction::Pause),
        ] {
            if let Some(btn) = document.get_element_by_id(id) {
                bind_pointer(&btn, "click", game.clone(), move |input| input.tap(action));
            }
        }
    }

    fn bind_pointer(
        target: &web_sys::EventTarget,
        event_name: &str,
        game: Rc<RefCell<Game>>,
        apply: impl Fn(&mut InputState) + 'static,
    ) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            apply(&mut game.borrow_mut().input);
        });
        let _ = target.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_player_name(document: &Document, game: Rc<RefCell<Game>>) {
        let Some(name_input) = document
            .get_element_by_id("player-name")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        name_input.set_value(&game.borrow().player_name);

        let submit = {
            let game = game.clone();
            let name_input = name_input.clone();
            move || {
                let mut g = game.borrow_mut();
                g.set_player_name(&name_input.value());
                name_input.set_value(&g.player_name);
            }
        };

        if let Some(btn) = document.get_element_by_id("set-player-btn") {
            let submit = submit.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                submit();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                submit();
            }
        });
        let _ = name_input
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Drop held directions when the window loses focus
    fn setup_blur(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().input.clear_held();
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
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
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_hud(&document);
            }
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
fn main() {
    env_logger::init();
    log::info!("Jungle Run (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 to play in the browser");

    run_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted run: keep running right, jump and shoot on a rhythm,
/// fire the mega shot whenever it's ready.
#[cfg(not(target_arch = "wasm32"))]
fn run_demo() {
    use jungle_run::consts::{DEFAULT_VIEWPORT_WIDTH, TICK_RATE_HZ};
    use jungle_run::persistence::{self, MemoryStore};
    use jungle_run::platform::{InputAction, InputState};
    use jungle_run::sim::{GameEvent, GameState, tick};
    use jungle_run::{HudSnapshot, Settings};

    const DEMO_SECONDS: u32 = 30;

    let mut store = MemoryStore::new();
    let settings = Settings::load(&store);
    let name = persistence::save_player_name(&mut store, "Demo");
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut state = GameState::new(
        settings.sim_config(DEFAULT_VIEWPORT_WIDTH),
        seed,
        persistence::load_high_score(&store),
    );
    let mut input = InputState::new();
    input.press(InputAction::Right);
    log::info!("{} starts a {}s run with seed {}", name, DEMO_SECONDS, seed);

    for t in 0..DEMO_SECONDS * TICK_RATE_HZ {
        if t % 90 == 0 {
            input.tap(InputAction::Jump);
        }
        if t % 6 == 0 {
            input.tap(InputAction::Shoot);
        }
        if state.mega_cooldown() == 0 && state.enemies().len() >= 3 {
            input.tap(InputAction::MegaShot);
        }

        tick(&mut state, &input.take_tick_input());

        for event in state.drain_events() {
            match event {
                GameEvent::NewHighScore(score) => persistence::save_high_score(&mut store, score),
                GameEvent::MegaShot { kills } => log::info!("Mega shot cleared {} enemies", kills),
                GameEvent::PlayerDied => log::info!("Died at camera {:.0}", state.camera_x()),
                _ => {}
            }
        }
    }

    let hud = HudSnapshot::from_state(&state);
    match serde_json::to_string(&hud) {
        Ok(json) => log::info!("Final HUD: {}", json),
        Err(e) => log::warn!("Failed to encode HUD: {}", e),
    }
    println!(
        "{}: score {} (best {}), deaths {}",
        name, hud.score, hud.high_score, hud.deaths
    );
}
