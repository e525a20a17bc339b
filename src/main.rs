//! Starfall Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent};

    use starfall_dodge::audio::AudioManager;
    use starfall_dodge::hud::{HudField, HudSink};
    use starfall_dodge::platform::BrowserHost;
    use starfall_dodge::renderer::CanvasBackend;
    use starfall_dodge::{FrameOutcome, Game, Preset, Tuning};

    /// HUD text nodes in the page
    struct DomHud {
        document: web_sys::Document,
    }

    impl DomHud {
        fn element(&self, field: HudField) -> Option<HtmlElement> {
            self.document
                .get_element_by_id(field.element_id())
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        }
    }

    impl HudSink for DomHud {
        fn set_text(&mut self, field: HudField, text: &str) {
            if let Some(el) = self.element(field) {
                el.set_text_content(Some(text));
            }
        }

        fn set_color(&mut self, field: HudField, css_color: &str) {
            if let Some(el) = self.element(field) {
                let _ = el.style().set_property("color", css_color);
            }
        }
    }

    /// Everything the animation-frame callback needs
    struct App {
        game: Game<AudioManager, BrowserHost>,
        backend: CanvasBackend,
        hud: DomHud,
    }

    impl App {
        /// Render the current frame; false once the game has exited
        fn frame(&mut self) -> bool {
            let frame = self.game.frame(&mut self.hud);
            // Keep the final scene on screen when the tab refuses to close
            if !frame.draw_list.is_empty() {
                self.backend.draw(&frame.draw_list);
            }
            match frame.outcome {
                FrameOutcome::Exit => false,
                FrameOutcome::Restarted => {
                    log::info!("Game restarted");
                    true
                }
                FrameOutcome::Continue => true,
            }
        }
    }

    /// Preset from the `?preset=` query parameter
    fn preset_from_location(window: &web_sys::Window) -> Preset {
        let search = window.location().search().unwrap_or_default();
        search
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.strip_prefix("preset="))
            .find_map(Preset::from_str)
            .unwrap_or_default()
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Starfall Dodge starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let mut backend = match CanvasBackend::new(canvas) {
            Ok(backend) => backend,
            Err(e) => {
                log::error!("Canvas setup failed: {:?}", e);
                return;
            }
        };
        resize(&window, &mut backend);

        let preset = preset_from_location(&window);
        let seed = js_sys::Date::now() as u64;
        log::info!("Preset: {}", preset.as_str());

        let game = Game::new(
            seed,
            Tuning::from_preset(preset),
            AudioManager::new(),
            BrowserHost,
        );
        let app = Rc::new(RefCell::new(App {
            game,
            backend,
            hud: DomHud { document },
        }));

        setup_input_handlers(&window, app.clone());
        setup_resize_handler(&window, app.clone());

        request_animation_frame(app);

        log::info!("Starfall Dodge running!");
    }

    fn resize(window: &web_sys::Window, backend: &mut CanvasBackend) {
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        backend.resize(w as f32, h as f32);
    }

    fn setup_resize_handler(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            resize(&window, &mut app.borrow_mut().backend);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut app = app.borrow_mut();
                match event.key().as_str() {
                    "i" | "I" => {
                        app.game.toggle_autopilot();
                    }
                    key => app.game.key_down(key),
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            app.borrow_mut().game.key_up(&event.key());
        });
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let keep_running = app.borrow_mut().frame();
        if keep_running {
            request_animation_frame(app);
        } else {
            log::info!("Game loop stopped");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use starfall_dodge::audio::LogSoundPlayer;
    use starfall_dodge::hud::{HudField, HudSink};
    use starfall_dodge::platform::{DialogChoice, HeadlessHost};
    use starfall_dodge::{FrameOutcome, Game, Preset, Tuning};

    /// Five minutes at 60 Hz
    const MAX_FRAMES: u64 = 5 * 60 * 60;

    /// HUD that writes changes to the log
    struct LogHud;

    impl HudSink for LogHud {
        fn set_text(&mut self, field: HudField, text: &str) {
            log::debug!("[{}] {}", field.element_id(), text);
        }

        fn set_color(&mut self, _field: HudField, _css_color: &str) {}
    }

    /// Usage: `starfall-dodge [classic|starfield] [tuning.json]`
    fn tuning_from_args() -> Tuning {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let preset = args
            .iter()
            .find_map(|a| Preset::from_str(a))
            .unwrap_or_default();
        let path = args.iter().find(|a| Preset::from_str(a).is_none());

        let json = path.and_then(|path| match std::fs::read_to_string(path) {
            Ok(json) => Some(json),
            Err(e) => {
                log::warn!("Cannot read tuning file {path}: {e}");
                None
            }
        });
        log::info!("Preset: {}", preset.as_str());
        Tuning::load_or(json.as_deref(), preset)
    }

    /// Let the autopilot play one session headless and report the result
    pub fn run() {
        let tuning = tuning_from_args();
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let mut game = Game::new(
            seed,
            tuning,
            LogSoundPlayer,
            HeadlessHost::new(DialogChoice::Cancel),
        );
        game.set_autopilot(true);

        let mut hud = LogHud;
        for _ in 0..MAX_FRAMES {
            if game.frame(&mut hud).outcome == FrameOutcome::Exit {
                println!(
                    "Game over after {} frames with score {}",
                    game.state.frame_count, game.state.score
                );
                return;
            }
        }

        println!(
            "Survived {} frames: score {}, health {}",
            game.state.frame_count, game.state.score, game.state.health
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Starfall Dodge (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 to play");

    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The real entry point is wasm_main
}
