//! Duel Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use duel_pong::audio::{AudioManager, cues};
    use duel_pong::renderer::RenderState;
    use duel_pong::{Frame, Game, Settings, Tuning};

    /// Game instance plus its presentation sinks
    struct App {
        game: Game,
        render_state: Option<RenderState>,
        audio: AudioManager,
    }

    impl App {
        /// Present a frame: draw, update the score text, play cues, announce winners
        fn present(&mut self, frame: &Frame) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&frame.scene) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }

            let Some(window) = web_sys::window() else { return };
            if let Some(el) = window
                .document()
                .and_then(|d| d.get_element_by_id("scoreBoard"))
            {
                el.set_text_content(Some(&frame.scene.score_text));
            }

            for cue in cues(&frame.events) {
                self.audio.play(cue);
            }

            if let Some(winner) = frame.decided_winner() {
                let message = format!("Game Over! {} wins!", winner.display_name());
                let _ = window.alert_with_message(&message);
            }
        }
    }

    fn load_settings() -> Settings {
        let query = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match Settings::from_query(&query) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring page settings: {}", e);
                Settings::default()
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Duel Pong starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let settings = load_settings();
        let tuning = Tuning::default();
        canvas.set_width(tuning.field_width as u32);
        canvas.set_height(tuning.field_height as u32);

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let app = Rc::new(RefCell::new(App {
            game: Game::new(tuning.clone(), seed),
            render_state: None,
            audio: AudioManager::new(&settings),
        }));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            tuning.field_width as u32,
            tuning.field_height as u32,
        )
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        app.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, app.clone());

        request_animation_frame(app);

        log::info!("Duel Pong running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse move
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                app.borrow_mut().game.pointer_moved_client(
                    event.client_y() as f32,
                    rect.top() as f32,
                    rect.height() as f32,
                );
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    app.borrow_mut().game.pointer_moved_client(
                        touch.client_y() as f32,
                        rect.top() as f32,
                        rect.height() as f32,
                    );
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            let frame = a.game.frame(time);
            a.present(&frame);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Duel Pong failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    match native::run(std::env::args().skip(1)) {
        Ok(()) => {}
        Err(e) => {
            log::error!("{}", e);
            if matches!(e, duel_pong::ConfigError::BadArgument(_)) {
                eprintln!("{}", native::USAGE);
            }
            std::process::exit(1);
        }
    }
}

/// Headless demo: a scripted pointer plays until the first match is decided
#[cfg(not(target_arch = "wasm32"))]
mod native {
    use duel_pong::audio::cues;
    use duel_pong::game::DEFAULT_FRAME_MS;
    use duel_pong::{ConfigError, Game, Tuning};

    /// Give up after this many frames (about 30 minutes at 60 Hz)
    const MAX_FRAMES: u64 = 60 * 60 * 30;

    pub const USAGE: &str = "usage: duel-pong [tuning.json] [--dump]";

    /// Parsed command line
    #[derive(Debug, Default, PartialEq)]
    pub struct Options {
        pub tuning_path: Option<String>,
        pub dump: bool,
        pub help: bool,
    }

    pub fn parse_args(args: impl Iterator<Item = String>) -> Result<Options, ConfigError> {
        let mut options = Options::default();
        for arg in args {
            match arg.as_str() {
                "--dump" => options.dump = true,
                "-h" | "--help" => options.help = true,
                flag if flag.starts_with('-') => {
                    return Err(ConfigError::BadArgument(flag.to_string()));
                }
                path if options.tuning_path.is_some() => {
                    return Err(ConfigError::BadArgument(path.to_string()));
                }
                _ => options.tuning_path = Some(arg),
            }
        }
        Ok(options)
    }

    pub fn run(args: impl Iterator<Item = String>) -> Result<(), ConfigError> {
        let Options {
            tuning_path,
            dump,
            help,
        } = parse_args(args)?;
        if help {
            println!("{}", USAGE);
            return Ok(());
        }

        let tuning = match tuning_path {
            Some(path) => {
                log::info!("Loading tuning from {}", path);
                Tuning::load(path)?
            }
            None => Tuning::default(),
        };

        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        log::info!("Duel Pong (native) starting headless demo...");
        let mut game = Game::new(tuning, seed);
        let mut last_score = String::new();

        for n in 0..MAX_FRAMES {
            // The scripted pointer follows the ball
            let ball_y = game.state.ball.pos.y;
            game.pointer_moved(ball_y);

            let frame = game.frame(n as f64 * DEFAULT_FRAME_MS);
            for cue in cues(&frame.events) {
                log::debug!("cue: {:?}", cue);
            }
            if frame.scene.score_text != last_score {
                log::info!("{}", frame.scene.score_text);
                last_score = frame.scene.score_text.clone();
            }
            if let Some(winner) = frame.decided_winner() {
                println!("Game Over! {} wins!", winner.display_name());
                break;
            }
        }

        if dump {
            match serde_json::to_string_pretty(&game.state) {
                Ok(json) => println!("{}", json),
                Err(e) => log::error!("Failed to dump state: {}", e),
            }
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn args(list: &[&str]) -> impl Iterator<Item = String> {
            list.iter().map(|a| a.to_string()).collect::<Vec<_>>().into_iter()
        }

        #[test]
        fn test_parse_path_and_dump() {
            let options = parse_args(args(&["tuning.json", "--dump"])).unwrap();
            assert_eq!(options.tuning_path.as_deref(), Some("tuning.json"));
            assert!(options.dump);
            assert!(!options.help);
        }

        #[test]
        fn test_help_flag() {
            assert!(parse_args(args(&["--help"])).unwrap().help);
            assert!(parse_args(args(&["-h"])).unwrap().help);
        }

        #[test]
        fn test_unknown_flag_rejected() {
            let err = parse_args(args(&["--dmup"])).unwrap_err();
            assert!(matches!(err, ConfigError::BadArgument(ref a) if a == "--dmup"));
        }

        #[test]
        fn test_second_path_rejected() {
            let err = parse_args(args(&["a.json", "b.json"])).unwrap_err();
            assert!(matches!(err, ConfigError::BadArgument(ref a) if a == "b.json"));
        }
    }
}
