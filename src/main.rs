//! Axe Game entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use axe_game::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use axe_game::platform::Key;
    use axe_game::renderer::{Frame, RenderState};
    use axe_game::{AxeGameError, Game, Settings};

    struct WebGame {
        game: Game,
        frame: Frame,
        render_state: RenderState,
    }

    impl WebGame {
        fn run_frame(&mut self, time_ms: f64) {
            self.frame.reset();
            self.game.frame(time_ms / 1000.0, &mut self.frame);

            match self.render_state.render(&self.frame) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    self.render_state.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Axe Game starting...");

        if let Err(e) = start().await {
            log::error!("Axe Game failed to start: {e}");
        }
    }

    async fn start() -> Result<(), AxeGameError> {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(SCREEN_WIDTH as u32);
        canvas.set_height(SCREEN_HEIGHT as u32);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state =
            RenderState::new(surface, &adapter, SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
                .await?;

        let game = Rc::new(RefCell::new(WebGame {
            game: Game::new(Settings::load()),
            frame: Frame::new(),
            render_state,
        }));

        setup_input_handlers(game.clone());
        request_animation_frame(game);

        log::info!("Axe Game running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<WebGame>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()) {
                    event.prevent_default();
                    game.borrow_mut().game.key_down(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()) {
                    game.borrow_mut().game.key_up(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keys released elsewhere never send keyup
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().game.release_keys();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<WebGame>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<WebGame>>, time: f64) {
        game.borrow_mut().run_frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native_game {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use winit::application::ApplicationHandler;
    use winit::dpi::LogicalSize;
    use winit::event::{ElementState, WindowEvent};
    use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
    use winit::keyboard::{KeyCode, PhysicalKey};
    use winit::window::{Window, WindowId};

    use axe_game::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use axe_game::platform::Key;
    use axe_game::renderer::{Frame, RenderState};
    use axe_game::sim::Ruleset;
    use axe_game::{AxeGameError, Game, Settings};

    fn map_key(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::ArrowUp => Some(Key::Up),
            KeyCode::ArrowDown => Some(Key::Down),
            KeyCode::ArrowLeft => Some(Key::Left),
            KeyCode::ArrowRight => Some(Key::Right),
            KeyCode::KeyW => Some(Key::W),
            KeyCode::KeyA => Some(Key::A),
            KeyCode::KeyS => Some(Key::S),
            KeyCode::KeyD => Some(Key::D),
            KeyCode::Space => Some(Key::Space),
            KeyCode::KeyR => Some(Key::R),
            KeyCode::Escape => Some(Key::Escape),
            _ => None,
        }
    }

    struct App {
        game: Game,
        frame: Frame,
        window: Option<Arc<Window>>,
        render_state: Option<RenderState>,
        started: Instant,
        next_frame: Instant,
        frame_interval: Duration,
        /// First failure during window/GPU setup, reported by `run`
        error: Option<AxeGameError>,
    }

    impl App {
        fn new(settings: Settings) -> Self {
            let now = Instant::now();
            let frame_interval = Duration::from_secs_f32(settings.frame_interval());
            Self {
                game: Game::new(settings),
                frame: Frame::new(),
                window: None,
                render_state: None,
                started: now,
                next_frame: now,
                frame_interval,
                error: None,
            }
        }

        fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AxeGameError> {
            let attributes = Window::default_attributes()
                .with_title(self.game.settings.window_title.clone())
                .with_inner_size(LogicalSize::new(SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64))
                .with_resizable(false);
            let window = Arc::new(event_loop.create_window(attributes)?);

            let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
            let surface = instance.create_surface(window.clone())?;
            let adapter = pollster::block_on(instance.request_adapter(
                &wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::default(),
                    compatible_surface: Some(&surface),
                    force_fallback_adapter: false,
                },
            ))?;
            log::info!("Using adapter: {:?}", adapter.get_info().name);

            let size = window.inner_size();
            let render_state =
                pollster::block_on(RenderState::new(surface, &adapter, size.width, size.height))?;

            window.request_redraw();
            self.render_state = Some(render_state);
            self.window = Some(window);
            Ok(())
        }

        fn redraw(&mut self, event_loop: &ActiveEventLoop) {
            if self.game.wants_exit() {
                log::info!("Escape pressed, closing");
                event_loop.exit();
                return;
            }

            let now = self.started.elapsed().as_secs_f64();
            self.frame.reset();
            self.game.frame(now, &mut self.frame);

            if let Some(render_state) = self.render_state.as_mut() {
                match render_state.render(&self.frame) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }

            self.next_frame = Instant::now() + self.frame_interval;
        }
    }

    impl ApplicationHandler for App {
        fn resumed(&mut self, event_loop: &ActiveEventLoop) {
            if self.window.is_some() {
                return;
            }
            if let Err(e) = self.init_graphics(event_loop) {
                self.error = Some(e);
                event_loop.exit();
            }
        }

        fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
            match event {
                WindowEvent::CloseRequested => event_loop.exit(),

                WindowEvent::Resized(size) => {
                    if let Some(render_state) = self.render_state.as_mut() {
                        render_state.resize(size.width, size.height);
                    }
                }

                WindowEvent::Focused(false) => self.game.release_keys(),

                WindowEvent::KeyboardInput { event, .. } => {
                    let PhysicalKey::Code(code) = event.physical_key else {
                        return;
                    };
                    let Some(key) = map_key(code) else {
                        return;
                    };
                    match event.state {
                        ElementState::Pressed => self.game.key_down(key),
                        ElementState::Released => self.game.key_up(key),
                    }
                }

                WindowEvent::RedrawRequested => self.redraw(event_loop),

                _ => {}
            }
        }

        fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
            let Some(window) = self.window.as_ref() else {
                return;
            };
            if Instant::now() >= self.next_frame {
                window.request_redraw();
            } else {
                event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
            }
        }
    }

    /// `axe-game [RULESET] [--save-settings]`
    fn apply_args(settings: &mut Settings) {
        let mut save = false;
        for arg in std::env::args().skip(1) {
            if arg == "--save-settings" {
                save = true;
            } else if let Some(ruleset) = Ruleset::from_name(&arg) {
                settings.ruleset = ruleset;
            } else {
                log::warn!("Ignoring unknown argument: {arg}");
            }
        }
        if save {
            settings.save();
        }
    }

    pub fn run() -> Result<(), AxeGameError> {
        let mut settings = Settings::load();
        apply_args(&mut settings);
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(settings);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => {
                log::info!("High score this session: {}", app.game.state.score.high);
                Ok(())
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), axe_game::AxeGameError> {
    env_logger::init();
    log::info!("Axe Game (native) starting...");

    native_game::run().inspect_err(|e| log::error!("Axe Game failed: {e}"))
}
