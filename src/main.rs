//! Rally Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use rally_pong::renderer::{RenderState, shapes};
    use rally_pong::sim::{ControlMode, GameState, TickInput, tick};

    /// Portion of the viewport height given to the playfield; the rest is
    /// left for the score HUD.
    const VIEWPORT_HEIGHT_FRAC: f64 = 0.8;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        input: TickInput,
        /// Playfield resize recorded by the event handler, applied at the
        /// top of the next frame, strictly before the tick
        pending_resize: Option<(f32, f32)>,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(width: f32, height: f32, mode: ControlMode, seed: u64) -> Self {
            Self {
                state: GameState::new(width, height, mode, seed),
                render_state: None,
                input: TickInput::default(),
                pending_resize: None,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Apply a pending resize, then advance the simulation one tick
        fn update(&mut self, time: f64) {
            if let Some((w, h)) = self.pending_resize.take() {
                self.state.resize(w, h);
                if let Some(ref mut rs) = self.render_state {
                    let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
                    rs.resize(
                        (w as f64 * dpr) as u32,
                        (h as f64 * dpr) as u32,
                        self.state.field.width,
                        self.state.field.height,
                    );
                }
            }

            let input = self.input;
            tick(&mut self.state, &input);

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = shapes::scene(&self.state);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = render_state.size;
                        let (fw, fh) = render_state.field_size;
                        render_state.resize(w, h, fw, fh);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update score/FPS elements in the DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("score-left") {
                el.set_text_content(Some(&self.state.scores.left.to_string()));
            }
            if let Some(el) = document.get_element_by_id("score-right") {
                el.set_text_content(Some(&self.state.scores.right.to_string()));
            }
            if let Some(el) = document.get_element_by_id("hud-fps") {
                el.set_text_content(Some(&self.fps.to_string()));
            }
        }
    }

    /// Playfield size in CSS pixels for the current viewport
    fn viewport_field_size(window: &web_sys::Window) -> (f32, f32) {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0)
            * VIEWPORT_HEIGHT_FRAC;
        (width as f32, height as f32)
    }

    /// Two-player mode is selected with `?players=2` in the URL; the mode is
    /// fixed for the session.
    fn control_mode(window: &web_sys::Window) -> ControlMode {
        let two_player = window
            .location()
            .search()
            .map(|s| s.contains("players=2"))
            .unwrap_or(false);
        if two_player {
            ControlMode::Versus
        } else {
            ControlMode::Solo
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Rally Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Size the canvas backing store to the playfield
        let dpr = window.device_pixel_ratio();
        let (field_w, field_h) = viewport_field_size(&window);
        let width = (field_w as f64 * dpr) as u32;
        let height = (field_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let mode = control_mode(&window);
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(field_w, field_h, mode, seed)));

        log::info!(
            "Game initialized: {}x{} field, {:?} mode, seed {}",
            field_w,
            field_h,
            mode,
            seed
        );

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state =
            RenderState::new(surface, &adapter, width, height, field_w, field_h).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());
        setup_resize_handler(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Rally Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move - left paddle follows the pointer
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let half = g.state.scale.paddle_h / 2.0;
                g.input.left_y = Some(event.offset_y() as f32 - half);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move - left half of the field drives the left paddle; in
        // two-player mode the right half drives the right paddle
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                let rect = canvas_clone.get_bounding_client_rect();
                let mid_x = rect.left() as f32 + canvas_clone.client_width() as f32 / 2.0;
                let half = g.state.scale.paddle_h / 2.0;

                let touches = event.touches();
                for i in 0..touches.length() {
                    if let Some(touch) = touches.get(i) {
                        let x = touch.client_x() as f32;
                        let y = touch.client_y() as f32 - rect.top() as f32 - half;
                        if x < mid_x {
                            g.input.left_y = Some(y);
                        } else {
                            g.input.right_y = Some(y);
                        }
                    }
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard - arrow keys step the right paddle in two-player mode
        {
            let window = web_sys::window().unwrap();
            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                    let mut g = game.borrow_mut();
                    match event.key().as_str() {
                        "ArrowUp" => g.input.right_step = -1.0,
                        "ArrowDown" => g.input.right_step = 1.0,
                        _ => {}
                    }
                });
                let _ = window
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
                closure.forget();
            }
            {
                let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                    let mut g = game.borrow_mut();
                    match event.key().as_str() {
                        "ArrowUp" | "ArrowDown" => g.input.right_step = 0.0,
                        _ => {}
                    }
                });
                let _ = window
                    .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let dpr = window.device_pixel_ratio();
            let (w, h) = viewport_field_size(&window);
            canvas.set_width((w as f64 * dpr) as u32);
            canvas.set_height((h as f64 * dpr) as u32);

            game.borrow_mut().pending_resize = Some((w, h));
            log::info!("Playfield resized to {}x{}", w, h);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
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
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rally_pong::sim::{ControlMode, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Rally Pong (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Headless smoke run: let the opponent play both walls for a while
    let mut state = GameState::new(800.0, 500.0, ControlMode::Solo, 0xDECADE);
    let input = TickInput::default();
    for _ in 0..10_000 {
        tick(&mut state, &input);
    }

    println!(
        "After {} ticks: score {}:{}, ball at ({:.1}, {:.1})",
        state.time_ticks, state.scores.left, state.scores.right, state.ball.pos.x, state.ball.pos.y
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
