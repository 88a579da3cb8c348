//! Sparkle - particle explosion demo
//!
//! A welcome screen with a button that leads to a canvas. Clicking the
//! canvas sets off a burst of fading particles.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use sparkle::config::AppConfig;
use sparkle::input::{InputAction, InputMapper};
use sparkle::systems::{FrameClock, RenderError, RenderSystem, WindowSystem};
use sparkle_core::{DrawList, Letterbox, Navigator, UiAction};
use sparkle_input::{PointerEvent, PointerTracker};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    /// Owns the window once it exists and the view shown in it
    navigator: Navigator<WindowSystem>,
    renderer: Option<RenderSystem>,
    pointer: PointerTracker,
    clock: FrameClock,
    /// Draw commands of the latest frame
    frame: DrawList,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let navigator = Navigator::new(&config.views.resource_dir)
            .with_canvas_settings(config.canvas_settings());
        let clock = FrameClock::new(config.rendering.frame_rate, config.rendering.max_frames_per_redraw);
        let frame = DrawList::new(config.window.width as f32, config.window.height as f32);

        Self {
            config,
            navigator,
            renderer: None,
            pointer: PointerTracker::new(),
            clock,
            frame,
        }
    }

    /// Match the frame to the view now on stage
    fn view_changed(&mut self) {
        if let Some(view) = self.navigator.current() {
            let (width, height) = view.size();
            self.frame.set_size(width as f32, height as f32);
        }
        self.clock.reset();
    }

    /// Switch views; a failed navigation ends the application
    fn navigate(&mut self, event_loop: &ActiveEventLoop, name: &str) {
        match self.navigator.navigate(name) {
            Ok(_) => self.view_changed(),
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
            }
        }
    }

    fn navigate_back(&mut self, event_loop: &ActiveEventLoop) {
        match self.navigator.back() {
            Ok(true) => self.view_changed(),
            Ok(false) => log::info!("Already at the first view"),
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
            }
        }
    }

    /// Window to view mapping; the inverse of how frames are fitted to the surface
    fn view_fit(&self) -> Letterbox {
        let window = match self.navigator.stage() {
            Some(stage) => stage.logical_size(),
            None => self.frame.size(),
        };
        Letterbox::fit(self.frame.size(), window)
    }

    fn handle_pointer(&mut self, event_loop: &ActiveEventLoop, event: PointerEvent) {
        let fit = self.view_fit();
        let Some(view) = self.navigator.current_mut() else {
            return;
        };

        match event {
            PointerEvent::Moved(position) => view.pointer_moved(fit.to_content(position)),
            PointerEvent::Clicked { position, clicks } => {
                let position = fit.to_content(position);
                if let Some(UiAction::Navigate { view: target }) = view.pointer_clicked(position, clicks) {
                    self.navigate(event_loop, &target);
                }
            }
        }
    }

    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ToggleFullscreen => {
                if let Some(window) = self.navigator.stage() {
                    window.toggle_fullscreen();
                }
            }
            InputAction::NavigateBack => self.navigate_back(event_loop),
            InputAction::ClearCanvas => {
                if let Some(canvas) = self.navigator.current_mut().and_then(|v| v.canvas_mut()) {
                    canvas.clear_particles();
                }
            }
        }
    }

    /// Run the frames that are due, then draw the latest one
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let frames = self.clock.tick();

        let Some(view) = self.navigator.current_mut() else {
            return;
        };
        for _ in 0..frames {
            let stats = view.advance_frame(&mut self.frame);
            if stats.expired > 0 {
                log::trace!("{} particles drawn, {} expired", stats.drawn, stats.expired);
            }
        }
        let background = view.background();

        if let Some(renderer) = &mut self.renderer {
            match renderer.render_frame(&self.frame, background) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => renderer.recover_surface(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        if let Some(window) = self.navigator.stage() {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.navigator.is_initialized() {
            return;
        }

        let window = WindowSystem::create(event_loop, &self.config.window)
            .unwrap_or_else(|e| panic!("{}", e));
        let handle = window.window().clone();
        self.pointer.set_scale_factor(window.scale_factor());

        self.navigator.init_stage(window).unwrap_or_else(|e| panic!("{}", e));

        let initial = self.config.views.initial.clone();
        self.navigator
            .navigate(&initial)
            .unwrap_or_else(|e| panic!("Failed to show initial view: {}", e));
        self.view_changed();

        let renderer = RenderSystem::new(handle.clone(), &self.config.rendering, self.config.window.vsync)
            .unwrap_or_else(|e| panic!("Failed to initialize renderer: {}", e));
        self.renderer = Some(renderer);

        handle.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.pointer.set_scale_factor(scale_factor);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.pointer.process_cursor_moved(position);
                self.handle_pointer(event_loop, event);
            }

            WindowEvent::CursorLeft { .. } => {
                self.pointer.process_cursor_left();
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(event) = self.pointer.process_mouse_button(button, state) {
                    self.handle_pointer(event_loop, event);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(event_loop, action);
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG overrides the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Sparkle");

    let event_loop = EventLoop::new().unwrap_or_else(|e| panic!("Failed to create event loop: {}", e));
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop
        .run_app(&mut app)
        .unwrap_or_else(|e| panic!("Event loop error: {}", e));
}
