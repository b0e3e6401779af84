//! Liminal - an interactive tour of three liminal spaces
//!
//! Pick a backrooms corridor, a poolroom, or an empty classroom and look
//! around with the pointer.

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use liminal::app::AppController;
use liminal::audio::LogAudioSink;
use liminal::config::AppConfig;
use liminal::input::{InputAction, InputMapper};
use liminal::systems::{OverlayFrame, RenderError, RenderSystem, SimulationSystem, WindowSystem};
use liminal::ui::UiCommand;
use liminal_input::PointerEventMapper;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    controller: AppController<LogAudioSink>,
    window_system: Option<WindowSystem>,
    render_system: Option<RenderSystem>,
    simulation: SimulationSystem,
    pointer_mapper: PointerEventMapper,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let controller = AppController::new(&config, LogAudioSink::new());
        Self {
            config,
            controller,
            window_system: None,
            render_system: None,
            simulation: SimulationSystem::new(),
            pointer_mapper: PointerEventMapper::new(),
        }
    }

    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        match action {
            InputAction::Ui(command) => {
                self.controller.handle_command(command);
            }
            InputAction::NudgeCursorSize(delta) => {
                let size = self.controller.state().menu.cursor_size() + delta;
                self.controller.handle_command(UiCommand::SetCursorEffectSize(size));
            }
            InputAction::Exit => {
                log::info!("Exiting");
                event_loop.exit();
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window_system {
                    window.toggle_fullscreen();
                }
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.simulation.update(&mut self.controller);
        let dirty = self.controller.take_scene_dirty();

        if let Some(window) = &mut self.window_system {
            window.update_title(self.controller.title());
        }

        if let Some(render) = &mut self.render_system {
            let state = self.controller.state();
            render.sync_geometry(state.environments.active_index(), state.environments.active_world(), dirty);

            let overlay = OverlayFrame {
                markers: state.cursor_trail.markers(),
                marker_color: self.config.trail.color,
                glow: self.controller.cursor_glow(),
            };
            match render.render_frame(state.environments.active_world(), &state.camera, &overlay) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => render.reconfigure(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        // Request next frame
        if let Some(window) = &self.window_system {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_system.is_some() {
            return;
        }

        let window_system = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window_system) => window_system,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render_system = match RenderSystem::new(
            window_system.window().clone(),
            self.config.rendering.clone(),
            self.config.window.vsync,
        ) {
            Ok(render_system) => render_system,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = render_system.size();
        self.controller.resize(width, height);
        window_system.request_redraw();

        self.window_system = Some(window_system);
        self.render_system = Some(render_system);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if physical_size.width == 0 || physical_size.height == 0 {
                    return;
                }
                if let Some(render) = &mut self.render_system {
                    render.resize(physical_size.width, physical_size.height);
                }
                self.controller.resize(physical_size.width, physical_size.height);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat || event.state != ElementState::Pressed {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    let action = InputMapper::map_keyboard(
                        key,
                        event.state,
                        self.controller.screen(),
                        self.config.cursor.size_step,
                    );
                    if let Some(action) = action {
                        self.handle_action(event_loop, action);
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            other => {
                if let Some(pointer) = self.pointer_mapper.map(&other) {
                    let now_ms = self.simulation.now_ms();
                    self.controller.pointer_event(pointer, now_ms);
                }
            }
        }
    }
}

fn main() {
    let config = AppConfig::load();
    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize logging; RUST_LOG still wins over the config
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    log::info!("Starting Liminal");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
