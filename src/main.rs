//! Tesseract Viewer
//!
//! Rotate a tesseract through all six planes of 4D space and watch its 3D
//! projection.
//!
//! Controls:
//! - A/D, W/S, Q/E: rotate in XZ, YZ, XY
//! - J/L, I/K, U/O: rotate in XW, YW, ZW
//! - X: reset orientation, Z: reset orbit
//! - P: toggle perspective/orthographic, F: fullscreen, Escape: quit
//! - Left drag: orbit, scroll: zoom

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use tesseract4d::config::AppConfig;
use tesseract4d::input::{ActionMapper, AppAction};
use tesseract4d::systems::{RenderSystem, SimulationSystem, WindowSystem};
use tesseract4d_core::MotionState;
use tesseract4d_input::{KeyState, OrbitController};
use tesseract4d_render::{OrbitCamera, RenderError};

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    renderer: Option<RenderSystem>,
    simulation: SimulationSystem,
    keys: KeyState,
    actions: ActionMapper,
    orbit: OrbitController,
    camera: OrbitCamera,
    last_motion: MotionState,
}

impl App {
    fn new(config: AppConfig, simulation: SimulationSystem) -> Self {
        let orbit = OrbitController::new()
            .with_sensitivity(config.camera.sensitivity)
            .with_zoom_sensitivity(config.camera.zoom_sensitivity);
        let camera = OrbitCamera::new(config.camera.distance)
            .with_zoom_speed(config.camera.zoom_speed)
            .with_min_distance(config.camera.min_distance);
        let actions = ActionMapper::new(config.input.camera_reset_control.as_str());

        Self {
            config,
            window: None,
            renderer: None,
            simulation,
            keys: KeyState::new(),
            actions,
            orbit,
            camera,
            last_motion: MotionState::Idle,
        }
    }

    fn handle_action(&mut self, action: AppAction, event_loop: &ActiveEventLoop) {
        match action {
            AppAction::Exit => event_loop.exit(),
            AppAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            AppAction::ToggleProjection => {
                let projection = self.simulation.toggle_projection();
                if let Some(window) = &self.window {
                    window.update_title(projection, self.simulation.motion_state());
                }
            }
            AppAction::ResetCamera => {
                self.camera.reset();
                log::info!("Orbit camera reset");
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.simulation.update(&self.keys);
        self.orbit.update(&mut self.camera);
        self.camera.update();

        let motion = self.simulation.motion_state();
        if motion != self.last_motion {
            if let Some(window) = &self.window {
                window.update_title(self.simulation.object().projection(), motion);
            }
            self.last_motion = motion;
        }

        let frame = match self.simulation.object().render_points() {
            Ok(frame) => frame,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let Some(renderer) = &mut self.renderer else {
            return;
        };
        match renderer.render_frame(&self.camera, &frame) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                let (width, height) = renderer.size();
                renderer.resize(width, height);
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("{}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        match RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            self.config.camera.clone(),
            self.config.window.vsync,
        ) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        }

        window.update_title(
            self.simulation.object().projection(),
            self.simulation.motion_state(),
        );
        self.window = Some(window);
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

            WindowEvent::Focused(false) => {
                self.keys.clear();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if !event.repeat {
                        if let Some(action) = self.actions.map_keyboard(key, event.state) {
                            self.handle_action(action, event_loop);
                        }
                    }
                    self.keys.process_keyboard(key, event.state);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.orbit.process_mouse_button(button, state);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y as f64,
                    MouseScrollDelta::PixelDelta(pos) => pos.y / 100.0,
                };
                self.orbit.process_scroll(lines);
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.orbit.process_mouse_motion(delta.0, delta.1);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    let simulation = match SimulationSystem::from_config(&config) {
        Ok(simulation) => simulation,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, simulation);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
}
