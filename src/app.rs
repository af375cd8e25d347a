//! Application shell
//!
//! Owns the winit event loop and everything that lives for the duration of
//! the run: window, render engine, UI manager, scene (and with it the
//! camera), and the frame clock. The camera is threaded through this state
//! explicitly - input dispatch and rendering both borrow it from here, and
//! there is no process-wide instance anywhere.

use std::sync::Arc;

use cgmath::{Point3, Vector3};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

use crate::camera::{free_camera::DEFAULT_YAW, CameraController, CameraManager, FreeCamera};
use crate::gfx::{rendering::RenderEngine, scene::Scene};
use crate::performance::FrameClock;
use crate::ui::UiManager;

/// Overlay callback: UI context plus read-only scene state and the current
/// frame rate. The scene reference is shared, so panels cannot mutate the
/// camera.
pub type UiCallback = Box<dyn Fn(&imgui::Ui, &Scene, f32) + Send + Sync>;

const INITIAL_WIDTH: u32 = 1200;
const INITIAL_HEIGHT: u32 = 800;

/// Top-level application: construct, populate the scene, then `run()`.
pub struct FreelookApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
    ui_callback: Option<UiCallback>,
}

struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    scene: Scene,
    frame_clock: FrameClock,
    ui_callback: Option<UiCallback>,
}

impl FreelookApp {
    /// Creates the application with a default free-look camera standing a
    /// few units back from the origin.
    pub async fn new() -> Self {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        let camera = FreeCamera::new(
            Point3::new(0.0, 1.5, 5.0),
            Vector3::unit_y(),
            DEFAULT_YAW,
            -10.0,
        );
        let camera_manager = CameraManager::new(
            camera,
            CameraController::new(),
            INITIAL_WIDTH,
            INITIAL_HEIGHT,
        );
        let scene = Scene::new(camera_manager);

        Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                ui_manager: None,
                scene,
                frame_clock: FrameClock::new(),
                ui_callback: None,
            },
            ui_callback: None,
        }
    }

    /// Installs the overlay UI callback.
    pub fn set_ui<F>(&mut self, ui_fn: F)
    where
        F: Fn(&imgui::Ui, &Scene, f32) + Send + Sync + 'static,
    {
        self.ui_callback = Some(Box::new(ui_fn));
    }

    /// Scene access for setup before `run()`.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.app_state.scene
    }

    /// Runs the application, consuming it and blocking until exit.
    pub fn run(mut self) {
        self.app_state.ui_callback = self.ui_callback.take();

        let event_loop = self.event_loop.take().expect("Event loop already consumed");
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .expect("Failed to run event loop");
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let Ok(window) = event_loop.create_window(
            WindowAttributes::default()
                .with_title("freelook")
                .with_inner_size(winit::dpi::LogicalSize::new(INITIAL_WIDTH, INITIAL_HEIGHT)),
        ) else {
            log::error!("failed to create window");
            event_loop.exit();
            return;
        };

        let window_handle = Arc::new(window);
        self.window = Some(window_handle.clone());

        let (width, height) = window_handle.inner_size().into();
        let window_clone = window_handle.clone();
        let renderer =
            pollster::block_on(async move { RenderEngine::new(window_clone, width, height).await });

        self.scene.camera_manager.resize(width, height);
        self.scene
            .init_gpu_resources(renderer.device(), renderer.object_bind_group_layout());

        let ui_manager = UiManager::new(
            renderer.device(),
            renderer.queue(),
            renderer.surface_format(),
            &window_handle,
        );

        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };
        let Some(window) = self.window.as_ref() else {
            return;
        };

        // The overlay gets first refusal on input so that interacting with
        // a panel never drives the camera.
        if let Some(ui_manager) = self.ui_manager.as_mut() {
            let ui_event: winit::event::Event<()> = winit::event::Event::WindowEvent {
                window_id,
                event: event.clone(),
            };
            if ui_manager.handle_input(window, &ui_event) {
                window.request_redraw();
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key:
                            winit::keyboard::PhysicalKey::Code(winit::keyboard::KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.scene.camera_manager.resize(width, height);
                render_engine.resize(width, height);
            }
            WindowEvent::RedrawRequested => {
                let delta_time = self.frame_clock.tick();
                self.scene.update(delta_time);
                render_engine.update(self.scene.camera_manager.uniform);
                self.scene.update_gpu(render_engine.queue());

                if let (Some(ui_manager), Some(ui_callback)) =
                    (self.ui_manager.as_mut(), &self.ui_callback)
                {
                    let fps = self.frame_clock.fps();
                    let scene = &self.scene;
                    let window_clone = window.clone();
                    render_engine.render_frame(
                        scene,
                        Some(|device: &wgpu::Device,
                              queue: &wgpu::Queue,
                              encoder: &mut wgpu::CommandEncoder,
                              color_attachment: &wgpu::TextureView| {
                            ui_manager.draw(
                                device,
                                queue,
                                encoder,
                                &window_clone,
                                color_attachment,
                                |ui| ui_callback(ui, scene, fps),
                            );
                        }),
                    );
                } else {
                    render_engine.render_frame_simple(&self.scene);
                }
            }
            other => {
                // Movement keys, mouse look, and scroll zoom all go through
                // the camera manager owned by the scene.
                if self.scene.camera_manager.process_window_event(&other) {
                    window.request_redraw();
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
