//! # Freelook Prelude
//!
//! One-stop import for typical viewer applications:
//!
//! ```no_run
//! use freelook::prelude::*;
//!
//! let mut app = freelook::default();
//! app.set_ui(|ui, scene, fps| {
//!     camera_hud(ui, &scene.camera_manager.camera, fps);
//! });
//! app.run();
//! ```

// Core application types
pub use crate::app::FreelookApp;
pub use crate::default;

// Camera system
pub use crate::camera::{CameraController, CameraManager, CameraMovement, FreeCamera};

// Scene and geometry
pub use crate::gfx::geometry::{generate_cube, generate_plane, GeometryData};
pub use crate::gfx::scene::{Object, Scene, SceneError};

// Overlay panels
pub use crate::ui::{camera_hud, controls_panel};

// Frame timing
pub use crate::performance::FrameClock;

// Common external types
pub use cgmath::{Deg, InnerSpace, Point3, Vector3};
pub use imgui::Ui;
