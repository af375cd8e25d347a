//! # Camera System
//!
//! Free-look camera for first-person navigation of a 3D scene. The system
//! is split the same way input flows through it:
//!
//! - [`FreeCamera`] - pose (position, yaw, pitch), derived orthonormal
//!   basis, and the event-driven mutators
//! - [`CameraController`] - winit event mapping (held keys, mouse look,
//!   scroll) on top of the pure camera
//! - [`CameraManager`] - camera + controller + projection bundle threaded
//!   through the application state
//!
//! The camera is an explicitly owned value, never a global; the overlay UI
//! reads it but cannot mutate it.

pub mod camera_controller;
pub mod camera_utils;
pub mod free_camera;

// Re-export main types
pub use camera_controller::CameraController;
pub use camera_utils::{CameraManager, CameraUniform, Projection};
pub use free_camera::{CameraMovement, FreeCamera};
