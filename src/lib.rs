// src/lib.rs
//! Freelook
//!
//! A free-look camera engine and 3D viewer built on wgpu and winit. The
//! reusable core is the [`camera`] module - a first-person camera that
//! turns keyboard, mouse, and scroll input into a view transform - wrapped
//! in the windowing, rendering, and overlay scaffolding a camera demo
//! needs.

pub mod app;
pub mod camera;
pub mod gfx;
pub mod performance;
pub mod prelude;
pub mod ui;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::FreelookApp;

/// Creates a default Freelook application instance
pub fn default() -> FreelookApp {
    pollster::block_on(FreelookApp::new())
}
