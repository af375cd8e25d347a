//! # User Interface Module
//!
//! Dear ImGui overlay for the viewer. [`UiManager`] handles the
//! imgui/winit/wgpu integration and input capture; [`panel`] provides the
//! built-in panels (camera HUD, controls help).
//!
//! Input capture matters here: when the UI wants the mouse or keyboard,
//! events stop before they reach the camera controller, so clicking a
//! panel never turns the camera.

pub mod manager;
pub mod panel;

// Re-export main types
pub use manager::UiManager;
pub use panel::{camera_hud, controls_panel};
