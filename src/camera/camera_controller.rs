//! Window-event input mapping for the free-look camera
//!
//! Translates winit events into [`FreeCamera`] mutations: held movement
//! keys become per-frame translations, cursor motion becomes yaw/pitch
//! while the right mouse button is held, and wheel events become zoom.
//! The controller owns only input state - the camera itself stays a pure
//! math object.

use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::free_camera::{CameraMovement, FreeCamera};

/// Maps window events onto a [`FreeCamera`].
///
/// Mouse look is active while the right button is held. Whenever look
/// (re)activates, the last cursor sample is discarded so the first motion
/// event after activation only records a reference position instead of
/// producing a spurious jump.
pub struct CameraController {
    forward_pressed: bool,
    backward_pressed: bool,
    left_pressed: bool,
    right_pressed: bool,
    look_active: bool,
    last_cursor: Option<(f32, f32)>,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            forward_pressed: false,
            backward_pressed: false,
            left_pressed: false,
            right_pressed: false,
            look_active: false,
            last_cursor: None,
        }
    }

    /// Routes a window event to the camera.
    ///
    /// Rotation and zoom are applied immediately; movement keys only update
    /// held-key state and take effect on the next [`update_camera`] call.
    /// Returns true if the event was consumed.
    ///
    /// [`update_camera`]: Self::update_camera
    pub fn handle_window_event(&mut self, camera: &mut FreeCamera, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => self.process_key(event),
            WindowEvent::MouseInput {
                button: MouseButton::Right,
                state,
                ..
            } => {
                self.set_look_active(*state == ElementState::Pressed);
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.apply_cursor_sample(camera, position.x as f32, position.y as f32)
            }
            WindowEvent::MouseWheel { delta, .. } => {
                camera.process_mouse_scroll(Self::scroll_offset(delta));
                true
            }
            _ => false,
        }
    }

    /// Applies one frame of held-key movement to the camera.
    ///
    /// Each held direction is a separate translation; holding two keys
    /// sums the motion without re-normalizing, matching the per-direction
    /// contract of [`FreeCamera::process_keyboard`].
    pub fn update_camera(&self, camera: &mut FreeCamera, delta_time: f32) {
        if self.forward_pressed {
            camera.process_keyboard(CameraMovement::Forward, delta_time);
        }
        if self.backward_pressed {
            camera.process_keyboard(CameraMovement::Backward, delta_time);
        }
        if self.left_pressed {
            camera.process_keyboard(CameraMovement::Left, delta_time);
        }
        if self.right_pressed {
            camera.process_keyboard(CameraMovement::Right, delta_time);
        }
    }

    /// True while mouse look is engaged.
    pub fn is_looking(&self) -> bool {
        self.look_active
    }

    fn process_key(&mut self, event: &KeyEvent) -> bool {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return false;
        };
        let pressed = event.state == ElementState::Pressed;
        self.set_direction(key_code, pressed)
    }

    fn set_direction(&mut self, key_code: KeyCode, pressed: bool) -> bool {
        match key_code {
            KeyCode::KeyW | KeyCode::ArrowUp => self.forward_pressed = pressed,
            KeyCode::KeyS | KeyCode::ArrowDown => self.backward_pressed = pressed,
            KeyCode::KeyA | KeyCode::ArrowLeft => self.left_pressed = pressed,
            KeyCode::KeyD | KeyCode::ArrowRight => self.right_pressed = pressed,
            _ => return false,
        }
        true
    }

    fn set_look_active(&mut self, active: bool) {
        self.look_active = active;
        if active {
            // Forget the previous sample so the first motion event after
            // activation cannot register as a huge delta.
            self.last_cursor = None;
        }
    }

    fn apply_cursor_sample(&mut self, camera: &mut FreeCamera, x: f32, y: f32) -> bool {
        if !self.look_active {
            return false;
        }
        if let Some((last_x, last_y)) = self.last_cursor {
            // Screen y grows downward while pitch grows upward.
            camera.process_mouse_movement(x - last_x, last_y - y, true);
        }
        self.last_cursor = Some((x, y));
        true
    }

    fn scroll_offset(delta: &MouseScrollDelta) -> f32 {
        match delta {
            MouseScrollDelta::LineDelta(_, y) => *y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32 * 0.01,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_held_keys_translate_each_frame() {
        let mut controller = CameraController::new();
        let mut camera = FreeCamera::default();
        assert!(controller.set_direction(KeyCode::KeyW, true));

        controller.update_camera(&mut camera, 0.5);
        controller.update_camera(&mut camera, 0.5);
        assert!((camera.position.z - (-2.5)).abs() < EPS);

        assert!(controller.set_direction(KeyCode::KeyW, false));
        controller.update_camera(&mut camera, 0.5);
        assert!((camera.position.z - (-2.5)).abs() < EPS);
    }

    #[test]
    fn test_arrow_keys_alias_wasd() {
        let mut controller = CameraController::new();
        let mut camera = FreeCamera::default();
        assert!(controller.set_direction(KeyCode::ArrowRight, true));
        controller.update_camera(&mut camera, 1.0);
        assert!((camera.position.x - 2.5).abs() < EPS);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut controller = CameraController::new();
        assert!(!controller.set_direction(KeyCode::KeyQ, true));
        assert!(!controller.set_direction(KeyCode::Space, true));
    }

    #[test]
    fn test_diagonal_movement_is_summed() {
        let mut controller = CameraController::new();
        let mut camera = FreeCamera::default();
        controller.set_direction(KeyCode::KeyW, true);
        controller.set_direction(KeyCode::KeyD, true);
        controller.update_camera(&mut camera, 1.0);
        // Both axes get the full per-direction velocity; the diagonal is
        // deliberately faster than either direction alone.
        assert!((camera.position.z - (-2.5)).abs() < EPS);
        assert!((camera.position.x - 2.5).abs() < EPS);
    }

    #[test]
    fn test_first_cursor_sample_after_activation_is_suppressed() {
        let mut controller = CameraController::new();
        let mut camera = FreeCamera::default();
        let yaw = camera.yaw();

        controller.set_look_active(true);
        assert!(controller.apply_cursor_sample(&mut camera, 400.0, 300.0));
        assert_eq!(camera.yaw(), yaw);

        assert!(controller.apply_cursor_sample(&mut camera, 410.0, 300.0));
        assert!((camera.yaw() - (yaw + 1.0)).abs() < EPS);
    }

    #[test]
    fn test_reactivation_suppresses_again() {
        let mut controller = CameraController::new();
        let mut camera = FreeCamera::default();

        controller.set_look_active(true);
        controller.apply_cursor_sample(&mut camera, 100.0, 100.0);
        controller.apply_cursor_sample(&mut camera, 120.0, 100.0);
        let yaw = camera.yaw();

        // Release, move the cursor far away, re-engage: the jump must not
        // be interpreted as rotation.
        controller.set_look_active(false);
        controller.set_look_active(true);
        controller.apply_cursor_sample(&mut camera, 700.0, 500.0);
        assert_eq!(camera.yaw(), yaw);
    }

    #[test]
    fn test_cursor_motion_without_look_is_ignored() {
        let mut controller = CameraController::new();
        let mut camera = FreeCamera::default();
        assert!(!controller.apply_cursor_sample(&mut camera, 50.0, 50.0));
        assert_eq!(camera.yaw(), super::super::free_camera::DEFAULT_YAW);
    }

    #[test]
    fn test_vertical_motion_is_inverted_into_pitch() {
        let mut controller = CameraController::new();
        let mut camera = FreeCamera::default();
        controller.set_look_active(true);
        controller.apply_cursor_sample(&mut camera, 0.0, 100.0);
        // Cursor moved up the screen by 40 px -> pitch up by 4 degrees.
        controller.apply_cursor_sample(&mut camera, 0.0, 60.0);
        assert!((camera.pitch() - 4.0).abs() < EPS);
    }

    #[test]
    fn test_scroll_offset_conversion() {
        use winit::dpi::PhysicalPosition;

        let line = MouseScrollDelta::LineDelta(0.0, 2.0);
        assert_eq!(CameraController::scroll_offset(&line), 2.0);

        let pixel = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 300.0));
        assert!((CameraController::scroll_offset(&pixel) - 3.0).abs() < EPS);
    }
}
