//! Free-look camera
//!
//! A first-person style camera that turns discrete keyboard, mouse, and
//! scroll input into a continuously updated world-space pose. The camera
//! owns its position and Euler angles and derives an orthonormal basis
//! (front/right/up) from them; the view matrix is built on demand from
//! that basis. It never talks to the window system or the GPU - input
//! mapping lives in [`CameraController`] and projection/uniform plumbing
//! in [`camera_utils`].
//!
//! [`CameraController`]: super::camera_controller::CameraController
//! [`camera_utils`]: super::camera_utils

use cgmath::{InnerSpace, Matrix4, Point3, Vector3};

/// Movement directions accepted by [`FreeCamera::process_keyboard`].
///
/// A closed enum rather than key codes so the camera stays independent of
/// the windowing system and invalid directions cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Default yaw in degrees, looking down the negative Z axis.
pub const DEFAULT_YAW: f32 = -90.0;
/// Default pitch in degrees, level with the horizon.
pub const DEFAULT_PITCH: f32 = 0.0;
/// Default movement speed in world units per second.
pub const DEFAULT_SPEED: f32 = 2.5;
/// Default multiplier applied to raw pointer deltas.
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
/// Default zoom (vertical field of view) in degrees.
pub const DEFAULT_ZOOM: f32 = 45.0;

// Pitch stays inside +/-89 degrees so `front` can never line up with the
// world up vector, which would degenerate the right-vector cross product.
const PITCH_LIMIT: f32 = 89.0;
const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 45.0;

/// Free-look camera holding pose, derived basis, and tuning parameters.
///
/// Constructed once at startup and threaded through the application state;
/// there is deliberately no global instance.
pub struct FreeCamera {
    /// World-space eye position, unconstrained.
    pub position: Point3<f32>,
    front: Vector3<f32>,
    right: Vector3<f32>,
    up: Vector3<f32>,
    world_up: Vector3<f32>,
    yaw: f32,
    pitch: f32,
    /// Movement speed in world units per second.
    pub movement_speed: f32,
    /// Scale applied to raw pointer deltas before they reach yaw/pitch.
    pub mouse_sensitivity: f32,
    zoom: f32,
}

impl Default for FreeCamera {
    fn default() -> Self {
        Self::new(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::unit_y(),
            DEFAULT_YAW,
            DEFAULT_PITCH,
        )
    }
}

impl FreeCamera {
    /// Creates a camera from a position, a world up vector, and Euler
    /// angles in degrees.
    ///
    /// The basis is computed immediately so the camera is usable before
    /// any input arrives.
    pub fn new(position: Point3<f32>, world_up: Vector3<f32>, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: -Vector3::unit_z(),
            right: Vector3::unit_x(),
            up: world_up,
            world_up,
            yaw,
            pitch,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
        };
        camera.update_camera_vectors();
        camera
    }

    /// Creates a camera from raw scalars, mirroring [`FreeCamera::new`].
    #[allow(clippy::too_many_arguments)]
    pub fn from_scalars(
        pos_x: f32,
        pos_y: f32,
        pos_z: f32,
        up_x: f32,
        up_y: f32,
        up_z: f32,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        Self::new(
            Point3::new(pos_x, pos_y, pos_z),
            Vector3::new(up_x, up_y, up_z),
            yaw,
            pitch,
        )
    }

    /// Builds the view matrix from the current pose.
    ///
    /// Pure: calling this any number of times without an intervening
    /// mutation yields identical results.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Translates the camera along its basis for one frame's worth of a
    /// held movement key.
    ///
    /// Exactly one direction per call; diagonal movement is the plain sum
    /// of successive calls and is intentionally not re-normalized. The
    /// orientation (and therefore the basis) is untouched.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Applies a pointer delta to yaw and pitch.
    ///
    /// Offsets are in arbitrary pointer units and are scaled by
    /// `mouse_sensitivity`. With `constrain_pitch` the pitch is clamped to
    /// +/-89 degrees after the additive update, so a single large delta
    /// cannot overshoot past the bound. The basis is recomputed before
    /// returning.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_camera_vectors();
    }

    /// Adjusts the zoom (field of view) from a scroll-wheel offset.
    ///
    /// Clamped to [1, 45] degrees. Pose and basis are unaffected; the
    /// projection built from this value lives outside the camera.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Current yaw in degrees. Unconstrained; wraps through trigonometry.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current zoom (vertical field of view) in degrees.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Unit vector the camera is looking along.
    pub fn front(&self) -> Vector3<f32> {
        self.front
    }

    /// Unit vector to the camera's right.
    pub fn right(&self) -> Vector3<f32> {
        self.right
    }

    /// Unit vector above the camera (not the world up).
    pub fn up(&self) -> Vector3<f32> {
        self.up
    }

    /// Fixed world up reference supplied at construction.
    pub fn world_up(&self) -> Vector3<f32> {
        self.world_up
    }

    // Rebuilds front/right/up from the current yaw and pitch. The cross
    // products shrink as pitch approaches the clamp bound, so both results
    // are re-normalized.
    fn update_camera_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let front = Vector3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_near(a: f32, b: f32) {
        assert!((a - b).abs() < EPS, "{} !~ {}", a, b);
    }

    #[test]
    fn test_default_looks_down_negative_z() {
        let camera = FreeCamera::default();
        let front = camera.front();
        assert_near(front.x, 0.0);
        assert_near(front.y, 0.0);
        assert_near(front.z, -1.0);
        // With front = -Z and world up = +Y the right vector is +X.
        assert_near(camera.right().x, 1.0);
        assert_near(camera.up().y, 1.0);
    }

    #[test]
    fn test_scalar_constructor_matches_vector_constructor() {
        let a = FreeCamera::new(Point3::new(1.0, 2.0, 3.0), Vector3::unit_y(), -45.0, 20.0);
        let b = FreeCamera::from_scalars(1.0, 2.0, 3.0, 0.0, 1.0, 0.0, -45.0, 20.0);
        assert_eq!(a.position, b.position);
        assert_eq!(a.front(), b.front());
        assert_eq!(a.right(), b.right());
        assert_eq!(a.up(), b.up());
    }

    #[test]
    fn test_basis_is_orthonormal_across_angle_range() {
        let mut camera = FreeCamera::default();
        let mut yaw = -720.0;
        while yaw <= 720.0 {
            let mut pitch = -89.0;
            while pitch <= 89.0 {
                camera.process_mouse_movement(
                    (yaw - camera.yaw()) / camera.mouse_sensitivity,
                    (pitch - camera.pitch()) / camera.mouse_sensitivity,
                    false,
                );
                let (f, r, u) = (camera.front(), camera.right(), camera.up());
                assert_near(f.magnitude(), 1.0);
                assert_near(r.magnitude(), 1.0);
                assert_near(u.magnitude(), 1.0);
                assert_near(f.dot(r), 0.0);
                assert_near(f.dot(u), 0.0);
                assert_near(r.dot(u), 0.0);
                pitch += 11.0;
            }
            yaw += 37.0;
        }
    }

    #[test]
    fn test_pitch_saturates_at_limit() {
        let mut camera = FreeCamera::default();
        for _ in 0..5 {
            camera.process_mouse_movement(0.0, 1000.0, true);
            assert!(camera.pitch() <= 89.0);
        }
        assert_eq!(camera.pitch(), 89.0);

        for _ in 0..5 {
            camera.process_mouse_movement(0.0, -1000.0, true);
        }
        assert_eq!(camera.pitch(), -89.0);
    }

    #[test]
    fn test_unconstrained_pitch_is_free() {
        let mut camera = FreeCamera::default();
        camera.process_mouse_movement(0.0, 1000.0, false);
        assert_near(camera.pitch(), 100.0);
    }

    #[test]
    fn test_rotation_scales_with_sensitivity() {
        let mut camera = FreeCamera::default();
        camera.mouse_sensitivity = 0.5;
        camera.process_mouse_movement(10.0, 4.0, true);
        assert_near(camera.yaw(), DEFAULT_YAW + 5.0);
        assert_near(camera.pitch(), 2.0);
    }

    #[test]
    fn test_zoom_clamps_both_ends() {
        let mut camera = FreeCamera::default();
        camera.process_mouse_scroll(100.0);
        assert_eq!(camera.zoom(), 1.0);
        camera.process_mouse_scroll(-100.0);
        assert_eq!(camera.zoom(), 45.0);
    }

    #[test]
    fn test_zoom_ignores_pose() {
        let mut camera = FreeCamera::default();
        let position = camera.position;
        let front = camera.front();
        camera.process_mouse_scroll(10.0);
        assert_eq!(camera.position, position);
        assert_eq!(camera.front(), front);
    }

    #[test]
    fn test_forward_movement_default_speed() {
        let mut camera = FreeCamera::default();
        camera.process_keyboard(CameraMovement::Forward, 1.0);
        assert_near(camera.position.x, 0.0);
        assert_near(camera.position.y, 0.0);
        assert_near(camera.position.z, -2.5);
    }

    #[test]
    fn test_forward_then_backward_round_trips() {
        let mut camera = FreeCamera::new(
            Point3::new(3.0, -1.0, 7.5),
            Vector3::unit_y(),
            123.0,
            -40.0,
        );
        let start = camera.position;
        camera.process_keyboard(CameraMovement::Forward, 0.37);
        camera.process_keyboard(CameraMovement::Backward, 0.37);
        assert_near(camera.position.x, start.x);
        assert_near(camera.position.y, start.y);
        assert_near(camera.position.z, start.z);
    }

    #[test]
    fn test_strafe_moves_along_right_vector() {
        let mut camera = FreeCamera::default();
        camera.process_keyboard(CameraMovement::Right, 2.0);
        assert_near(camera.position.x, 5.0);
        assert_near(camera.position.z, 0.0);
        camera.process_keyboard(CameraMovement::Left, 2.0);
        assert_near(camera.position.x, 0.0);
    }

    #[test]
    fn test_movement_does_not_touch_orientation() {
        let mut camera = FreeCamera::default();
        let front = camera.front();
        camera.process_keyboard(CameraMovement::Forward, 0.5);
        camera.process_keyboard(CameraMovement::Left, 0.5);
        assert_eq!(camera.front(), front);
        assert_eq!(camera.yaw(), DEFAULT_YAW);
    }

    #[test]
    fn test_view_matrix_is_stable_between_mutations() {
        let camera = FreeCamera::new(
            Point3::new(1.0, 2.0, 3.0),
            Vector3::unit_y(),
            -60.0,
            15.0,
        );
        let a: [f32; 16] = *camera.view_matrix().as_ref();
        let b: [f32; 16] = *camera.view_matrix().as_ref();
        assert_eq!(a, b);
    }

    #[test]
    fn test_view_matrix_inverts_camera_position() {
        use cgmath::{Transform, Vector4};

        let camera = FreeCamera::new(
            Point3::new(4.0, -2.0, 9.0),
            Vector3::unit_y(),
            200.0,
            35.0,
        );
        // The eye position must map to the view-space origin.
        let view = camera.view_matrix();
        let eye = view * Vector4::new(4.0, -2.0, 9.0, 1.0);
        assert_near(eye.x, 0.0);
        assert_near(eye.y, 0.0);
        assert_near(eye.z, 0.0);

        // A point one unit along front lands on the view-space -Z axis.
        let target = camera.position + camera.front();
        let ahead = view.transform_point(target);
        assert_near(ahead.x, 0.0);
        assert_near(ahead.y, 0.0);
        assert_near(ahead.z, -1.0);
    }
}
