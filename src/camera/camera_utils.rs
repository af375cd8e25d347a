//! Projection and GPU plumbing around the free-look camera
//!
//! The camera itself only knows its pose; the perspective projection is
//! held here, built from the camera's zoom plus viewport aspect and fixed
//! near/far planes. [`CameraManager`] bundles camera, controller, and
//! projection into the single object the application threads around.

use cgmath::{perspective, Deg, Matrix4, SquareMatrix};
use winit::event::WindowEvent;

use super::camera_controller::CameraController;
use super::free_camera::FreeCamera;

/// Maps cgmath's OpenGL clip space (z in [-1, 1]) to wgpu's (z in [0, 1]).
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Perspective projection parameters held outside the camera.
///
/// The vertical field of view is not stored here - it is supplied per
/// frame from [`FreeCamera::zoom`], which scroll input adjusts.
///
/// [`FreeCamera::zoom`]: super::free_camera::FreeCamera::zoom
pub struct Projection {
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            aspect: width as f32 / height.max(1) as f32,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Tracks a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Builds the projection matrix for the given field of view in degrees.
    pub fn matrix(&self, fovy_deg: f32) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(Deg(fovy_deg), self.aspect, self.znear, self.zfar)
    }
}

/// Per-frame camera data uploaded to the GPU.
///
/// The eye position is padded to homogeneous coordinates for the 16-byte
/// uniform alignment requirement.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_position: [f32; 4],
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
        }
    }
}

/// Owns the camera, its input controller, and the projection.
///
/// This is the explicit instance the application state carries instead of
/// a process-wide camera; input dispatch and the render loop both receive
/// it by reference.
pub struct CameraManager {
    pub camera: FreeCamera,
    pub controller: CameraController,
    pub projection: Projection,
    pub uniform: CameraUniform,
}

impl CameraManager {
    pub fn new(camera: FreeCamera, controller: CameraController, width: u32, height: u32) -> Self {
        let mut manager = Self {
            camera,
            controller,
            projection: Projection::new(width, height),
            uniform: CameraUniform::default(),
        };
        manager.update_uniform();
        manager
    }

    /// Feeds a window event to the input controller. Returns true if the
    /// event was consumed by the camera.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> bool {
        self.controller.handle_window_event(&mut self.camera, event)
    }

    /// Advances one frame: applies held-key movement scaled by the frame
    /// delta, then refreshes the GPU uniform.
    pub fn update(&mut self, delta_time: f32) {
        self.controller.update_camera(&mut self.camera, delta_time);
        self.update_uniform();
    }

    /// Tracks a viewport resize in the projection.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }

    /// Combined view-projection matrix for the current pose and zoom.
    pub fn view_proj_matrix(&self) -> Matrix4<f32> {
        self.projection.matrix(self.camera.zoom()) * self.camera.view_matrix()
    }

    fn update_uniform(&mut self) {
        let position = self.camera.position;
        self.uniform.view_position = [position.x, position.y, position.z, 1.0];
        self.uniform.view_proj = self.view_proj_matrix().into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Point3, Vector3, Vector4};

    const EPS: f32 = 1e-5;

    #[test]
    fn test_projection_resize_updates_aspect() {
        let mut projection = Projection::new(1200, 800);
        assert!((projection.aspect - 1.5).abs() < EPS);

        projection.resize(800, 800);
        assert!((projection.aspect - 1.0).abs() < EPS);

        // Minimized windows must not poison the aspect ratio.
        projection.resize(0, 0);
        assert!((projection.aspect - 1.0).abs() < EPS);
    }

    #[test]
    fn test_projection_maps_depth_into_wgpu_range() {
        let projection = Projection::new(1000, 1000);
        let proj = projection.matrix(45.0);

        // A point on the near plane lands at z/w = 0, far plane at 1.
        let near = proj * Vector4::new(0.0, 0.0, -projection.znear, 1.0);
        assert!((near.z / near.w).abs() < EPS);
        let far = proj * Vector4::new(0.0, 0.0, -projection.zfar, 1.0);
        assert!((far.z / far.w - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_manager_uniform_tracks_position() {
        let camera = FreeCamera::new(Point3::new(2.0, 4.0, -6.0), Vector3::unit_y(), -90.0, 0.0);
        let manager = CameraManager::new(camera, CameraController::new(), 800, 600);
        assert_eq!(manager.uniform.view_position, [2.0, 4.0, -6.0, 1.0]);
    }

    #[test]
    fn test_manager_update_refreshes_uniform() {
        let camera = FreeCamera::default();
        let mut manager = CameraManager::new(camera, CameraController::new(), 800, 600);
        let before = manager.uniform.view_proj;

        manager.camera.process_keyboard(
            super::super::free_camera::CameraMovement::Forward,
            1.0,
        );
        manager.update(0.0);
        assert_eq!(manager.uniform.view_position, [0.0, 0.0, -2.5, 1.0]);
        assert_ne!(manager.uniform.view_proj, before);
    }

    #[test]
    fn test_view_proj_matches_uniform(){
        let camera = FreeCamera::new(Point3::new(1.0, 1.0, 1.0), Vector3::unit_y(), 10.0, -5.0);
        let manager = CameraManager::new(camera, CameraController::new(), 640, 480);
        let expected: [[f32; 4]; 4] = manager.view_proj_matrix().into();
        assert_eq!(manager.uniform.view_proj, expected);
    }
}
