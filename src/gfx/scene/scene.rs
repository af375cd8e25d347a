//! Scene container

use std::path::Path;

use thiserror::Error;

use crate::camera::CameraManager;
use crate::gfx::geometry::GeometryData;
use crate::gfx::scene::object::{Mesh, Object};

/// Errors raised while populating a scene from disk.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to load OBJ file {path}")]
    ObjLoad {
        path: String,
        #[source]
        source: tobj::LoadError,
    },
    #[error("OBJ file {0} contains no geometry")]
    EmptyObj(String),
}

/// The scene: camera plus a flat list of objects.
///
/// Owns the [`CameraManager`] so the whole render state travels as one
/// value through the application (no global camera).
pub struct Scene {
    pub camera_manager: CameraManager,
    pub objects: Vec<Object>,
}

impl Scene {
    pub fn new(camera_manager: CameraManager) -> Self {
        Self {
            camera_manager,
            objects: Vec::new(),
        }
    }

    /// Advances the camera by one frame's input and delta time.
    pub fn update(&mut self, delta_time: f32) {
        self.camera_manager.update(delta_time);
    }

    /// Adds an object built from procedural geometry and returns it for
    /// further configuration (color, transform).
    pub fn add_geometry(&mut self, name: &str, geometry: &GeometryData) -> &mut Object {
        self.objects
            .push(Object::new(name, vec![Mesh::from_geometry(geometry)]));
        self.objects.last_mut().unwrap()
    }

    /// Loads a model from an OBJ file, one scene object per OBJ model.
    ///
    /// Missing normals are reconstructed from the triangle faces.
    pub fn add_object(&mut self, path: &str) -> Result<(), SceneError> {
        let (models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )
        .map_err(|source| SceneError::ObjLoad {
            path: path.to_string(),
            source,
        })?;

        if models.is_empty() {
            return Err(SceneError::EmptyObj(path.to_string()));
        }

        let stem = Path::new(path)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string());

        for (i, model) in models.iter().enumerate() {
            let mesh = &model.mesh;
            let normals = if mesh.normals.is_empty() {
                log::warn!("{}: no normals in OBJ, computing from faces", path);
                Mesh::compute_vertex_normals(&mesh.positions, &mesh.indices)
            } else {
                mesh.normals.clone()
            };

            let name = if model.name.is_empty() {
                format!("{}_{}", stem, i)
            } else {
                model.name.clone()
            };
            log::info!(
                "loaded '{}': {} vertices, {} triangles",
                name,
                mesh.positions.len() / 3,
                mesh.indices.len() / 3
            );

            self.objects.push(Object::new(
                name,
                vec![Mesh::from_arrays(
                    &mesh.positions,
                    &normals,
                    mesh.indices.clone(),
                )],
            ));
        }

        Ok(())
    }

    /// Creates GPU resources for every object that does not have them yet.
    pub fn init_gpu_resources(&mut self, device: &wgpu::Device, layout: &wgpu::BindGroupLayout) {
        for object in &mut self.objects {
            object.init_gpu_resources(device, layout);
        }
    }

    /// Syncs per-object uniforms (transform, color) to the GPU.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        for object in &mut self.objects {
            object.update_gpu(queue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraController, FreeCamera};
    use crate::gfx::geometry::generate_cube;

    fn test_scene() -> Scene {
        let manager = CameraManager::new(
            FreeCamera::default(),
            CameraController::new(),
            800,
            600,
        );
        Scene::new(manager)
    }

    #[test]
    fn test_add_geometry_returns_configurable_object() {
        let mut scene = test_scene();
        scene
            .add_geometry("cube", &generate_cube())
            .with_color([0.0, 1.0, 0.0, 1.0]);
        assert_eq!(scene.objects.len(), 1);
        assert_eq!(scene.objects[0].name, "cube");
        assert_eq!(scene.objects[0].color, [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_missing_obj_file_is_a_typed_error() {
        let mut scene = test_scene();
        let result = scene.add_object("does_not_exist.obj");
        assert!(matches!(result, Err(SceneError::ObjLoad { .. })));
        assert!(scene.objects.is_empty());
    }

    #[test]
    fn test_update_applies_camera_movement() {
        let mut scene = test_scene();
        scene.update(1.0);
        // No keys held: the camera must not drift.
        assert_eq!(scene.camera_manager.camera.position.z, 0.0);
    }
}
