//! Scene objects and their GPU resources
//!
//! An [`Object`] is one or more meshes plus a transform and a flat color.
//! CPU-side data is built first; GPU buffers and the per-object bind group
//! are created lazily once a device is available.

use cgmath::{Deg, Matrix4, SquareMatrix, Vector3};
use wgpu::util::DeviceExt;

use crate::gfx::geometry::GeometryData;
use crate::gfx::scene::vertex::Vertex3D;
use crate::wgpu_utils::uniform_buffer::UniformBuffer;

/// Per-object uniform data: model matrix plus base color.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

/// Triangle mesh with lazily created GPU buffers.
pub struct Mesh {
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    index_count: u32,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex3D>, indices: Vec<u32>) -> Self {
        let index_count = indices.len() as u32;
        Self {
            vertices,
            indices,
            vertex_buffer: None,
            index_buffer: None,
            index_count,
        }
    }

    /// Builds a mesh from flat position/normal arrays as produced by OBJ
    /// loading (three floats per vertex each).
    pub fn from_arrays(positions: &[f32], normals: &[f32], indices: Vec<u32>) -> Self {
        let vertices = (0..positions.len() / 3)
            .map(|i| Vertex3D {
                position: [positions[i * 3], positions[i * 3 + 1], positions[i * 3 + 2]],
                normal: [normals[i * 3], normals[i * 3 + 1], normals[i * 3 + 2]],
            })
            .collect();
        Self::new(vertices, indices)
    }

    /// Builds a mesh from procedural geometry.
    pub fn from_geometry(geometry: &GeometryData) -> Self {
        let vertices = geometry
            .vertices
            .iter()
            .zip(&geometry.normals)
            .map(|(position, normal)| Vertex3D {
                position: *position,
                normal: *normal,
            })
            .collect();
        Self::new(vertices, geometry.indices.clone())
    }

    /// Computes averaged per-vertex normals from triangle faces, for OBJ
    /// files that ship without normals.
    pub fn compute_vertex_normals(positions: &[f32], indices: &[u32]) -> Vec<f32> {
        let mut normals = vec![0.0f32; positions.len()];

        for triangle in indices.chunks_exact(3) {
            let [i0, i1, i2] = [
                triangle[0] as usize,
                triangle[1] as usize,
                triangle[2] as usize,
            ];
            let v = |i: usize| [positions[i * 3], positions[i * 3 + 1], positions[i * 3 + 2]];
            let (v0, v1, v2) = (v(i0), v(i1), v(i2));

            let e1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
            let e2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];
            let face = [
                e1[1] * e2[2] - e1[2] * e2[1],
                e1[2] * e2[0] - e1[0] * e2[2],
                e1[0] * e2[1] - e1[1] * e2[0],
            ];

            // Accumulate unnormalized face normals; larger faces weigh more.
            for i in [i0, i1, i2] {
                normals[i * 3] += face[0];
                normals[i * 3 + 1] += face[1];
                normals[i * 3 + 2] += face[2];
            }
        }

        for normal in normals.chunks_exact_mut(3) {
            let length =
                (normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2]).sqrt();
            if length > 0.0 {
                normal[0] /= length;
                normal[1] /= length;
                normal[2] /= length;
            }
        }

        normals
    }

    /// Uploads vertex and index data to the GPU. Safe to call again; the
    /// existing buffers are kept.
    pub fn upload(&mut self, device: &wgpu::Device) {
        if self.vertex_buffer.is_some() {
            return;
        }
        self.vertex_buffer = Some(device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Vertex Buffer"),
                contents: bytemuck::cast_slice(&self.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));
        self.index_buffer = Some(device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Index Buffer"),
                contents: bytemuck::cast_slice(&self.indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        ));
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

/// GPU resources backing one object: its uniform buffer and bind group.
pub struct ObjectGpuResources {
    uniform: UniformBuffer<ObjectUniform>,
    bind_group: wgpu::BindGroup,
}

/// A named, placeable object in the scene.
pub struct Object {
    pub name: String,
    pub meshes: Vec<Mesh>,
    pub transform: Matrix4<f32>,
    pub color: [f32; 4],
    pub visible: bool,
    gpu: Option<ObjectGpuResources>,
}

impl Object {
    pub fn new(name: impl Into<String>, meshes: Vec<Mesh>) -> Self {
        Self {
            name: name.into(),
            meshes,
            transform: Matrix4::identity(),
            color: [0.8, 0.8, 0.8, 1.0],
            visible: true,
            gpu: None,
        }
    }

    /// Sets the base color. Chainable during scene setup.
    pub fn with_color(&mut self, color: [f32; 4]) -> &mut Self {
        self.color = color;
        self
    }

    /// Replaces the transform with translation * rotation(Y) * scale.
    pub fn with_transform(
        &mut self,
        translation: Vector3<f32>,
        rotation_y: Deg<f32>,
        scale: f32,
    ) -> &mut Self {
        self.transform = Matrix4::from_translation(translation)
            * Matrix4::from_angle_y(rotation_y)
            * Matrix4::from_scale(scale);
        self
    }

    /// Replaces the transform with a plain translation.
    pub fn with_translation(&mut self, translation: Vector3<f32>) -> &mut Self {
        self.transform = Matrix4::from_translation(translation);
        self
    }

    fn uniform_content(&self) -> ObjectUniform {
        ObjectUniform {
            model: self.transform.into(),
            color: self.color,
        }
    }

    /// Creates mesh buffers, the per-object uniform, and its bind group.
    pub fn init_gpu_resources(&mut self, device: &wgpu::Device, layout: &wgpu::BindGroupLayout) {
        for mesh in &mut self.meshes {
            mesh.upload(device);
        }
        if self.gpu.is_some() {
            return;
        }

        let uniform = UniformBuffer::new_with_data(device, &self.uniform_content());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Object Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform.binding_resource(),
            }],
        });

        self.gpu = Some(ObjectGpuResources {
            uniform,
            bind_group,
        });
    }

    /// Pushes the current transform and color to the GPU.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        let content = self.uniform_content();
        if let Some(gpu) = &mut self.gpu {
            gpu.uniform.update_content(queue, content);
        }
    }

    pub fn bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.gpu.as_ref().map(|gpu| &gpu.bind_group)
    }
}

/// Extension trait so a render pass can draw an [`Object`] directly.
pub trait DrawObject<'a> {
    fn draw_object(&mut self, object: &'a Object);
}

impl<'a> DrawObject<'a> for wgpu::RenderPass<'a> {
    fn draw_object(&mut self, object: &'a Object) {
        let Some(gpu) = &object.gpu else {
            return;
        };
        self.set_bind_group(1, &gpu.bind_group, &[]);

        for mesh in &object.meshes {
            let (Some(vertex_buffer), Some(index_buffer)) =
                (&mesh.vertex_buffer, &mesh.index_buffer)
            else {
                continue;
            };
            self.set_vertex_buffer(0, vertex_buffer.slice(..));
            self.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            self.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }
}
