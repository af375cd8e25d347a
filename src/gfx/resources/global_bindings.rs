//! Global uniform bindings
//!
//! Bind group 0 in every pipeline: the per-frame camera data shared by all
//! objects. Per-object data lives in bind group 1 (see
//! [`crate::gfx::scene::object`]).

use crate::camera::CameraUniform;
use crate::wgpu_utils::uniform_buffer::UniformBuffer;

/// The global uniform buffer holding the camera data.
pub type GlobalUBO = UniformBuffer<CameraUniform>;

/// Layout and bind group for the global uniforms.
pub struct GlobalBindings {
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: Option<wgpu::BindGroup>,
}

impl GlobalBindings {
    /// Creates the layout; the bind group follows once the buffer exists.
    pub fn new(device: &wgpu::Device) -> Self {
        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Globals Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        GlobalBindings {
            bind_group_layout,
            bind_group: None,
        }
    }

    /// Creates the bind group over the given uniform buffer. Must run
    /// before the first frame.
    pub fn create_bind_group(&mut self, device: &wgpu::Device, ubo: &GlobalUBO) {
        self.bind_group = Some(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Globals Bind Group"),
            layout: &self.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.binding_resource(),
            }],
        }));
    }

    /// Layout for pipeline creation.
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    /// Bind group for rendering.
    ///
    /// # Panics
    /// Panics if [`create_bind_group`](Self::create_bind_group) has not
    /// run yet.
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        self.bind_group
            .as_ref()
            .expect("Bind group has not been created yet!")
    }
}
