//! # Procedural Geometry
//!
//! CPU-side mesh data and generators for the primitive shapes the demo
//! scene is built from. Geometry here is plain arrays; GPU upload happens
//! when the data is turned into a [`Mesh`].
//!
//! [`Mesh`]: crate::gfx::scene::object::Mesh

pub mod primitives;

pub use primitives::{generate_cube, generate_plane};

/// Raw mesh data: positions, per-vertex normals, and triangle indices.
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    pub vertices: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl GeometryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
