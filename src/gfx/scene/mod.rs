//! # Scene Management
//!
//! Scene graph for the viewer: a [`Scene`] owns the camera manager and a
//! flat object list, [`Object`]s pair meshes with a transform and color,
//! and [`Vertex3D`] is the GPU vertex format. Models load from OBJ via
//! `tobj`; procedural shapes come from [`crate::gfx::geometry`].

pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use object::{DrawObject, Mesh, Object};
pub use scene::{Scene, SceneError};
pub use vertex::Vertex3D;
