//! # Graphics Module
//!
//! Everything the viewer draws with: the forward render engine, GPU
//! resource helpers, the scene graph, and procedural geometry.
//!
//! - **Rendering** ([`rendering`]) - wgpu surface, pipeline, frame loop
//! - **Resources** ([`resources`]) - global camera bindings, depth texture
//! - **Scene** ([`scene`]) - objects, meshes, OBJ loading
//! - **Geometry** ([`geometry`]) - procedural primitives for the demo scene
//!
//! The camera system itself lives in [`crate::camera`]; this module only
//! consumes its view-projection output.

pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use rendering::RenderEngine;
pub use scene::Scene;
