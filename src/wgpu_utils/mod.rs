//! WGPU utility helpers
//!
//! Small wrappers over common wgpu buffer operations.

pub mod uniform_buffer;

pub use uniform_buffer::UniformBuffer;
