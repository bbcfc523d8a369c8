//! Procedural primitive mesh generation
//!
//! Every generator in this crate produces a [`MeshBuffer`]: an interleaved
//! vertex buffer (position, normal, uv - 8 floats per vertex) plus an
//! optional `u32` index buffer. Generators are pure functions; identical
//! parameters yield bit-identical buffers.

pub mod frame;
pub mod mesh;
pub mod normal;
pub mod primitives;
pub mod topology;
pub mod vertex;

pub use mesh::{MeshBuffer, MeshRange, Topology};
pub use vertex::{AttributeLayout, VERTEX_FLOATS, Vertex};
