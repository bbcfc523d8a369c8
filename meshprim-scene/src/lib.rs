//! Mesh resource management over a pluggable render backend
//!
//! [`MeshRegistry`] owns GPU-side buffers created from
//! [`meshprim_core::MeshBuffer`] data and hands out stable [`MeshHandle`]s;
//! [`ShapeSet`] layers the stock primitive catalog on top, one lazily
//! loaded mesh per shape. Rendering goes through the [`RenderBackend`]
//! trait so the whole stack tests against a recording fake.

pub mod backend;
pub mod registry;
pub mod shapes;

#[cfg(test)]
pub(crate) mod test_backend;

pub use backend::{BufferId, DrawRange, FillMode, RenderBackend};
pub use registry::{Lifecycle, MeshHandle, MeshRegistry, RegistryError};
pub use shapes::{BoxSide, ShapeError, ShapeSet};
