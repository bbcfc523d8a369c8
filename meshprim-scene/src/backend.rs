//! Render backend seam
//!
//! The registry talks to the GPU exclusively through [`RenderBackend`].
//! Implementations wrap whatever graphics API hosts the app; tests use a
//! recording fake.

use meshprim_core::{AttributeLayout, Topology};

/// Backend-issued identifier for one uploaded mesh (vertex + index buffer)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BufferId(pub u32);

/// Solid fill or wireframe overlay
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillMode {
    #[default]
    Solid,
    Wireframe,
}

/// Element range for one draw call
///
/// `first` and `count` address indices for indexed meshes and raw
/// vertices otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawRange {
    Indexed { first: u32, count: u32 },
    Vertices { first: u32, count: u32 },
}

/// GPU-facing operations the registry needs
///
/// All meshes share one interleaved vertex layout, bound once up front.
/// `update_mesh` may grow or shrink the buffers; implementations
/// reallocate as needed.
pub trait RenderBackend {
    fn bind_layout(&mut self, layout: &AttributeLayout) -> anyhow::Result<()>;

    fn create_mesh(
        &mut self,
        vertex_data: &[f32],
        indices: &[u32],
        topology: Topology,
    ) -> anyhow::Result<BufferId>;

    fn update_mesh(
        &mut self,
        id: BufferId,
        vertex_data: &[f32],
        indices: &[u32],
    ) -> anyhow::Result<()>;

    fn draw(
        &mut self,
        id: BufferId,
        topology: Topology,
        range: DrawRange,
        fill: FillMode,
    ) -> anyhow::Result<()>;

    fn destroy_mesh(&mut self, id: BufferId) -> anyhow::Result<()>;
}
