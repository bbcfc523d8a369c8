//! Recording backend fake for registry and shape tests

use meshprim_core::{AttributeLayout, Topology};

use crate::backend::{BufferId, DrawRange, FillMode, RenderBackend};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    BindLayout(AttributeLayout),
    CreateMesh {
        id: BufferId,
        vertex_floats: usize,
        index_count: usize,
        topology: Topology,
    },
    UpdateMesh {
        id: BufferId,
        vertex_floats: usize,
        index_count: usize,
    },
    Draw {
        id: BufferId,
        topology: Topology,
        range: DrawRange,
        fill: FillMode,
    },
    DestroyMesh(BufferId),
}

/// Backend that records every call and hands out sequential buffer ids
#[derive(Default)]
pub struct RecordingBackend {
    pub calls: Vec<Call>,
    next_buffer: u32,
}

impl RecordingBackend {
    pub fn draws(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Draw { .. }))
            .collect()
    }
}

impl RenderBackend for RecordingBackend {
    fn bind_layout(&mut self, layout: &AttributeLayout) -> anyhow::Result<()> {
        self.calls.push(Call::BindLayout(*layout));
        Ok(())
    }

    fn create_mesh(
        &mut self,
        vertex_data: &[f32],
        indices: &[u32],
        topology: Topology,
    ) -> anyhow::Result<BufferId> {
        let id = BufferId(self.next_buffer);
        self.next_buffer += 1;
        self.calls.push(Call::CreateMesh {
            id,
            vertex_floats: vertex_data.len(),
            index_count: indices.len(),
            topology,
        });
        Ok(id)
    }

    fn update_mesh(
        &mut self,
        id: BufferId,
        vertex_data: &[f32],
        indices: &[u32],
    ) -> anyhow::Result<()> {
        self.calls.push(Call::UpdateMesh {
            id,
            vertex_floats: vertex_data.len(),
            index_count: indices.len(),
        });
        Ok(())
    }

    fn draw(
        &mut self,
        id: BufferId,
        topology: Topology,
        range: DrawRange,
        fill: FillMode,
    ) -> anyhow::Result<()> {
        self.calls.push(Call::Draw {
            id,
            topology,
            range,
            fill,
        });
        Ok(())
    }

    fn destroy_mesh(&mut self, id: BufferId) -> anyhow::Result<()> {
        self.calls.push(Call::DestroyMesh(id));
        Ok(())
    }
}
