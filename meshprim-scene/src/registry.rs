//! Handle-based mesh registry
//!
//! Owns every backend buffer created from generated mesh data. Static
//! meshes upload once and are immutable; dynamic meshes keep their handle
//! across `replace` calls so per-frame parameter tweaks reuse the same
//! backend buffer.

use hashbrown::HashMap;
use thiserror::Error;
use tracing::debug;

use meshprim_core::{AttributeLayout, MeshBuffer, MeshRange, Topology};

use crate::backend::{BufferId, DrawRange, FillMode, RenderBackend};

/// Stable identifier for a registered mesh
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

/// Upload lifecycle a mesh was registered with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Uploaded once, contents never change
    Static,
    /// Contents may be replaced in place via [`MeshRegistry::replace`]
    Dynamic,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("mesh handle {0} is not loaded")]
    NotLoaded(u32),
    #[error("mesh handle {handle} has no range named {name:?}")]
    UnknownRange { handle: u32, name: String },
    #[error("mesh handle {0} is static and cannot be replaced")]
    NotDynamic(u32),
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

struct StoredMesh {
    buffer: BufferId,
    topology: Topology,
    lifecycle: Lifecycle,
    vertex_count: u32,
    index_count: u32,
    ranges: Vec<MeshRange>,
}

impl StoredMesh {
    fn full_range(&self) -> DrawRange {
        if self.index_count > 0 {
            DrawRange::Indexed {
                first: 0,
                count: self.index_count,
            }
        } else {
            DrawRange::Vertices {
                first: 0,
                count: self.vertex_count,
            }
        }
    }

    fn sub_range(&self, start: u32, count: u32) -> DrawRange {
        if self.index_count > 0 {
            DrawRange::Indexed { first: start, count }
        } else {
            DrawRange::Vertices { first: start, count }
        }
    }
}

/// Registry of uploaded meshes over a [`RenderBackend`]
///
/// The vertex layout is fixed at construction and bound into the backend
/// exactly once, before the first upload.
pub struct MeshRegistry<B> {
    backend: B,
    layout: AttributeLayout,
    layout_bound: bool,
    meshes: HashMap<u32, StoredMesh>,
    next_id: u32,
}

impl<B: RenderBackend> MeshRegistry<B> {
    pub fn new(backend: B, layout: AttributeLayout) -> Self {
        Self {
            backend,
            layout,
            layout_bound: false,
            meshes: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn is_loaded(&self, handle: MeshHandle) -> bool {
        self.meshes.contains_key(&handle.0)
    }

    pub fn lifecycle(&self, handle: MeshHandle) -> Option<Lifecycle> {
        self.meshes.get(&handle.0).map(|m| m.lifecycle)
    }

    fn ensure_layout(&mut self) -> Result<(), RegistryError> {
        if !self.layout_bound {
            self.backend.bind_layout(&self.layout)?;
            self.layout_bound = true;
        }
        Ok(())
    }

    fn insert(&mut self, mesh: &MeshBuffer, lifecycle: Lifecycle) -> Result<MeshHandle, RegistryError> {
        self.ensure_layout()?;
        let buffer = self
            .backend
            .create_mesh(mesh.vertex_data(), &mesh.indices, mesh.topology)?;
        let handle = MeshHandle(self.next_id);
        self.next_id += 1;
        self.meshes.insert(
            handle.0,
            StoredMesh {
                buffer,
                topology: mesh.topology,
                lifecycle,
                vertex_count: mesh.vertex_count() as u32,
                index_count: mesh.index_count() as u32,
                ranges: mesh.ranges.clone(),
            },
        );
        debug!(
            handle = handle.0,
            vertices = mesh.vertex_count(),
            indices = mesh.index_count(),
            ?lifecycle,
            "mesh registered"
        );
        Ok(handle)
    }

    /// Upload a mesh as immutable static data
    pub fn load(&mut self, mesh: &MeshBuffer) -> Result<MeshHandle, RegistryError> {
        self.insert(mesh, Lifecycle::Static)
    }

    /// Upload a mesh whose contents will be replaced between draws
    pub fn allocate_dynamic(&mut self, mesh: &MeshBuffer) -> Result<MeshHandle, RegistryError> {
        self.insert(mesh, Lifecycle::Dynamic)
    }

    /// Replace the contents of a dynamic mesh in place
    ///
    /// Counts and named ranges are replaced along with the buffer data;
    /// the handle and backend buffer stay stable.
    pub fn replace(&mut self, handle: MeshHandle, mesh: &MeshBuffer) -> Result<(), RegistryError> {
        let stored = self
            .meshes
            .get_mut(&handle.0)
            .ok_or(RegistryError::NotLoaded(handle.0))?;
        if stored.lifecycle != Lifecycle::Dynamic {
            return Err(RegistryError::NotDynamic(handle.0));
        }
        self.backend
            .update_mesh(stored.buffer, mesh.vertex_data(), &mesh.indices)?;
        stored.topology = mesh.topology;
        stored.vertex_count = mesh.vertex_count() as u32;
        stored.index_count = mesh.index_count() as u32;
        stored.ranges = mesh.ranges.clone();
        debug!(
            handle = handle.0,
            vertices = mesh.vertex_count(),
            indices = mesh.index_count(),
            "mesh replaced"
        );
        Ok(())
    }

    /// Draw the whole mesh
    pub fn draw(&mut self, handle: MeshHandle, fill: FillMode) -> Result<(), RegistryError> {
        let stored = self
            .meshes
            .get(&handle.0)
            .ok_or(RegistryError::NotLoaded(handle.0))?;
        let range = stored.full_range();
        self.backend.draw(stored.buffer, stored.topology, range, fill)?;
        Ok(())
    }

    /// Draw one of the mesh's named sub-ranges
    pub fn draw_range(
        &mut self,
        handle: MeshHandle,
        name: &str,
        fill: FillMode,
    ) -> Result<(), RegistryError> {
        let stored = self
            .meshes
            .get(&handle.0)
            .ok_or(RegistryError::NotLoaded(handle.0))?;
        let range = stored
            .ranges
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| RegistryError::UnknownRange {
                handle: handle.0,
                name: name.to_owned(),
            })?;
        let span = stored.sub_range(range.start, range.count);
        self.backend.draw(stored.buffer, stored.topology, span, fill)?;
        Ok(())
    }

    /// Release one mesh's backend buffer and forget the handle
    pub fn unload(&mut self, handle: MeshHandle) -> Result<(), RegistryError> {
        let stored = self
            .meshes
            .remove(&handle.0)
            .ok_or(RegistryError::NotLoaded(handle.0))?;
        self.backend.destroy_mesh(stored.buffer)?;
        debug!(handle = handle.0, "mesh unloaded");
        Ok(())
    }

    /// Release every mesh; handles become invalid
    pub fn clear(&mut self) -> Result<(), RegistryError> {
        for (_, stored) in self.meshes.drain() {
            self.backend.destroy_mesh(stored.buffer)?;
        }
        Ok(())
    }
}
