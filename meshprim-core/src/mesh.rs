//! Host-side mesh buffer built by the primitive generators

use glam::Vec3;

use crate::vertex::Vertex;

/// Primitive topology a mesh is drawn with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Topology {
    #[default]
    TriangleList,
    TriangleStrip,
    TriangleFan,
}

/// Named sub-range for partial draws (one face, one cap, sides only)
///
/// `start` and `count` address indices for indexed meshes and vertices for
/// non-indexed meshes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshRange {
    pub name: &'static str,
    pub start: u32,
    pub count: u32,
}

/// Generated mesh data: interleaved vertices plus optional u32 indices
///
/// Vertex insertion order defines the vertex index. The index buffer stays
/// empty for shapes drawn as a plain list or strip. Transient host memory:
/// uploaded once for static shapes, rebuilt per draw for the dynamic
/// family.
#[derive(Clone, Debug, Default)]
pub struct MeshBuffer {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub topology: Topology,
    pub ranges: Vec<MeshRange>,
}

impl MeshBuffer {
    /// Create an empty indexed triangle-list mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with an explicit topology
    pub fn with_topology(topology: Topology) -> Self {
        Self {
            topology,
            ..Self::default()
        }
    }

    /// Add a vertex, returning its index
    pub fn add_vertex(&mut self, position: Vec3, normal: Vec3, uv: (f32, f32)) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(Vertex::new(position, normal, uv));
        index
    }

    /// Add a triangle using three vertex indices
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Record a named sub-range over indices (or vertices when non-indexed)
    pub fn push_range(&mut self, name: &'static str, start: u32, count: u32) {
        self.ranges.push(MeshRange { name, start, count });
    }

    /// Look up a named sub-range
    pub fn range(&self, name: &str) -> Option<MeshRange> {
        self.ranges.iter().copied().find(|r| r.name == name)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Flat interleaved view of the vertex data (8 floats per vertex)
    pub fn vertex_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Position of vertex `i` as a vector
    pub fn position(&self, i: u32) -> Vec3 {
        Vec3::from_array(self.vertices[i as usize].position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_returns_sequential_indices() {
        let mut mesh = MeshBuffer::new();
        let a = mesh.add_vertex(Vec3::ZERO, Vec3::Y, (0.0, 0.0));
        let b = mesh.add_vertex(Vec3::X, Vec3::Y, (1.0, 0.0));
        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(mesh.vertex_count(), 2);
    }

    #[test]
    fn test_vertex_data_is_eight_floats_per_vertex() {
        let mut mesh = MeshBuffer::new();
        mesh.add_vertex(Vec3::ZERO, Vec3::Y, (0.0, 0.0));
        mesh.add_vertex(Vec3::X, Vec3::Y, (1.0, 0.0));
        mesh.add_vertex(Vec3::Z, Vec3::Y, (0.0, 1.0));
        assert_eq!(mesh.vertex_data().len(), mesh.vertex_count() * 8);
    }

    #[test]
    fn test_ranges_lookup_by_name() {
        let mut mesh = MeshBuffer::new();
        mesh.push_range("bottom", 0, 9);
        mesh.push_range("sides", 9, 9);
        assert_eq!(mesh.range("sides").unwrap().start, 9);
        assert!(mesh.range("top").is_none());
    }

    #[test]
    fn test_triangle_count() {
        let mut mesh = MeshBuffer::new();
        for _ in 0..3 {
            mesh.add_vertex(Vec3::ZERO, Vec3::Y, (0.0, 0.0));
        }
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(2, 1, 0);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.is_indexed());
    }
}
