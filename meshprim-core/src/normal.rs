//! Normal computation strategies
//!
//! Generators use one of three policies: analytic normals computed inline
//! from the parametric surface, frame-relative normals from [`crate::frame`],
//! or the area-weighted accumulation implemented here for surfaces whose
//! deformation breaks the closed-form normal.

use glam::Vec3;

use crate::mesh::MeshBuffer;

/// Unit normal of a triangle, from the cross product of its edges
///
/// Returns +Y for degenerate (zero-area) triangles.
pub fn triangle_normal(p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    (p1 - p0).cross(p2 - p0).normalize_or(Vec3::Y)
}

/// Per-vertex accumulator of area-weighted face normals
pub struct NormalAccumulator {
    sums: Vec<Vec3>,
}

impl NormalAccumulator {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            sums: vec![Vec3::ZERO; vertex_count],
        }
    }

    /// Accumulate one triangle's face normal into its three corners
    ///
    /// The edge cross product is weighted by its own magnitude (twice the
    /// triangle area), so large faces dominate the average.
    pub fn add_triangle(&mut self, p0: Vec3, p1: Vec3, p2: Vec3, i0: u32, i1: u32, i2: u32) {
        let face = (p1 - p0).cross(p2 - p0);
        let weighted = face * face.length();
        self.sums[i0 as usize] += weighted;
        self.sums[i1 as usize] += weighted;
        self.sums[i2 as usize] += weighted;
    }

    /// Normalized accumulated normal for vertex `i` (+Y if nothing landed)
    pub fn normal(&self, i: u32) -> Vec3 {
        self.sums[i as usize].normalize_or(Vec3::Y)
    }
}

/// Replace a mesh's normals with accumulated area-weighted face normals
///
/// Walks the triangle list that topology emission already built, so the
/// accumulation sees exactly the triangles that will be shaded. Summation
/// is commutative; triangle order does not affect the result.
pub fn accumulate(mesh: &mut MeshBuffer) {
    let mut acc = NormalAccumulator::new(mesh.vertex_count());
    for tri in mesh.indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0], tri[1], tri[2]);
        acc.add_triangle(
            mesh.position(i0),
            mesh.position(i1),
            mesh.position(i2),
            i0,
            i1,
            i2,
        );
    }
    for (i, vertex) in mesh.vertices.iter_mut().enumerate() {
        vertex.normal = acc.normal(i as u32).to_array();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_normal_of_xy_triangle_is_z() {
        let n = triangle_normal(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert!((n - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_triangle_normal_degenerate_falls_back() {
        let n = triangle_normal(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);
        assert_eq!(n, Vec3::Y);
    }

    #[test]
    fn test_accumulate_flat_grid_points_up() {
        let mut mesh = MeshBuffer::new();
        for z in 0..2 {
            for x in 0..3 {
                mesh.add_vertex(
                    Vec3::new(x as f32, 0.0, z as f32),
                    Vec3::ZERO,
                    (0.0, 0.0),
                );
            }
        }
        crate::topology::grid(&mut mesh, 0, 1, 2, 3);
        accumulate(&mut mesh);
        for v in &mesh.vertices {
            let n = Vec3::from_array(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-3);
            assert!(n.y.abs() > 0.999);
        }
    }

    #[test]
    fn test_accumulated_normals_are_unit_length() {
        let mut mesh = MeshBuffer::new();
        // irregular tetrahedron-ish patch
        mesh.add_vertex(Vec3::ZERO, Vec3::ZERO, (0.0, 0.0));
        mesh.add_vertex(Vec3::new(2.0, 0.0, 0.0), Vec3::ZERO, (0.0, 0.0));
        mesh.add_vertex(Vec3::new(0.0, 1.5, 0.7), Vec3::ZERO, (0.0, 0.0));
        mesh.add_vertex(Vec3::new(1.0, 1.0, -1.0), Vec3::ZERO, (0.0, 0.0));
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(1, 3, 2);
        accumulate(&mut mesh);
        for v in &mesh.vertices {
            let len = Vec3::from_array(v.normal).length();
            assert!((len - 1.0).abs() < 1e-3);
        }
    }
}
