//! Small non-indexed solids: triangular prism and pyramids
//!
//! These shapes carry so few vertices that index reuse buys nothing; the
//! prism is a single degenerate-bridged triangle strip, the pyramids are
//! plain vertex lists with flat per-face normals.

use glam::Vec3;

use crate::mesh::{MeshBuffer, Topology};
use crate::normal::triangle_normal;

use super::positive;

/// Triangular prism: triangle cross-section in XZ, extruded along Y
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrismParams {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Default for PrismParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        }
    }
}

/// Three-sided pyramid over a triangular base
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pyramid3Params {
    pub base_size: f32,
    pub height: f32,
}

impl Default for Pyramid3Params {
    fn default() -> Self {
        Self {
            base_size: 1.0,
            height: 1.0,
        }
    }
}

/// Four-sided pyramid over a square base
///
/// Keeps the classic proportions: the base plane sits at `-base_size / 2`
/// while the apex sits at `height / 2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pyramid4Params {
    pub base_size: f32,
    pub height: f32,
}

impl Default for Pyramid4Params {
    fn default() -> Self {
        Self {
            base_size: 1.0,
            height: 1.0,
        }
    }
}

/// Generate a triangular prism as one non-indexed triangle strip
///
/// Faces are emitted back, bottom, left, right, top, joined by repeated
/// vertices so the bridging triangles are degenerate (zero area).
pub fn generate_prism(params: PrismParams) -> MeshBuffer {
    let hw = positive(params.width, "width", "prism") * 0.5;
    let hy = positive(params.height, "height", "prism") * 0.5;
    let hd = positive(params.depth, "depth", "prism") * 0.5;

    // cross-section corners: a and b on the flat back edge, c at the nose
    let a = |y: f32| Vec3::new(-hw, y, -hd);
    let b = |y: f32| Vec3::new(hw, y, -hd);
    let c = |y: f32| Vec3::new(0.0, y, hd);

    let left_normal = Vec3::new(-2.0 * hd, 0.0, hw).normalize();
    let right_normal = Vec3::new(2.0 * hd, 0.0, hw).normalize();

    let faces: [(Vec3, Vec<(Vec3, (f32, f32))>); 5] = [
        (
            Vec3::NEG_Z,
            vec![
                (b(hy), (0.0, 1.0)),
                (b(-hy), (0.0, 0.0)),
                (a(hy), (1.0, 1.0)),
                (a(-hy), (1.0, 0.0)),
            ],
        ),
        (
            Vec3::NEG_Y,
            vec![
                (b(-hy), (0.0, 0.0)),
                (a(-hy), (1.0, 0.0)),
                (c(-hy), (0.5, 1.0)),
            ],
        ),
        (
            left_normal,
            vec![
                (a(hy), (0.0, 1.0)),
                (a(-hy), (0.0, 0.0)),
                (c(hy), (1.0, 1.0)),
                (c(-hy), (1.0, 0.0)),
            ],
        ),
        (
            right_normal,
            vec![
                (c(hy), (0.0, 1.0)),
                (c(-hy), (0.0, 0.0)),
                (b(hy), (1.0, 1.0)),
                (b(-hy), (1.0, 0.0)),
            ],
        ),
        (
            Vec3::Y,
            vec![
                (a(hy), (0.0, 0.0)),
                (b(hy), (1.0, 0.0)),
                (c(hy), (0.5, 1.0)),
            ],
        ),
    ];

    let mut mesh = MeshBuffer::with_topology(Topology::TriangleStrip);
    for (face, (normal, corners)) in faces.iter().enumerate() {
        if face > 0 {
            // degenerate bridge: repeat the previous vertex, then the next
            if let Some(&last) = mesh.vertices.last() {
                mesh.vertices.push(last);
            }
            let (position, uv) = corners[0];
            mesh.add_vertex(position, *normal, uv);
        }
        for &(position, uv) in corners {
            mesh.add_vertex(position, *normal, uv);
        }
    }
    mesh
}

/// Generate a three-sided pyramid (12 vertices, non-indexed triangle list)
pub fn generate_pyramid3(params: Pyramid3Params) -> MeshBuffer {
    let hb = positive(params.base_size, "base_size", "pyramid3") * 0.5;
    let h2 = positive(params.height, "height", "pyramid3") * 0.5;

    let apex = Vec3::new(0.0, h2, 0.0);
    let front_left = Vec3::new(-hb, -h2, hb);
    let front_right = Vec3::new(hb, -h2, hb);
    let back = Vec3::new(0.0, -h2, -hb);

    let mut mesh = MeshBuffer::with_topology(Topology::TriangleList);
    let mut side = |bottom_left: Vec3, bottom_right: Vec3| {
        let normal = triangle_normal(apex, bottom_left, bottom_right);
        mesh.add_vertex(apex, normal, (0.5, 1.0));
        mesh.add_vertex(bottom_left, normal, (0.0, 0.0));
        mesh.add_vertex(bottom_right, normal, (1.0, 0.0));
    };
    side(front_left, front_right);
    side(back, front_left);
    side(front_right, back);

    mesh.add_vertex(front_left, Vec3::NEG_Y, (0.0, 1.0));
    mesh.add_vertex(back, Vec3::NEG_Y, (0.5, 0.0));
    mesh.add_vertex(front_right, Vec3::NEG_Y, (1.0, 1.0));
    mesh
}

/// Generate a four-sided pyramid (18 vertices, non-indexed triangle list)
pub fn generate_pyramid4(params: Pyramid4Params) -> MeshBuffer {
    let hb = positive(params.base_size, "base_size", "pyramid4") * 0.5;
    let apex_y = positive(params.height, "height", "pyramid4") * 0.5;

    let apex = Vec3::new(0.0, apex_y, 0.0);
    let front_left = Vec3::new(-hb, -hb, hb);
    let front_right = Vec3::new(hb, -hb, hb);
    let back_right = Vec3::new(hb, -hb, -hb);
    let back_left = Vec3::new(-hb, -hb, -hb);

    let mut mesh = MeshBuffer::with_topology(Topology::TriangleList);

    // base, two downward triangles
    mesh.add_vertex(front_left, Vec3::NEG_Y, (0.0, 0.0));
    mesh.add_vertex(back_left, Vec3::NEG_Y, (0.0, 1.0));
    mesh.add_vertex(back_right, Vec3::NEG_Y, (1.0, 1.0));
    mesh.add_vertex(front_left, Vec3::NEG_Y, (0.0, 0.0));
    mesh.add_vertex(back_right, Vec3::NEG_Y, (1.0, 1.0));
    mesh.add_vertex(front_right, Vec3::NEG_Y, (1.0, 0.0));

    let mut side = |bottom_left: Vec3, bottom_right: Vec3| {
        let normal = triangle_normal(apex, bottom_left, bottom_right);
        mesh.add_vertex(apex, normal, (0.5, 1.0));
        mesh.add_vertex(bottom_left, normal, (0.0, 0.0));
        mesh.add_vertex(bottom_right, normal, (1.0, 0.0));
    };
    side(back_left, front_left); // left
    side(back_right, back_left); // back
    side(front_right, back_right); // right
    side(front_left, front_right); // front

    mesh
}
