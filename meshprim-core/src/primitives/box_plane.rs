//! Flat-faced primitives: box, ground plane, fin

use glam::Vec3;

use crate::mesh::MeshBuffer;

use super::positive;

/// Axis-aligned box centered on the origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxParams {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Default for BoxParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        }
    }
}

/// Flat rectangle in the XZ plane facing +Y
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneParams {
    pub width: f32,
    pub depth: f32,
}

impl Default for PlaneParams {
    fn default() -> Self {
        Self {
            width: 2.0,
            depth: 2.0,
        }
    }
}

/// Thin trapezoidal slab, base edge on the X axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinParams {
    pub base_length: f32,
    pub top_length: f32,
    pub height: f32,
    pub thickness: f32,
}

impl Default for FinParams {
    fn default() -> Self {
        Self {
            base_length: 2.9,
            top_length: 0.75,
            height: 2.5,
            thickness: 0.1,
        }
    }
}

/// Generate a box: 24 vertices (4 per face, flat normals), 36 indices
///
/// Faces land in the order back, bottom, left, right, top, front, each
/// covered by a named range of 6 indices for single-face draws.
pub fn generate_box(params: BoxParams) -> MeshBuffer {
    let hx = positive(params.width, "width", "box") * 0.5;
    let hy = positive(params.height, "height", "box") * 0.5;
    let hz = positive(params.depth, "depth", "box") * 0.5;

    let mut mesh = MeshBuffer::new();

    // corners run uv (0,1) -> (0,0) -> (1,0) -> (1,1)
    let mut face = |name, normal: Vec3, corners: [Vec3; 4]| {
        let start = mesh.index_count() as u32;
        let uvs = [(0.0, 1.0), (0.0, 0.0), (1.0, 0.0), (1.0, 1.0)];
        let mut idx = [0u32; 4];
        for (slot, (corner, uv)) in corners.iter().zip(uvs).enumerate() {
            idx[slot] = mesh.add_vertex(*corner, normal, uv);
        }
        mesh.add_triangle(idx[0], idx[1], idx[2]);
        mesh.add_triangle(idx[2], idx[3], idx[0]);
        mesh.push_range(name, start, 6);
    };

    face(
        "back",
        Vec3::NEG_Z,
        [
            Vec3::new(hx, hy, -hz),
            Vec3::new(hx, -hy, -hz),
            Vec3::new(-hx, -hy, -hz),
            Vec3::new(-hx, hy, -hz),
        ],
    );
    face(
        "bottom",
        Vec3::NEG_Y,
        [
            Vec3::new(-hx, -hy, hz),
            Vec3::new(-hx, -hy, -hz),
            Vec3::new(hx, -hy, -hz),
            Vec3::new(hx, -hy, hz),
        ],
    );
    face(
        "left",
        Vec3::NEG_X,
        [
            Vec3::new(-hx, hy, -hz),
            Vec3::new(-hx, -hy, -hz),
            Vec3::new(-hx, -hy, hz),
            Vec3::new(-hx, hy, hz),
        ],
    );
    face(
        "right",
        Vec3::X,
        [
            Vec3::new(hx, hy, hz),
            Vec3::new(hx, -hy, hz),
            Vec3::new(hx, -hy, -hz),
            Vec3::new(hx, hy, -hz),
        ],
    );
    face(
        "top",
        Vec3::Y,
        [
            Vec3::new(-hx, hy, -hz),
            Vec3::new(-hx, hy, hz),
            Vec3::new(hx, hy, hz),
            Vec3::new(hx, hy, -hz),
        ],
    );
    face(
        "front",
        Vec3::Z,
        [
            Vec3::new(-hx, hy, hz),
            Vec3::new(-hx, -hy, hz),
            Vec3::new(hx, -hy, hz),
            Vec3::new(hx, hy, hz),
        ],
    );

    mesh
}

/// Generate a single-quad ground plane (4 vertices, 6 indices)
pub fn generate_plane(params: PlaneParams) -> MeshBuffer {
    let hw = positive(params.width, "width", "plane") * 0.5;
    let hd = positive(params.depth, "depth", "plane") * 0.5;

    let mut mesh = MeshBuffer::new();
    let a = mesh.add_vertex(Vec3::new(-hw, 0.0, hd), Vec3::Y, (0.0, 0.0));
    let b = mesh.add_vertex(Vec3::new(hw, 0.0, hd), Vec3::Y, (1.0, 0.0));
    let c = mesh.add_vertex(Vec3::new(hw, 0.0, -hd), Vec3::Y, (1.0, 1.0));
    let d = mesh.add_vertex(Vec3::new(-hw, 0.0, -hd), Vec3::Y, (0.0, 1.0));
    mesh.add_triangle(a, b, c);
    mesh.add_triangle(a, c, d);
    mesh
}

/// Generate a fin: trapezoid in the XY plane extruded along Z
///
/// 24 vertices, 36 indices. Ranges cover the textured broad faces
/// (`front` and `back`, 6 indices each) and the four thin untextured
/// edge faces together (`sides`, 24 indices), since callers texture the
/// broad faces independently of the rim.
pub fn generate_fin(params: FinParams) -> MeshBuffer {
    let base = positive(params.base_length, "base_length", "fin");
    let top = positive(params.top_length, "top_length", "fin");
    let height = positive(params.height, "height", "fin");
    let ht = positive(params.thickness, "thickness", "fin") * 0.5;

    // trapezoid corners, front sheet at -z and back sheet at +z
    let p = [
        Vec3::new(0.0, 0.0, -ht),     // 0 front bottom-left
        Vec3::new(base, 0.0, -ht),    // 1 front bottom-right
        Vec3::new(0.0, height, -ht),  // 2 front top-left
        Vec3::new(top, height, -ht),  // 3 front top-right
        Vec3::new(0.0, 0.0, ht),      // 4 back bottom-left
        Vec3::new(base, 0.0, ht),     // 5 back bottom-right
        Vec3::new(0.0, height, ht),   // 6 back top-left
        Vec3::new(top, height, ht),   // 7 back top-right
    ];

    let mut mesh = MeshBuffer::new();

    // front sheet, vertices 0..4
    for (corner, uv) in [(0, (0.0, 0.0)), (1, (1.0, 0.0)), (2, (0.0, 1.0)), (3, (1.0, 1.0))] {
        mesh.add_vertex(p[corner], Vec3::NEG_Z, uv);
    }
    // back sheet, vertices 4..8
    for (corner, uv) in [(4, (0.0, 0.0)), (5, (1.0, 0.0)), (6, (0.0, 1.0)), (7, (1.0, 1.0))] {
        mesh.add_vertex(p[corner], Vec3::Z, uv);
    }
    // rim faces are untextured, uv pinned at the origin
    for (corner, normal) in [
        (2, Vec3::Y), (3, Vec3::Y), (6, Vec3::Y), (7, Vec3::Y), // 8..12 top
        (0, Vec3::NEG_Y), (1, Vec3::NEG_Y), (4, Vec3::NEG_Y), (5, Vec3::NEG_Y), // 12..16 bottom
        (0, Vec3::NEG_X), (2, Vec3::NEG_X), (4, Vec3::NEG_X), (6, Vec3::NEG_X), // 16..20 left
        (1, Vec3::X), (3, Vec3::X), (5, Vec3::X), (7, Vec3::X), // 20..24 right
    ] {
        mesh.add_vertex(p[corner], normal, (0.0, 0.0));
    }

    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    mesh.push_range("front", 0, 6);

    mesh.add_triangle(4, 6, 5);
    mesh.add_triangle(5, 6, 7);
    mesh.push_range("back", 6, 6);

    mesh.add_triangle(8, 9, 10);
    mesh.add_triangle(9, 11, 10);
    mesh.add_triangle(12, 14, 13);
    mesh.add_triangle(14, 15, 13);
    mesh.add_triangle(16, 18, 17);
    mesh.add_triangle(17, 18, 19);
    mesh.add_triangle(20, 21, 22);
    mesh.add_triangle(21, 23, 22);
    mesh.push_range("sides", 12, 24);

    mesh
}
