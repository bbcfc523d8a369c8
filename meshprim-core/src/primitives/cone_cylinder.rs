//! Revolved wall shapes: cone, partial cone, cylinders, tube

use std::f32::consts::TAU;

use glam::Vec3;

use crate::mesh::MeshBuffer;
use crate::topology::{CapFacing, WallFacing, fan, ring_wall};

use super::positive;

/// Cone with a closed bottom cap, apex on +Y
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConeParams {
    pub radius: f32,
    pub height: f32,
    pub slices: u32,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            height: 1.0,
            slices: 18,
        }
    }
}

/// Open cone shell sweeping an arc centered on -Z..+Z symmetry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartialConeParams {
    pub radius: f32,
    pub height: f32,
    pub slices: u32,
    pub arc_degrees: f32,
}

impl Default for PartialConeParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            height: 1.0,
            slices: 18,
            arc_degrees: 360.0,
        }
    }
}

/// Cylinder with both caps closed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CylinderParams {
    pub radius: f32,
    pub height: f32,
    pub slices: u32,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            height: 1.0,
            slices: 36,
        }
    }
}

/// Cylinder with different top and bottom radii, both caps closed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaperedCylinderParams {
    pub bottom_radius: f32,
    pub top_radius: f32,
    pub height: f32,
    pub slices: u32,
}

impl Default for TaperedCylinderParams {
    fn default() -> Self {
        Self {
            bottom_radius: 1.0,
            top_radius: 0.5,
            height: 1.0,
            slices: 18,
        }
    }
}

/// Hollow cylinder: outer wall, inner wall, flat ring caps
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TubeParams {
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub height: f32,
    pub slices: u32,
}

impl Default for TubeParams {
    fn default() -> Self {
        Self {
            outer_radius: 2.0,
            inner_radius: 1.7,
            height: 1.0,
            slices: 30,
        }
    }
}

/// Generate a cone: fanned bottom cap plus per-slice apex triangles
///
/// The side wall shares one quad-averaged normal per slice pair, so each
/// slice contributes two wall vertices plus the shared apex. Ranges:
/// `bottom` and `sides`, `slices * 3` indices each.
pub fn generate_cone(params: ConeParams) -> MeshBuffer {
    let radius = positive(params.radius, "radius", "cone");
    let height = positive(params.height, "height", "cone");
    let slices = params.slices.clamp(3, 256);
    let step = TAU / slices as f32;

    let mut mesh = MeshBuffer::new();

    let center = mesh.add_vertex(Vec3::ZERO, Vec3::NEG_Y, (0.5, 0.5));
    let rim = center + 1;
    for i in 0..slices {
        let angle = i as f32 * step;
        let (sin, cos) = angle.sin_cos();
        mesh.add_vertex(
            Vec3::new(radius * cos, 0.0, radius * sin),
            Vec3::NEG_Y,
            (0.5 + 0.5 * cos, 0.5 + 0.5 * sin),
        );
    }
    fan(&mut mesh, center, rim, slices, CapFacing::Down);
    mesh.push_range("bottom", 0, slices * 3);

    let sides_start = mesh.index_count() as u32;
    let apex = mesh.add_vertex(Vec3::new(0.0, height, 0.0), Vec3::Y, (0.5, 0.5));
    for i in 0..slices {
        let a0 = i as f32 * step;
        let a1 = (i + 1) as f32 * step;
        let p0 = Vec3::new(radius * a0.cos(), 0.0, radius * a0.sin());
        let p1 = Vec3::new(radius * a1.cos(), 0.0, radius * a1.sin());
        // one normal per slice, lifted halfway up the slant
        let normal = Vec3::new(
            (p0.x + p1.x) * 0.5,
            height * 0.5,
            (p0.z + p1.z) * 0.5,
        )
        .normalize();
        let u0 = i as f32 / slices as f32;
        let u1 = (i + 1) as f32 / slices as f32;
        let v0 = mesh.add_vertex(p0, normal, (u0, 1.0));
        let v1 = mesh.add_vertex(p1, normal, (u1, 1.0));
        mesh.add_triangle(apex, v0, v1);
    }
    mesh.push_range("sides", sides_start, slices * 3);

    mesh
}

/// Generate an open partial cone sweeping `arc_degrees` around +Y
///
/// The arc is centered on the half-angle so the opening faces symmetric
/// directions; arc boundary columns stay unconnected. No caps.
pub fn generate_partial_cone(params: PartialConeParams) -> MeshBuffer {
    let radius = positive(params.radius, "radius", "partial_cone");
    let height = positive(params.height, "height", "partial_cone");
    let slices = params.slices.clamp(3, 256);
    let arc = params.arc_degrees.clamp(0.0, 360.0).to_radians();
    let start = -arc * 0.5;
    let step = arc / slices as f32;

    let mut mesh = MeshBuffer::new();

    let bottom = 0;
    for i in 0..=slices {
        let angle = start + i as f32 * step;
        let (sin, cos) = angle.sin_cos();
        let normal = Vec3::new(cos, radius / height, sin).normalize();
        let u = i as f32 / slices as f32;
        mesh.add_vertex(Vec3::new(radius * cos, 0.0, radius * sin), normal, (u, 1.0));
    }
    let apex_ring = mesh.vertex_count() as u32;
    for i in 0..=slices {
        let angle = start + i as f32 * step;
        let (sin, cos) = angle.sin_cos();
        let normal = Vec3::new(cos, radius / height, sin).normalize();
        let u = i as f32 / slices as f32;
        mesh.add_vertex(Vec3::new(0.0, height, 0.0), normal, (u, 0.0));
    }
    ring_wall(&mut mesh, bottom, apex_ring, slices, WallFacing::Outward);

    mesh
}

/// Generate a cylinder: two fanned caps plus a seam-duplicated side wall
///
/// Ranges: `bottom`, `top` (`slices * 3` each) and `sides`
/// (`slices * 6`).
pub fn generate_cylinder(params: CylinderParams) -> MeshBuffer {
    let radius = positive(params.radius, "radius", "cylinder");
    let height = positive(params.height, "height", "cylinder");
    let slices = params.slices.clamp(3, 256);
    generate_capped_wall(radius, radius, height, slices)
}

/// Generate a tapered cylinder; `top_radius` near zero approaches a cone
pub fn generate_tapered_cylinder(params: TaperedCylinderParams) -> MeshBuffer {
    let bottom_radius = positive(params.bottom_radius, "bottom_radius", "tapered_cylinder");
    let top_radius = positive(params.top_radius, "top_radius", "tapered_cylinder");
    let height = positive(params.height, "height", "tapered_cylinder");
    let slices = params.slices.clamp(3, 256);
    generate_capped_wall(bottom_radius, top_radius, height, slices)
}

/// Shared body for cylinder and tapered cylinder
///
/// Caps use modular fans over `slices` rim vertices; the wall duplicates
/// the seam column so `u` can run 0 to 1. The wall normal tilts with the
/// slope `(bottom - top) / height`.
fn generate_capped_wall(bottom_radius: f32, top_radius: f32, height: f32, slices: u32) -> MeshBuffer {
    let step = TAU / slices as f32;
    let mut mesh = MeshBuffer::new();

    let cap = |mesh: &mut MeshBuffer, radius: f32, y: f32, facing: CapFacing| {
        let normal = match facing {
            CapFacing::Up => Vec3::Y,
            CapFacing::Down => Vec3::NEG_Y,
        };
        let center = mesh.add_vertex(Vec3::new(0.0, y, 0.0), normal, (0.5, 0.5));
        for i in 0..slices {
            let (sin, cos) = (i as f32 * step).sin_cos();
            mesh.add_vertex(
                Vec3::new(radius * cos, y, radius * sin),
                normal,
                (0.5 + 0.5 * cos, 0.5 + 0.5 * sin),
            );
        }
        fan(mesh, center, center + 1, slices, facing);
    };

    cap(&mut mesh, bottom_radius, 0.0, CapFacing::Down);
    mesh.push_range("bottom", 0, slices * 3);
    cap(&mut mesh, top_radius, height, CapFacing::Up);
    mesh.push_range("top", slices * 3, slices * 3);

    let sides_start = mesh.index_count() as u32;
    let slope = (bottom_radius - top_radius) / height;
    let lower = mesh.vertex_count() as u32;
    for (radius, y, v) in [(bottom_radius, 0.0, 1.0), (top_radius, height, 0.0)] {
        for i in 0..=slices {
            let (sin, cos) = (i as f32 * step).sin_cos();
            let normal = Vec3::new(cos, slope, sin).normalize();
            let u = i as f32 / slices as f32;
            mesh.add_vertex(Vec3::new(radius * cos, y, radius * sin), normal, (u, v));
        }
    }
    ring_wall(&mut mesh, lower, lower + slices + 1, slices, WallFacing::Outward);
    mesh.push_range("sides", sides_start, slices * 6);

    mesh
}

/// Generate a tube: concentric walls plus flat ring caps
///
/// Eight vertex rings of `slices + 1` columns each: outer and inner wall
/// pairs with radial normals (the inner wall's inverted), then dedicated
/// cap rings with straight vertical normals.
pub fn generate_tube(params: TubeParams) -> MeshBuffer {
    let outer = positive(params.outer_radius, "outer_radius", "tube");
    let inner = positive(params.inner_radius, "inner_radius", "tube");
    let height = positive(params.height, "height", "tube");
    let slices = params.slices.clamp(3, 256);
    let step = TAU / slices as f32;

    let mut mesh = MeshBuffer::new();
    let columns = slices + 1;

    let ring = |mesh: &mut MeshBuffer, radius: f32, y: f32, v: f32, normal_of: &dyn Fn(f32, f32) -> Vec3| {
        let start = mesh.vertex_count() as u32;
        for i in 0..=slices {
            let (sin, cos) = (i as f32 * step).sin_cos();
            let u = i as f32 / slices as f32;
            mesh.add_vertex(
                Vec3::new(radius * cos, y, radius * sin),
                normal_of(cos, sin),
                (u, v),
            );
        }
        start
    };

    let radial = |cos: f32, sin: f32| Vec3::new(cos, 0.0, sin);
    let inverted = |cos: f32, sin: f32| Vec3::new(-cos, 0.0, -sin);
    let down = |_: f32, _: f32| Vec3::NEG_Y;
    let up = |_: f32, _: f32| Vec3::Y;

    let outer_bottom = ring(&mut mesh, outer, 0.0, 1.0, &radial);
    let outer_top = ring(&mut mesh, outer, height, 0.0, &radial);
    let inner_bottom = ring(&mut mesh, inner, 0.0, 1.0, &inverted);
    let inner_top = ring(&mut mesh, inner, height, 0.0, &inverted);
    let cap_bottom_outer = ring(&mut mesh, outer, 0.0, 1.0, &down);
    let cap_bottom_inner = ring(&mut mesh, inner, 0.0, 0.0, &down);
    let cap_top_outer = ring(&mut mesh, outer, height, 1.0, &up);
    let cap_top_inner = ring(&mut mesh, inner, height, 0.0, &up);

    ring_wall(&mut mesh, outer_bottom, outer_top, slices, WallFacing::Outward);
    ring_wall(&mut mesh, inner_bottom, inner_top, slices, WallFacing::Inward);
    // bottom cap faces down, top cap faces up
    ring_wall(&mut mesh, cap_bottom_outer, cap_bottom_inner, slices, WallFacing::Outward);
    ring_wall(&mut mesh, cap_top_inner, cap_top_outer, slices, WallFacing::Inward);

    debug_assert_eq!(mesh.vertex_count() as u32, columns * 8);
    mesh
}
