//! Shapes swept along a curve with a propagated cross-section frame

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec3;

use crate::frame::Frame;
use crate::mesh::MeshBuffer;
use crate::topology::{grid, grid_wrapped, stitch};

use super::positive;

/// Helical coil with a circular tube cross-section
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub radius: f32,
    pub tube_radius: f32,
    pub coils: u32,
    pub tube_segments: u32,
    pub length: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            tube_radius: 0.1,
            coils: 6,
            tube_segments: 18,
            length: 4.0,
        }
    }
}

/// Cone whose axis bends along a circular arc
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvedConeParams {
    pub radius: f32,
    pub height: f32,
    pub bend_radius: f32,
    pub slices: u32,
    pub curve_steps: u32,
}

impl Default for CurvedConeParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            height: 1.0,
            bend_radius: 2.0,
            slices: 18,
            curve_steps: 16,
        }
    }
}

/// Flat archimedean spiral tube, capped at the outer end
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralParams {
    pub tube_radius: f32,
    /// 0 keeps the tube round, 1 squashes it flat against the spiral plane
    pub flatten: f32,
    /// radial distance gained per full turn
    pub loop_spacing: f32,
    pub loops: f32,
    pub tube_segments: u32,
    pub spiral_segments: u32,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            tube_radius: 0.25,
            flatten: 0.0,
            loop_spacing: 0.5,
            loops: 3.0,
            tube_segments: 16,
            spiral_segments: 128,
        }
    }
}

/// Generate a spring: a helix around +Z swept with a circular tube
///
/// One helix sample per tube segment per coil; the frame starts against
/// world Z and is transported along the helix so the tube never twists.
pub fn generate_spring(params: SpringParams) -> MeshBuffer {
    let radius = positive(params.radius, "radius", "spring");
    let tube_radius = positive(params.tube_radius, "tube_radius", "spring");
    let length = positive(params.length, "length", "spring");
    let coils = params.coils.max(1);
    let tube_segments = params.tube_segments.clamp(8, 256);

    let samples = coils * tube_segments;
    let height_step = length / samples as f32;
    let main_step = TAU / tube_segments as f32;

    let mut mesh = MeshBuffer::new();
    let mut frame: Option<Frame> = None;
    for i in 0..=samples {
        let main = i as f32 * main_step;
        let (sin_m, cos_m) = main.sin_cos();
        let center = Vec3::new(radius * cos_m, radius * sin_m, i as f32 * height_step);
        let tangent = Vec3::new(-radius * sin_m, radius * cos_m, height_step).normalize();
        let current = match frame {
            None => Frame::from_tangent(tangent, Vec3::Z),
            Some(prev) => prev.transport(tangent),
        };
        frame = Some(current);

        let u_along = i as f32 / samples as f32;
        for j in 0..=tube_segments {
            let tube = j as f32 * TAU / tube_segments as f32;
            let offset = current.offset(tube.cos(), tube.sin());
            mesh.add_vertex(
                center + offset * tube_radius,
                offset,
                (u_along, j as f32 / tube_segments as f32),
            );
        }
    }
    grid(&mut mesh, 0, samples, tube_segments, tube_segments + 1);
    mesh
}

/// Generate a curved cone bent along an arc of `height / bend_radius` radians
///
/// The centerline starts at the origin heading +X and curls toward +Y;
/// the cross-section radius tapers linearly to zero at the tip. Normals
/// are frame-relative radial directions, well defined even at the tip.
pub fn generate_curved_cone(params: CurvedConeParams) -> MeshBuffer {
    let radius = positive(params.radius, "radius", "curved_cone");
    let height = positive(params.height, "height", "curved_cone");
    let bend_radius = positive(params.bend_radius, "bend_radius", "curved_cone");
    let slices = params.slices.clamp(3, 256);
    let curve_steps = params.curve_steps.max(1);

    let bend_angle = height / bend_radius;

    let mut mesh = MeshBuffer::new();
    let mut frame: Option<Frame> = None;
    for step in 0..=curve_steps {
        let t = step as f32 / curve_steps as f32;
        let arc = t * bend_angle;
        let (sin_a, cos_a) = arc.sin_cos();
        let center = Vec3::new(bend_radius * sin_a, bend_radius * (1.0 - cos_a), 0.0);
        let tangent = Vec3::new(cos_a, sin_a, 0.0);
        let current = match frame {
            None => Frame::from_tangent(tangent, Vec3::Y),
            Some(prev) => prev.transport(tangent),
        };
        frame = Some(current);

        let cone_radius = radius * (1.0 - t);
        for slice in 0..=slices {
            let angle = slice as f32 * TAU / slices as f32;
            let direction = current.offset(angle.cos(), angle.sin());
            mesh.add_vertex(
                center + direction * cone_radius,
                direction,
                (slice as f32 / slices as f32, t),
            );
        }
    }
    grid(&mut mesh, 0, curve_steps, slices, slices + 1);
    mesh
}

/// Generate a spiral: tube along a flat spiral, hemisphere cap inward
///
/// The centerline radius grows linearly with angle (`loop_spacing` per
/// turn), starting half a turn out so the innermost ring clears the
/// origin. Rings wrap modularly; the cap is its own ring stack stitched
/// onto the first tube ring.
pub fn generate_spiral(params: SpiralParams) -> MeshBuffer {
    let tube_radius = positive(params.tube_radius, "tube_radius", "spiral");
    let loop_spacing = positive(params.loop_spacing, "loop_spacing", "spiral");
    let loops = if params.loops < 1.0 {
        tracing::warn!("spiral: loops must be >= 1.0, clamping");
        1.0
    } else {
        params.loops
    };
    let flatten = params.flatten.clamp(0.0, 1.0);
    let tube_segments = params.tube_segments.clamp(3, 256);
    let spiral_segments = params.spiral_segments.clamp(8, 1024);

    let total_angle = loops * TAU;
    let spiral_step = total_angle / spiral_segments as f32;
    let start_segment = (PI / spiral_step) as u32;

    // centerline samples, inner end first
    let mut centers = Vec::new();
    for i in start_segment..=spiral_segments {
        let theta = i as f32 * spiral_step;
        if theta > total_angle {
            break;
        }
        let r = loop_spacing * theta / TAU;
        centers.push(Vec3::new(r * theta.cos(), r * theta.sin(), 0.0));
    }
    let ring_count = centers.len();

    let tangent_at = |i: usize| -> Vec3 {
        let t = if i == 0 {
            centers[1] - centers[0]
        } else if i == ring_count - 1 {
            centers[i] - centers[i - 1]
        } else {
            centers[i + 1] - centers[i - 1]
        };
        t.normalize()
    };

    let mut mesh = MeshBuffer::new();
    let mut frame: Option<Frame> = None;
    for (i, center) in centers.iter().enumerate() {
        let tangent = tangent_at(i);
        let current = match frame {
            None => Frame::from_tangent(tangent, Vec3::X),
            Some(prev) => prev.transport(tangent),
        };
        frame = Some(current);

        let v_row = i as f32 / (ring_count - 1) as f32;
        for j in 0..tube_segments {
            let tube = j as f32 * TAU / tube_segments as f32;
            let offset = current.offset(tube.cos() * (1.0 - flatten), tube.sin());
            mesh.add_vertex(
                *center + offset * tube_radius,
                offset.normalize_or(current.normal),
                (j as f32 / tube_segments as f32, v_row),
            );
        }
    }
    grid_wrapped(&mut mesh, 0, ring_count as u32 - 1, tube_segments);

    // hemisphere cap over the inner end, shrinking toward the tip
    let cap_rings = 8u32;
    let cap_center = centers[0];
    let cap_frame = Frame::from_tangent(tangent_at(0), Vec3::X);
    let cap_start = mesh.vertex_count() as u32;
    for i in 1..=cap_rings {
        let theta = i as f32 * FRAC_PI_2 / cap_rings as f32;
        let (ring_radius, depth) = theta.sin_cos();
        for j in 0..tube_segments {
            let tube = j as f32 * TAU / tube_segments as f32;
            let radial = cap_frame.offset(tube.cos() * (1.0 - flatten), tube.sin());
            let offset =
                radial * ring_radius * tube_radius + cap_frame.tangent * depth * tube_radius;
            mesh.add_vertex(
                cap_center - offset,
                (-offset).normalize_or(-cap_frame.tangent),
                (j as f32 / tube_segments as f32, -depth),
            );
        }
    }
    grid_wrapped(&mut mesh, cap_start, cap_rings - 1, tube_segments);
    // widest cap ring meets the first tube ring
    let cap_rim = cap_start + (cap_rings - 1) * tube_segments;
    stitch(&mut mesh, cap_rim, 0, tube_segments);

    mesh
}
