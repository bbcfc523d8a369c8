//! Deformed surfaces whose closed-form normals break down
//!
//! The sine cone recovers normals by area-weighted accumulation over the
//! emitted triangles; the superellipsoid keeps the standard implicit
//! gradient, which stays a good approximation after axis scaling.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec3;

use crate::mesh::MeshBuffer;
use crate::normal;
use crate::topology::grid;

use super::positive;

/// Tapered horn along +X with a sine wave ridden along its length
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SineConeParams {
    pub base_radius: f32,
    pub height: f32,
    /// 0 keeps the cross-section round, 1 squashes it flat
    pub flatten: f32,
    pub sine_amplitude: f32,
    pub sine_frequency: f32,
    pub sine_phase: f32,
    pub radial_segments: u32,
    pub height_segments: u32,
}

impl Default for SineConeParams {
    fn default() -> Self {
        Self {
            base_radius: 1.0,
            height: 2.0,
            flatten: 0.0,
            sine_amplitude: 0.1,
            sine_frequency: 3.0,
            sine_phase: 0.0,
            radial_segments: 24,
            height_segments: 32,
        }
    }
}

/// Superellipsoid: sphere generalized with signed-power exponents
///
/// Exponents of 1 give a sphere; smaller exponents square the silhouette
/// off toward a box, larger ones pinch it toward an octahedron.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SuperellipsoidParams {
    pub scale_x: f32,
    pub scale_y: f32,
    pub scale_z: f32,
    pub vertical_exponent: f32,
    pub horizontal_exponent: f32,
    pub u_segments: u32,
    pub v_segments: u32,
}

impl Default for SuperellipsoidParams {
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            scale_z: 1.0,
            vertical_exponent: 1.0,
            horizontal_exponent: 1.0,
            u_segments: 24,
            v_segments: 32,
        }
    }
}

/// Generate a sine cone
///
/// The cross-section radius follows `(1 - t)^0.65` so the tip stays
/// pointed without collapsing early; the whole section is then displaced
/// vertically by the sine term. Normals come from accumulation since the
/// displacement has no tidy closed form.
pub fn generate_sine_cone(params: SineConeParams) -> MeshBuffer {
    let base_radius = positive(params.base_radius, "base_radius", "sine_cone");
    let height = positive(params.height, "height", "sine_cone");
    let flatten = params.flatten.clamp(0.0, 1.0);
    let radial_segments = params.radial_segments.clamp(3, 256);
    let height_segments = params.height_segments.clamp(1, 256);

    let mut mesh = MeshBuffer::new();
    for i in 0..=height_segments {
        let t = i as f32 / height_segments as f32;
        let x = t * height;
        let radius = base_radius * (1.0 - t).powf(0.65);
        let sine_offset =
            params.sine_amplitude * (params.sine_frequency * t * TAU + params.sine_phase).sin();
        for j in 0..=radial_segments {
            let angle = j as f32 * TAU / radial_segments as f32;
            let (sin_a, cos_a) = angle.sin_cos();
            let y = cos_a * radius * (1.0 - flatten) + sine_offset;
            let z = sin_a * radius;
            mesh.add_vertex(
                Vec3::new(x, y, z),
                Vec3::ZERO,
                (j as f32 / radial_segments as f32, t),
            );
        }
    }
    grid(&mut mesh, 0, height_segments, radial_segments, radial_segments + 1);
    normal::accumulate(&mut mesh);
    mesh
}

/// `sign(x) * |x|^exponent`, the superellipse shaping function
fn sign_pow(x: f32, exponent: f32) -> f32 {
    if x == 0.0 {
        0.0
    } else {
        x.signum() * x.abs().powf(exponent)
    }
}

/// Superellipsoid scales and exponents fall back to 0.1, not the usual
/// epsilon: an epsilon-thin sliver or near-zero exponent is useless here,
/// 0.1 keeps the shape visibly solid.
fn positive_or_tenth(value: f32, what: &str) -> f32 {
    if value <= 0.0 {
        tracing::warn!("superellipsoid: {what} must be > 0.0, clamping to 0.1");
        0.1
    } else {
        value
    }
}

/// Generate a superellipsoid
///
/// `u` sweeps pole to pole, `v` sweeps the full equator with a duplicated
/// seam column. The normal is the implicit-surface gradient divided by
/// the axis scales, normalized per vertex.
pub fn generate_superellipsoid(params: SuperellipsoidParams) -> MeshBuffer {
    let scale = Vec3::new(
        positive_or_tenth(params.scale_x, "scale_x"),
        positive_or_tenth(params.scale_y, "scale_y"),
        positive_or_tenth(params.scale_z, "scale_z"),
    );
    let e1 = positive_or_tenth(params.vertical_exponent, "vertical_exponent");
    let e2 = positive_or_tenth(params.horizontal_exponent, "horizontal_exponent");
    let u_segments = params.u_segments.clamp(3, 256);
    let v_segments = params.v_segments.clamp(3, 256);

    let mut mesh = MeshBuffer::new();
    for i in 0..=u_segments {
        // u from -pi/2 at the south pole to +pi/2 at the north
        let u = -FRAC_PI_2 + i as f32 * PI / u_segments as f32;
        let cu = sign_pow(u.cos(), e1);
        let su = sign_pow(u.sin(), e1);
        for j in 0..=v_segments {
            let v = -PI + j as f32 * TAU / v_segments as f32;
            let cv = sign_pow(v.cos(), e2);
            let sv = sign_pow(v.sin(), e2);
            let position = Vec3::new(scale.x * cu * cv, scale.y * cu * sv, scale.z * su);
            let normal =
                Vec3::new(cu * cv / scale.x, cu * sv / scale.y, su / scale.z).normalize_or(Vec3::Z);
            mesh.add_vertex(
                position,
                normal,
                (j as f32 / v_segments as f32, i as f32 / u_segments as f32),
            );
        }
    }
    grid(&mut mesh, 0, u_segments, v_segments, v_segments + 1);
    mesh
}
