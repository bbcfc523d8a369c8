//! Lat/lon and toroidal grid shapes

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::mesh::{MeshBuffer, Topology};
use crate::topology::grid;

use super::positive;

/// UV sphere over a latitude/longitude grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereParams {
    pub radius: f32,
    pub lat_segments: u32,
    pub lon_segments: u32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            lat_segments: 18,
            lon_segments: 18,
        }
    }
}

/// Upper half of the UV sphere, open at the equator
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HemisphereParams {
    pub radius: f32,
    pub lat_segments: u32,
    pub lon_segments: u32,
}

impl Default for HemisphereParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            lat_segments: 18,
            lon_segments: 18,
        }
    }
}

/// Torus in the XY plane with analytic tube normals
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TorusParams {
    pub major_radius: f32,
    pub tube_radius: f32,
    pub major_segments: u32,
    pub tube_segments: u32,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            major_radius: 1.0,
            tube_radius: 0.25,
            major_segments: 18,
            tube_segments: 18,
        }
    }
}

/// Fat-tubed torus emitted as a non-indexed triangle list
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThickTorusParams {
    pub major_radius: f32,
    pub tube_radius: f32,
    pub major_segments: u32,
    pub tube_segments: u32,
}

impl Default for ThickTorusParams {
    fn default() -> Self {
        Self {
            major_radius: 1.0,
            tube_radius: 0.1,
            major_segments: 30,
            tube_segments: 30,
        }
    }
}

/// Torus whose tube radius interpolates along a partial sweep
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaperedTorusParams {
    pub major_radius: f32,
    pub tube_start_radius: f32,
    pub tube_end_radius: f32,
    pub major_segments: u32,
    pub tube_segments: u32,
    pub sweep_degrees: f32,
}

impl Default for TaperedTorusParams {
    fn default() -> Self {
        Self {
            major_radius: 1.0,
            tube_start_radius: 0.25,
            tube_end_radius: 0.05,
            major_segments: 36,
            tube_segments: 18,
            sweep_degrees: 360.0,
        }
    }
}

/// Generate a UV sphere
///
/// `(lat_segments + 1) x (lon_segments + 1)` vertices with the seam
/// column duplicated; normals are the unit position. A `half` range
/// covering the first half of the index buffer selects the latitudes
/// from the north pole down to the equator.
pub fn generate_sphere(params: SphereParams) -> MeshBuffer {
    let radius = positive(params.radius, "radius", "sphere");
    let lat_segments = params.lat_segments.clamp(3, 256);
    let lon_segments = params.lon_segments.clamp(3, 256);

    let mut mesh = MeshBuffer::new();
    sphere_rows(&mut mesh, radius, lat_segments, lon_segments, lat_segments, lat_segments);
    grid(&mut mesh, 0, lat_segments, lon_segments, lon_segments + 1);
    mesh.push_range("half", 0, mesh.index_count() as u32 / 2);
    mesh
}

/// Generate the upper hemisphere, sharing the sphere's parameterization
pub fn generate_hemisphere(params: HemisphereParams) -> MeshBuffer {
    let radius = positive(params.radius, "radius", "hemisphere");
    let lat_segments = params.lat_segments.clamp(3, 256);
    let lon_segments = params.lon_segments.clamp(3, 256);
    let hemi_rows = (lat_segments / 2).max(1);

    let mut mesh = MeshBuffer::new();
    // theta still divides by the full sphere's segment count, v by the half
    sphere_rows(&mut mesh, radius, hemi_rows, lon_segments, lat_segments, hemi_rows);
    grid(&mut mesh, 0, hemi_rows, lon_segments, lon_segments + 1);
    mesh
}

/// Emit latitude rows `0..=rows` of a UV sphere
fn sphere_rows(
    mesh: &mut MeshBuffer,
    radius: f32,
    rows: u32,
    lon_segments: u32,
    theta_divisor: u32,
    v_divisor: u32,
) {
    for lat in 0..=rows {
        let theta = lat as f32 * PI / theta_divisor as f32;
        let (sin_t, cos_t) = theta.sin_cos();
        for lon in 0..=lon_segments {
            let phi = lon as f32 * TAU / lon_segments as f32;
            let (sin_p, cos_p) = phi.sin_cos();
            let normal = Vec3::new(sin_t * cos_p, cos_t, sin_t * sin_p);
            let u = 1.0 - lon as f32 / lon_segments as f32;
            let v = 1.0 - lat as f32 / v_divisor as f32;
            mesh.add_vertex(normal * radius, normal, (u, v));
        }
    }
}

/// Generate a torus lying in the XY plane
///
/// The tube normal is the direction from the ring centerline to the
/// vertex. A `half` range covers the first half of the index buffer.
pub fn generate_torus(params: TorusParams) -> MeshBuffer {
    let major_radius = positive(params.major_radius, "major_radius", "torus");
    let tube_radius = positive(params.tube_radius, "tube_radius", "torus");
    let major_segments = params.major_segments.clamp(3, 256);
    let tube_segments = params.tube_segments.clamp(3, 256);

    let mut mesh = MeshBuffer::new();
    for i in 0..=major_segments {
        let main = i as f32 * TAU / major_segments as f32;
        let (sin_m, cos_m) = main.sin_cos();
        let center = Vec3::new(major_radius * cos_m, major_radius * sin_m, 0.0);
        for j in 0..=tube_segments {
            let tube = j as f32 * TAU / tube_segments as f32;
            let (sin_t, cos_t) = tube.sin_cos();
            let position = Vec3::new(
                (major_radius + tube_radius * cos_t) * cos_m,
                (major_radius + tube_radius * cos_t) * sin_m,
                tube_radius * sin_t,
            );
            let normal = (position - center).normalize();
            let u = i as f32 / major_segments as f32;
            let v = j as f32 / tube_segments as f32;
            mesh.add_vertex(position, normal, (u, v));
        }
    }
    grid(&mut mesh, 0, major_segments, tube_segments, tube_segments + 1);
    mesh.push_range("half", 0, mesh.index_count() as u32 / 2);
    mesh
}

/// Generate a thick torus as a non-indexed triangle list
///
/// Rings wrap modularly with no duplicated seam; every grid cell emits
/// its six corner vertices directly.
pub fn generate_thick_torus(params: ThickTorusParams) -> MeshBuffer {
    let major_radius = positive(params.major_radius, "major_radius", "thick_torus");
    let tube_radius = if params.tube_radius > 0.0 && params.tube_radius <= 1.0 {
        params.tube_radius
    } else {
        tracing::warn!("thick_torus: tube_radius must be in (0, 1], using 0.1");
        0.1
    };
    let major_segments = params.major_segments.clamp(3, 256);
    let tube_segments = params.tube_segments.clamp(3, 256);

    let sample = |i: u32, j: u32| {
        let main = (i % major_segments) as f32 * TAU / major_segments as f32;
        let tube = (j % tube_segments) as f32 * TAU / tube_segments as f32;
        let (sin_m, cos_m) = main.sin_cos();
        let (sin_t, cos_t) = tube.sin_cos();
        let center = Vec3::new(major_radius * cos_m, major_radius * sin_m, 0.0);
        let position = Vec3::new(
            (major_radius + tube_radius * cos_t) * cos_m,
            (major_radius + tube_radius * cos_t) * sin_m,
            tube_radius * sin_t,
        );
        let normal = (position - center).normalize();
        let uv = (
            i as f32 / major_segments as f32,
            j as f32 / tube_segments as f32,
        );
        (position, normal, uv)
    };

    let mut mesh = MeshBuffer::with_topology(Topology::TriangleList);
    for i in 0..major_segments {
        for j in 0..tube_segments {
            // two triangles per cell, modular wrap in both directions
            for (ci, cj) in [(i, j), (i + 1, j), (i, j + 1), (i, j + 1), (i + 1, j), (i + 1, j + 1)] {
                let (position, normal, uv) = sample(ci, cj);
                mesh.add_vertex(position, normal, uv);
            }
        }
    }
    mesh
}

/// Generate a tapered torus sweeping `sweep_degrees` of the ring
///
/// The tube radius interpolates linearly from start to end across the
/// sweep; a partial sweep leaves both ends open.
pub fn generate_tapered_torus(params: TaperedTorusParams) -> MeshBuffer {
    let major_radius = positive(params.major_radius, "major_radius", "tapered_torus");
    let start_radius = positive(params.tube_start_radius, "tube_start_radius", "tapered_torus");
    let end_radius = positive(params.tube_end_radius, "tube_end_radius", "tapered_torus");
    let major_segments = params.major_segments.clamp(3, 256);
    let tube_segments = params.tube_segments.clamp(3, 256);
    let sweep = params.sweep_degrees.clamp(0.0, 360.0).to_radians();
    let main_step = sweep / major_segments as f32;

    let mut mesh = MeshBuffer::new();
    for i in 0..=major_segments {
        let t = i as f32 / major_segments as f32;
        let tube_radius = start_radius + (end_radius - start_radius) * t;
        let main = i as f32 * main_step;
        let (sin_m, cos_m) = main.sin_cos();
        let center = Vec3::new(major_radius * cos_m, major_radius * sin_m, 0.0);
        for j in 0..=tube_segments {
            let tube = j as f32 * TAU / tube_segments as f32;
            let (sin_t, cos_t) = tube.sin_cos();
            let normal = Vec3::new(cos_t * cos_m, cos_t * sin_m, sin_t);
            let u = j as f32 / tube_segments as f32;
            mesh.add_vertex(center + normal * tube_radius, normal, (u, t));
        }
    }
    grid(&mut mesh, 0, major_segments, tube_segments, tube_segments + 1);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unit_normals(mesh: &MeshBuffer) {
        for v in &mesh.vertices {
            let len = Vec3::from_array(v.normal).length();
            assert!((len - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_sphere_counts() {
        let params = SphereParams::default();
        let mesh = generate_sphere(params);
        let expected = (params.lat_segments + 1) * (params.lon_segments + 1);
        assert_eq!(mesh.vertex_count() as u32, expected);
        assert_eq!(
            mesh.index_count() as u32,
            params.lat_segments * params.lon_segments * 6
        );
        assert_unit_normals(&mesh);
    }

    #[test]
    fn test_sphere_vertices_lie_on_the_radius() {
        let mesh = generate_sphere(SphereParams {
            radius: 2.0,
            ..Default::default()
        });
        for v in &mesh.vertices {
            let p = Vec3::from_array(v.position);
            assert!((p.length() - 2.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_sphere_seam_u_spans_exactly_one() {
        let mesh = generate_sphere(SphereParams::default());
        let lon = SphereParams::default().lon_segments as usize;
        // same position at both ends of a latitude row, u differs by 1
        let first = mesh.vertices[lon + 1];
        let last = mesh.vertices[2 * lon + 1];
        for axis in 0..3 {
            assert!((first.position[axis] - last.position[axis]).abs() < 1e-4);
        }
        assert_eq!((first.uv[0] - last.uv[0]).abs(), 1.0);
    }

    #[test]
    fn test_sphere_half_range_is_half_the_indices() {
        let mesh = generate_sphere(SphereParams::default());
        let half = mesh.range("half").unwrap();
        assert_eq!(half.start, 0);
        assert_eq!(half.count as usize, mesh.index_count() / 2);
    }

    #[test]
    fn test_hemisphere_stays_above_the_equator() {
        let mesh = generate_hemisphere(HemisphereParams::default());
        for v in &mesh.vertices {
            assert!(v.position[1] >= -1e-4);
        }
        // equator row reaches y = 0
        let min_y = mesh
            .vertices
            .iter()
            .map(|v| v.position[1])
            .fold(f32::MAX, f32::min);
        assert!(min_y.abs() < 1e-4);
    }

    #[test]
    fn test_torus_normals_point_away_from_the_centerline() {
        let params = TorusParams::default();
        let mesh = generate_torus(params);
        assert_unit_normals(&mesh);
        for v in &mesh.vertices {
            let p = Vec3::from_array(v.position);
            let n = Vec3::from_array(v.normal);
            // distance from centerline equals the tube radius along the normal
            let back = p - n * params.tube_radius;
            let ring = (back.x * back.x + back.y * back.y).sqrt();
            assert!((ring - params.major_radius).abs() < 1e-3);
            assert!(back.z.abs() < 1e-3);
        }
    }

    #[test]
    fn test_torus_half_range() {
        let mesh = generate_torus(TorusParams::default());
        let half = mesh.range("half").unwrap();
        assert_eq!(half.count as usize, mesh.index_count() / 2);
    }

    #[test]
    fn test_thick_torus_is_non_indexed() {
        let params = ThickTorusParams::default();
        let mesh = generate_thick_torus(params);
        assert!(!mesh.is_indexed());
        assert_eq!(
            mesh.vertex_count() as u32,
            params.major_segments * params.tube_segments * 6
        );
        assert_unit_normals(&mesh);
    }

    #[test]
    fn test_thick_torus_oversize_tube_radius_falls_back() {
        let fat = generate_thick_torus(ThickTorusParams {
            tube_radius: 5.0,
            ..Default::default()
        });
        let standard = generate_thick_torus(ThickTorusParams::default());
        assert_eq!(fat.vertex_data(), standard.vertex_data());
    }

    #[test]
    fn test_tapered_torus_tube_narrows_across_the_sweep() {
        let params = TaperedTorusParams::default();
        let mesh = generate_tapered_torus(params);
        let columns = (params.tube_segments + 1) as usize;
        let ring_radius = |row: usize| {
            let center_angle =
                row as f32 * 360.0_f32.to_radians() / params.major_segments as f32;
            let center = Vec3::new(center_angle.cos(), center_angle.sin(), 0.0);
            let v = mesh.vertices[row * columns];
            (Vec3::from_array(v.position) - center).length()
        };
        let first = ring_radius(0);
        let last = ring_radius(params.major_segments as usize);
        assert!((first - params.tube_start_radius).abs() < 1e-3);
        assert!((last - params.tube_end_radius).abs() < 1e-3);
    }

    #[test]
    fn test_tapered_torus_partial_sweep_is_open() {
        let mesh = generate_tapered_torus(TaperedTorusParams {
            sweep_degrees: 90.0,
            major_segments: 4,
            tube_segments: 4,
            ..Default::default()
        });
        // end rings exist but the sweep covers only a quarter turn
        let last = Vec3::from_array(mesh.vertices.last().unwrap().position);
        assert!(last.x.abs() < 0.3);
        assert!(last.y > 0.5);
    }
}
