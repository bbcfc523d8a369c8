//! Reusable triangle index topologies
//!
//! Pure index emission over a [`MeshBuffer`]; nothing here is
//! shape-specific. Generators lay vertices out in rings and rows, then
//! pick the connectivity pattern that matches.
//!
//! Wrap-around shapes duplicate the vertex column at the 0/360 degree
//! seam (same position, `u` of 0 vs 1) and use the non-wrapping patterns;
//! the modular variants exist for rings generated without a seam.

use crate::mesh::MeshBuffer;

/// Which way a disk cap faces; flips the fan winding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapFacing {
    Up,
    Down,
}

/// Which way a lateral wall faces; flips the quad winding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallFacing {
    Outward,
    Inward,
}

/// Disk fan: `slices` triangles sharing `center`, sweeping a ring
///
/// The ring starts at `ring_start` and wraps modularly, so closed caps
/// need exactly `slices` rim vertices.
pub fn fan(mesh: &mut MeshBuffer, center: u32, ring_start: u32, slices: u32, facing: CapFacing) {
    for i in 0..slices {
        let curr = ring_start + i;
        let next = ring_start + (i + 1) % slices;
        match facing {
            CapFacing::Up => mesh.add_triangle(center, curr, next),
            CapFacing::Down => mesh.add_triangle(center, next, curr),
        }
    }
}

/// Rectangular grid: two triangles per cell over `rows x cols` cells
///
/// Vertices are row-major starting at `first` with `row_stride` vertices
/// per row (`row_stride >= cols + 1`). Each cell emits
/// `(a, a+stride, a+1)` and `(a+1, a+stride, a+stride+1)`.
pub fn grid(mesh: &mut MeshBuffer, first: u32, rows: u32, cols: u32, row_stride: u32) {
    for r in 0..rows {
        for c in 0..cols {
            let a = first + r * row_stride + c;
            let b = a + row_stride;
            mesh.add_triangle(a, b, a + 1);
            mesh.add_triangle(a + 1, b, b + 1);
        }
    }
}

/// Grid with modular column wrap, for rings without a duplicated seam
///
/// `ring_len` vertices per ring; the last column connects back to the
/// first. Used by the spiral tube and the thick torus.
pub fn grid_wrapped(mesh: &mut MeshBuffer, first: u32, rows: u32, ring_len: u32) {
    for r in 0..rows {
        for c in 0..ring_len {
            let c1 = (c + 1) % ring_len;
            let a = first + r * ring_len + c;
            let b = first + (r + 1) * ring_len + c;
            let a1 = first + r * ring_len + c1;
            let b1 = first + (r + 1) * ring_len + c1;
            mesh.add_triangle(a, b, a1);
            mesh.add_triangle(a1, b, b1);
        }
    }
}

/// Lateral wall between two contiguous same-length rings
///
/// `cols` quads between the rings at `lower` and `upper`; both rings need
/// `cols + 1` vertices (duplicated seam or open edge).
pub fn ring_wall(mesh: &mut MeshBuffer, lower: u32, upper: u32, cols: u32, facing: WallFacing) {
    for c in 0..cols {
        let b = lower + c;
        let t = upper + c;
        match facing {
            WallFacing::Outward => {
                mesh.add_triangle(b, b + 1, t);
                mesh.add_triangle(t, b + 1, t + 1);
            }
            WallFacing::Inward => {
                mesh.add_triangle(b, t, b + 1);
                mesh.add_triangle(t, t + 1, b + 1);
            }
        }
    }
}

/// Seam stitch between two independently generated rings
///
/// Connects ring `a` to ring `b` (both `len` vertices, modular wrap) with
/// the two-triangle-per-quad rule. Used where two substructures must be
/// seamed without sharing vertices, e.g. a hemisphere cap onto a tube.
pub fn stitch(mesh: &mut MeshBuffer, ring_a: u32, ring_b: u32, len: u32) {
    for c in 0..len {
        let c1 = (c + 1) % len;
        let a = ring_a + c;
        let b = ring_b + c;
        let a1 = ring_a + c1;
        let b1 = ring_b + c1;
        mesh.add_triangle(a, b, a1);
        mesh.add_triangle(a1, b, b1);
    }
}
