//! Interleaved vertex record and attribute layout description

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Floats per interleaved vertex (3 position + 3 normal + 2 uv)
pub const VERTEX_FLOATS: usize = 8;

/// Vertex with position, normal, and UV coordinates
///
/// `#[repr(C)]` with no padding, so a `&[Vertex]` casts directly to the
/// flat `&[f32]` layout the render backend consumes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: Vec3, normal: Vec3, uv: (f32, f32)) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: [uv.0, uv.1],
        }
    }
}

/// Description of the shared interleaved attribute layout
///
/// Passed by value to the registry at construction and bound exactly once
/// per render context. Offsets and stride are in floats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeLayout {
    pub stride: u32,
    pub position_offset: u32,
    pub normal_offset: u32,
    pub uv_offset: u32,
}

impl AttributeLayout {
    /// The position/normal/uv layout every generator emits
    pub const fn interleaved() -> Self {
        Self {
            stride: VERTEX_FLOATS as u32,
            position_offset: 0,
            normal_offset: 3,
            uv_offset: 6,
        }
    }
}

impl Default for AttributeLayout {
    fn default() -> Self {
        Self::interleaved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_eight_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), VERTEX_FLOATS * 4);
    }

    #[test]
    fn test_layout_offsets() {
        let layout = AttributeLayout::default();
        assert_eq!(layout.stride, 8);
        assert_eq!(layout.position_offset, 0);
        assert_eq!(layout.normal_offset, 3);
        assert_eq!(layout.uv_offset, 6);
    }

    #[test]
    fn test_vertex_casts_to_interleaved_floats() {
        let v = Vertex::new(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.0, 1.0, 0.0),
            (0.25, 0.75),
        );
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.0, 1.0, 0.0, 0.25, 0.75]);
    }
}
