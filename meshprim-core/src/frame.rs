//! Propagated orthonormal frames for curve-swept tubes
//!
//! A naive per-sample frame reconstruction twists the swept cross-section
//! wherever the reference vector swings past the tangent. Instead the
//! first frame is built from a caller-chosen up vector and every later
//! frame is the previous one rotated through the angle between consecutive
//! tangents (parallel transport).

use glam::{Quat, Vec3};

/// Orthonormal basis at one centerline sample
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    pub tangent: Vec3,
    pub normal: Vec3,
    pub binormal: Vec3,
}

impl Frame {
    /// Build the initial frame from a tangent and a reference up vector
    ///
    /// `up` must not be parallel to `tangent`.
    pub fn from_tangent(tangent: Vec3, up: Vec3) -> Self {
        let tangent = tangent.normalize();
        let binormal = tangent.cross(up).normalize();
        let normal = binormal.cross(tangent).normalize();
        Self {
            tangent,
            normal,
            binormal,
        }
    }

    /// Transport this frame onto a new tangent
    ///
    /// Rotates the frame around `old_tangent x new_tangent` by the angle
    /// between the tangents. Near-parallel tangents keep the frame as-is.
    pub fn transport(&self, tangent: Vec3) -> Self {
        let tangent = tangent.normalize();
        let axis = self.tangent.cross(tangent);
        if axis.length_squared() < 1e-12 {
            return Self { tangent, ..*self };
        }
        let angle = self.tangent.dot(tangent).clamp(-1.0, 1.0).acos();
        let rotation = Quat::from_axis_angle(axis.normalize(), angle);
        let normal = (rotation * self.normal).normalize();
        let binormal = tangent.cross(normal).normalize();
        Self {
            tangent,
            normal,
            binormal,
        }
    }

    /// Offset within the cross-section plane: `x` along normal, `y` along binormal
    pub fn offset(&self, x: f32, y: f32) -> Vec3 {
        self.normal * x + self.binormal * y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orthonormal(frame: &Frame) {
        assert!((frame.tangent.length() - 1.0).abs() < 1e-5);
        assert!((frame.normal.length() - 1.0).abs() < 1e-5);
        assert!((frame.binormal.length() - 1.0).abs() < 1e-5);
        assert!(frame.tangent.dot(frame.normal).abs() < 1e-5);
        assert!(frame.tangent.dot(frame.binormal).abs() < 1e-5);
        assert!(frame.normal.dot(frame.binormal).abs() < 1e-5);
    }

    #[test]
    fn test_from_tangent_is_orthonormal() {
        let frame = Frame::from_tangent(Vec3::new(1.0, 0.2, -0.3), Vec3::Y);
        assert_orthonormal(&frame);
    }

    #[test]
    fn test_from_tangent_matches_cross_construction() {
        let frame = Frame::from_tangent(Vec3::X, Vec3::Y);
        assert!((frame.binormal - Vec3::Z).length() < 1e-6);
        assert!((frame.normal - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_transport_straight_line_keeps_frame() {
        let frame = Frame::from_tangent(Vec3::X, Vec3::Y);
        let next = frame.transport(Vec3::X);
        assert!((next.normal - frame.normal).length() < 1e-6);
        assert!((next.binormal - frame.binormal).length() < 1e-6);
    }

    #[test]
    fn test_transport_stays_orthonormal_around_a_bend() {
        let mut frame = Frame::from_tangent(Vec3::X, Vec3::Y);
        // quarter circle in the XZ plane, ten steps
        for step in 1..=10 {
            let theta = step as f32 * std::f32::consts::FRAC_PI_2 / 10.0;
            frame = frame.transport(Vec3::new(theta.cos(), 0.0, theta.sin()));
            assert_orthonormal(&frame);
        }
        // no flip: the normal kept pointing roughly up the whole way
        assert!(frame.normal.dot(Vec3::Y) > 0.9);
    }
}
