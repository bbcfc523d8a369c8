//! Primitive surface generators
//!
//! One pure function per shape family. Each consumes a parameter struct
//! (with defaults matching the classic library values) and produces a
//! [`crate::MeshBuffer`] using the shared topology and normal machinery.
//!
//! Parameter policy across all generators: segment counts below the
//! minimum are clamped up, non-positive radii/scales are clamped to a
//! small epsilon, sweep angles are clamped to [0, 360] degrees. Clamping
//! is silent apart from a `tracing` warning; it never fails.

mod box_plane;
mod cone_cylinder;
mod deformed;
mod pyramid_prism;
mod sphere_torus;
mod swept;

pub use box_plane::{
    BoxParams, FinParams, PlaneParams, generate_box, generate_fin, generate_plane,
};
pub use cone_cylinder::{
    ConeParams, CylinderParams, PartialConeParams, TaperedCylinderParams, TubeParams,
    generate_cone, generate_cylinder, generate_partial_cone, generate_tapered_cylinder,
    generate_tube,
};
pub use deformed::{
    SineConeParams, SuperellipsoidParams, generate_sine_cone, generate_superellipsoid,
};
pub use pyramid_prism::{
    PrismParams, Pyramid3Params, Pyramid4Params, generate_prism, generate_pyramid3,
    generate_pyramid4,
};
pub use sphere_torus::{
    HemisphereParams, SphereParams, TaperedTorusParams, ThickTorusParams, TorusParams,
    generate_hemisphere, generate_sphere, generate_tapered_torus, generate_thick_torus,
    generate_torus,
};
pub use swept::{
    CurvedConeParams, SpiralParams, SpringParams, generate_curved_cone, generate_spiral,
    generate_spring,
};

use tracing::warn;

/// Clamp a radius/scale parameter to a small positive epsilon
pub(crate) fn positive(value: f32, what: &str, generator: &str) -> f32 {
    if value <= 0.0 {
        warn!("{generator}: {what} must be > 0.0, clamping to 0.001");
        0.001
    } else {
        value
    }
}
