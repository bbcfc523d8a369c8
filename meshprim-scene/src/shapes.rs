//! Stock primitive catalog
//!
//! One slot per shape over a [`MeshRegistry`]. Static shapes are
//! generated and uploaded by their `load_*` call; the parameter-driven
//! dynamic shapes (partial cone, tapered torus, spiral, sine cone,
//! superellipsoid) allocate a persistent dynamic mesh on first draw and
//! rebuild its contents whenever they are drawn with new parameters.

use thiserror::Error;

use meshprim_core::primitives::{
    BoxParams, ConeParams, CurvedConeParams, CylinderParams, FinParams, HemisphereParams,
    PartialConeParams, PlaneParams, PrismParams, Pyramid3Params, Pyramid4Params, SineConeParams,
    SphereParams, SpiralParams, SpringParams, SuperellipsoidParams, TaperedCylinderParams,
    TaperedTorusParams, ThickTorusParams, TorusParams, TubeParams, generate_box, generate_cone,
    generate_curved_cone, generate_cylinder, generate_fin, generate_hemisphere,
    generate_partial_cone, generate_plane, generate_prism, generate_pyramid3, generate_pyramid4,
    generate_sine_cone, generate_sphere, generate_spiral, generate_spring,
    generate_superellipsoid, generate_tapered_cylinder, generate_tapered_torus,
    generate_thick_torus, generate_torus, generate_tube,
};

use crate::backend::{FillMode, RenderBackend};
use crate::registry::{MeshHandle, MeshRegistry, RegistryError};

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("shape {0:?} has not been loaded")]
    NotLoaded(&'static str),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Box face selector for single-face draws
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxSide {
    Back,
    Bottom,
    Left,
    Right,
    Top,
    Front,
}

impl BoxSide {
    fn range_name(self) -> &'static str {
        match self {
            BoxSide::Back => "back",
            BoxSide::Bottom => "bottom",
            BoxSide::Left => "left",
            BoxSide::Right => "right",
            BoxSide::Top => "top",
            BoxSide::Front => "front",
        }
    }
}

/// The full shape catalog, one lazily loaded mesh per shape
pub struct ShapeSet<B> {
    registry: MeshRegistry<B>,
    box_mesh: Option<MeshHandle>,
    plane: Option<MeshHandle>,
    prism: Option<MeshHandle>,
    pyramid3: Option<MeshHandle>,
    pyramid4: Option<MeshHandle>,
    cone: Option<MeshHandle>,
    cylinder: Option<MeshHandle>,
    tapered_cylinder: Option<MeshHandle>,
    sphere: Option<MeshHandle>,
    hemisphere: Option<MeshHandle>,
    torus: Option<MeshHandle>,
    thick_torus: Option<MeshHandle>,
    spring: Option<MeshHandle>,
    tube: Option<MeshHandle>,
    fin: Option<MeshHandle>,
    curved_cone: Option<MeshHandle>,
    partial_cone: Option<MeshHandle>,
    tapered_torus: Option<MeshHandle>,
    spiral: Option<MeshHandle>,
    sine_cone: Option<MeshHandle>,
    superellipsoid: Option<MeshHandle>,
}

impl<B: RenderBackend> ShapeSet<B> {
    pub fn new(registry: MeshRegistry<B>) -> Self {
        Self {
            registry,
            box_mesh: None,
            plane: None,
            prism: None,
            pyramid3: None,
            pyramid4: None,
            cone: None,
            cylinder: None,
            tapered_cylinder: None,
            sphere: None,
            hemisphere: None,
            torus: None,
            thick_torus: None,
            spring: None,
            tube: None,
            fin: None,
            curved_cone: None,
            partial_cone: None,
            tapered_torus: None,
            spiral: None,
            sine_cone: None,
            superellipsoid: None,
        }
    }

    pub fn registry(&self) -> &MeshRegistry<B> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut MeshRegistry<B> {
        &mut self.registry
    }

    /// Load every static shape with its stock parameters
    pub fn load_defaults(&mut self) -> Result<(), ShapeError> {
        self.load_box(BoxParams::default())?;
        self.load_plane(PlaneParams::default())?;
        self.load_prism(PrismParams::default())?;
        self.load_pyramid3(Pyramid3Params::default())?;
        self.load_pyramid4(Pyramid4Params::default())?;
        self.load_cone(ConeParams::default())?;
        self.load_cylinder(CylinderParams::default())?;
        self.load_tapered_cylinder(TaperedCylinderParams::default())?;
        self.load_sphere(SphereParams::default())?;
        self.load_hemisphere(HemisphereParams::default())?;
        self.load_torus(TorusParams::default())?;
        self.load_thick_torus(ThickTorusParams::default())?;
        self.load_spring(SpringParams::default())?;
        self.load_tube(TubeParams::default())?;
        self.load_fin(FinParams::default())?;
        self.load_curved_cone(CurvedConeParams::default())?;
        Ok(())
    }

    /// Release every shape and its backend buffers
    pub fn unload_all(&mut self) -> Result<(), ShapeError> {
        self.registry.clear()?;
        self.box_mesh = None;
        self.plane = None;
        self.prism = None;
        self.pyramid3 = None;
        self.pyramid4 = None;
        self.cone = None;
        self.cylinder = None;
        self.tapered_cylinder = None;
        self.sphere = None;
        self.hemisphere = None;
        self.torus = None;
        self.thick_torus = None;
        self.spring = None;
        self.tube = None;
        self.fin = None;
        self.curved_cone = None;
        self.partial_cone = None;
        self.tapered_torus = None;
        self.spiral = None;
        self.sine_cone = None;
        self.superellipsoid = None;
        Ok(())
    }

    fn require(slot: Option<MeshHandle>, name: &'static str) -> Result<MeshHandle, ShapeError> {
        slot.ok_or(ShapeError::NotLoaded(name))
    }

    // --- static shapes -------------------------------------------------

    pub fn load_box(&mut self, params: BoxParams) -> Result<MeshHandle, ShapeError> {
        let handle = self.registry.load(&generate_box(params))?;
        self.box_mesh = Some(handle);
        Ok(handle)
    }

    pub fn draw_box(&mut self, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.box_mesh, "box")?;
        Ok(self.registry.draw(handle, fill)?)
    }

    /// Draw one face of the box
    pub fn draw_box_side(&mut self, side: BoxSide, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.box_mesh, "box")?;
        Ok(self.registry.draw_range(handle, side.range_name(), fill)?)
    }

    pub fn load_plane(&mut self, params: PlaneParams) -> Result<MeshHandle, ShapeError> {
        let handle = self.registry.load(&generate_plane(params))?;
        self.plane = Some(handle);
        Ok(handle)
    }

    pub fn draw_plane(&mut self, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.plane, "plane")?;
        Ok(self.registry.draw(handle, fill)?)
    }

    pub fn load_prism(&mut self, params: PrismParams) -> Result<MeshHandle, ShapeError> {
        let handle = self.registry.load(&generate_prism(params))?;
        self.prism = Some(handle);
        Ok(handle)
    }

    pub fn draw_prism(&mut self, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.prism, "prism")?;
        Ok(self.registry.draw(handle, fill)?)
    }

    pub fn load_pyramid3(&mut self, params: Pyramid3Params) -> Result<MeshHandle, ShapeError> {
        let handle = self.registry.load(&generate_pyramid3(params))?;
        self.pyramid3 = Some(handle);
        Ok(handle)
    }

    pub fn draw_pyramid3(&mut self, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.pyramid3, "pyramid3")?;
        Ok(self.registry.draw(handle, fill)?)
    }

    pub fn load_pyramid4(&mut self, params: Pyramid4Params) -> Result<MeshHandle, ShapeError> {
        let handle = self.registry.load(&generate_pyramid4(params))?;
        self.pyramid4 = Some(handle);
        Ok(handle)
    }

    pub fn draw_pyramid4(&mut self, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.pyramid4, "pyramid4")?;
        Ok(self.registry.draw(handle, fill)?)
    }

    pub fn load_cone(&mut self, params: ConeParams) -> Result<MeshHandle, ShapeError> {
        let handle = self.registry.load(&generate_cone(params))?;
        self.cone = Some(handle);
        Ok(handle)
    }

    /// Draw the cone, optionally skipping the bottom cap
    pub fn draw_cone(&mut self, draw_bottom: bool, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.cone, "cone")?;
        if draw_bottom {
            self.registry.draw(handle, fill)?;
        } else {
            self.registry.draw_range(handle, "sides", fill)?;
        }
        Ok(())
    }

    pub fn load_cylinder(&mut self, params: CylinderParams) -> Result<MeshHandle, ShapeError> {
        let handle = self.registry.load(&generate_cylinder(params))?;
        self.cylinder = Some(handle);
        Ok(handle)
    }

    /// Draw any combination of the cylinder's caps and side wall
    pub fn draw_cylinder(
        &mut self,
        top: bool,
        bottom: bool,
        sides: bool,
        fill: FillMode,
    ) -> Result<(), ShapeError> {
        let handle = Self::require(self.cylinder, "cylinder")?;
        draw_capped_wall(&mut self.registry, handle, top, bottom, sides, fill)
    }

    pub fn load_tapered_cylinder(
        &mut self,
        params: TaperedCylinderParams,
    ) -> Result<MeshHandle, ShapeError> {
        let handle = self.registry.load(&generate_tapered_cylinder(params))?;
        self.tapered_cylinder = Some(handle);
        Ok(handle)
    }

    pub fn draw_tapered_cylinder(
        &mut self,
        top: bool,
        bottom: bool,
        sides: bool,
        fill: FillMode,
    ) -> Result<(), ShapeError> {
        let handle = Self::require(self.tapered_cylinder, "tapered_cylinder")?;
        draw_capped_wall(&mut self.registry, handle, top, bottom, sides, fill)
    }

    pub fn load_sphere(&mut self, params: SphereParams) -> Result<MeshHandle, ShapeError> {
        let handle = self.registry.load(&generate_sphere(params))?;
        self.sphere = Some(handle);
        Ok(handle)
    }

    pub fn draw_sphere(&mut self, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.sphere, "sphere")?;
        Ok(self.registry.draw(handle, fill)?)
    }

    /// Draw the sphere's upper latitudes only
    pub fn draw_half_sphere(&mut self, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.sphere, "sphere")?;
        Ok(self.registry.draw_range(handle, "half", fill)?)
    }

    pub fn load_hemisphere(&mut self, params: HemisphereParams) -> Result<MeshHandle, ShapeError> {
        let handle = self.registry.load(&generate_hemisphere(params))?;
        self.hemisphere = Some(handle);
        Ok(handle)
    }

    pub fn draw_hemisphere(&mut self, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.hemisphere, "hemisphere")?;
        Ok(self.registry.draw(handle, fill)?)
    }

    pub fn load_torus(&mut self, params: TorusParams) -> Result<MeshHandle, ShapeError> {
        let handle = self.registry.load(&generate_torus(params))?;
        self.torus = Some(handle);
        Ok(handle)
    }

    pub fn draw_torus(&mut self, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.torus, "torus")?;
        Ok(self.registry.draw(handle, fill)?)
    }

    /// Draw half the torus ring
    pub fn draw_half_torus(&mut self, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.torus, "torus")?;
        Ok(self.registry.draw_range(handle, "half", fill)?)
    }

    pub fn load_thick_torus(&mut self, params: ThickTorusParams) -> Result<MeshHandle, ShapeError> {
        let handle = self.registry.load(&generate_thick_torus(params))?;
        self.thick_torus = Some(handle);
        Ok(handle)
    }

    pub fn draw_thick_torus(&mut self, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.thick_torus, "thick_torus")?;
        Ok(self.registry.draw(handle, fill)?)
    }

    pub fn load_spring(&mut self, params: SpringParams) -> Result<MeshHandle, ShapeError> {
        let handle = self.registry.load(&generate_spring(params))?;
        self.spring = Some(handle);
        Ok(handle)
    }

    pub fn draw_spring(&mut self, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.spring, "spring")?;
        Ok(self.registry.draw(handle, fill)?)
    }

    pub fn load_tube(&mut self, params: TubeParams) -> Result<MeshHandle, ShapeError> {
        let handle = self.registry.load(&generate_tube(params))?;
        self.tube = Some(handle);
        Ok(handle)
    }

    pub fn draw_tube(&mut self, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.tube, "tube")?;
        Ok(self.registry.draw(handle, fill)?)
    }

    pub fn load_fin(&mut self, params: FinParams) -> Result<MeshHandle, ShapeError> {
        let handle = self.registry.load(&generate_fin(params))?;
        self.fin = Some(handle);
        Ok(handle)
    }

    pub fn draw_fin(&mut self, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.fin, "fin")?;
        Ok(self.registry.draw(handle, fill)?)
    }

    pub fn draw_fin_front(&mut self, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.fin, "fin")?;
        Ok(self.registry.draw_range(handle, "front", fill)?)
    }

    pub fn draw_fin_back(&mut self, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.fin, "fin")?;
        Ok(self.registry.draw_range(handle, "back", fill)?)
    }

    /// Draw both textured sheets of the fin, skipping the rim
    pub fn draw_fin_faces(&mut self, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.fin, "fin")?;
        self.registry.draw_range(handle, "front", fill)?;
        self.registry.draw_range(handle, "back", fill)?;
        Ok(())
    }

    /// Draw the four untextured rim faces of the fin
    pub fn draw_fin_sides(&mut self, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.fin, "fin")?;
        Ok(self.registry.draw_range(handle, "sides", fill)?)
    }

    pub fn load_curved_cone(&mut self, params: CurvedConeParams) -> Result<MeshHandle, ShapeError> {
        let handle = self.registry.load(&generate_curved_cone(params))?;
        self.curved_cone = Some(handle);
        Ok(handle)
    }

    pub fn draw_curved_cone(&mut self, fill: FillMode) -> Result<(), ShapeError> {
        let handle = Self::require(self.curved_cone, "curved_cone")?;
        Ok(self.registry.draw(handle, fill)?)
    }

    // --- dynamic shapes ------------------------------------------------
    //
    // Each regenerates from the given parameters on every draw, reusing
    // one persistent dynamic mesh per shape.

    pub fn draw_partial_cone(
        &mut self,
        params: PartialConeParams,
        fill: FillMode,
    ) -> Result<(), ShapeError> {
        let mesh = generate_partial_cone(params);
        let handle = upload_dynamic(&mut self.registry, &mut self.partial_cone, &mesh)?;
        Ok(self.registry.draw(handle, fill)?)
    }

    pub fn draw_tapered_torus(
        &mut self,
        params: TaperedTorusParams,
        fill: FillMode,
    ) -> Result<(), ShapeError> {
        let mesh = generate_tapered_torus(params);
        let handle = upload_dynamic(&mut self.registry, &mut self.tapered_torus, &mesh)?;
        Ok(self.registry.draw(handle, fill)?)
    }

    pub fn draw_spiral(&mut self, params: SpiralParams, fill: FillMode) -> Result<(), ShapeError> {
        let mesh = generate_spiral(params);
        let handle = upload_dynamic(&mut self.registry, &mut self.spiral, &mesh)?;
        Ok(self.registry.draw(handle, fill)?)
    }

    pub fn draw_sine_cone(
        &mut self,
        params: SineConeParams,
        fill: FillMode,
    ) -> Result<(), ShapeError> {
        let mesh = generate_sine_cone(params);
        let handle = upload_dynamic(&mut self.registry, &mut self.sine_cone, &mesh)?;
        Ok(self.registry.draw(handle, fill)?)
    }

    pub fn draw_superellipsoid(
        &mut self,
        params: SuperellipsoidParams,
        fill: FillMode,
    ) -> Result<(), ShapeError> {
        let mesh = generate_superellipsoid(params);
        let handle = upload_dynamic(&mut self.registry, &mut self.superellipsoid, &mesh)?;
        Ok(self.registry.draw(handle, fill)?)
    }

    // --- legacy wireframe entry points ---------------------------------

    #[deprecated(note = "use draw_box(FillMode::Wireframe)")]
    pub fn draw_box_lines(&mut self) -> Result<(), ShapeError> {
        self.draw_box(FillMode::Wireframe)
    }

    #[deprecated(note = "use draw_plane(FillMode::Wireframe)")]
    pub fn draw_plane_lines(&mut self) -> Result<(), ShapeError> {
        self.draw_plane(FillMode::Wireframe)
    }

    #[deprecated(note = "use draw_prism(FillMode::Wireframe)")]
    pub fn draw_prism_lines(&mut self) -> Result<(), ShapeError> {
        self.draw_prism(FillMode::Wireframe)
    }

    #[deprecated(note = "use draw_pyramid3(FillMode::Wireframe)")]
    pub fn draw_pyramid3_lines(&mut self) -> Result<(), ShapeError> {
        self.draw_pyramid3(FillMode::Wireframe)
    }

    #[deprecated(note = "use draw_pyramid4(FillMode::Wireframe)")]
    pub fn draw_pyramid4_lines(&mut self) -> Result<(), ShapeError> {
        self.draw_pyramid4(FillMode::Wireframe)
    }

    #[deprecated(note = "use draw_cone(true, FillMode::Wireframe)")]
    pub fn draw_cone_lines(&mut self) -> Result<(), ShapeError> {
        self.draw_cone(true, FillMode::Wireframe)
    }

    #[deprecated(note = "use draw_cylinder(true, true, true, FillMode::Wireframe)")]
    pub fn draw_cylinder_lines(&mut self) -> Result<(), ShapeError> {
        self.draw_cylinder(true, true, true, FillMode::Wireframe)
    }

    #[deprecated(note = "use draw_tapered_cylinder(true, true, true, FillMode::Wireframe)")]
    pub fn draw_tapered_cylinder_lines(&mut self) -> Result<(), ShapeError> {
        self.draw_tapered_cylinder(true, true, true, FillMode::Wireframe)
    }

    #[deprecated(note = "use draw_sphere(FillMode::Wireframe)")]
    pub fn draw_sphere_lines(&mut self) -> Result<(), ShapeError> {
        self.draw_sphere(FillMode::Wireframe)
    }

    #[deprecated(note = "use draw_half_sphere(FillMode::Wireframe)")]
    pub fn draw_half_sphere_lines(&mut self) -> Result<(), ShapeError> {
        self.draw_half_sphere(FillMode::Wireframe)
    }

    #[deprecated(note = "use draw_torus(FillMode::Wireframe)")]
    pub fn draw_torus_lines(&mut self) -> Result<(), ShapeError> {
        self.draw_torus(FillMode::Wireframe)
    }

    #[deprecated(note = "use draw_half_torus(FillMode::Wireframe)")]
    pub fn draw_half_torus_lines(&mut self) -> Result<(), ShapeError> {
        self.draw_half_torus(FillMode::Wireframe)
    }
}

/// Draw any combination of cap and side ranges of a capped wall shape
fn draw_capped_wall<B: RenderBackend>(
    registry: &mut MeshRegistry<B>,
    handle: MeshHandle,
    top: bool,
    bottom: bool,
    sides: bool,
    fill: FillMode,
) -> Result<(), ShapeError> {
    if bottom {
        registry.draw_range(handle, "bottom", fill)?;
    }
    if top {
        registry.draw_range(handle, "top", fill)?;
    }
    if sides {
        registry.draw_range(handle, "sides", fill)?;
    }
    Ok(())
}

/// Allocate-or-replace the persistent dynamic mesh behind `slot`
fn upload_dynamic<B: RenderBackend>(
    registry: &mut MeshRegistry<B>,
    slot: &mut Option<MeshHandle>,
    mesh: &meshprim_core::MeshBuffer,
) -> Result<MeshHandle, ShapeError> {
    match *slot {
        Some(handle) => {
            registry.replace(handle, mesh)?;
            Ok(handle)
        }
        None => {
            let handle = registry.allocate_dynamic(mesh)?;
            *slot = Some(handle);
            Ok(handle)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_backend::{Call, RecordingBackend};
    use meshprim_core::AttributeLayout;

    fn shapes() -> ShapeSet<RecordingBackend> {
        ShapeSet::new(MeshRegistry::new(
            RecordingBackend::default(),
            AttributeLayout::interleaved(),
        ))
    }

    #[test]
    fn test_load_defaults_registers_every_static_shape() {
        let mut set = shapes();
        set.load_defaults().unwrap();
        assert_eq!(set.registry().len(), 16);
    }

    #[test]
    fn test_draw_before_load_is_loud() {
        let mut set = shapes();
        let err = set.draw_sphere(FillMode::Solid).unwrap_err();
        assert!(matches!(err, ShapeError::NotLoaded("sphere")));
    }

    #[test]
    fn test_draw_box_side_uses_the_face_range() {
        let mut set = shapes();
        set.load_box(BoxParams::default()).unwrap();
        set.draw_box_side(BoxSide::Front, FillMode::Solid).unwrap();
        let last = set.registry().backend().calls.last().unwrap();
        assert!(matches!(
            last,
            Call::Draw {
                range: crate::backend::DrawRange::Indexed {
                    first: 30,
                    count: 6
                },
                ..
            }
        ));
    }

    #[test]
    fn test_draw_cone_without_bottom_draws_sides_only() {
        let mut set = shapes();
        set.load_cone(ConeParams::default()).unwrap();
        set.draw_cone(false, FillMode::Solid).unwrap();
        let slices = ConeParams::default().slices;
        let last = set.registry().backend().calls.last().unwrap();
        match last {
            Call::Draw {
                range: crate::backend::DrawRange::Indexed { first, count },
                ..
            } => {
                assert_eq!(*first, slices * 3);
                assert_eq!(*count, slices * 3);
            }
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[test]
    fn test_draw_cylinder_selects_ranges() {
        let mut set = shapes();
        set.load_cylinder(CylinderParams::default()).unwrap();
        let before = set.registry().backend().draws().len();
        set.draw_cylinder(true, false, true, FillMode::Solid).unwrap();
        let after = set.registry().backend().draws().len();
        assert_eq!(after - before, 2);
    }

    #[test]
    fn test_draw_half_sphere_draws_half_the_indices() {
        let mut set = shapes();
        set.load_sphere(SphereParams::default()).unwrap();
        set.draw_sphere(FillMode::Solid).unwrap();
        set.draw_half_sphere(FillMode::Solid).unwrap();
        let draws = set.registry().backend().draws();
        let count_of = |call: &Call| match call {
            Call::Draw {
                range: crate::backend::DrawRange::Indexed { count, .. },
                ..
            } => *count,
            _ => panic!("expected an indexed draw"),
        };
        let full = count_of(draws[draws.len() - 2]);
        let half = count_of(draws[draws.len() - 1]);
        assert_eq!(half * 2, full);
    }

    #[test]
    fn test_dynamic_shape_reuses_its_buffer() {
        let mut set = shapes();
        set.draw_spiral(SpiralParams::default(), FillMode::Solid)
            .unwrap();
        set.draw_spiral(
            SpiralParams {
                loops: 4.0,
                ..Default::default()
            },
            FillMode::Solid,
        )
        .unwrap();
        let calls = &set.registry().backend().calls;
        let creates = calls
            .iter()
            .filter(|c| matches!(c, Call::CreateMesh { .. }))
            .count();
        let updates = calls
            .iter()
            .filter(|c| matches!(c, Call::UpdateMesh { .. }))
            .count();
        assert_eq!(creates, 1);
        assert_eq!(updates, 1);
    }

    #[test]
    fn test_each_dynamic_shape_gets_its_own_buffer() {
        let mut set = shapes();
        set.draw_spiral(SpiralParams::default(), FillMode::Solid)
            .unwrap();
        set.draw_superellipsoid(SuperellipsoidParams::default(), FillMode::Solid)
            .unwrap();
        set.draw_sine_cone(SineConeParams::default(), FillMode::Solid)
            .unwrap();
        set.draw_partial_cone(PartialConeParams::default(), FillMode::Solid)
            .unwrap();
        set.draw_tapered_torus(TaperedTorusParams::default(), FillMode::Solid)
            .unwrap();
        assert_eq!(set.registry().len(), 5);
    }

    #[test]
    fn test_draw_fin_faces_draws_both_sheets() {
        let mut set = shapes();
        set.load_fin(FinParams::default()).unwrap();
        set.draw_fin_faces(FillMode::Solid).unwrap();
        let draws = set.registry().backend().draws();
        assert_eq!(draws.len(), 2);
        let range_of = |call: &Call| match call {
            Call::Draw { range, .. } => *range,
            _ => panic!("expected a draw"),
        };
        assert_eq!(
            range_of(draws[0]),
            crate::backend::DrawRange::Indexed { first: 0, count: 6 }
        );
        assert_eq!(
            range_of(draws[1]),
            crate::backend::DrawRange::Indexed { first: 6, count: 6 }
        );
    }

    #[test]
    fn test_prism_draws_as_a_vertex_strip() {
        let mut set = shapes();
        set.load_prism(PrismParams::default()).unwrap();
        set.draw_prism(FillMode::Solid).unwrap();
        let last = set.registry().backend().calls.last().unwrap();
        assert!(matches!(
            last,
            Call::Draw {
                topology: meshprim_core::Topology::TriangleStrip,
                range: crate::backend::DrawRange::Vertices { first: 0, count: 26 },
                ..
            }
        ));
    }

    #[test]
    #[allow(deprecated)]
    fn test_legacy_lines_wrappers_draw_wireframe() {
        let mut set = shapes();
        set.load_torus(TorusParams::default()).unwrap();
        set.draw_half_torus_lines().unwrap();
        let last = set.registry().backend().calls.last().unwrap();
        assert!(matches!(
            last,
            Call::Draw {
                fill: FillMode::Wireframe,
                ..
            }
        ));
    }

    #[test]
    fn test_unload_all_clears_the_registry() {
        let mut set = shapes();
        set.load_defaults().unwrap();
        set.unload_all().unwrap();
        assert!(set.registry().is_empty());
        let err = set.draw_box(FillMode::Solid).unwrap_err();
        assert!(matches!(err, ShapeError::NotLoaded("box")));
    }
}
