//! End-to-end run of the full shape catalog against a counting backend

use meshprim_core::{AttributeLayout, Topology};
use meshprim_scene::{
    BufferId, DrawRange, FillMode, MeshRegistry, RenderBackend, ShapeSet,
};
use meshprim_scene::shapes::BoxSide;

use meshprim_core::primitives::{
    PartialConeParams, SineConeParams, SpiralParams, SuperellipsoidParams, TaperedTorusParams,
};

/// Backend that validates draw ranges against the buffers it was given
#[derive(Default)]
struct CountingBackend {
    next: u32,
    // per buffer: (vertex count, index count)
    sizes: Vec<(u32, u32)>,
    draw_count: u32,
}

impl RenderBackend for CountingBackend {
    fn bind_layout(&mut self, layout: &AttributeLayout) -> anyhow::Result<()> {
        assert_eq!(layout.stride, 8);
        Ok(())
    }

    fn create_mesh(
        &mut self,
        vertex_data: &[f32],
        indices: &[u32],
        _topology: Topology,
    ) -> anyhow::Result<BufferId> {
        let id = BufferId(self.next);
        self.next += 1;
        self.sizes
            .push((vertex_data.len() as u32 / 8, indices.len() as u32));
        Ok(id)
    }

    fn update_mesh(
        &mut self,
        id: BufferId,
        vertex_data: &[f32],
        indices: &[u32],
    ) -> anyhow::Result<()> {
        self.sizes[id.0 as usize] = (vertex_data.len() as u32 / 8, indices.len() as u32);
        Ok(())
    }

    fn draw(
        &mut self,
        id: BufferId,
        _topology: Topology,
        range: DrawRange,
        _fill: FillMode,
    ) -> anyhow::Result<()> {
        let (vertices, indices) = self.sizes[id.0 as usize];
        match range {
            DrawRange::Indexed { first, count } => assert!(first + count <= indices),
            DrawRange::Vertices { first, count } => assert!(first + count <= vertices),
        }
        self.draw_count += 1;
        Ok(())
    }

    fn destroy_mesh(&mut self, _id: BufferId) -> anyhow::Result<()> {
        Ok(())
    }
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_every_shape_draws_within_its_buffer() {
    init_logging();
    let registry = MeshRegistry::new(CountingBackend::default(), AttributeLayout::interleaved());
    let mut set = ShapeSet::new(registry);
    set.load_defaults().unwrap();

    for fill in [FillMode::Solid, FillMode::Wireframe] {
        set.draw_box(fill).unwrap();
        for side in [
            BoxSide::Back,
            BoxSide::Bottom,
            BoxSide::Left,
            BoxSide::Right,
            BoxSide::Top,
            BoxSide::Front,
        ] {
            set.draw_box_side(side, fill).unwrap();
        }
        set.draw_plane(fill).unwrap();
        set.draw_prism(fill).unwrap();
        set.draw_pyramid3(fill).unwrap();
        set.draw_pyramid4(fill).unwrap();
        set.draw_cone(true, fill).unwrap();
        set.draw_cone(false, fill).unwrap();
        set.draw_cylinder(true, true, true, fill).unwrap();
        set.draw_tapered_cylinder(false, true, true, fill).unwrap();
        set.draw_sphere(fill).unwrap();
        set.draw_half_sphere(fill).unwrap();
        set.draw_hemisphere(fill).unwrap();
        set.draw_torus(fill).unwrap();
        set.draw_half_torus(fill).unwrap();
        set.draw_thick_torus(fill).unwrap();
        set.draw_spring(fill).unwrap();
        set.draw_tube(fill).unwrap();
        set.draw_fin(fill).unwrap();
        set.draw_fin_front(fill).unwrap();
        set.draw_fin_back(fill).unwrap();
        set.draw_fin_faces(fill).unwrap();
        set.draw_fin_sides(fill).unwrap();
        set.draw_curved_cone(fill).unwrap();

        set.draw_partial_cone(PartialConeParams::default(), fill)
            .unwrap();
        set.draw_tapered_torus(TaperedTorusParams::default(), fill)
            .unwrap();
        set.draw_spiral(SpiralParams::default(), fill).unwrap();
        set.draw_sine_cone(SineConeParams::default(), fill).unwrap();
        set.draw_superellipsoid(SuperellipsoidParams::default(), fill)
            .unwrap();
    }

    assert!(set.registry().backend().draw_count > 0);
    set.unload_all().unwrap();
    assert!(set.registry().is_empty());
}

#[test]
fn test_dynamic_parameter_sweep_resizes_in_place() {
    init_logging();
    let registry = MeshRegistry::new(CountingBackend::default(), AttributeLayout::interleaved());
    let mut set = ShapeSet::new(registry);

    for loops in [1.0, 2.0, 3.5, 5.0] {
        set.draw_spiral(
            SpiralParams {
                loops,
                ..Default::default()
            },
            FillMode::Solid,
        )
        .unwrap();
    }
    // one persistent buffer for the spiral, resized by each replace
    assert_eq!(set.registry().len(), 1);
}
