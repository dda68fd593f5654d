//! Integration tests for weft-sim.

use weft_sim::{
    ConstraintKind, ConstraintSet, ConstraintSolver, FabricConfig, FabricLayer, ForceField,
    GridLayout, InspectionHook, Integrator, MultiLayerCoordinator, Node, NodeGrid,
    PointerHistory, RelaxationReport,
};
use weft_types::{LayerId, NodeId, Vec2, WeftError};

const DT: f32 = 1.0 / 60.0;

fn small_config() -> FabricConfig {
    FabricConfig {
        grid_width: 6,
        grid_height: 5,
        cell_size: 20.0,
        layer_count: 4,
        ..Default::default()
    }
}

fn layout(width: usize, height: usize) -> GridLayout {
    GridLayout {
        width,
        height,
        cell_size: 20.0,
        depth_offset: 0.0,
        pin_top_row: true,
    }
}

/// Pointer inside the sheet, close to the top row.
fn near_pointer() -> Vec2 {
    Vec2::new(50.0, 15.0)
}

// ─── NodeGrid Tests ───────────────────────────────────────────

#[test]
fn grid_lays_out_regular_lattice() {
    let grid = NodeGrid::new(
        GridLayout { depth_offset: 7.5, ..layout(4, 3) },
        LayerId(2),
    )
    .unwrap();

    assert_eq!(grid.len(), 12);
    let node = grid.node_at(3, 2).unwrap();
    assert_eq!(node.position, Vec2::new(60.0, 47.5));
    assert_eq!(node.previous_position, node.position);
    assert_eq!(node.layer, LayerId(2));
    assert!(grid.node_at(4, 0).is_none());
}

#[test]
fn grid_pins_only_top_row() {
    let grid = NodeGrid::new(layout(4, 3), LayerId(0)).unwrap();
    for (i, node) in grid.nodes().iter().enumerate() {
        assert_eq!(node.pinned, i < 4, "node {i}");
    }
}

#[test]
fn grid_rejects_zero_dimensions() {
    let err = NodeGrid::new(layout(0, 3), LayerId(0)).unwrap_err();
    assert!(matches!(err, WeftError::InvalidGrid { width: 0, height: 3 }));
}

#[test]
fn grid_reset_discards_motion() {
    let mut grid = NodeGrid::new(layout(3, 3), LayerId(0)).unwrap();
    let fresh: Vec<Node> = grid.nodes().to_vec();

    grid.nodes_mut()[5].position += Vec2::new(3.0, 4.0);
    grid.set_pinned(NodeId(0), false).unwrap();
    grid.reset();

    assert_eq!(grid.nodes(), fresh.as_slice());
}

#[test]
fn grid_set_pinned_out_of_bounds() {
    let mut grid = NodeGrid::new(layout(2, 2), LayerId(0)).unwrap();
    let err = grid.set_pinned(NodeId(4), true).unwrap_err();
    assert!(matches!(err, WeftError::NodeOutOfBounds { index: 4, count: 4 }));
}

// ─── ConstraintSet Tests ──────────────────────────────────────

#[test]
fn structural_constraint_count() {
    let grid = NodeGrid::new(layout(4, 3), LayerId(0)).unwrap();
    let set = ConstraintSet::structural(&grid);
    // Horizontal: (4-1)*3 = 9, vertical: 4*(3-1) = 8
    assert_eq!(set.len(), 17);
    assert!(set.iter().all(|c| (c.rest_length - 20.0).abs() < 1e-6));
}

#[test]
fn structural_constraints_follow_row_major_order() {
    let grid = NodeGrid::new(layout(3, 2), LayerId(0)).unwrap();
    let set = ConstraintSet::structural(&grid);
    let order: Vec<(u32, u32, ConstraintKind)> =
        set.iter().map(|c| (c.a.0, c.b.0, c.kind)).collect();

    assert_eq!(
        order[..4],
        [
            (0, 1, ConstraintKind::Horizontal),
            (0, 3, ConstraintKind::Vertical),
            (1, 2, ConstraintKind::Horizontal),
            (1, 4, ConstraintKind::Vertical),
        ]
    );
}

#[test]
fn single_node_grid_has_no_constraints() {
    let grid = NodeGrid::new(layout(1, 1), LayerId(0)).unwrap();
    assert!(ConstraintSet::structural(&grid).is_empty());
}

#[test]
fn added_constraint_captures_current_distance() {
    let mut grid = NodeGrid::new(layout(2, 2), LayerId(0)).unwrap();
    grid.nodes_mut()[3].overwrite(Vec2::new(30.0, 40.0));
    let mut set = ConstraintSet::new();
    set.add(&grid, NodeId(0), NodeId(3), ConstraintKind::Vertical).unwrap();

    assert!((set.as_slice()[0].rest_length - 50.0).abs() < 1e-5);
    assert!(set.add(&grid, NodeId(0), NodeId(9), ConstraintKind::Vertical).is_err());
}

#[test]
fn max_strain_of_stretched_constraint() {
    let mut grid = NodeGrid::new(layout(2, 1), LayerId(0)).unwrap();
    let set = ConstraintSet::structural(&grid);
    grid.nodes_mut()[1].overwrite(Vec2::new(30.0, 0.0));
    assert!((set.max_strain(grid.nodes()) - 0.5).abs() < 1e-6);
}

// ─── ForceField Tests ─────────────────────────────────────────

#[test]
fn force_pushes_away_inside_radius() {
    let field = ForceField::new(150.0, 200.0);
    let d = field.displacement(Vec2::new(13.0, 0.0), Vec2::ZERO, 0.5);

    // strength / (d + 1) * dt = 200 / 14 * 0.5
    assert!((d.length() - 200.0 / 14.0 * 0.5).abs() < 1e-4);
    assert!(d.x > 0.0);
    assert!(d.y.abs() < 1e-6);
}

#[test]
fn force_is_zero_outside_radius() {
    let field = ForceField::new(150.0, 200.0);
    assert_eq!(field.displacement(Vec2::new(150.0, 0.0), Vec2::ZERO, DT), Vec2::ZERO);
    assert_eq!(field.displacement(Vec2::new(400.0, 300.0), Vec2::ZERO, DT), Vec2::ZERO);
}

#[test]
fn force_at_interaction_point_is_finite() {
    let field = ForceField::new(150.0, 200.0);
    let d = field.displacement(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), DT);
    assert!(d.is_finite());
}

#[test]
fn force_skips_pinned_nodes() {
    let mut grid = NodeGrid::new(layout(3, 2), LayerId(0)).unwrap();
    let before: Vec<Node> = grid.nodes().to_vec();
    ForceField::new(150.0, 200.0).apply(grid.nodes_mut(), Vec2::new(20.0, 10.0), DT);

    for (old, new) in before.iter().zip(grid.nodes()) {
        if old.pinned {
            assert_eq!(old.position, new.position);
        } else {
            assert_ne!(old.position, new.position);
        }
    }
}

#[test]
fn attenuated_keeps_radius() {
    let field = ForceField::new(150.0, 200.0).attenuated(0.5);
    assert_eq!(field.radius, 150.0);
    assert!((field.strength - 100.0).abs() < 1e-6);
}

// ─── Integrator Tests ─────────────────────────────────────────

#[test]
fn integrator_applies_damped_velocity_and_gravity() {
    let integrator = Integrator::new(0.5, Vec2::new(0.0, 60.0));
    let mut node = Node::new(Vec2::new(10.0, 10.0), LayerId(0));
    node.previous_position = Vec2::new(8.0, 10.0);

    integrator.step_node(&mut node, 0.5);

    assert_eq!(node.previous_position, Vec2::new(10.0, 10.0));
    // 10 + 2 * 0.5 = 11 in x, 10 + 60 * 0.5 = 40 in y
    assert!((node.position.x - 11.0).abs() < 1e-6);
    assert!((node.position.y - 40.0).abs() < 1e-6);
}

#[test]
fn integrator_leaves_pinned_nodes() {
    let integrator = Integrator::new(0.995, Vec2::new(0.0, 49.0));
    let mut node = Node::new(Vec2::new(1.0, 2.0), LayerId(0));
    node.pinned = true;
    node.previous_position = Vec2::ZERO;

    integrator.step_node(&mut node, DT);

    assert_eq!(node.position, Vec2::new(1.0, 2.0));
    assert_eq!(node.previous_position, Vec2::ZERO);
}

#[test]
fn gravity_only_fall_accelerates() {
    let config = FabricConfig {
        grid_width: 4,
        grid_height: 4,
        layer_count: 1,
        force_strength: 0.0,
        pin_top_row: false,
        ..Default::default()
    };
    let mut fabric = MultiLayerCoordinator::new(config).unwrap();
    let start = fabric.layers()[0].nodes()[5].position.y;

    let mut displacements = Vec::new();
    for _ in 0..10 {
        fabric.update(DT, Vec2::new(-1.0e6, -1.0e6));
        displacements.push(fabric.layers()[0].nodes()[5].position.y - start);
    }

    // d_n = d_{n-1} + 0.995 * (d_{n-1} - d_{n-2}) + g * dt
    let g_dt = 49.0 * DT;
    let mut expected = Vec::new();
    let (mut prev, mut cur) = (0.0f32, 0.0f32);
    for _ in 0..10 {
        let next = cur + (cur - prev) * 0.995 + g_dt;
        prev = cur;
        cur = next;
        expected.push(cur);
    }

    for (got, want) in displacements.iter().zip(&expected) {
        assert!((got - want).abs() < 1e-2, "got {got}, want {want}");
    }
    let steps: Vec<f32> = displacements.windows(2).map(|w| w[1] - w[0]).collect();
    assert!(steps.windows(2).all(|w| w[1] > w[0]));
}

// ─── ConstraintSolver Tests ───────────────────────────────────

#[test]
fn relaxation_converges_toward_rest_length() {
    let mut grid = NodeGrid::new(
        GridLayout { cell_size: 10.0, pin_top_row: false, ..layout(3, 1) },
        LayerId(0),
    )
    .unwrap();
    let set = ConstraintSet::structural(&grid);
    grid.nodes_mut()[1].overwrite(Vec2::new(20.0, 0.0));
    grid.nodes_mut()[2].overwrite(Vec2::new(40.0, 0.0));

    let solver = ConstraintSolver::new(1, 1e-6);
    let mut strains = vec![set.max_strain(grid.nodes())];
    for _ in 0..5 {
        solver.relax_once(grid.nodes_mut(), &set);
        strains.push(set.max_strain(grid.nodes()));
    }

    assert!(strains.windows(2).all(|w| w[1] <= w[0] + 1e-6), "{strains:?}");
    assert!(strains[5] < strains[0]);
}

#[test]
fn solver_reports_iterations_and_strain() {
    let mut grid = NodeGrid::new(layout(3, 3), LayerId(0)).unwrap();
    let set = ConstraintSet::structural(&grid);
    let report: RelaxationReport = ConstraintSolver::new(5, 1e-6).solve(grid.nodes_mut(), &set);

    assert_eq!(report.iterations, 5);
    assert_eq!(report.degenerate, 0);
    assert!(report.max_strain < 1e-6);
}

#[test]
fn zero_iterations_leave_nodes_untouched() {
    let mut grid = NodeGrid::new(layout(2, 2), LayerId(0)).unwrap();
    let set = ConstraintSet::structural(&grid);
    grid.nodes_mut()[3].position += Vec2::new(5.0, 0.0);
    let before: Vec<Node> = grid.nodes().to_vec();

    ConstraintSolver::new(0, 1e-6).solve(grid.nodes_mut(), &set);
    assert_eq!(grid.nodes(), before.as_slice());
}

// ─── PointerHistory Tests ─────────────────────────────────────

#[test]
fn history_drops_oldest_when_full() {
    let mut history = PointerHistory::new(3);
    for i in 0..5 {
        history.push(Vec2::splat(i as f32));
    }
    let kept: Vec<Vec2> = history.iter().collect();
    assert_eq!(kept, vec![Vec2::splat(2.0), Vec2::splat(3.0), Vec2::splat(4.0)]);
    assert_eq!(history.latest(), Some(Vec2::splat(4.0)));
}

#[test]
fn history_delay_clamps_to_oldest() {
    let mut history = PointerHistory::new(10);
    assert_eq!(history.delayed(0), None);

    history.push(Vec2::splat(1.0));
    history.push(Vec2::splat(2.0));
    assert_eq!(history.delayed(0), Some(Vec2::splat(2.0)));
    assert_eq!(history.delayed(1), Some(Vec2::splat(1.0)));
    assert_eq!(history.delayed(7), Some(Vec2::splat(1.0)));
}

#[test]
fn history_zero_capacity_is_raised() {
    let history = PointerHistory::new(0);
    assert_eq!(history.capacity(), 1);
}

// ─── FabricLayer Tests ────────────────────────────────────────

#[test]
fn layer_depth_offset_scales_with_index() {
    let config = small_config();
    let layer = FabricLayer::new(LayerId(3), &config).unwrap();
    assert!((layer.node_at(0, 0).unwrap().position.y - 15.0).abs() < 1e-6);
    assert_eq!(layer.segments().count(), layer.constraints().len());
}

#[test]
fn layer_unpin_all_lasts_until_reset() {
    let mut layer = FabricLayer::new(LayerId(0), &small_config()).unwrap();
    layer.unpin_all();
    assert!(layer.nodes().iter().all(|n| !n.pinned));
    layer.reset();
    assert!(layer.nodes()[0].pinned);
}

// ─── MultiLayerCoordinator Tests ──────────────────────────────

#[test]
fn coordinator_rejects_invalid_config() {
    let zero_layers = FabricConfig { layer_count: 0, ..small_config() };
    assert!(matches!(
        MultiLayerCoordinator::new(zero_layers),
        Err(WeftError::InvalidConfig(_))
    ));

    let zero_width = FabricConfig { grid_width: 0, ..small_config() };
    assert!(matches!(
        MultiLayerCoordinator::new(zero_width),
        Err(WeftError::InvalidGrid { .. })
    ));
}

#[test]
fn pinned_nodes_stay_put() {
    let mut fabric = MultiLayerCoordinator::new(small_config()).unwrap();
    let corners = fabric.corners().to_vec();
    let initial: Vec<Vec<Node>> = fabric.layers().iter().map(|l| l.nodes().to_vec()).collect();

    for i in 0..30 {
        fabric.update(DT, near_pointer() + Vec2::new(i as f32, 0.0));
    }

    for (layer, before) in fabric.layers().iter().zip(&initial) {
        for (idx, (old, new)) in before.iter().zip(layer.nodes()).enumerate() {
            if old.pinned && !corners.contains(&NodeId(idx as u32)) {
                assert_eq!(old.position, new.position, "layer {:?} node {idx}", layer.id());
            }
        }
    }
}

#[test]
fn corners_match_front_layer_after_update() {
    let mut fabric = MultiLayerCoordinator::new(small_config()).unwrap();
    for i in 0..12 {
        fabric.update(DT, Vec2::new(30.0 + 5.0 * i as f32, 70.0));
    }

    let front = &fabric.layers()[0];
    for &corner in fabric.corners() {
        let canonical = front.nodes()[corner.index()].position;
        for layer in &fabric.layers()[1..] {
            let node = layer.nodes()[corner.index()];
            assert_eq!(node.position, canonical);
            assert_eq!(node.previous_position, canonical);
        }
    }
}

#[test]
fn far_pointer_matches_disabled_force() {
    let mut far = MultiLayerCoordinator::new(small_config()).unwrap();
    let mut disabled = MultiLayerCoordinator::new(FabricConfig {
        force_strength: 0.0,
        ..small_config()
    })
    .unwrap();

    for _ in 0..15 {
        far.update(DT, Vec2::new(1.0e5, -1.0e5));
        disabled.update(DT, near_pointer());
    }

    for (a, b) in far.layers().iter().zip(disabled.layers()) {
        assert_eq!(a.nodes(), b.nodes());
    }
}

#[test]
fn reset_is_idempotent_and_at_rest() {
    let mut fabric = MultiLayerCoordinator::new(small_config()).unwrap();
    for _ in 0..20 {
        fabric.update(DT, near_pointer());
    }

    fabric.reset();
    let once: Vec<Vec<Node>> = fabric.layers().iter().map(|l| l.nodes().to_vec()).collect();
    fabric.reset();

    for (layer, expected) in fabric.layers().iter().zip(&once) {
        assert_eq!(layer.nodes(), expected.as_slice());
        assert!(layer.nodes().iter().all(|n| n.position == n.previous_position));
    }
    assert!(fabric.history().is_empty());
    assert_eq!(fabric.tick(), 0);
    assert_eq!(fabric.sim_time(), 0.0);
}

#[test]
fn history_lags_deeper_layers() {
    let mut fabric = MultiLayerCoordinator::new(FabricConfig {
        history_capacity: 10,
        ..small_config()
    })
    .unwrap();

    let pointers: Vec<Vec2> = (0..10).map(|i| Vec2::new(i as f32 * 10.0, 40.0)).collect();
    for &p in &pointers {
        fabric.update(DT, p);
    }

    let history = fabric.history();
    assert_eq!(history.len(), 10);
    let current = pointers[9];
    assert_eq!(fabric.effective_pointer(3, current), history.get(10 - 1 - 3).unwrap());
    assert_eq!(fabric.effective_pointer(3, current), pointers[6]);
    assert_eq!(fabric.effective_pointer(0, current), current);
}

#[test]
fn force_multiplier_falls_off_with_depth() {
    let fabric = MultiLayerCoordinator::new(FabricConfig {
        layer_count: 5,
        ..small_config()
    })
    .unwrap();

    assert!((fabric.force_multiplier(0) - 1.0).abs() < 1e-6);
    assert!((fabric.force_multiplier(1) - 0.97).abs() < 1e-6);
    assert!((fabric.force_multiplier(4) - 0.88).abs() < 1e-6);
}

/// Runs `ticks` updates with `pointer`, then returns the layers as they
/// stand before the next tick.
fn warmed_up(fabric: &mut MultiLayerCoordinator, pointer: Vec2, ticks: usize) -> Vec<FabricLayer> {
    for _ in 0..ticks {
        fabric.update(DT, pointer);
    }
    fabric.layers().to_vec()
}

/// Asserts every node except the linked corners matches `expected`.
fn assert_layers_match(fabric: &MultiLayerCoordinator, expected: &[FabricLayer]) {
    let corners: Vec<usize> = fabric.corners().iter().map(|c| c.index()).collect();
    for (i, (got, want)) in fabric.layers().iter().zip(expected).enumerate() {
        for (n, (a, b)) in got.nodes().iter().zip(want.nodes()).enumerate() {
            if i > 0 && corners.contains(&n) {
                continue;
            }
            assert_eq!(a, b, "layer {i}, node {n}");
        }
    }
}

#[test]
fn update_feeds_each_layer_its_delayed_pointer() {
    let config = FabricConfig {
        history_capacity: 10,
        ..small_config()
    };
    let mut fabric = MultiLayerCoordinator::new(config).unwrap();
    let far = Vec2::new(-1.0e4, -1.0e4);
    let mut expected = warmed_up(&mut fabric, far, 3);
    let untouched = expected.clone();

    fabric.update(DT, near_pointer());

    // History is [far, far, far, near]: only the front layer sees the move.
    for (i, layer) in expected.iter_mut().enumerate() {
        let pointer = if i == 0 { near_pointer() } else { far };
        layer.step(DT, pointer, 1.0 - i as f32 * 0.15 / 4.0);
    }
    assert_layers_match(&fabric, &expected);

    let mut front_without_nudge = untouched[0].clone();
    front_without_nudge.step(DT, far, 1.0);
    assert_ne!(fabric.layers()[0].nodes(), front_without_nudge.nodes());
}

#[test]
fn update_attenuates_pointer_strength_by_depth() {
    let mut fabric = MultiLayerCoordinator::new(small_config()).unwrap();
    let mut expected = warmed_up(&mut fabric, near_pointer(), 3);
    let mut full_strength = expected[3].clone();

    fabric.update(DT, near_pointer());

    for (i, layer) in expected.iter_mut().enumerate() {
        layer.step(DT, near_pointer(), 1.0 - i as f32 * 0.15 / 4.0);
    }
    assert_layers_match(&fabric, &expected);

    full_strength.step(DT, near_pointer(), 1.0);
    let interior = 2 * 6 + 2;
    assert_ne!(
        fabric.layers()[3].nodes()[interior],
        full_strength.nodes()[interior]
    );
}

#[test]
fn pointer_nudge_is_folded_into_velocity() {
    let config = FabricConfig {
        grid_width: 1,
        grid_height: 1,
        layer_count: 1,
        pin_top_row: false,
        ..Default::default()
    };
    let pointer = Vec2::new(-10.0, 0.0);
    let mut layer = FabricLayer::new(LayerId(0), &config).unwrap();
    let nudge = config.force_field().displacement(Vec2::ZERO, pointer, DT);
    let fall = Vec2::new(0.0, 49.0 * DT);
    assert!(nudge.x > 0.0);

    layer.step(DT, pointer, 1.0);

    // The nudge lands before inertia, so it is also this tick's velocity.
    let node = layer.nodes()[0];
    assert!((node.previous_position - nudge).length() < 1e-5);
    let want = nudge + nudge * 0.995 + fall;
    assert!((node.position - want).length() < 1e-5, "got {}, want {want}", node.position);

    layer.step(DT, Vec2::splat(-1.0e6), 1.0);

    let node = layer.nodes()[0];
    let carried = (nudge * 0.995 + fall) * 0.995 + fall;
    assert!((node.velocity() - carried).length() < 1e-5);
}

#[test]
fn unpin_layer_keeps_corners_linked() {
    let mut fabric = MultiLayerCoordinator::new(small_config()).unwrap();
    fabric.unpin_layer(1).unwrap();
    assert!(fabric.layers()[1].nodes().iter().all(|n| !n.pinned));
    assert!(matches!(
        fabric.unpin_layer(4),
        Err(WeftError::LayerOutOfBounds { index: 4, count: 4 })
    ));

    let start_y = fabric.layers()[1].nodes()[2].position.y;
    for _ in 0..5 {
        fabric.update(DT, Vec2::new(-1.0e6, -1.0e6));
    }

    let front = fabric.layers()[0].nodes();
    let loose = fabric.layers()[1].nodes();
    for corner in fabric.corners() {
        assert_eq!(loose[corner.index()].position, front[corner.index()].position);
    }
    // Top row between the corners sags once unpinned.
    assert!(loose[2].position.y > start_y);
    assert_eq!(front[2].position.y, 0.0);
}

#[test]
fn update_advances_clock() {
    let mut fabric = MultiLayerCoordinator::new(small_config()).unwrap();
    fabric.update(0.25, near_pointer());
    fabric.update(0.25, near_pointer());
    assert_eq!(fabric.tick(), 2);
    assert!((fabric.sim_time() - 0.5).abs() < 1e-9);
}

#[test]
fn layer_accessor_bounds() {
    let fabric = MultiLayerCoordinator::new(small_config()).unwrap();
    assert!(fabric.layer(3).is_ok());
    assert!(matches!(
        fabric.layer(4),
        Err(WeftError::LayerOutOfBounds { index: 4, count: 4 })
    ));
    assert_eq!(fabric.node_count(), 4 * 30);
    assert_eq!(fabric.constraint_count(), 4 * (5 * 5 + 6 * 4));
}

#[test]
fn identical_runs_are_deterministic() {
    let mut a = MultiLayerCoordinator::new(small_config()).unwrap();
    let mut b = MultiLayerCoordinator::new(small_config()).unwrap();
    for i in 0..25 {
        let p = Vec2::new(10.0 + 3.0 * i as f32, 40.0);
        a.update(DT, p);
        b.update(DT, p);
    }
    for (la, lb) in a.layers().iter().zip(b.layers()) {
        assert_eq!(la.nodes(), lb.nodes());
    }
}

// ─── Hook Tests ───────────────────────────────────────────────

#[derive(Default)]
struct CountingHook {
    begins: u32,
    relaxed: Vec<LayerId>,
    synced: usize,
    ends: u32,
    resets: u32,
}

impl InspectionHook for CountingHook {
    fn on_tick_begin(&mut self, _tick: u32, _sim_time: f64) {
        self.begins += 1;
    }

    fn on_layer_relaxed(&mut self, _tick: u32, layer: LayerId, report: &RelaxationReport) {
        assert_eq!(report.iterations, 5);
        self.relaxed.push(layer);
    }

    fn on_corners_synced(&mut self, _tick: u32, corners: usize) {
        self.synced = corners;
    }

    fn on_tick_end(&mut self, _tick: u32, wall_time: f64) {
        assert!(wall_time >= 0.0);
        self.ends += 1;
    }

    fn on_reset(&mut self) {
        self.resets += 1;
    }

    fn name(&self) -> &str {
        "counting"
    }
}

#[test]
fn hook_sees_every_stage() {
    let mut fabric = MultiLayerCoordinator::new(small_config()).unwrap();
    let mut hook = CountingHook::default();

    fabric.update_with_hook(DT, near_pointer(), &mut hook);
    fabric.update_with_hook(DT, near_pointer(), &mut hook);
    fabric.reset_with_hook(&mut hook);

    assert_eq!(hook.begins, 2);
    assert_eq!(hook.ends, 2);
    assert_eq!(hook.relaxed.len(), 8);
    assert_eq!(hook.relaxed[..4], [LayerId(0), LayerId(1), LayerId(2), LayerId(3)]);
    assert_eq!(hook.synced, 4);
    assert_eq!(hook.resets, 1);
}
