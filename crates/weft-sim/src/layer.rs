//! A single fabric sheet.

use weft_types::{LayerId, NodeId, Vec2, WeftResult};

use crate::config::FabricConfig;
use crate::constraint::{Constraint, ConstraintSet};
use crate::force::ForceField;
use crate::grid::NodeGrid;
use crate::integrator::Integrator;
use crate::node::Node;
use crate::solver::{ConstraintSolver, RelaxationReport};

/// One independently steppable sheet: lattice, constraints and the
/// force / integrate / relax pipeline that advances them.
#[derive(Debug, Clone)]
pub struct FabricLayer {
    id: LayerId,
    grid: NodeGrid,
    constraints: ConstraintSet,
    force: ForceField,
    integrator: Integrator,
    solver: ConstraintSolver,
}

impl FabricLayer {
    /// Lays out the lattice for `id` and captures its rest lengths.
    pub fn new(id: LayerId, config: &FabricConfig) -> WeftResult<Self> {
        let grid = NodeGrid::new(config.grid_layout(id), id)?;
        let constraints = ConstraintSet::structural(&grid);
        Ok(Self {
            id,
            grid,
            constraints,
            force: config.force_field(),
            integrator: config.integrator(),
            solver: config.solver(),
        })
    }

    /// Advances the sheet one tick.
    ///
    /// `strength_scale` multiplies the pointer strength for this tick only.
    /// Order is load-bearing: pointer nudge, then inertia and gravity,
    /// then relaxation.
    pub fn step(&mut self, dt: f32, pointer: Vec2, strength_scale: f32) -> RelaxationReport {
        let nodes = self.grid.nodes_mut();
        self.force.attenuated(strength_scale).apply(nodes, pointer, dt);
        self.integrator.step(nodes, dt);
        self.solver.solve(nodes, &self.constraints)
    }

    /// Restores the initial layout. Rest lengths are recaptured from it.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.constraints = ConstraintSet::structural(&self.grid);
    }

    /// Releases every pin. Lasts until the next reset.
    pub fn unpin_all(&mut self) {
        for node in self.grid.nodes_mut() {
            node.pinned = false;
        }
    }

    pub(crate) fn overwrite_node(&mut self, id: NodeId, position: Vec2) {
        if let Some(node) = self.grid.nodes_mut().get_mut(id.index()) {
            node.overwrite(position);
        }
    }

    /// Endpoint positions of every constraint, in relaxation order.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let nodes = self.grid.nodes();
        self.constraints
            .iter()
            .map(move |c| (nodes[c.a.index()].position, nodes[c.b.index()].position))
    }

    pub fn node_at(&self, col: usize, row: usize) -> Option<&Node> {
        self.grid.node_at(col, row)
    }

    pub fn id(&self) -> LayerId { self.id }
    pub fn grid(&self) -> &NodeGrid { &self.grid }
    pub fn nodes(&self) -> &[Node] { self.grid.nodes() }
    pub fn constraints(&self) -> &[Constraint] { self.constraints.as_slice() }
    pub fn constraint_set(&self) -> &ConstraintSet { &self.constraints }
    pub fn width(&self) -> usize { self.grid.width() }
    pub fn height(&self) -> usize { self.grid.height() }
    pub fn force_field(&self) -> &ForceField { &self.force }
    pub fn integrator(&self) -> &Integrator { &self.integrator }
    pub fn solver(&self) -> &ConstraintSolver { &self.solver }
}
