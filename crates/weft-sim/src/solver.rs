//! Iterative constraint relaxation.
//!
//! Each pass walks the constraint list in order and moves both endpoints
//! half the length error toward (or away from) each other. Updates are
//! written in place and read by later constraints of the same pass, so the
//! result depends on constraint order when constraints share nodes.

use serde::{Deserialize, Serialize};

use crate::constraint::ConstraintSet;
use crate::node::Node;

/// Outcome of one [`ConstraintSolver::solve`] call.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RelaxationReport {
    /// Passes performed.
    pub iterations: u32,
    /// Constraint visits skipped because the endpoints coincided.
    pub degenerate: u32,
    /// `max |len - rest| / rest` after the last pass.
    pub max_strain: f32,
}

/// Fixed-iteration Gauss-Seidel style projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSolver {
    pub iterations: u32,
    /// Constraints shorter than this are skipped.
    pub epsilon: f32,
}

impl ConstraintSolver {
    pub fn new(iterations: u32, epsilon: f32) -> Self {
        Self { iterations, epsilon }
    }

    /// One pass over every constraint. Returns the number of skipped visits.
    pub fn relax_once(&self, nodes: &mut [Node], constraints: &ConstraintSet) -> u32 {
        let mut degenerate = 0;
        for c in constraints {
            let (a, b) = (c.a.index(), c.b.index());
            let delta = nodes[b].position - nodes[a].position;
            let length = delta.length();
            if length < self.epsilon {
                degenerate += 1;
                continue;
            }
            let correction = delta * ((length - c.rest_length) / length * 0.5);
            if !nodes[a].pinned {
                nodes[a].position += correction;
            }
            if !nodes[b].pinned {
                nodes[b].position -= correction;
            }
        }
        degenerate
    }

    pub fn solve(&self, nodes: &mut [Node], constraints: &ConstraintSet) -> RelaxationReport {
        let mut degenerate = 0;
        for _ in 0..self.iterations {
            degenerate += self.relax_once(nodes, constraints);
        }
        RelaxationReport {
            iterations: self.iterations,
            degenerate,
            max_strain: constraints.max_strain(nodes),
        }
    }
}
