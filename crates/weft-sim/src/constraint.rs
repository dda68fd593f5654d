//! Distance constraints between lattice neighbours.
//!
//! Rest lengths are captured from node positions when the constraint is
//! added and never change afterwards, so constraints must be built from a
//! freshly laid out grid.

use serde::{Deserialize, Serialize};
use weft_types::{NodeId, WeftError, WeftResult};

use crate::grid::NodeGrid;
use crate::node::Node;

/// Which lattice direction a constraint spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintKind {
    /// Between `(col, row)` and `(col + 1, row)`.
    Horizontal,
    /// Between `(col, row)` and `(col, row + 1)`.
    Vertical,
}

/// A distance constraint between two nodes of the same layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub a: NodeId,
    pub b: NodeId,
    pub rest_length: f32,
    pub kind: ConstraintKind,
}

/// Ordered list of constraints for one layer.
///
/// The order is the relaxation order: row-major over nodes, and for each
/// node its horizontal constraint before its vertical one.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the structural mesh: one constraint per horizontally or
    /// vertically adjacent node pair, no diagonals.
    pub fn structural(grid: &NodeGrid) -> Self {
        let (width, height) = (grid.width(), grid.height());
        let mut set = Self {
            constraints: Vec::with_capacity(
                (width - 1) * height + width * (height - 1),
            ),
        };
        for row in 0..height {
            for col in 0..width {
                let index = grid.index(col, row);
                if col + 1 < width {
                    set.push(grid.nodes(), index, index + 1, ConstraintKind::Horizontal);
                }
                if row + 1 < height {
                    set.push(grid.nodes(), index, grid.index(col, row + 1), ConstraintKind::Vertical);
                }
            }
        }
        set
    }

    fn push(&mut self, nodes: &[Node], a: usize, b: usize, kind: ConstraintKind) {
        let rest_length = nodes[a].position.distance(nodes[b].position);
        self.constraints.push(Constraint {
            a: NodeId(a as u32),
            b: NodeId(b as u32),
            rest_length,
            kind,
        });
    }

    /// Adds a constraint whose rest length is the current distance between
    /// `a` and `b`.
    pub fn add(
        &mut self,
        grid: &NodeGrid,
        a: NodeId,
        b: NodeId,
        kind: ConstraintKind,
    ) -> WeftResult<()> {
        let count = grid.len();
        for id in [a, b] {
            if id.index() >= count {
                return Err(WeftError::NodeOutOfBounds { index: id.index(), count });
            }
        }
        self.push(grid.nodes(), a.index(), b.index(), kind);
        Ok(())
    }

    /// Largest relative deviation `|len - rest| / rest` over all constraints.
    pub fn max_strain(&self, nodes: &[Node]) -> f32 {
        self.constraints
            .iter()
            .filter(|c| c.rest_length > 0.0)
            .map(|c| {
                let len = nodes[c.a.index()].position.distance(nodes[c.b.index()].position);
                (len - c.rest_length).abs() / c.rest_length
            })
            .fold(0.0, f32::max)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.constraints.iter()
    }

    pub fn as_slice(&self) -> &[Constraint] { &self.constraints }
    pub fn len(&self) -> usize { self.constraints.len() }
    pub fn is_empty(&self) -> bool { self.constraints.is_empty() }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}
