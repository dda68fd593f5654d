//! Rectangular node lattice.
//!
//! Node `(col, row)` lives at index `row * width + col` and is laid out at
//! `(col * cell_size, row * cell_size + depth_offset)`.

use serde::{Deserialize, Serialize};
use weft_types::{LayerId, NodeId, Vec2, WeftError, WeftResult};

use crate::node::Node;

/// Shape and placement of a lattice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    /// Node columns.
    pub width: usize,
    /// Node rows.
    pub height: usize,
    /// Spacing between adjacent nodes.
    pub cell_size: f32,
    /// Vertical offset of the whole lattice.
    pub depth_offset: f32,
    /// Pin row 0 after layout.
    pub pin_top_row: bool,
}

/// A rectangular array of nodes belonging to one layer.
#[derive(Debug, Clone)]
pub struct NodeGrid {
    layout: GridLayout,
    layer: LayerId,
    nodes: Vec<Node>,
}

impl NodeGrid {
    /// Lays out a fresh lattice.
    ///
    /// Fails if either dimension is zero.
    pub fn new(layout: GridLayout, layer: LayerId) -> WeftResult<Self> {
        if layout.width == 0 || layout.height == 0 {
            return Err(WeftError::InvalidGrid {
                width: layout.width,
                height: layout.height,
            });
        }
        let mut grid = Self {
            layout,
            layer,
            nodes: Vec::with_capacity(layout.width * layout.height),
        };
        grid.lay_out();
        Ok(grid)
    }

    fn lay_out(&mut self) {
        let GridLayout { width, height, cell_size, depth_offset, pin_top_row } = self.layout;
        self.nodes.clear();
        for row in 0..height {
            for col in 0..width {
                let position = Vec2::new(
                    col as f32 * cell_size,
                    row as f32 * cell_size + depth_offset,
                );
                let mut node = Node::new(position, self.layer);
                node.pinned = pin_top_row && row == 0;
                self.nodes.push(node);
            }
        }
    }

    /// Discards all motion and restores the initial layout and pins.
    pub fn reset(&mut self) {
        self.lay_out();
    }

    #[inline]
    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.layout.width + col
    }

    /// Returns the node at `(col, row)`, or `None` outside the lattice.
    pub fn node_at(&self, col: usize, row: usize) -> Option<&Node> {
        if col >= self.layout.width || row >= self.layout.height {
            return None;
        }
        self.nodes.get(self.index(col, row))
    }

    pub fn node(&self, id: NodeId) -> WeftResult<&Node> {
        self.nodes.get(id.index()).ok_or(WeftError::NodeOutOfBounds {
            index: id.index(),
            count: self.nodes.len(),
        })
    }

    pub fn set_pinned(&mut self, id: NodeId, pinned: bool) -> WeftResult<()> {
        let count = self.nodes.len();
        let node = self
            .nodes
            .get_mut(id.index())
            .ok_or(WeftError::NodeOutOfBounds { index: id.index(), count })?;
        node.pinned = pinned;
        Ok(())
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn layout(&self) -> &GridLayout { &self.layout }
    pub fn layer(&self) -> LayerId { self.layer }
    pub fn width(&self) -> usize { self.layout.width }
    pub fn height(&self) -> usize { self.layout.height }
    pub fn len(&self) -> usize { self.nodes.len() }
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }
}
