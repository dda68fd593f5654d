//! Point masses of the fabric lattice.

use serde::{Deserialize, Serialize};
use weft_types::{LayerId, Vec2};

/// A Verlet node. Velocity is implicit: `position - previous_position`.
///
/// Pinned nodes are never moved by integration or relaxation. The only
/// path that writes a pinned node is [`Node::overwrite`], used by corner
/// synchronization and layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub position: Vec2,
    pub previous_position: Vec2,
    pub pinned: bool,
    /// Layer this node belongs to. Informational only.
    pub layer: LayerId,
}

impl Node {
    /// Creates a node at rest.
    pub fn new(position: Vec2, layer: LayerId) -> Self {
        Self {
            position,
            previous_position: position,
            pinned: false,
            layer,
        }
    }

    /// Displacement carried over from the last tick.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.position - self.previous_position
    }

    /// Places the node at `position` with zero implicit velocity.
    #[inline]
    pub fn overwrite(&mut self, position: Vec2) {
        self.position = position;
        self.previous_position = position;
    }
}
