//! Damped Verlet integration with constant gravity.

use serde::{Deserialize, Serialize};
use weft_types::Vec2;

use crate::node::Node;

/// Advances unpinned nodes by one tick.
///
/// ```text
/// v     = x - x_prev
/// x_prev = x
/// x     += v * damping + gravity * dt
/// ```
///
/// Gravity is scaled by `dt` once, not `dt²`: it acts as a per-tick drift
/// that accumulates through the implicit velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Integrator {
    /// Fraction of implicit velocity kept each tick.
    pub damping: f32,
    pub gravity: Vec2,
}

impl Integrator {
    pub fn new(damping: f32, gravity: Vec2) -> Self {
        Self { damping, gravity }
    }

    #[inline]
    pub fn step_node(&self, node: &mut Node, dt: f32) {
        if node.pinned {
            return;
        }
        let velocity = node.velocity();
        node.previous_position = node.position;
        node.position += velocity * self.damping;
        node.position += self.gravity * dt;
    }

    pub fn step(&self, nodes: &mut [Node], dt: f32) {
        for node in nodes.iter_mut() {
            self.step_node(node, dt);
        }
    }
}
