//! Pointer interaction.
//!
//! The pointer pushes nearby nodes away. The push is a position nudge
//! applied before integration, so it becomes part of the implicit velocity
//! the integrator reads next.

use serde::{Deserialize, Serialize};
use weft_types::Vec2;

use crate::node::Node;

/// Repulsive field around a single interaction point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceField {
    /// Nodes at distance `>= radius` are unaffected.
    pub radius: f32,
    /// Peak push per second, felt at the interaction point.
    pub strength: f32,
}

impl ForceField {
    pub fn new(radius: f32, strength: f32) -> Self {
        Self { radius, strength }
    }

    /// Same radius, strength scaled by `factor`.
    pub fn attenuated(self, factor: f32) -> Self {
        Self {
            strength: self.strength * factor,
            ..self
        }
    }

    /// Displacement for a node at `position`.
    ///
    /// Within the radius the magnitude is `strength / (d + 1) * dt`, directed
    /// away from `point`. A node exactly on the point has no defined
    /// direction and is left alone.
    pub fn displacement(&self, position: Vec2, point: Vec2, dt: f32) -> Vec2 {
        let away = position - point;
        let distance = away.length();
        if distance >= self.radius {
            return Vec2::ZERO;
        }
        away.normalize_or_zero() * (self.strength / (distance + 1.0) * dt)
    }

    /// Nudges every unpinned node.
    pub fn apply(&self, nodes: &mut [Node], point: Vec2, dt: f32) {
        if self.strength == 0.0 {
            return;
        }
        for node in nodes.iter_mut().filter(|n| !n.pinned) {
            node.position += self.displacement(node.position, point, dt);
        }
    }
}
