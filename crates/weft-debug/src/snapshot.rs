//! Diagnostic state snapshots.
//!
//! A snapshot copies every node of every layer at one tick. It is
//! bincode-encoded for compact files and used by `weft inspect` and for
//! diffing two runs.

use serde::{Deserialize, Serialize};
use weft_sim::MultiLayerCoordinator;
use weft_types::{WeftError, WeftResult};

/// Node state of one layer, flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSnapshot {
    pub layer: u16,
    pub width: usize,
    pub height: usize,
    /// Interleaved `[x0, y0, x1, y1, ...]`.
    pub positions: Vec<f32>,
    /// Interleaved previous positions, same layout as `positions`.
    pub previous_positions: Vec<f32>,
    pub pinned: Vec<bool>,
}

impl LayerSnapshot {
    pub fn node_count(&self) -> usize {
        self.pinned.len()
    }

    /// `[min_x, min_y, max_x, max_y]` over current positions.
    pub fn bounds(&self) -> Option<[f32; 4]> {
        if self.positions.is_empty() {
            return None;
        }
        let mut b = [f32::INFINITY, f32::INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY];
        for xy in self.positions.chunks_exact(2) {
            b[0] = b[0].min(xy[0]);
            b[1] = b[1].min(xy[1]);
            b[2] = b[2].max(xy[0]);
            b[3] = b[3].max(xy[1]);
        }
        Some(b)
    }

    /// Largest per-node implicit velocity magnitude.
    pub fn max_speed(&self) -> f32 {
        self.positions
            .chunks_exact(2)
            .zip(self.previous_positions.chunks_exact(2))
            .map(|(p, q)| ((p[0] - q[0]).powi(2) + (p[1] - q[1]).powi(2)).sqrt())
            .fold(0.0, f32::max)
    }
}

/// Every layer of the fabric at one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub tick: u32,
    pub sim_time: f64,
    pub layers: Vec<LayerSnapshot>,
}

impl StateSnapshot {
    pub fn capture(fabric: &MultiLayerCoordinator) -> Self {
        let layers = fabric
            .layers()
            .iter()
            .map(|layer| {
                let nodes = layer.nodes();
                LayerSnapshot {
                    layer: layer.id().0,
                    width: layer.width(),
                    height: layer.height(),
                    positions: nodes.iter().flat_map(|n| n.position.to_array()).collect(),
                    previous_positions: nodes
                        .iter()
                        .flat_map(|n| n.previous_position.to_array())
                        .collect(),
                    pinned: nodes.iter().map(|n| n.pinned).collect(),
                }
            })
            .collect();

        Self {
            tick: fabric.tick(),
            sim_time: fabric.sim_time(),
            layers,
        }
    }

    pub fn node_count(&self) -> usize {
        self.layers.iter().map(LayerSnapshot::node_count).sum()
    }

    /// Largest positional difference between matching nodes of two snapshots.
    ///
    /// Returns `None` when the layer stacks have different shapes.
    pub fn max_deviation(&self, other: &StateSnapshot) -> Option<f32> {
        if self.layers.len() != other.layers.len() {
            return None;
        }
        let mut max = 0.0f32;
        for (a, b) in self.layers.iter().zip(&other.layers) {
            if a.positions.len() != b.positions.len() {
                return None;
            }
            for (p, q) in a.positions.iter().zip(&b.positions) {
                max = max.max((p - q).abs());
            }
        }
        Some(max)
    }

    pub fn to_bytes(&self) -> WeftResult<Vec<u8>> {
        bincode::serialize(self)
            .map_err(|e| WeftError::Serialization(format!("Snapshot serialization failed: {e}")))
    }

    pub fn from_bytes(data: &[u8]) -> WeftResult<Self> {
        bincode::deserialize(data)
            .map_err(|e| WeftError::Serialization(format!("Snapshot deserialization failed: {e}")))
    }

    pub fn write_to(&self, path: &std::path::Path) -> WeftResult<()> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    pub fn read_from(path: &std::path::Path) -> WeftResult<Self> {
        Self::from_bytes(&std::fs::read(path)?)
    }
}
