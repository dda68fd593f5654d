//! Multi-layer coordinator.
//!
//! Owns the layer stack and the pointer history and runs the whole tick:
//!
//! 1. push the pointer onto the history
//! 2. for layer `i`, read `history[len - 1 - i]` (clamped) as its pointer
//! 3. scale pointer strength by `1 - i * 0.15 / layer_count`
//! 4. force, integrate, relax the layer
//! 5. copy layer 0's corner nodes onto every other layer
//!
//! Step 5 is the only coupling between layers. It writes position and
//! previous position, so linked corners carry no velocity of their own.

use std::time::Instant;

use weft_types::constants::LAYER_FORCE_FALLOFF;
use weft_types::{LayerId, NodeId, Vec2, WeftError, WeftResult};

use crate::config::FabricConfig;
use crate::history::PointerHistory;
use crate::hooks::{InspectionHook, NoOpHook};
use crate::layer::FabricLayer;

/// Stack of fabric layers advanced together.
#[derive(Debug, Clone)]
pub struct MultiLayerCoordinator {
    config: FabricConfig,
    layers: Vec<FabricLayer>,
    history: PointerHistory,
    corners: Vec<NodeId>,
    tick: u32,
    sim_time: f64,
}

impl MultiLayerCoordinator {
    /// Validates `config` and builds every layer.
    pub fn new(config: FabricConfig) -> WeftResult<Self> {
        config.validate()?;

        let layers = (0..config.layer_count)
            .map(|i| FabricLayer::new(LayerId(i as u16), &config))
            .collect::<WeftResult<Vec<_>>>()?;
        let corners = corner_nodes(config.grid_width, config.grid_height);

        let mut coordinator = Self {
            history: PointerHistory::new(config.history_capacity),
            config,
            layers,
            corners,
            tick: 0,
            sim_time: 0.0,
        };
        coordinator.sync_corners();

        tracing::debug!(
            layers = coordinator.layers.len(),
            width = coordinator.config.grid_width,
            height = coordinator.config.grid_height,
            "fabric initialized"
        );
        Ok(coordinator)
    }

    /// Advances every layer one tick.
    pub fn update(&mut self, dt: f32, pointer: Vec2) {
        self.update_with_hook(dt, pointer, &mut NoOpHook);
    }

    /// Advances every layer one tick, reporting progress to `hook`.
    ///
    /// `dt` is used as given. Very large values can make the relaxation
    /// blow up.
    pub fn update_with_hook(&mut self, dt: f32, pointer: Vec2, hook: &mut dyn InspectionHook) {
        let start = Instant::now();
        let tick = self.tick;
        hook.on_tick_begin(tick, self.sim_time);
        tracing::trace!(tick, dt, x = pointer.x, y = pointer.y, "fabric tick");

        self.history.push(pointer);

        for i in 0..self.layers.len() {
            let effective = self.effective_pointer(i, pointer);
            let scale = self.force_multiplier(i);
            let layer = &mut self.layers[i];
            let report = layer.step(dt, effective, scale);
            hook.on_layer_relaxed(tick, layer.id(), &report);
        }

        self.sync_corners();
        hook.on_corners_synced(tick, self.corners.len());

        self.tick = self.tick.wrapping_add(1);
        self.sim_time += f64::from(dt);
        hook.on_tick_end(tick, start.elapsed().as_secs_f64());
    }

    /// Rebuilds every layer, clears the pointer history and zeroes the clock.
    pub fn reset(&mut self) {
        self.reset_with_hook(&mut NoOpHook);
    }

    pub fn reset_with_hook(&mut self, hook: &mut dyn InspectionHook) {
        self.history.clear();
        for layer in &mut self.layers {
            layer.reset();
        }
        self.sync_corners();
        self.tick = 0;
        self.sim_time = 0.0;
        tracing::debug!(layers = self.layers.len(), "fabric reset");
        hook.on_reset();
    }

    /// Pointer position the layer at `depth` reacts to this tick.
    ///
    /// Falls back to `current` while the history is empty.
    pub fn effective_pointer(&self, depth: usize, current: Vec2) -> Vec2 {
        self.history.delayed(depth).unwrap_or(current)
    }

    /// Fraction of pointer strength felt by the layer at `depth`.
    pub fn force_multiplier(&self, depth: usize) -> f32 {
        1.0 - depth as f32 * LAYER_FORCE_FALLOFF / self.layers.len() as f32
    }

    fn sync_corners(&mut self) {
        let Some((front, rest)) = self.layers.split_first_mut() else {
            return;
        };
        for &corner in &self.corners {
            let canonical = front.nodes()[corner.index()].position;
            for layer in rest.iter_mut() {
                layer.overwrite_node(corner, canonical);
            }
        }
    }

    pub fn layer(&self, index: usize) -> WeftResult<&FabricLayer> {
        self.layers.get(index).ok_or(WeftError::LayerOutOfBounds {
            index,
            count: self.layers.len(),
        })
    }

    /// Releases every pin of one layer, for scenario setup.
    ///
    /// Positions are untouched, so linked corners stay in sync.
    pub fn unpin_layer(&mut self, index: usize) -> WeftResult<()> {
        let count = self.layers.len();
        self.layers
            .get_mut(index)
            .ok_or(WeftError::LayerOutOfBounds { index, count })?
            .unpin_all();
        Ok(())
    }

    pub fn layers(&self) -> &[FabricLayer] { &self.layers }
    pub fn layer_count(&self) -> usize { self.layers.len() }
    pub fn history(&self) -> &PointerHistory { &self.history }
    /// Linked corner nodes: top-left, top-right, bottom-left, bottom-right,
    /// with duplicates removed for one-wide or one-tall grids.
    pub fn corners(&self) -> &[NodeId] { &self.corners }
    pub fn config(&self) -> &FabricConfig { &self.config }
    pub fn tick(&self) -> u32 { self.tick }
    pub fn sim_time(&self) -> f64 { self.sim_time }
    pub fn node_count(&self) -> usize { self.layers.iter().map(|l| l.nodes().len()).sum() }
    pub fn constraint_count(&self) -> usize { self.layers.iter().map(|l| l.constraints().len()).sum() }
}

fn corner_nodes(width: usize, height: usize) -> Vec<NodeId> {
    let last_row = (height - 1) * width;
    let mut corners = vec![
        NodeId(0),
        NodeId((width - 1) as u32),
        NodeId(last_row as u32),
        NodeId((last_row + width - 1) as u32),
    ];
    corners.sort_unstable();
    corners.dedup();
    corners
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_of_regular_grid() {
        let corners = corner_nodes(4, 3);
        assert_eq!(corners, vec![NodeId(0), NodeId(3), NodeId(8), NodeId(11)]);
    }

    #[test]
    fn corners_collapse_for_degenerate_grids() {
        assert_eq!(corner_nodes(1, 1), vec![NodeId(0)]);
        assert_eq!(corner_nodes(5, 1), vec![NodeId(0), NodeId(4)]);
        assert_eq!(corner_nodes(1, 3), vec![NodeId(0), NodeId(2)]);
    }
}
