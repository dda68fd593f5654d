//! Inspection hooks for the tick pipeline.
//!
//! Hooks are called at fixed points of
//! [`MultiLayerCoordinator::update_with_hook`](crate::MultiLayerCoordinator::update_with_hook)
//! and observe the simulation without changing it.
//!
//! # Lifecycle
//!
//! ```text
//! for each tick:
//!   hook.on_tick_begin(...)
//!   for each layer:
//!     hook.on_layer_relaxed(...)
//!   hook.on_corners_synced(...)
//!   hook.on_tick_end(...)
//! on reset:
//!   hook.on_reset()
//! ```

use weft_types::LayerId;

use crate::solver::RelaxationReport;

/// Observer of the per-tick pipeline. All methods default to no-ops.
pub trait InspectionHook: Send {
    /// Called before any layer is touched.
    fn on_tick_begin(&mut self, tick: u32, sim_time: f64) {
        let _ = (tick, sim_time);
    }

    /// Called after a layer finished its relaxation passes.
    fn on_layer_relaxed(&mut self, tick: u32, layer: LayerId, report: &RelaxationReport) {
        let _ = (tick, layer, report);
    }

    /// Called after corner nodes of all layers were aligned to layer 0.
    fn on_corners_synced(&mut self, tick: u32, corners: usize) {
        let _ = (tick, corners);
    }

    /// Called at the end of a tick with its wall-clock duration (seconds).
    fn on_tick_end(&mut self, tick: u32, wall_time: f64) {
        let _ = (tick, wall_time);
    }

    /// Called after the coordinator was reset.
    fn on_reset(&mut self) {}

    fn name(&self) -> &str;
}

/// Hook that ignores everything. Used by plain `update`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpHook;

impl InspectionHook for NoOpHook {
    fn name(&self) -> &str {
        "no_op"
    }
}
