//! Simulation event types.
//!
//! Lightweight value types tagged with the tick they belong to.

use serde::{Deserialize, Serialize};

/// A simulation event emitted during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Tick number (0-indexed, restarts at reset).
    pub tick: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Tick started.
    TickBegin {
        /// Accumulated simulation time before this tick (seconds).
        sim_time: f64,
    },

    /// Tick completed.
    TickEnd {
        /// Wall-clock time for the whole tick (seconds).
        wall_time: f64,
    },

    /// A layer finished its relaxation passes.
    Relaxation {
        layer: u16,
        iterations: u32,
        /// Constraint visits skipped for coincident endpoints.
        degenerate: u32,
        /// Largest relative constraint deviation after relaxation.
        max_strain: f32,
    },

    /// Corner nodes of all layers were aligned to layer 0.
    CornerSync {
        corners: u32,
    },

    /// The fabric was rebuilt from scratch.
    Reset,

    /// Custom event for extensibility.
    Custom {
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    pub fn new(tick: u32, kind: EventKind) -> Self {
        Self { tick, kind }
    }
}
