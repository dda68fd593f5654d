//! Hook that turns tick lifecycle calls into telemetry events.

use weft_sim::{InspectionHook, RelaxationReport};
use weft_telemetry::events::{EventKind, SimulationEvent};
use weft_telemetry::EventBus;
use weft_types::LayerId;

/// Collects [`SimulationEvent`]s from the coordinator's hook calls.
///
/// Events are buffered until [`drain_events`](Self::drain_events) or
/// [`forward_to`](Self::forward_to) is called, so the hook itself stays
/// `Send` and free of sink state.
#[derive(Debug, Default)]
pub struct TelemetryHook {
    events: Vec<SimulationEvent>,
    last_tick: u32,
}

impl TelemetryHook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain_events(&mut self) -> Vec<SimulationEvent> {
        std::mem::take(&mut self.events)
    }

    /// Moves buffered events onto `bus`. Does not flush the bus.
    pub fn forward_to(&mut self, bus: &EventBus) {
        bus.emit_all(self.drain_events());
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }
}

impl InspectionHook for TelemetryHook {
    fn on_tick_begin(&mut self, tick: u32, sim_time: f64) {
        self.last_tick = tick;
        self.events
            .push(SimulationEvent::new(tick, EventKind::TickBegin { sim_time }));
    }

    fn on_layer_relaxed(&mut self, tick: u32, layer: LayerId, report: &RelaxationReport) {
        self.events.push(SimulationEvent::new(
            tick,
            EventKind::Relaxation {
                layer: layer.0,
                iterations: report.iterations,
                degenerate: report.degenerate,
                max_strain: report.max_strain,
            },
        ));
    }

    fn on_corners_synced(&mut self, tick: u32, corners: usize) {
        self.events.push(SimulationEvent::new(
            tick,
            EventKind::CornerSync { corners: corners as u32 },
        ));
    }

    fn on_tick_end(&mut self, tick: u32, wall_time: f64) {
        self.events
            .push(SimulationEvent::new(tick, EventKind::TickEnd { wall_time }));
    }

    fn on_reset(&mut self) {
        self.events.push(SimulationEvent::new(self.last_tick, EventKind::Reset));
        self.last_tick = 0;
    }

    fn name(&self) -> &str {
        "telemetry_hook"
    }
}
