//! # weft-telemetry
//!
//! Event bus for simulation telemetry. Emits structured events
//! (tick timing, relaxation strain, corner sync, resets) that are
//! consumed by pluggable sinks.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
