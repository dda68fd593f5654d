//! # weft-debug
//!
//! Inspection hooks and state snapshots for debugging simulation issues.
//! Snapshots are diagnostic captures for offline inspection and diffing;
//! the simulation is never resumed from them.

pub mod hooks;
pub mod snapshot;

pub use hooks::TelemetryHook;
pub use snapshot::{LayerSnapshot, StateSnapshot};
