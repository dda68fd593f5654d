//! # weft-bench
//!
//! Benchmark suite for the weft fabric simulation.
//!
//! Provides procedural scenarios with scripted pointer motion, a runner
//! that times every tick, and CSV/JSON export of the collected metrics.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{PointerPath, Scenario, ScenarioKind};
