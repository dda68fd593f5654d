//! Benchmark metrics collected during a run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    pub scenario: String,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    pub ticks: u32,
    /// Average wall-clock time per tick (seconds).
    pub avg_tick_time: f64,
    pub min_tick_time: f64,
    pub max_tick_time: f64,
    /// Largest relative constraint deviation of the last tick, over all layers.
    pub final_max_strain: f32,
    /// Largest relative constraint deviation seen during the run.
    pub peak_strain: f32,
    /// Largest node displacement from its initial position.
    pub max_displacement: f32,
    pub layer_count: usize,
    pub node_count: usize,
    pub constraint_count: usize,
}

impl BenchmarkMetrics {
    pub fn to_csv_header() -> String {
        "scenario,layer_count,node_count,constraint_count,ticks,total_wall_time_s,avg_tick_ms,min_tick_ms,max_tick_ms,final_max_strain,peak_strain,max_displacement".to_string()
    }

    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.6e},{:.6e},{:.4}",
            self.scenario,
            self.layer_count,
            self.node_count,
            self.constraint_count,
            self.ticks,
            self.total_wall_time,
            self.avg_tick_time * 1000.0,
            self.min_tick_time * 1000.0,
            self.max_tick_time * 1000.0,
            self.final_max_strain,
            self.peak_strain,
            self.max_displacement,
        )
    }

    /// Header plus one row per metrics entry.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
