//! Benchmark runner: drives a coordinator through a scenario and times it.

use std::time::Instant;

use weft_sim::{InspectionHook, MultiLayerCoordinator, Node, RelaxationReport};
use weft_types::{LayerId, WeftResult};

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Tracks relaxation strain across a run.
#[derive(Default)]
struct StrainProbe {
    tick_max: f32,
    last_tick_max: f32,
    peak: f32,
    tick_times: Vec<f64>,
}

impl InspectionHook for StrainProbe {
    fn on_tick_begin(&mut self, _tick: u32, _sim_time: f64) {
        self.tick_max = 0.0;
    }

    fn on_layer_relaxed(&mut self, _tick: u32, _layer: LayerId, report: &RelaxationReport) {
        self.tick_max = self.tick_max.max(report.max_strain);
    }

    fn on_tick_end(&mut self, _tick: u32, wall_time: f64) {
        self.last_tick_max = self.tick_max;
        self.peak = self.peak.max(self.tick_max);
        self.tick_times.push(wall_time);
    }

    fn name(&self) -> &str {
        "strain_probe"
    }
}

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    pub fn run(scenario: &Scenario) -> WeftResult<BenchmarkMetrics> {
        let mut fabric = MultiLayerCoordinator::new(scenario.config.clone())?;
        Self::run_on(scenario, &mut fabric)
    }

    /// Runs `scenario` on an already built fabric, starting from its
    /// current state.
    pub fn run_on(
        scenario: &Scenario,
        fabric: &mut MultiLayerCoordinator,
    ) -> WeftResult<BenchmarkMetrics> {
        let initial: Vec<Vec<Node>> = fabric.layers().iter().map(|l| l.nodes().to_vec()).collect();
        let mut probe = StrainProbe {
            tick_times: Vec::with_capacity(scenario.ticks as usize),
            ..Default::default()
        };

        tracing::info!(
            scenario = scenario.kind.name(),
            ticks = scenario.ticks,
            layers = fabric.layer_count(),
            "benchmark start"
        );
        let total_start = Instant::now();

        for _ in 0..scenario.ticks {
            let pointer = scenario.pointer.position_at(fabric.sim_time());
            fabric.update_with_hook(scenario.dt, pointer, &mut probe);
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();

        let max_displacement = fabric
            .layers()
            .iter()
            .zip(&initial)
            .flat_map(|(layer, start)| {
                layer
                    .nodes()
                    .iter()
                    .zip(start)
                    .map(|(now, then)| now.position.distance(then.position))
            })
            .fold(0.0f32, f32::max);

        let times = &probe.tick_times;
        let avg_tick_time = if times.is_empty() {
            0.0
        } else {
            times.iter().sum::<f64>() / times.len() as f64
        };
        let min_tick_time = times.iter().copied().fold(f64::INFINITY, f64::min);
        let max_tick_time = times.iter().copied().fold(0.0, f64::max);

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            total_wall_time,
            ticks: scenario.ticks,
            avg_tick_time,
            min_tick_time: if min_tick_time.is_finite() { min_tick_time } else { 0.0 },
            max_tick_time,
            final_max_strain: probe.last_tick_max,
            peak_strain: probe.peak,
            max_displacement,
            layer_count: fabric.layer_count(),
            node_count: fabric.node_count(),
            constraint_count: fabric.constraint_count(),
        })
    }

    pub fn run_all() -> WeftResult<Vec<BenchmarkMetrics>> {
        ScenarioKind::all()
            .iter()
            .map(|&kind| Self::run(&Scenario::from_kind(kind)))
            .collect()
    }
}
