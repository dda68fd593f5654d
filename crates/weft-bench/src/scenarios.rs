//! Benchmark scenarios: configuration, scripted pointer and duration.
//!
//! 1. **Hanging sheet**: one layer, pointer far away, settles under gravity
//! 2. **Layered funnel**: five layers, idle pointer, corners linked
//! 3. **Pointer sweep**: five layers, pointer circling through the sheet

use serde::{Deserialize, Serialize};
use weft_sim::FabricConfig;
use weft_types::constants::DEFAULT_DT;
use weft_types::Vec2;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    HangingSheet,
    LayeredFunnel,
    PointerSweep,
}

impl ScenarioKind {
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::HangingSheet,
            ScenarioKind::LayeredFunnel,
            ScenarioKind::PointerSweep,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::HangingSheet => "hanging_sheet",
            ScenarioKind::LayeredFunnel => "layered_funnel",
            ScenarioKind::PointerSweep => "pointer_sweep",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// Scripted pointer motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerPath {
    /// Pointer parked at one spot.
    Fixed(Vec2),
    /// Pointer moving counter-clockwise on a circle, one lap per `period` seconds.
    Circle {
        center: Vec2,
        radius: f32,
        period: f32,
    },
}

impl PointerPath {
    /// A pointer no node will ever be near.
    pub fn parked() -> Self {
        PointerPath::Fixed(Vec2::splat(-1.0e6))
    }

    /// Circle through the middle of the sheet described by `config`, one
    /// lap every two seconds.
    pub fn sweep_for(config: &FabricConfig) -> Self {
        let extent = Vec2::new(
            config.grid_width.saturating_sub(1) as f32,
            config.grid_height.saturating_sub(1) as f32,
        ) * config.cell_size;
        PointerPath::Circle {
            center: extent * 0.5,
            radius: extent.x * 0.25,
            period: 2.0,
        }
    }

    pub fn position_at(&self, time: f64) -> Vec2 {
        match *self {
            PointerPath::Fixed(p) => p,
            PointerPath::Circle { center, radius, period } => {
                if period <= 0.0 {
                    return center + Vec2::new(radius, 0.0);
                }
                let phase = (time / f64::from(period)).fract() * std::f64::consts::TAU;
                center + Vec2::new(phase.cos() as f32, phase.sin() as f32) * radius
            }
        }
    }
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub config: FabricConfig,
    pub pointer: PointerPath,
    /// Number of ticks to simulate.
    pub ticks: u32,
    /// Tick length (seconds).
    pub dt: f32,
}

impl Scenario {
    /// Default lattice, one layer, two seconds at 60 ticks per second.
    pub fn hanging_sheet() -> Self {
        Self {
            kind: ScenarioKind::HangingSheet,
            config: FabricConfig::single_sheet(),
            pointer: PointerPath::parked(),
            ticks: 120,
            dt: DEFAULT_DT,
        }
    }

    /// Default five-layer stack with nothing disturbing it.
    pub fn layered_funnel() -> Self {
        Self {
            kind: ScenarioKind::LayeredFunnel,
            config: FabricConfig::default(),
            pointer: PointerPath::parked(),
            ticks: 120,
            dt: DEFAULT_DT,
        }
    }

    /// Five layers with the pointer circling the middle of the sheet for
    /// three seconds.
    pub fn pointer_sweep() -> Self {
        let config = FabricConfig::default();
        Self {
            kind: ScenarioKind::PointerSweep,
            pointer: PointerPath::sweep_for(&config),
            config,
            ticks: 180,
            dt: DEFAULT_DT,
        }
    }

    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::HangingSheet => Self::hanging_sheet(),
            ScenarioKind::LayeredFunnel => Self::layered_funnel(),
            ScenarioKind::PointerSweep => Self::pointer_sweep(),
        }
    }

    /// Replaces the fabric configuration, keeping pointer and duration.
    pub fn with_config(mut self, config: FabricConfig) -> Self {
        self.config = config;
        self
    }
}
