//! Simulation configuration.
//!
//! Every knob of the fabric: lattice shape, layer stack, damping,
//! relaxation, pointer interaction and history depth. Loadable from
//! TOML; missing keys fall back to the defaults in
//! [`weft_types::constants`].

use serde::{Deserialize, Serialize};
use weft_types::constants::{
    DEFAULT_CELL_SIZE, DEFAULT_DAMPING, DEFAULT_FORCE_RADIUS, DEFAULT_FORCE_STRENGTH,
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_HISTORY_CAPACITY, DEFAULT_LAYER_COUNT,
    DEFAULT_LAYER_DEPTH_OFFSET, DEFAULT_SOLVER_ITERATIONS, GRAVITY, GRAVITY_SCALE,
    RELAXATION_EPSILON,
};
use weft_types::{LayerId, Vec2, WeftError, WeftResult};

use crate::force::ForceField;
use crate::grid::GridLayout;
use crate::integrator::Integrator;
use crate::solver::ConstraintSolver;

/// Configuration for a [`MultiLayerCoordinator`](crate::MultiLayerCoordinator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FabricConfig {
    /// Node columns per layer.
    pub grid_width: usize,

    /// Node rows per layer.
    pub grid_height: usize,

    /// Lattice spacing between adjacent nodes.
    pub cell_size: f32,

    /// Number of stacked layers. Layer 0 is the front layer.
    pub layer_count: usize,

    /// Vertical offset added per layer index at layout time.
    pub layer_depth_offset: f32,

    /// Fraction of implicit velocity kept each tick (0.0–1.0).
    pub damping: f32,

    /// Relaxation passes over the constraint list per tick.
    pub solver_iterations: u32,

    /// Pointer interaction radius.
    pub force_radius: f32,

    /// Pointer interaction strength before per-layer attenuation.
    pub force_strength: f32,

    /// Number of past pointer positions kept for layer lag.
    pub history_capacity: usize,

    /// Constant acceleration [gx, gy]. Positive y points down the screen.
    pub gravity: [f32; 2],

    /// Pin every node of row 0 at layout time.
    pub pin_top_row: bool,

    /// Constraints shorter than this are skipped during relaxation.
    pub relaxation_epsilon: f32,
}

impl Default for FabricConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            layer_count: DEFAULT_LAYER_COUNT,
            layer_depth_offset: DEFAULT_LAYER_DEPTH_OFFSET,
            damping: DEFAULT_DAMPING,
            solver_iterations: DEFAULT_SOLVER_ITERATIONS,
            force_radius: DEFAULT_FORCE_RADIUS,
            force_strength: DEFAULT_FORCE_STRENGTH,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            gravity: [0.0, GRAVITY * GRAVITY_SCALE],
            pin_top_row: true,
            relaxation_epsilon: RELAXATION_EPSILON,
        }
    }
}

impl FabricConfig {
    /// A single sheet with the default lattice.
    pub fn single_sheet() -> Self {
        Self {
            layer_count: 1,
            ..Default::default()
        }
    }

    /// Small lattice for tests and quick previews.
    pub fn preview() -> Self {
        Self {
            grid_width: 10,
            grid_height: 10,
            layer_count: 3,
            ..Default::default()
        }
    }

    /// Rejects configurations that cannot produce a well-formed fabric.
    pub fn validate(&self) -> WeftResult<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(WeftError::InvalidGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        let node_count = self.grid_width.checked_mul(self.grid_height);
        if node_count.and_then(|n| u32::try_from(n).ok()).is_none() {
            return Err(WeftError::InvalidConfig(format!(
                "Grid of {}x{} nodes exceeds the addressable node count",
                self.grid_width, self.grid_height
            )));
        }
        if self.layer_count == 0 {
            return Err(WeftError::InvalidConfig(
                "layer_count must be >= 1".into(),
            ));
        }
        if u16::try_from(self.layer_count).is_err() {
            return Err(WeftError::InvalidConfig(format!(
                "layer_count {} exceeds {}",
                self.layer_count,
                u16::MAX
            )));
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(WeftError::InvalidConfig(format!(
                "cell_size must be positive and finite, got {}",
                self.cell_size
            )));
        }
        if !self.layer_depth_offset.is_finite() || self.layer_depth_offset < 0.0 {
            return Err(WeftError::InvalidConfig(format!(
                "layer_depth_offset must be non-negative, got {}",
                self.layer_depth_offset
            )));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(WeftError::InvalidConfig(format!(
                "damping must be in [0, 1], got {}",
                self.damping
            )));
        }
        if !self.force_radius.is_finite() || self.force_radius < 0.0 {
            return Err(WeftError::InvalidConfig(format!(
                "force_radius must be non-negative, got {}",
                self.force_radius
            )));
        }
        if !self.force_strength.is_finite() {
            return Err(WeftError::InvalidConfig(
                "force_strength must be finite".into(),
            ));
        }
        if self.history_capacity == 0 {
            return Err(WeftError::InvalidConfig(
                "history_capacity must be >= 1".into(),
            ));
        }
        if !self.gravity.iter().all(|g| g.is_finite()) {
            return Err(WeftError::InvalidConfig(
                "gravity must be finite".into(),
            ));
        }
        if !self.relaxation_epsilon.is_finite() || self.relaxation_epsilon < 0.0 {
            return Err(WeftError::InvalidConfig(
                "relaxation_epsilon must be non-negative".into(),
            ));
        }
        Ok(())
    }

    /// Lattice layout for the given layer.
    pub fn grid_layout(&self, layer: LayerId) -> GridLayout {
        GridLayout {
            width: self.grid_width,
            height: self.grid_height,
            cell_size: self.cell_size,
            depth_offset: layer.index() as f32 * self.layer_depth_offset,
            pin_top_row: self.pin_top_row,
        }
    }

    pub fn gravity_vec(&self) -> Vec2 {
        Vec2::from(self.gravity)
    }

    pub fn integrator(&self) -> Integrator {
        Integrator::new(self.damping, self.gravity_vec())
    }

    pub fn force_field(&self) -> ForceField {
        ForceField::new(self.force_radius, self.force_strength)
    }

    pub fn solver(&self) -> ConstraintSolver {
        ConstraintSolver::new(self.solver_iterations, self.relaxation_epsilon)
    }
}
