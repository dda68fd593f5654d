//! Simulation defaults.
//!
//! Units are screen units (pixels) and seconds. The y axis grows downward.

/// Default number of node columns per layer.
pub const DEFAULT_GRID_WIDTH: usize = 50;

/// Default number of node rows per layer.
pub const DEFAULT_GRID_HEIGHT: usize = 50;

/// Default lattice spacing between adjacent nodes.
pub const DEFAULT_CELL_SIZE: f32 = 20.0;

/// Default number of stacked fabric layers.
pub const DEFAULT_LAYER_COUNT: usize = 5;

/// Default vertical offset between consecutive layers.
pub const DEFAULT_LAYER_DEPTH_OFFSET: f32 = 5.0;

/// Default fraction of implicit velocity kept each tick.
pub const DEFAULT_DAMPING: f32 = 0.995;

/// Default number of relaxation passes per tick.
pub const DEFAULT_SOLVER_ITERATIONS: u32 = 5;

/// Default pointer interaction radius.
pub const DEFAULT_FORCE_RADIUS: f32 = 150.0;

/// Default pointer interaction strength.
pub const DEFAULT_FORCE_STRENGTH: f32 = 200.0;

/// Default pointer history capacity.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Base gravitational acceleration (screen units / s²).
pub const GRAVITY: f32 = 9.8;

/// Multiplier applied to [`GRAVITY`] to get the downward pull used by the sheet.
pub const GRAVITY_SCALE: f32 = 5.0;

/// Pointer strength lost across the full layer stack.
///
/// Layer `i` of `n` receives `1 - i * LAYER_FORCE_FALLOFF / n` of the strength.
pub const LAYER_FORCE_FALLOFF: f32 = 0.15;

/// Below this length a constraint is treated as degenerate and skipped.
pub const RELAXATION_EPSILON: f32 = 1.0e-6;

/// Default timestep used by scripted runs (seconds). 1/60th of a second.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;
