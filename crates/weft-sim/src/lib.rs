//! # weft-sim
//!
//! Real-time fabric simulation: a lattice of point masses joined by
//! distance constraints, advanced by damped Verlet integration and
//! relaxed by Gauss-Seidel projection, stacked into several layers that
//! share a lagged pointer and synchronized corners.
//!
//! ## Key Types
//!
//! - [`NodeGrid`]: rectangular lattice of [`Node`]s, top row pinned
//! - [`ConstraintSet`]: structural distance constraints with fixed rest lengths
//! - [`ForceField`]: repulsive pointer nudge
//! - [`Integrator`]: inertia, damping and gravity
//! - [`ConstraintSolver`]: fixed-iteration relaxation
//! - [`FabricLayer`]: one independently steppable sheet
//! - [`MultiLayerCoordinator`]: the per-tick pipeline across all layers
//!
//! ## Tick pipeline
//!
//! ```text
//! history.push(pointer)
//! for each layer i:
//!     force(delayed pointer, attenuated strength) -> integrate -> relax x K
//! sync corners of every layer to layer 0
//! ```

pub mod config;
pub mod constraint;
pub mod coordinator;
pub mod force;
pub mod grid;
pub mod history;
pub mod hooks;
pub mod integrator;
pub mod layer;
pub mod node;
pub mod solver;

pub use config::FabricConfig;
pub use constraint::{Constraint, ConstraintKind, ConstraintSet};
pub use coordinator::MultiLayerCoordinator;
pub use force::ForceField;
pub use grid::{GridLayout, NodeGrid};
pub use history::PointerHistory;
pub use hooks::{InspectionHook, NoOpHook};
pub use integrator::Integrator;
pub use layer::FabricLayer;
pub use node::Node;
pub use solver::{ConstraintSolver, RelaxationReport};
