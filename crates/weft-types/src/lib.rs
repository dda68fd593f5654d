//! # weft-types
//!
//! Shared types, identifiers, error types, and simulation defaults
//! for the weft fabric simulation.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that all other weft crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{WeftError, WeftResult};
pub use ids::{LayerId, NodeId};
pub use scalar::Scalar;

// glam is the canonical 2D vector type for node positions.
pub use glam::Vec2;
