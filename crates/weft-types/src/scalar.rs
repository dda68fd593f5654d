//! Scalar type alias for the simulation.

/// The floating-point type used throughout the simulation.
///
/// Matches the component type of [`glam::Vec2`].
pub type Scalar = f32;
