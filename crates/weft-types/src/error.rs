//! Error types for the weft simulation.
//!
//! All crates return `WeftResult<T>` from fallible operations. The
//! per-tick physics path itself never fails; errors only surface at
//! configuration, accessor and I/O boundaries.

use thiserror::Error;

/// Unified error type for the weft simulation.
#[derive(Debug, Error)]
pub enum WeftError {
    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Grid dimensions cannot produce a lattice.
    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidGrid {
        width: usize,
        height: usize,
    },

    /// Node index is out of range for its layer.
    #[error("Node index {index} out of bounds (count: {count})")]
    NodeOutOfBounds {
        index: usize,
        count: usize,
    },

    /// Layer index is out of range for the coordinator.
    #[error("Layer index {index} out of bounds (count: {count})")]
    LayerOutOfBounds {
        index: usize,
        count: usize,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, WeftError>`.
pub type WeftResult<T> = Result<T, WeftError>;
