//! Integration tests for weft-types.

use weft_types::constants;
use weft_types::{LayerId, NodeId, WeftError};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn node_id_index() {
    let id = NodeId(42);
    assert_eq!(id.index(), 42);
}

#[test]
fn layer_id_index() {
    let id = LayerId::from(3);
    assert_eq!(id.index(), 3);
}

#[test]
fn ids_are_serializable() {
    let id = NodeId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: NodeId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = WeftError::InvalidConfig("layer_count must be >= 1".into());
    assert!(err.to_string().contains("layer_count"));
}

#[test]
fn grid_error_display() {
    let err = WeftError::InvalidGrid { width: 0, height: 7 };
    assert_eq!(err.to_string(), "Invalid grid dimensions: 0x7");
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
    let err: WeftError = io.into();
    assert!(matches!(err, WeftError::Io(_)));
}

// ─── Constant Tests ───────────────────────────────────────────

#[test]
fn sheet_gravity_is_scaled() {
    assert!((constants::GRAVITY * constants::GRAVITY_SCALE - 49.0).abs() < 1e-4);
}
