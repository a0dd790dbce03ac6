//! Error types for dashboard operations.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Failures raised by a [`Store`](crate::infrastructure::store::Store) backend.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreError {
    #[error("storage quota exceeded ({needed} bytes needed, {quota} allowed)")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("storage I/O error: {0}")]
    Io(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e.to_string())
    }
}

/// Errors surfaced by the dashboard's data layer and widgets.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardError {
    /// A required field was empty.
    #[error("{0}")]
    Validation(String),

    #[error("no link at index {index} (list has {len})")]
    Index { index: usize, len: usize },

    /// Request failed, returned a non-success status, or timed out.
    #[error("network error: {0}")]
    Network(String),

    /// Response parsed as JSON but lacked an expected field.
    #[error("unexpected response shape: {0}")]
    Shape(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl DashboardError {
    pub fn is_validation(&self) -> bool {
        matches!(self, DashboardError::Validation(_))
    }
}

/// Deserialize `value` into `T`, reporting any mismatch as a shape error.
pub fn decode<T: DeserializeOwned>(value: serde_json::Value, context: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| DashboardError::Shape(format!("{context}: {e}")))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Probe {
        name: String,
    }

    #[test]
    fn test_decode_ok() -> Result<()> {
        let probe: Probe = decode(json!({"name": "x", "extra": 1}), "probe")?;
        assert_eq!(probe, Probe { name: "x".into() });
        Ok(())
    }

    #[test]
    fn test_decode_missing_field_is_shape_error() {
        let err = decode::<Probe>(json!({"other": 1}), "probe").unwrap_err();
        match err {
            DashboardError::Shape(msg) => assert!(msg.starts_with("probe:")),
            other => panic!("expected shape error, got {other:?}"),
        }
    }

    #[test]
    fn test_store_error_converts() {
        let err: DashboardError = StoreError::QuotaExceeded {
            needed: 10,
            quota: 5,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "storage quota exceeded (10 bytes needed, 5 allowed)"
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(DashboardError::Validation("x".into()).is_validation());
        assert!(!DashboardError::Network("x".into()).is_validation());
    }
}
