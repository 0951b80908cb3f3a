//! # Store Error Types
//!
//! Error types for the session persistence layer.
//!
//! ## Severity
//! Every error in this file is NON-FATAL by contract: a failed slot read
//! falls back to an empty cart, and a failed slot write leaves the
//! in-memory cart authoritative. The store logs these and keeps serving.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures of the session slot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend could not read or write the slot.
    #[error("Session storage failure for key '{key}': {reason}")]
    Storage { key: String, reason: String },

    /// The persisted value could not be serialized or parsed.
    /// On read this means a corrupt/incompatible slot; the store falls
    /// back to an empty cart rather than failing initialization.
    #[error("Cart slot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No usable session directory on this platform.
    #[error("No session directory available")]
    NoSessionDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::Storage {
            key: "cart".to_string(),
            reason: "disk full".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Session storage failure for key 'cart': disk full"
        );
    }
}
