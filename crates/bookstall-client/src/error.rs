//! # Client Error Types
//!
//! Error types for catalog store operations.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Client Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │    Transport    │  │     Status      │  │        Caller           │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Http (reqwest) │  │  Status{..}     │  │  IdMismatch             │ │
//! │  │  connect/decode │  │  NotFound(id)   │  │  (rejected before any   │ │
//! │  │  failures       │  │                 │  │   request is sent)      │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  All of these surface as user-visible transient messages; none may     │
//! │  propagate as an uncaught failure that halts the rendering loop.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for catalog store operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Failures at the catalog store boundary.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, body decode).
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("Catalog store answered {status}: {body}")]
    Status { status: u16, body: String },

    /// The requested record does not exist. Deletion of a missing record
    /// reports this too, not success.
    #[error("Book not found: {0}")]
    NotFound(i64),

    /// Update refused locally: the path id and the record's id disagree.
    /// The store would reject this as a caller error; we never send it.
    #[error("Id mismatch on update: path {path_id}, record {body_id}")]
    IdMismatch { path_id: i64, body_id: i64 },
}
