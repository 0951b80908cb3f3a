//! # Error Types
//!
//! Domain-specific error types for bookstall-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookstall-core errors (this file)                                     │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bookstall-session errors (separate crate)                             │
//! │  └── StoreError       - Persistence slot failures                      │
//! │                                                                         │
//! │  bookstall-client errors (separate crate)                              │
//! │  └── ClientError      - Catalog store HTTP failures                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → user-visible message              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, allowed values, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent caller bugs or domain rule violations. They should
/// be caught and translated to user-friendly messages; none of them halts
/// the rendering loop.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The view engine was handed a configuration it refuses to compute with.
    ///
    /// ## When This Occurs
    /// - `page_size` of zero, or not one of the allowed choices
    /// - `current_page` of zero (pages are 1-based)
    ///
    /// This is a programming error at the call site, not a user error: the
    /// presentation layer constructs ViewConfig only from the fixed
    /// page-size choices.
    #[error("Invalid view configuration: {0}")]
    InvalidViewConfig(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a value doesn't meet requirements. Used for early
/// validation before domain logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is not in the allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
