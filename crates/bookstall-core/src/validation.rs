//! # Validation Module
//!
//! Input validation utilities for Bookstall.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (TypeScript)                                    │
//! │  ├── Form format checks (empty, length)                                │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── ViewConfig sanity (page size, page index)                         │
//! │  └── Quantity/price rules before cart operations                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: External catalog store                                       │
//! │  └── Record-level constraints (id assignment, id match on update)      │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::ViewConfig;
use crate::PAGE_SIZE_CHOICES;

// =============================================================================
// View Configuration
// =============================================================================

/// Validates a page size against the fixed set of allowed values.
///
/// ## Rules
/// - Must be one of [`PAGE_SIZE_CHOICES`]
/// - Zero in particular is a caller error, never a silent divide-by-zero
///
/// ## Example
/// ```rust
/// use bookstall_core::validation::validate_page_size;
///
/// assert!(validate_page_size(5).is_ok());
/// assert!(validate_page_size(0).is_err());
/// assert!(validate_page_size(7).is_err());
/// ```
pub fn validate_page_size(page_size: u32) -> ValidationResult<()> {
    if !PAGE_SIZE_CHOICES.contains(&page_size) {
        return Err(ValidationError::NotAllowed {
            field: "page_size".to_string(),
            allowed: PAGE_SIZE_CHOICES.iter().map(u32::to_string).collect(),
        });
    }

    Ok(())
}

/// Validates a 1-based page index.
pub fn validate_page_number(current_page: u32) -> ValidationResult<()> {
    if current_page == 0 {
        return Err(ValidationError::MustBePositive {
            field: "current_page".to_string(),
        });
    }

    Ok(())
}

/// Validates a full view configuration before the engine computes with it.
pub fn validate_view_config(config: &ViewConfig) -> ValidationResult<()> {
    validate_page_size(config.page_size)?;
    validate_page_number(config.current_page)?;
    Ok(())
}

// =============================================================================
// Cart Inputs
// =============================================================================

/// Validates a quantity value for UI-driven quantity entry.
///
/// ## Note
/// The cart itself clamps quantities to a floor of 1 rather than erroring
/// (see [`crate::cart::Cart::set_quantity`]); this validator exists for
/// form inputs that want to reject bad values before they reach the cart.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_page_size() {
        for size in PAGE_SIZE_CHOICES {
            assert!(validate_page_size(size).is_ok());
        }
        // The per-page selector's exact options
        assert!(validate_page_size(5).is_ok());
        assert!(validate_page_size(10).is_ok());
        assert!(validate_page_size(15).is_ok());

        assert!(validate_page_size(0).is_err());
        assert!(validate_page_size(3).is_err());
        assert!(validate_page_size(20).is_err());
        assert!(validate_page_size(100).is_err());
    }

    #[test]
    fn test_validate_page_number() {
        assert!(validate_page_number(1).is_ok());
        assert!(validate_page_number(999).is_ok());
        assert!(validate_page_number(0).is_err());
    }

    #[test]
    fn test_validate_view_config() {
        let config = ViewConfig::default();
        assert!(validate_view_config(&config).is_ok());

        let bad = ViewConfig {
            page_size: 0,
            ..ViewConfig::default()
        };
        assert!(validate_view_config(&bad).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(50).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }
}
