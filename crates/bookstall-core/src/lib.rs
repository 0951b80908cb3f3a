//! # bookstall-core: Pure Business Logic for Bookstall
//!
//! This crate is the **heart** of Bookstall. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bookstall Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation Layer (out of scope)               │   │
//! │  │    Book grid ──► Category filter ──► Pagination ──► Cart UI    │   │
//! │  └────────────┬────────────────────────────────────┬───────────────┘   │
//! │               │                                    │                    │
//! │  ┌────────────▼─────────────┐       ┌──────────────▼───────────────┐   │
//! │  │    bookstall-client      │       │      bookstall-session       │   │
//! │  │  Catalog HTTP CRUD +     │       │  Cart Store + durable slot   │   │
//! │  │  fetch sequencing        │       │                              │   │
//! │  └────────────┬─────────────┘       └──────────────┬───────────────┘   │
//! │               │                                    │                    │
//! │  ┌────────────▼────────────────────────────────────▼───────────────┐   │
//! │  │               ★ bookstall-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   view    │  │   cart    │  │   │
//! │  │   │BookRecord │  │   Price   │  │computeView│  │   Cart    │  │   │
//! │  │   │ViewConfig │  │           │  │categories │  │ CartEntry │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STORAGE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (BookRecord, ViewConfig, PageView, etc.)
//! - [`money`] - Price type with integer arithmetic (no floating point!)
//! - [`view`] - Catalog View Engine (filter, sort, paginate)
//! - [`cart`] - Cart value type and its invariants
//! - [`error`] - Domain error types
//! - [`validation`] - View configuration and input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system and storage access is FORBIDDEN here
//! 3. **Integer Money**: Prices are cents (i64) internally; decimal only on the wire
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bookstall_core::view::compute_view;
//! use bookstall_core::types::ViewConfig;
//!
//! let books = Vec::new();
//! let config = ViewConfig::default();
//!
//! let page = compute_view(&books, &config).unwrap();
//! assert_eq!(page.total_count, 0);
//! assert_eq!(page.total_pages, 0);
//! assert!(page.page_items.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bookstall_core::Price` instead of
// `use bookstall_core::money::Price`

pub use cart::{Cart, CartEntry};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Price;
pub use types::*;
pub use view::{available_categories, compute_view};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Page sizes the presentation layer may offer.
///
/// ## Why a fixed set?
/// The per-page selector exposes exactly these choices; anything else reaching
/// the view engine is a caller bug and is rejected during validation.
pub const PAGE_SIZE_CHOICES: [u32; 3] = [5, 10, 15];

/// Default number of books per page.
pub const DEFAULT_PAGE_SIZE: u32 = 5;
