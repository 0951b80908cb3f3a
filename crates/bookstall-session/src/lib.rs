//! # bookstall-session: Cart Store for Bookstall
//!
//! Stateful owner of the shopping cart, with best-effort persistence to a
//! session-scoped key-value slot.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      bookstall-session                                  │
//! │                                                                         │
//! │  Presentation layer                                                    │
//! │       │  add / remove / set quantity / clear                           │
//! │       ▼                                                                 │
//! │  ┌─────────────┐   mutate    ┌──────────────┐   JSON    ┌───────────┐ │
//! │  │  CartStore  │ ──────────► │ Cart (core)  │ ────────► │  Session  │ │
//! │  │             │             │  invariants  │  "cart"   │  Storage  │ │
//! │  │  open()     │ ◄────────── │  enforced    │ ◄──────── │  slot     │ │
//! │  └─────────────┘   restore   └──────────────┘           └───────────┘ │
//! │                                                                         │
//! │  Persistence is fire-and-forget: a failed write logs a warning and    │
//! │  the in-memory cart remains the source of truth for the session.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`storage`] - `SessionStorage` trait plus memory and file backends
//! - [`store`] - `CartStore` (the Cart Store proper) and `SharedCartStore`
//! - [`error`] - store error types

pub mod error;
pub mod storage;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use store::{CartStore, SharedCartStore};

/// The single fixed key the cart is persisted under.
pub const CART_STORAGE_KEY: &str = "cart";
