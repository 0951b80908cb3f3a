//! # bookstall-client: Catalog Store Client for Bookstall
//!
//! Async HTTP boundary with the external catalog store, plus the
//! fetch-sequencing state that keeps a slow stale response from clobbering
//! a fresher one.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       bookstall-client                                  │
//! │                                                                         │
//! │  Presentation layer                                                    │
//! │       │ refresh / CRUD actions                                         │
//! │       ▼                                                                 │
//! │  ┌─────────────────┐  ticket   ┌─────────────────┐   HTTP   ┌────────┐ │
//! │  │ CollectionState │ ────────► │  CatalogClient  │ ───────► │Catalog │ │
//! │  │  last-applied   │           │  GET/POST/PUT/  │ ◄─────── │ store  │ │
//! │  │  sequencing     │ ◄──────── │  DELETE         │   JSON   │(extern)│ │
//! │  └─────────────────┘  apply?   └─────────────────┘          └────────┘ │
//! │                                                                         │
//! │  A fetch failure leaves the previously applied collection in place;   │
//! │  the caller surfaces a transient notice and keeps rendering.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`] - `CatalogClient`, the HTTP CRUD surface
//! - [`collection`] - `CollectionState`, last-resolved-wins fetch handling
//! - [`error`] - client error types

pub mod api;
pub mod collection;
pub mod error;

pub use api::CatalogClient;
pub use collection::{CollectionState, FetchTicket};
pub use error::{ClientError, ClientResult};
