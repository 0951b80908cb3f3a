//! # Collection State
//!
//! Owner of the fetched book collection, with last-resolved-wins fetch
//! sequencing.
//!
//! ## Why Sequencing?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                Stale Response Suppression                               │
//! │                                                                         │
//! │  t0: begin_fetch() ──► ticket #1 ──► request A (slow)                  │
//! │  t1: begin_fetch() ──► ticket #2 ──► request B (fast)                  │
//! │                                                                         │
//! │  t2: B resolves, apply(#2, books_B) ──► applied ✓                      │
//! │  t3: A resolves, apply(#1, books_A) ──► DROPPED (ticket older than     │
//! │                                          the latest applied one)       │
//! │                                                                         │
//! │  Nothing is cancelled; in-flight requests are simply allowed to        │
//! │  arrive and lose. The UI always ends on the freshest resolution.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The collection is owned here and mutated only through `apply`;
//! presentation consumers receive read-only views and compute pages via
//! the core view engine.

use tracing::{debug, info};

use bookstall_core::error::CoreResult;
use bookstall_core::types::{BookRecord, PageView, ViewConfig};
use bookstall_core::view;

use crate::api::CatalogClient;
use crate::error::ClientResult;

// =============================================================================
// Fetch Ticket
// =============================================================================

/// A monotonically increasing sequence number handed out per fetch.
///
/// Tickets order resolutions, not requests: whichever ticket applies last
/// must be the highest one applied so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

// =============================================================================
// Collection State
// =============================================================================

/// The last successfully applied collection plus fetch bookkeeping.
#[derive(Debug, Default)]
pub struct CollectionState {
    books: Vec<BookRecord>,
    issued: u64,
    last_applied: u64,
}

impl CollectionState {
    /// Creates an empty state; the view renders empty until the first
    /// fetch applies.
    pub fn new() -> Self {
        CollectionState::default()
    }

    /// Registers a new fetch and returns its ticket.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// Installs a resolved collection, unless a fresher one already won.
    ///
    /// Returns whether the books were applied. A dropped response is
    /// normal operation (an out-of-order resolution), not an error.
    pub fn apply(&mut self, ticket: FetchTicket, books: Vec<BookRecord>) -> bool {
        if ticket.0 <= self.last_applied {
            debug!(
                ticket = ticket.0,
                last_applied = self.last_applied,
                "dropping stale collection response"
            );
            return false;
        }

        info!(ticket = ticket.0, count = books.len(), "collection applied");
        self.books = books;
        self.last_applied = ticket.0;
        true
    }

    /// Begins a fetch, performs it, and applies the result.
    ///
    /// On a fetch failure the previously applied collection stays in
    /// place; the caller surfaces the error as a transient notice and
    /// keeps rendering what it has.
    pub async fn refresh(&mut self, client: &CatalogClient) -> ClientResult<bool> {
        let ticket = self.begin_fetch();
        let books = client.fetch_books().await?;
        Ok(self.apply(ticket, books))
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// The full unfiltered collection, read-only, in fetch order.
    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    /// True once any fetch has applied.
    pub fn is_loaded(&self) -> bool {
        self.last_applied > 0
    }

    /// Distinct categories over the unfiltered collection (filter options).
    pub fn categories(&self) -> Vec<String> {
        view::available_categories(&self.books)
    }

    /// Computes the visible page for the given configuration.
    pub fn view(&self, config: &ViewConfig) -> CoreResult<PageView> {
        view::compute_view(&self.books, config)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
