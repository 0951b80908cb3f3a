//! # Cart
//!
//! The cart value type and its invariants. Pure data: persistence and
//! session ownership live in `bookstall-session`, which wraps this type.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart State Operations                              │
//! │                                                                         │
//! │  User Action              Operation               State Change          │
//! │  ───────────              ─────────               ────────────          │
//! │                                                                         │
//! │  Click "Add to Cart" ───► add(book) ────────────► qty += 1 or append   │
//! │                                                                         │
//! │  Change quantity ───────► set_quantity(id, n) ──► qty = max(1, n)      │
//! │                                                                         │
//! │  Click remove ──────────► remove(id) ───────────► entry deleted        │
//! │                                                                         │
//! │  Click clear ───────────► clear() ──────────────► entries emptied      │
//! │                                                                         │
//! │  Render cart ───────────► entries()/total() ────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one entry per `book_id` (adding the same book bumps quantity)
//! - Quantity is never below 1; removal goes through `remove`, not qty 0
//! - Insertion order is preserved (first-added entry renders first)

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Price;
use crate::types::BookRecord;

// =============================================================================
// Cart Entry
// =============================================================================

/// A book snapshot plus a quantity, keyed by `book_id`.
///
/// ## Snapshot Semantics
/// The book fields are frozen at the moment of addition and never refreshed
/// from the catalog: if the store edits a record afterwards, the cart keeps
/// showing what the shopper put in it. Only `quantity` is ever mutated.
///
/// ## Wire Format
/// `book` is flattened, so the persisted object is the flat shape the
/// session slot expects:
/// `{"bookId": 1, "title": "...", ..., "price": 12.99, "quantity": 2}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartEntry {
    /// Frozen copy of the book at addition time.
    #[serde(flatten)]
    pub book: BookRecord,

    /// Number of copies in the cart. Always >= 1.
    pub quantity: i64,
}

impl CartEntry {
    /// Creates an entry from a book snapshot with quantity 1.
    pub fn from_book(book: &BookRecord) -> Self {
        CartEntry {
            book: book.clone(),
            quantity: 1,
        }
    }

    /// The line total (unit price × quantity).
    pub fn line_total(&self) -> Price {
        self.book.price.times(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// An ordered collection of cart entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            entries: Vec::new(),
        }
    }

    /// Builds a cart from already-validated entries (slot restoration).
    pub fn from_entries(entries: Vec<CartEntry>) -> Self {
        Cart { entries }
    }

    /// Adds a book to the cart.
    ///
    /// ## Behavior
    /// - Book already present: quantity += 1, snapshot fields untouched
    /// - Book not present: appended with quantity 1
    ///
    /// Post-condition either way: exactly one entry for that `book_id`,
    /// insertion order otherwise unchanged.
    pub fn add(&mut self, book: &BookRecord) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.book.book_id == book.book_id)
        {
            entry.quantity += 1;
            return;
        }

        self.entries.push(CartEntry::from_book(book));
    }

    /// Removes the entry with the given id. No-op (not an error) if absent.
    pub fn remove(&mut self, book_id: i64) {
        self.entries.retain(|e| e.book.book_id != book_id);
    }

    /// Sets the quantity for an entry, clamped to a floor of 1.
    ///
    /// Quantity cannot be driven below 1 through this operation; removing
    /// an item goes through [`Cart::remove`]. No-op if the id is absent.
    pub fn set_quantity(&mut self, book_id: i64, quantity: i64) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.book.book_id == book_id) {
            entry.quantity = quantity.max(1);
        }
    }

    /// Empties the cart entirely.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The entries in insertion order, read-only.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Looks up an entry by book id.
    pub fn get(&self, book_id: i64) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.book.book_id == book_id)
    }

    /// Sum of all line totals. Exact in cents; rounding is display-only.
    pub fn total(&self) -> Price {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Number of distinct entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Total quantity across entries (the cart-badge number).
    pub fn total_quantity(&self) -> i64 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
