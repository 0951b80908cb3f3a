//! # Cart Store
//!
//! The stateful owner of cart contents. Wraps the pure `Cart` from
//! bookstall-core and persists it after every mutation.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Store Lifecycle                              │
//! │                                                                         │
//! │  open(storage)                                                         │
//! │       │                                                                 │
//! │       ├── slot "cart" present & parses ──► restored Cart               │
//! │       ├── slot absent ───────────────────► empty Cart                  │
//! │       └── slot corrupt ──────────────────► warn! + empty Cart          │
//! │                                            (never fails init)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  add_to_cart / remove_from_cart / update_quantity / clear_cart         │
//! │       │                                                                 │
//! │       └── each mutation ──► persist slot "cart"                        │
//! │                                  │                                      │
//! │                                  └── write fails ──► warn! and carry   │
//! │                                      on (memory stays authoritative)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single Logical Thread
//! The browsing runtime is event-driven and single-threaded: every
//! operation runs to completion before the next event, so the store itself
//! needs no locking. [`SharedCartStore`] exists for hosts whose UI plumbing
//! wants a cloneable handle; it is a convenience wrapper, not a
//! concurrency requirement.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use bookstall_core::types::BookRecord;
use bookstall_core::{Cart, CartEntry, Price};

use crate::storage::SessionStorage;
use crate::CART_STORAGE_KEY;

// =============================================================================
// Cart Store
// =============================================================================

/// Owns the cart for one browsing session.
///
/// ## Usage
/// ```rust
/// use bookstall_session::{CartStore, MemoryStorage};
///
/// let mut store = CartStore::open(Box::new(MemoryStorage::new()));
/// assert!(store.cart().is_empty());
/// ```
pub struct CartStore {
    cart: Cart,
    storage: Box<dyn SessionStorage + Send>,
}

impl CartStore {
    /// Opens the store, restoring any previously persisted cart.
    ///
    /// Restoration is forgiving by contract: a missing slot starts empty, a
    /// corrupt or incompatible slot logs a warning and starts empty. Opening
    /// never fails because of the slot's content.
    pub fn open(storage: Box<dyn SessionStorage + Send>) -> Self {
        let cart = match storage.get(CART_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartEntry>>(&raw) {
                Ok(entries) => {
                    debug!(entries = entries.len(), "restored cart from session slot");
                    Cart::from_entries(entries)
                }
                Err(e) => {
                    warn!(error = %e, "cart slot is corrupt; starting with an empty cart");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "cart slot unreadable; starting with an empty cart");
                Cart::new()
            }
        };

        CartStore { cart, storage }
    }

    // -------------------------------------------------------------------------
    // Mutations (each persists)
    // -------------------------------------------------------------------------

    /// Adds a book: bumps the quantity if the id is already present,
    /// otherwise appends a new entry with quantity 1.
    pub fn add_to_cart(&mut self, book: &BookRecord) {
        self.cart.add(book);
        self.persist();
    }

    /// Removes the entry with the given id; no-op if absent.
    pub fn remove_from_cart(&mut self, book_id: i64) {
        self.cart.remove(book_id);
        self.persist();
    }

    /// Sets an entry's quantity, floored at 1; no-op if absent.
    pub fn update_quantity(&mut self, book_id: i64, quantity: i64) {
        self.cart.set_quantity(book_id, quantity);
        self.persist();
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist();
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Read-only view of the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Sum of all line totals.
    pub fn total(&self) -> Price {
        self.cart.total()
    }

    /// Number of distinct entries.
    pub fn entry_count(&self) -> usize {
        self.cart.entry_count()
    }

    /// Total quantity across entries (cart badge).
    pub fn total_quantity(&self) -> i64 {
        self.cart.total_quantity()
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    /// Serializes the full cart into the session slot.
    ///
    /// Best-effort: a failed write (quota, disk, permissions) is logged and
    /// swallowed. The in-memory cart remains the source of truth and the UI
    /// keeps functioning.
    fn persist(&mut self) {
        let payload = match serde_json::to_string(self.cart.entries()) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "cart serialization failed; slot left stale");
                return;
            }
        };

        if let Err(e) = self.storage.set(CART_STORAGE_KEY, &payload) {
            warn!(error = %e, "cart slot write failed; in-memory cart stays authoritative");
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("entries", &self.cart.entry_count())
            .finish()
    }
}

// =============================================================================
// Shared Handle
// =============================================================================

/// A cloneable handle to the single per-session cart store.
///
/// ## Why a handle?
/// The original app exposed the cart as ambient context reachable from any
/// presentation node. Re-architected, consumers receive this handle
/// explicitly (dependency injection) while the "one cart instance per
/// session" semantic is preserved by cloning the handle, never the store.
#[derive(Clone, Debug)]
pub struct SharedCartStore {
    inner: Arc<Mutex<CartStore>>,
}

impl SharedCartStore {
    /// Wraps a freshly opened store in a shared handle.
    pub fn new(store: CartStore) -> Self {
        SharedCartStore {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a closure with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let badge = shared.with_store(|s| s.total_quantity());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartStore) -> R,
    {
        let store = self.inner.lock().expect("Cart store mutex poisoned");
        f(&store)
    }

    /// Executes a closure with write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        let mut store = self.inner.lock().expect("Cart store mutex poisoned");
        f(&mut store)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use crate::{StoreError, StoreResult};
    use bookstall_core::Price;
    use tempfile::TempDir;

    fn book(id: i64, title: &str, cents: i64) -> BookRecord {
        BookRecord {
            book_id: id,
            title: title.to_string(),
            author: "Author".to_string(),
            publisher: "Press".to_string(),
            isbn: format!("isbn-{id}"),
            classification: "TEST".to_string(),
            category: "Fiction".to_string(),
            page_count: 150,
            price: Price::from_cents(cents),
        }
    }

    #[test]
    fn test_scenario_add_twice_then_other() {
        let mut store = CartStore::open(Box::new(MemoryStorage::new()));
        let a = book(1, "A", 1299);
        let b = book(2, "B", 499);

        store.add_to_cart(&a);
        store.add_to_cart(&a);
        store.add_to_cart(&b);

        let entries = store.cart().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].book.book_id, 1);
        assert_eq!(entries[0].quantity, 2);
        assert_eq!(entries[1].book.book_id, 2);
        assert_eq!(entries[1].quantity, 1);
        // 2 × $12.99 + $4.99
        assert_eq!(store.total(), Price::from_cents(3097));
    }

    #[test]
    fn test_update_quantity_floor_and_missing_id() {
        let mut store = CartStore::open(Box::new(MemoryStorage::new()));
        store.add_to_cart(&book(1, "A", 100));

        store.update_quantity(1, 0);
        assert_eq!(store.cart().get(1).unwrap().quantity, 1);

        store.update_quantity(7, 5); // absent id: no-op
        assert_eq!(store.entry_count(), 1);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut store = CartStore::open(Box::new(MemoryStorage::new()));
        store.add_to_cart(&book(1, "A", 100));

        store.remove_from_cart(404);
        assert_eq!(store.entry_count(), 1);
    }

    #[test]
    fn test_round_trip_through_file_slot() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("session");

        {
            let storage = FileStorage::new(&dir).unwrap();
            let mut store = CartStore::open(Box::new(storage));
            store.add_to_cart(&book(1, "A", 1299));
            store.add_to_cart(&book(1, "A", 1299));
            store.add_to_cart(&book(2, "B", 499));
            store.update_quantity(2, 4);
        }

        // "Reload": a fresh store over the same session directory
        let storage = FileStorage::new(&dir).unwrap();
        let store = CartStore::open(Box::new(storage));

        let entries = store.cart().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].book.title, "A");
        assert_eq!(entries[0].quantity, 2);
        assert_eq!(entries[1].book.title, "B");
        assert_eq!(entries[1].quantity, 4);
    }

    #[test]
    fn test_corrupt_slot_falls_back_to_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(CART_STORAGE_KEY, "{not json").unwrap();

        let store = CartStore::open(Box::new(storage));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_incompatible_slot_falls_back_to_empty() {
        let mut storage = MemoryStorage::new();
        // Valid JSON, wrong shape
        storage
            .set(CART_STORAGE_KEY, r#"{"version": 2, "items": []}"#)
            .unwrap();

        let store = CartStore::open(Box::new(storage));
        assert!(store.cart().is_empty());
    }

    /// Backend that accepts reads but refuses every write.
    struct ReadOnlyStorage;

    impl SessionStorage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Storage {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }

        fn remove(&mut self, _key: &str) -> StoreResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_keeps_memory_authoritative() {
        let mut store = CartStore::open(Box::new(ReadOnlyStorage));

        store.add_to_cart(&book(1, "A", 100));
        store.add_to_cart(&book(1, "A", 100));

        // The failed persist did not disturb the in-memory cart
        assert_eq!(store.cart().get(1).unwrap().quantity, 2);
    }

    #[test]
    fn test_shared_handle_sees_one_store() {
        let shared = SharedCartStore::new(CartStore::open(Box::new(MemoryStorage::new())));
        let clone = shared.clone();

        shared.with_store_mut(|s| s.add_to_cart(&book(1, "A", 250)));
        assert_eq!(clone.with_store(|s| s.total_quantity()), 1);
    }

    #[test]
    fn test_clear_cart_persists_empty_slot() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("session");

        {
            let storage = FileStorage::new(&dir).unwrap();
            let mut store = CartStore::open(Box::new(storage));
            store.add_to_cart(&book(1, "A", 100));
            store.clear_cart();
        }

        let storage = FileStorage::new(&dir).unwrap();
        let store = CartStore::open(Box::new(storage));
        assert!(store.cart().is_empty());
    }
}
