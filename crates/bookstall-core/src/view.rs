//! # Catalog View Engine
//!
//! Pure computation turning a fetched collection plus a [`ViewConfig`] into
//! the exact page of books to display.
//!
//! ## The Derived-State Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     computeView Pipeline                                │
//! │                                                                         │
//! │  Full collection (fetch order is arbitrary)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. FILTER   exact case-sensitive category match (or All)              │
//! │       │      └── total_count = size of the filtered set                │
//! │       ▼                                                                 │
//! │  2. SORT     by title, chosen direction, STABLE                        │
//! │       │      └── equal titles keep their filtered-set order            │
//! │       ▼                                                                 │
//! │  3. PAGINATE slice [(page-1)·size .. page·size]                        │
//! │              └── out-of-range page → empty slice, never an error       │
//! │                                                                         │
//! │  No hidden state, no side effects: safe to call on every render.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Caller Contract
//! The engine does not clamp `current_page`. The presentation layer resets
//! it to 1 whenever the filter or page size changes (see
//! [`ViewConfig::with_category`]); a page left dangling past the end simply
//! yields an empty page.

use crate::error::CoreResult;
use crate::types::{BookRecord, PageView, ViewConfig};
use crate::validation::validate_view_config;

// =============================================================================
// View Computation
// =============================================================================

/// Computes the visible page of books for the given configuration.
///
/// Deterministic and side-effect free. Returns an error only for
/// configurations the validation layer rejects (zero or disallowed page
/// size, zero page index); every data shape, including an empty
/// collection, computes cleanly.
///
/// ## Example
/// ```rust
/// use bookstall_core::types::{CategoryFilter, ViewConfig};
/// use bookstall_core::view::compute_view;
///
/// let config = ViewConfig {
///     category: CategoryFilter::Only("Fiction".into()),
///     ..ViewConfig::default()
/// };
/// let page = compute_view(&[], &config).unwrap();
/// assert_eq!(page.total_pages, 0);
/// ```
pub fn compute_view(books: &[BookRecord], config: &ViewConfig) -> CoreResult<PageView> {
    validate_view_config(config)?;

    // 1. Filter
    let filtered: Vec<&BookRecord> = books
        .iter()
        .filter(|book| config.category.matches(&book.category))
        .collect();
    let total_count = filtered.len();

    // 2. Sort (stable; equal titles preserve filtered order in both
    //    directions, so the direction flips the comparator, never the Vec)
    let mut sorted = filtered;
    sorted.sort_by(|a, b| {
        let ord = title_key(a).cmp(&title_key(b));
        if config.sort_ascending {
            ord
        } else {
            ord.reverse()
        }
    });

    // 3. Paginate
    let page_size = config.page_size as usize;
    let total_pages = (total_count.div_ceil(page_size)) as u32;
    let offset = (config.current_page as usize - 1).saturating_mul(page_size);
    let page_items: Vec<BookRecord> = sorted
        .into_iter()
        .skip(offset)
        .take(page_size)
        .cloned()
        .collect();

    Ok(PageView {
        page_items,
        total_count,
        total_pages,
    })
}

/// Case-folded sort key for titles.
///
/// Full locale collation is not carried here; lowercase folding gives the
/// caseless ordering users expect from the original `localeCompare` UI
/// without an ICU dependency. Identical titles produce identical keys, so
/// the stable sort leaves their relative order untouched.
fn title_key(book: &BookRecord) -> String {
    book.title.to_lowercase()
}

// =============================================================================
// Category Derivation
// =============================================================================

/// Returns the distinct category values across the *unfiltered* collection,
/// sorted and deduplicated.
///
/// Always derive this from the full collection: deriving it from a filtered
/// one would shrink the filter options after a filter is applied.
pub fn available_categories(books: &[BookRecord]) -> Vec<String> {
    let mut categories: Vec<String> = books.iter().map(|book| book.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}

// =============================================================================
// Unit Tests
// =============================================================================
