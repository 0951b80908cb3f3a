//! # Domain Types
//!
//! Core domain types used throughout Bookstall.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   BookRecord    │   │   ViewConfig    │   │    PageView     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  book_id (i64)  │   │  category       │   │  page_items     │       │
//! │  │  title, author  │   │  sort_ascending │   │  total_count    │       │
//! │  │  category       │   │  current_page   │   │  total_pages    │       │
//! │  │  price (Price)  │   │  page_size      │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │ CategoryFilter  │   All | Only("Fiction")                           │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership Rules
//! BookRecords are created, mutated and destroyed exclusively by the
//! external catalog store; this crate only ever holds read-only copies
//! fetched at a point in time (a render cycle, or a cart snapshot).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Price;

// =============================================================================
// Book Record
// =============================================================================

/// A catalog entry describing one book.
///
/// ## Identity
/// `book_id` is assigned by the external catalog store and immutable once
/// created. Every other field is a plain attribute.
///
/// ## Wire Format
/// Serialized with camelCase keys to match the catalog store's JSON:
/// `{"bookId": 1, "title": "...", ..., "pageCount": 320, "price": 12.99}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BookRecord {
    /// Unique identifier, assigned by the catalog store.
    pub book_id: i64,

    /// Display title. Also the sort key for the view engine.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Publisher name.
    pub publisher: String,

    /// ISBN as printed (not validated here).
    pub isbn: String,

    /// Library classification code.
    pub classification: String,

    /// Category used by the filter. Matched exactly, case-sensitive.
    pub category: String,

    /// Number of pages (non-negative).
    pub page_count: u32,

    /// Unit price. Decimal on the wire, cents in memory.
    pub price: Price,
}

// =============================================================================
// Category Filter
// =============================================================================

/// The category selection applied to the collection.
///
/// ## Why an enum?
/// The original UI used a magic `"All"` string as the no-filter sentinel.
/// An enum makes the sentinel unrepresentable as a real category name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
#[ts(export)]
pub enum CategoryFilter {
    /// No filter: every record passes.
    #[default]
    All,

    /// Keep only records whose `category` equals this value exactly
    /// (case-sensitive, no trimming).
    Only(String),
}

impl CategoryFilter {
    /// Checks whether a record with the given category passes the filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

// =============================================================================
// View Config
// =============================================================================

/// The filter/sort/pagination parameters chosen by the user.
///
/// ## Ownership
/// Owned by the presentation layer and handed to the view engine as a pure
/// input. The caller keeps `current_page` valid: reset it to 1 whenever the
/// filter or page size changes, since the filtered set may shrink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ViewConfig {
    /// Category filter (`All` means no filter).
    pub category: CategoryFilter,

    /// Sort direction for the title sort.
    pub sort_ascending: bool,

    /// 1-based page index.
    pub current_page: u32,

    /// Books per page. Must be one of [`crate::PAGE_SIZE_CHOICES`].
    pub page_size: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            category: CategoryFilter::All,
            sort_ascending: true,
            current_page: 1,
            page_size: crate::DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewConfig {
    /// Returns a copy with the filter replaced and the page reset to 1.
    pub fn with_category(&self, category: CategoryFilter) -> Self {
        ViewConfig {
            category,
            current_page: 1,
            ..self.clone()
        }
    }

    /// Returns a copy with the page size replaced and the page reset to 1.
    pub fn with_page_size(&self, page_size: u32) -> Self {
        ViewConfig {
            page_size,
            current_page: 1,
            ..self.clone()
        }
    }

    /// Returns a copy positioned on another page.
    pub fn with_page(&self, current_page: u32) -> Self {
        ViewConfig {
            current_page,
            ..self.clone()
        }
    }
}

// =============================================================================
// Page View
// =============================================================================

/// The computed page of books plus pagination metadata.
///
/// A fresh snapshot per render cycle; the presentation layer never mutates
/// it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PageView {
    /// The records visible on the current page, in display order.
    pub page_items: Vec<BookRecord>,

    /// Size of the filtered set (before pagination).
    pub total_count: usize,

    /// `ceil(total_count / page_size)`; 0 for an empty filtered set.
    pub total_pages: u32,
}

// =============================================================================
// Unit Tests
// =============================================================================
