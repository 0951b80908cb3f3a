//! # Catalog Browser
//!
//! Developer smoke tool: fetches the collection from a running catalog
//! store and prints the first page plus the filter options.
//!
//! ## Usage
//! ```bash
//! # Against the default store URL
//! cargo run -p bookstall-client --bin browse
//!
//! # Against a custom store
//! BOOKSTALL_API=http://localhost:5000/api/Bookstore \
//!     cargo run -p bookstall-client --bin browse
//! ```

use std::env;

use tracing_subscriber::EnvFilter;

use bookstall_client::{CatalogClient, CollectionState};
use bookstall_core::types::ViewConfig;

/// Collection URL of the catalog store the original frontend talks to.
const DEFAULT_API: &str = "http://localhost:7234/api/Bookstore";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let base_url = env::var("BOOKSTALL_API").unwrap_or_else(|_| DEFAULT_API.to_string());
    let client = CatalogClient::new(&base_url);
    let mut state = CollectionState::new();

    state.refresh(&client).await?;

    let categories = state.categories();
    println!("Catalog at {base_url}");
    println!("Categories: {}", categories.join(", "));

    let config = ViewConfig::default();
    let page = state.view(&config)?;
    println!(
        "Page 1 of {} ({} books total):",
        page.total_pages, page.total_count
    );
    for book in &page.page_items {
        println!(
            "  #{:<4} {:<30} {:<20} {}",
            book.book_id, book.title, book.author, book.price
        );
    }

    Ok(())
}
