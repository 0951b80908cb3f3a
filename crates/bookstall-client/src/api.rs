//! # Catalog Client
//!
//! HTTP CRUD surface of the external catalog store.
//!
//! ## Endpoint Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Store Endpoints                            │
//! │                                                                         │
//! │  fetch_books()              GET    {base}                              │
//! │  fetch_books_by_category()  GET    {base}?category=<value>             │
//! │  fetch_book(id)             GET    {base}/{id}         404 → NotFound  │
//! │  add_book(record)           POST   {base}              id assigned     │
//! │  update_book(id, record)    PUT    {base}/{id}         id must match   │
//! │  delete_book(id)            DELETE {base}/{id}         404 → NotFound  │
//! │                                                                         │
//! │  The store owns the records; this client only ever carries read-only  │
//! │  snapshots in and full replacement records out.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//! Every failure is a typed value ([`ClientError`]); the presentation layer
//! converts it into a transient notice and leaves the previously rendered
//! collection alone (server-side filtering and retries are explicitly not
//! this client's business).

use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use bookstall_core::types::BookRecord;

use crate::error::{ClientError, ClientResult};

/// Client for the external catalog store.
///
/// ## Usage
/// ```rust,no_run
/// use bookstall_client::CatalogClient;
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let client = CatalogClient::new("http://localhost:7234/api/Bookstore");
/// let books = client.fetch_books().await?;
/// println!("{} books in the catalog", books.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Creates a client rooted at the collection base URL
    /// (the URL that serves the full collection on GET).
    pub fn new(base_url: impl Into<String>) -> Self {
        CatalogClient {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The collection base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Fetches the full ordered collection.
    ///
    /// This is the input to the view engine; all filtering, sorting and
    /// pagination happen client-side over this set.
    pub async fn fetch_books(&self) -> ClientResult<Vec<BookRecord>> {
        let response = self.client.get(&self.base_url).send().await?;
        let response = Self::expect_success(response).await?;
        let books: Vec<BookRecord> = response.json().await?;
        debug!(count = books.len(), "fetched collection");
        Ok(books)
    }

    /// Fetches the server-side filtered subset for one category.
    ///
    /// Convenience path only: the core computes its views over the
    /// unfiltered collection, and the category option list must also come
    /// from the unfiltered collection.
    pub async fn fetch_books_by_category(&self, category: &str) -> ClientResult<Vec<BookRecord>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("category", category)])
            .send()
            .await?;
        let response = Self::expect_success(response).await?;
        Ok(response.json().await?)
    }

    /// Fetches a single record by id.
    pub async fn fetch_book(&self, id: i64) -> ClientResult<BookRecord> {
        let response = self.client.get(self.record_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(id));
        }
        let response = Self::expect_success(response).await?;
        Ok(response.json().await?)
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Creates a record. The store ignores any id in the body and assigns
    /// its own; the returned record carries the assigned id.
    pub async fn add_book(&self, book: &BookRecord) -> ClientResult<BookRecord> {
        let response = self
            .client
            .post(&self.base_url)
            .json(book)
            .send()
            .await?;
        let response = Self::expect_success(response).await?;
        let created: BookRecord = response.json().await?;
        debug!(book_id = created.book_id, "created book");
        Ok(created)
    }

    /// Replaces the record at `id` with the given full record.
    ///
    /// A record whose id disagrees with the path is refused locally with
    /// [`ClientError::IdMismatch`] before any request goes out.
    pub async fn update_book(&self, id: i64, book: &BookRecord) -> ClientResult<()> {
        if book.book_id != id {
            return Err(ClientError::IdMismatch {
                path_id: id,
                body_id: book.book_id,
            });
        }

        let response = self
            .client
            .put(self.record_url(id))
            .json(book)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(id));
        }
        Self::expect_success(response).await?;
        debug!(book_id = id, "updated book");
        Ok(())
    }

    /// Deletes the record at `id`. A missing record reports
    /// [`ClientError::NotFound`], not success.
    pub async fn delete_book(&self, id: i64) -> ClientResult<()> {
        let response = self.client.delete(self.record_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(id));
        }
        Self::expect_success(response).await?;
        debug!(book_id = id, "deleted book");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Response Handling
    // -------------------------------------------------------------------------

    /// Maps non-success statuses to [`ClientError::Status`], keeping the
    /// body text for the user-visible message.
    async fn expect_success(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bookstall_core::Price;
    use serde_json::json;
    use wiremock::matchers::{body_json_string, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn book_json(id: i64, title: &str, category: &str, price: f64) -> serde_json::Value {
        json!({
            "bookId": id,
            "title": title,
            "author": "Author",
            "publisher": "Press",
            "isbn": format!("isbn-{id}"),
            "classification": "TEST",
            "category": category,
            "pageCount": 200,
            "price": price,
        })
    }

    fn book(id: i64, title: &str, category: &str, cents: i64) -> BookRecord {
        BookRecord {
            book_id: id,
            title: title.to_string(),
            author: "Author".to_string(),
            publisher: "Press".to_string(),
            isbn: format!("isbn-{id}"),
            classification: "TEST".to_string(),
            category: category.to_string(),
            page_count: 200,
            price: Price::from_cents(cents),
        }
    }

    #[tokio::test]
    async fn test_fetch_books_decodes_collection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/collection"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                book_json(1, "Dune", "SciFi", 9.99),
                book_json(2, "Emma", "Classic", 6.99),
            ])))
            .mount(&server)
            .await;

        let client = CatalogClient::new(format!("{}/collection", server.uri()));
        let books = client.fetch_books().await.unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].price.cents(), 999);
    }

    #[tokio::test]
    async fn test_fetch_books_by_category_uses_query_param() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/collection"))
            .and(query_param("category", "Sci Fi & Fantasy"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([book_json(1, "Dune", "Sci Fi & Fantasy", 9.99)])),
            )
            .mount(&server)
            .await;

        let client = CatalogClient::new(format!("{}/collection", server.uri()));
        let books = client
            .fetch_books_by_category("Sci Fi & Fantasy")
            .await
            .unwrap();
        assert_eq!(books.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_book_maps_404() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/collection/9"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = CatalogClient::new(format!("{}/collection", server.uri()));
        let err = client.fetch_book(9).await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound(9)));
    }

    #[tokio::test]
    async fn test_add_book_returns_assigned_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/collection"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(book_json(41, "New Book", "Fiction", 15.0)),
            )
            .mount(&server)
            .await;

        let client = CatalogClient::new(format!("{}/collection", server.uri()));
        // Caller's id is a placeholder; the store assigns the real one
        let created = client
            .add_book(&book(0, "New Book", "Fiction", 1500))
            .await
            .unwrap();
        assert_eq!(created.book_id, 41);
    }

    #[tokio::test]
    async fn test_update_rejects_id_mismatch_without_request() {
        // No mock mounted: any request would fail the test via Http error
        let server = MockServer::start().await;
        let client = CatalogClient::new(format!("{}/collection", server.uri()));

        let err = client
            .update_book(1, &book(2, "Wrong", "Fiction", 100))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::IdMismatch {
                path_id: 1,
                body_id: 2
            }
        ));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_sends_full_record() {
        let server = MockServer::start().await;
        let record = book(3, "Edited", "Fiction", 899);
        Mock::given(method("PUT"))
            .and(path("/collection/3"))
            .and(body_json_string(
                serde_json::to_string(&record).unwrap(),
            ))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = CatalogClient::new(format!("{}/collection", server.uri()));
        client.update_book(3, &record).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_reports_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/collection/5"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = CatalogClient::new(format!("{}/collection", server.uri()));
        let err = client.delete_book(5).await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound(5)));
    }

    #[tokio::test]
    async fn test_non_success_status_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/collection"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = CatalogClient::new(format!("{}/collection", server.uri()));
        match client.fetch_books().await.unwrap_err() {
            ClientError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
