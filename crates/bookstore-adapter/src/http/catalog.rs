/*
[INPUT]:  Bookstore client
[OUTPUT]: Catalog of available books
[POS]:    HTTP layer - catalog endpoint (no auth required)
[UPDATE]: When adding catalog endpoints or changing response format
*/

use crate::http::{BookstoreClient, Result};
use crate::types::{Book, BooksResponse};
use reqwest::Method;

impl BookstoreClient {
    /// List all books offered by the store
    ///
    /// GET /api/v1/books
    pub async fn list_books(&self) -> Result<Vec<Book>> {
        let builder = self.request(Method::GET, "api/v1/books")?;
        let response: BooksResponse = self.send_json(builder).await?;
        tracing::debug!(count = response.books.len(), "catalog fetched");
        Ok(response.books)
    }
}
