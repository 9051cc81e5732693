/*
[INPUT]:  Catalog and pricing backends (HTTP client or test doubles)
[OUTPUT]: Object-safe async traits consumed by the storefront
[POS]:    Integration seam - backend abstraction
[UPDATE]: When the storefront needs a new backend capability
*/

use async_trait::async_trait;

use crate::http::{BookstoreClient, Result};
use crate::types::{Book, BookId, PriceQuote};

/// Source of the book catalog
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// Fetch every book currently offered
    async fn fetch_books(&self) -> Result<Vec<Book>>;
}

/// Remote price computation for a basket
///
/// Implementations receive the full basket in order, duplicates included,
/// and own every discount rule.
#[async_trait]
pub trait PriceCalculator: Send + Sync {
    async fn calculate(&self, basket: &[BookId]) -> Result<PriceQuote>;
}

#[async_trait]
impl BookCatalog for BookstoreClient {
    async fn fetch_books(&self) -> Result<Vec<Book>> {
        self.list_books().await
    }
}

#[async_trait]
impl PriceCalculator for BookstoreClient {
    async fn calculate(&self, basket: &[BookId]) -> Result<PriceQuote> {
        self.calculate_price(basket).await
    }
}

/// Fixed-answer backend for tests and offline demos
#[derive(Debug, Clone)]
pub struct MockBookstore {
    books: Vec<Book>,
    quote: PriceQuote,
}

impl MockBookstore {
    /// Create a backend that always lists `books` and answers `quote`
    pub fn new(books: Vec<Book>, quote: PriceQuote) -> Self {
        Self { books, quote }
    }
}

#[async_trait]
impl BookCatalog for MockBookstore {
    async fn fetch_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }
}

#[async_trait]
impl PriceCalculator for MockBookstore {
    async fn calculate(&self, _basket: &[BookId]) -> Result<PriceQuote> {
        Ok(self.quote.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_mock_bookstore() {
        let book = Book {
            id: 1,
            title: "Clean Code".to_string(),
            author: "Robert Martin".to_string(),
            price: Decimal::from(50),
        };
        let quote = PriceQuote {
            total_price: Decimal::from(95),
            currency: "EUR".to_string(),
        };
        let backend = MockBookstore::new(vec![book.clone()], quote.clone());

        let catalog: &dyn BookCatalog = &backend;
        assert_eq!(catalog.fetch_books().await.unwrap(), vec![book]);

        let pricing: &dyn PriceCalculator = &backend;
        assert_eq!(pricing.calculate(&[1, 1]).await.unwrap(), quote);
    }
}
