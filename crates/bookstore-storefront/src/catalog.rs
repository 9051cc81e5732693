/*
[INPUT]:  BookCatalog backend (HTTP client at runtime)
[OUTPUT]: Read-only catalog loaded once at startup
[POS]:    Data layer - catalog cache, degrades to empty on failure
[UPDATE]: When changing catalog lookup or startup loading behavior
*/

use bookstore_adapter::{Book, BookCatalog, BookId};
use tracing::{error, info};

/// Read-only copy of the store's books, in the order the service listed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Fetch the catalog once.
///
/// Failures are logged and yield an empty catalog; there is no retry.
pub async fn load_catalog(source: &dyn BookCatalog) -> Catalog {
    match source.fetch_books().await {
        Ok(books) => {
            info!(count = books.len(), "catalog loaded");
            Catalog::new(books)
        }
        Err(err) => {
            error!(error = %err, "failed to load catalog; showing no books");
            Catalog::empty()
        }
    }
}
