/*
[INPUT]:  HTTP client configuration and bookstore API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod catalog;
pub mod client;
pub mod error;
pub mod store;

pub use error::{BookstoreError, Result};

pub use client::{BookstoreClient, ClientConfig, DEFAULT_BASE_URL};
