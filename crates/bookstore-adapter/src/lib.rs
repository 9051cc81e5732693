/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public bookstore adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod source;
pub mod types;

// Re-export commonly used types from http
pub use http::{BookstoreClient, BookstoreError, ClientConfig, Result, DEFAULT_BASE_URL};

// Re-export backend traits
pub use source::{BookCatalog, MockBookstore, PriceCalculator};

// Re-export all types
pub use types::*;
