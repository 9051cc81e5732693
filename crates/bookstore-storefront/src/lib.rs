/*
[INPUT]:  Public API exports for bookstore-storefront crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod basket;
pub mod catalog;
pub mod config;
pub mod pricing;
pub mod store;

// Re-export main types for convenience
pub use basket::{Basket, BasketChange};
pub use catalog::{load_catalog, Catalog};
pub use config::StorefrontConfig;
pub use pricing::{PriceOutcome, PriceSynchronizer, RequestSeq, SyncAction};
pub use store::{DisplayedTotal, StoreState};
