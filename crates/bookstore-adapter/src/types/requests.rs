/*
[INPUT]:  Basket contents from the storefront
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::BookId;

/// Body of `POST /api/v1/store/calculate`.
///
/// Order is preserved and duplicates encode quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketRequest {
    pub basket: Vec<BookId>,
}

impl BasketRequest {
    pub fn new(ids: &[BookId]) -> Self {
        Self {
            basket: ids.to_vec(),
        }
    }
}
