/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bookstore-adapter tests

use bookstore_adapter::{BookstoreClient, ClientConfig};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> BookstoreClient {
    BookstoreClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// Catalog payload shaped like the bookstore service answer
pub fn books_payload() -> serde_json::Value {
    serde_json::json!({
        "books": [
            {"id": 1, "title": "Clean Code", "author": "Robert Martin", "price": 50.0},
            {"id": 2, "title": "The Clean Coder", "author": "Robert Martin", "price": 50.0},
            {"id": 3, "title": "Clean Architecture", "author": "Robert Martin", "price": 50.0},
            {"id": 4, "title": "Test Driven Development by Example", "author": "Kent Beck", "price": 50.0},
            {"id": 5, "title": "Working Effectively with Legacy Code", "author": "Michael Feathers", "price": 50.0}
        ]
    })
}
