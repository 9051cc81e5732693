/*
[INPUT]:  Mock bookstore service requirements
[OUTPUT]: Shared fixtures for storefront integration tests
[POS]:    Test infrastructure - shared across storefront test modules
[UPDATE]: When adding new test patterns or fixtures
*/

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use bookstore_adapter::{BookstoreClient, ClientConfig, PriceCalculator};
use bookstore_storefront::{PriceOutcome, StoreState};
use tokio::sync::mpsc;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CALCULATE_PATH: &str = "/api/v1/store/calculate";

pub fn client_for(server: &MockServer) -> Arc<BookstoreClient> {
    let client = BookstoreClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init");
    Arc::new(client)
}

/// Store wired to the mock server's pricing endpoint; call from inside a runtime
pub fn store_for(server: &MockServer) -> (StoreState, mpsc::UnboundedReceiver<PriceOutcome>) {
    let calculator: Arc<dyn PriceCalculator> = client_for(server);
    StoreState::new(calculator, tokio::runtime::Handle::current())
}

/// Answer `basket` with `total` EUR after `delay`
pub async fn mount_price(server: &MockServer, basket: &[u64], total: f64, delay: Duration) {
    Mock::given(method("POST"))
        .and(path(CALCULATE_PATH))
        .and(body_json(serde_json::json!({ "basket": basket })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "totalPrice": total, "currency": "EUR" }))
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

/// Feed outcomes into the store until it stops loading
pub async fn settle(state: &mut StoreState, rx: &mut mpsc::UnboundedReceiver<PriceOutcome>) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while state.is_loading() {
            let outcome = rx.recv().await.expect("pricing channel open");
            state.apply_price_outcome(outcome);
        }
    })
    .await
    .expect("store settled");
}
