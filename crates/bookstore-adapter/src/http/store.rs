/*
[INPUT]:  Basket contents (ordered book ids, duplicates = quantity)
[OUTPUT]: Price quote computed by the remote pricing service
[POS]:    HTTP layer - store pricing endpoint
[UPDATE]: When changing the pricing request or response format
*/

use crate::http::{BookstoreClient, Result};
use crate::types::{BasketRequest, BookId, PriceQuote};
use reqwest::Method;

impl BookstoreClient {
    /// Ask the store to price a basket
    ///
    /// POST /api/v1/store/calculate
    pub async fn calculate_price(&self, basket: &[BookId]) -> Result<PriceQuote> {
        let body = BasketRequest::new(basket);
        let builder = self
            .request(Method::POST, "api/v1/store/calculate")?
            .json(&body);
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{BookstoreClient, ClientConfig};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_calculate_price_sends_full_basket() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/api/v1/store/calculate"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({ "basket": [1, 1, 2] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "totalPrice": 142.5,
                "currency": "EUR",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = BookstoreClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init");

        let quote = client
            .calculate_price(&[1, 1, 2])
            .await
            .expect("calculate_price failed");

        assert_eq!(quote.total_price, Decimal::from_str("142.50").expect("total"));
        assert_eq!(quote.currency, "EUR");
    }

    #[tokio::test]
    async fn test_calculate_price_malformed_body() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/api/v1/store/calculate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total": "lots",
            })))
            .mount(&server)
            .await;

        let client = BookstoreClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init");

        let err = client.calculate_price(&[7]).await.unwrap_err();
        assert!(err.is_malformed_response());
    }
}
