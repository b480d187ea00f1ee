//! Tests for stock and price imports.

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::api_with_mock;
use crate::error::SyncError;
use crate::models::{AutoAction, Currency, PriceEntry, StockEntry};

fn stock(offer_id: &str, count: i64) -> StockEntry {
    StockEntry {
        offer_id: offer_id.to_string(),
        warehouse_id: None,
        count,
        updated_at: None,
    }
}

#[tokio::test]
async fn import_stocks_sends_stocks_payload() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v1/product/import/stocks"))
        .and(header("Client-Id", "client-7"))
        .and(body_json(serde_json::json!({
            "stocks": [
                { "offer_id": "A", "stock": 100 },
                { "offer_id": "B", "stock": 0 }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": [{ "offer_id": "A", "updated": true }, { "offer_id": "B", "updated": true }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = api
        .import_stocks(&[stock("A", 100), stock("B", 0)])
        .await
        .unwrap();
    assert_eq!(response["result"][0]["updated"], true);
}

#[tokio::test]
async fn import_prices_sends_prices_payload() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v1/product/import/prices"))
        .and(body_json(serde_json::json!({
            "prices": [{
                "auto_action_enabled": "UNKNOWN",
                "currency_code": "RUB",
                "offer_id": "A",
                "old_price": "0",
                "price": "12490"
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "result": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let prices = vec![PriceEntry {
        offer_id: "A".to_string(),
        value: 12490,
        currency: Currency::Rub,
        old_price: 0,
        auto_action: AutoAction::Unknown,
    }];
    api.import_prices(&prices).await.unwrap();
}

#[tokio::test]
async fn server_error_is_reported() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v1/product/import/stocks"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&mock_server)
        .await;

    let err = api.import_stocks(&[stock("A", 1)]).await.unwrap_err();
    match err {
        SyncError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "internal");
        }
        other => panic!("Expected SyncError::Status, got: {other:?}"),
    }
}
