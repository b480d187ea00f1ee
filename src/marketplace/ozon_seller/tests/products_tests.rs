//! Tests for product list paging.

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::api_with_mock;
use crate::error::SyncError;

fn page(offer_ids: &[&str], total: usize, last_id: &str) -> serde_json::Value {
    let items: Vec<serde_json::Value> = offer_ids
        .iter()
        .map(|id| serde_json::json!({ "product_id": 1, "offer_id": id }))
        .collect();
    serde_json::json!({
        "result": { "items": items, "total": total, "last_id": last_id }
    })
}

fn list_request(last_id: &str) -> serde_json::Value {
    serde_json::json!({
        "filter": { "visibility": "ALL" },
        "last_id": last_id,
        "limit": 1000
    })
}

#[tokio::test]
async fn pages_until_total_reached() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v2/product/list"))
        .and(header("Client-Id", "client-7"))
        .and(header("Api-Key", "test_key"))
        .and(body_json(list_request("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["A", "B"], 3, "cursor-1")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/product/list"))
        .and(body_json(list_request("cursor-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["C"], 3, "cursor-2")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ids = api.get_offer_ids().await.unwrap();
    assert_eq!(ids, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn empty_store() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v2/product/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&[], 0, "")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ids = api.get_offer_ids().await.unwrap();
    assert!(ids.is_empty());
}

#[tokio::test]
async fn stops_on_empty_page_before_total() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v2/product/list"))
        .and(body_json(list_request("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["A"], 5, "cursor-1")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/product/list"))
        .and(body_json(list_request("cursor-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&[], 5, "")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ids = api.get_offer_ids().await.unwrap();
    assert_eq!(ids, vec!["A"]);
}

#[tokio::test]
async fn http_error_propagates() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v2/product/list"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&mock_server)
        .await;

    let err = api.get_offer_ids().await.unwrap_err();
    assert!(matches!(err, SyncError::Status { ref status, .. } if status.as_u16() == 403));
}
