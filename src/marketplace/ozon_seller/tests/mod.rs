//! Unit tests for the Ozon Seller client.

mod products_tests;
mod updates_tests;

use reqwest::Client;

use super::OzonSellerApi;

pub(super) fn api_with_mock(mock_uri: &str) -> OzonSellerApi {
    OzonSellerApi::new(Client::new(), "client-7", "test_key").with_base_url(mock_uri)
}

#[test]
fn creates_api_with_credentials() {
    let api = OzonSellerApi::new(Client::new(), "client-7", "key");
    assert_eq!(api.client_id, "client-7");
    assert_eq!(api.api_key, "key");
    assert_eq!(api.base_url, super::DEFAULT_BASE_URL);
    assert_eq!(api.batch_sizes, crate::batch::BatchSizes::OZON_SELLER);
}

#[test]
fn stock_builder_has_no_warehouse() {
    use crate::marketplace::Marketplace;

    let api = OzonSellerApi::new(Client::new(), "client-7", "key");
    let builder = api.stock_builder();
    assert!(builder.warehouse_id.is_none());
    assert!(builder.updated_at.is_none());
}
