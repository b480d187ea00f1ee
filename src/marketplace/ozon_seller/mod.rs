//! Ozon Seller API client.

mod models;
mod products;
mod updates;

pub use models::{OzonPrice, OzonStock};

use reqwest::Client;
use serde_json::Value;

use crate::batch::BatchSizes;
use crate::error::SyncResult;
use crate::models::{PriceEntry, StockEntry};
use crate::reconcile::StockBuilder;

use super::Marketplace;

pub const DEFAULT_BASE_URL: &str = "https://api-seller.ozon.ru";

/// Products requested per catalog page.
pub(crate) const PAGE_LIMIT: u32 = 1000;

/// Ozon Seller client for one seller account.
pub struct OzonSellerApi {
    pub(crate) client: Client,
    pub(crate) client_id: String,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) batch_sizes: BatchSizes,
}

impl OzonSellerApi {
    /// Creates a client authenticated with the seller's `Client-Id` and `Api-Key`.
    pub fn new(client: Client, client_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client_id = client_id.into();
        let api_key = api_key.into();
        log::info!("Creating Ozon Seller client for client id {client_id}");
        log::debug!("API key length: {}", api_key.len());
        Self {
            client,
            client_id,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            batch_sizes: BatchSizes::OZON_SELLER,
        }
    }

    /// Points the client at another host (mock servers, sandboxes).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_batch_sizes(mut self, batch_sizes: BatchSizes) -> Self {
        self.batch_sizes = batch_sizes;
        self
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub(crate) fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("Client-Id", &self.client_id)
            .header("Api-Key", &self.api_key)
    }
}

impl Marketplace for OzonSellerApi {
    fn name(&self) -> String {
        format!("Ozon seller {}", self.client_id)
    }

    fn batch_sizes(&self) -> BatchSizes {
        self.batch_sizes
    }

    fn stock_builder(&self) -> StockBuilder {
        StockBuilder::new()
    }

    async fn list_offer_ids(&self) -> SyncResult<Vec<String>> {
        self.get_offer_ids().await
    }

    async fn update_stocks(&self, stocks: &[StockEntry]) -> SyncResult<Value> {
        self.import_stocks(stocks).await
    }

    async fn update_prices(&self, prices: &[PriceEntry]) -> SyncResult<Value> {
        self.import_prices(prices).await
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
