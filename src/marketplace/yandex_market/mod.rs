//! Yandex.Market partner API client.
//!
//! One client serves one campaign (FBS or DBS) and the warehouse attached
//! to it.

mod models;
mod offers;
mod updates;

pub use models::{MarketOffer, MarketPrice, MarketSku, MarketSkuItem};

use chrono::{SubsecRound, Utc};
use reqwest::Client;
use serde_json::Value;

use crate::batch::BatchSizes;
use crate::error::SyncResult;
use crate::models::{PriceEntry, StockEntry};
use crate::reconcile::StockBuilder;

use super::Marketplace;

pub const DEFAULT_BASE_URL: &str = "https://api.partner.market.yandex.ru";

/// Offers requested per catalog page.
pub(crate) const PAGE_LIMIT: u32 = 200;

/// Yandex.Market client bound to a single campaign.
pub struct YandexMarketApi {
    pub(crate) client: Client,
    pub(crate) access_token: String,
    pub(crate) campaign_id: String,
    pub(crate) warehouse_id: String,
    pub(crate) base_url: String,
    pub(crate) batch_sizes: BatchSizes,
}

impl YandexMarketApi {
    /// Creates a client for the given campaign.
    pub fn new(
        client: Client,
        access_token: impl Into<String>,
        campaign_id: impl Into<String>,
        warehouse_id: impl Into<String>,
    ) -> Self {
        let campaign_id = campaign_id.into();
        log::info!("Creating Yandex.Market client for campaign {campaign_id}");
        Self {
            client,
            access_token: access_token.into(),
            campaign_id,
            warehouse_id: warehouse_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            batch_sizes: BatchSizes::YANDEX_MARKET,
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

    pub fn campaign_id(&self) -> &str {
        &self.campaign_id
    }

    pub(crate) fn campaign_url(&self, path: &str) -> String {
        format!("{}/campaigns/{}/{}", self.base_url, self.campaign_id, path)
    }

    pub(crate) fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .bearer_auth(&self.access_token)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
    }
}

impl Marketplace for YandexMarketApi {
    fn name(&self) -> String {
        format!("Yandex.Market campaign {}", self.campaign_id)
    }

    fn batch_sizes(&self) -> BatchSizes {
        self.batch_sizes
    }

    fn stock_builder(&self) -> StockBuilder {
        StockBuilder::new()
            .with_warehouse(self.warehouse_id.clone())
            .updated_at(Utc::now().trunc_subsecs(0))
    }

    async fn list_offer_ids(&self) -> SyncResult<Vec<String>> {
        self.get_offer_ids().await
    }

    async fn update_stocks(&self, stocks: &[StockEntry]) -> SyncResult<Value> {
        self.put_stocks(stocks).await
    }

    async fn update_prices(&self, prices: &[PriceEntry]) -> SyncResult<Value> {
        self.post_prices(prices).await
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
