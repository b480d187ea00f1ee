//! Bulk stock and price updates.

use chrono::Utc;
use log::{debug, info};
use serde_json::Value;

use crate::error::SyncResult;
use crate::marketplace::http::read_json;
use crate::models::{PriceEntry, StockEntry};

use super::models::{MarketOffer, MarketSku, PricesRequest, StocksRequest};
use super::YandexMarketApi;

impl YandexMarketApi {
    /// Sends stock levels for one batch of SKUs.
    pub(crate) async fn put_stocks(&self, stocks: &[StockEntry]) -> SyncResult<Value> {
        let url = self.campaign_url("offers/stocks");
        let now = Utc::now();
        let payload = StocksRequest {
            skus: stocks
                .iter()
                .map(|entry| MarketSku::from_entry(entry, &self.warehouse_id, now))
                .collect(),
        };
        debug!("Updating {} stocks at: {url}", payload.skus.len());

        let response = self
            .authorized(self.client.put(&url))
            .json(&payload)
            .send()
            .await?;

        let body = read_json(response).await?;
        info!(
            "Updated {} stocks for campaign {}",
            stocks.len(),
            self.campaign_id
        );
        Ok(body)
    }

    /// Sends prices for one batch of offers.
    pub(crate) async fn post_prices(&self, prices: &[PriceEntry]) -> SyncResult<Value> {
        let url = self.campaign_url("offer-prices/updates");
        let payload = PricesRequest {
            offers: prices.iter().map(MarketOffer::from).collect(),
        };
        debug!("Updating {} prices at: {url}", payload.offers.len());

        let response = self
            .authorized(self.client.post(&url))
            .json(&payload)
            .send()
            .await?;

        let body = read_json(response).await?;
        info!(
            "Updated {} prices for campaign {}",
            prices.len(),
            self.campaign_id
        );
        Ok(body)
    }
}
