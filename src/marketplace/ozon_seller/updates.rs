//! Bulk stock and price imports.

use log::{debug, info};
use serde_json::Value;

use crate::error::SyncResult;
use crate::marketplace::http::read_json;
use crate::models::{PriceEntry, StockEntry};

use super::models::{OzonPrice, OzonStock, PricesRequest, StocksRequest};
use super::OzonSellerApi;

impl OzonSellerApi {
    pub(crate) async fn import_stocks(&self, stocks: &[StockEntry]) -> SyncResult<Value> {
        let url = self.url("v1/product/import/stocks");
        let payload = StocksRequest {
            stocks: stocks.iter().map(OzonStock::from).collect(),
        };
        debug!("Importing {} stocks at: {url}", payload.stocks.len());

        let response = self
            .authorized(self.client.post(&url))
            .json(&payload)
            .send()
            .await?;

        let body = read_json(response).await?;
        info!("Imported {} stocks to Ozon", stocks.len());
        Ok(body)
    }

    pub(crate) async fn import_prices(&self, prices: &[PriceEntry]) -> SyncResult<Value> {
        let url = self.url("v1/product/import/prices");
        let payload = PricesRequest {
            prices: prices.iter().map(OzonPrice::from).collect(),
        };
        debug!("Importing {} prices at: {url}", payload.prices.len());

        let response = self
            .authorized(self.client.post(&url))
            .json(&payload)
            .send()
            .await?;

        let body = read_json(response).await?;
        info!("Imported {} prices to Ozon", prices.len());
        Ok(body)
    }
}
