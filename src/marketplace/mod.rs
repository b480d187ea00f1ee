//! Marketplace API clients.
//!
//! Each marketplace exposes three bulk operations: list the offers it
//! currently carries, update stock levels, update prices. [`Marketplace`]
//! is the seam the sync pass is written against.

mod http;
pub mod ozon_seller;
pub mod yandex_market;

use serde_json::Value;

use crate::batch::BatchSizes;
use crate::error::SyncResult;
use crate::models::{PriceEntry, StockEntry};
use crate::reconcile::{PriceBuilder, StockBuilder};

pub use ozon_seller::OzonSellerApi;
pub use yandex_market::YandexMarketApi;

/// A marketplace the feed can be synchronized into.
#[allow(async_fn_in_trait)]
pub trait Marketplace {
    /// Human readable name used in logs and reports.
    fn name(&self) -> String;

    /// Request limits of the bulk update endpoints.
    fn batch_sizes(&self) -> BatchSizes;

    /// Builder producing this marketplace's stock entries.
    fn stock_builder(&self) -> StockBuilder;

    /// Builder producing this marketplace's price entries.
    fn price_builder(&self) -> PriceBuilder {
        PriceBuilder::new()
    }

    /// Pages through the catalog and returns every offer id.
    async fn list_offer_ids(&self) -> SyncResult<Vec<String>>;

    /// Sends one batch of stock levels. Returns the raw response.
    async fn update_stocks(&self, stocks: &[StockEntry]) -> SyncResult<Value>;

    /// Sends one batch of prices. Returns the raw response.
    async fn update_prices(&self, prices: &[PriceEntry]) -> SyncResult<Value>;
}
