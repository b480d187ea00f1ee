//! Request and response payloads of the Ozon Seller API.

use serde::{Deserialize, Serialize};

use crate::models::{AutoAction, PriceEntry, StockEntry};

// ── v2/product/list ──────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct ProductListRequest<'a> {
    pub filter: ProductFilter,
    pub last_id: &'a str,
    pub limit: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProductFilter {
    pub visibility: &'static str,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self { visibility: "ALL" }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductListResponse {
    pub result: ProductListResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductListResult {
    #[serde(default)]
    pub items: Vec<ProductItem>,
    pub total: usize,
    #[serde(default)]
    pub last_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductItem {
    pub offer_id: String,
}

// ── v1/product/import/stocks ─────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct StocksRequest {
    pub stocks: Vec<OzonStock>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OzonStock {
    pub offer_id: String,
    pub stock: i64,
}

impl From<&StockEntry> for OzonStock {
    fn from(entry: &StockEntry) -> Self {
        Self {
            offer_id: entry.offer_id.clone(),
            stock: entry.count,
        }
    }
}

// ── v1/product/import/prices ─────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct PricesRequest {
    pub prices: Vec<OzonPrice>,
}

/// Ozon takes prices as decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OzonPrice {
    pub auto_action_enabled: AutoAction,
    pub currency_code: String,
    pub offer_id: String,
    pub old_price: String,
    pub price: String,
}

impl From<&PriceEntry> for OzonPrice {
    fn from(entry: &PriceEntry) -> Self {
        Self {
            auto_action_enabled: entry.auto_action,
            currency_code: entry.currency.iso_code().to_string(),
            offer_id: entry.offer_id.clone(),
            old_price: entry.old_price.to_string(),
            price: entry.value.to_string(),
        }
    }
}
