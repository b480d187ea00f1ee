//! Request and response payloads of the Yandex.Market partner API.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{PriceEntry, StockEntry};

// ── offer-mapping-entries ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct OfferMappingResponse {
    pub result: OfferMappingResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OfferMappingResult {
    #[serde(default)]
    pub offer_mapping_entries: Vec<OfferMappingEntry>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OfferMappingEntry {
    pub offer: MappedOffer,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MappedOffer {
    pub shop_sku: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Paging {
    #[serde(default)]
    pub next_page_token: Option<String>,
}

// ── offers/stocks ────────────────────────────────────────────────────

/// Stock type reported for every item: available for sale.
pub const STOCK_TYPE_FIT: &str = "FIT";

#[derive(Debug, Serialize)]
pub(crate) struct StocksRequest {
    pub skus: Vec<MarketSku>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSku {
    pub sku: String,
    pub warehouse_id: String,
    pub items: Vec<MarketSkuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSkuItem {
    pub count: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub updated_at: String,
}

impl MarketSku {
    pub(crate) fn from_entry(entry: &StockEntry, default_warehouse: &str, now: DateTime<Utc>) -> Self {
        let updated_at = entry
            .updated_at
            .unwrap_or(now)
            .to_rfc3339_opts(SecondsFormat::Secs, true);
        Self {
            sku: entry.offer_id.clone(),
            warehouse_id: entry
                .warehouse_id
                .clone()
                .unwrap_or_else(|| default_warehouse.to_string()),
            items: vec![MarketSkuItem {
                count: entry.count,
                kind: STOCK_TYPE_FIT.to_string(),
                updated_at,
            }],
        }
    }
}

// ── offer-prices/updates ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct PricesRequest {
    pub offers: Vec<MarketOffer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketOffer {
    pub id: String,
    pub price: MarketPrice,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPrice {
    pub value: u64,
    pub currency_id: String,
}

impl From<&PriceEntry> for MarketOffer {
    fn from(entry: &PriceEntry) -> Self {
        Self {
            id: entry.offer_id.clone(),
            price: MarketPrice {
                value: entry.value,
                currency_id: entry.currency.market_code().to_string(),
            },
        }
    }
}
