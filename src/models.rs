use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the supplier stock table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedRecord {
    #[serde(rename = "Код")]
    pub code: String,

    #[serde(rename = "Количество", default)]
    pub quantity: String,

    #[serde(rename = "Цена", default)]
    pub price: String,
}

impl FeedRecord {
    pub fn new(code: &str, quantity: &str, price: &str) -> Self {
        Self {
            code: code.to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
        }
    }
}

/// Stock level to push for a single offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockEntry {
    pub offer_id: String,
    pub warehouse_id: Option<String>,
    pub count: i64,
    pub updated_at: Option<DateTime<Utc>>,
}

impl StockEntry {
    pub fn is_in_stock(&self) -> bool {
        self.count != 0
    }
}

/// Price to push for a single offer, in whole roubles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceEntry {
    pub offer_id: String,
    pub value: u64,
    pub currency: Currency,
    pub old_price: u64,
    pub auto_action: AutoAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    Rub,
}

impl Currency {
    /// ISO 4217 code, as Ozon expects it.
    pub fn iso_code(&self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
        }
    }

    /// Legacy code used by Yandex.Market.
    pub fn market_code(&self) -> &'static str {
        match self {
            Currency::Rub => "RUR",
        }
    }
}

/// Ozon automatic promotion flag sent with every price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AutoAction {
    #[default]
    Unknown,
    Enabled,
    Disabled,
}

/// Which bulk endpoint a batch was sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchKind {
    Stocks,
    Prices,
}

impl std::fmt::Display for BatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchKind::Stocks => write!(f, "stocks"),
            BatchKind::Prices => write!(f, "prices"),
        }
    }
}

/// Result of submitting one batch.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub kind: BatchKind,
    pub index: usize,
    pub size: usize,
    pub error: Option<String>,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary of one marketplace pass.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub marketplace: String,
    pub offers_resolved: usize,
    pub stock_entries: usize,
    pub in_stock_entries: usize,
    pub price_entries: usize,
    pub batches: Vec<BatchOutcome>,
    /// Set when the price list could not be built. Stock batches are still
    /// sent in that case.
    pub price_error: Option<String>,
    pub dry_run: bool,
}

impl SyncReport {
    pub fn failed_batches(&self) -> impl Iterator<Item = &BatchOutcome> {
        self.batches.iter().filter(|b| !b.is_success())
    }

    pub fn is_success(&self) -> bool {
        self.price_error.is_none() && self.batches.iter().all(BatchOutcome::is_success)
    }
}
