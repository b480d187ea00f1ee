//! Matching of the supplier feed against a marketplace's offer ids.
//!
//! # Module Structure
//!
//! - [`normalize`] - quantity and price descriptor rules
//! - [`offer_set`] - the immutable offer id set with per-pass visited flags
//!
//! A single [`reconcile`] routine serves both marketplaces and both entry
//! kinds. What gets emitted is decided by an [`EntryBuilder`]:
//! [`StockBuilder`] zeroes offers the feed does not mention, [`PriceBuilder`]
//! leaves them out.

pub mod normalize;
pub mod offer_set;

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::error::{SyncError, SyncResult};
use crate::models::{AutoAction, Currency, FeedRecord, PriceEntry, StockEntry};

pub use normalize::{normalize_price, normalize_quantity};
pub use offer_set::OfferIdSet;

use offer_set::Visited;

/// Builds one output entry per offer.
pub trait EntryBuilder {
    type Entry;

    /// Entry for an offer present in the feed.
    fn matched(&self, offer_id: &str, record: &FeedRecord) -> SyncResult<Self::Entry>;

    /// Entry for an offer the feed does not mention, if any.
    fn unmatched(&self, offer_id: &str) -> Option<Self::Entry>;
}

/// Emits stock entries; offers missing from the feed get a zero count.
#[derive(Debug, Clone, Default)]
pub struct StockBuilder {
    pub warehouse_id: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl StockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_warehouse(mut self, warehouse_id: impl Into<String>) -> Self {
        self.warehouse_id = Some(warehouse_id.into());
        self
    }

    pub fn updated_at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.updated_at = Some(timestamp);
        self
    }

    fn entry(&self, offer_id: &str, count: i64) -> StockEntry {
        StockEntry {
            offer_id: offer_id.to_string(),
            warehouse_id: self.warehouse_id.clone(),
            count,
            updated_at: self.updated_at,
        }
    }
}

impl EntryBuilder for StockBuilder {
    type Entry = StockEntry;

    fn matched(&self, offer_id: &str, record: &FeedRecord) -> SyncResult<StockEntry> {
        let count =
            normalize_quantity(&record.quantity).ok_or_else(|| SyncError::InvalidQuantity {
                code: record.code.clone(),
                value: record.quantity.clone(),
            })?;
        Ok(self.entry(offer_id, count))
    }

    fn unmatched(&self, offer_id: &str) -> Option<StockEntry> {
        Some(self.entry(offer_id, 0))
    }
}

/// Emits price entries for offers present in the feed only.
#[derive(Debug, Clone, Default)]
pub struct PriceBuilder {
    pub currency: Currency,
    pub auto_action: AutoAction,
}

impl PriceBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryBuilder for PriceBuilder {
    type Entry = PriceEntry;

    fn matched(&self, offer_id: &str, record: &FeedRecord) -> SyncResult<PriceEntry> {
        let value = normalize_price(&record.price).ok_or_else(|| SyncError::InvalidPrice {
            code: record.code.clone(),
            value: record.price.clone(),
        })?;
        Ok(PriceEntry {
            offer_id: offer_id.to_string(),
            value,
            currency: self.currency,
            old_price: 0,
            auto_action: self.auto_action,
        })
    }

    fn unmatched(&self, _offer_id: &str) -> Option<PriceEntry> {
        None
    }
}

/// Matches feed records against the offer id set.
///
/// Entries for matched feed records come first, in feed order. A code is
/// matched at most once; repeated feed rows for the same code are ignored.
/// Offers never matched follow in set order, as decided by
/// [`EntryBuilder::unmatched`].
///
/// The first builder error aborts the pass.
pub fn reconcile<B: EntryBuilder>(
    records: &[FeedRecord],
    offers: &OfferIdSet,
    builder: &B,
) -> SyncResult<Vec<B::Entry>> {
    debug!(
        "Reconciling {} feed records against {} offers",
        records.len(),
        offers.len()
    );
    let mut visited = Visited::new(offers);
    let mut entries = Vec::with_capacity(offers.len());

    for record in records {
        if let Some(offer_id) = visited.visit(&record.code) {
            entries.push(builder.matched(offer_id, record)?);
        }
    }
    let matched = entries.len();

    entries.extend(visited.remaining().filter_map(|id| builder.unmatched(id)));

    info!(
        "Reconciled {} entries ({} matched in feed, {} offers not in feed)",
        entries.len(),
        matched,
        offers.len() - matched
    );
    Ok(entries)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
