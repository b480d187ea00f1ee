//! One reconciliation pass against a marketplace.
//!
//! Offer resolution and stock reconciliation errors abort the pass. Stock
//! batches go out before the price list is built; a price reconciliation
//! error is recorded in the [`SyncReport`] instead of raised. Batch
//! submission never aborts: every batch is attempted and its outcome
//! recorded, leaving retry or abort decisions to the caller.

use std::future::Future;

use log::{debug, error, info, warn};
use serde_json::Value;

use crate::batch::divide;
use crate::error::SyncResult;
use crate::marketplace::Marketplace;
use crate::models::{BatchKind, BatchOutcome, FeedRecord, SyncReport};
use crate::reconcile::{reconcile, OfferIdSet};

/// Options for a sync pass.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Reconcile and report without sending any update.
    pub dry_run: bool,
}

/// Pushes stock levels and prices derived from `feed` to `marketplace`.
pub async fn sync_marketplace<M: Marketplace>(
    marketplace: &M,
    feed: &[FeedRecord],
    options: &SyncOptions,
) -> SyncResult<SyncReport> {
    let name = marketplace.name();
    info!("Starting sync for {name}");

    let offer_ids = marketplace.list_offer_ids().await?;
    let offers: OfferIdSet = offer_ids.into_iter().collect();
    info!("{name}: {} distinct offers listed", offers.len());

    let stocks = reconcile(feed, &offers, &marketplace.stock_builder())?;
    let sizes = marketplace.batch_sizes();

    let mut report = SyncReport {
        marketplace: name.clone(),
        offers_resolved: offers.len(),
        stock_entries: stocks.len(),
        in_stock_entries: stocks.iter().filter(|s| s.is_in_stock()).count(),
        dry_run: options.dry_run,
        ..SyncReport::default()
    };

    if !options.dry_run {
        for (index, batch) in divide(&stocks, sizes.stocks).enumerate() {
            let outcome = submit(
                BatchKind::Stocks,
                index,
                batch.len(),
                marketplace.update_stocks(batch),
            )
            .await;
            report.batches.push(outcome);
        }
    }

    // Stock batches are already out; a price error only skips prices.
    let prices = match reconcile(feed, &offers, &marketplace.price_builder()) {
        Ok(prices) => prices,
        Err(e) => {
            error!("{name}: price list not built, no prices sent: {e}");
            report.price_error = Some(e.to_string());
            return Ok(report);
        }
    };
    report.price_entries = prices.len();

    if options.dry_run {
        info!(
            "{name}: dry run, would send {} stocks and {} prices",
            stocks.len(),
            prices.len()
        );
        return Ok(report);
    }

    for (index, batch) in divide(&prices, sizes.prices).enumerate() {
        let outcome = submit(
            BatchKind::Prices,
            index,
            batch.len(),
            marketplace.update_prices(batch),
        )
        .await;
        report.batches.push(outcome);
    }

    let failed = report.failed_batches().count();
    if failed == 0 {
        info!(
            "{name}: sent {} stocks ({} in stock) and {} prices in {} batches",
            report.stock_entries,
            report.in_stock_entries,
            report.price_entries,
            report.batches.len()
        );
    } else {
        warn!(
            "{name}: {failed} of {} batches failed",
            report.batches.len()
        );
    }

    Ok(report)
}

async fn submit(
    kind: BatchKind,
    index: usize,
    size: usize,
    request: impl Future<Output = SyncResult<Value>>,
) -> BatchOutcome {
    debug!("Submitting {kind} batch {index} ({size} entries)");
    match request.await {
        Ok(_) => BatchOutcome {
            kind,
            index,
            size,
            error: None,
        },
        Err(e) => {
            error!("Failed to submit {kind} batch {index}: {e}");
            BatchOutcome {
                kind,
                index,
                size,
                error: Some(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
