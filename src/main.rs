use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{error, info, warn};
use reqwest::Client;

use watch_stock_sync::feed::{download_feed, load_feed_file, FeedOptions};
use watch_stock_sync::{
    sync_marketplace, FeedRecord, Marketplace, OzonSellerApi, SyncConfig, SyncOptions, SyncReport,
    YandexMarketApi,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Target {
    Yandex,
    Ozon,
}

/// Sync supplier watch stock and prices to Yandex.Market and Ozon
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Local stock table, .xls/.xlsx or CSV (downloads FEED_URL when omitted)
    #[arg(long)]
    feed: Option<PathBuf>,

    /// Column delimiter of a CSV stock table
    #[arg(long, default_value_t = ';')]
    delimiter: char,

    /// Rows above the header row of the stock table [default: 17 for
    /// workbooks, 0 for CSV]
    #[arg(long)]
    skip_rows: Option<usize>,

    /// Only sync this marketplace
    #[arg(long, value_enum)]
    only: Option<Target>,

    /// Reconcile and report without sending updates
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Set RUST_LOG to control the log level, e.g. RUST_LOG=watch_stock_sync=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting watch stock sync");

    let args = Args::parse();
    match run(args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("Sync aborted: {e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when any campaign or batch failed.
async fn run(args: Args) -> Result<bool> {
    let config = SyncConfig::from_env().context("Failed to load configuration")?;

    let client = Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    if !args.delimiter.is_ascii() {
        anyhow::bail!("Delimiter must be a single ASCII character");
    }
    let feed_options = FeedOptions {
        delimiter: args.delimiter as u8,
        skip_rows: args.skip_rows,
    };

    let feed = match &args.feed {
        Some(path) => load_feed_file(path, &feed_options)
            .with_context(|| format!("Failed to load feed from {path:?}"))?,
        None => download_feed(&client, &config.feed_url, &feed_options)
            .await
            .with_context(|| format!("Failed to download feed from {}", config.feed_url))?,
    };
    info!("Feed holds {} records", feed.len());

    let options = SyncOptions {
        dry_run: args.dry_run,
    };
    let mut all_ok = true;

    if args.only != Some(Target::Ozon) {
        if let Some(yandex) = &config.yandex {
            for campaign in &yandex.campaigns {
                info!("Syncing Yandex.Market {} campaign", campaign.label);
                let api = YandexMarketApi::new(
                    client.clone(),
                    yandex.access_token.clone(),
                    campaign.campaign_id.clone(),
                    campaign.warehouse_id.clone(),
                );
                all_ok &= run_marketplace(&api, &feed, &options).await;
            }
        } else if args.only == Some(Target::Yandex) {
            warn!("Yandex.Market requested but not configured");
            all_ok = false;
        }
    }

    if args.only != Some(Target::Yandex) {
        if let Some(ozon) = &config.ozon {
            let api = OzonSellerApi::new(client.clone(), ozon.client_id.clone(), ozon.api_key.clone());
            all_ok &= run_marketplace(&api, &feed, &options).await;
        } else if args.only == Some(Target::Ozon) {
            warn!("Ozon requested but not configured");
            all_ok = false;
        }
    }

    Ok(all_ok)
}

/// Runs one pass; a failure is logged and does not stop the other passes.
async fn run_marketplace<M: Marketplace>(
    marketplace: &M,
    feed: &[FeedRecord],
    options: &SyncOptions,
) -> bool {
    match sync_marketplace(marketplace, feed, options).await {
        Ok(report) => {
            print_report(&report);
            report.is_success()
        }
        Err(e) => {
            error!("{} sync failed: {e}", marketplace.name());
            false
        }
    }
}

fn print_report(report: &SyncReport) {
    let mode = if report.dry_run { " (dry run)" } else { "" };
    println!("{}{mode}", report.marketplace);
    println!("  offers listed:   {}", report.offers_resolved);
    println!(
        "  stock entries:   {} ({} in stock)",
        report.stock_entries, report.in_stock_entries
    );
    match &report.price_error {
        Some(e) => println!("  price entries:   none sent ({e})"),
        None => println!("  price entries:   {}", report.price_entries),
    }
    if !report.dry_run {
        let failed = report.failed_batches().count();
        println!(
            "  batches:         {} sent, {} failed",
            report.batches.len() - failed,
            failed
        );
        for batch in report.failed_batches() {
            println!(
                "    {} batch {} ({} entries): {}",
                batch.kind,
                batch.index,
                batch.size,
                batch.error.as_deref().unwrap_or_default()
            );
        }
    }
}
