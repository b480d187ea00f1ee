//! Watch Stock Sync
//!
//! Pushes the stock levels and prices from a supplier stock feed to the
//! Yandex.Market and Ozon Seller APIs.

pub mod batch;
pub mod config;
pub mod error;
pub mod feed;
pub mod marketplace;
pub mod models;
pub mod reconcile;
pub mod sync;

pub use config::SyncConfig;
pub use error::{SyncError, SyncResult};
pub use marketplace::{Marketplace, OzonSellerApi, YandexMarketApi};
pub use models::*;
pub use sync::{sync_marketplace, SyncOptions};
