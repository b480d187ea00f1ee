//! Environment configuration.
//!
//! Credentials come from the process environment; a `.env` file in the
//! working directory is loaded first if present. A marketplace whose
//! variables are incomplete is skipped with a warning.

use std::time::Duration;

use log::{info, warn};

use crate::error::{SyncError, SyncResult};
use crate::feed::DEFAULT_FEED_URL;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// One Yandex.Market campaign and the warehouse it ships from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YandexCampaign {
    /// Label used in logs ("FBS", "DBS").
    pub label: String,
    pub campaign_id: String,
    pub warehouse_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YandexConfig {
    pub access_token: String,
    pub campaigns: Vec<YandexCampaign>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OzonConfig {
    pub client_id: String,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub yandex: Option<YandexConfig>,
    pub ozon: Option<OzonConfig>,
    pub feed_url: String,
    pub request_timeout: Duration,
}

impl SyncConfig {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env() -> SyncResult<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {path:?}");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> SyncResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let yandex = match get("MARKET_TOKEN") {
            Some(access_token) => {
                let mut campaigns = Vec::new();
                for label in ["FBS", "DBS"] {
                    let campaign_id = get(&format!("{label}_ID"));
                    let warehouse_id = get(&format!("WAREHOUSE_{label}_ID"));
                    match (campaign_id, warehouse_id) {
                        (Some(campaign_id), Some(warehouse_id)) => campaigns.push(YandexCampaign {
                            label: label.to_string(),
                            campaign_id,
                            warehouse_id,
                        }),
                        _ => warn!(
                            "{label}_ID or WAREHOUSE_{label}_ID not set, skipping Yandex.Market {label} campaign"
                        ),
                    }
                }
                if campaigns.is_empty() {
                    None
                } else {
                    Some(YandexConfig {
                        access_token,
                        campaigns,
                    })
                }
            }
            None => {
                warn!("MARKET_TOKEN not set, Yandex.Market sync disabled");
                None
            }
        };

        let ozon = match (get("CLIENT_ID"), get("SELLER_TOKEN")) {
            (Some(client_id), Some(api_key)) => Some(OzonConfig { client_id, api_key }),
            _ => {
                warn!("CLIENT_ID or SELLER_TOKEN not set, Ozon sync disabled");
                None
            }
        };

        if yandex.is_none() && ozon.is_none() {
            return Err(SyncError::Config(
                "no marketplace configured: set MARKET_TOKEN with FBS_ID/DBS_ID and warehouse ids, or CLIENT_ID with SELLER_TOKEN"
                    .to_string(),
            ));
        }

        let feed_url = get("FEED_URL").unwrap_or_else(|| DEFAULT_FEED_URL.to_string());

        let request_timeout = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                SyncError::Config(format!("REQUEST_TIMEOUT_SECS must be a number of seconds, got '{raw}'"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            yandex,
            ozon,
            feed_url,
            request_timeout: Duration::from_secs(request_timeout),
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
