//! Response handling shared by both marketplace clients.

use log::{debug, error};
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::error::{SyncError, SyncResult};

/// Reads the body and decodes it as JSON, turning non-success statuses into
/// [`SyncError::Status`].
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> SyncResult<T> {
    let status = response.status();
    debug!("Response status: {status}");

    let body = response.text().await?;

    if !status.is_success() {
        error!("Request failed with status {status}: {body}");
        return Err(SyncError::Status { status, body });
    }

    debug!("Response body length: {} bytes", body.len());
    Ok(serde_json::from_str(&body)?)
}
