//! Catalog paging (v2/product/list).

use log::{debug, info, warn};

use crate::error::SyncResult;
use crate::marketplace::http::read_json;

use super::models::{ProductFilter, ProductListRequest, ProductListResponse, ProductListResult};
use super::{OzonSellerApi, PAGE_LIMIT};

impl OzonSellerApi {
    /// Fetches one page of products after `last_id`.
    pub(crate) async fn get_product_page(&self, last_id: &str) -> SyncResult<ProductListResult> {
        let url = self.url("v2/product/list");
        debug!("Fetching product page at: {url} (last_id: '{last_id}')");

        let payload = ProductListRequest {
            filter: ProductFilter::default(),
            last_id,
            limit: PAGE_LIMIT,
        };

        let response = self
            .authorized(self.client.post(&url))
            .json(&payload)
            .send()
            .await?;

        let page: ProductListResponse = read_json(response).await?;
        Ok(page.result)
    }

    /// Collects the offer id of every product in the store.
    ///
    /// Pages until the number of collected ids reaches the reported total.
    pub(crate) async fn get_offer_ids(&self) -> SyncResult<Vec<String>> {
        info!("Fetching offer ids for Ozon client {}", self.client_id);
        let mut offer_ids = Vec::new();
        let mut last_id = String::new();

        loop {
            let page = self.get_product_page(&last_id).await?;
            let received = page.items.len();
            offer_ids.extend(page.items.into_iter().map(|item| item.offer_id));

            if offer_ids.len() >= page.total {
                break;
            }
            if received == 0 {
                warn!(
                    "Ozon returned an empty page after {} of {} products, stopping",
                    offer_ids.len(),
                    page.total
                );
                break;
            }
            last_id = page.last_id;
        }

        info!("Fetched {} offer ids from Ozon", offer_ids.len());
        Ok(offer_ids)
    }
}
