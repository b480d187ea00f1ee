//! Catalog paging (offer-mapping-entries).

use log::{debug, info};

use crate::error::SyncResult;
use crate::marketplace::http::read_json;

use super::models::{OfferMappingResponse, OfferMappingResult};
use super::{YandexMarketApi, PAGE_LIMIT};

impl YandexMarketApi {
    /// Fetches one page of offer mapping entries.
    pub(crate) async fn get_offer_page(&self, page_token: &str) -> SyncResult<OfferMappingResult> {
        let url = self.campaign_url("offer-mapping-entries");
        debug!("Fetching offer page at: {url} (page_token: '{page_token}')");

        let limit = PAGE_LIMIT.to_string();
        let response = self
            .authorized(self.client.get(&url))
            .query(&[("page_token", page_token), ("limit", limit.as_str())])
            .send()
            .await?;

        let page: OfferMappingResponse = read_json(response).await?;
        Ok(page.result)
    }

    /// Collects the shop SKU of every offer in the campaign.
    ///
    /// Follows `nextPageToken` until the API stops returning one.
    pub(crate) async fn get_offer_ids(&self) -> SyncResult<Vec<String>> {
        info!("Fetching offer ids for campaign {}", self.campaign_id);
        let mut offer_ids = Vec::new();
        let mut page_token = String::new();
        let mut pages = 0;

        loop {
            let page = self.get_offer_page(&page_token).await?;
            pages += 1;
            offer_ids.extend(
                page.offer_mapping_entries
                    .into_iter()
                    .map(|entry| entry.offer.shop_sku),
            );

            match page
                .paging
                .and_then(|paging| paging.next_page_token)
                .filter(|token| !token.is_empty())
            {
                Some(next) => page_token = next,
                None => break,
            }
        }

        info!(
            "Fetched {} offer ids in {} pages for campaign {}",
            offer_ids.len(),
            pages,
            self.campaign_id
        );
        Ok(offer_ids)
    }
}
