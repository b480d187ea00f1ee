//! Unit tests for the Yandex.Market client.


use reqwest::Client;

use super::YandexMarketApi;

pub(super) fn api_with_mock(mock_uri: &str) -> YandexMarketApi {
    YandexMarketApi::new(Client::new(), "test_token", "1001", "wh-55").with_base_url(mock_uri)
}
