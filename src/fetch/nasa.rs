use async_trait::async_trait;
use reqwest::{Method, Request, Url};
use tracing::debug;

use super::auth::UrlParam;
use super::client::HttpClient;
use super::{FetchError, NeoFeedApi};
use crate::feed::FeedResponse;
use crate::validate::DateRange;

pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov";

/// Client for the NeoWs feed endpoint. The access key rides along as a query
/// parameter on every request via the [`UrlParam`] decorator.
pub struct NasaNeoClient<C> {
    client: UrlParam<C>,
    base_url: String,
}

impl<C: HttpClient> NasaNeoClient<C> {
    pub fn new(inner: C, api_key: String) -> Self {
        Self {
            client: UrlParam::api_key(inner, api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the endpoint base, for tests against a local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl<C: HttpClient> NeoFeedApi for NasaNeoClient<C> {
    async fn feed(&self, range: &DateRange) -> Result<FeedResponse, FetchError> {
        let url = Url::parse_with_params(
            &format!("{}/neo/rest/v1/feed", self.base_url),
            &[
                ("start_date", range.start_iso()),
                ("end_date", range.end_iso()),
            ],
        )
        .map_err(|e| FetchError::Url(e.to_string()))?;

        debug!(%url, "Requesting feed window");
        let resp = self.client.execute(Request::new(Method::GET, url)).await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Api { status, body });
        }

        let body = resp.text().await?;
        let feed: FeedResponse = serde_json::from_str(&body)?;
        Ok(feed)
    }
}
