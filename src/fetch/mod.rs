//! HTTP access to the near-Earth-object feed.
//!
//! [`HttpClient`] is the transport seam, [`BasicClient`] the production
//! implementation, and [`UrlParam`](auth::UrlParam) the access-key decorator.
//! [`NeoFeedApi`] abstracts the one outbound call the dashboard makes so the
//! controller can be driven by a stub in tests; [`NasaNeoClient`] is the real
//! implementation against NASA's NeoWs endpoint.

pub mod auth;
mod basic;
mod client;
mod nasa;

pub use basic::BasicClient;
pub use client::HttpClient;
pub use nasa::NasaNeoClient;

use crate::feed::FeedResponse;
use crate::validate::DateRange;
use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of one feed request.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("feed request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("feed API returned status {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("malformed feed body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid feed URL: {0}")]
    Url(String),
}

/// One GET for a validated date range, returning the raw grouped-by-day
/// payload. Exactly one request per submission; no retry, caching, or
/// pagination.
#[async_trait]
pub trait NeoFeedApi: Send + Sync {
    async fn feed(&self, range: &DateRange) -> Result<FeedResponse, FetchError>;
}
