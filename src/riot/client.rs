use std::num::NonZeroU32;
use std::sync::Arc;

use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use nonzero_ext::nonzero;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::error;

use super::metrics::RequestMetrics;
use super::region::{Platform, Region};

#[derive(Debug, Error)]
pub enum RiotApiError {
    #[error("request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("riot api returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// A Riot API call either yields the parsed body or fails with a
/// [`RiotApiError`], decided once at the executor boundary.
pub type ApiResult<T> = Result<T, RiotApiError>;

pub struct RiotClient {
    http: reqwest::Client,
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    /// Riot API key, sent as a query parameter on every request.
    key: String,
    metrics: Arc<RequestMetrics>,
    /// Routes both host families to a fixed base; used with a mock server.
    base_override: Option<String>,
}

impl RiotClient {
    pub fn new(key: String, requests_per_minute: NonZeroU32) -> Self {
        let quota = Quota::per_minute(requests_per_minute).allow_burst(nonzero!(20_u32));

        Self {
            http: reqwest::Client::new(),
            limiter: RateLimiter::direct(quota),
            key,
            metrics: RequestMetrics::new(),
            base_override: None,
        }
    }

    pub fn with_base_url(key: String, base: String) -> Self {
        let mut client = Self::new(key, nonzero!(6000_u32));
        client.base_override = Some(base);
        client
    }

    /// Spawn a task logging periodic metrics about requests.
    pub fn start_metrics_logging(&self) {
        let metrics = self.metrics.clone();
        tokio::spawn(async move { metrics.log_loop().await });
    }

    pub(crate) fn region_url(&self, region: Region, path: &str) -> String {
        match &self.base_override {
            Some(base) => format!("{}{}", base, path),
            None => format!("{}{}", region.base_url(), path),
        }
    }

    pub(crate) fn platform_url(&self, platform: Platform, path: &str) -> String {
        match &self.base_override {
            Some(base) => format!("{}{}", base, path),
            None => format!("{}{}", platform.base_url(), path),
        }
    }

    /// Issue a single GET request. One attempt per call, no retry; the rate
    /// limiter is awaited first. The API key travels as the `api_key` query
    /// parameter (upstream protocol, not a header). Any non-2xx status is
    /// logged with its URL and turned into [`RiotApiError::Status`];
    /// transport failures propagate untouched.
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        self.limiter.until_ready().await;
        self.metrics.inc();

        let res = self
            .http
            .get(url)
            .query(&[("api_key", self.key.as_str())])
            .query(query)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let message = res
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.pointer("/status/message")
                        .and_then(|m| m.as_str().map(str::to_owned))
                })
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            error!(%url, status = status.as_u16(), "riot api request failed");
            return Err(RiotApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        res.json().await.map_err(RiotApiError::Reqwest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn request_propagates_reqwest_error() {
        let client = RiotClient::new("RGAPI-INVALID-KEY".to_string(), nonzero!(100_u32));

        let bad_url = "ht!tp://invalid-url"; // incorrect schema

        let res: ApiResult<()> = client.get(bad_url, &[]).await;

        assert!(matches!(res, Err(RiotApiError::Reqwest(_))));
    }

    #[test]
    fn base_override_replaces_both_host_families() {
        let client =
            RiotClient::with_base_url("key".to_string(), "http://127.0.0.1:8080".to_string());

        assert_eq!(
            client.region_url(Region::Europe, "/riot/account/v1"),
            "http://127.0.0.1:8080/riot/account/v1"
        );
        assert_eq!(
            client.platform_url(Platform::EUN1, "/lol/summoner/v4"),
            "http://127.0.0.1:8080/lol/summoner/v4"
        );
    }
}
