//! HTTP asset fetcher.

use std::time::Duration;

use async_trait::async_trait;
use tracing::instrument;

use hsktrainer_core::traits::AssetFetcher;

use crate::error::AssetFetchError;

/// Success animation shown next to a correct answer.
pub const DEFAULT_ANIMATION_URL: &str =
    "https://assets10.lottiefiles.com/packages/lf20_yghbqt2z.json";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fetches JSON assets with a single GET request. No retries.
pub struct HttpAssetFetcher {
    client: reqwest::Client,
    timeout_secs: u64,
}

impl HttpAssetFetcher {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            timeout_secs,
        }
    }

    /// Fetch `url` and decode its body as JSON, reporting why it failed.
    pub async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, AssetFetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                AssetFetchError::Timeout(self.timeout_secs)
            } else {
                AssetFetchError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssetFetchError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| AssetFetchError::InvalidPayload(e.to_string()))
    }
}

impl Default for HttpAssetFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetFetcher for HttpAssetFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Option<serde_json::Value> {
        match self.fetch_json(url).await {
            Ok(payload) => Some(payload),
            Err(e) => {
                tracing::debug!("decorative asset unavailable: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn successful_fetch() {
        let server = MockServer::start().await;

        let body = serde_json::json!({"v": "5.5.2", "fr": 30, "layers": []});

        Mock::given(method("GET"))
            .and(path("/success.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let fetcher = HttpAssetFetcher::new();
        let payload = fetcher
            .fetch(&format!("{}/success.json", server.uri()))
            .await
            .unwrap();
        assert_eq!(payload["fr"], 30);
    }

    #[tokio::test]
    async fn not_found_is_absent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/success.json"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        let fetcher = HttpAssetFetcher::new();
        let url = format!("{}/success.json", server.uri());

        let err = fetcher.fetch_json(&url).await.unwrap_err();
        assert!(matches!(err, AssetFetchError::Status { status: 404 }));
        assert!(fetcher.fetch(&url).await.is_none());
    }

    #[tokio::test]
    async fn invalid_json_is_absent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/success.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let fetcher = HttpAssetFetcher::new();
        let url = format!("{}/success.json", server.uri());

        let err = fetcher.fetch_json(&url).await.unwrap_err();
        assert!(matches!(err, AssetFetchError::InvalidPayload(_)));
        assert!(fetcher.fetch(&url).await.is_none());
    }

    #[tokio::test]
    async fn unreachable_host_is_absent() {
        let fetcher = HttpAssetFetcher::with_timeout(2);
        let url = "http://127.0.0.1:1/success.json";

        let err = fetcher.fetch_json(url).await.unwrap_err();
        assert!(matches!(err, AssetFetchError::Network(_)), "got: {err:?}");
        assert!(fetcher.fetch(url).await.is_none());
    }
}
