//! Fetch-once cache for decorative assets.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use hsktrainer_core::traits::AssetFetcher;

/// Memoizes a fetcher's results per URL for the lifetime of the cache.
///
/// Absent results are cached too: a URL that failed once is not requested
/// again.
pub struct AssetCache {
    inner: Arc<dyn AssetFetcher>,
    entries: Mutex<HashMap<String, Option<serde_json::Value>>>,
}

impl AssetCache {
    pub fn new(inner: Arc<dyn AssetFetcher>) -> Self {
        Self {
            inner,
            entries: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl AssetFetcher for AssetCache {
    async fn fetch(&self, url: &str) -> Option<serde_json::Value> {
        // Held across the fetch so concurrent first requests share one call.
        let mut entries = self.entries.lock().await;
        if let Some(cached) = entries.get(url) {
            tracing::debug!(url, "asset cache hit");
            return cached.clone();
        }

        let payload = self.inner.fetch(url).await;
        entries.insert(url.to_string(), payload.clone());
        payload
    }
}
