//! Mock fetcher for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use hsktrainer_core::traits::AssetFetcher;

/// A mock asset fetcher for testing without network access.
pub struct MockFetcher {
    /// Payload returned for every URL, or `None` to simulate failure.
    payload: Option<serde_json::Value>,
    /// Number of calls made.
    call_count: AtomicU32,
    /// Last URL requested.
    last_url: Mutex<Option<String>>,
}

impl MockFetcher {
    /// Create a mock that always returns `payload`.
    pub fn with_payload(payload: serde_json::Value) -> Self {
        Self {
            payload: Some(payload),
            call_count: AtomicU32::new(0),
            last_url: Mutex::new(None),
        }
    }

    /// Create a mock whose asset is never available.
    pub fn unavailable() -> Self {
        Self {
            payload: None,
            call_count: AtomicU32::new(0),
            last_url: Mutex::new(None),
        }
    }

    /// Get the number of calls made to this fetcher.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the last URL requested from this fetcher.
    pub fn last_url(&self) -> Option<String> {
        self.last_url.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Option<serde_json::Value> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_url.lock().unwrap() = Some(url.to_string());
        self.payload.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_payload() {
        let fetcher = MockFetcher::with_payload(serde_json::json!({"layers": []}));

        let payload = fetcher.fetch("https://example.com/a.json").await.unwrap();
        assert!(payload["layers"].is_array());
        assert_eq!(fetcher.call_count(), 1);
        assert_eq!(
            fetcher.last_url().as_deref(),
            Some("https://example.com/a.json")
        );
    }

    #[tokio::test]
    async fn unavailable_payload() {
        let fetcher = MockFetcher::unavailable();
        assert!(fetcher.fetch("https://example.com/a.json").await.is_none());
        assert_eq!(fetcher.call_count(), 1);
    }
}
