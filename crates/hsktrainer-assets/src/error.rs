//! Asset fetch error types.
//!
//! These never reach the user: the fetcher logs them and degrades to "no
//! animation".

use thiserror::Error;

/// Errors that can occur when fetching a decorative asset.
#[derive(Debug, Error)]
pub enum AssetFetchError {
    /// The server answered with a non-success status.
    #[error("asset request failed (HTTP {status})")]
    Status { status: u16 },

    /// The request timed out.
    #[error("asset request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// The body was not valid JSON.
    #[error("invalid asset payload: {0}")]
    InvalidPayload(String),
}
