//! hsktrainer-assets — decorative asset fetching and configuration.
//!
//! Implements the `AssetFetcher` trait over HTTP, a fetch-once cache in
//! front of any fetcher, and the `hsktrainer.toml` configuration loader.

pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;

pub use cache::AssetCache;
pub use config::{create_fetcher, load_config_from, TrainerConfig};
pub use error::AssetFetchError;
pub use http::{HttpAssetFetcher, DEFAULT_ANIMATION_URL};
