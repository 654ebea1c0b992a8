//! Trainer configuration and fetcher factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use hsktrainer_core::model::Level;
use hsktrainer_core::traits::AssetFetcher;

use crate::cache::AssetCache;
use crate::http::{HttpAssetFetcher, DEFAULT_ANIMATION_URL};

/// Top-level hsktrainer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Vocabulary workbook (or TOML deck).
    #[serde(default = "default_vocabulary")]
    pub vocabulary: PathBuf,
    /// Level selected when a session starts.
    #[serde(default)]
    pub default_level: Level,
    /// Whether to fetch the success animation at all.
    #[serde(default = "default_true")]
    pub animation: bool,
    /// Address of the success animation.
    #[serde(default = "default_animation_url")]
    pub animation_url: String,
    /// Timeout for the animation request.
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

fn default_vocabulary() -> PathBuf {
    PathBuf::from("Tuvung.xlsx")
}
fn default_true() -> bool {
    true
}
fn default_animation_url() -> String {
    DEFAULT_ANIMATION_URL.to_string()
}
fn default_timeout() -> u64 {
    10
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            vocabulary: default_vocabulary(),
            default_level: Level::default(),
            animation: default_true(),
            animation_url: default_animation_url(),
            request_timeout_secs: default_timeout(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `hsktrainer.toml` in the current directory
/// 2. `~/.config/hsktrainer/config.toml`
///
/// Environment variable override: `HSKTRAINER_VOCABULARY`.
pub fn load_config_from(path: Option<&Path>) -> Result<TrainerConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("hsktrainer.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<TrainerConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => TrainerConfig::default(),
    };

    if let Ok(vocabulary) = std::env::var("HSKTRAINER_VOCABULARY") {
        config.vocabulary = PathBuf::from(vocabulary);
    }

    config.vocabulary = PathBuf::from(resolve_env_vars(&config.vocabulary.to_string_lossy()));
    config.animation_url = resolve_env_vars(&config.animation_url);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("hsktrainer"))
}

/// Create the cached animation fetcher described by `config`.
///
/// Returns `None` when animations are disabled.
pub fn create_fetcher(config: &TrainerConfig) -> Option<Arc<dyn AssetFetcher>> {
    if !config.animation {
        return None;
    }
    let http = HttpAssetFetcher::with_timeout(config.request_timeout_secs);
    Some(Arc::new(AssetCache::new(Arc::new(http))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_HSKTRAINER_TEST_VAR", "decks");
        assert_eq!(resolve_env_vars("${_HSKTRAINER_TEST_VAR}"), "decks");
        assert_eq!(
            resolve_env_vars("${_HSKTRAINER_TEST_VAR}/Tuvung.xlsx"),
            "decks/Tuvung.xlsx"
        );
        std::env::remove_var("_HSKTRAINER_TEST_VAR");
    }

    #[test]
    fn default_config() {
        let config = TrainerConfig::default();
        assert_eq!(config.vocabulary, PathBuf::from("Tuvung.xlsx"));
        assert_eq!(config.default_level, Level::Hsk1);
        assert!(config.animation);
        assert_eq!(config.animation_url, DEFAULT_ANIMATION_URL);
    }

    #[test]
    fn parse_partial_config() {
        let toml_str = r#"
vocabulary = "decks/hsk.xlsx"
default_level = "HSK3"
animation = false
"#;
        let config: TrainerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.vocabulary, PathBuf::from("decks/hsk.xlsx"));
        assert_eq!(config.default_level, Level::Hsk3);
        assert!(!config.animation);
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config_from(Some(Path::new("/nonexistent/hsktrainer.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "default_level = \"HSK2\"\nrequest_timeout_secs = 3\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.default_level, Level::Hsk2);
        assert_eq!(config.request_timeout_secs, 3);
    }

    #[test]
    fn invalid_level_fails_to_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "default_level = \"HSK9\"\n").unwrap();

        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));
    }

    #[test]
    fn disabled_animation_has_no_fetcher() {
        let config = TrainerConfig {
            animation: false,
            ..Default::default()
        };
        assert!(create_fetcher(&config).is_none());
        assert!(create_fetcher(&TrainerConfig::default()).is_some());
    }
}
