//! Subcommand implementations and the setup they share.

pub mod init;
pub mod page;
pub mod play;
pub mod validate;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use hsktrainer_assets::{create_fetcher, load_config_from, TrainerConfig};
use hsktrainer_core::traits::{open_source, AssetFetcher};
use hsktrainer_core::{AnswerOutcome, QuizEngine, VocabularyStore};

/// Options accepted by every command that loads vocabulary.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonOptions {
    /// Vocabulary workbook (.xlsx/.xls/.ods) or TOML deck
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Never fetch the success animation
    #[arg(long)]
    pub no_animation: bool,

    /// Seed for word selection (repeatable sessions)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Everything a command needs to run quiz rounds.
pub struct Trainer {
    pub config: TrainerConfig,
    pub engine: QuizEngine,
    fetcher: Option<Arc<dyn AssetFetcher>>,
}

impl Trainer {
    /// Load config, apply command-line overrides, and open the vocabulary.
    pub fn from_options(options: &CommonOptions) -> Result<Self> {
        let mut config = load_config_from(options.config.as_deref())?;
        if let Some(vocabulary) = &options.vocabulary {
            config.vocabulary = vocabulary.clone();
        }
        if options.no_animation {
            config.animation = false;
        }

        let store = Arc::new(VocabularyStore::new(open_source(&config.vocabulary)));
        let engine = match options.seed {
            Some(seed) => QuizEngine::with_rng(store, StdRng::seed_from_u64(seed)),
            None => QuizEngine::new(store),
        };
        let fetcher = create_fetcher(&config);

        Ok(Self {
            config,
            engine,
            fetcher,
        })
    }

    /// The success animation for a correct outcome, if one is available.
    pub async fn animation_for(&self, outcome: &AnswerOutcome) -> Option<serde_json::Value> {
        if !outcome.correct {
            return None;
        }
        let fetcher = self.fetcher.as_ref()?;
        fetcher.fetch(&self.config.animation_url).await
    }
}
