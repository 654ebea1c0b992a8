//! hsktrainer CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use hsktrainer_core::model::Level;

mod commands;

use commands::CommonOptions;

#[derive(Parser)]
#[command(name = "hsktrainer", version, about = "HSK vocabulary trainer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive quiz in the terminal
    Play {
        /// HSK level to start on (HSK1..HSK6)
        #[arg(long)]
        level: Option<Level>,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Render one quiz round as an HTML page
    Page {
        /// HSK level to draw the word from (HSK1..HSK6)
        #[arg(long)]
        level: Option<Level>,

        /// Submit this answer before rendering
        #[arg(long)]
        answer: Option<String>,

        /// Output file
        #[arg(long, default_value = "hsktrainer.html")]
        output: PathBuf,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Check that every level of the vocabulary file loads
    Validate {
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Create a starter config and sample vocabulary deck
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hsktrainer=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { level, common } => commands::play::execute(level, common).await,
        Commands::Page {
            level,
            answer,
            output,
            common,
        } => commands::page::execute(level, answer, output, common).await,
        Commands::Validate { common } => commands::validate::execute(common),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
