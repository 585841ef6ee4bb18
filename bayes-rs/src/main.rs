//! bayes-rs: Naive Bayes spam filter
//!
//! Trains on labeled spam/ham directories and labels every document of a
//! query directory.
//!
//! # Usage
//!
//! ```bash
//! # Classify data/test with the plain variant
//! bayes-rs classify
//!
//! # Extra-credit variant, JSON output, skip unreadable documents
//! bayes-rs --variant extra-credit classify data/test --json --keep-going
//!
//! # Show what the model learned
//! bayes-rs -c bayes.toml stats
//! ```

use anyhow::Context;
use bayes_rs::config::Config;
use bayes_rs::spam::{predict_files, Variant};
use bayes_rs::storage::list_documents;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "bayes-rs")]
#[command(about = "Naive Bayes spam/ham document classifier", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Classifier variant: plain or extra-credit
    #[arg(long)]
    variant: Option<Variant>,

    /// Laplace smoothing constant (extra-credit variant only)
    #[arg(long)]
    laplace_k: Option<f64>,

    /// Stop-word list used by the extra-credit variant
    #[arg(long)]
    stop_words: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train, then label every document of a directory
    Classify {
        /// Directory of documents to classify (defaults to data.test_dir)
        dir: Option<PathBuf>,
        /// Print a JSON array instead of "<name> <label>" lines
        #[arg(long)]
        json: bool,
        /// Log and skip unreadable or malformed documents
        #[arg(long)]
        keep_going: bool,
    },
    /// Train, then print model statistics
    Stats,
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bayes_rs={}", config.logging.level).into());
    let registry = tracing_subscriber::registry().with(filter);
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    match config.logging.format.as_str() {
        "json" => registry.with(layer.json()).init(),
        "compact" => registry.with(layer.compact()).init(),
        _ => registry.with(layer.pretty()).init(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(variant) = cli.variant {
        config.model.variant = variant;
    }
    if let Some(k) = cli.laplace_k {
        config.model.laplace_k = Some(k);
    }
    if let Some(path) = cli.stop_words {
        config.model.stop_words = Some(path);
    }
    config.validate()?;

    init_logging(&config);
    info!("Starting bayes-rs v{}", env!("CARGO_PKG_VERSION"));
    info!("  Variant: {}", config.model.variant);
    info!("  Spam corpus: {}", config.data.spam_dir.display());
    info!("  Ham corpus: {}", config.data.ham_dir.display());

    let model = config.train_model()?;

    match cli.command {
        Commands::Classify {
            dir,
            json,
            keep_going,
        } => {
            let dir = dir.unwrap_or_else(|| config.data.test_dir.clone());
            let documents = list_documents(&dir)?;
            info!("Classifying {} documents from {}", documents.len(), dir.display());

            let predictions = predict_files(&model, &documents, keep_going)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&predictions)?);
            } else {
                for prediction in &predictions {
                    println!("{} {}", prediction.document, prediction.label);
                }
            }
        }
        Commands::Stats => {
            let policy = model.policy();
            println!("Variant:           {}", config.model.variant);
            println!("Laplace k:         {}", policy.laplace_k);
            println!("Precomputed:       {}", policy.precompute_probabilities);
            println!(
                "Stop words:        {}",
                model.stop_words().map_or(0, |sw| sw.len())
            );
            println!("{:-<40}", "");
            println!("{:<10} {:>8} {:>10} {:>10}", "Class", "Docs", "Prior", "Tokens");
            println!(
                "{:<10} {:>8} {:>10.4} {:>10}",
                "spam",
                model.spam_stats().doc_count(),
                model.prior_spam(),
                model.spam_stats().vocabulary_size()
            );
            println!(
                "{:<10} {:>8} {:>10.4} {:>10}",
                "ham",
                model.ham_stats().doc_count(),
                model.prior_ham(),
                model.ham_stats().vocabulary_size()
            );
        }
    }

    Ok(())
}
