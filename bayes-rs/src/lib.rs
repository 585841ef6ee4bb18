//! bayes-rs: Naive Bayes spam/ham document classifier
//!
//! Trains a two-class Naive Bayes model from a spam corpus and a ham corpus
//! and labels new documents by comparing per-class log-probabilities.
//!
//! # Features
//!
//! - **Tokenization**: distinct whitespace-delimited tokens, subject marker dropped
//! - **Training**: per-class document frequencies and class priors
//! - **Variants**: add-one smoothing, or add-k smoothing with stop words and
//!   probabilities precomputed at training time
//! - **Immutable model**: one trained model serves any number of queries
//!
//! # Example
//!
//! ```no_run
//! use bayes_rs::spam::{classify, TrainedModel, VariantPolicy};
//! use bayes_rs::storage::list_documents;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let model = TrainedModel::train_from_dirs(
//!         Path::new("data/train/spam"),
//!         Path::new("data/train/ham"),
//!         VariantPolicy::plain(),
//!         None,
//!     )?;
//!
//!     for path in list_documents(Path::new("data/test"))? {
//!         println!("{} {}", path.display(), classify(&model, &path)?);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`spam`]: Tokenizer, corpus statistics, model and classifier
//! - [`storage`]: Corpus directory access

pub mod config;
pub mod error;
pub mod spam;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use error::{ClassifierError, Result};
pub use spam::{Label, TrainedModel, VariantPolicy};
