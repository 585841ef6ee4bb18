//! Naive Bayes spam classification
//!
//! Tokenization, per-class corpus statistics, the immutable trained model
//! and the log-probability decision built on top of it.

pub mod classifier;
pub mod corpus;
pub mod model;
pub mod stop_words;
pub mod tokenizer;
pub mod types;

pub use classifier::{classify, classify_all, classify_opt, predict_files, score};
pub use corpus::{CorpusStats, CorpusStatsBuilder};
pub use model::TrainedModel;
pub use stop_words::StopWords;
pub use tokenizer::{tokenize, Document, TokenSet, TokenSource};
pub use types::*;
