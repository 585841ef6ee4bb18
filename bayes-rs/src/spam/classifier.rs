//! Naive Bayes decision
//!
//! Scores are base-10 log-probabilities so long documents do not underflow.
//! Both accumulators start at the class log-prior and collect one term per
//! distinct document token.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::model::TrainedModel;
use super::tokenizer::{TokenSet, TokenSource};
use super::types::{Label, LogScores, Prediction};
use crate::error::{ClassifierError, Result};

/// Imputed count for a token missing from one class but present in the other
const FALLBACK_COUNT: f64 = 1.0;

/// Score a token set against the model
pub fn score(model: &TrainedModel, tokens: &TokenSet) -> LogScores {
    let mut scores = LogScores {
        spam: model.prior_spam().log10(),
        ham: model.prior_ham().log10(),
    };

    let spam = model.spam_stats();
    let ham = model.ham_stats();
    let policy = model.policy();

    for token in tokens {
        if model.is_stop_word(token) {
            continue;
        }

        if policy.precompute_probabilities {
            let p_spam = spam
                .get(token)
                .unwrap_or_else(|| policy.unseen_probability(spam.doc_count()));
            let p_ham = ham
                .get(token)
                .unwrap_or_else(|| policy.unseen_probability(ham.doc_count()));

            scores.spam += p_spam.log10();
            scores.ham += p_ham.log10();
        } else {
            let (spam_count, ham_count) = match (spam.get(token), ham.get(token)) {
                // Unknown to both classes: favors neither
                (None, None) => continue,
                (s, h) => (s.unwrap_or(FALLBACK_COUNT), h.unwrap_or(FALLBACK_COUNT)),
            };

            scores.spam += policy.smoothed(spam_count, spam.doc_count()).log10();
            scores.ham += policy.smoothed(ham_count, ham.doc_count()).log10();
        }
    }

    scores
}

/// Tokenize and classify one document
pub fn classify<S: TokenSource + ?Sized>(model: &TrainedModel, document: &S) -> Result<Label> {
    let tokens = document.tokens()?;
    let scores = score(model, &tokens);
    let label = scores.verdict();
    debug!(
        "{}: log P(spam) = {:.4}, log P(ham) = {:.4} -> {}",
        document.name(),
        scores.spam,
        scores.ham,
        label
    );
    Ok(label)
}

/// Classify an optional document reference, rejecting an absent one
pub fn classify_opt<S: TokenSource + ?Sized>(
    model: &TrainedModel,
    document: Option<&S>,
) -> Result<Label> {
    let document = document
        .ok_or_else(|| ClassifierError::InvalidArgument("no document given".to_string()))?;
    classify(model, document)
}

/// Classify each file independently, keeping per-document outcomes.
///
/// A failure on one file does not affect the others.
pub fn classify_all<P: AsRef<Path>>(
    model: &TrainedModel,
    paths: &[P],
) -> Vec<(PathBuf, Result<Label>)> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            (path.to_path_buf(), classify(model, path))
        })
        .collect()
}

/// Classify files in order, either aborting on the first failure or
/// logging and skipping failed documents.
pub fn predict_files<P: AsRef<Path>>(
    model: &TrainedModel,
    paths: &[P],
    keep_going: bool,
) -> Result<Vec<Prediction>> {
    let mut predictions = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        match classify(model, path) {
            Ok(label) => predictions.push(Prediction {
                document: display_name(path),
                label,
            }),
            Err(e) if keep_going && !e.is_fatal_for_batch() => {
                warn!("Skipping {}: {}", path.display(), e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(predictions)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
