//! Trained model
//!
//! Built once from the two labeled corpora and never mutated afterwards, so
//! a single model can serve any number of classification calls.

use std::path::Path;
use tracing::info;

use super::corpus::{self, CorpusStats};
use super::stop_words::StopWords;
use super::tokenizer::TokenSource;
use super::types::VariantPolicy;
use crate::error::{ClassifierError, Result};
use crate::storage::list_documents;

/// Immutable Naive Bayes model for the spam/ham decision
#[derive(Debug, Clone)]
pub struct TrainedModel {
    spam: CorpusStats,
    ham: CorpusStats,
    prior_spam: f64,
    prior_ham: f64,
    policy: VariantPolicy,
    stop_words: Option<StopWords>,
}

impl TrainedModel {
    /// Train on the spam and ham documents.
    ///
    /// Both collections must be non-empty. Any unreadable or malformed
    /// training document aborts training.
    pub fn train<S: TokenSource>(
        spam_docs: &[S],
        ham_docs: &[S],
        policy: VariantPolicy,
        stop_words: Option<StopWords>,
    ) -> Result<Self> {
        if spam_docs.is_empty() {
            return Err(ClassifierError::Config(
                "spam training directory missing or empty".to_string(),
            ));
        }
        if ham_docs.is_empty() {
            return Err(ClassifierError::Config(
                "ham training directory missing or empty".to_string(),
            ));
        }
        if policy.use_stop_words && stop_words.is_none() {
            return Err(ClassifierError::Config(
                "policy excludes stop words but no stop-word list was loaded".to_string(),
            ));
        }

        let spam = corpus::build(spam_docs, policy, stop_words.as_ref())?;
        let ham = corpus::build(ham_docs, policy, stop_words.as_ref())?;

        let model = Self::from_stats(spam, ham, policy, stop_words)?;
        info!(
            "Trained model on {} spam / {} ham documents (P(spam) = {:.4})",
            model.spam.doc_count(),
            model.ham.doc_count(),
            model.prior_spam
        );
        Ok(model)
    }

    /// Train on every regular file of the spam and ham corpus directories
    pub fn train_from_dirs(
        spam_dir: &Path,
        ham_dir: &Path,
        policy: VariantPolicy,
        stop_words: Option<StopWords>,
    ) -> Result<Self> {
        let spam_docs = list_documents(spam_dir)?;
        let ham_docs = list_documents(ham_dir)?;
        Self::train(&spam_docs, &ham_docs, policy, stop_words)
    }

    /// Assemble a model from already built class statistics.
    ///
    /// Both classes must have been built under `policy`: raw counts cannot
    /// be read as probabilities, and precomputed probabilities are tied to
    /// the smoothing constant they were computed with.
    pub fn from_stats(
        spam: CorpusStats,
        ham: CorpusStats,
        policy: VariantPolicy,
        stop_words: Option<StopWords>,
    ) -> Result<Self> {
        if spam.doc_count() == 0 || ham.doc_count() == 0 {
            return Err(ClassifierError::Config(
                "training directory missing or empty".to_string(),
            ));
        }

        for (class, stats) in [("spam", &spam), ("ham", &ham)] {
            if *stats.policy() != policy {
                return Err(ClassifierError::Config(format!(
                    "{} statistics were built with {:?}, model policy is {:?}",
                    class,
                    stats.policy(),
                    policy
                )));
            }
        }

        let spam_docs = spam.doc_count() as f64;
        let ham_docs = ham.doc_count() as f64;
        let prior_spam = spam_docs / (spam_docs + ham_docs);

        Ok(Self {
            spam,
            ham,
            prior_spam,
            prior_ham: 1.0 - prior_spam,
            policy,
            stop_words: stop_words.filter(|_| policy.use_stop_words),
        })
    }

    pub fn spam_stats(&self) -> &CorpusStats {
        &self.spam
    }

    pub fn ham_stats(&self) -> &CorpusStats {
        &self.ham
    }

    pub fn prior_spam(&self) -> f64 {
        self.prior_spam
    }

    pub fn prior_ham(&self) -> f64 {
        self.prior_ham
    }

    pub fn policy(&self) -> &VariantPolicy {
        &self.policy
    }

    /// Stop words in effect, if the policy uses them
    pub fn stop_words(&self) -> Option<&StopWords> {
        self.stop_words.as_ref()
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words
            .as_ref()
            .is_some_and(|sw| sw.contains(token))
    }
}
