//! Per-class corpus statistics
//!
//! The builder walks the documents of one class and records, for every
//! token, how many documents contain it. Depending on the policy the
//! finished map holds those raw document frequencies or the smoothed
//! probabilities `P(token | class)` derived from them.

use std::collections::HashMap;
use tracing::debug;

use super::stop_words::StopWords;
use super::tokenizer::{TokenSet, TokenSource};
use super::types::VariantPolicy;
use crate::error::Result;

/// Token statistics for a single class
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusStats {
    weights: HashMap<String, f64>,
    doc_count: usize,
    policy: VariantPolicy,
}

impl CorpusStats {
    /// Statistic recorded for a token, if any class document contained it
    pub fn get(&self, token: &str) -> Option<f64> {
        self.weights.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.weights.contains_key(token)
    }

    /// Number of documents the statistics were built from
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Number of distinct tokens seen in the class
    pub fn vocabulary_size(&self) -> usize {
        self.weights.len()
    }

    /// Whether weights are smoothed probabilities rather than counts
    pub fn is_precomputed(&self) -> bool {
        self.policy.precompute_probabilities
    }

    /// Policy the statistics were built under
    pub fn policy(&self) -> &VariantPolicy {
        &self.policy
    }
}

/// Accumulates document frequencies for one class
pub struct CorpusStatsBuilder<'a> {
    policy: VariantPolicy,
    stop_words: Option<&'a StopWords>,
    counts: HashMap<String, f64>,
    doc_count: usize,
}

impl<'a> CorpusStatsBuilder<'a> {
    /// Stop words are only consulted when the policy enables them
    pub fn new(policy: VariantPolicy, stop_words: Option<&'a StopWords>) -> Self {
        Self {
            policy,
            stop_words: stop_words.filter(|_| policy.use_stop_words),
            counts: HashMap::new(),
            doc_count: 0,
        }
    }

    /// Count one document. Each token counts once per document.
    pub fn add_tokens(&mut self, tokens: &TokenSet) {
        self.doc_count += 1;
        for token in tokens {
            if self.stop_words.is_some_and(|sw| sw.contains(token)) {
                continue;
            }
            match self.counts.get_mut(token.as_str()) {
                Some(count) => *count += 1.0,
                None => {
                    self.counts
                        .insert(token.clone(), self.policy.initial_count());
                }
            }
        }
    }

    /// Tokenize and count one document
    pub fn add_document<S: TokenSource + ?Sized>(&mut self, document: &S) -> Result<()> {
        let tokens = document.tokens()?;
        debug!("Counted {} tokens from {}", tokens.len(), document.name());
        self.add_tokens(&tokens);
        Ok(())
    }

    /// Fold in a builder that counted a disjoint set of documents.
    ///
    /// Produces the same statistics as counting both document sets
    /// sequentially in one builder.
    pub fn merge(&mut self, other: CorpusStatsBuilder<'_>) {
        let initial = self.policy.initial_count();
        self.doc_count += other.doc_count;
        for (token, count) in other.counts {
            // Both sides store `initial` for their first sighting, so the
            // sum double-counts the base by `initial - 1`.
            match self.counts.get_mut(&token) {
                Some(existing) => *existing += count - (initial - 1.0),
                None => {
                    self.counts.insert(token, count);
                }
            }
        }
    }

    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Finish counting; precomputes probabilities when the policy asks for it
    pub fn finish(self) -> CorpusStats {
        let mut weights = self.counts;
        if self.policy.precompute_probabilities {
            for weight in weights.values_mut() {
                *weight = self.policy.smoothed(*weight, self.doc_count);
            }
        }

        CorpusStats {
            weights,
            doc_count: self.doc_count,
            policy: self.policy,
        }
    }
}

/// Build the statistics for one class.
///
/// The first unreadable or malformed document aborts the whole build.
pub fn build<S: TokenSource>(
    documents: &[S],
    policy: VariantPolicy,
    stop_words: Option<&StopWords>,
) -> Result<CorpusStats> {
    let mut builder = CorpusStatsBuilder::new(policy, stop_words);
    for document in documents {
        builder.add_document(document)?;
    }
    Ok(builder.finish())
}
