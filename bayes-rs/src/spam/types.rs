//! Spam types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smoothing constant used by the extra-credit variant
pub const DEFAULT_LAPLACE_K: f64 = 0.001;

/// Class label assigned to a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Spam,
    Ham,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Spam => "spam",
            Label::Ham => "ham",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named classifier variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Add-one smoothing over raw document frequencies, no stop words
    #[default]
    Plain,
    /// Add-k smoothing, precomputed probabilities, stop words excluded
    ExtraCredit,
}

impl Variant {
    /// Default policy for this variant
    pub fn policy(self) -> VariantPolicy {
        match self {
            Variant::Plain => VariantPolicy::plain(),
            Variant::ExtraCredit => VariantPolicy::extra_credit(DEFAULT_LAPLACE_K),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Plain => f.write_str("plain"),
            Variant::ExtraCredit => f.write_str("extra-credit"),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(Variant::Plain),
            "extra-credit" | "extra_credit" => Ok(Variant::ExtraCredit),
            other => Err(format!(
                "unknown variant '{}' (expected 'plain' or 'extra-credit')",
                other
            )),
        }
    }
}

/// Smoothing and filtering strategy shared by training and inference
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariantPolicy {
    /// Exclude stop words from counting and scoring
    pub use_stop_words: bool,
    /// Laplace constant `k` in `(count + k) / (docs + 2k)`
    pub laplace_k: f64,
    /// Store smoothed probabilities at training time instead of counts
    pub precompute_probabilities: bool,
}

impl VariantPolicy {
    /// Add-one smoothing over document frequencies.
    ///
    /// With `k = 1` the on-the-fly formula reduces to `(count + 1) / (docs + 2)`.
    pub fn plain() -> Self {
        Self {
            use_stop_words: false,
            laplace_k: 1.0,
            precompute_probabilities: false,
        }
    }

    /// Add-k smoothing with stop-word exclusion and precomputed probabilities
    pub fn extra_credit(laplace_k: f64) -> Self {
        Self {
            use_stop_words: true,
            laplace_k,
            precompute_probabilities: true,
        }
    }

    /// Value stored for a token the first time a class document contains it
    pub fn initial_count(&self) -> f64 {
        if self.precompute_probabilities {
            2.0
        } else {
            1.0
        }
    }

    /// Smoothed conditional probability for a statistic and class size
    pub fn smoothed(&self, count: f64, doc_count: usize) -> f64 {
        (count + self.laplace_k) / (doc_count as f64 + 2.0 * self.laplace_k)
    }

    /// Probability of a token that no class document contains
    pub fn unseen_probability(&self, doc_count: usize) -> f64 {
        self.smoothed(0.0, doc_count)
    }
}

impl Default for VariantPolicy {
    fn default() -> Self {
        Self::plain()
    }
}

/// Verdict for one queried document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Document identifier (file name)
    pub document: String,
    /// Predicted class
    pub label: Label,
}

/// Accumulated base-10 log-probabilities for both classes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogScores {
    pub spam: f64,
    pub ham: f64,
}

impl LogScores {
    /// Spam only on a strict win; a tie goes to ham
    pub fn verdict(&self) -> Label {
        if self.spam > self.ham {
            Label::Spam
        } else {
            Label::Ham
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_display() {
        assert_eq!(Label::Spam.to_string(), "spam");
        assert_eq!(Label::Ham.to_string(), "ham");
    }

    #[test]
    fn test_label_serializes_lowercase() {
        let json = serde_json::to_string(&Label::Spam).unwrap();
        assert_eq!(json, "\"spam\"");
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("plain".parse::<Variant>().unwrap(), Variant::Plain);
        assert_eq!("extra-credit".parse::<Variant>().unwrap(), Variant::ExtraCredit);
        assert_eq!("Extra_Credit".parse::<Variant>().unwrap(), Variant::ExtraCredit);
        assert!("bogus".parse::<Variant>().is_err());
    }

    #[test]
    fn test_plain_policy_is_add_one() {
        let policy = VariantPolicy::plain();
        assert!(!policy.use_stop_words);
        assert!(!policy.precompute_probabilities);
        assert_eq!(policy.initial_count(), 1.0);
        // (3 + 1) / (6 + 2)
        assert_eq!(policy.smoothed(3.0, 6), 0.5);
    }

    #[test]
    fn test_extra_credit_policy() {
        let policy = Variant::ExtraCredit.policy();
        assert!(policy.use_stop_words);
        assert!(policy.precompute_probabilities);
        assert_eq!(policy.laplace_k, DEFAULT_LAPLACE_K);
        assert_eq!(policy.initial_count(), 2.0);

        let floor = policy.unseen_probability(10);
        assert!((floor - 0.001 / 10.002).abs() < 1e-15);
    }

    #[test]
    fn test_tie_predicts_ham() {
        let scores = LogScores { spam: -1.5, ham: -1.5 };
        assert_eq!(scores.verdict(), Label::Ham);

        let scores = LogScores { spam: -1.0, ham: -1.5 };
        assert_eq!(scores.verdict(), Label::Spam);
    }
}
