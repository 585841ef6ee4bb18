//! Stop-word list
//!
//! Tokens listed here are ignored by both training and scoring when the
//! active policy enables stop words.

use std::path::Path;
use tracing::{debug, info};

use super::tokenizer::{self, TokenSet};
use crate::error::{ClassifierError, Result};

/// Immutable set of tokens excluded from counting and scoring
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: TokenSet,
}

impl StopWords {
    /// Parse a whitespace-separated stop-word list.
    ///
    /// Legacy lists were read with the document tokenizer, which treats the
    /// first entry as a subject marker and drops it. `skip_first` keeps that
    /// behavior for lists written with a throwaway first line.
    pub fn parse(text: &str, skip_first: bool) -> Self {
        let mut words = tokenizer::words(text);
        if skip_first {
            if let Some(dropped) = words.next() {
                debug!("Dropping leading stop-word entry '{}'", dropped);
            }
        }
        Self {
            words: words.collect(),
        }
    }

    /// Load a stop-word list from disk
    pub fn load(path: &Path, skip_first: bool) -> Result<Self> {
        if !path.is_file() {
            return Err(ClassifierError::Config(format!(
                "stop-word list missing: {}",
                path.display()
            )));
        }

        let bytes = std::fs::read(path).map_err(|e| ClassifierError::io(path, e))?;
        let stop_words = Self::parse(&String::from_utf8_lossy(&bytes), skip_first);
        info!(
            "Loaded {} stop words from {}",
            stop_words.len(),
            path.display()
        );
        Ok(stop_words)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
