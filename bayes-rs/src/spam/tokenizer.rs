//! Document tokenization
//!
//! A document is reduced to the set of its distinct whitespace-delimited
//! tokens. The first token is the subject marker (`Subject:`) and is always
//! dropped. Tokens are kept verbatim: no case folding, no punctuation
//! stripping, so `work,` and `work` are different tokens.

use std::collections::hash_set;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{ClassifierError, Result};

/// Distinct tokens of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet(HashSet<String>);

impl TokenSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.0.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for TokenSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for TokenSet {
    type Item = String;
    type IntoIter = hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Token delimiter.
///
/// Unicode white space, except the no-break spaces (U+00A0, U+2007, U+202F)
/// and NEL (U+0085), which stay inside a token. The ASCII information
/// separators U+001C..=U+001F do delimit.
fn is_delimiter(c: char) -> bool {
    match c {
        '\u{0085}' | '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        '\u{001C}'..='\u{001F}' => true,
        _ => c.is_whitespace(),
    }
}

/// Split text into its non-empty delimiter-separated words
pub(crate) fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_delimiter).filter(|word| !word.is_empty())
}

/// Tokenize document text, dropping the leading subject marker.
///
/// Returns `None` when the text has no token at all, not even the marker.
pub fn tokenize(text: &str) -> Option<TokenSet> {
    let mut words = words(text);
    words.next()?;
    Some(words.collect())
}

/// An in-memory document with an identifier used in error messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Read a document from disk; invalid UTF-8 is replaced, not rejected
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| ClassifierError::io(path, e))?;
        Ok(Self {
            name: path.display().to_string(),
            text: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

/// Anything that can be reduced to a token set: files on disk or documents
/// already held in memory.
pub trait TokenSource {
    /// Identifier used in logs and error messages
    fn name(&self) -> String;

    /// Load and tokenize the document
    fn tokens(&self) -> Result<TokenSet>;
}

impl TokenSource for Document {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn tokens(&self) -> Result<TokenSet> {
        tokenize(&self.text).ok_or_else(|| ClassifierError::MalformedDocument(self.name.clone()))
    }
}

impl TokenSource for Path {
    fn name(&self) -> String {
        self.display().to_string()
    }

    fn tokens(&self) -> Result<TokenSet> {
        if self.as_os_str().is_empty() {
            return Err(ClassifierError::InvalidArgument(
                "no document path given".to_string(),
            ));
        }
        if self.is_dir() {
            return Err(ClassifierError::InvalidArgument(format!(
                "{} is a directory, not a document",
                self.display()
            )));
        }
        Document::read(self)?.tokens()
    }
}

impl TokenSource for PathBuf {
    fn name(&self) -> String {
        self.as_path().name()
    }

    fn tokens(&self) -> Result<TokenSet> {
        self.as_path().tokens()
    }
}

impl<T: TokenSource + ?Sized> TokenSource for &T {
    fn name(&self) -> String {
        (**self).name()
    }

    fn tokens(&self) -> Result<TokenSet> {
        (**self).tokens()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_tokenize_drops_subject_and_duplicates() {
        let tokens = tokenize("Subject a a b").unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("a"));
        assert!(tokens.contains("b"));
        assert!(!tokens.contains("Subject"));
    }

    #[test]
    fn test_tokenize_keeps_punctuation_and_case() {
        let text = "Subject: Get rid of your loans\nIf you work for us, we will\nwork !";
        let tokens = tokenize(text).unwrap();
        assert!(tokens.contains("Get"));
        assert!(tokens.contains("us,"));
        assert!(tokens.contains("work"));
        assert!(tokens.contains("!"));
        assert!(!tokens.contains("get"));
        assert!(!tokens.contains("Subject:"));
    }

    #[test]
    fn test_no_break_space_stays_inside_token() {
        let tokens = tokenize("Subject:\u{00A0}x caf\u{00A0}bar 10\u{202F}000\u{2007}$").unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("caf\u{00A0}bar"));
        assert!(tokens.contains("10\u{202F}000\u{2007}$"));
        assert!(!tokens.contains("x"));
    }

    #[test]
    fn test_unicode_and_separator_whitespace_delimits() {
        let tokens = tokenize("Subject:\u{3000}a\u{2028}b\u{001F}c\u{000B}d\u{0085}e").unwrap();
        assert_eq!(tokens.len(), 4);
        assert!(tokens.contains("a"));
        assert!(tokens.contains("b"));
        assert!(tokens.contains("c"));
        assert!(tokens.contains("d\u{0085}e"));
    }

    #[test]
    fn test_tokenize_marker_only_is_empty_set() {
        let tokens = tokenize("  Subject:\n\n").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokenize_blank_document_is_malformed() {
        assert!(tokenize("").is_none());
        assert!(tokenize(" \n\t ").is_none());

        let doc = Document::new("empty.txt", "\n");
        match doc.tokens() {
            Err(ClassifierError::MalformedDocument(name)) => assert_eq!(name, "empty.txt"),
            other => panic!("expected malformed document, got {:?}", other),
        }
    }

    #[test]
    fn test_path_source_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("1.txt");
        fs::write(&path, "Subject: hello\nfree money , free").unwrap();

        let tokens = path.tokens().unwrap();
        let expected: TokenSet = ["hello", "free", "money", ","].into_iter().collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_path_source_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        match path.tokens() {
            Err(ClassifierError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected IO error, got {:?}", other),
        }
    }

    #[test]
    fn test_path_source_rejects_empty_and_directory() {
        let temp_dir = TempDir::new().unwrap();

        assert!(matches!(
            Path::new("").tokens(),
            Err(ClassifierError::InvalidArgument(_))
        ));
        assert!(matches!(
            temp_dir.path().tokens(),
            Err(ClassifierError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("latin1.txt");
        fs::write(&path, b"Subject: caf\xe9 ok").unwrap();

        let tokens = path.tokens().unwrap();
        assert!(tokens.contains("ok"));
        assert!(tokens.contains("caf\u{fffd}"));
    }
}
