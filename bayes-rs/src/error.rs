use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed document {0}: no subject marker found")]
    MalformedDocument(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl ClassifierError {
    /// Wrap an I/O failure together with the document it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ClassifierError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether a batch over many documents should stop on this error.
    ///
    /// Per-document failures (unreadable or malformed input) only concern
    /// the document at hand; everything else means the run is misconfigured.
    pub fn is_fatal_for_batch(&self) -> bool {
        !matches!(
            self,
            ClassifierError::Io { .. } | ClassifierError::MalformedDocument(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_document() {
        let err = ClassifierError::io(
            "data/train/spam/7.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("data/train/spam/7.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_batch_fatality() {
        assert!(ClassifierError::Config("x".to_string()).is_fatal_for_batch());
        assert!(ClassifierError::InvalidArgument("x".to_string()).is_fatal_for_batch());
        assert!(!ClassifierError::MalformedDocument("x".to_string()).is_fatal_for_batch());
        assert!(!ClassifierError::io(
            "x",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone")
        )
        .is_fatal_for_batch());
    }
}
