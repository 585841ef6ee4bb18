use crate::error::{ClassifierError, Result};
use crate::spam::{StopWords, TrainedModel, Variant, VariantPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DataConfig {
    pub spam_dir: PathBuf,
    pub ham_dir: PathBuf,
    pub test_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelConfig {
    pub variant: Variant,
    /// Smoothing constant for the extra-credit variant; the plain formula is fixed
    pub laplace_k: Option<f64>,
    pub stop_words: Option<PathBuf>,
    /// Drop the first entry of the stop-word list (legacy list format)
    pub skip_first_stop_word: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            spam_dir: PathBuf::from("data/train/spam"),
            ham_dir: PathBuf::from("data/train/ham"),
            test_dir: PathBuf::from("data/test"),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Plain,
            laplace_k: None,
            stop_words: Some(PathBuf::from("stop_words.txt")),
            skip_first_stop_word: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClassifierError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Smoothing/filtering policy selected by the model section.
    ///
    /// `laplace_k` only applies to a policy that precomputes probabilities.
    pub fn policy(&self) -> VariantPolicy {
        let mut policy = self.model.variant.policy();
        if let Some(k) = self.model.laplace_k.filter(|_| policy.precompute_probabilities) {
            policy.laplace_k = k;
        }
        policy
    }

    /// Load the stop-word list when the policy uses one
    pub fn load_stop_words(&self) -> Result<Option<StopWords>> {
        if !self.policy().use_stop_words {
            return Ok(None);
        }
        let path = self.model.stop_words.as_ref().ok_or_else(|| {
            ClassifierError::Config("no stop-word list configured".to_string())
        })?;
        StopWords::load(path, self.model.skip_first_stop_word).map(Some)
    }

    /// Train a model from the configured corpus directories
    pub fn train_model(&self) -> Result<TrainedModel> {
        TrainedModel::train_from_dirs(
            &self.data.spam_dir,
            &self.data.ham_dir,
            self.policy(),
            self.load_stop_words()?,
        )
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(k) = self.model.laplace_k {
            if !k.is_finite() || k <= 0.0 {
                return Err(ClassifierError::Config(format!(
                    "laplace_k must be a positive number, got {}",
                    k
                )));
            }
            if !self.model.variant.policy().precompute_probabilities {
                return Err(ClassifierError::Config(format!(
                    "laplace_k is not used by variant '{}'",
                    self.model.variant
                )));
            }
        }

        if self.policy().use_stop_words && self.model.stop_words.is_none() {
            return Err(ClassifierError::Config(format!(
                "variant '{}' needs a stop_words path",
                self.model.variant
            )));
        }

        match self.logging.format.as_str() {
            "pretty" | "compact" | "json" => Ok(()),
            other => Err(ClassifierError::Config(format!(
                "unknown logging format '{}'",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            model: ModelConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
