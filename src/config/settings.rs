//! Configuration settings for jdskill.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub normalizer: NormalizerConfig,
    pub matcher: MatcherConfig,
    pub ingest: IngestConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadFile)?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations or use defaults.
    pub fn load() -> Result<Self> {
        let config_paths = [
            PathBuf::from("jdskill.toml"),
            PathBuf::from("config.toml"),
            dirs::config_dir()
                .map(|p| p.join("jdskill/config.toml"))
                .unwrap_or_default(),
            dirs::home_dir()
                .map(|p| p.join(".jdskill/config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.is_file() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.matcher.fuzzy_threshold > 100 {
            return Err(ConfigError::Invalid(format!(
                "matcher.fuzzy_threshold must be in 0..=100, got {}",
                self.matcher.fuzzy_threshold
            ))
            .into());
        }

        if self.matcher.min_ngram_chars == 0 {
            return Err(ConfigError::Invalid("matcher.min_ngram_chars must be > 0".to_string()).into());
        }

        if self.ingest.max_file_bytes == 0 {
            return Err(ConfigError::Invalid("ingest.max_file_bytes must be > 0".to_string()).into());
        }

        if self.data.aliases_file.trim().is_empty() || self.data.categories_file.trim().is_empty() {
            return Err(ConfigError::Invalid("data file names must not be empty".to_string()).into());
        }

        Ok(())
    }

    /// Expand the reference data directory path.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let expanded = shellexpand::full(&self.data.dir)
            .map_err(|e| ConfigError::PathExpansion(e.to_string()))?;
        Ok(PathBuf::from(expanded.as_ref()))
    }
}

/// Reference data location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding the reference data files
    pub dir: String,
    /// Alias dictionary file name (alias -> canonical skill)
    pub aliases_file: String,
    /// Category dictionary file name (category -> skills)
    pub categories_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: "~/.local/share/jdskill".to_string(),
            aliases_file: "skill_dictionary.json".to_string(),
            categories_file: "skill_categories.json".to_string(),
        }
    }
}

/// Text normalizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Stop words that are removed from normalized text.
    /// Any other stop word is kept.
    pub removed_stop_words: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            removed_stop_words: ["a", "an", "the", "is", "was", "were", "be", "been", "being"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Skill matcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Enable approximate n-gram matching
    pub fuzzy_enabled: bool,
    /// Minimum similarity (0-100) for a fuzzy match to be accepted
    pub fuzzy_threshold: u8,
    /// N-grams shorter than this many characters are not fuzzy matched
    pub min_ngram_chars: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            fuzzy_enabled: true,
            fuzzy_threshold: 90,
            min_ngram_chars: 3,
        }
    }
}

/// Document ingestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Largest document accepted, in bytes
    pub max_file_bytes: u64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 20 * 1024 * 1024,
        }
    }
}
