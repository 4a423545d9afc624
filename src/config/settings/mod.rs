
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::linker::index::IndexSource;
use crate::linker::inject::{DEFAULT_EXCLUDED_PARENTS, DEFAULT_MAX_LINKS};
use crate::linker::keywords::DEFAULT_MIN_KEYWORD_LENGTH;
use crate::linker::tokenizer::DEFAULT_PHRASES;
use crate::linker::DEFAULT_CONTEXT_WINDOW;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub linking: LinkingConfig,
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LinkingConfig {
    /// Anchors inserted into a single page at most
    pub max_links: usize,
    /// Characters kept on each side of a keyword in index snippets
    pub context_window: usize,
    /// Shortest single word that counts as a keyword
    pub min_keyword_length: usize,
    /// Multi-word domain phrases recognised as keywords
    pub phrases: Vec<String>,
    /// Stop words added to the built-in English list
    pub extra_stop_words: Vec<String>,
    /// Elements whose direct text is never linked
    pub excluded_parents: Vec<String>,
    /// Leave content untouched when the HTML parser reports any error
    pub strict_parsing: bool,
    /// Page text that keywords are extracted from when indexing
    pub index_source: IndexSource,
}

impl Default for LinkingConfig {
    fn default() -> Self {
        Self {
            max_links: DEFAULT_MAX_LINKS,
            context_window: DEFAULT_CONTEXT_WINDOW,
            min_keyword_length: DEFAULT_MIN_KEYWORD_LENGTH,
            phrases: DEFAULT_PHRASES.iter().map(|p| (*p).to_string()).collect(),
            extra_stop_words: Vec::new(),
            excluded_parents: DEFAULT_EXCLUDED_PARENTS
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            strict_parsing: false,
            index_source: IndexSource::Content,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found or could not be created")]
    DirectoryError,
    #[error("Invalid max links: {0} (must be between 1 and 100)")]
    InvalidMaxLinks(usize),
    #[error("Invalid context window: {0} (must be between 0 and 500)")]
    InvalidContextWindow(usize),
    #[error("Invalid minimum keyword length: {0} (must be between 1 and 64)")]
    InvalidMinKeywordLength(usize),
    #[error("Invalid phrase: {0:?} (cannot be empty)")]
    InvalidPhrase(String),
    #[error("Invalid stop word: {0:?} (cannot be empty)")]
    InvalidStopWord(String),
    #[error("Invalid excluded parents: {0} (must list element names and include \"a\")")]
    InvalidExcludedParents(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Config {
    /// Default configuration directory, `~/.site-linker`
    #[inline]
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        dirs::home_dir()
            .map(|home| home.join(".site-linker"))
            .or_else(|| dirs::config_dir().map(|config| config.join("site-linker")))
            .ok_or(ConfigError::DirectoryError)
    }

    #[inline]
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join("config.toml");

        if !config_path.exists() {
            return Ok(Self {
                linking: LinkingConfig::default(),
                base_dir: config_dir.as_ref().to_path_buf(),
            });
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
        config.base_dir = config_dir.as_ref().to_path_buf();

        config
            .validate()
            .with_context(|| "Configuration validation failed")?;

        Ok(config)
    }

    #[inline]
    pub fn save(&self) -> Result<()> {
        self.validate()
            .context("Configuration validation failed before saving")?;

        let config_dir = self.get_base_dir();

        fs::create_dir_all(config_dir).with_context(|| {
            format!(
                "Failed to create config directory: {}",
                config_dir.display()
            )
        })?;

        let config_path = self.config_file_path();
        let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    #[inline]
    pub fn get_base_dir(&self) -> &Path {
        &self.base_dir
    }

    #[inline]
    pub fn config_file_path(&self) -> PathBuf {
        self.get_base_dir().join("config.toml")
    }

    #[inline]
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.linking.validate()
    }
}

impl LinkingConfig {
    #[inline]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.max_links) {
            return Err(ConfigError::InvalidMaxLinks(self.max_links));
        }

        if self.context_window > 500 {
            return Err(ConfigError::InvalidContextWindow(self.context_window));
        }

        if !(1..=64).contains(&self.min_keyword_length) {
            return Err(ConfigError::InvalidMinKeywordLength(
                self.min_keyword_length,
            ));
        }

        if let Some(phrase) = self.phrases.iter().find(|p| p.trim().is_empty()) {
            return Err(ConfigError::InvalidPhrase(phrase.clone()));
        }

        if let Some(word) = self.extra_stop_words.iter().find(|w| w.trim().is_empty()) {
            return Err(ConfigError::InvalidStopWord(word.clone()));
        }

        let has_blank = self.excluded_parents.iter().any(|n| n.trim().is_empty());
        let has_anchor = self
            .excluded_parents
            .iter()
            .any(|n| n.trim().eq_ignore_ascii_case("a"));
        if has_blank || !has_anchor {
            return Err(ConfigError::InvalidExcludedParents(
                self.excluded_parents.join(", "),
            ));
        }

        Ok(())
    }

    pub fn set_max_links(&mut self, max_links: usize) -> Result<(), ConfigError> {
        if !(1..=100).contains(&max_links) {
            return Err(ConfigError::InvalidMaxLinks(max_links));
        }
        self.max_links = max_links;
        Ok(())
    }

    pub fn set_context_window(&mut self, window: usize) -> Result<(), ConfigError> {
        if window > 500 {
            return Err(ConfigError::InvalidContextWindow(window));
        }
        self.context_window = window;
        Ok(())
    }

    pub fn add_phrase(&mut self, phrase: String) -> Result<(), ConfigError> {
        if phrase.trim().is_empty() {
            return Err(ConfigError::InvalidPhrase(phrase));
        }
        self.phrases.push(phrase);
        Ok(())
    }
}
