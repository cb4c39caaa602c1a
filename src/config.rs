//! Game configuration
//!
//! Settings come from three layers: built-in defaults, an optional TOML file,
//! and command-line flags. [`Settings`] holds one layer with every field
//! optional; [`GameConfig`] is the resolved, validated result.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::{DEFAULT_MISS, WordError};

/// Default number of letters in a word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default number of attempts per game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Default input that abandons the current game
pub const DEFAULT_EXIT_SENTINEL: &str = "*";

/// Congratulation phrases keyed by the winning attempt
pub const DEFAULT_CONGRATS: [&str; 6] = [
    "Genius!",
    "Magnificent.",
    "Impressive.",
    "Splendid.",
    "Great.",
    "Phew!",
];

/// Errors that stop a session before play begins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidWordLength(usize),
    InvalidMaxAttempts(usize),
    InvalidExitSentinel(String),
    InvalidCongratsKey(String),
    MissingCongrats(usize),
    EmptyAnswers,
    EmptyAllowed,
    InvalidWord {
        list: &'static str,
        word: String,
        source: WordError,
    },
    AnswerNotAllowed(String),
    WordLengthMismatch { words: usize, config: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWordLength(len) => {
                write!(f, "word length must be at least 1, got {len}")
            }
            Self::InvalidMaxAttempts(max) => {
                write!(f, "max attempts must be at least 1, got {max}")
            }
            Self::InvalidExitSentinel(s) => write!(
                f,
                "exit sentinel '{s}' must be non-empty and contain a non-letter"
            ),
            Self::InvalidCongratsKey(key) => {
                write!(f, "congrats key '{key}' is not an attempt number")
            }
            Self::MissingCongrats(attempt) => {
                write!(f, "no congratulation phrase for attempt {attempt}")
            }
            Self::EmptyAnswers => write!(f, "answer list is empty"),
            Self::EmptyAllowed => write!(f, "allowed guess list is empty"),
            Self::InvalidWord { list, word, source } => {
                write!(f, "{list} list entry '{word}': {source}")
            }
            Self::AnswerNotAllowed(word) => {
                write!(f, "answer '{word}' is missing from the allowed guess list")
            }
            Self::WordLengthMismatch { words, config } => write!(
                f,
                "word lists hold {words}-letter words but the game is set to {config} letters"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// One configuration layer, every field optional
///
/// Deserialized from the TOML config file and built from CLI flags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub word_length: Option<usize>,
    pub max_attempts: Option<usize>,
    pub miss_symbol: Option<char>,
    pub exit_sentinel: Option<String>,
    pub answers: Option<PathBuf>,
    pub allowed: Option<PathBuf>,
    pub merge_answers: Option<bool>,
    /// Attempt number (as a string key) to phrase
    #[serde(default)]
    pub congrats: BTreeMap<String, String>,
}

impl Settings {
    /// Read a TOML settings file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this schema.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let settings = toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Overlay `higher` on top of `self`; fields set in `higher` win
    #[must_use]
    pub fn layer(mut self, higher: Self) -> Self {
        self.word_length = higher.word_length.or(self.word_length);
        self.max_attempts = higher.max_attempts.or(self.max_attempts);
        self.miss_symbol = higher.miss_symbol.or(self.miss_symbol);
        self.exit_sentinel = higher.exit_sentinel.or(self.exit_sentinel);
        self.answers = higher.answers.or(self.answers);
        self.allowed = higher.allowed.or(self.allowed);
        self.merge_answers = higher.merge_answers.or(self.merge_answers);
        self.congrats.extend(higher.congrats);
        self
    }

    /// Resolve against the defaults and validate
    ///
    /// # Errors
    /// Returns `ConfigError` if any resolved value is unusable.
    pub fn resolve(&self) -> Result<GameConfig, ConfigError> {
        let mut config = GameConfig::default();

        if let Some(len) = self.word_length {
            config.word_length = len;
        }
        if let Some(max) = self.max_attempts {
            config.max_attempts = max;
        }
        if let Some(miss) = self.miss_symbol {
            config.miss_symbol = miss;
        }
        if let Some(exit) = &self.exit_sentinel {
            config.exit_sentinel.clone_from(exit);
        }
        for (key, phrase) in &self.congrats {
            let attempt = key
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidCongratsKey(key.clone()))?;
            config.congrats.insert(attempt, phrase.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

/// Resolved game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_attempts: usize,
    pub miss_symbol: char,
    pub exit_sentinel: String,
    pub congrats: BTreeMap<usize, String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            miss_symbol: DEFAULT_MISS,
            exit_sentinel: DEFAULT_EXIT_SENTINEL.to_string(),
            congrats: DEFAULT_CONGRATS
                .iter()
                .enumerate()
                .map(|(i, phrase)| (i + 1, (*phrase).to_string()))
                .collect(),
        }
    }
}

impl GameConfig {
    /// Check the configuration is internally consistent
    ///
    /// # Errors
    /// - `InvalidWordLength` / `InvalidMaxAttempts` for zero values
    /// - `InvalidExitSentinel` if the sentinel is empty or could be a guess
    /// - `MissingCongrats` if some attempt up to `max_attempts` has no phrase
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::InvalidWordLength(self.word_length));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidMaxAttempts(self.max_attempts));
        }

        let sentinel = self.exit_sentinel.trim();
        if sentinel.is_empty() || sentinel.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidExitSentinel(self.exit_sentinel.clone()));
        }

        self.phrases().map(|_| ())
    }

    /// Congratulation phrases for attempts `1..=max_attempts`, in order
    ///
    /// Index `n - 1` holds the phrase for a win on attempt `n`.
    ///
    /// # Errors
    /// Returns `MissingCongrats` for the first attempt without a phrase.
    pub fn phrases(&self) -> Result<Vec<String>, ConfigError> {
        (1..=self.max_attempts)
            .map(|n| {
                self.congrats
                    .get(&n)
                    .cloned()
                    .ok_or(ConfigError::MissingCongrats(n))
            })
            .collect()
    }
}
