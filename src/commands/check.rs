//! Validate configuration and word lists without playing

use super::load_word_set;
use crate::config::{GameConfig, Settings};
use anyhow::Result;
use std::fmt;

/// Summary of a successful check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub config: GameConfig,
    pub answers: usize,
    pub allowed: usize,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration OK")?;
        writeln!(f, "  Word length:   {}", self.config.word_length)?;
        writeln!(f, "  Max attempts:  {}", self.config.max_attempts)?;
        writeln!(f, "  Miss symbol:   '{}'", self.config.miss_symbol)?;
        writeln!(f, "  Exit sentinel: '{}'", self.config.exit_sentinel)?;
        writeln!(f, "  Answers:       {}", self.answers)?;
        write!(f, "  Allowed:       {}", self.allowed)
    }
}

/// Resolve the settings and load the word lists, as `play` would
///
/// # Errors
///
/// Returns the first configuration or word list problem found.
pub fn check_word_lists(settings: &Settings) -> Result<CheckReport> {
    let config = settings.resolve()?;
    let words = load_word_set(settings, &config)?;
    Ok(CheckReport {
        answers: words.answers().len(),
        allowed: words.allowed_count(),
        config,
    })
}
