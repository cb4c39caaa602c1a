//! Command implementations

pub mod check;
pub mod play;
pub mod score;

pub use check::{CheckReport, check_word_lists};
pub use play::run_play;
pub use score::score_pair;

use crate::config::{GameConfig, Settings};
use crate::wordlists::{ALLOWED, ANSWERS, WordSet, loader};
use anyhow::Result;

/// Load the answer and allowed lists named in `settings`, falling back to
/// the embedded lists, and validate them against `config`
///
/// # Errors
///
/// Returns an error if a list file cannot be read or is empty, or if the
/// lists are inconsistent with each other or with the configured length.
pub fn load_word_set(settings: &Settings, config: &GameConfig) -> Result<WordSet> {
    let answers = match &settings.answers {
        Some(path) => loader::read_lines(path)?,
        None => loader::lines_from_slice(ANSWERS),
    };
    let allowed = match &settings.allowed {
        Some(path) => loader::read_lines(path)?,
        None => loader::lines_from_slice(ALLOWED),
    };

    let words = if settings.merge_answers.unwrap_or(false) {
        WordSet::merged(&answers, &allowed, config.word_length)?
    } else {
        WordSet::new(&answers, &allowed, config.word_length)?
    };
    Ok(words)
}
