//! Score a single attempt against a chosen secret word

use crate::config::GameConfig;
use crate::core::{Feedback, Word, WordError};

/// Score `attempt` against `secret` and render it with the configured miss
/// symbol
///
/// Neither word has to be in a word list, only the right length.
///
/// # Errors
///
/// Returns `WordError` if either word is not made of letters or has the
/// wrong length.
pub fn score_pair(attempt: &str, secret: &str, config: &GameConfig) -> Result<String, WordError> {
    let attempt = Word::with_length(attempt.trim(), config.word_length)?;
    let secret = Word::with_length(secret.trim(), config.word_length)?;
    Ok(Feedback::score(&attempt, &secret).render(config.miss_symbol))
}
