//! Word lists for the game
//!
//! Provides the embedded default lists and [`WordSet`], the validated pair of
//! answer and allowed-guess lists a session plays with.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::config::ConfigError;
use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Answers the game can pick from, plus every word accepted as a guess
///
/// Invariants, checked on construction:
/// - there is at least one answer
/// - every word has exactly `word_length` letters
/// - every answer is also an allowed guess
#[derive(Debug, Clone)]
pub struct WordSet {
    answers: Vec<Word>,
    allowed: FxHashSet<Word>,
    word_length: usize,
}

impl WordSet {
    /// Build a word set from normalized lists
    ///
    /// # Errors
    /// Returns `ConfigError` if either list is empty, holds a malformed word
    /// or a word of the wrong length, or if an answer is not allowed.
    pub fn new(
        answers: &[String],
        allowed: &[String],
        word_length: usize,
    ) -> Result<Self, ConfigError> {
        let answers = parse_list("answer", answers, word_length)?;
        let allowed_words = parse_list("allowed", allowed, word_length)?;

        if answers.is_empty() {
            return Err(ConfigError::EmptyAnswers);
        }
        if allowed_words.is_empty() {
            return Err(ConfigError::EmptyAllowed);
        }

        let allowed: FxHashSet<Word> = allowed_words.into_iter().collect();
        if let Some(missing) = answers.iter().find(|w| !allowed.contains(*w)) {
            return Err(ConfigError::AnswerNotAllowed(missing.text().to_string()));
        }

        log::debug!(
            "word set ready: {} answers, {} allowed guesses",
            answers.len(),
            allowed.len()
        );

        Ok(Self {
            answers,
            allowed,
            word_length,
        })
    }

    /// Like [`WordSet::new`], but every answer is added to the allowed list
    /// first, for guess lists that leave the answers out
    ///
    /// # Errors
    /// Same as [`WordSet::new`], except `AnswerNotAllowed` cannot occur.
    pub fn merged(
        answers: &[String],
        allowed: &[String],
        word_length: usize,
    ) -> Result<Self, ConfigError> {
        let combined: Vec<String> = allowed.iter().chain(answers).cloned().collect();
        Self::new(answers, &combined, word_length)
    }

    /// Word set from the lists compiled into the binary
    ///
    /// # Errors
    /// Returns `InvalidWord` when `word_length` differs from the length of
    /// the embedded words.
    pub fn embedded(word_length: usize) -> Result<Self, ConfigError> {
        Self::new(
            &loader::lines_from_slice(ANSWERS),
            &loader::lines_from_slice(ALLOWED),
            word_length,
        )
    }

    /// Candidate secret words
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Check if a word may be guessed
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }

    /// Pick a secret word uniformly at random
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.answers[rng.random_range(0..self.answers.len())]
    }
}

fn parse_list(
    list: &'static str,
    words: &[String],
    word_length: usize,
) -> Result<Vec<Word>, ConfigError> {
    words
        .iter()
        .map(|w| {
            Word::with_length(w.as_str(), word_length).map_err(|source| ConfigError::InvalidWord {
                list,
                word: w.clone(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn expected_counts() {
        assert_eq!(ANSWERS_COUNT, 411, "Expected 411 answer words");
        assert_eq!(ALLOWED_COUNT, 727, "Expected 727 allowed words");
    }

    #[test]
    fn embedded_lists_are_consistent() {
        let words = WordSet::embedded(5).unwrap();
        assert_eq!(words.answers().len(), ANSWERS_COUNT);
        assert_eq!(words.allowed_count(), ALLOWED_COUNT);
        assert_eq!(words.word_length(), 5);
    }

    #[test]
    fn embedded_lists_reject_other_lengths() {
        assert!(matches!(
            WordSet::embedded(6),
            Err(ConfigError::InvalidWord {
                list: "answer",
                source: WordError::InvalidLength {
                    expected: 6,
                    actual: 5
                },
                ..
            })
        ));
    }

    #[test]
    fn answer_missing_from_allowed_fails() {
        let result = WordSet::new(
            &strings(&["crane", "slate"]),
            &strings(&["crane", "irate"]),
            5,
        );
        assert_eq!(
            result.unwrap_err(),
            ConfigError::AnswerNotAllowed("slate".into())
        );
    }

    #[test]
    fn merged_adds_answers_to_allowed() {
        let words =
            WordSet::merged(&strings(&["crane", "slate"]), &strings(&["irate"]), 5).unwrap();
        assert_eq!(words.allowed_count(), 3);
        assert!(words.contains(&Word::new("slate").unwrap()));
        assert!(words.contains(&Word::new("irate").unwrap()));
    }

    #[test]
    fn empty_lists_fail() {
        assert_eq!(
            WordSet::new(&[], &strings(&["crane"]), 5).unwrap_err(),
            ConfigError::EmptyAnswers
        );
        assert_eq!(
            WordSet::new(&strings(&["crane"]), &[], 5).unwrap_err(),
            ConfigError::EmptyAllowed
        );
    }

    #[test]
    fn malformed_entry_fails() {
        let err = WordSet::new(&strings(&["cr4ne"]), &strings(&["crane"]), 5).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidWord {
                list: "answer",
                word: "cr4ne".into(),
                source: WordError::NonAlphabetic,
            }
        );
    }

    #[test]
    fn other_word_lengths() {
        let words = WordSet::new(&strings(&["cat", "dog"]), &strings(&["cat", "dog", "act"]), 3)
            .unwrap();
        assert_eq!(words.word_length(), 3);
        assert!(words.contains(&Word::new("act").unwrap()));
    }

    #[test]
    fn draw_stays_within_answers() {
        let words = WordSet::new(
            &strings(&["crane", "slate"]),
            &strings(&["crane", "slate", "irate"]),
            5,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let drawn = words.draw(&mut rng);
            assert!(words.answers().contains(drawn));
        }
    }

    #[test]
    fn draw_reaches_every_answer() {
        let list = strings(&["crane", "slate", "irate"]);
        let words = WordSet::new(&list, &list, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = FxHashSet::default();
        for _ in 0..200 {
            seen.insert(words.draw(&mut rng).clone());
        }
        assert_eq!(seen.len(), 3);
    }
}
