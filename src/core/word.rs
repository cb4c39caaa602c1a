//! Game word representation
//!
//! A Word is a case-folded run of ASCII letters. Length is checked against the
//! configured word length by whoever builds the word, see [`Word::with_length`].

use rustc_hash::FxHashMap;
use std::fmt;

/// A lower-case word made only of ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidLength { expected: usize, actual: usize },
    NonAlphabetic,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::NonAlphabetic => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string of any length
    ///
    /// Surrounding whitespace is not stripped; callers normalize first.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or holds anything other than
    /// ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic);
        }

        Ok(Self {
            text: text.to_ascii_lowercase(),
        })
    }

    /// Create a Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Same as [`Word::new`], plus `InvalidLength` when the letter count is off.
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() == length {
            Ok(word)
        } else {
            Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            })
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lower-case ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &ch in self.letters() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
