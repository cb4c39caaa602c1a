//! Per-letter feedback for one attempt against the secret word
//!
//! Each position gets one of three marks:
//! - Exact   = letter in the correct position (rendered upper case)
//! - Present = letter elsewhere in the word (rendered lower case)
//! - Absent  = letter not left in the word (rendered as the miss symbol)

use super::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// Default symbol for a complete miss
pub const DEFAULT_MISS: char = '.';

/// Match class of a single attempt letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Present,
    Absent,
}

/// Feedback for one attempt
///
/// Holds the attempt letters alongside their marks so it can be rendered
/// without the words it was scored from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    letters: Vec<u8>,
    marks: Vec<Mark>,
}

impl Feedback {
    /// Score `attempt` against `secret`
    ///
    /// Handles duplicate letters: every letter of the secret is credited at
    /// most once. Exact matches are credited first, then the remaining
    /// secret letters are handed out to the attempt from left to right.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches
    /// 2. Collect the secret letters left unmatched, keeping duplicates
    /// 3. Second pass: each other position takes one of those letters if it
    ///    can (Present), otherwise it is Absent
    ///
    /// Both words must be the same length; the session validates this
    /// before scoring.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let attempt = Word::new("croak").unwrap();
    /// let secret = Word::new("train").unwrap();
    ///
    /// assert_eq!(Feedback::score(&attempt, &secret).render('.'), ".R.a.");
    /// ```
    #[must_use]
    pub fn score(attempt: &Word, secret: &Word) -> Self {
        debug_assert_eq!(
            attempt.len(),
            secret.len(),
            "attempt and secret must be the same length"
        );

        let guess = attempt.letters();
        let answer = secret.letters();
        let mut marks = vec![Mark::Absent; guess.len()];

        // First pass: exact matches
        for (i, (g, a)) in guess.iter().zip(answer).enumerate() {
            if g == a {
                marks[i] = Mark::Exact;
            }
        }

        // Secret letters not consumed by an exact match
        let mut unmatched: FxHashMap<u8, usize> = FxHashMap::default();
        for (&letter, mark) in answer.iter().zip(&marks) {
            if *mark != Mark::Exact {
                *unmatched.entry(letter).or_insert(0) += 1;
            }
        }

        // Second pass: left to right, one credit per remaining letter
        for (&letter, mark) in guess.iter().zip(marks.iter_mut()) {
            if *mark == Mark::Exact {
                continue;
            }
            if let Some(count) = unmatched.get_mut(&letter)
                && *count > 0
            {
                *mark = Mark::Present;
                *count -= 1;
            }
        }

        Self {
            letters: guess.to_vec(),
            marks,
        }
    }

    /// Marks in attempt order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Exact)
    }

    /// Count positions carrying the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }

    /// Iterate over `(letter, mark)` pairs, letters lower case
    pub fn iter(&self) -> impl Iterator<Item = (u8, Mark)> + '_ {
        self.letters.iter().copied().zip(self.marks.iter().copied())
    }

    /// Render as text: Exact upper case, Present lower case, Absent as `miss`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let fb = Feedback::score(&Word::new("allow").unwrap(), &Word::new("aloha").unwrap());
    /// assert_eq!(fb.render('_'), "AL_o_");
    /// ```
    #[must_use]
    pub fn render(&self, miss: char) -> String {
        self.iter()
            .map(|(letter, mark)| match mark {
                Mark::Exact => char::from(letter.to_ascii_uppercase()),
                Mark::Present => char::from(letter.to_ascii_lowercase()),
                Mark::Absent => miss,
            })
            .collect()
    }

    /// Convert to an emoji row like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        let mut result = String::with_capacity(self.len() * 4);
        for mark in &self.marks {
            result.push(match mark {
                Mark::Exact => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            });
        }
        result
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_MISS))
    }
}
