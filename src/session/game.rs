//! Single game state machine
//!
//! A game starts at attempt 1 with a fixed secret word. Each submitted line
//! either leaves the state untouched (empty or rejected input), abandons the
//! game, or consumes an attempt and may end the game as won or lost.

use crate::config::GameConfig;
use crate::core::{Feedback, Word, WordError};
use crate::wordlists::WordSet;
use std::fmt;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the given attempt number (1-based)
    AwaitingGuess(usize),
    /// Solved on the given attempt
    Won(usize),
    Lost,
    /// Player gave up with the exit sentinel; neither won nor lost
    Abandoned,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::AwaitingGuess(_))
    }
}

/// Why an attempt was refused; the game state is left as it was
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NonAlphabetic,
    WrongLength { expected: usize, actual: usize },
    NotAWord(String),
    GameOver,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonAlphabetic => write!(f, "Your guess should be all letters."),
            Self::WrongLength { expected, .. } => {
                write!(f, "Your guess should be {expected} letters long.")
            }
            Self::NotAWord(_) => write!(f, "Your guess is not a word, try again."),
            Self::GameOver => write!(f, "This game is already over."),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<WordError> for ValidationError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength { expected, actual } => {
                Self::WrongLength { expected, actual }
            }
            WordError::Empty | WordError::NonAlphabetic => Self::NonAlphabetic,
        }
    }
}

/// Result of submitting one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Empty input: prompt again, nothing consumed
    Ignored,
    Rejected(ValidationError),
    /// A valid attempt was scored; `status` is the state after it
    Scored {
        attempt: Word,
        feedback: Feedback,
        status: GameStatus,
    },
    Abandoned,
}

/// One game against a single secret word
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    status: GameStatus,
    max_attempts: usize,
    exit_sentinel: String,
    history: Vec<(Word, Feedback)>,
}

impl Game {
    #[must_use]
    pub fn new(secret: Word, config: &GameConfig) -> Self {
        Self {
            secret,
            status: GameStatus::AwaitingGuess(1),
            max_attempts: config.max_attempts,
            exit_sentinel: config.exit_sentinel.trim().to_string(),
            history: Vec::new(),
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Scored attempts so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// Handle one line of player input
    ///
    /// Order of checks: exit sentinel, empty input, letters only, length,
    /// membership in the allowed guesses. Only an attempt passing all of them
    /// is scored and counted.
    pub fn submit(&mut self, input: &str, words: &WordSet) -> Turn {
        let GameStatus::AwaitingGuess(attempt_number) = self.status else {
            return Turn::Rejected(ValidationError::GameOver);
        };

        let input = input.trim();
        if input == self.exit_sentinel {
            self.status = GameStatus::Abandoned;
            return Turn::Abandoned;
        }
        if input.is_empty() {
            return Turn::Ignored;
        }

        let attempt = match Word::with_length(input, words.word_length()) {
            Ok(word) => word,
            // Letters outside a-z pass the letter check but never appear in
            // the word lists
            Err(WordError::NonAlphabetic) if input.chars().all(char::is_alphabetic) => {
                return Turn::Rejected(foreign_letters(input, words.word_length()));
            }
            Err(err) => return Turn::Rejected(err.into()),
        };
        if !words.contains(&attempt) {
            return Turn::Rejected(ValidationError::NotAWord(attempt.text().to_string()));
        }

        let feedback = Feedback::score(&attempt, &self.secret);
        self.status = if attempt == self.secret {
            GameStatus::Won(attempt_number)
        } else if attempt_number >= self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::AwaitingGuess(attempt_number + 1)
        };
        self.history.push((attempt.clone(), feedback.clone()));

        Turn::Scored {
            attempt,
            feedback,
            status: self.status,
        }
    }
}

/// Rejection for an all-letter attempt that uses letters beyond a-z
fn foreign_letters(input: &str, word_length: usize) -> ValidationError {
    let actual = input.chars().count();
    if actual == word_length {
        ValidationError::NotAWord(input.to_lowercase())
    } else {
        ValidationError::WrongLength {
            expected: word_length,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> WordSet {
        let list: Vec<String> = ["crane", "slate", "irate", "train", "croak", "aloha", "allow"]
            .iter()
            .map(ToString::to_string)
            .collect();
        WordSet::new(&list, &list, 5).unwrap()
    }

    fn game(secret: &str) -> Game {
        Game::new(Word::new(secret).unwrap(), &GameConfig::default())
    }

    #[test]
    fn starts_awaiting_first_guess() {
        let game = game("train");
        assert_eq!(game.status(), GameStatus::AwaitingGuess(1));
        assert!(game.history().is_empty());
        assert_eq!(game.secret().text(), "train");
    }

    #[test]
    fn wrong_guess_advances_attempt() {
        let mut game = game("train");
        let turn = game.submit("croak", &words());
        assert_eq!(
            turn,
            Turn::Scored {
                attempt: Word::new("croak").unwrap(),
                feedback: Feedback::score(
                    &Word::new("croak").unwrap(),
                    &Word::new("train").unwrap()
                ),
                status: GameStatus::AwaitingGuess(2),
            }
        );
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn exact_guess_wins_on_that_attempt() {
        let words = words();
        let mut game = game("train");
        game.submit("crane", &words);
        game.submit("slate", &words);
        let turn = game.submit("TRAIN", &words);
        assert!(matches!(
            turn,
            Turn::Scored {
                status: GameStatus::Won(3),
                ..
            }
        ));
        assert_eq!(game.status(), GameStatus::Won(3));

        // No attempt 4 after a win
        assert_eq!(
            game.submit("crane", &words),
            Turn::Rejected(ValidationError::GameOver)
        );
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn running_out_of_attempts_loses() {
        let words = words();
        let mut game = game("train");
        for n in 1..6 {
            game.submit("crane", &words);
            assert_eq!(game.status(), GameStatus::AwaitingGuess(n + 1));
        }
        let turn = game.submit("slate", &words);
        assert!(matches!(
            turn,
            Turn::Scored {
                status: GameStatus::Lost,
                ..
            }
        ));
        assert!(game.status().is_over());
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let words = words();
        let mut game = game("train");
        for _ in 1..6 {
            game.submit("crane", &words);
        }
        game.submit("train", &words);
        assert_eq!(game.status(), GameStatus::Won(6));
    }

    #[test]
    fn exit_sentinel_abandons() {
        let words = words();
        let mut game = game("train");
        game.submit("crane", &words);
        assert_eq!(game.submit(" * ", &words), Turn::Abandoned);
        assert_eq!(game.status(), GameStatus::Abandoned);
        assert!(game.status().is_over());
    }

    #[test]
    fn custom_exit_sentinel() {
        let config = GameConfig {
            exit_sentinel: "!q".into(),
            ..GameConfig::default()
        };
        let mut game = Game::new(Word::new("train").unwrap(), &config);
        assert_eq!(
            game.submit("*", &words()),
            Turn::Rejected(ValidationError::NonAlphabetic)
        );
        assert_eq!(game.submit("!q", &words()), Turn::Abandoned);
    }

    #[test]
    fn empty_input_is_ignored() {
        let mut game = game("train");
        assert_eq!(game.submit("", &words()), Turn::Ignored);
        assert_eq!(game.submit("   ", &words()), Turn::Ignored);
        assert_eq!(game.status(), GameStatus::AwaitingGuess(1));
    }

    #[test]
    fn rejections_leave_state_unchanged() {
        let words = words();
        let mut game = game("train");
        assert_eq!(
            game.submit("cr4ne", &words),
            Turn::Rejected(ValidationError::NonAlphabetic)
        );
        assert_eq!(
            game.submit("cranes", &words),
            Turn::Rejected(ValidationError::WrongLength {
                expected: 5,
                actual: 6
            })
        );
        assert_eq!(
            game.submit("zzzzz", &words),
            Turn::Rejected(ValidationError::NotAWord("zzzzz".into()))
        );
        assert_eq!(game.status(), GameStatus::AwaitingGuess(1));
        assert!(game.history().is_empty());
    }

    #[test]
    fn accented_letters_are_not_words() {
        let words = words();
        let mut game = game("train");
        assert_eq!(
            game.submit("Crâne", &words),
            Turn::Rejected(ValidationError::NotAWord("crâne".into()))
        );
        assert_eq!(
            game.submit("crâ", &words),
            Turn::Rejected(ValidationError::WrongLength {
                expected: 5,
                actual: 3
            })
        );
        // Replacement characters from undecodable input are not letters
        assert_eq!(
            game.submit("cr\u{fffd}ne", &words),
            Turn::Rejected(ValidationError::NonAlphabetic)
        );
        assert_eq!(game.status(), GameStatus::AwaitingGuess(1));
        assert!(game.history().is_empty());
    }

    #[test]
    fn validation_messages() {
        assert_eq!(
            ValidationError::NonAlphabetic.to_string(),
            "Your guess should be all letters."
        );
        assert_eq!(
            ValidationError::NotAWord("zzzzz".into()).to_string(),
            "Your guess is not a word, try again."
        );
    }
}
