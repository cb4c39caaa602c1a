//! Wordle Game
//!
//! A terminal word-guessing game: find the secret word in a limited number of
//! attempts, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, Word};
//!
//! let attempt = Word::new("allow").unwrap();
//! let secret = Word::new("aloha").unwrap();
//!
//! // Exact letters upper case, present letters lower case, misses as '.'
//! let feedback = Feedback::score(&attempt, &secret);
//! assert_eq!(feedback.to_string(), "AL.o.");
//! ```

// Core domain types
pub mod core;

// Game configuration
pub mod config;

// Word lists
pub mod wordlists;

// Game and session state machines
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
