//! Core domain types for the game
//!
//! Pure types with no I/O: the word type and the scorer that compares an
//! attempt with the secret word.

mod feedback;
mod word;

pub use feedback::{DEFAULT_MISS, Feedback, Mark};
pub use word::{Word, WordError};
