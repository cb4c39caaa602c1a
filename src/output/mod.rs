//! Terminal output
//!
//! The session talks to a [`Renderer`]; the text itself comes from
//! [`formatters`]. [`PlainRenderer`] writes it unstyled to any writer,
//! [`TerminalRenderer`] adds colour and cursor movement for a real terminal.

pub mod display;
pub mod formatters;

pub use display::{PlainRenderer, TerminalRenderer};

use crate::config::GameConfig;
use crate::core::{Feedback, Word};
use crate::session::{SessionStats, ValidationError};
use std::io;

/// Everything a session shows the player
pub trait Renderer {
    /// Session greeting, shown once
    fn greet(&mut self, config: &GameConfig) -> io::Result<()>;

    /// Ask for the given attempt; input follows on the same line
    fn prompt_attempt(&mut self, attempt: usize) -> io::Result<()>;

    /// Feedback for a scored attempt; `typed` is the line as entered
    fn feedback(&mut self, typed: &str, feedback: &Feedback) -> io::Result<()>;

    fn rejected(&mut self, error: &ValidationError) -> io::Result<()>;

    fn won(&mut self, phrase: &str, attempt: usize) -> io::Result<()>;

    fn lost(&mut self, secret: &Word) -> io::Result<()>;

    /// Attempt summary after a won or lost game
    fn recap(&mut self, history: &[(Word, Feedback)]) -> io::Result<()>;

    fn prompt_replay(&mut self) -> io::Result<()>;

    fn farewell(&mut self, stats: &SessionStats) -> io::Result<()>;

    /// Empty line, used after ignored input and between games
    fn blank(&mut self) -> io::Result<()>;
}
