//! Game sessions
//!
//! [`Game`] is the per-game state machine; [`Session`] sequences games, talks
//! to the input and render collaborators and keeps [`SessionStats`].

mod controller;
mod game;
mod stats;

pub use controller::Session;
pub use game::{Game, GameStatus, Turn, ValidationError};
pub use stats::SessionStats;
