//! In-memory results for the games of one session

use super::GameStatus;
use std::collections::BTreeMap;

/// Tally of finished games; discarded when the session ends
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub games_played: usize,
    pub games_won: usize,
    pub games_lost: usize,
    pub games_abandoned: usize,
    /// Winning attempt number to number of wins
    pub win_distribution: BTreeMap<usize, usize>,
}

impl SessionStats {
    /// Record a finished game; unfinished games are ignored
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::AwaitingGuess(_) => return,
            GameStatus::Won(attempt) => {
                self.games_won += 1;
                *self.win_distribution.entry(attempt).or_insert(0) += 1;
            }
            GameStatus::Lost => self.games_lost += 1,
            GameStatus::Abandoned => self.games_abandoned += 1,
        }
        self.games_played += 1;
    }

    /// Share of completed (won or lost) games that were won, in percent
    #[must_use]
    pub fn win_rate(&self) -> Option<f64> {
        let completed = self.games_won + self.games_lost;
        (completed > 0).then(|| self.games_won as f64 * 100.0 / completed as f64)
    }
}
