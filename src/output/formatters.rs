//! Text for everything the game shows the player
//!
//! Plain strings only; renderers add styling on top.

use crate::config::GameConfig;
use crate::core::{Feedback, Word};
use crate::session::SessionStats;

/// Separator between the typed attempt and its feedback
pub const FEEDBACK_ARROW: &str = " -->  ";

/// Prompt shown after each finished game
pub const REPLAY_PROMPT: &str = "Another game (Y/N)? ";

/// Greeting shown once per session
#[must_use]
pub fn greeting_text(config: &GameConfig) -> String {
    format!(
        "I'm thinking of a {len} letter word.\n\n\
         You have {max} attempts to work it out based on clues I will give in response to\n\
         your guesses. If one of your letters matches a letter in the word and is in the\n\
         right position I will capitalise it. If it is in the word, I will show it in\n\
         lower case. If it is not in the word at all I will mark it with a '{miss}'.\n\
         Enter '{exit}' to give up on a word.",
        len = config.word_length,
        max = config.max_attempts,
        miss = config.miss_symbol,
        exit = config.exit_sentinel,
    )
}

#[must_use]
pub fn attempt_prompt(attempt: usize) -> String {
    format!("Attempt {attempt}: ")
}

/// Feedback appended to the attempt line
#[must_use]
pub fn feedback_line(feedback: &Feedback, miss: char) -> String {
    format!("{FEEDBACK_ARROW}{}", feedback.render(miss))
}

#[must_use]
pub fn won_text(phrase: &str, attempt: usize) -> String {
    format!("{phrase} You got it in {attempt}.")
}

#[must_use]
pub fn lost_text(secret: &Word) -> String {
    format!("Bad luck! The answer was {secret}.")
}

/// One line per scored attempt: number, word, emoji row
#[must_use]
pub fn recap_lines(history: &[(Word, Feedback)]) -> Vec<String> {
    history
        .iter()
        .enumerate()
        .map(|(i, (word, feedback))| {
            format!(
                "{:>2}. {} {}",
                i + 1,
                word.text().to_uppercase(),
                feedback.to_emoji()
            )
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Session summary shown on exit; empty when no game finished
#[must_use]
pub fn stats_lines(stats: &SessionStats) -> Vec<String> {
    if stats.games_played == 0 {
        return Vec::new();
    }

    let mut lines = vec![format!(
        "Played {}, won {}, lost {}, abandoned {}",
        stats.games_played, stats.games_won, stats.games_lost, stats.games_abandoned
    )];
    if let Some(rate) = stats.win_rate() {
        lines.push(format!("Win rate: {rate:.0}%"));
    }

    let most = stats.win_distribution.values().copied().max().unwrap_or(0);
    for (attempt, &count) in &stats.win_distribution {
        let bar = create_progress_bar(count as f64, most as f64, 20);
        lines.push(format!("  {attempt}: {bar} {count}"));
    }
    lines
}
