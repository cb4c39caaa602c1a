//! Renderer implementations

use super::Renderer;
use super::formatters::{
    FEEDBACK_ARROW, REPLAY_PROMPT, attempt_prompt, feedback_line, greeting_text, lost_text,
    recap_lines, stats_lines, won_text,
};
use crate::config::GameConfig;
use crate::core::{Feedback, Mark, Word};
use crate::session::{SessionStats, ValidationError};
use colored::Colorize;
use crossterm::{cursor, queue};
use std::io::{self, Write};

/// Unstyled output to any writer; also what tests and pipes get
pub struct PlainRenderer<W> {
    out: W,
    miss: char,
}

impl<W: Write> PlainRenderer<W> {
    pub const fn new(out: W, miss: char) -> Self {
        Self { out, miss }
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for PlainRenderer<W> {
    fn greet(&mut self, config: &GameConfig) -> io::Result<()> {
        writeln!(self.out, "\n{}\n", greeting_text(config))
    }

    fn prompt_attempt(&mut self, attempt: usize) -> io::Result<()> {
        write!(self.out, "{}", attempt_prompt(attempt))?;
        self.out.flush()
    }

    fn feedback(&mut self, _typed: &str, feedback: &Feedback) -> io::Result<()> {
        writeln!(self.out, "{}", feedback_line(feedback, self.miss))
    }

    fn rejected(&mut self, error: &ValidationError) -> io::Result<()> {
        writeln!(self.out, "\n{error}\n")
    }

    fn won(&mut self, phrase: &str, attempt: usize) -> io::Result<()> {
        writeln!(self.out, "\n{}\n", won_text(phrase, attempt))
    }

    fn lost(&mut self, secret: &Word) -> io::Result<()> {
        writeln!(self.out, "\n{}\n", lost_text(secret))
    }

    fn recap(&mut self, history: &[(Word, Feedback)]) -> io::Result<()> {
        for line in recap_lines(history) {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)
    }

    fn prompt_replay(&mut self) -> io::Result<()> {
        write!(self.out, "{REPLAY_PROMPT}")?;
        self.out.flush()
    }

    fn farewell(&mut self, stats: &SessionStats) -> io::Result<()> {
        writeln!(self.out, "\nBye!\n")?;
        for line in stats_lines(stats) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }
}

/// Coloured output for an interactive terminal
///
/// Feedback is written back onto the line the player typed on, after their
/// attempt, instead of on a new line.
pub struct TerminalRenderer<W> {
    out: W,
    miss: char,
    prompt_width: usize,
}

impl<W: Write> TerminalRenderer<W> {
    pub const fn new(out: W, miss: char) -> Self {
        Self {
            out,
            miss,
            prompt_width: 0,
        }
    }

    fn colored_feedback(&self, feedback: &Feedback) -> String {
        feedback
            .iter()
            .map(|(letter, mark)| {
                let letter = char::from(letter);
                match mark {
                    Mark::Exact => letter
                        .to_ascii_uppercase()
                        .to_string()
                        .green()
                        .bold()
                        .to_string(),
                    Mark::Present => letter.to_ascii_lowercase().to_string().yellow().to_string(),
                    Mark::Absent => self.miss.to_string().bright_black().to_string(),
                }
            })
            .collect()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn greet(&mut self, config: &GameConfig) -> io::Result<()> {
        writeln!(self.out, "\n{}\n", greeting_text(config).bright_white())
    }

    fn prompt_attempt(&mut self, attempt: usize) -> io::Result<()> {
        let prompt = attempt_prompt(attempt);
        self.prompt_width = prompt.chars().count();
        write!(self.out, "{}", prompt.cyan())?;
        self.out.flush()
    }

    fn feedback(&mut self, typed: &str, feedback: &Feedback) -> io::Result<()> {
        // The echoed newline left the cursor below the attempt line
        let column = self.prompt_width + typed.chars().count();
        let marks = self.colored_feedback(feedback);
        queue!(
            self.out,
            cursor::MoveToPreviousLine(1),
            cursor::MoveToColumn(column as u16)
        )?;
        writeln!(self.out, "{FEEDBACK_ARROW}{marks}")?;
        self.out.flush()
    }

    fn rejected(&mut self, error: &ValidationError) -> io::Result<()> {
        writeln!(self.out, "\n{}\n", error.to_string().red())
    }

    fn won(&mut self, phrase: &str, attempt: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "\n{}\n",
            won_text(phrase, attempt).bright_green().bold()
        )
    }

    fn lost(&mut self, secret: &Word) -> io::Result<()> {
        writeln!(self.out, "\n{}\n", lost_text(secret).bright_red())
    }

    fn recap(&mut self, history: &[(Word, Feedback)]) -> io::Result<()> {
        for line in recap_lines(history) {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)
    }

    fn prompt_replay(&mut self) -> io::Result<()> {
        write!(self.out, "{}", REPLAY_PROMPT.cyan())?;
        self.out.flush()
    }

    fn farewell(&mut self, stats: &SessionStats) -> io::Result<()> {
        writeln!(self.out, "\n{}\n", "Bye!".bright_cyan().bold())?;
        for line in stats_lines(stats) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(attempt: &str, secret: &str) -> Feedback {
        Feedback::score(&Word::new(attempt).unwrap(), &Word::new(secret).unwrap())
    }

    fn plain_output(f: impl FnOnce(&mut PlainRenderer<Vec<u8>>) -> io::Result<()>) -> String {
        let mut renderer = PlainRenderer::new(Vec::new(), '.');
        f(&mut renderer).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn plain_feedback_line() {
        let out = plain_output(|r| r.feedback("croak", &feedback("croak", "train")));
        assert_eq!(out, " -->  .R.a.\n");
    }

    #[test]
    fn plain_custom_miss() {
        let mut renderer = PlainRenderer::new(Vec::new(), '-');
        renderer
            .feedback("croak", &feedback("croak", "train"))
            .unwrap();
        assert_eq!(renderer.into_inner(), b" -->  -R-a-\n");
    }

    #[test]
    fn plain_prompts_have_no_newline() {
        assert_eq!(plain_output(|r| r.prompt_attempt(2)), "Attempt 2: ");
        assert_eq!(plain_output(|r| r.prompt_replay()), REPLAY_PROMPT);
    }

    #[test]
    fn plain_rejection_message() {
        let out = plain_output(|r| r.rejected(&ValidationError::NonAlphabetic));
        assert_eq!(out, "\nYour guess should be all letters.\n\n");
    }

    #[test]
    fn plain_outcomes() {
        let out = plain_output(|r| r.won("Genius!", 1));
        assert_eq!(out, "\nGenius! You got it in 1.\n\n");

        let out = plain_output(|r| r.lost(&Word::new("train").unwrap()));
        assert_eq!(out, "\nBad luck! The answer was train.\n\n");
    }

    #[test]
    fn terminal_feedback_moves_cursor_and_colours() {
        colored::control::set_override(true);
        let mut renderer = TerminalRenderer::new(Vec::new(), '.');
        renderer.prompt_attempt(1).unwrap();
        renderer
            .feedback("croak", &feedback("croak", "train"))
            .unwrap();
        let out = String::from_utf8(renderer.out).unwrap();

        // "Attempt 1: " is 11 columns, plus the 5 typed letters
        assert!(out.contains("\u{1b}[1F"), "{out:?}");
        assert!(out.contains("\u{1b}[17G"), "{out:?}");
        assert!(out.contains(FEEDBACK_ARROW));
        assert!(out.contains('R'));
    }
}
