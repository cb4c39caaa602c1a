//! Session controller
//!
//! Runs games back to back until the player declines another one or the
//! input runs dry.

use super::{Game, GameStatus, SessionStats, Turn};
use crate::config::{ConfigError, GameConfig};
use crate::output::Renderer;
use crate::wordlists::WordSet;
use rand::Rng;
use std::io::{self, BufRead};

/// How a single game left the session
enum GameEnd {
    Finished(GameStatus),
    InputClosed,
}

/// A validated word set and configuration, plus the collaborators a session
/// talks to: an input reader, a renderer and a random source
pub struct Session<R, D, G> {
    words: WordSet,
    config: GameConfig,
    /// Win phrase for attempt `n` at index `n - 1`
    phrases: Vec<String>,
    input: R,
    display: D,
    rng: G,
    stats: SessionStats,
}

impl<R: BufRead, D: Renderer, G: Rng> Session<R, D, G> {
    /// Create a session, checking the configuration up front
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is inconsistent or does not
    /// match the word set's word length. Nothing is rendered in that case.
    pub fn new(
        words: WordSet,
        config: GameConfig,
        input: R,
        display: D,
        rng: G,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let phrases = config.phrases()?;
        if words.word_length() != config.word_length {
            return Err(ConfigError::WordLengthMismatch {
                words: words.word_length(),
                config: config.word_length,
            });
        }

        Ok(Self {
            words,
            config,
            phrases,
            input,
            display,
            rng,
            stats: SessionStats::default(),
        })
    }

    /// Play until the player stops
    ///
    /// # Errors
    /// Returns an I/O error if reading input or rendering fails.
    pub fn run(mut self) -> io::Result<(SessionStats, D)> {
        self.display.greet(&self.config)?;

        loop {
            match self.play_game()? {
                GameEnd::InputClosed => break,
                GameEnd::Finished(status) => self.stats.record(status),
            }

            self.display.prompt_replay()?;
            let Some(answer) = self.read_line()? else {
                break;
            };
            if !wants_another(&answer) {
                break;
            }
            log::info!("starting another game");
            self.display.blank()?;
        }

        self.display.farewell(&self.stats)?;
        Ok((self.stats, self.display))
    }

    fn play_game(&mut self) -> io::Result<GameEnd> {
        let secret = self.words.draw(&mut self.rng).clone();
        log::debug!("secret word drawn: {secret}");
        let mut game = Game::new(secret, &self.config);

        while let GameStatus::AwaitingGuess(attempt_number) = game.status() {
            self.display.prompt_attempt(attempt_number)?;
            let Some(line) = self.read_line()? else {
                log::info!("input closed during attempt {attempt_number}");
                return Ok(GameEnd::InputClosed);
            };

            match game.submit(&line, &self.words) {
                Turn::Ignored | Turn::Abandoned => self.display.blank()?,
                Turn::Rejected(err) => {
                    log::debug!("rejected attempt {line:?}: {err:?}");
                    self.display.rejected(&err)?;
                }
                Turn::Scored {
                    feedback, status, ..
                } => {
                    self.display.feedback(&line, &feedback)?;
                    match status {
                        GameStatus::Won(n) => self.display.won(&self.phrases[n - 1], n)?,
                        GameStatus::Lost => self.display.lost(game.secret())?,
                        GameStatus::AwaitingGuess(_) | GameStatus::Abandoned => {}
                    }
                }
            }
        }

        let status = game.status();
        if matches!(status, GameStatus::Won(_) | GameStatus::Lost) {
            self.display.recap(game.history())?;
        }
        log::info!("game finished: {status:?}");
        Ok(GameEnd::Finished(status))
    }

    /// Next input line without its line ending; `None` at end of input
    ///
    /// Bytes that are not UTF-8 become U+FFFD, which no guess can contain,
    /// so such a line is rejected like any other bad attempt.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn wants_another(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
