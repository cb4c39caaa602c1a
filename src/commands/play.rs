//! Interactive play on stdin/stdout

use super::load_word_set;
use crate::config::{GameConfig, Settings};
use crate::output::{PlainRenderer, Renderer, TerminalRenderer};
use crate::session::{Session, SessionStats};
use crate::wordlists::WordSet;
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, IsTerminal};

/// Play games on the terminal until the player stops
///
/// Configuration and word lists are fully validated before anything is
/// printed. `seed` makes the secret words reproducible; `plain` disables
/// colour and cursor movement.
///
/// # Errors
///
/// Returns an error for invalid configuration, unreadable or inconsistent
/// word lists, or terminal I/O failures.
pub fn run_play(settings: &Settings, seed: Option<u64>, plain: bool) -> Result<SessionStats> {
    let config = settings.resolve()?;
    let words = load_word_set(settings, &config)?;

    let rng = match seed {
        Some(seed) => {
            log::info!("using fixed seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let stdout = io::stdout();
    let styled = !plain && stdout.is_terminal() && io::stdin().is_terminal();
    let miss = config.miss_symbol;
    let input = io::stdin().lock();

    let stats = if styled {
        play_with(words, config, input, TerminalRenderer::new(stdout.lock(), miss), rng)?
    } else {
        play_with(words, config, input, PlainRenderer::new(stdout.lock(), miss), rng)?
    };
    Ok(stats)
}

fn play_with<D: Renderer>(
    words: WordSet,
    config: GameConfig,
    input: io::StdinLock<'static>,
    display: D,
    rng: StdRng,
) -> Result<SessionStats> {
    let session = Session::new(words, config, input, display, rng)?;
    let (stats, _) = session.run().context("terminal I/O failed")?;
    Ok(stats)
}
