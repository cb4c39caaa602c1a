//! Wordle Game - CLI
//!
//! Guess the five-letter word in six attempts. Runs an interactive session by
//! default; `score` and `check` are small helpers.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::{check_word_lists, run_play, score_pair},
    config::Settings,
    logging,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the secret word from per-letter clues",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML config file; command-line flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Answer word list (one word per line); default: built-in list
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Allowed guess list (one word per line); default: built-in list
    #[arg(long, global = true)]
    allowed: Option<PathBuf>,

    /// Add every answer to the allowed guesses before validating
    #[arg(long, global = true)]
    merge_answers: bool,

    /// Letters per word
    #[arg(short = 'l', long, global = true)]
    word_length: Option<usize>,

    /// Attempts per game
    #[arg(short = 'n', long, global = true)]
    max_attempts: Option<usize>,

    /// Symbol shown for letters not in the word
    #[arg(short, long, global = true)]
    miss: Option<char>,

    /// Input that gives up on the current word
    #[arg(short, long, global = true)]
    exit: Option<String>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Seed for choosing secret words, for reproducible games
        #[arg(long)]
        seed: Option<u64>,

        /// No colours or cursor movement
        #[arg(long)]
        plain: bool,
    },

    /// Show the feedback for one attempt against a given secret word
    Score {
        /// The guessed word
        attempt: String,

        /// The secret word
        secret: String,
    },

    /// Validate configuration and word lists, then exit
    Check,
}

impl Cli {
    /// Settings layer made from the flags that were given
    fn settings(&self) -> Settings {
        Settings {
            word_length: self.word_length,
            max_attempts: self.max_attempts,
            miss_symbol: self.miss,
            exit_sentinel: self.exit.clone(),
            answers: self.answers.clone(),
            allowed: self.allowed.clone(),
            merge_answers: self.merge_answers.then_some(true),
            ..Settings::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Defaults < config file < command line
    let file_settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    let settings = file_settings.layer(cli.settings());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        seed: None,
        plain: false,
    });

    match command {
        Commands::Play { seed, plain } => {
            let stats = run_play(&settings, seed, plain)?;
            log::info!(
                "session over after {} game(s), {} won",
                stats.games_played,
                stats.games_won
            );
            Ok(())
        }
        Commands::Score { attempt, secret } => {
            let config = settings.resolve()?;
            println!("{}", score_pair(&attempt, &secret, &config)?);
            Ok(())
        }
        Commands::Check => {
            println!("{}", check_word_lists(&settings)?);
            Ok(())
        }
    }
}
