//! Wordle Clone - CLI
//!
//! Play Wordle in a TUI (default) or in line mode, or evaluate a single guess.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use wordle_clone::{
    commands::{evaluate_words, run_simple},
    core::Word,
    game::{GameConfig, KeyColorPolicy},
    output::print_evaluation_report,
    wordlists::{
        ACCEPTED, CANDIDATES, WordPool,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_clone",
    about = "Guess the secret 5-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for a reproducible secret word
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Play against a fixed secret word
    #[arg(long, global = true)]
    secret: Option<String>,

    /// How keyboard colors follow new guesses
    #[arg(long, global = true, value_enum, default_value_t = KeyColorPolicy::Best)]
    key_colors: KeyColorPolicy,

    /// Accepted guesses: 'builtin' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Candidate secrets: 'builtin' (default) or path to file
    #[arg(short = 'a', long, global = true, default_value = "builtin")]
    answers: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line mode without the TUI
    Simple,

    /// Show the verdicts for one guess against a secret
    Evaluate {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },
}

/// Load one word list: the embedded one for "builtin", otherwise a file
fn load_words(source: &str, builtin: &[&str]) -> Result<Vec<Word>> {
    match source {
        "builtin" => Ok(words_from_slice(builtin)),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}")),
    }
}

/// Build the word pool from the -w and -a flags
fn load_pool(wordlist: &str, answers: &str) -> Result<WordPool> {
    let accepted = load_words(wordlist, ACCEPTED)?;
    let candidates = load_words(answers, CANDIDATES)?;

    if candidates.is_empty() {
        bail!("no candidate words in {answers}");
    }

    let pool = WordPool::new(candidates, accepted);
    info!(
        "{} candidate secrets, {} accepted guesses",
        pool.candidates().len(),
        pool.accepted_count()
    );
    Ok(pool)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let pool = load_pool(&cli.wordlist, &cli.answers)?;

    let config = GameConfig {
        key_colors: cli.key_colors,
        secret: cli.secret,
        seed: cli.seed,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&pool, config),
        Commands::Simple => run_simple(&pool, &config),
        Commands::Evaluate { guess, secret } => run_evaluate_command(&guess, &secret, &pool),
    }
}

fn run_evaluate_command(guess: &str, secret: &str, pool: &WordPool) -> Result<()> {
    let report = evaluate_words(guess, secret, pool)?;
    print_evaluation_report(&report);
    Ok(())
}

fn run_play_command(pool: &WordPool, config: GameConfig) -> Result<()> {
    use wordle_clone::interactive::{App, run_tui};

    let app = App::new(pool, config)?;
    run_tui(app)
}
