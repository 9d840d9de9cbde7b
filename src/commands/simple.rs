//! Simple line-mode game
//!
//! Text-based play without the TUI: each line typed is one row.

use crate::core::{Evaluation, Word};
use crate::game::{GameConfig, Input, MAX_ROWS, Outcome, Presenter, TurnController};
use crate::output::{print_game_over, print_guess_row, print_keyboard};
use crate::wordlists::WordPool;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Prints evaluated rows and notices as they happen
#[derive(Default)]
struct ConsolePresenter {
    ended: Option<Outcome>,
}

impl Presenter for ConsolePresenter {
    fn on_guess_evaluated(&mut self, row: usize, guess: &Word, evaluation: &Evaluation) {
        print_guess_row(row, guess, evaluation);
    }

    fn on_game_ended(&mut self, outcome: Outcome, _secret: &Word) {
        self.ended = Some(outcome);
    }

    fn on_notice(&mut self, message: &str) {
        println!("  {}", format!("❌ {message}").red());
    }
}

/// Run the line-mode game
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a game
/// cannot be started with the given configuration.
pub fn run_simple(pool: &WordPool, config: &GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║                Wordle - Line Mode                ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    println!("Guess the 5-letter word in {MAX_ROWS} tries. Type a word and press Enter.");
    println!("  {} correct letter, correct spot", " A ".black().on_green());
    println!("  {} in the word, wrong spot", " A ".black().on_yellow());
    println!("  {} not in the word", " A ".white().on_bright_black());
    println!("\nCommands: 'keys' to show the keyboard, 'new' for a new game, 'quit' to exit\n");

    let mut rng = config.rng();

    'games: loop {
        let mut game = config.new_game(pool, &mut rng)?;
        let mut out = ConsolePresenter::default();

        while out.ended.is_none() {
            let prompt = format!("Guess {}/{MAX_ROWS}", game.state().current_row());
            let Some(line) = get_user_input(&prompt)? else {
                return Ok(());
            };

            match line.to_lowercase().as_str() {
                "" => {}
                "quit" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" => {
                    println!("\n🔄 New game started!\n");
                    continue 'games;
                }
                "keys" => print_keyboard(game.keyboard()),
                _ => {
                    play_line(&mut game, &line, &mut out);
                    if out.ended.is_none() && !game.state().history().is_empty() {
                        print_keyboard(game.keyboard());
                    }
                }
            }
        }

        if let Some(outcome) = out.ended {
            let state = game.state();
            print_game_over(outcome, state.secret(), state.history());
        }

        match get_user_input("Play again? (yes/no)")?
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => println!("\n🔄 New game started!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Type a line into the active row and submit it
///
/// Leftovers from a rejected row are erased first. Refused input has already
/// been reported as a notice, so results are not inspected further.
fn play_line(game: &mut TurnController<'_>, line: &str, out: &mut ConsolePresenter) {
    while !game.state().current_guess().is_empty() {
        if game.handle(Input::Backspace, out).is_err() {
            return;
        }
    }

    for letter in line.chars() {
        if game.handle_key(&letter.to_string(), out).is_err() {
            return;
        }
    }

    let _ = game.handle(Input::Submit, out);
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
