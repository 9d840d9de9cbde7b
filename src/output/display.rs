//! Display functions for command results

use super::formatters::{colored_tiles, keyboard_lines, share_grid, share_header};
use crate::commands::EvaluationReport;
use crate::core::{Evaluation, WORD_LENGTH, Word};
use crate::game::{GuessRecord, KeyboardState, Outcome};
use colored::Colorize;

/// Print the verdicts for a single guess/secret pair
pub fn print_evaluation_report(report: &EvaluationReport) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        report.guess.text().to_uppercase().bright_yellow().bold(),
        report.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_tiles(&report.guess, &report.evaluation));
    println!("  {}\n", report.evaluation.to_emoji());

    for (i, verdict) in report.evaluation.verdicts().iter().enumerate() {
        println!(
            "  {}: {} {}",
            i + 1,
            report.guess.letter_at(i).to_ascii_uppercase(),
            verdict
        );
    }

    println!(
        "\n  {}/{WORD_LENGTH} letters in place",
        report.evaluation.count_correct()
    );

    if !report.accepted {
        println!(
            "\n{}",
            format!(
                "Note: {} is not in the accepted word list",
                report.guess.text().to_uppercase()
            )
            .yellow()
        );
    }

    if report.evaluation.is_completed() {
        println!("\n{}", "✅ Exact match".green().bold());
    }
}

/// Print one evaluated row of the board
pub fn print_guess_row(row: usize, guess: &Word, evaluation: &Evaluation) {
    println!("  {row}. {}", colored_tiles(guess, evaluation));
}

/// Print the keyboard colored by what is known so far
pub fn print_keyboard(keyboard: &KeyboardState) {
    println!();
    for line in keyboard_lines(keyboard) {
        println!("  {line}");
    }
    println!();
}

/// Print the end-of-game banner with the share grid
pub fn print_game_over(outcome: Outcome, secret: &Word, history: &[GuessRecord]) {
    let secret = secret.text().to_uppercase();

    println!("\n{}", "═".repeat(50).bright_cyan());
    match outcome {
        Outcome::Won => {
            println!("{}", "    Nice, you got it!".bright_green().bold());
            println!("\n  You guessed the right word: {}.", secret.bold());
        }
        Outcome::Lost => {
            println!("{}", "    Better luck next time!".bright_red().bold());
            println!(
                "\n  You've run out of tries. The correct word was {}.",
                secret.bold()
            );
        }
    }

    println!("\n  {}", share_header(outcome, history.len()).bright_white());
    for line in share_grid(history).lines() {
        println!("  {line}");
    }
    println!("{}", "═".repeat(50).bright_cyan());
}
