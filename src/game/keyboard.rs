//! Accumulated per-letter verdicts for keyboard coloring

use crate::core::{Evaluation, Verdict, Word};
use clap::ValueEnum;
use rustc_hash::FxHashMap;

/// Letter rows of the on-screen keyboard
pub const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// How a new guess updates the keyboard colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum KeyColorPolicy {
    /// Keep the strongest verdict ever seen for each letter
    #[default]
    Best,
    /// Take the latest guess's verdict, even if that downgrades a key
    Latest,
}

#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    policy: KeyColorPolicy,
    keys: FxHashMap<char, Verdict>,
}

impl KeyboardState {
    #[must_use]
    pub fn new(policy: KeyColorPolicy) -> Self {
        Self {
            policy,
            keys: FxHashMap::default(),
        }
    }

    #[must_use]
    pub const fn policy(&self) -> KeyColorPolicy {
        self.policy
    }

    /// Current color of a key, if the letter has been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Verdict> {
        self.keys.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Fold one evaluated guess into the key colors
    ///
    /// Returns each distinct letter of the guess, in order of first appearance,
    /// with its resulting key color.
    pub fn record(&mut self, guess: &Word, evaluation: &Evaluation) -> Vec<(char, Verdict)> {
        let mut seen: Vec<char> = Vec::with_capacity(guess.chars().len());
        let mut latest: FxHashMap<char, Verdict> = FxHashMap::default();

        for (&byte, &verdict) in guess.chars().iter().zip(evaluation.verdicts()) {
            let letter = byte as char;
            if !seen.contains(&letter) {
                seen.push(letter);
            }
            match self.policy {
                KeyColorPolicy::Best => {
                    latest
                        .entry(letter)
                        .and_modify(|v| *v = (*v).max(verdict))
                        .or_insert(verdict);
                }
                // Last position of a letter in the guess wins
                KeyColorPolicy::Latest => {
                    latest.insert(letter, verdict);
                }
            }
        }

        seen.into_iter()
            .map(|letter| {
                let verdict = latest[&letter];
                let merged = match self.policy {
                    KeyColorPolicy::Best => self.get(letter).map_or(verdict, |v| v.max(verdict)),
                    KeyColorPolicy::Latest => verdict,
                };
                self.keys.insert(letter, merged);
                (letter, merged)
            })
            .collect()
    }
}
