//! Guess evaluation against the secret word
//!
//! Each guess position receives one of three verdicts:
//! - Correct: letter in the right position
//! - Present: letter elsewhere in the secret, not yet accounted for
//! - Absent: letter not in the secret, or every occurrence already used

use super::Word;
use super::word::WORD_LENGTH;
use std::fmt;

/// Per-position result of comparing a guess to the secret
///
/// Ordered by strength so the best verdict for a letter is the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Lowercase tag name: `correct`, `present` or `absent`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Verdicts for a full guess plus whether it solved the puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation {
    verdicts: [Verdict; WORD_LENGTH],
    completed: bool,
}

impl Evaluation {
    /// Evaluate `guess` against `secret`
    ///
    /// Duplicate letters are bounded by how often they occur in the secret.
    ///
    /// # Algorithm
    /// 1. Count the secret's letters
    /// 2. First pass: mark exact matches correct and consume their count
    /// 3. Second pass: mark remaining positions present while the letter still has count left
    /// 4. Completed iff all five are correct
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{Evaluation, Verdict, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let evaluation = Evaluation::calculate(&guess, &secret);
    ///
    /// assert_eq!(evaluation.verdicts()[2], Verdict::Correct);
    /// assert!(!evaluation.is_completed());
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut remaining = secret.letter_counts();

        // Allow: Index needed to compare guess[i] with secret[i] and set verdicts[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.chars()[i];
            if letter == secret.chars()[i] {
                verdicts[i] = Verdict::Correct;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, verdict) in verdicts.iter_mut().enumerate() {
            if *verdict == Verdict::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.chars()[i])
                && *count > 0
            {
                *verdict = Verdict::Present;
                *count -= 1;
            }
        }

        let completed = verdicts.iter().all(|&v| v == Verdict::Correct);

        Self {
            verdicts,
            completed,
        }
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.verdicts
    }

    /// True when every position is correct
    #[inline]
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.verdicts
            .iter()
            .filter(|&&v| v == Verdict::Correct)
            .count()
    }

    /// Share-style row such as "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{Evaluation, Word};
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(Evaluation::calculate(&word, &word).to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts.iter().map(|v| v.to_emoji()).collect()
    }
}
