//! Evaluate one guess against a given secret

use crate::core::{Evaluation, Word, WordError};
use crate::wordlists::WordPool;

/// Verdicts for a guess/secret pair
pub struct EvaluationReport {
    pub guess: Word,
    pub secret: Word,
    pub evaluation: Evaluation,
    /// Whether the guess would be accepted in a game
    pub accepted: bool,
}

/// Evaluate `guess` against `secret` without playing a game
///
/// # Errors
///
/// Returns an error if either word is not 5 ASCII letters.
pub fn evaluate_words(
    guess: &str,
    secret: &str,
    pool: &WordPool,
) -> Result<EvaluationReport, WordError> {
    let accepted = pool.is_accepted(guess);
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    let evaluation = Evaluation::calculate(&guess, &secret);

    Ok(EvaluationReport {
        accepted,
        guess,
        secret,
        evaluation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict::{Absent, Present};

    #[test]
    fn evaluate_words_reports_verdicts() {
        let pool = WordPool::embedded();
        let report = evaluate_words("ERASE", "speed", &pool).unwrap();

        assert_eq!(report.guess.text(), "erase");
        assert_eq!(
            report.evaluation.verdicts(),
            &[Present, Absent, Absent, Present, Present]
        );
        assert!(report.accepted);
        assert_eq!(report.evaluation.count_correct(), 0);
        assert!(!report.evaluation.is_completed());
    }

    #[test]
    fn evaluate_words_counts_letters_in_place() {
        let pool = WordPool::embedded();
        let report = evaluate_words("Tears", "terse", &pool).unwrap();
        assert!(report.accepted);
        assert_eq!(report.evaluation.count_correct(), 2);

        let exact = evaluate_words("terse", "TERSE", &pool).unwrap();
        assert_eq!(exact.evaluation.count_correct(), 5);
        assert!(exact.evaluation.is_completed());
    }

    #[test]
    fn evaluate_words_flags_unlisted_guess() {
        let pool = WordPool::embedded();
        let report = evaluate_words("zzzzz", "speed", &pool).unwrap();
        assert!(!report.accepted);
    }

    #[test]
    fn evaluate_words_invalid_input() {
        let pool = WordPool::embedded();
        assert_eq!(
            evaluate_words("toolong", "speed", &pool).err(),
            Some(WordError::InvalidLength(7))
        );
        assert!(evaluate_words("crane", "sp3ed", &pool).is_err());
    }
}
