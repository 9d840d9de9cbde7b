//! Session configuration

use super::controller::TurnController;
use super::keyboard::KeyColorPolicy;
use crate::core::{Word, WordError};
use crate::wordlists::WordPool;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid secret word: {0}")]
    InvalidSecret(#[from] WordError),
    #[error("Secret '{0}' is not an accepted word")]
    SecretNotAccepted(Word),
    #[error("No candidate words to choose a secret from")]
    NoCandidates,
}

/// Options shared by every way of playing
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub key_colors: KeyColorPolicy,
    /// Fixed secret instead of a random draw
    pub secret: Option<String>,
    /// Seed for reproducible secret draws
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Start a new session with this configuration
    ///
    /// # Errors
    /// Fails if the fixed secret is not a valid word or not one the pool accepts
    /// (it could never be guessed), or if the pool has no candidates.
    pub fn new_game<'a>(
        &self,
        pool: &'a WordPool,
        rng: &mut StdRng,
    ) -> Result<TurnController<'a>, ConfigError> {
        match &self.secret {
            Some(text) => {
                let secret = Word::new(text.as_str())?;
                if !pool.contains(&secret) {
                    return Err(ConfigError::SecretNotAccepted(secret));
                }
                Ok(TurnController::new(secret, pool, self.key_colors))
            }
            None => TurnController::start(pool, rng, self.key_colors)
                .ok_or(ConfigError::NoCandidates),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::events::EventLog;
    use crate::game::state::Outcome;
    use crate::wordlists::loader::words_from_slice;

    fn pool() -> WordPool {
        WordPool::new(
            words_from_slice(&["crane", "slate", "speed"]),
            words_from_slice(&[]),
        )
    }

    #[test]
    fn fixed_secret_is_used() {
        let pool = pool();
        let config = GameConfig {
            secret: Some("SPEED".into()),
            ..GameConfig::default()
        };
        let game = config.new_game(&pool, &mut config.rng()).unwrap();
        assert_eq!(game.state().secret().text(), "speed");
    }

    #[test]
    fn invalid_fixed_secret_is_error() {
        let pool = pool();
        let config = GameConfig {
            secret: Some("toolong".into()),
            ..GameConfig::default()
        };
        assert!(matches!(
            config.new_game(&pool, &mut config.rng()),
            Err(ConfigError::InvalidSecret(WordError::InvalidLength(7)))
        ));
    }

    #[test]
    fn unguessable_fixed_secret_is_error() {
        let pool = pool();
        let config = GameConfig {
            secret: Some("zzzzz".into()),
            ..GameConfig::default()
        };
        let err = config.new_game(&pool, &mut config.rng()).err();
        assert!(matches!(&err, Some(ConfigError::SecretNotAccepted(w)) if w.text() == "zzzzz"));
        assert_eq!(
            err.map(|e| e.to_string()).as_deref(),
            Some("Secret 'zzzzz' is not an accepted word")
        );
    }

    #[test]
    fn embedded_fixed_secret_can_be_won() {
        let pool = WordPool::embedded();
        let config = GameConfig {
            secret: Some("tears".into()),
            ..GameConfig::default()
        };
        let mut game = config.new_game(&pool, &mut config.rng()).unwrap();
        let mut log = EventLog::new();
        for c in "tears".chars() {
            game.append_letter(c, &mut log).unwrap();
        }
        assert!(game.submit_guess(&mut log).unwrap().is_completed());
        assert_eq!(game.state().outcome(), Some(Outcome::Won));
    }

    #[test]
    fn seeded_draws_repeat() {
        let pool = WordPool::embedded();
        let config = GameConfig {
            seed: Some(2024),
            ..GameConfig::default()
        };
        let first = config.new_game(&pool, &mut config.rng()).unwrap();
        let second = config.new_game(&pool, &mut config.rng()).unwrap();
        assert_eq!(first.state().secret(), second.state().secret());
    }

    #[test]
    fn empty_pool_is_error() {
        let pool = WordPool::new(Vec::new(), words_from_slice(&[]));
        let config = GameConfig::default();
        assert!(matches!(
            config.new_game(&pool, &mut config.rng()),
            Err(ConfigError::NoCandidates)
        ));
    }

    #[test]
    fn key_colors_flow_into_controller() {
        let pool = pool();
        let config = GameConfig {
            key_colors: KeyColorPolicy::Latest,
            ..GameConfig::default()
        };
        let game = config.new_game(&pool, &mut config.rng()).unwrap();
        assert_eq!(game.keyboard().policy(), KeyColorPolicy::Latest);
    }
}
