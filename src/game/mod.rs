//! Game session: state, turn controller and the presenter contract
//!
//! Nothing here draws anything. Presentation happens through [`Presenter`].

mod config;
mod controller;
mod events;
mod input;
mod keyboard;
mod state;

pub use config::{ConfigError, GameConfig};
pub use controller::TurnController;
pub use events::{EventLog, GameEvent, Presenter, Rejection};
pub use input::{Input, TurnError};
pub use keyboard::{KeyColorPolicy, KeyboardState, QWERTY_ROWS};
pub use state::{GameState, GuessRecord, MAX_ROWS, Outcome, Phase, Status};
