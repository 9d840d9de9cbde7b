//! TUI application state and logic

use super::rendering::{self, KeyCap};
use crate::core::{Evaluation, Verdict, WORD_LENGTH, Word};
use crate::game::{
    ConfigError, GameConfig, Input, MAX_ROWS, Outcome, Presenter, Rejection, TurnController,
};
use crate::output::formatters::share_header;
use crate::wordlists::WordPool;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::trace;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use rustc_hash::FxHashMap;
use std::io;
use std::time::{Duration, Instant};

/// How long a notice stays on screen
pub const NOTICE_DURATION: Duration = Duration::from_millis(1500);
/// How long a rejected row shakes
pub const SHAKE_DURATION: Duration = Duration::from_millis(1000);

const TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<char>,
    pub verdict: Option<Verdict>,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    expires_at: Instant,
}

/// End-of-game dialog contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub outcome: Outcome,
    pub secret: String,
    pub share: Vec<String>,
}

impl Dialog {
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self.outcome {
            Outcome::Won => "Nice, you got it!",
            Outcome::Lost => "Better luck next time!",
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        let secret = self.secret.to_uppercase();
        match self.outcome {
            Outcome::Won => format!("You guessed the right word: {secret}."),
            Outcome::Lost => format!("You've run out of tries. The correct word was {secret}."),
        }
    }

    #[must_use]
    pub fn share_header(&self) -> String {
        share_header(self.outcome, self.share.len())
    }
}

/// What is on screen, updated only through presenter callbacks
#[derive(Debug, Default)]
pub struct Board {
    pub tiles: [[Tile; WORD_LENGTH]; MAX_ROWS],
    pub keys: FxHashMap<char, Verdict>,
    pub notice: Option<Notice>,
    pub shaking_row: Option<(usize, Instant)>,
    pub winning_row: Option<usize>,
    pub dialog: Option<Dialog>,
}

impl Board {
    #[must_use]
    pub fn tile(&self, row: usize, column: usize) -> Tile {
        self.tiles[row - 1][column - 1]
    }

    #[must_use]
    pub fn is_shaking(&self, row: usize) -> bool {
        self.shaking_row.is_some_and(|(shaking, _)| shaking == row)
    }

    /// Drop effects whose time is up
    pub fn tick(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.expires_at <= now) {
            self.notice = None;
        }
        if self.shaking_row.is_some_and(|(_, until)| until <= now) {
            self.shaking_row = None;
        }
    }

    fn share_rows(&self) -> Vec<String> {
        self.tiles
            .iter()
            .take_while(|row| row.iter().all(|tile| tile.verdict.is_some()))
            .map(|row| {
                row.iter()
                    .filter_map(|tile| tile.verdict.map(Verdict::to_emoji))
                    .collect()
            })
            .collect()
    }
}

impl Presenter for Board {
    fn on_letter_placed(&mut self, row: usize, column: usize, letter: char) {
        self.tiles[row - 1][column - 1].letter = Some(letter);
    }

    fn on_letter_removed(&mut self, row: usize, column: usize) {
        self.tiles[row - 1][column - 1].letter = None;
    }

    fn on_guess_rejected(&mut self, row: usize, reason: Rejection) {
        if reason == Rejection::Invalid {
            self.shaking_row = Some((row, Instant::now() + SHAKE_DURATION));
        }
    }

    fn on_guess_evaluated(&mut self, row: usize, guess: &Word, evaluation: &Evaluation) {
        let tiles = &mut self.tiles[row - 1];
        for (i, (tile, &verdict)) in tiles.iter_mut().zip(evaluation.verdicts()).enumerate() {
            tile.letter = Some(guess.letter_at(i));
            tile.verdict = Some(verdict);
        }
    }

    fn on_key_verdict(&mut self, letter: char, verdict: Verdict) {
        self.keys.insert(letter, verdict);
    }

    fn on_game_ended(&mut self, outcome: Outcome, secret: &Word) {
        if outcome == Outcome::Won {
            self.winning_row = Some(self.share_rows().len());
        }
        self.dialog = Some(Dialog {
            outcome,
            secret: secret.text().to_string(),
            share: self.share_rows(),
        });
    }

    fn on_notice(&mut self, message: &str) {
        self.notice = Some(Notice {
            text: message.to_string(),
            expires_at: Instant::now() + NOTICE_DURATION,
        });
    }

    fn on_modal_closed(&mut self) {
        self.dialog = None;
    }
}

/// Application state
pub struct App<'a> {
    pub pool: &'a WordPool,
    pub config: GameConfig,
    pub game: TurnController<'a>,
    pub board: Board,
    pub should_quit: bool,
    rng: StdRng,
}

impl<'a> App<'a> {
    /// # Errors
    ///
    /// Returns an error if the configuration cannot start a game.
    pub fn new(pool: &'a WordPool, config: GameConfig) -> Result<Self, ConfigError> {
        let mut rng = config.rng();
        let game = config.new_game(pool, &mut rng)?;

        Ok(Self {
            pool,
            config,
            game,
            board: Board::default(),
            should_quit: false,
            rng,
        })
    }

    /// Discard the current session and start over
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot start a game.
    pub fn new_game(&mut self) -> Result<(), ConfigError> {
        self.game = self.config.new_game(self.pool, &mut self.rng)?;
        self.board = Board::default();
        Ok(())
    }

    /// Feed one input to the controller; refusals show up as notices
    pub fn press(&mut self, input: Input) {
        if let Err(err) = self.game.handle(input, &mut self.board) {
            trace!("input {input:?} refused: {err}");
        }
    }

    /// Feed a typed key by name; unknown keys get the invalid-key notice
    pub fn press_key(&mut self, name: &str) {
        if let Err(err) = self.game.handle_key(name, &mut self.board) {
            trace!("key {name:?} refused: {err}");
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game()?,
            // Dialog buttons: play again or close
            KeyCode::Enter | KeyCode::Char('n') if self.board.dialog.is_some() => {
                self.new_game()?;
            }
            KeyCode::Char('q') if self.board.dialog.is_some() => self.should_quit = true,
            KeyCode::Char(c) => self.press_key(c.encode_utf8(&mut [0; 4])),
            KeyCode::Enter => self.press(Input::Submit),
            KeyCode::Backspace => self.press(Input::Backspace),
            KeyCode::Esc => self.press(Input::CancelModal),
            _ => {}
        }
        Ok(())
    }

    /// Handle a click somewhere on a screen of size `area`
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if self.board.dialog.is_some() {
            // Clicking outside the dialog dismisses it
            if !rendering::dialog_contains(area, mouse.column, mouse.row) {
                self.press(Input::CancelModal);
            }
            return;
        }

        if let Some(key) = rendering::key_at(area, mouse.column, mouse.row) {
            self.press(key.input());
        }
    }

    pub fn tick(&mut self) {
        self.board.tick(Instant::now());
    }

    /// The tile the next letter goes into, while guessing
    #[must_use]
    pub fn active_tile(&self) -> Option<(usize, usize)> {
        let state = self.game.state();
        (!state.is_game_ended()).then(|| (state.current_row(), state.current_column()))
    }

    #[must_use]
    pub fn key_color(&self, key: KeyCap) -> Option<Verdict> {
        match key {
            KeyCap::Letter(letter) => self.board.keys.get(&letter).copied(),
            KeyCap::Enter | KeyCap::Backspace => None,
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key)?;
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    app.handle_mouse_event(mouse, Rect::new(0, 0, size.width, size.height));
                }
                _ => {}
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
