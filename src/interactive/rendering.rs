//! TUI rendering with ratatui
//!
//! Tile board, notice line, on-screen keyboard and the end-of-game dialog.

use super::app::{App, Tile};
use crate::core::{Verdict, WORD_LENGTH};
use crate::game::{Input, MAX_ROWS, Outcome, QWERTY_ROWS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use std::time::Instant;

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = WORD_LENGTH as u16 * (TILE_WIDTH + 1) - 1;
const BOARD_HEIGHT: u16 = MAX_ROWS as u16 * TILE_HEIGHT;

const KEY_HEIGHT: u16 = 3;
const KEYBOARD_HEIGHT: u16 = QWERTY_ROWS.len() as u16 * KEY_HEIGHT;

const DIALOG_WIDTH: u16 = 46;
const DIALOG_HEIGHT: u16 = 17;

/// A key of the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCap {
    Letter(char),
    Enter,
    Backspace,
}

impl KeyCap {
    #[must_use]
    pub const fn input(self) -> Input {
        match self {
            Self::Letter(letter) => Input::Letter(letter),
            Self::Enter => Input::Submit,
            Self::Backspace => Input::Backspace,
        }
    }

    fn label(self) -> String {
        match self {
            Self::Letter(letter) => letter.to_ascii_uppercase().to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }

    const fn width(self) -> u16 {
        match self {
            Self::Letter(_) => 5,
            Self::Enter | Self::Backspace => 7,
        }
    }
}

/// Screen regions, top to bottom
pub struct ScreenLayout {
    pub header: Rect,
    pub board: Rect,
    pub notice: Rect,
    pub keyboard: Rect,
    pub status: Rect,
}

#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(BOARD_HEIGHT),    // Tiles
            Constraint::Length(1),               // Notice
            Constraint::Length(KEYBOARD_HEIGHT), // Keyboard
            Constraint::Min(0),
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        board: chunks[1],
        notice: chunks[2],
        keyboard: chunks[3],
        status: chunks[5],
    }
}

fn keyboard_rows() -> Vec<Vec<KeyCap>> {
    QWERTY_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut keys: Vec<KeyCap> = row.chars().map(KeyCap::Letter).collect();
            if i == QWERTY_ROWS.len() - 1 {
                keys.insert(0, KeyCap::Enter);
                keys.push(KeyCap::Backspace);
            }
            keys
        })
        .collect()
}

/// Where each on-screen key is drawn inside the keyboard region
#[must_use]
pub fn key_rects(area: Rect) -> Vec<(Rect, KeyCap)> {
    let mut rects = Vec::new();
    for (i, row) in keyboard_rows().into_iter().enumerate() {
        let total: u16 = row.iter().map(|key| key.width() + 1).sum::<u16>() - 1;
        let mut x = area.x + area.width.saturating_sub(total) / 2;
        let y = area.y + i as u16 * KEY_HEIGHT;

        for key in row {
            rects.push((Rect::new(x, y, key.width(), KEY_HEIGHT), key));
            x += key.width() + 1;
        }
    }
    rects
}

/// The on-screen key under a screen position, if any
#[must_use]
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<KeyCap> {
    let position = Position::new(column, row);
    key_rects(screen_layout(area).keyboard)
        .into_iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, key)| key)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[must_use]
pub fn dialog_area(area: Rect) -> Rect {
    centered(area, DIALOG_WIDTH, DIALOG_HEIGHT)
}

#[must_use]
pub fn dialog_contains(area: Rect, column: u16, row: u16) -> bool {
    dialog_area(area).contains(Position::new(column, row))
}

fn verdict_style(verdict: Verdict) -> Style {
    let style = match verdict {
        Verdict::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        Verdict::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        Verdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    };
    style.add_modifier(Modifier::BOLD)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let layout = screen_layout(f.area());

    render_header(f, layout.header);
    render_board(f, app, layout.board);
    render_notice(f, app, layout.notice);
    render_keyboard(f, app, layout.keyboard);
    render_status(f, app, layout.status);

    // Dialog goes on top of everything else
    render_dialog(f, app);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Horizontal jitter for a rejected row
fn shake_offset(until: Instant) -> u16 {
    let left = until.saturating_duration_since(Instant::now()).as_millis();
    u16::from((left / 80) % 2 == 0)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let active = app.active_tile();
    let origin_x = area.x + area.width.saturating_sub(BOARD_WIDTH) / 2;

    for row in 1..=MAX_ROWS {
        let shake = match app.board.shaking_row {
            Some((shaking, until)) if shaking == row => shake_offset(until),
            _ => 0,
        };
        let winning = app.board.winning_row == Some(row);

        for column in 1..=WORD_LENGTH {
            let x = origin_x + shake + (column as u16 - 1) * (TILE_WIDTH + 1);
            let y = area.y + (row as u16 - 1) * TILE_HEIGHT;
            let rect = Rect::new(x, y, TILE_WIDTH, TILE_HEIGHT).intersection(area);
            if rect.is_empty() {
                continue;
            }

            let tile = app.board.tile(row, column);
            let border = if app.board.is_shaking(row) {
                Style::default().fg(Color::Red)
            } else if winning {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if active == Some((row, column)) {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else if tile.letter.is_some() {
                Style::default().fg(Color::Gray)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            f.render_widget(tile_widget(tile, border), rect);
        }
    }
}

fn tile_widget(tile: Tile, border: Style) -> Paragraph<'static> {
    let style = tile.verdict.map_or_else(
        || {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        },
        verdict_style,
    );
    let letter = tile
        .letter
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_default();

    Paragraph::new(letter)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        )
}

fn render_notice(f: &mut Frame, app: &App, area: Rect) {
    let Some(notice) = &app.board.notice else {
        return;
    };

    let line = Line::from(Span::styled(
        format!(" {} ", notice.text),
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    for (rect, key) in key_rects(area) {
        let rect = rect.intersection(area);
        if rect.is_empty() {
            continue;
        }

        let style = app
            .key_color(key)
            .map_or_else(|| Style::default().fg(Color::White), verdict_style);
        let widget = Paragraph::new(key.label())
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        f.render_widget(widget, rect);
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();
    let progress = match state.outcome() {
        Some(Outcome::Won) => Span::styled("Solved", Style::default().fg(Color::Green)),
        Some(Outcome::Lost) => Span::styled("Out of turns", Style::default().fg(Color::Red)),
        None => Span::raw(format!("Row {}/{MAX_ROWS}", state.current_row())),
    };

    let status = vec![Line::from(vec![
        progress,
        Span::raw(" │ "),
        Span::styled("Ctrl+N", Style::default().fg(Color::Yellow)),
        Span::raw(": New game │ "),
        Span::styled("Ctrl+Q", Style::default().fg(Color::Yellow)),
        Span::raw(": Quit │ "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(": Close dialog"),
    ])];

    let paragraph = Paragraph::new(status)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn render_dialog(f: &mut Frame, app: &App) {
    let Some(dialog) = &app.board.dialog else {
        return;
    };

    let area = dialog_area(f.area());
    let accent = match dialog.outcome {
        Outcome::Won => Color::Green,
        Outcome::Lost => Color::Red,
    };

    let mut content = vec![
        Line::from(Span::styled(
            dialog.heading(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(dialog.message()),
        Line::from(""),
        Line::from(Span::styled(
            dialog.share_header(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    content.extend(dialog.share.iter().map(|row| Line::from(row.clone())));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(": Play again   "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(": Close"),
    ]));

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Game Over ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent)),
        );

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
