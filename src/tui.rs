//! TUI (Terminal User Interface) for the game
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Layout
//! - Title bar
//! - Board (6 rows of 5 tiles) beside the diagnostics panel
//! - Status line and key instructions
//! - Outcome popup once the game has been announced
//!
//! Tile colors follow the verdicts: green for correct, yellow for present,
//! gray for absent.

use crate::diagnostics::DiagnosticLog;
use crate::engine::Verdict;
use crate::game_state::{Board, MAX_GUESSES, Tile};
use crate::interface::{GameInterface, KeyInput, Outcome, Severity};
use crate::word::WORD_LENGTH;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;
const BOARD_WIDTH: u16 = 30;
const POPUP_WIDTH: u16 = 40;
const POPUP_HEIGHT: u16 = 5;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Gray);
const TIME_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Background and foreground for a tile.
fn tile_colors(tile: &Tile) -> (Color, Color) {
    match tile.verdict {
        Some(Verdict::Correct) => (Color::Green, Color::Black),
        Some(Verdict::Present) => (Color::Yellow, Color::Black),
        Some(Verdict::Absent) => (Color::Gray, Color::White),
        None if tile.is_filled() => (Color::Blue, Color::White),
        None => (Color::DarkGray, Color::White),
    }
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Info => INFO_STYLE,
        Severity::Success => SUCCESS_STYLE,
        Severity::Error => ERROR_STYLE,
    }
}

/// What a raw key press means to the TUI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Game(KeyInput),
    ClearDiagnostics,
    Ignore,
}

/// Classify a crossterm key event.
///
/// Letters are case-insensitive. Alt or Control combinations never type a
/// letter; Ctrl-N starts a new game and Ctrl-L clears the diagnostics.
pub fn classify_key(key: &KeyEvent) -> KeyAction {
    // Only process Press events, ignore Release and Repeat to avoid double input
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('n' | 'N') if ctrl => KeyAction::Game(KeyInput::NewGame),
        KeyCode::Char('l' | 'L') if ctrl => KeyAction::ClearDiagnostics,
        KeyCode::Char('c') if ctrl => KeyAction::Game(KeyInput::Quit),
        KeyCode::Char(_) if ctrl || alt => KeyAction::Ignore,
        // Garbage from escape sequences when alt-tabbing
        KeyCode::Char(c) if c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD => {
            KeyAction::Ignore
        }
        KeyCode::Char(c) => KeyInput::from_char(c).map_or(KeyAction::Ignore, KeyAction::Game),
        KeyCode::Backspace => KeyAction::Game(KeyInput::Delete),
        KeyCode::Enter => KeyAction::Game(KeyInput::Submit),
        KeyCode::Esc => KeyAction::Game(KeyInput::Quit),
        _ => KeyAction::Ignore,
    }
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
pub struct RenderContext<'a> {
    pub board: &'a Board,
    pub diagnostics: &'a DiagnosticLog,
    pub outcome: Option<&'a Outcome>,
    pub error_message: &'a str,
    pub status: &'a str,
}

/// Render the complete UI layout using the provided context.
pub fn render(f: &mut Frame, ctx: &RenderContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(14), // Board and diagnostics
            Constraint::Min(0),     // Spare
            Constraint::Length(3),  // Status line
            Constraint::Length(3),  // Instructions
        ])
        .split(f.area());

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH), Constraint::Min(20)])
        .split(chunks[1]);

    render_title(f, chunks[0]);
    render_board(f, middle[0], ctx.board);
    render_diagnostics(f, middle[1], ctx.diagnostics);
    render_status(f, chunks[3], ctx.status, ctx.error_message);
    render_instructions(f, chunks[4], ctx.outcome.is_some());

    if let Some(outcome) = ctx.outcome {
        render_outcome(f, middle[0], outcome);
    }
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("WORDLE")
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_board(f: &mut Frame, area: Rect, board: &Board) {
    let block = Block::default()
        .title("Guesses")
        .borders(Borders::ALL)
        .style(Style::default());

    let inner = block.inner(area);
    f.render_widget(block, area);

    for (row_index, row) in board.rows().iter().enumerate() {
        render_board_row(f, inner, row_index, row);
    }
}

#[allow(clippy::cast_possible_truncation)]
fn render_board_row(f: &mut Frame, area: Rect, row_index: usize, row: &[Tile]) {
    let y = area.y + (row_index as u16 * ROW_SPACING);
    if y >= area.y + area.height {
        return;
    }

    let mut spans = vec![Span::raw("  ")];
    for tile in row {
        let (bg_color, fg_color) = tile_colors(tile);
        let letter = tile.letter.unwrap_or(' ');
        spans.push(Span::styled(
            format!(" {letter} "),
            Style::default()
                .fg(fg_color)
                .bg(bg_color)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect {
            x: area.x,
            y,
            width: area.width,
            height: 1,
        },
    );
}

fn render_diagnostics(f: &mut Frame, area: Rect, diagnostics: &DiagnosticLog) {
    let lines: Vec<Line> = diagnostics
        .entries()
        .map(|entry| {
            Line::from(vec![
                Span::styled(entry.time_label(), TIME_STYLE),
                Span::raw(" - "),
                Span::styled(entry.message.as_str(), severity_style(entry.severity)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!("Debug ({})", diagnostics.len()))
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, status: &str, error_message: &str) {
    let line = if error_message.is_empty() {
        let status_text = if status.is_empty() { "Ready" } else { status };
        Line::from(Span::styled(status_text, HEADER_STYLE))
    } else {
        Line::from(Span::styled(error_message, ERROR_STYLE))
    };
    let paragraph =
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect, game_over: bool) {
    let text = if game_over {
        "Ctrl-N: New game | ESC: Quit"
    } else {
        "Type letters | BACKSPACE: Delete | ENTER: Submit | Ctrl-N: New game | Ctrl-L: Clear debug | ESC: Quit"
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_outcome(f: &mut Frame, area: Rect, outcome: &Outcome) {
    let popup = centered_rect(area, POPUP_WIDTH, POPUP_HEIGHT);
    let style = match outcome {
        Outcome::Won => SUCCESS_STYLE,
        Outcome::Lost(_) => ERROR_STYLE.add_modifier(Modifier::BOLD),
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(outcome.announcement(), style)))
        .block(Block::default().borders(Borders::ALL).title("Game Over"))
        .wrap(Wrap { trim: true });
    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    board: Board,
    diagnostics: DiagnosticLog,
    outcome: Option<Outcome>,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            board: Board::new(),
            diagnostics: DiagnosticLog::default(),
            outcome: None,
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    /// Draw the current UI state to the terminal.
    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            board: &self.board,
            diagnostics: &self.diagnostics,
            outcome: self.outcome.as_ref(),
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| render(f, &ctx))?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn row_label(row: usize) -> String {
        format!("Guess {}/{MAX_GUESSES}", row + 1)
    }
}

impl GameInterface for TuiInterface {
    fn render_letter(&mut self, row: usize, column: usize, letter: char) {
        self.board.tile_mut(row, column).letter = Some(letter);
        self.status = Self::row_label(row);
    }

    fn render_verdict(&mut self, row: usize, column: usize, verdict: Verdict) {
        self.board.tile_mut(row, column).verdict = Some(verdict);
        if column == WORD_LENGTH - 1 {
            self.status = format!("Row {} scored", row + 1);
            self.draw_or_log();
        }
    }

    fn clear_tile(&mut self, row: usize, column: usize) {
        self.board.tile_mut(row, column).clear();
        self.status = Self::row_label(row);
    }

    fn reset(&mut self) {
        self.board = Board::new();
        self.outcome = None;
        self.error_message.clear();
        self.status = "New game - Enter your first guess".to_string();
        self.draw_or_log();
    }

    fn show_message(&mut self, message: &str) {
        self.error_message = message.to_string();
    }

    fn notify(&mut self, outcome: &Outcome) {
        self.status = format!("Game Over - {}", outcome.announcement());
        self.outcome = Some(outcome.clone());
        self.draw_or_log();
    }

    fn diagnostic(&mut self, severity: Severity, message: &str) {
        self.diagnostics.push(severity, message);
    }

    fn read_key(&mut self, timeout: Option<Duration>) -> io::Result<Option<KeyInput>> {
        self.draw()?;

        let timeout = timeout.unwrap_or(Duration::from_millis(EVENT_POLL_TIMEOUT_MS));
        if !event::poll(timeout)? {
            return Ok(None);
        }

        let event = event::read()?;
        let Event::Key(key) = event else {
            debug_log!("read_key() - Ignoring non-key event: {:?}", event);
            return Ok(None);
        };

        match classify_key(&key) {
            KeyAction::Game(input) => {
                self.error_message.clear();
                debug_log!("read_key() - {:?} -> {:?}", key.code, input);
                Ok(Some(input))
            }
            KeyAction::ClearDiagnostics => {
                self.diagnostics.clear();
                Ok(None)
            }
            KeyAction::Ignore => {
                debug_log!("read_key() - Ignoring key: {:?}", key.code);
                Ok(None)
            }
        }
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
