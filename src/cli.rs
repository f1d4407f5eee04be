use crate::engine::Verdict;
use crate::error::AppError;
use crate::game_loop::LoopConfig;
use crate::game_state::{Board, MAX_GUESSES};
use crate::interface::{GameInterface, KeyInput, Outcome, Severity};
use crate::logging::{default_log_path, fallback_log_path};
use crate::word::{WORD_LENGTH, Word};
use crate::wordbank::{
    EMBEDDED_WORDBANK, SecretSource, load_wordbank_from_file, load_wordbank_from_str,
};
use clap::Parser;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Play Wordle in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Secret word to play against (five letters)
    #[arg(short = 'w', long = "word", conflicts_with = "wordbank_path")]
    pub word: Option<String>,

    /// Path to a newline-delimited wordbank file to draw secrets from
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Use the line-based interface instead of the full-screen one
    #[arg(long)]
    pub plain: bool,

    /// Milliseconds between the last row being scored and the win/loss announcement
    #[arg(long = "notice-delay-ms", default_value_t = 500)]
    pub notice_delay_ms: u64,

    /// Show the secret word in diagnostics when a game starts
    #[arg(long)]
    pub reveal: bool,

    /// Print diagnostics in plain mode
    #[arg(short, long)]
    pub verbose: bool,

    /// Append logs to this file instead of the default location
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

impl Cli {
    pub fn secret_source(&self) -> Result<SecretSource, AppError> {
        if let Some(word) = &self.word {
            let secret = Word::parse(word).map_err(|source| AppError::InvalidSecret {
                word: word.clone(),
                source,
            })?;
            return Ok(SecretSource::Fixed(secret));
        }
        let words = match &self.wordbank_path {
            Some(path) => load_wordbank_from_file(path)?,
            None => load_wordbank_from_str(EMBEDDED_WORDBANK),
        };
        SecretSource::random(words)
    }

    pub fn loop_config(&self) -> LoopConfig {
        LoopConfig {
            notice_delay: Duration::from_millis(self.notice_delay_ms),
            reveal_secret: self.reveal,
        }
    }

    /// Log destination; `None` means stderr. The full-screen interface
    /// owns the terminal, so it always gets a file.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.resolve_log_path(default_log_path())
    }

    fn resolve_log_path(&self, default: Option<PathBuf>) -> Option<PathBuf> {
        match (self.log_file.clone().or(default), self.plain) {
            (Some(path), _) => Some(path),
            (None, true) => None,
            (None, false) => Some(fallback_log_path()),
        }
    }
}

const QUIT_COMMAND: &str = ":quit";
const NEW_GAME_COMMAND: &str = ":new";
const DELETE_KEY: char = '-';

/// Turn one input line into key presses. Letters type, `-` deletes, other
/// characters are dropped, and the end of the line submits.
pub fn parse_line(line: &str) -> Vec<KeyInput> {
    match line.trim() {
        QUIT_COMMAND => vec![KeyInput::Quit],
        NEW_GAME_COMMAND => vec![KeyInput::NewGame],
        keys => keys
            .chars()
            .filter_map(|c| {
                if c == DELETE_KEY {
                    Some(KeyInput::Delete)
                } else {
                    KeyInput::from_char(c)
                }
            })
            .chain(std::iter::once(KeyInput::Submit))
            .collect(),
    }
}

/// Plain-text interface over any reader and writer.
///
/// Scored rows are printed as the guess followed by its G/Y/X feedback.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    pending: VecDeque<KeyInput>,
    board: Board,
    show_diagnostics: bool,
    write_error: Option<io::Error>,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
            board: Board::new(),
            show_diagnostics: false,
            write_error: None,
        }
    }

    #[must_use]
    pub fn with_diagnostics(mut self, show: bool) -> Self {
        self.show_diagnostics = show;
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn say(&mut self, text: &str) {
        if self.write_error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.writer, "{text}") {
            self.write_error = Some(e);
        }
    }

    fn print_row(&mut self, row: usize) {
        let tiles = self.board.row(row);
        let letters: String = tiles.iter().map(|t| t.letter.unwrap_or('?')).collect();
        let marks: String = tiles
            .iter()
            .map(|t| t.verdict.map_or('?', Verdict::symbol))
            .collect();
        self.say(&format!("{}/{MAX_GUESSES}  {letters}  {marks}", row + 1));
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn render_letter(&mut self, row: usize, column: usize, letter: char) {
        self.board.tile_mut(row, column).letter = Some(letter);
    }

    fn render_verdict(&mut self, row: usize, column: usize, verdict: Verdict) {
        self.board.tile_mut(row, column).verdict = Some(verdict);
        if column == WORD_LENGTH - 1 {
            self.print_row(row);
        }
    }

    fn clear_tile(&mut self, row: usize, column: usize) {
        self.board.tile_mut(row, column).clear();
    }

    fn reset(&mut self) {
        self.board = Board::new();
        self.pending.clear();
        self.say(&format!(
            "New game: type a {WORD_LENGTH} letter guess and press Enter ('-' deletes, {NEW_GAME_COMMAND} restarts, {QUIT_COMMAND} exits)"
        ));
    }

    fn show_message(&mut self, message: &str) {
        self.say(message);
    }

    fn notify(&mut self, outcome: &Outcome) {
        self.say(&outcome.announcement());
    }

    fn diagnostic(&mut self, severity: Severity, message: &str) {
        if self.show_diagnostics {
            self.say(&format!("[{}] {message}", severity.label()));
        }
    }

    fn read_key(&mut self, timeout: Option<Duration>) -> io::Result<Option<KeyInput>> {
        if let Some(e) = self.write_error.take() {
            return Err(e);
        }
        // Lines can't be polled, so a pending deadline is simply waited out
        if let Some(timeout) = timeout {
            if !timeout.is_zero() {
                thread::sleep(timeout);
            }
            return Ok(None);
        }
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(Some(KeyInput::Quit));
            }
            self.pending.extend(parse_line(&line));
        }
        Ok(self.pending.pop_front())
    }
}
