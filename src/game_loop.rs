use crate::controller::{Session, Step, report};
use crate::interface::{GameInterface, KeyInput, Outcome, Severity};
use crate::notice::{DEFAULT_NOTICE_DELAY, DeferredNotice};
use crate::wordbank::SecretSource;
use crate::{debug_log, info_log};
use std::io;
use std::time::{Duration, Instant};

/// Knobs for [`game_loop`].
#[derive(Clone, Debug)]
pub struct LoopConfig {
    /// Pause between the final row being scored and the outcome announcement.
    pub notice_delay: Duration,
    /// Trace the secret word in diagnostics when a game starts.
    pub reveal_secret: bool,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            notice_delay: DEFAULT_NOTICE_DELAY,
            reveal_secret: false,
        }
    }
}

/// Play games until the interface asks to quit.
///
/// Returns the outcome of every game that finished, in order.
pub fn game_loop<I: GameInterface + ?Sized>(
    source: &SecretSource,
    ui: &mut I,
    config: &LoopConfig,
) -> io::Result<Vec<Outcome>> {
    let mut session = start_game(source, ui, config);
    let mut notice = DeferredNotice::new(config.notice_delay);
    let mut outcomes = Vec::new();

    loop {
        if let Some(outcome) = notice.poll(Instant::now()) {
            info_log!("game_loop() - announcing outcome: {}", outcome);
            ui.notify(&outcome);
        }

        let timeout = notice.remaining(Instant::now());
        let Some(key) = ui.read_key(timeout)? else {
            continue;
        };

        match key {
            KeyInput::Quit => {
                if let Some(outcome) = notice.flush() {
                    ui.notify(&outcome);
                }
                info_log!("game_loop() - quit after {} finished games", outcomes.len());
                return Ok(outcomes);
            }
            KeyInput::NewGame => {
                if let Some(outcome) = notice.flush() {
                    ui.notify(&outcome);
                }
                session = start_game(source, ui, config);
            }
            key => match session.handle_key(key, ui) {
                Ok(Step::Scored {
                    outcome: Some(outcome),
                    ..
                }) => {
                    outcomes.push(outcome.clone());
                    notice.schedule(outcome, Instant::now());
                }
                Ok(_) => {}
                Err(e) => {
                    debug_log!("game_loop() - rejected {:?}: {}", key, e);
                }
            },
        }
    }
}

fn start_game<I: GameInterface + ?Sized>(
    source: &SecretSource,
    ui: &mut I,
    config: &LoopConfig,
) -> Session {
    let secret = source.next_secret();
    ui.reset();
    report(ui, Severity::Success, "Game initialized successfully!");
    if config.reveal_secret {
        report(ui, Severity::Info, &format!("Target word: {secret}"));
    }
    report(
        ui,
        Severity::Info,
        "Type letters, press Backspace to delete, Enter to submit",
    );
    Session::new(secret)
}
