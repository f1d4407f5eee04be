use crate::interface::Outcome;
use std::time::{Duration, Instant};

pub const DEFAULT_NOTICE_DELAY: Duration = Duration::from_millis(500);

/// One-shot delayed delivery of a game outcome.
///
/// The final row is drawn before the announcement pops up. Once scheduled the
/// notice cannot be cancelled and is released exactly once.
#[derive(Debug)]
pub struct DeferredNotice {
    delay: Duration,
    pending: Option<(Outcome, Instant)>,
}

impl DeferredNotice {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn schedule(&mut self, outcome: Outcome, now: Instant) {
        debug_assert!(self.pending.is_none(), "outcome scheduled twice");
        self.pending = Some((outcome, now + self.delay));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the notice is due, if one is pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, due)| due.saturating_duration_since(now))
    }

    /// Take the outcome regardless of the delay, e.g. when the session is
    /// about to be torn down.
    pub fn flush(&mut self) -> Option<Outcome> {
        self.pending.take().map(|(outcome, _)| outcome)
    }

    /// Take the outcome if it is due.
    pub fn poll(&mut self, now: Instant) -> Option<Outcome> {
        match &self.pending {
            Some((_, due)) if *due <= now => self.pending.take().map(|(outcome, _)| outcome),
            _ => None,
        }
    }
}
