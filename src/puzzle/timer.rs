//! Elapsed-time tracking for Timed mode.
//!
//! The timer never schedules anything itself; the host loop calls
//! [`GameTimer::poll`] and gets a formatted reading back whenever the
//! displayed second changes. Time is passed in as `Instant` arguments so
//! tests can drive the clock.

use std::time::Instant;

/// Format whole seconds as zero-padded `MM:SS`. Minutes are not capped.
pub fn format_elapsed(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// A cancelable once-per-second tick source.
#[derive(Debug, Clone, Default)]
pub struct GameTimer {
    started_at: Option<Instant>,
    /// Whole seconds of the last reading handed out by `poll`.
    last_reported: Option<u64>,
}

impl GameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start measuring from `now`. Always stops any previous run first, so
    /// rapid restarts can never leave a stale baseline behind.
    pub fn start(&mut self, now: Instant) {
        self.stop();
        self.started_at = Some(now);
    }

    /// Stop the timer. Idempotent; `poll` emits nothing afterwards.
    pub fn stop(&mut self) {
        self.started_at = None;
        self.last_reported = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Whole seconds elapsed since start, or `None` when stopped.
    pub fn elapsed_seconds(&self, now: Instant) -> Option<u64> {
        self.started_at
            .map(|start| now.saturating_duration_since(start).as_secs())
    }

    /// A fresh `MM:SS` reading, only when the displayed second has changed
    /// since the last poll. The first poll after `start` reports `00:00`.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let seconds = self.elapsed_seconds(now)?;
        if self.last_reported == Some(seconds) {
            return None;
        }
        self.last_reported = Some(seconds);
        Some(format_elapsed(seconds))
    }

    /// Current reading without tick bookkeeping; `00:00` while stopped.
    pub fn display(&self, now: Instant) -> String {
        format_elapsed(self.elapsed_seconds(now).unwrap_or(0))
    }
}
