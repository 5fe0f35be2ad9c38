//! Meeting cost ticker
//!
//! Pure arithmetic behind the live cost display: the caller supplies the
//! clock on every call, so nothing here sleeps or reads the system time.

use anyhow::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::validation::validate_ticker_inputs;

/// Attendee count used when the attendees field is empty
pub const DEFAULT_ATTENDEES: u32 = 5;
/// Hourly rate used when none is configured
pub const DEFAULT_HOURLY_RATE: f64 = 200.0;
/// 40 hours per week, 52 weeks
pub const WORKING_HOURS_PER_YEAR: f64 = 2080.0;

/// Frozen cost figures attached to exported minutes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CostSnapshot {
    pub attendees: u32,
    pub hourly_rate: f64,
    /// Whole seconds elapsed
    pub elapsed_secs: u64,
    /// Total cost rounded to cents
    pub total_cents: u64,
}

impl CostSnapshot {
    /// Check if the tracker produced anything worth exporting
    pub fn is_used(&self) -> bool {
        self.total_cents != 0 || self.elapsed_secs != 0
    }

    pub fn total(&self) -> f64 {
        self.total_cents as f64 / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TickerState {
    Idle,
    Running { since: NaiveDateTime },
    Stopped { elapsed_secs: f64 },
}

/// Live meeting cost calculator
#[derive(Debug, Clone, PartialEq)]
pub struct CostTicker {
    attendees: u32,
    hourly_rate: f64,
    state: TickerState,
}

impl Default for CostTicker {
    fn default() -> Self {
        Self::new(DEFAULT_ATTENDEES, DEFAULT_HOURLY_RATE)
    }
}

impl CostTicker {
    pub fn new(attendees: u32, hourly_rate: f64) -> Self {
        Self {
            attendees,
            hourly_rate,
            state: TickerState::Idle,
        }
    }

    pub fn attendees(&self) -> u32 {
        self.attendees
    }

    pub fn set_attendees(&mut self, attendees: u32) {
        self.attendees = attendees;
    }

    pub fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }

    pub fn set_hourly_rate(&mut self, hourly_rate: f64) {
        self.hourly_rate = hourly_rate;
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TickerState::Running { .. })
    }

    /// Hourly rate extrapolated to a working year
    pub fn annual_rate(&self) -> f64 {
        self.hourly_rate * WORKING_HOURS_PER_YEAR
    }

    /// Start the clock
    ///
    /// The clock starts at `held_at` so a meeting that began earlier is
    /// charged from its start; a missing or future `held_at` starts at `now`.
    /// Starting an already running ticker does nothing.
    pub fn start(&mut self, held_at: Option<NaiveDateTime>, now: NaiveDateTime) -> Result<()> {
        if self.is_running() {
            return Ok(());
        }
        validate_ticker_inputs(self.attendees, self.hourly_rate)?;

        let since = match held_at {
            Some(start) if start <= now => start,
            _ => now,
        };
        tracing::debug!(%since, attendees = self.attendees, rate = self.hourly_rate, "cost ticker started");
        self.state = TickerState::Running { since };
        Ok(())
    }

    /// Freeze the elapsed time
    pub fn stop(&mut self, now: NaiveDateTime) {
        if let TickerState::Running { .. } = self.state {
            let elapsed_secs = self.elapsed_secs(now);
            self.state = TickerState::Stopped { elapsed_secs };
        }
    }

    /// Back to zero
    pub fn reset(&mut self) {
        self.state = TickerState::Idle;
    }

    /// Seconds on the clock, never negative
    pub fn elapsed_secs(&self, now: NaiveDateTime) -> f64 {
        match self.state {
            TickerState::Idle => 0.0,
            TickerState::Running { since } => {
                let millis = (now - since).num_milliseconds() as f64;
                (millis / 1000.0).max(0.0)
            }
            TickerState::Stopped { elapsed_secs } => elapsed_secs,
        }
    }

    pub fn cost(&self, now: NaiveDateTime) -> f64 {
        cost_for(self.attendees, self.hourly_rate, self.elapsed_secs(now))
    }

    pub fn snapshot(&self, now: NaiveDateTime) -> CostSnapshot {
        let elapsed = self.elapsed_secs(now);
        CostSnapshot {
            attendees: self.attendees,
            hourly_rate: self.hourly_rate,
            elapsed_secs: elapsed.floor() as u64,
            total_cents: to_cents(cost_for(self.attendees, self.hourly_rate, elapsed)),
        }
    }
}

/// Cost of `elapsed_secs` for `attendees` people at `hourly_rate` each
pub fn cost_for(attendees: u32, hourly_rate: f64, elapsed_secs: f64) -> f64 {
    hourly_rate * attendees as f64 * elapsed_secs.max(0.0) / 3600.0
}

/// Round a currency amount to whole cents
pub fn to_cents(amount: f64) -> u64 {
    (amount.max(0.0) * 100.0).round() as u64
}

/// Count attendees in free text
///
/// One name per line; when everything is on a single line it is split on
/// commas, then semicolons, then " and ". Blank text yields `fallback`.
/// The result is never below 1.
pub fn count_attendees(text: &str, fallback: u32) -> u32 {
    let text = text.trim();
    if text.is_empty() {
        return fallback;
    }

    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    let count = if lines.len() == 1 {
        let line = lines[0];
        let separator = [",", ";", " and "]
            .into_iter()
            .find(|sep| line.contains(sep));
        match separator {
            Some(sep) => line.split(sep).filter(|item| !item.trim().is_empty()).count(),
            None => 1,
        }
    } else {
        lines.len()
    };

    count.max(1) as u32
}
