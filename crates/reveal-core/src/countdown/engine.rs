//! Countdown engine implementation.
//!
//! The engine is wall-clock driven and has no internal threads - the caller
//! invokes `tick()` about once per second. Every tick recomputes the
//! remaining time from absolute instants rather than decrementing a counter,
//! so drift, coalesced timers, or a suspended host never corrupt the
//! display; each tick simply lands on the truth.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = CountdownEngine::new(target);
//! let first = engine.start(); // immediate evaluation, never a blank paint
//! // About once per second:
//! for event in engine.tick() { /* render */ }
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::target::{now_utc_ms, DeadlineTarget};
use crate::events::Event;

/// Seconds remaining at or below which the per-second audible cue fires.
const CUE_THRESHOLD_SECS: u64 = 10;

/// Derived countdown snapshot, recomputed on every tick.
///
/// Consumers must treat it as read-only. `is_complete` transitions
/// false -> true exactly once and never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownState {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub remaining_ms: u64,
    pub is_complete: bool,
}

impl CountdownState {
    /// The terminal state: 00:00:00, complete.
    pub fn completed() -> Self {
        Self {
            hours: 0,
            minutes: 0,
            seconds: 0,
            remaining_ms: 0,
            is_complete: true,
        }
    }

    /// Decompose a positive remaining span into H:M:S fields.
    fn from_remaining_ms(remaining_ms: u64) -> Self {
        let total_seconds = remaining_ms / 1000;
        Self {
            hours: total_seconds / 3600,
            minutes: (total_seconds % 3600) / 60,
            seconds: total_seconds % 60,
            remaining_ms,
            is_complete: false,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

/// Core countdown engine.
///
/// Operates on absolute epoch instants -- no internal thread. The caller is
/// responsible for calling `tick()` periodically; correctness never depends
/// on tick regularity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownEngine {
    target: DeadlineTarget,
    state: CountdownState,
    /// Completion already signalled; later ticks stay silent about it.
    completed_fired: bool,
    /// Session torn down; all further events are suppressed.
    stopped: bool,
    /// Background-sound toggle. Gates the final-second cue.
    sound_on: bool,
    /// Last second for which a cue fired, so a cue is an event per second,
    /// not a replay per render.
    last_cue_second: Option<u64>,
}

impl CountdownEngine {
    pub fn new(target: DeadlineTarget) -> Self {
        Self {
            target,
            state: CountdownState::from_remaining_ms(0),
            completed_fired: false,
            stopped: false,
            sound_on: false,
            last_cue_second: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn target(&self) -> &DeadlineTarget {
        &self.target
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn sound_on(&self) -> bool {
        self.sound_on
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Evaluate once immediately, so the first paint is real data rather
    /// than a placeholder while waiting for the first tick boundary.
    pub fn start(&mut self) -> Vec<Event> {
        self.tick_at(now_utc_ms())
    }

    /// Toggle the background-sound flag. The final-second cue only fires
    /// while sound is on.
    pub fn set_sound(&mut self, on: bool) -> Event {
        self.sound_on = on;
        Event::SoundToggled { on }
    }

    /// Cancel the session. Idempotent: safe after natural completion, safe
    /// to call repeatedly, safe from within event handling. No events are
    /// emitted after this, including a pending completion.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Tick against the system clock.
    pub fn tick(&mut self) -> Vec<Event> {
        self.tick_at(now_utc_ms())
    }

    /// Recompute the countdown as of `now_utc_ms` (milliseconds since the
    /// UTC epoch) and emit whatever that instant implies: a tick snapshot,
    /// at most one audible cue, and the completion signal exactly once.
    pub fn tick_at(&mut self, now_utc_ms: i64) -> Vec<Event> {
        if self.stopped {
            return Vec::new();
        }

        let at = datetime_at(now_utc_ms);
        let diff_ms = self.target.epoch_ms() - now_utc_ms;
        let mut events = Vec::new();

        if diff_ms <= 0 {
            self.state = CountdownState::completed();
            events.push(self.tick_event(at));
            if !self.completed_fired {
                self.completed_fired = true;
                events.push(Event::CountdownCompleted { at });
            }
            return events;
        }

        self.state = CountdownState::from_remaining_ms(diff_ms as u64);
        events.push(self.tick_event(at));

        let total = self.state.total_seconds();
        if self.sound_on
            && (1..=CUE_THRESHOLD_SECS).contains(&total)
            && self.last_cue_second != Some(total)
        {
            self.last_cue_second = Some(total);
            events.push(Event::FinalSecondCue {
                seconds_left: total,
                at,
            });
        }
        events
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn tick_event(&self, at: DateTime<Utc>) -> Event {
        Event::CountdownTick {
            hours: self.state.hours,
            minutes: self.state.minutes,
            seconds: self.state.seconds,
            remaining_ms: self.state.remaining_ms,
            at,
        }
    }
}

fn datetime_at(epoch_ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(epoch_ms)
        .single()
        .unwrap_or_else(Utc::now)
}
