//! Session dispatcher composing the three engines.
//!
//! The host feeds inputs strictly in arrival order; each `handle` call runs
//! to completion and commits its state before the next input is considered,
//! so the renderer never observes a partial geometry update. The session
//! owns no timers and spawns nothing - the periodic countdown tick is just
//! another input.

use serde::{Deserialize, Serialize};

use crate::countdown::{CountdownEngine, CountdownState, DeadlineTarget};
use crate::events::{Event, RelocationCause};
use crate::gate::{
    AcceptGrowth, Arena, ControlRect, EvasionConfig, EvasionEngine, EvasionState, GrowthConfig,
    PointerKind, PointerSample,
};

/// Session-level tunables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GateConfig {
    pub evasion: EvasionConfig,
    pub growth: GrowthConfig,
    /// When set, touch movement relocates the decline control just like a
    /// touch press (the swipe variant of the gate).
    pub swipe_relocates: bool,
    /// Where the decline control starts, relative to the arena.
    pub initial_decline: EvasionState,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            evasion: EvasionConfig::default(),
            growth: GrowthConfig::default(),
            swipe_relocates: false,
            initial_decline: EvasionState::new(12.0, 70.0),
        }
    }
}

/// One external stimulus, supplied with whatever live geometry it needs.
#[derive(Debug, Clone, Copy)]
pub enum Input {
    /// Periodic countdown tick at the given UTC instant.
    TimerTick { now_utc_ms: i64 },
    /// Continuous pointer or touch movement.
    PointerMove {
        sample: PointerSample,
        arena: Arena,
        control: ControlRect,
    },
    /// Discrete touch press.
    TouchStart {
        sample: PointerSample,
        arena: Arena,
        control: ControlRect,
    },
    /// The arena was re-measured after a resize or orientation change.
    Resized { arena: Arena, control: ControlRect },
    /// A click anywhere on the page; `target_is_accept` says whether it
    /// landed on the accept control.
    Clicked { target_is_accept: bool },
    /// The background-sound toggle was pressed.
    SoundToggled,
    /// Tear the session down.
    Stop,
}

/// The in-process composition of countdown, evasion, and growth.
pub struct GateSession {
    countdown: CountdownEngine,
    evasion: EvasionEngine,
    growth: AcceptGrowth,
    decline: EvasionState,
    swipe_relocates: bool,
}

impl GateSession {
    pub fn new(target: DeadlineTarget, config: GateConfig) -> Self {
        Self {
            countdown: CountdownEngine::new(target),
            evasion: EvasionEngine::new(config.evasion),
            growth: AcceptGrowth::new(config.growth),
            decline: config.initial_decline,
            swipe_relocates: config.swipe_relocates,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn countdown(&self) -> CountdownState {
        self.countdown.state()
    }

    pub fn decline_position(&self) -> EvasionState {
        self.decline
    }

    pub fn accept_scale(&self) -> f64 {
        self.growth.scale()
    }

    pub fn is_stopped(&self) -> bool {
        self.countdown.is_stopped()
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Process one input to completion and return the events it produced.
    pub fn handle(&mut self, input: Input) -> Vec<Event> {
        match input {
            Input::TimerTick { now_utc_ms } => self.countdown.tick_at(now_utc_ms),
            Input::PointerMove {
                sample,
                arena,
                control,
            } => self.on_pointer_move(sample, &arena, control),
            Input::TouchStart {
                sample,
                arena,
                control,
            } => {
                self.decline = self
                    .evasion
                    .on_touch_start(sample, &arena, control, self.decline);
                vec![self.relocated(RelocationCause::Touch)]
            }
            Input::Resized { arena, control } => {
                // Clamp only: a resize must never look like a flee.
                self.decline = self.evasion.clamp_to_bounds(self.decline, &arena, control);
                Vec::new()
            }
            Input::Clicked { target_is_accept } => {
                let before = self.growth.scale();
                let scale = self.growth.on_global_interaction(target_is_accept);
                if scale > before {
                    vec![Event::AcceptScaleChanged { scale }]
                } else {
                    Vec::new()
                }
            }
            Input::SoundToggled => {
                let on = !self.countdown.sound_on();
                vec![self.countdown.set_sound(on)]
            }
            Input::Stop => {
                self.countdown.stop();
                Vec::new()
            }
        }
    }

    fn on_pointer_move(
        &mut self,
        sample: PointerSample,
        arena: &Arena,
        control: ControlRect,
    ) -> Vec<Event> {
        if sample.kind == PointerKind::Touch && self.swipe_relocates {
            if !arena.is_measured() || !arena.contains(sample.x, sample.y) {
                return Vec::new();
            }
            self.decline = self
                .evasion
                .on_touch_start(sample, arena, control, self.decline);
            return vec![self.relocated(RelocationCause::Swipe)];
        }
        match self
            .evasion
            .relocate_if_threatened(sample, arena, control, self.decline)
        {
            Some(next) => {
                self.decline = next;
                vec![self.relocated(RelocationCause::Proximity)]
            }
            None => Vec::new(),
        }
    }

    fn relocated(&self, cause: RelocationCause) -> Event {
        Event::DeclineRelocated {
            x: self.decline.x,
            y: self.decline.y,
            cause,
        }
    }
}
