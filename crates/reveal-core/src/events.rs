//! Events emitted by the engines.
//!
//! Every observable state change produces an `Event`. The host renderer
//! consumes them to drive animation and audio; the CLI prints them as JSON
//! lines. The engines themselves never render or play anything.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What forced the decline control to relocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelocationCause {
    /// Pointer came within the trigger radius of the control's center.
    Proximity,
    /// Discrete touch press inside the arena (no hover phase to anticipate).
    Touch,
    /// Touch movement, when swipe relocation is enabled.
    Swipe,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// One countdown re-evaluation. Emitted on every tick while running.
    CountdownTick {
        hours: u64,
        minutes: u64,
        seconds: u64,
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    /// Discrete audible-cue signal, once per distinct second in the final
    /// ten seconds. Distinct from the tick so the host can play a sound
    /// without re-implementing the threshold check.
    FinalSecondCue {
        seconds_left: u64,
        at: DateTime<Utc>,
    },
    /// The deadline passed. Fired exactly once per session.
    CountdownCompleted {
        at: DateTime<Utc>,
    },
    /// The decline control moved to a new position.
    DeclineRelocated {
        x: f64,
        y: f64,
        cause: RelocationCause,
    },
    /// The accept control's scale grew after a missed interaction.
    AcceptScaleChanged {
        scale: f64,
    },
    /// The background-sound toggle flipped.
    SoundToggled {
        on: bool,
    },
}
