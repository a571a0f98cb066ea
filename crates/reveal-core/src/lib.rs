//! # Reveal Core Library
//!
//! Core logic for a gated celebration sequence: a timezone-fixed deadline
//! countdown and an evasive "decline" control that flees the pointer while
//! the "accept" control grows on every miss. Rendering, assets, and audio
//! playback live in the host; this crate only computes state and emits
//! typed events the host consumes.
//!
//! ## Architecture
//!
//! - **Countdown Engine**: wall-clock driven; the caller invokes `tick()`
//!   about once per second and remaining time is recomputed from absolute
//!   instants on every call
//! - **Gate Engines**: the evasive-target relocation algorithm and the
//!   accept-growth rule, both operating on geometry the host supplies
//!   fresh per call
//! - **Session**: a dispatcher that owns all three and processes inputs
//!   strictly in arrival order
//!
//! ## Key Components
//!
//! - [`CountdownEngine`]: deadline countdown state machine
//! - [`EvasionEngine`]: anti-capture relocation for the decline control
//! - [`AcceptGrowth`]: saturating scale rule for the accept control
//! - [`GateSession`]: event-ordered composition of the above

pub mod countdown;
pub mod error;
pub mod events;
pub mod gate;
pub mod session;

pub use countdown::{CountdownEngine, CountdownState, DeadlineTarget, DEFAULT_OFFSET_MINUTES};
pub use error::{CoreError, Result};
pub use events::{Event, RelocationCause};
pub use gate::{
    AcceptGrowth, Arena, ControlRect, EvasionConfig, EvasionEngine, EvasionState, GrowthConfig,
    PointerKind, PointerSample,
};
pub use session::{GateConfig, GateSession, Input};
