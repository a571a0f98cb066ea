mod engine;
mod target;

pub use engine::{CountdownEngine, CountdownState};
pub use target::{now_utc_ms, DeadlineTarget, DEFAULT_OFFSET_MINUTES};
