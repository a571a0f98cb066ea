mod evasion;
mod geometry;
mod growth;

pub use evasion::{EvasionConfig, EvasionEngine};
pub use geometry::{Arena, ControlRect, EvasionState, PointerKind, PointerSample};
pub use growth::{AcceptGrowth, GrowthConfig};
