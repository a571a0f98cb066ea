//! Geometry snapshots supplied by the host renderer.
//!
//! The engine never measures layout. The host hands over a fresh [`Arena`]
//! and [`ControlRect`] on every call, so a resize can never leave the engine
//! acting on stale rectangles. Pointer samples are in page coordinates (the
//! same space as `Arena.x`/`Arena.y`); decline-control positions are offsets
//! from the arena's top-left corner.

use serde::{Deserialize, Serialize};

/// The bounded region the decline control may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Minimum inset from any arena edge.
    pub padding: f64,
}

impl Arena {
    /// Whether the host has actually measured this rectangle yet. An
    /// unmeasured or degenerate arena makes every gate operation a no-op.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Whether a page-coordinate point falls inside the arena (edges
    /// inclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    /// Legal top-left range for a control of the given size. When the arena
    /// is smaller than the control plus two paddings, the range collapses to
    /// the single point `(padding, padding)`.
    pub(crate) fn bounds_for(&self, control: ControlRect) -> Bounds {
        Bounds {
            padding: self.padding,
            max_x: self.padding.max(self.width - control.width - self.padding),
            max_y: self.padding.max(self.height - control.height - self.padding),
        }
    }
}

/// Size of the decline control, measured live by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlRect {
    pub width: f64,
    pub height: f64,
}

/// Where a pointer sample came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    /// Continuous pointer movement (mouse hover).
    Move,
    /// Discrete touch press; there is no hover phase to anticipate.
    Touch,
}

/// One pointer/touch coordinate in page space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub kind: PointerKind,
}

/// Current decline-control position, relative to the arena's top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvasionState {
    pub x: f64,
    pub y: f64,
}

impl EvasionState {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Center of the control's bounding box, in page coordinates.
    pub(crate) fn center_in_page(&self, arena: &Arena, control: ControlRect) -> (f64, f64) {
        (
            arena.x + self.x + control.width / 2.0,
            arena.y + self.y + control.height / 2.0,
        )
    }
}

/// Legal position range, recomputed from live measurements at call time.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bounds {
    pub padding: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub(crate) fn clamp(&self, x: f64, y: f64) -> EvasionState {
        EvasionState {
            x: clamp(x, self.padding, self.max_x),
            y: clamp(y, self.padding, self.max_y),
        }
    }
}

fn clamp(v: f64, min: f64, max: f64) -> f64 {
    v.max(min).min(max)
}
