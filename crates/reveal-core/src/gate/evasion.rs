//! Evasive-target engine: the decline control that refuses to be caught.
//!
//! Given fresh arena/control geometry and a pointer sample, decides whether
//! the control must flee and where to. The anti-capture rule sends it to the
//! quadrant diagonally opposite the pointer, so chasing it from one side
//! always pushes it to the other; bounded jitter keeps the bounce pattern
//! from being learnable. Every position this module ever produces lies
//! inside the arena minus padding.
//!
//! Each call is atomic: read geometry, decide, return. No state spans calls
//! beyond the RNG stream.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use super::geometry::{Arena, ControlRect, EvasionState, PointerSample};

/// Tunables for the evasion behavior.
///
/// The numeric defaults are small relative to any sensible arena and are not
/// load-bearing beyond that.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EvasionConfig {
    /// Pointer-to-control-center distance below which a relocation is forced.
    pub trigger_radius: f64,
    /// Full width of the uniform jitter applied to the anchor X.
    pub jitter_span_x: f64,
    /// Full width of the uniform jitter applied to the anchor Y.
    pub jitter_span_y: f64,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for EvasionConfig {
    fn default() -> Self {
        Self {
            trigger_radius: 90.0,
            jitter_span_x: 40.0,
            jitter_span_y: 30.0,
            seed: None,
        }
    }
}

/// Relocation engine for the decline control.
#[derive(Debug, Clone)]
pub struct EvasionEngine {
    config: EvasionConfig,
    rng: Mcg128Xsl64,
}

impl EvasionEngine {
    pub fn new(config: EvasionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &EvasionConfig {
        &self.config
    }

    /// React to a continuous pointer sample. Returns a new position when the
    /// pointer is inside the arena and within the trigger radius of the
    /// control's center; `None` means no change. Unmeasured geometry and
    /// samples outside the arena are ignored.
    pub fn relocate_if_threatened(
        &mut self,
        pointer: PointerSample,
        arena: &Arena,
        control: ControlRect,
        current: EvasionState,
    ) -> Option<EvasionState> {
        if !arena.is_measured() || !arena.contains(pointer.x, pointer.y) {
            return None;
        }
        let (cx, cy) = current.center_in_page(arena, control);
        let dist = ((pointer.x - cx).powi(2) + (pointer.y - cy).powi(2)).sqrt();
        if dist >= self.config.trigger_radius {
            return None;
        }
        Some(self.flee_from(pointer, arena, control))
    }

    /// React to a discrete touch press: relocate unconditionally, since
    /// touch has no hover phase to base a proximity check on. Unmeasured
    /// geometry leaves the position unchanged.
    pub fn on_touch_start(
        &mut self,
        touch: PointerSample,
        arena: &Arena,
        control: ControlRect,
        current: EvasionState,
    ) -> EvasionState {
        if !arena.is_measured() {
            return current;
        }
        self.flee_from(touch, arena, control)
    }

    /// Re-legalize an existing position after an arena resize. Pure clamp:
    /// the control must not visibly escape merely because the window
    /// resized, so no flee or jitter is involved.
    pub fn clamp_to_bounds(
        &self,
        state: EvasionState,
        arena: &Arena,
        control: ControlRect,
    ) -> EvasionState {
        if !arena.is_measured() {
            return state;
        }
        arena.bounds_for(control).clamp(state.x, state.y)
    }

    /// Pick a position far from the approaching pointer: anchor to the
    /// quadrant diagonally opposite the pointer's arena half, jitter, then
    /// clamp back into the legal range.
    fn flee_from(&mut self, pointer: PointerSample, arena: &Arena, control: ControlRect) -> EvasionState {
        let bounds = arena.bounds_for(control);

        // Pointer relative to the arena's top-left corner.
        let px = pointer.x - arena.x;
        let py = pointer.y - arena.y;

        let target_x = if px < arena.width / 2.0 {
            bounds.max_x
        } else {
            bounds.padding
        };
        let target_y = if py < arena.height / 2.0 {
            bounds.max_y
        } else {
            bounds.padding
        };

        let jitter_x = (self.rng.gen::<f64>() - 0.5) * self.config.jitter_span_x;
        let jitter_y = (self.rng.gen::<f64>() - 0.5) * self.config.jitter_span_y;

        bounds.clamp(target_x + jitter_x, target_y + jitter_y)
    }
}

impl Default for EvasionEngine {
    fn default() -> Self {
        Self::new(EvasionConfig::default())
    }
}
