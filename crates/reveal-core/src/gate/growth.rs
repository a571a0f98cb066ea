//! Accept-control growth rule.
//!
//! Every interaction that misses the accept control nudges its scale up by a
//! fixed increment, saturating at an upper bound. Selecting the accept
//! control is the terminal successful action and never changes the scale.
//! The scale never decreases within a session.

use serde::{Deserialize, Serialize};

/// Tunables for the growth rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// Scale added per missed interaction.
    pub increment: f64,
    /// Saturation bound; repeated misses converge here and stay.
    pub max_scale: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            increment: 0.08,
            max_scale: 1.9,
        }
    }
}

/// Monotone scale accumulator for the accept control.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AcceptGrowth {
    scale: f64,
    config: GrowthConfig,
}

impl AcceptGrowth {
    pub fn new(config: GrowthConfig) -> Self {
        Self { scale: 1.0, config }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Apply one interaction. A hit on the accept control leaves the scale
    /// untouched; anything else grows it toward the bound. Returns the
    /// resulting scale either way.
    pub fn on_global_interaction(&mut self, target_is_accept: bool) -> f64 {
        if !target_is_accept {
            self.scale = self.config.max_scale.min(self.scale + self.config.increment);
        }
        self.scale
    }
}

impl Default for AcceptGrowth {
    fn default() -> Self {
        Self::new(GrowthConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn misses_grow_and_saturate() {
        let mut growth = AcceptGrowth::default();
        for _ in 0..20 {
            growth.on_global_interaction(false);
        }
        assert_eq!(growth.scale(), 1.9);
        // Saturated: one more miss changes nothing.
        assert_eq!(growth.on_global_interaction(false), 1.9);
    }

    #[test]
    fn accept_hit_never_changes_scale() {
        let mut growth = AcceptGrowth::default();
        growth.on_global_interaction(false);
        let before = growth.scale();
        assert_eq!(growth.on_global_interaction(true), before);
    }

    #[test]
    fn scale_is_monotone() {
        let mut growth = AcceptGrowth::default();
        let mut last = growth.scale();
        for _ in 0..30 {
            let next = growth.on_global_interaction(false);
            assert!(next >= last);
            assert!(next <= 1.9);
            last = next;
        }
    }
}
