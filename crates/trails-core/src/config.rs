use crate::constants::*;
use crate::error::ConfigError;

/// Physics and layout parameters for a trail set.
///
/// Every field has a default in [`crate::constants`]; frontends override
/// individual fields with struct update syntax.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailConfig {
    /// Base friction; each chain jitters around it.
    pub friction: f64,
    /// Number of chains in the set.
    pub trails: usize,
    /// Nodes per chain.
    pub size: usize,
    /// Fraction of the predecessor's velocity added to each follower.
    pub dampening: f64,
    /// Multiplicative spring decay per node along a chain.
    pub tension: f64,
    /// Spring base of the first chain.
    pub spring_base: f64,
    /// Spring increase spread linearly across the set.
    pub spring_spread: f64,
    pub spring_jitter: f64,
    pub friction_jitter: f64,
    pub line_width: f64,
    pub stroke_alpha: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            friction: FRICTION,
            trails: TRAILS,
            size: NODES_PER_CHAIN,
            dampening: DAMPENING,
            tension: TENSION,
            spring_base: SPRING_BASE,
            spring_spread: SPRING_SPREAD,
            spring_jitter: SPRING_JITTER,
            friction_jitter: FRICTION_JITTER,
            line_width: LINE_WIDTH,
            stroke_alpha: STROKE_ALPHA,
        }
    }
}

impl TrailConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_NODES_PER_CHAIN {
            return Err(ConfigError::TooFewNodes {
                got: self.size,
                min: MIN_NODES_PER_CHAIN,
            });
        }
        Ok(())
    }

    /// Spring base for chain `index`, rising linearly across the set.
    #[inline]
    pub fn spring_for(&self, index: usize) -> f64 {
        self.spring_base + (index as f64 / self.trails.max(1) as f64) * self.spring_spread
    }
}

/// Settings for the hue oscillator. The phase is chosen at engine start.
#[derive(Clone, Debug, PartialEq)]
pub struct HueConfig {
    pub offset: f64,
    pub amplitude: f64,
    pub frequency: f64,
}

impl Default for HueConfig {
    fn default() -> Self {
        Self {
            offset: HUE_OFFSET,
            amplitude: HUE_AMPLITUDE,
            frequency: HUE_FREQUENCY,
        }
    }
}
