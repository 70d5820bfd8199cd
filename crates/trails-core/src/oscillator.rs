//! Phase-accumulating sine oscillator.
//!
//! The engine keeps one of these alive for the whole session and reads it once
//! per rendered frame as a hue in degrees. The phase is never wrapped; it only
//! ever reaches the outside world through `sin`.

use crate::config::HueConfig;
use crate::constants::{WAVE_DEFAULT_AMPLITUDE, WAVE_DEFAULT_FREQUENCY};
use rand::Rng;
use std::f64::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct Oscillator {
    pub phase: f64,
    pub offset: f64,
    pub frequency: f64,
    pub amplitude: f64,
}

impl Default for Oscillator {
    fn default() -> Self {
        Self {
            phase: 0.0,
            offset: 0.0,
            frequency: WAVE_DEFAULT_FREQUENCY,
            amplitude: WAVE_DEFAULT_AMPLITUDE,
        }
    }
}

impl Oscillator {
    pub fn new(phase: f64, offset: f64, frequency: f64, amplitude: f64) -> Self {
        Self {
            phase,
            offset,
            frequency,
            amplitude,
        }
    }

    /// Hue driver with a random starting phase in `[0, 2π)`.
    pub fn hue<R: Rng + ?Sized>(config: &HueConfig, rng: &mut R) -> Self {
        Self::new(
            rng.gen::<f64>() * TAU,
            config.offset,
            config.frequency,
            config.amplitude,
        )
    }

    /// Step the phase forward by one `frequency` and return the new value.
    pub fn advance(&mut self) -> f64 {
        self.phase += self.frequency;
        self.sample()
    }

    /// Current value without stepping.
    #[inline]
    pub fn sample(&self) -> f64 {
        self.offset + self.amplitude * self.phase.sin()
    }
}
