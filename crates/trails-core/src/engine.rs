//! Simulation context shared by the input adapter and the frame loop.
//!
//! Holds the single target point every chain chases, the current trail set,
//! the hue oscillator and the random source used to jitter new chains.

use crate::config::{HueConfig, TrailConfig};
use crate::constants::{STROKE_LIGHTNESS_PCT, STROKE_SATURATION_PCT};
use crate::error::ConfigError;
use crate::oscillator::Oscillator;
use crate::surface::{CompositeMode, Hsla, Surface};
use crate::trail::TrailSet;
use glam::DVec2;
use rand::prelude::*;

pub struct Engine {
    config: TrailConfig,
    target: DVec2,
    trails: TrailSet,
    hue: Oscillator,
    rng: StdRng,
}

impl Engine {
    pub fn new(config: TrailConfig, hue: HueConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let hue = Oscillator::hue(&hue, &mut rng);
        log::info!(
            "[engine] trails={} size={} friction={:.3} hue_phase={:.3}",
            config.trails,
            config.size,
            config.friction,
            hue.phase
        );
        Ok(Self {
            config,
            target: DVec2::ZERO,
            trails: TrailSet::empty(),
            hue,
            rng,
        })
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn target(&self) -> DVec2 {
        self.target
    }

    /// Last write wins; chains pick it up on the next tick.
    pub fn set_target(&mut self, target: DVec2) {
        self.target = target;
    }

    pub fn trails(&self) -> &TrailSet {
        &self.trails
    }

    pub fn hue(&self) -> &Oscillator {
        &self.hue
    }

    /// Discard the trail set and rebuild it at rest on the current target.
    pub fn start_session(&mut self) {
        match TrailSet::build(&self.config, self.target, &mut self.rng) {
            Ok(set) => {
                self.trails = set;
                log::info!(
                    "[trails] rebuilt {} chains at ({:.1},{:.1})",
                    self.trails.len(),
                    self.target.x,
                    self.target.y
                );
            }
            Err(e) => log::error!("[trails] rebuild failed: {}", e),
        }
    }

    /// Stroke color for the next frame; steps the hue oscillator.
    pub fn next_stroke(&mut self) -> Hsla {
        Hsla {
            hue: self.hue.advance(),
            saturation_pct: STROKE_SATURATION_PCT,
            lightness_pct: STROKE_LIGHTNESS_PCT,
            alpha: self.config.stroke_alpha,
        }
    }

    /// One simulation + render pass.
    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();
        surface.set_composite(CompositeMode::Lighter);
        let stroke = self.next_stroke();
        surface.set_stroke_style(stroke);
        surface.set_line_width(self.config.line_width);
        self.trails.step(self.target, surface);
    }
}
