use glam::DVec2;
use std::f64::consts::TAU;

/// Scripted pointer path standing in for a user's mouse: a Lissajous figure
/// inscribed in the surface.
#[derive(Clone, Debug)]
pub struct PointerScript {
    center: DVec2,
    radius: DVec2,
    /// Frames per full sweep of the x axis.
    period: f64,
}

impl PointerScript {
    pub fn new(width: u32, height: u32, period: f64) -> Self {
        let size = DVec2::new(width as f64, height as f64);
        Self {
            center: size * 0.5,
            radius: size * 0.35,
            period: period.max(1.0),
        }
    }

    pub fn at(&self, frame: u64) -> DVec2 {
        let t = frame as f64 / self.period * TAU;
        self.center + self.radius * DVec2::new(t.sin(), (2.0 * t).sin())
    }
}
