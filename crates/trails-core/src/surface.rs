//! Drawing boundary between the simulation and a host renderer.
//!
//! The trait mirrors the handful of canvas-2D calls the trails need. The web
//! frontend forwards them to `CanvasRenderingContext2d`; the native frontend
//! and the tests use [`RecordingSurface`].

use glam::DVec2;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositeMode {
    SourceOver,
    /// Additive blending; overlapping low-alpha strokes brighten.
    Lighter,
}

impl CompositeMode {
    /// Name as understood by `globalCompositeOperation`.
    pub fn as_str(self) -> &'static str {
        match self {
            CompositeMode::SourceOver => "source-over",
            CompositeMode::Lighter => "lighter",
        }
    }
}

/// HSLA stroke color. The hue is carried as-is; the color model wraps it.
/// Formatting rounds the hue with halves toward +inf, like `Math.round`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation_pct: u8,
    pub lightness_pct: u8,
    pub alpha: f64,
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({},{}%,{}%,{})",
            (self.hue + 0.5).floor(),
            self.saturation_pct,
            self.lightness_pct,
            self.alpha
        )
    }
}

pub trait Surface {
    fn clear(&mut self);
    fn set_composite(&mut self, mode: CompositeMode);
    fn set_stroke_style(&mut self, color: Hsla);
    fn set_line_width(&mut self, px: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: DVec2);
    fn quadratic_curve_to(&mut self, control: DVec2, end: DVec2);
    fn stroke(&mut self);
    fn close_path(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Composite(CompositeMode),
    StrokeStyle(Hsla),
    LineWidth(f64),
    BeginPath,
    MoveTo(DVec2),
    QuadraticCurveTo { control: DVec2, end: DVec2 },
    Stroke,
    ClosePath,
}

/// Surface that keeps every call since the last `clear`.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        // Only the current frame is kept, like a cleared canvas.
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }
    fn set_composite(&mut self, mode: CompositeMode) {
        self.commands.push(DrawCommand::Composite(mode));
    }
    fn set_stroke_style(&mut self, color: Hsla) {
        self.commands.push(DrawCommand::StrokeStyle(color));
    }
    fn set_line_width(&mut self, px: f64) {
        self.commands.push(DrawCommand::LineWidth(px));
    }
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }
    fn move_to(&mut self, p: DVec2) {
        self.commands.push(DrawCommand::MoveTo(p));
    }
    fn quadratic_curve_to(&mut self, control: DVec2, end: DVec2) {
        self.commands
            .push(DrawCommand::QuadraticCurveTo { control, end });
    }
    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }
}
