//! SVG backend for the trail renderer.
//!
//! Keeps the strokes of the current frame (a `clear` drops them) and writes
//! them as `<path>` elements. Quadratic segments map one-to-one onto SVG `Q`
//! commands, and the additive canvas mode maps onto `plus-lighter` blending.

use glam::DVec2;
use std::fmt::Write as _;
use trails_core::{CompositeMode, Hsla, Surface};

#[derive(Clone, Debug, PartialEq)]
pub struct StrokedPath {
    pub d: String,
    pub color: Hsla,
    pub width: f64,
    pub composite: CompositeMode,
}

pub struct SvgSurface {
    width: u32,
    height: u32,
    composite: CompositeMode,
    color: Hsla,
    line_width: f64,
    path: String,
    paths: Vec<StrokedPath>,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            composite: CompositeMode::SourceOver,
            color: Hsla {
                hue: 0.0,
                saturation_pct: 0,
                lightness_pct: 0,
                alpha: 1.0,
            },
            line_width: 1.0,
            path: String::new(),
            paths: Vec::new(),
        }
    }

    pub fn paths(&self) -> &[StrokedPath] {
        &self.paths
    }

    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        _ = writeln!(out, r#"<rect width="100%" height="100%" fill="black"/>"#);
        _ = writeln!(out, r#"<g fill="none" stroke-linecap="round" style="isolation:isolate">"#);
        for p in &self.paths {
            let blend = match p.composite {
                CompositeMode::Lighter => r#" style="mix-blend-mode:plus-lighter""#,
                CompositeMode::SourceOver => "",
            };
            _ = writeln!(
                out,
                r#"<path d="{}" stroke="{}" stroke-width="{}"{}/>"#,
                p.d.trim_end(),
                p.color,
                p.width,
                blend
            );
        }
        out.push_str("</g>\n</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.paths.clear();
        self.path.clear();
        self.composite = CompositeMode::SourceOver;
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        self.composite = mode;
    }

    fn set_stroke_style(&mut self, color: Hsla) {
        self.color = color;
    }

    fn set_line_width(&mut self, px: f64) {
        self.line_width = px;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: DVec2) {
        _ = write!(self.path, "M{:.2} {:.2} ", p.x, p.y);
    }

    fn quadratic_curve_to(&mut self, control: DVec2, end: DVec2) {
        _ = write!(
            self.path,
            "Q{:.2} {:.2} {:.2} {:.2} ",
            control.x, control.y, end.x, end.y
        );
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.paths.push(StrokedPath {
            d: self.path.clone(),
            color: self.color,
            width: self.line_width,
            composite: self.composite,
        });
    }

    fn close_path(&mut self) {
        // Open trails: canvas closePath after stroke has no visible effect.
    }
}
