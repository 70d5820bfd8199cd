use glam::DVec2;
use trails_core::{CompositeMode, Hsla, Surface};
use web_sys as web;

/// Canvas 2D backend for the trail renderer.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    fn composite(&self, mode: CompositeMode) {
        if let Err(e) = self.ctx.set_global_composite_operation(mode.as_str()) {
            log::warn!("[canvas] composite {} rejected: {:?}", mode.as_str(), e);
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.composite(CompositeMode::SourceOver);
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        self.composite(mode);
    }

    fn set_stroke_style(&mut self, color: Hsla) {
        self.ctx.set_stroke_style_str(&color.to_string());
    }

    fn set_line_width(&mut self, px: f64) {
        self.ctx.set_line_width(px);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: DVec2) {
        self.ctx.move_to(p.x, p.y);
    }

    fn quadratic_curve_to(&mut self, control: DVec2, end: DVec2) {
        self.ctx
            .quadratic_curve_to(control.x, control.y, end.x, end.y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }
}
