// Web frontend constants: DOM wiring and host-side tuning.

// DOM
pub const CANVAS_ELEMENT_ID: &str = "canvas";
pub const CONTEXT_2D: &str = "2d";

// Surface sizing: backing store follows the window, minus a margin that keeps
// the vertical scrollbar from appearing.
pub const CANVAS_WIDTH_MARGIN_PX: f64 = 20.0;
pub const CANVAS_MIN_SIDE_PX: u32 = 1;

// Diagnostics
pub const FPS_LOG_INTERVAL_SEC: f32 = 5.0;
