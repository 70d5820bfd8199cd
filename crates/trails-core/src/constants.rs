// Shared simulation/visual tuning constants used by both web and native frontends.

// Chain physics
pub const FRICTION: f64 = 0.5; // per-tick velocity multiplier
pub const DAMPENING: f64 = 0.025; // share of the predecessor's velocity passed down the chain
pub const TENSION: f64 = 0.99; // per-node spring decay along a chain

// Trail bundle layout
pub const TRAILS: usize = 80; // chains per trail set
pub const NODES_PER_CHAIN: usize = 50;
pub const MIN_NODES_PER_CHAIN: usize = 2; // curve drawing needs a head and a tail

// Stiffness gradient across the bundle: base + i/trails * spread
pub const SPRING_BASE: f64 = 0.45;
pub const SPRING_SPREAD: f64 = 0.025;

// Per-chain jitter half-widths
pub const SPRING_JITTER: f64 = 0.05;
pub const FRICTION_JITTER: f64 = 0.005;

// Stroke
pub const LINE_WIDTH: f64 = 10.0;
pub const STROKE_ALPHA: f64 = 0.025;
pub const STROKE_SATURATION_PCT: u8 = 100;
pub const STROKE_LIGHTNESS_PCT: u8 = 50;

// Hue oscillator (degrees)
pub const HUE_OFFSET: f64 = 285.0;
pub const HUE_AMPLITUDE: f64 = 85.0;
pub const HUE_FREQUENCY: f64 = 0.0015;

// Plain oscillator defaults
pub const WAVE_DEFAULT_FREQUENCY: f64 = 0.001;
pub const WAVE_DEFAULT_AMPLITUDE: f64 = 1.0;
