// Host-side tests for the hue oscillator and stroke color formatting.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::TAU;
use trails_core::*;

#[test]
fn default_oscillator_matches_plain_wave_settings() {
    let osc = Oscillator::default();
    assert_eq!(osc.phase, 0.0);
    assert_eq!(osc.offset, 0.0);
    assert!((osc.frequency - 0.001).abs() < 1e-12);
    assert_eq!(osc.amplitude, 1.0);
    assert_eq!(osc.sample(), 0.0);
}

#[test]
fn sample_is_idempotent() {
    let mut osc = Oscillator::new(1.3, 10.0, 0.2, 4.0);
    osc.advance();
    let a = osc.sample();
    let b = osc.sample();
    assert_eq!(a, b);
    assert_eq!(osc.phase, 1.3 + 0.2);
}

#[test]
fn advance_returns_value_at_new_phase() {
    let mut osc = Oscillator::new(0.5, 285.0, 0.0015, 85.0);
    let v = osc.advance();
    let expected = 285.0 + 85.0 * (0.5_f64 + 0.0015).sin();
    assert!((v - expected).abs() < 1e-12);
    assert_eq!(v, osc.sample());
}

#[test]
fn advance_n_times_is_independent_of_intermediate_reads() {
    let p0 = 2.0;
    let freq = 0.0015;
    let n = 1000;

    let mut quiet = Oscillator::new(p0, 285.0, freq, 85.0);
    let mut chatty = quiet.clone();
    for _ in 0..n {
        quiet.advance();
    }
    for _ in 0..n {
        let _ = chatty.sample();
        chatty.advance();
        let _ = chatty.sample();
    }

    let expected = 285.0 + 85.0 * (p0 + n as f64 * freq).sin();
    assert!((quiet.sample() - expected).abs() < 1e-9);
    assert_eq!(quiet.sample(), chatty.sample());
}

#[test]
fn hue_oscillator_uses_config_and_random_phase() {
    let cfg = HueConfig::default();
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let osc = Oscillator::hue(&cfg, &mut rng);
        assert!(osc.phase >= 0.0 && osc.phase < TAU, "phase {}", osc.phase);
        assert_eq!(osc.offset, 285.0);
        assert_eq!(osc.amplitude, 85.0);
        assert_eq!(osc.frequency, 0.0015);
        let v = osc.sample();
        assert!((200.0..=370.0).contains(&v));
    }
}

#[test]
fn hsla_formats_rounded_hue_and_fixed_channels() {
    let c = Hsla {
        hue: 285.4,
        saturation_pct: 100,
        lightness_pct: 50,
        alpha: 0.025,
    };
    assert_eq!(c.to_string(), "hsla(285,100%,50%,0.025)");
}

#[test]
fn hsla_leaves_out_of_range_hue_unreduced() {
    let mut c = Hsla {
        hue: 369.6,
        saturation_pct: 100,
        lightness_pct: 50,
        alpha: 0.025,
    };
    assert_eq!(c.to_string(), "hsla(370,100%,50%,0.025)");
    c.hue = -10.2;
    assert_eq!(c.to_string(), "hsla(-10,100%,50%,0.025)");
}

#[test]
fn hsla_rounds_half_hues_up_like_the_canvas() {
    let mut c = Hsla {
        hue: 2.5,
        saturation_pct: 100,
        lightness_pct: 50,
        alpha: 0.025,
    };
    assert_eq!(c.to_string(), "hsla(3,100%,50%,0.025)");
    c.hue = -10.5;
    assert_eq!(c.to_string(), "hsla(-10,100%,50%,0.025)");
    c.hue = -0.3;
    assert_eq!(c.to_string(), "hsla(0,100%,50%,0.025)");
}
