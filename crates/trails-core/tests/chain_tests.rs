// Host-side tests for chain physics and curve drawing.

use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trails_core::*;

fn config(size: usize, dampening: f64) -> TrailConfig {
    TrailConfig {
        size,
        dampening,
        ..TrailConfig::default()
    }
}

fn max_speed(chain: &Chain) -> f64 {
    chain
        .nodes()
        .iter()
        .map(|n| n.vel.length())
        .fold(0.0, f64::max)
}

#[test]
fn node_count_is_fixed_for_the_chain_lifetime() {
    let cfg = TrailConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let mut chain = Chain::new(0.45, &cfg, DVec2::ZERO, &mut rng).unwrap();
    assert_eq!(chain.nodes().len(), 50);
    for i in 0..300 {
        let t = DVec2::new((i as f64 * 0.1).sin() * 200.0, i as f64);
        chain.update(t);
        assert_eq!(chain.nodes().len(), cfg.size);
    }
}

#[test]
fn chains_shorter_than_two_nodes_are_rejected() {
    for size in [0, 1] {
        let cfg = config(size, 0.025);
        let err = Chain::with_params(0.45, 0.5, &cfg, DVec2::ZERO).unwrap_err();
        assert_eq!(err, ConfigError::TooFewNodes { got: size, min: 2 });
        assert_eq!(cfg.validate(), Err(ConfigError::TooFewNodes { got: size, min: 2 }));
    }
    assert!(Chain::with_params(0.45, 0.5, &config(2, 0.0), DVec2::ZERO).is_ok());
}

#[test]
fn new_chain_rests_on_the_target() {
    let target = DVec2::new(-4.0, 12.5);
    let chain = Chain::with_params(0.45, 0.5, &config(8, 0.025), target).unwrap();
    for n in chain.nodes() {
        assert_eq!(n.pos, target);
        assert_eq!(n.vel, DVec2::ZERO);
    }
}

#[test]
fn jitter_stays_within_configured_bounds() {
    let cfg = TrailConfig::default();
    let mut rng = StdRng::seed_from_u64(99);
    let mut springs = Vec::new();
    for _ in 0..500 {
        let chain = Chain::new(0.45, &cfg, DVec2::ZERO, &mut rng).unwrap();
        assert!((chain.spring() - 0.45).abs() <= 0.05);
        assert!((chain.friction() - 0.5).abs() <= 0.005);
        springs.push(chain.spring());
    }
    // Jitter actually varies between chains.
    let first = springs[0];
    assert!(springs.iter().any(|s| (s - first).abs() > 1e-6));
}

#[test]
fn same_seed_builds_identical_chains() {
    let cfg = TrailConfig::default();
    let a = Chain::new(0.46, &cfg, DVec2::ONE, &mut StdRng::seed_from_u64(3)).unwrap();
    let b = Chain::new(0.46, &cfg, DVec2::ONE, &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(a.spring(), b.spring());
    assert_eq!(a.friction(), b.friction());
}

#[test]
fn chain_at_rest_on_target_stays_at_rest() {
    let target = DVec2::new(3.0, 4.0);
    let mut chain = Chain::with_params(0.45, 0.5, &config(50, 0.0), target).unwrap();
    let mut prev = max_speed(&chain);
    for _ in 0..100 {
        chain.update(target);
        let speed = max_speed(&chain);
        assert!(speed <= prev);
        prev = speed;
    }
    for n in chain.nodes() {
        assert_eq!(n.pos, target);
    }
}

#[test]
fn displaced_chain_settles_on_target() {
    let target = DVec2::new(30.0, -20.0);
    let mut chain = Chain::with_params(0.45, 0.5, &config(5, 0.0), DVec2::ZERO).unwrap();

    // Peak speed per 25-tick window shrinks once the initial kick is over.
    let mut window_peaks = Vec::new();
    for _ in 0..20 {
        let mut peak: f64 = 0.0;
        for _ in 0..25 {
            chain.update(target);
            peak = peak.max(max_speed(&chain));
        }
        window_peaks.push(peak);
    }
    assert!(window_peaks[1] < window_peaks[0], "peaks {:?}", window_peaks);
    assert!(window_peaks[2] < window_peaks[1], "peaks {:?}", window_peaks);
    assert!(window_peaks[3] < window_peaks[2], "peaks {:?}", window_peaks);
    // Past that the chain sits at the rounding floor.
    assert!(window_peaks[4..].iter().all(|p| *p <= window_peaks[3]));

    for n in chain.nodes() {
        assert!((n.pos - target).length() < 1e-6, "node at {:?}", n.pos);
        assert!(n.vel.length() < 1e-6);
    }
}

#[test]
fn head_settles_after_target_jump() {
    let mut chain = Chain::with_params(0.45, 0.5, &TrailConfig::default(), DVec2::ZERO).unwrap();
    let target = DVec2::new(100.0, 0.0);
    for _ in 0..200 {
        chain.update(target);
    }
    let head = chain.head();
    assert!((head.pos.x - 100.0).abs() < 1e-3, "head x {}", head.pos.x);
    assert!(head.vel.x.abs() < 1e-3);
}

#[test]
fn jittered_head_settles_after_target_jump() {
    let cfg = TrailConfig::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut chain = Chain::new(0.45, &cfg, DVec2::ZERO, &mut rng).unwrap();
    let target = DVec2::new(100.0, 0.0);
    for _ in 0..200 {
        chain.update(target);
    }
    assert!((chain.head().pos.x - 100.0).abs() < 1e-3);
    assert!(chain.head().vel.x.abs() < 1e-3);
}

#[test]
fn tail_lags_behind_head() {
    let mut chain =
        Chain::with_params(0.45, 0.5, &TrailConfig::default(), DVec2::ZERO).unwrap();
    let target = DVec2::new(100.0, 0.0);
    for _ in 0..5 {
        chain.update(target);
    }
    let head_x = chain.head().pos.x;
    let tail_x = chain.nodes().last().unwrap().pos.x;
    assert!(head_x > tail_x);
    assert!(tail_x >= 0.0);
}

#[test]
fn dampening_pushes_followers_further() {
    let target = DVec2::new(50.0, 0.0);
    let mut loose = Chain::with_params(0.45, 0.5, &config(10, 0.0), DVec2::ZERO).unwrap();
    let mut damped = Chain::with_params(0.45, 0.5, &config(10, 0.3), DVec2::ZERO).unwrap();
    for _ in 0..3 {
        loose.update(target);
        damped.update(target);
    }
    assert_eq!(loose.head().pos, damped.head().pos);
    assert!(damped.nodes()[1].pos.x > loose.nodes()[1].pos.x);
}

#[test]
fn two_node_chain_draws_one_direct_segment() {
    let mut chain = Chain::with_params(0.45, 0.5, &config(2, 0.025), DVec2::ZERO).unwrap();
    chain.update(DVec2::new(10.0, 5.0));
    let n = chain.nodes().to_vec();

    let mut surface = RecordingSurface::new();
    chain.draw(&mut surface);
    assert_eq!(
        surface.commands(),
        &[
            DrawCommand::BeginPath,
            DrawCommand::MoveTo(n[0].pos),
            DrawCommand::QuadraticCurveTo {
                control: n[0].pos,
                end: n[1].pos,
            },
            DrawCommand::Stroke,
            DrawCommand::ClosePath,
        ]
    );
}

#[test]
fn longer_chain_draws_midpoint_smoothed_segments() {
    let size = 6;
    let mut chain = Chain::with_params(0.45, 0.5, &config(size, 0.025), DVec2::ZERO).unwrap();
    for i in 0..4 {
        chain.update(DVec2::new(40.0 * i as f64, -15.0 * i as f64));
    }
    let n = chain.nodes().to_vec();

    let mut surface = RecordingSurface::new();
    chain.draw(&mut surface);
    let cmds = surface.commands();

    let quads: Vec<(DVec2, DVec2)> = cmds
        .iter()
        .filter_map(|c| match c {
            DrawCommand::QuadraticCurveTo { control, end } => Some((*control, *end)),
            _ => None,
        })
        .collect();
    assert_eq!(quads.len(), (size - 3) + 1);

    assert_eq!(cmds[1], DrawCommand::MoveTo(n[0].pos));
    for (k, (control, end)) in quads[..size - 3].iter().enumerate() {
        let a = k + 1;
        assert_eq!(*control, n[a].pos);
        assert_eq!(*end, (n[a].pos + n[a + 1].pos) * 0.5);
    }
    let (control, end) = quads[size - 3];
    assert_eq!(control, n[size - 2].pos);
    assert_eq!(end, n[size - 1].pos);

    assert_eq!(surface.count(|c| matches!(c, DrawCommand::Stroke)), 1);
    assert_eq!(cmds.last(), Some(&DrawCommand::ClosePath));
}

#[test]
fn three_node_chain_has_no_smoothed_segments() {
    let chain = Chain::with_params(0.45, 0.5, &config(3, 0.025), DVec2::ONE).unwrap();
    let mut surface = RecordingSurface::new();
    chain.draw(&mut surface);
    assert_eq!(
        surface.count(|c| matches!(c, DrawCommand::QuadraticCurveTo { .. })),
        1
    );
}
