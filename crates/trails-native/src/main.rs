use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use trails_core::{Engine, HueConfig, TrailConfig};
use trails_native::{run_session, PointerScript, SvgSurface};

#[derive(Parser)]
#[command(name = "trails-native")]
#[command(about = "Run the spring-trails effect headlessly and write the last frame as SVG")]
struct Cli {
    /// Frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Chains in the trail set
    #[arg(long, default_value_t = trails_core::constants::TRAILS)]
    trails: usize,

    /// Nodes per chain (at least 2)
    #[arg(long, default_value_t = trails_core::constants::NODES_PER_CHAIN)]
    size: usize,

    /// Seed for the hue phase and chain jitter
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Surface width in px
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Surface height in px
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Frames per sweep of the scripted pointer
    #[arg(long, default_value_t = 240.0)]
    period: f64,

    /// Output file
    #[arg(long, default_value = "trails.svg")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = TrailConfig {
        trails: cli.trails,
        size: cli.size,
        ..TrailConfig::default()
    };
    let mut engine = Engine::new(config, HueConfig::default(), cli.seed)
        .context("invalid trail configuration")?;
    log::info!(
        "[native] {} chains x {} nodes, {} frames -> {}",
        engine.config().trails,
        engine.config().size,
        cli.frames,
        cli.out.display()
    );
    let script = PointerScript::new(cli.width, cli.height, cli.period);
    let mut surface = SvgSurface::new(cli.width, cli.height);

    let stats = run_session(&mut engine, &mut surface, &script, cli.frames, None);
    log::info!(
        "[native] rendered {} frames ({} requests), {} paths in last frame",
        stats.rendered,
        stats.requests,
        surface.paths().len()
    );

    std::fs::write(&cli.out, surface.to_svg())
        .with_context(|| format!("writing {}", cli.out.display()))?;
    log::info!("[native] wrote {}", cli.out.display());
    Ok(())
}
