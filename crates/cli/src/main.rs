use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nalgebra::Vector2;
use surface_spiral::api::{RibbonCfg, SplinePath, SpiralCfg, SurfaceSpiral};
use tracing_subscriber::fmt::SubscriberBuilder;

mod config;
mod output;
mod provenance;
mod terrain;

use config::RunConfig;
use terrain::NoiseTerrain;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Drape density-adaptive spirals over noise terrain")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate, drape and frame one spiral; write polyline/ribbon and provenance
    Run {
        /// JSON run configuration (defaults apply to missing fields)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output file: .json, .csv or .parquet
        #[arg(long)]
        out: PathBuf,
        /// Override the terrain seed from the config
        #[arg(long)]
        seed: Option<u32>,
    },
    /// Print the default run configuration as JSON
    Config,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { config, out, seed } => run(config, out, seed),
        Action::Config => {
            println!("{}", serde_json::to_string_pretty(&RunConfig::default())?);
            Ok(())
        }
        Action::Report => {
            println!("{}", serde_json::to_string_pretty(&provenance::header())?);
            Ok(())
        }
    }
}

fn run(config: Option<PathBuf>, out: PathBuf, seed: Option<u32>) -> Result<()> {
    let mut cfg = match &config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if let Some(seed) = seed {
        cfg.terrain.seed = seed;
    }
    tracing::info!(config = ?config, out = %out.display(), seed = cfg.terrain.seed, "run");

    let mut spiral = SurfaceSpiral::with_spline(SplinePath::new(cfg.ribbon.spline.into()));
    spiral.set_config(RibbonCfg::from(&cfg.ribbon))?;
    let raw = spiral.setup_with(SpiralCfg::from(&cfg.spiral))?;

    let terrain = NoiseTerrain::new(&cfg.terrain);
    let offset = Vector2::new(cfg.planar_offset[0], cfg.planar_offset[1]);
    let summary = spiral.update(&terrain, cfg.vertical_scale, offset)?;
    tracing::info!(
        raw,
        polyline = summary.polyline_len,
        spline = ?spiral.spline().kind(),
        ribbon = ?summary.ribbon,
        "spiral draped"
    );

    output::write(&out, &spiral, &summary)?;
    let payload = provenance::Payload::new(serde_json::to_value(&cfg)?)
        .with_summary(output::summary_json(&summary));
    let prov_path = provenance::write_sidecar(&out, payload)?;
    tracing::info!(provenance = %prov_path.display(), "outputs written");
    Ok(())
}
