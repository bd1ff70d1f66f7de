use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hull2::api::{random_points, Canvas, CloudCfg};
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod pipeline;
mod provenance;

use pipeline::Config;
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull of an integer point file, dumped as text and rendered to PNG")]
struct Cmd {
    /// Defaults to `run` with files next to the executable
    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull, write the vertex dump and the image
    Run(RunArgs),
    /// Write a seeded random point file inside the canvas
    Sample {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 200)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Overrides on top of `Config::beside_executable`.
#[derive(Args, Default)]
struct RunArgs {
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long)]
    hull_out: Option<PathBuf>,
    #[arg(long)]
    image_out: Option<PathBuf>,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
}

impl RunArgs {
    fn apply(self, mut cfg: Config) -> Config {
        if let Some(p) = self.input {
            cfg.input = p;
        }
        if let Some(p) = self.hull_out {
            cfg.hull_out = p;
        }
        if let Some(p) = self.image_out {
            cfg.image_out = p;
        }
        if let Some(w) = self.width {
            cfg.width = w;
        }
        if let Some(h) = self.height {
            cfg.height = h;
        }
        cfg
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action.unwrap_or(Action::Run(RunArgs::default())) {
        Action::Run(args) => run(args),
        Action::Sample { out, count, seed } => sample(out, count, seed),
        Action::Report => report(),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let cfg = args.apply(Config::beside_executable()?);
    tracing::info!(config = ?cfg, "run");
    let summary = pipeline::run(&cfg)?;
    tracing::info!(summary = ?summary, "done");
    Ok(())
}

fn sample(out: PathBuf, count: usize, seed: u64) -> Result<()> {
    tracing::info!(out = %out.display(), count, seed, "sample");
    let cfg = CloudCfg::within_canvas(Canvas::default(), count);
    let mut text = String::with_capacity(count * 10);
    for p in random_points(cfg, seed) {
        writeln!(text, "{}, {}", p.x, p.y)?;
    }
    pipeline::ensure_parent(&out)?;
    std::fs::write(&out, text).with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({ "count": count, "seed": seed });
    write_sidecar(&out, Payload::new(params))?;
    Ok(())
}

fn report() -> Result<()> {
    let cfg = Config::beside_executable()?;
    let doc = Payload::new(serde_json::json!({ "config": cfg }))
        .with_outputs([cfg.hull_out.clone(), cfg.image_out.clone()])
        .to_document();
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
