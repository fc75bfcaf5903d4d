//! Command line pipeline for toblerone
//!
//! `toblerone ingest` aggregates a directory of attention logs into the JSON
//! record store; `toblerone bake` synthesizes the mesh bundle for one stored
//! screening and exports its alpha mask as a PNG.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toblerone_ingest::{read_log_dir, read_screenings, write_screenings};
use toblerone_mesh::{synthesize, TobleroneConfig};

#[derive(Parser)]
#[command(name = "toblerone", about = "Attention-visualization pipeline for cinema screenings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Aggregate attention logs into the screening record store
    Ingest {
        /// Directory of per-screening CSV logs
        #[arg(long, default_value = "data/logs")]
        logs: PathBuf,
        /// Output JSON record store
        #[arg(long, default_value = "data/screenings.json")]
        out: PathBuf,
    },
    /// Synthesize one screening's mesh bundle and export its alpha mask
    Bake {
        /// JSON record store produced by `ingest`
        #[arg(long, default_value = "data/screenings.json")]
        data: PathBuf,
        /// Screening id to bake
        #[arg(long)]
        id: u32,
        /// Output PNG for the alpha mask
        #[arg(long, default_value = "mask.png")]
        mask: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Ingest { logs, out } => ingest(&logs, &out),
        Command::Bake { data, id, mask } => bake(&data, id, &mask),
    }
}

fn ingest(logs: &PathBuf, out: &PathBuf) -> Result<()> {
    let result = read_log_dir(logs)
        .with_context(|| format!("failed to scan log directory {}", logs.display()))?;

    for (path, error) in &result.failures {
        log::error!("failed to ingest {}: {}", path.display(), error);
    }
    if result.screenings.is_empty() {
        bail!("no screenings ingested from {}", logs.display());
    }

    write_screenings(&result.screenings, out)
        .with_context(|| format!("failed to write {}", out.display()))?;
    log::info!(
        "wrote {} screenings to {} ({} failures)",
        result.screenings.len(),
        out.display(),
        result.failures.len()
    );
    Ok(())
}

fn bake(data: &PathBuf, id: u32, mask_path: &PathBuf) -> Result<()> {
    let screenings = read_screenings(data)
        .with_context(|| format!("failed to read record store {}", data.display()))?;
    let Some(screening) = screenings.iter().find(|screening| screening.id == id) else {
        bail!("no screening with id {} in {}", id, data.display());
    };

    let bundle = synthesize(screening, &TobleroneConfig::default())
        .with_context(|| format!("failed to synthesize screening {}", id))?;

    let size = bundle.mask.size;
    let raster = image::RgbaImage::from_raw(size, size, bundle.mask.pixels)
        .context("alpha mask buffer does not match its dimensions")?;
    raster
        .save(mask_path)
        .with_context(|| format!("failed to write {}", mask_path.display()))?;

    log::info!(
        "screening {}: {} scenes, prism height {:.1}, {} line segments, mask saved to {}",
        id,
        screening.scenes.len(),
        bundle.prism.height,
        bundle.line.len(),
        mask_path.display()
    );
    Ok(())
}
