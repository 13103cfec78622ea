use std::path::PathBuf;

use anyhow::{Context, Result};
use bargrade_core::io::image_io::load_raster;
use bargrade_core::quality::SharpnessGate;
use clap::Args;

use super::load_config;

#[derive(Args)]
pub struct SharpnessArgs {
    /// Input image
    pub file: PathBuf,

    /// Override the configured sharpness threshold
    #[arg(long)]
    pub threshold: Option<f64>,

    /// TOML grading config
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &SharpnessArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(threshold) = args.threshold {
        config.sharpness.threshold = threshold;
        config.validate()?;
    }

    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let gate = SharpnessGate::new(&config.sharpness);

    let (variance, verdict) = match gate.check(&raster) {
        Ok(v) => (v, "sharp"),
        Err(v) => (v, "not sharp"),
    };

    println!("Image:     {}x{}", raster.width(), raster.height());
    println!("Variance:  {:.2}", variance);
    println!("Threshold: {:.2}", gate.threshold());
    println!("Verdict:   {}", verdict);

    Ok(())
}
