use std::path::PathBuf;

use anyhow::{Context, Result};
use bargrade_core::io::image_io::{load_raster, save_raster};
use bargrade_core::pipeline::{CaptureLatch, FrameOutcome, GradingPipeline};
use clap::Args;

use super::SymbolArgs;
use crate::summary::print_grading_result;

#[derive(Args)]
pub struct GradeArgs {
    /// Input image, already upright
    pub file: PathBuf,

    #[command(flatten)]
    pub symbol: SymbolArgs,

    /// Save the isolated bar region (or the crop, if no region was found)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Save the crop with the symbol outline drawn on it
    #[arg(long)]
    pub overlay: Option<PathBuf>,
}

pub fn run(args: &GradeArgs) -> Result<()> {
    let config = args.symbol.load_config()?;
    let pipeline = GradingPipeline::new(config, args.symbol.detector())?;

    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let latch = CaptureLatch::new();

    let result = match pipeline.process_raster_blocking(&latch, &raster)? {
        FrameOutcome::Graded(result) => result,
        FrameOutcome::Rejected(reason) => {
            println!("No grade: {}", reason);
            return Ok(());
        }
    };

    print_grading_result(&result, &args.file.display().to_string());

    if let Some(ref path) = args.output {
        let image = result
            .bar_image()
            .unwrap_or_else(|| result.normalized_image.clone());
        save_raster(&image, path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        println!("Bar region saved to {}", path.display());
    }

    if let Some(ref path) = args.overlay {
        save_raster(&result.overlay_image(&pipeline.config().overlay), path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        println!("Overlay saved to {}", path.display());
    }

    Ok(())
}
