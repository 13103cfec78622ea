use std::path::PathBuf;

use anyhow::{Context, Result};
use bargrade_core::frame::Rotation;
use bargrade_core::io::yuv_stream::YuvStream;
use bargrade_core::pipeline::{CaptureLatch, FrameOutcome, GradingPipeline, Rejection};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::SymbolArgs;
use crate::summary::{print_grading_result, print_scan_summary, ScanStats};

#[derive(Args)]
pub struct ScanArgs {
    /// Raw I420 file: concatenated frames, no header
    pub file: PathBuf,

    /// Frame width in pixels
    #[arg(long)]
    pub width: usize,

    /// Frame height in pixels
    #[arg(long)]
    pub height: usize,

    /// Clockwise rotation to bring frames upright (multiple of 90)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub rotation: i32,

    #[command(flatten)]
    pub symbol: SymbolArgs,
}

pub fn run(args: &ScanArgs) -> Result<()> {
    let rotation = Rotation::from_degrees(args.rotation)?;
    let config = args.symbol.load_config()?;
    let pipeline = GradingPipeline::new(config, args.symbol.detector())?;

    let stream = YuvStream::open(&args.file, args.width, args.height, rotation)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    let total = stream.frame_count();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Scanning frames");

    let latch = CaptureLatch::new();
    let mut stats = ScanStats {
        total,
        policy: pipeline.config().latch,
        ..ScanStats::default()
    };
    let mut captured = None;

    for (i, frame) in stream.frames().enumerate() {
        let frame = frame?;
        stats.processed += 1;
        match pipeline.process_frame_blocking(&latch, &frame)? {
            FrameOutcome::Graded(result) => {
                stats.graded += 1;
                if latch.is_captured() {
                    info!(frame = i, grade = %result.grade, "Capture latched");
                    stats.captured_at = Some(i);
                    captured = Some(result);
                    pb.set_position(i as u64 + 1);
                    break;
                }
            }
            FrameOutcome::Rejected(Rejection::NotSharp { .. }) => stats.not_sharp += 1,
            FrameOutcome::Rejected(Rejection::SymbolNotFound) => stats.not_found += 1,
            FrameOutcome::Rejected(_) => {}
        }
        pb.set_position(i as u64 + 1);
    }
    pb.finish_with_message("Scan complete");

    print_scan_summary(&stats);
    if let Some(result) = captured {
        print_grading_result(&result, &format!("frame {}", stats.captured_at.unwrap_or(0)));
    }

    Ok(())
}
