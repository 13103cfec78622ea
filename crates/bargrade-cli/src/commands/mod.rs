pub mod config;
pub mod grade;
pub mod scan;
pub mod sharpness;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bargrade_core::geometry::Point;
use bargrade_core::locate::{BarcodeFormat, StaticDetector};
use bargrade_core::pipeline::GraderConfig;
use clap::Args;

/// Where the symbol is, for inputs that come without a live detector.
#[derive(Args)]
pub struct SymbolArgs {
    /// Symbol corners as "x,y x,y x,y x,y"
    #[arg(
        long,
        required = true,
        num_args = 1..,
        value_delimiter = ' ',
        value_parser = parse_point,
        allow_hyphen_values = true
    )]
    pub corners: Vec<Point>,

    /// Decoded payload, if known
    #[arg(long)]
    pub value: Option<String>,

    /// Barcode format (e.g. ean13, upca, code128)
    #[arg(long, default_value = "unknown", value_parser = parse_format)]
    pub format: BarcodeFormat,

    /// TOML grading config (defaults are used when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl SymbolArgs {
    pub fn detector(&self) -> StaticDetector {
        StaticDetector::found(self.value.clone(), self.format, self.corners.clone())
    }

    pub fn load_config(&self) -> Result<GraderConfig> {
        load_config(self.config.as_deref())
    }
}

pub fn load_config(path: Option<&Path>) -> Result<GraderConfig> {
    let Some(path) = path else {
        return Ok(GraderConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: GraderConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Parses one `x,y` pair; clap splits the list on spaces.
fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{s}'"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in '{s}': {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in '{s}': {e}"))?;
    Ok(Point::new(x, y))
}

fn parse_format(s: &str) -> Result<BarcodeFormat, String> {
    s.parse()
}
