use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DEFAULT_EDGE_DELTA, DEFAULT_NOISE_DELTA};
use crate::error::{GraderError, Result};
use crate::frame::Raster;

use super::metrics::{compute_metrics, QualityMetrics};

/// Print-quality grade. Ordered by quality: `A > B > C > D > F`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    F,
    D,
    C,
    B,
    A,
}

impl Grade {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimums one tier must beat. Every comparison is strict.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    /// Normalized contrast (contrast range / 255) must exceed this.
    pub min_contrast: f64,
    pub min_edge_density: usize,
    pub min_contrast_range: u8,
    /// Noise count must stay below `width * height / noise_divisor`.
    pub noise_divisor: usize,
}

impl TierThresholds {
    pub fn qualifies(&self, m: &QualityMetrics) -> bool {
        let noise_limit = m.pixel_count() / self.noise_divisor.max(1);
        m.contrast() > self.min_contrast
            && m.edge_density > self.min_edge_density
            && m.contrast_range > self.min_contrast_range
            && m.noise_count < noise_limit
    }

    /// True when `self` is at least as strict as `looser` on every threshold.
    pub fn nests_within(&self, looser: &TierThresholds) -> bool {
        self.min_contrast >= looser.min_contrast
            && self.min_edge_density >= looser.min_edge_density
            && self.min_contrast_range >= looser.min_contrast_range
            && self.noise_divisor >= looser.noise_divisor
    }
}

/// Tier thresholds plus the pixel-step deltas used to count edges and noise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingThresholds {
    pub a: TierThresholds,
    pub b: TierThresholds,
    pub c: TierThresholds,
    /// Luminance step between horizontal neighbors that counts as an edge.
    pub edge_delta: u32,
    /// Luminance step between vertical neighbors that counts as noise.
    pub noise_delta: u32,
}

impl Default for GradingThresholds {
    fn default() -> Self {
        Self {
            a: TierThresholds {
                min_contrast: 0.5,
                min_edge_density: 200,
                min_contrast_range: 128,
                noise_divisor: 100,
            },
            b: TierThresholds {
                min_contrast: 0.25,
                min_edge_density: 100,
                min_contrast_range: 64,
                noise_divisor: 50,
            },
            c: TierThresholds {
                min_contrast: 0.125,
                min_edge_density: 50,
                min_contrast_range: 32,
                noise_divisor: 30,
            },
            edge_delta: DEFAULT_EDGE_DELTA,
            noise_delta: DEFAULT_NOISE_DELTA,
        }
    }
}

impl GradingThresholds {
    /// Reject tier sets where a better grade is easier to reach than a worse one.
    pub fn validate(&self) -> Result<()> {
        for (name, tier) in [("A", &self.a), ("B", &self.b), ("C", &self.c)] {
            if tier.noise_divisor == 0 {
                return Err(GraderError::InvalidConfig(format!(
                    "tier {name} noise_divisor must be > 0"
                )));
            }
        }
        if !self.a.nests_within(&self.b) {
            return Err(GraderError::InvalidConfig(
                "tier A thresholds must be at least as strict as tier B".into(),
            ));
        }
        if !self.b.nests_within(&self.c) {
            return Err(GraderError::InvalidConfig(
                "tier B thresholds must be at least as strict as tier C".into(),
            ));
        }
        Ok(())
    }
}

/// Map metrics to a grade; first matching tier wins, otherwise D.
pub fn assign_grade(metrics: &QualityMetrics, thresholds: &GradingThresholds) -> Grade {
    if thresholds.a.qualifies(metrics) {
        Grade::A
    } else if thresholds.b.qualifies(metrics) {
        Grade::B
    } else if thresholds.c.qualifies(metrics) {
        Grade::C
    } else {
        Grade::D
    }
}

/// Grade an isolated bar region. No region at all is an F.
pub fn grade_region(
    region: Option<&Raster>,
    thresholds: &GradingThresholds,
) -> (Grade, Option<QualityMetrics>) {
    let Some(region) = region else {
        return (Grade::F, None);
    };

    let metrics = compute_metrics(region, thresholds.edge_delta, thresholds.noise_delta);
    let grade = assign_grade(&metrics, thresholds);
    debug!(
        %grade,
        contrast_range = metrics.contrast_range,
        edge_density = metrics.edge_density,
        noise_count = metrics.noise_count,
        mean_luminance = metrics.mean_luminance,
        "Graded bar region"
    );
    (grade, Some(metrics))
}
