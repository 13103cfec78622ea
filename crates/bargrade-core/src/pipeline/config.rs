use serde::{Deserialize, Serialize};

use crate::error::{GraderError, Result};
use crate::geometry::GeometryConfig;
use crate::overlay::OverlayStyle;
use crate::quality::{GradingThresholds, SharpnessConfig};

/// When an accepted frame closes the capture latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatchPolicy {
    /// Any graded frame latches, F included.
    #[default]
    AnyGrade,
    /// Only frames whose bar region could be graded (A..D) latch; F results
    /// are still returned but scanning continues.
    GradableOnly,
}

impl std::fmt::Display for LatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AnyGrade => write!(f, "Any grade"),
            Self::GradableOnly => write!(f, "Gradable only"),
        }
    }
}

/// Every tunable of the frame-to-grade pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraderConfig {
    pub sharpness: SharpnessConfig,
    pub geometry: GeometryConfig,
    pub grading: GradingThresholds,
    pub latch: LatchPolicy,
    pub overlay: OverlayStyle,
}

impl GraderConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.sharpness.threshold.is_finite() || self.sharpness.threshold < 0.0 {
            return Err(GraderError::InvalidConfig(format!(
                "sharpness threshold must be a finite, non-negative number, got {}",
                self.sharpness.threshold
            )));
        }
        if self.geometry.padding < 0 {
            return Err(GraderError::InvalidConfig(format!(
                "crop padding must be >= 0, got {}",
                self.geometry.padding
            )));
        }
        if !self.geometry.blur_sigma.is_finite() || self.geometry.blur_sigma < 0.0 {
            return Err(GraderError::InvalidConfig(format!(
                "blur sigma must be finite and >= 0, got {}",
                self.geometry.blur_sigma
            )));
        }
        if self.geometry.bar_count_kernel_height == 0 {
            return Err(GraderError::InvalidConfig(
                "bar count kernel height must be > 0".into(),
            ));
        }
        self.grading.validate()
    }
}
