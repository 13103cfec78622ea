use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BAR_COUNT_CUTOFF, DEFAULT_BAR_COUNT_KERNEL_HEIGHT, DEFAULT_BAR_CUTOFF,
    DEFAULT_CROP_PADDING, DEFAULT_ISOLATION_BLUR_RADIUS, DEFAULT_ISOLATION_BLUR_SIGMA,
};

/// Parameters for cropping and isolating the bar region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Pixels added around the corner bounding box for the loose crop.
    pub padding: i32,
    /// Gaussian sigma applied before thresholding.
    pub blur_sigma: f32,
    /// Gaussian kernel radius (taps = 2 * radius + 1).
    pub blur_radius: usize,
    /// Blurred luminance at or below which a pixel counts as ink.
    pub bar_cutoff: u8,
    /// Luminance cutoff used when counting individual bars.
    pub bar_count_cutoff: u8,
    /// Height of the vertical closing element used when counting bars.
    pub bar_count_kernel_height: usize,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_CROP_PADDING,
            blur_sigma: DEFAULT_ISOLATION_BLUR_SIGMA,
            blur_radius: DEFAULT_ISOLATION_BLUR_RADIUS,
            bar_cutoff: DEFAULT_BAR_CUTOFF,
            bar_count_cutoff: DEFAULT_BAR_COUNT_CUTOFF,
            bar_count_kernel_height: DEFAULT_BAR_COUNT_KERNEL_HEIGHT,
        }
    }
}
