use serde::{Deserialize, Serialize};

use crate::frame::Raster;

/// Print-quality statistics of an isolated bar region.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// Max minus min luminance across the region (0..=255).
    pub contrast_range: u8,
    /// Horizontally adjacent pixel pairs whose luminance step exceeds the edge delta.
    pub edge_density: usize,
    /// Vertically adjacent pixel pairs whose luminance step exceeds the noise delta.
    pub noise_count: usize,
    pub mean_luminance: f64,
    pub width: usize,
    pub height: usize,
}

impl QualityMetrics {
    /// Contrast range normalized to [0, 1].
    pub fn contrast(&self) -> f64 {
        self.contrast_range as f64 / 255.0
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// Measure contrast, edges and noise over every pixel of `raster`.
///
/// Edges compare each pixel with its left neighbor. Noise compares each
/// pixel with the one above it, skipping the first row and column.
pub fn compute_metrics(raster: &Raster, edge_delta: u32, noise_delta: u32) -> QualityMetrics {
    let lum = raster.luminance();
    let (h, w) = lum.dim();

    let mut min_l = u8::MAX;
    let mut max_l = u8::MIN;
    let mut total: u64 = 0;
    let mut edges = 0usize;
    let mut noise = 0usize;

    for row in 0..h {
        for col in 0..w {
            let l = lum[[row, col]];
            total += l as u64;
            min_l = min_l.min(l);
            max_l = max_l.max(l);

            if col >= 1 && (l.abs_diff(lum[[row, col - 1]]) as u32) > edge_delta {
                edges += 1;
            }
            if row >= 1 && col >= 1 && (l.abs_diff(lum[[row - 1, col]]) as u32) > noise_delta {
                noise += 1;
            }
        }
    }

    let count = (h * w).max(1);
    QualityMetrics {
        contrast_range: max_l.saturating_sub(min_l),
        edge_density: edges,
        noise_count: noise,
        mean_luminance: total as f64 / count as f64,
        width: w,
        height: h,
    }
}
