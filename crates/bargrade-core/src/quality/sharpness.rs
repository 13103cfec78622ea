use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SHARPNESS_THRESHOLD;
use crate::frame::Raster;

/// Compute the Laplacian variance of a raster's luminance; higher means sharper.
///
/// Convolves every pixel with the 3x3 Laplacian kernel:
///   0  1  0
///   1 -4  1
///   0  1  0
/// using reflect-101 borders, then returns the population variance of the
/// response. Rasters smaller than 3x3 score 0.
pub fn laplacian_variance(raster: &Raster) -> f64 {
    laplacian_variance_array(&raster.luminance())
}

pub fn laplacian_variance_array(data: &Array2<u8>) -> f64 {
    let (h, w) = data.dim();
    if h < 3 || w < 3 {
        return 0.0;
    }

    let at = |row: isize, col: isize| -> f64 {
        data[[reflect101(row, h), reflect101(col, w)]] as f64
    };

    let mut sum = 0.0f64;
    let mut sum_sq = 0.0f64;
    for row in 0..h as isize {
        for col in 0..w as isize {
            let lap = -4.0 * at(row, col)
                + at(row - 1, col)
                + at(row + 1, col)
                + at(row, col - 1)
                + at(row, col + 1);
            sum += lap;
            sum_sq += lap * lap;
        }
    }

    let count = (h * w) as f64;
    let mean = sum / count;
    (sum_sq / count - mean * mean).max(0.0)
}

/// Mirror an out-of-range index without repeating the edge sample
/// (`-1 -> 1`, `n -> n - 2`).
#[inline]
fn reflect101(i: isize, n: usize) -> usize {
    let n = n as isize;
    let r = if i < 0 {
        -i
    } else if i >= n {
        2 * n - 2 - i
    } else {
        i
    };
    r as usize
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharpnessConfig {
    /// Laplacian variance a frame must exceed to be graded.
    pub threshold: f64,
}

impl Default for SharpnessConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SHARPNESS_THRESHOLD,
        }
    }
}

/// Focus gate run before the expensive stages.
#[derive(Clone, Debug)]
pub struct SharpnessGate {
    threshold: f64,
}

impl SharpnessGate {
    pub fn new(config: &SharpnessConfig) -> Self {
        Self {
            threshold: config.threshold,
        }
    }

    /// Score the raster. `Ok(variance)` when it is sharp enough,
    /// `Err(variance)` when it should be skipped.
    pub fn check(&self, raster: &Raster) -> std::result::Result<f64, f64> {
        let variance = laplacian_variance(raster);
        if variance > self.threshold {
            Ok(variance)
        } else {
            Err(variance)
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}
