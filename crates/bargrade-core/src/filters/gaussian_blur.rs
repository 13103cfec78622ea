use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Separable Gaussian blur with an explicit kernel radius
/// (`2 * radius + 1` taps). Borders replicate the edge pixel.
pub fn gaussian_blur_sized(data: &Array2<f32>, sigma: f32, radius: usize) -> Array2<f32> {
    let kernel = make_gaussian_kernel(sigma, radius);
    let row_pass = convolve(data, &kernel, Pass::Rows);
    convolve(&row_pass, &kernel, Pass::Cols)
}

/// Normalized 1D Gaussian weights. A non-positive sigma yields an identity
/// kernel.
pub fn make_gaussian_kernel(sigma: f32, radius: usize) -> Vec<f32> {
    let size = 2 * radius + 1;
    let mut kernel = vec![0.0f32; size];
    if sigma <= 0.0 {
        kernel[radius] = 1.0;
        return kernel;
    }

    let s2 = 2.0 * sigma * sigma;
    let mut sum = 0.0f32;
    for (i, k) in kernel.iter_mut().enumerate() {
        let x = i as f32 - radius as f32;
        *k = (-x * x / s2).exp();
        sum += *k;
    }
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

#[derive(Clone, Copy)]
enum Pass {
    Rows,
    Cols,
}

fn convolve(data: &Array2<f32>, kernel: &[f32], pass: Pass) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;

    let tap = |row: usize, col: usize| -> f32 {
        let mut sum = 0.0f32;
        for (ki, &kv) in kernel.iter().enumerate() {
            let offset = ki as isize - radius as isize;
            let v = match pass {
                Pass::Rows => {
                    let c = (col as isize + offset).clamp(0, w as isize - 1) as usize;
                    data[[row, c]]
                }
                Pass::Cols => {
                    let r = (row as isize + offset).clamp(0, h as isize - 1) as usize;
                    data[[r, col]]
                }
            };
            sum += v * kv;
        }
        sum
    };

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        let rows: Vec<Vec<f32>> = (0..h)
            .into_par_iter()
            .map(|row| (0..w).map(|col| tap(row, col)).collect())
            .collect();

        let mut result = Array2::<f32>::zeros((h, w));
        for (row, row_data) in rows.into_iter().enumerate() {
            for (col, val) in row_data.into_iter().enumerate() {
                result[[row, col]] = val;
            }
        }
        result
    } else {
        Array2::from_shape_fn((h, w), |(row, col)| tap(row, col))
    }
}
