use crate::filters::morphology::{morphological_closing, RectKernel};
use crate::filters::threshold::threshold_inverse_u8;
use crate::frame::Raster;

use super::components::connected_components;
use super::config::GeometryConfig;

/// Count the distinct vertical bars in a symbol crop.
///
/// Dark pixels are closed with a 1-pixel-wide vertical element so that
/// a bar broken by print voids still counts once, then each connected
/// blob is one bar.
pub fn count_bars(raster: &Raster, config: &GeometryConfig) -> usize {
    let mask = threshold_inverse_u8(&raster.luminance(), config.bar_count_cutoff);
    let kernel = RectKernel::new(1, config.bar_count_kernel_height);
    let closed = morphological_closing(&mask, kernel);
    connected_components(&closed).len()
}
