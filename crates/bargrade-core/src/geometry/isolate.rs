use tracing::debug;

use crate::filters::gaussian_blur::gaussian_blur_sized;
use crate::filters::threshold::threshold_inverse;
use crate::frame::Raster;

use super::components::connected_components;
use super::config::GeometryConfig;
use super::crop::CropRect;

/// Find the bar region inside a loose crop.
///
/// Pipeline: luminance -> Gaussian blur -> inverse binary threshold ->
/// connected components -> bounding box of the largest dark blob.
/// The quiet zone and the human-readable digits fall outside that blob.
///
/// Returns `None` when no pixel is dark enough, i.e. the region can't be graded.
pub fn isolate_bars(raster: &Raster, config: &GeometryConfig) -> Option<CropRect> {
    let gray = raster.luminance().mapv(|v| v as f32);
    let blurred = gaussian_blur_sized(&gray, config.blur_sigma, config.blur_radius);
    let mask = threshold_inverse(&blurred, config.bar_cutoff as f32);

    let components = connected_components(&mask);
    let largest = components.first()?;

    debug!(
        blobs = components.len(),
        area = largest.area,
        "Isolated bar region"
    );
    Some(largest.bounding_rect())
}
