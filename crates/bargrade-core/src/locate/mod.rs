pub mod detector;
pub mod format;

pub use detector::{DetectionOutcome, Detector, FnDetector, StaticDetector};
pub use format::BarcodeFormat;

use tracing::debug;

use crate::error::Result;
use crate::frame::Raster;
use crate::geometry::Quad;

/// A symbol the detector found, with its corners validated.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub value: Option<String>,
    pub format: BarcodeFormat,
    pub quad: Quad,
}

/// Ask the detector for a symbol in `raster` and adapt its answer.
///
/// `Ok(None)` means nothing was found. A corner set that is not exactly
/// four points is an `InvalidGeometry` error.
pub async fn locate<D: Detector>(detector: &D, raster: &Raster) -> Result<Option<Location>> {
    match detector.detect(raster).await? {
        DetectionOutcome::NotFound => Ok(None),
        DetectionOutcome::Found {
            value,
            format,
            corners,
        } => {
            let quad = Quad::try_from(corners)?;
            debug!(%format, corners = ?quad.points, "Symbol located");
            Ok(Some(Location {
                value,
                format,
                quad,
            }))
        }
    }
}
