use std::future::Future;

use crate::error::Result;
use crate::frame::Raster;
use crate::geometry::Point;

use super::format::BarcodeFormat;

/// What a detector reports for one raster.
#[derive(Clone, Debug, PartialEq)]
pub enum DetectionOutcome {
    NotFound,
    Found {
        /// Decoded payload, if the detector could read it.
        value: Option<String>,
        format: BarcodeFormat,
        /// Corner points as reported. Normally four, but not trusted.
        corners: Vec<Point>,
    },
}

/// Barcode locating/decoding capability supplied by the caller.
///
/// The returned future resolves exactly once, to an outcome or an error.
/// Implementations may do their work synchronously and return a ready
/// future.
pub trait Detector: Send + Sync {
    fn detect(&self, raster: &Raster) -> impl Future<Output = Result<DetectionOutcome>> + Send;
}

/// Detector that reports the same outcome for every raster.
///
/// Useful when the symbol position is already known (manual annotation,
/// fixtures) or as a stand-in during tests.
#[derive(Clone, Debug)]
pub struct StaticDetector {
    outcome: DetectionOutcome,
}

impl StaticDetector {
    pub fn new(outcome: DetectionOutcome) -> Self {
        Self { outcome }
    }

    pub fn found(value: Option<String>, format: BarcodeFormat, corners: Vec<Point>) -> Self {
        Self::new(DetectionOutcome::Found {
            value,
            format,
            corners,
        })
    }

    pub fn not_found() -> Self {
        Self::new(DetectionOutcome::NotFound)
    }
}

impl Detector for StaticDetector {
    fn detect(&self, _raster: &Raster) -> impl Future<Output = Result<DetectionOutcome>> + Send {
        std::future::ready(Ok(self.outcome.clone()))
    }
}

/// Adapts a synchronous closure into a [`Detector`].
pub struct FnDetector<F> {
    f: F,
}

impl<F> FnDetector<F>
where
    F: Fn(&Raster) -> Result<DetectionOutcome> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Detector for FnDetector<F>
where
    F: Fn(&Raster) -> Result<DetectionOutcome> + Send + Sync,
{
    fn detect(&self, raster: &Raster) -> impl Future<Output = Result<DetectionOutcome>> + Send {
        std::future::ready((self.f)(raster))
    }
}
