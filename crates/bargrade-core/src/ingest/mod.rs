pub mod rotate;
pub mod yuv;

pub use rotate::rotate;
pub use yuv::yuv_to_rgb;

use crate::error::Result;
use crate::frame::{RawFrame, Raster};

/// Decode a camera frame into an upright RGB raster.
pub fn ingest_frame(frame: &RawFrame<'_>) -> Result<Raster> {
    let raster = yuv::frame_to_raster(frame)?;
    Ok(rotate(&raster, frame.rotation))
}
