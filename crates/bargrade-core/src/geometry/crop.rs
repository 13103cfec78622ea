use serde::{Deserialize, Serialize};

use crate::error::{GraderError, Result};
use crate::frame::Raster;

use super::quad::Quad;

/// A rectangle in image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Build a rectangle from half-open bounds `[x0, x1) x [y0, y1)`,
    /// clamped to a `src_w` x `src_h` image. Fails when nothing remains.
    pub fn clamped(x0: i64, y0: i64, x1: i64, y1: i64, src_w: u32, src_h: u32) -> Result<CropRect> {
        let cx0 = x0.clamp(0, src_w as i64);
        let cy0 = y0.clamp(0, src_h as i64);
        let cx1 = x1.clamp(0, src_w as i64);
        let cy1 = y1.clamp(0, src_h as i64);

        if cx1 <= cx0 || cy1 <= cy0 {
            return Err(GraderError::InvalidGeometry(format!(
                "region [{x0},{x1}) x [{y0},{y1}) does not overlap the {src_w}x{src_h} image"
            )));
        }

        Ok(CropRect {
            x: cx0 as u32,
            y: cy0 as u32,
            width: (cx1 - cx0) as u32,
            height: (cy1 - cy0) as u32,
        })
    }

    /// Offset a rectangle expressed in this rectangle's coordinates back
    /// into the parent image's coordinates.
    pub fn offset_child(&self, child: &CropRect) -> CropRect {
        CropRect {
            x: self.x + child.x,
            y: self.y + child.y,
            width: child.width,
            height: child.height,
        }
    }
}

/// The padded region around a located symbol.
#[derive(Clone, Debug)]
pub struct LooseCrop {
    pub rect: CropRect,
    pub raster: Raster,
}

/// Crop the corner bounding box expanded by `padding` pixels on every side,
/// clamped to the raster.
pub fn loose_crop(raster: &Raster, quad: &Quad, padding: i32) -> Result<LooseCrop> {
    let (min_x, min_y, max_x, max_y) = quad.bounds();
    let pad = padding as i64;
    let rect = CropRect::clamped(
        min_x as i64 - pad,
        min_y as i64 - pad,
        max_x as i64 + pad,
        max_y as i64 + pad,
        raster.width() as u32,
        raster.height() as u32,
    )?;
    Ok(LooseCrop {
        rect,
        raster: raster.crop(&rect),
    })
}
