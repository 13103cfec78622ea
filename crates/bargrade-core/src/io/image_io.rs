use std::path::Path;

use image::RgbImage;
use ndarray::Array3;

use crate::consts::RGB_CHANNELS;
use crate::error::{GraderError, Result};
use crate::frame::Raster;

impl Raster {
    /// Copy an `image` RGB buffer into a raster.
    pub fn from_rgb_image(img: &RgbImage) -> Result<Raster> {
        let (w, h) = img.dimensions();
        let data = Array3::from_shape_vec((h as usize, w as usize, RGB_CHANNELS), img.as_raw().clone())
            .map_err(|e| GraderError::MalformedInput(format!("image buffer shape: {e}")))?;
        Raster::new(data)
    }

    /// Copy the raster into an `image` RGB buffer.
    pub fn to_rgb_image(&self) -> RgbImage {
        let (w, h) = (self.width() as u32, self.height() as u32);
        let mut img = RgbImage::new(w, h);
        for (x, y, px) in img.enumerate_pixels_mut() {
            px.0 = self.pixel(x as usize, y as usize);
        }
        img
    }
}

/// Load any image format the `image` crate understands as an RGB raster.
pub fn load_raster(path: &Path) -> Result<Raster> {
    let img = image::open(path)?;
    Raster::from_rgb_image(&img.to_rgb8())
}

/// Save a raster, choosing the format from the file extension.
pub fn save_raster(raster: &Raster, path: &Path) -> Result<()> {
    raster.to_rgb_image().save(path)?;
    Ok(())
}
