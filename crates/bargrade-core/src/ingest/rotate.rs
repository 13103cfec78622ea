use ndarray::s;

use crate::frame::{Raster, Rotation};

/// Rotate a raster clockwise by a multiple of 90 degrees.
///
/// This is an exact pixel permutation; for 90 and 270 the output has
/// width and height swapped.
pub fn rotate(raster: &Raster, rotation: Rotation) -> Raster {
    let src = raster.data.view();
    let rotated = match rotation {
        Rotation::Deg0 => return raster.clone(),
        // out(c, H-1-r) = in(r, c)
        Rotation::Deg90 => src.permuted_axes([1, 0, 2]).slice_move(s![.., ..;-1, ..]),
        Rotation::Deg180 => src.slice_move(s![..;-1, ..;-1, ..]),
        // out(W-1-c, r) = in(r, c)
        Rotation::Deg270 => src.permuted_axes([1, 0, 2]).slice_move(s![..;-1, .., ..]),
    };
    Raster {
        data: rotated.as_standard_layout().into_owned(),
    }
}
