use ndarray::parallel::prelude::*;
use ndarray::{Array3, Axis};

use crate::consts::{PARALLEL_PIXEL_THRESHOLD, RGB_CHANNELS};
use crate::error::{GraderError, Result};
use crate::frame::{Plane, RawFrame, Raster};

/// Convert one video-range YUV sample to RGB with the usual integer
/// BT.601 coefficients.
#[inline]
pub fn yuv_to_rgb(y: u8, u: u8, v: u8) -> [u8; 3] {
    let c = y as i32 - 16;
    let d = u as i32 - 128;
    let e = v as i32 - 128;

    let r = (298 * c + 409 * e + 128) >> 8;
    let g = (298 * c - 100 * d - 208 * e + 128) >> 8;
    let b = (298 * c + 516 * d + 128) >> 8;

    [
        r.clamp(0, 255) as u8,
        g.clamp(0, 255) as u8,
        b.clamp(0, 255) as u8,
    ]
}

/// Decode a 4:2:0 frame into an RGB raster, without applying rotation.
pub fn frame_to_raster(frame: &RawFrame<'_>) -> Result<Raster> {
    validate(frame)?;

    let (w, h) = (frame.width, frame.height);
    let mut data = Array3::<u8>::zeros((h, w, RGB_CHANNELS));

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        data.axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, mut out)| {
                for col in 0..w {
                    let rgb = convert_pixel(frame, col, row);
                    out[[col, 0]] = rgb[0];
                    out[[col, 1]] = rgb[1];
                    out[[col, 2]] = rgb[2];
                }
            });
    } else {
        for row in 0..h {
            for col in 0..w {
                let rgb = convert_pixel(frame, col, row);
                data[[row, col, 0]] = rgb[0];
                data[[row, col, 1]] = rgb[1];
                data[[row, col, 2]] = rgb[2];
            }
        }
    }

    Ok(Raster { data })
}

#[inline]
fn convert_pixel(frame: &RawFrame<'_>, x: usize, y: usize) -> [u8; 3] {
    let luma = frame.y.sample(x, y);
    let u = frame.u.sample(x / 2, y / 2);
    let v = frame.v.sample(x / 2, y / 2);
    yuv_to_rgb(luma, u, v)
}

fn validate(frame: &RawFrame<'_>) -> Result<()> {
    if frame.width == 0 || frame.height == 0 {
        return Err(GraderError::MalformedInput(format!(
            "frame dimensions {}x{} are empty",
            frame.width, frame.height
        )));
    }

    let (cw, ch) = frame.chroma_dims();
    check_plane("Y", &frame.y, frame.width, frame.height)?;
    check_plane("U", &frame.u, cw, ch)?;
    check_plane("V", &frame.v, cw, ch)?;
    Ok(())
}

fn check_plane(name: &str, plane: &Plane<'_>, width: usize, height: usize) -> Result<()> {
    if plane.pixel_stride == 0 {
        return Err(GraderError::MalformedInput(format!(
            "{name} plane has zero pixel stride"
        )));
    }
    let overflow = || {
        GraderError::MalformedInput(format!(
            "{name} plane strides ({}, {}) overflow for {width}x{height} samples",
            plane.row_stride, plane.pixel_stride
        ))
    };
    let row_span = (width - 1)
        .checked_mul(plane.pixel_stride)
        .and_then(|n| n.checked_add(1))
        .ok_or_else(overflow)?;
    if height > 1 && plane.row_stride < row_span {
        return Err(GraderError::MalformedInput(format!(
            "{name} plane row stride {} is shorter than a {width}-sample row",
            plane.row_stride
        )));
    }
    let needed = plane.required_len(width, height).ok_or_else(overflow)?;
    if plane.data.len() < needed {
        return Err(GraderError::MalformedInput(format!(
            "{name} plane holds {} bytes, {width}x{height} samples need {needed}",
            plane.data.len()
        )));
    }
    Ok(())
}
