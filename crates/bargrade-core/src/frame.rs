use ndarray::{s, Array2, Array3};
use serde::{Deserialize, Serialize};

use crate::consts::{LUMINANCE_B_MILLI, LUMINANCE_G_MILLI, LUMINANCE_R_MILLI, RGB_CHANNELS};
use crate::error::{GraderError, Result};
use crate::geometry::crop::CropRect;

/// One byte plane of a camera frame.
///
/// `row_stride` is the distance in bytes between rows, `pixel_stride` the
/// distance between horizontally adjacent samples (1 for planar layouts,
/// 2 for interleaved chroma such as NV21).
#[derive(Clone, Copy, Debug)]
pub struct Plane<'a> {
    pub data: &'a [u8],
    pub row_stride: usize,
    pub pixel_stride: usize,
}

impl<'a> Plane<'a> {
    /// A tightly packed plane: one byte per sample, no row padding.
    pub fn packed(data: &'a [u8], width: usize) -> Self {
        Self {
            data,
            row_stride: width,
            pixel_stride: 1,
        }
    }

    /// Minimum byte length needed to hold `width` x `height` samples, or
    /// `None` if that length does not fit in `usize`.
    pub fn required_len(&self, width: usize, height: usize) -> Option<usize> {
        if width == 0 || height == 0 {
            return Some(0);
        }
        let rows = (height - 1).checked_mul(self.row_stride)?;
        let cols = (width - 1).checked_mul(self.pixel_stride)?;
        rows.checked_add(cols)?.checked_add(1)
    }

    #[inline]
    pub(crate) fn sample(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.row_stride + x * self.pixel_stride]
    }
}

/// Frame orientation reported by the camera, as a clockwise rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Parse a rotation in degrees. Any multiple of 90 is accepted,
    /// including negative values and full turns.
    pub fn from_degrees(degrees: i32) -> Result<Self> {
        if degrees % 90 != 0 {
            return Err(GraderError::MalformedInput(format!(
                "rotation {degrees} is not a multiple of 90 degrees"
            )));
        }
        Ok(match degrees.rem_euclid(360) {
            0 => Self::Deg0,
            90 => Self::Deg90,
            180 => Self::Deg180,
            _ => Self::Deg270,
        })
    }

    pub fn degrees(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// A YUV 4:2:0 camera frame borrowed from the frame source.
///
/// Chroma planes are subsampled 2x2: the chroma sample for pixel `(x, y)`
/// lives at `(x / 2, y / 2)`.
#[derive(Clone, Copy, Debug)]
pub struct RawFrame<'a> {
    pub y: Plane<'a>,
    pub u: Plane<'a>,
    pub v: Plane<'a>,
    pub width: usize,
    pub height: usize,
    pub rotation: Rotation,
}

impl<'a> RawFrame<'a> {
    /// Width and height of the chroma planes.
    pub fn chroma_dims(&self) -> (usize, usize) {
        (self.width.div_ceil(2), self.height.div_ceil(2))
    }
}

/// An 8-bit RGB image.
///
/// Pixel data is row-major with shape = (height, width, 3).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pub data: Array3<u8>,
}

impl Raster {
    /// Wrap an existing `(height, width, 3)` array.
    pub fn new(data: Array3<u8>) -> Result<Self> {
        let (h, w, c) = data.dim();
        if c != RGB_CHANNELS {
            return Err(GraderError::MalformedInput(format!(
                "raster must have {RGB_CHANNELS} channels, got {c}"
            )));
        }
        if h == 0 || w == 0 {
            return Err(GraderError::MalformedInput(format!(
                "raster dimensions {w}x{h} are empty"
            )));
        }
        Ok(Self { data })
    }

    /// A raster filled with a single color.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        Self::from_fn(width, height, |_, _| rgb)
    }

    /// Build a raster by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> [u8; 3]) -> Self {
        let mut data = Array3::<u8>::zeros((height, width, RGB_CHANNELS));
        for row in 0..height {
            for col in 0..width {
                let px = f(col, row);
                data[[row, col, 0]] = px[0];
                data[[row, col, 1]] = px[1];
                data[[row, col, 2]] = px[2];
            }
        }
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        [
            self.data[[y, x, 0]],
            self.data[[y, x, 1]],
            self.data[[y, x, 2]],
        ]
    }

    pub fn put_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        self.data[[y, x, 0]] = rgb[0];
        self.data[[y, x, 1]] = rgb[1];
        self.data[[y, x, 2]] = rgb[2];
    }

    /// Copy out the pixels inside `rect`. The caller is responsible for
    /// passing a rectangle that lies inside the raster.
    pub fn crop(&self, rect: &CropRect) -> Raster {
        let x0 = rect.x as usize;
        let y0 = rect.y as usize;
        let x1 = x0 + rect.width as usize;
        let y1 = y0 + rect.height as usize;
        Raster {
            data: self.data.slice(s![y0..y1, x0..x1, ..]).to_owned(),
        }
    }

    /// Integer BT.601 luminance of every pixel, rounded down.
    pub fn luminance(&self) -> Array2<u8> {
        let (h, w, _) = self.data.dim();
        Array2::from_shape_fn((h, w), |(row, col)| {
            luminance(
                self.data[[row, col, 0]],
                self.data[[row, col, 1]],
                self.data[[row, col, 2]],
            )
        })
    }
}

/// `floor(0.299 R + 0.587 G + 0.114 B)`, computed exactly.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let sum = LUMINANCE_R_MILLI * r as u32 + LUMINANCE_G_MILLI * g as u32 + LUMINANCE_B_MILLI * b as u32;
    (sum / 1000) as u8
}
