#![allow(dead_code)]

use bargrade_core::frame::{Plane, RawFrame, Raster, Rotation};
use bargrade_core::geometry::Point;

/// Studio-swing white and black luma; with neutral chroma they decode to
/// RGB 255 and RGB 0.
pub const LUMA_WHITE: u8 = 235;
pub const LUMA_BLACK: u8 = 16;
pub const CHROMA_NEUTRAL: u8 = 128;

/// Owned, tightly packed I420 frame.
pub struct I420Frame {
    pub width: usize,
    pub height: usize,
    pub y: Vec<u8>,
    pub u: Vec<u8>,
    pub v: Vec<u8>,
}

impl I420Frame {
    /// Build a grey frame (neutral chroma) from a luma function of `(x, y)`.
    pub fn from_luma(width: usize, height: usize, f: impl Fn(usize, usize) -> u8) -> Self {
        let mut y = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                y.push(f(col, row));
            }
        }
        let chroma = width.div_ceil(2) * height.div_ceil(2);
        Self {
            width,
            height,
            y,
            u: vec![CHROMA_NEUTRAL; chroma],
            v: vec![CHROMA_NEUTRAL; chroma],
        }
    }

    pub fn raw(&self, rotation: Rotation) -> RawFrame<'_> {
        let cw = self.width.div_ceil(2);
        RawFrame {
            y: Plane::packed(&self.y, self.width),
            u: Plane::packed(&self.u, cw),
            v: Plane::packed(&self.v, cw),
            width: self.width,
            height: self.height,
            rotation,
        }
    }

    /// Y, then U, then V, as stored in a raw `.yuv` file.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.y.len() + self.u.len() + self.v.len());
        out.extend_from_slice(&self.y);
        out.extend_from_slice(&self.u);
        out.extend_from_slice(&self.v);
        out
    }
}

/// Rectangle `[x0, x1) x [y0, y1)` filled with 3-pixel bars separated by
/// 1-pixel gaps, starting with a bar at `x0`.
#[derive(Clone, Copy, Debug)]
pub struct BarBlock {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl BarBlock {
    pub const fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// True where the pattern is inked.
    pub fn is_ink(&self, x: usize, y: usize) -> bool {
        (self.x0..self.x1).contains(&x) && (self.y0..self.y1).contains(&y) && (x - self.x0) % 4 != 3
    }

    /// Corner points of the block, clockwise from top-left.
    pub fn corners(&self) -> Vec<Point> {
        let (x0, y0) = (self.x0 as i32, self.y0 as i32);
        let (x1, y1) = (self.x1 as i32 - 1, self.y1 as i32 - 1);
        vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
    }
}

/// 640x480 symbol block used across the pipeline tests.
pub const SYMBOL: BarBlock = BarBlock::new(100, 200, 300, 260);

/// Grey raster with `block` printed in `ink` on `paper`.
pub fn bar_raster(width: usize, height: usize, block: BarBlock, ink: u8, paper: u8) -> Raster {
    Raster::from_fn(width, height, |x, y| {
        let v = if block.is_ink(x, y) { ink } else { paper };
        [v, v, v]
    })
}

/// Camera frame of `block` printed black on white.
pub fn bar_frame(width: usize, height: usize, block: BarBlock) -> I420Frame {
    I420Frame::from_luma(width, height, |x, y| {
        if block.is_ink(x, y) {
            LUMA_BLACK
        } else {
            LUMA_WHITE
        }
    })
}

pub fn gray(width: usize, height: usize, v: u8) -> Raster {
    Raster::filled(width, height, [v, v, v])
}

/// Checkerboard of `base +- amplitude`.
pub fn checkerboard(width: usize, height: usize, base: u8, amplitude: u8) -> Raster {
    Raster::from_fn(width, height, |x, y| {
        let v = if (x + y) % 2 == 0 {
            base + amplitude
        } else {
            base - amplitude
        };
        [v, v, v]
    })
}
