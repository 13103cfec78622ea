use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{GraderError, Result};
use crate::frame::{Plane, RawFrame, Rotation};

/// Memory-mapped file of back-to-back I420 frames (full Y plane, then
/// quarter-size U and V planes), as written by common capture tools.
pub struct YuvStream {
    mmap: Mmap,
    width: usize,
    height: usize,
    rotation: Rotation,
    luma_len: usize,
    chroma_len: usize,
    frame_size: usize,
}

/// Plane sizes of one I420 frame as `(luma, chroma, total)` bytes, or `None`
/// when the total does not fit in `usize`.
fn i420_layout(width: usize, height: usize) -> Option<(usize, usize, usize)> {
    let luma = width.checked_mul(height)?;
    let chroma = width.div_ceil(2).checked_mul(height.div_ceil(2))?;
    let total = chroma.checked_mul(2)?.checked_add(luma)?;
    Some((luma, chroma, total))
}

impl YuvStream {
    /// Open a raw stream. The file must hold a whole number of frames.
    pub fn open(path: &Path, width: usize, height: usize, rotation: Rotation) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GraderError::MalformedInput(format!(
                "stream dimensions {width}x{height} are empty"
            )));
        }
        let (luma_len, chroma_len, frame_size) =
            i420_layout(width, height).ok_or_else(|| {
                GraderError::MalformedInput(format!(
                    "a {width}x{height} I420 frame is too large to address"
                ))
            })?;

        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };

        if mmap.len() % frame_size != 0 {
            return Err(GraderError::MalformedInput(format!(
                "stream holds {} bytes, not a multiple of the {frame_size}-byte {width}x{height} frame",
                mmap.len()
            )));
        }
        Ok(Self {
            mmap,
            width,
            height,
            rotation,
            luma_len,
            chroma_len,
            frame_size,
        })
    }

    /// Bytes per I420 frame.
    pub fn frame_byte_size(&self) -> usize {
        self.frame_size
    }

    pub fn frame_count(&self) -> usize {
        self.mmap.len() / self.frame_byte_size()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Borrow one frame straight out of the mapping.
    pub fn frame(&self, index: usize) -> Result<RawFrame<'_>> {
        let total = self.frame_count();
        if index >= total {
            return Err(GraderError::FrameIndexOutOfRange { index, total });
        }

        let cw = self.width.div_ceil(2);
        let start = index * self.frame_size;
        let bytes = &self.mmap[start..start + self.frame_size];
        let (y, rest) = bytes.split_at(self.luma_len);
        let (u, v) = rest.split_at(self.chroma_len);

        Ok(RawFrame {
            y: Plane::packed(y, self.width),
            u: Plane::packed(u, cw),
            v: Plane::packed(v, cw),
            width: self.width,
            height: self.height,
            rotation: self.rotation,
        })
    }

    /// Iterator over all frames, in file order.
    pub fn frames(&self) -> impl Iterator<Item = Result<RawFrame<'_>>> + '_ {
        (0..self.frame_count()).map(move |i| self.frame(i))
    }
}
