use ndarray::Array2;

/// Rectangular structuring element, `width` columns by `height` rows,
/// anchored at its center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectKernel {
    pub width: usize,
    pub height: usize,
}

impl RectKernel {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Offsets covered by the kernel along each axis, relative to the anchor.
    fn extents(&self) -> ((isize, isize), (isize, isize)) {
        let left = (self.width / 2) as isize;
        let right = (self.width - 1) as isize - left;
        let up = (self.height / 2) as isize;
        let down = (self.height - 1) as isize - up;
        ((-up, down), (-left, right))
    }
}

/// Morphological closing (dilation followed by erosion).
///
/// Fills gaps narrower than the kernel, e.g. joins the broken segments of
/// one bar when the kernel is tall and thin.
pub fn morphological_closing(mask: &Array2<bool>, kernel: RectKernel) -> Array2<bool> {
    let dilated = dilate(mask, kernel);
    erode(&dilated, kernel)
}

/// Binary dilation: true if ANY in-bounds pixel under the kernel is true.
pub fn dilate(mask: &Array2<bool>, kernel: RectKernel) -> Array2<bool> {
    apply(mask, kernel, false)
}

/// Binary erosion: true only if ALL in-bounds pixels under the kernel are true.
/// Pixels outside the image never erode the mask.
pub fn erode(mask: &Array2<bool>, kernel: RectKernel) -> Array2<bool> {
    apply(mask, kernel, true)
}

fn apply(mask: &Array2<bool>, kernel: RectKernel, all: bool) -> Array2<bool> {
    let (h, w) = mask.dim();
    let ((dr0, dr1), (dc0, dc1)) = kernel.extents();

    Array2::from_shape_fn((h, w), |(row, col)| {
        let r0 = (row as isize + dr0).max(0) as usize;
        let r1 = (row as isize + dr1).min(h as isize - 1) as usize;
        let c0 = (col as isize + dc0).max(0) as usize;
        let c1 = (col as isize + dc1).min(w as isize - 1) as usize;

        let mut window = (r0..=r1).flat_map(|r| (c0..=c1).map(move |c| (r, c)));
        if all {
            window.all(|(r, c)| mask[[r, c]])
        } else {
            window.any(|(r, c)| mask[[r, c]])
        }
    })
}
