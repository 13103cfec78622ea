use serde::{Deserialize, Serialize};

use crate::error::{GraderError, Result};

/// Integer pixel coordinate. May lie outside the image it refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// The four corners of a located symbol, in the order the detector
/// reported them. No winding order is implied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quad {
    pub points: [Point; 4],
}

impl Quad {
    pub fn new(points: [Point; 4]) -> Self {
        Self { points }
    }

    /// Inclusive bounding box as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        let xs = self.points.iter().map(|p| p.x);
        let ys = self.points.iter().map(|p| p.y);
        (
            xs.clone().min().unwrap_or(0),
            ys.clone().min().unwrap_or(0),
            xs.max().unwrap_or(0),
            ys.max().unwrap_or(0),
        )
    }

    /// Shift every corner by `(-dx, -dy)`, e.g. into a crop's coordinates.
    pub fn translated(&self, dx: i32, dy: i32) -> Quad {
        Quad {
            points: self.points.map(|p| Point::new(p.x - dx, p.y - dy)),
        }
    }
}

impl TryFrom<&[Point]> for Quad {
    type Error = GraderError;

    fn try_from(points: &[Point]) -> Result<Self> {
        let points: [Point; 4] = points.try_into().map_err(|_| {
            GraderError::InvalidGeometry(format!(
                "expected 4 corner points, got {}",
                points.len()
            ))
        })?;
        Ok(Quad { points })
    }
}

impl TryFrom<Vec<Point>> for Quad {
    type Error = GraderError;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        Quad::try_from(points.as_slice())
    }
}
