use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_OVERLAY_STROKE;
use crate::frame::Raster;
use crate::geometry::{Point, Quad};

/// How a symbol outline is drawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub color: [u8; 3],
    /// Stroke width in pixels.
    pub stroke: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: [255, 0, 0],
            stroke: DEFAULT_OVERLAY_STROKE,
        }
    }
}

/// Return a copy of `raster` with the closed outline of `quad` drawn on it.
///
/// Corners are in the raster's coordinates; parts of the outline that fall
/// outside the raster are clipped.
pub fn draw_quad(raster: &Raster, quad: &Quad, style: &OverlayStyle) -> Raster {
    let mut out = raster.clone();
    let pts = &quad.points;
    for i in 0..pts.len() {
        let a = pts[i];
        let b = pts[(i + 1) % pts.len()];
        draw_line(&mut out, a, b, style);
    }
    out
}

/// Bresenham line with a square brush of `style.stroke` pixels.
fn draw_line(raster: &mut Raster, a: Point, b: Point, style: &OverlayStyle) {
    let (mut x, mut y) = (a.x as i64, a.y as i64);
    let (x1, y1) = (b.x as i64, b.y as i64);
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        stamp(raster, x, y, style);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn stamp(raster: &mut Raster, cx: i64, cy: i64, style: &OverlayStyle) {
    let stroke = style.stroke.max(1) as i64;
    let lo = -(stroke - 1) / 2;
    let hi = lo + stroke;
    let (w, h) = (raster.width() as i64, raster.height() as i64);

    for y in (cy + lo)..(cy + hi) {
        for x in (cx + lo)..(cx + hi) {
            if (0..w).contains(&x) && (0..h).contains(&y) {
                raster.put_pixel(x as usize, y as usize, style.color);
            }
        }
    }
}

/// Map quad corners from image space onto a preview surface that shows the
/// whole image scaled uniformly and centered (letterboxed).
pub fn map_to_preview(
    quad: &Quad,
    image_width: u32,
    image_height: u32,
    preview_width: u32,
    preview_height: u32,
) -> [(f32, f32); 4] {
    let iw = image_width.max(1) as f32;
    let ih = image_height.max(1) as f32;
    let pw = preview_width as f32;
    let ph = preview_height as f32;

    let scale = (pw / iw).min(ph / ih);
    let offset_x = (pw - iw * scale) / 2.0;
    let offset_y = (ph - ih * scale) / 2.0;

    quad.points
        .map(|p| (offset_x + p.x as f32 * scale, offset_y + p.y as f32 * scale))
}
