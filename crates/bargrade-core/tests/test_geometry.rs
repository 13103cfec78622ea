mod common;

use bargrade_core::error::GraderError;
use bargrade_core::frame::Raster;
use bargrade_core::geometry::{isolate_bars, loose_crop, CropRect, GeometryConfig, Point, Quad};

use common::{bar_raster, gray, BarBlock};

fn rect_quad(x0: i32, y0: i32, x1: i32, y1: i32) -> Quad {
    Quad::new([
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ])
}

fn with_blocks(width: usize, height: usize, blocks: &[(usize, usize, usize, usize)]) -> Raster {
    Raster::from_fn(width, height, |x, y| {
        let inside = blocks
            .iter()
            .any(|&(x0, y0, x1, y1)| (x0..x1).contains(&x) && (y0..y1).contains(&y));
        if inside {
            [0, 0, 0]
        } else {
            [255, 255, 255]
        }
    })
}

// ---------------------------------------------------------------------------
// Quad
// ---------------------------------------------------------------------------

#[test]
fn test_quad_requires_four_points() {
    let three = vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)];
    let err = Quad::try_from(three).unwrap_err();
    assert!(matches!(err, GraderError::InvalidGeometry(_)));

    let five = vec![Point::new(0, 0); 5];
    assert!(Quad::try_from(five.as_slice()).is_err());

    let four = vec![Point::new(3, 4); 4];
    assert!(Quad::try_from(four).is_ok());
}

#[test]
fn test_quad_bounds_ignore_winding() {
    let quad = Quad::new([
        Point::new(40, 12),
        Point::new(8, 50),
        Point::new(39, 48),
        Point::new(10, 10),
    ]);
    assert_eq!(quad.bounds(), (8, 10, 40, 50));
    assert_eq!(quad.translated(8, 10).bounds(), (0, 0, 32, 40));
}

// ---------------------------------------------------------------------------
// Loose crop
// ---------------------------------------------------------------------------

#[test]
fn test_loose_crop_pads_bounding_box() {
    let raster = gray(100, 80, 200);
    let crop = loose_crop(&raster, &rect_quad(10, 20, 40, 50), 5).unwrap();
    assert_eq!(
        crop.rect,
        CropRect {
            x: 5,
            y: 15,
            width: 40,
            height: 40
        }
    );
    assert_eq!((crop.raster.width(), crop.raster.height()), (40, 40));
}

#[test]
fn test_loose_crop_clamps_to_image() {
    let raster = gray(100, 80, 200);
    let crop = loose_crop(&raster, &rect_quad(2, 3, 30, 30), 5).unwrap();
    assert_eq!(crop.rect.x, 0);
    assert_eq!(crop.rect.y, 0);
    assert_eq!(crop.rect.width, 35);
    assert_eq!(crop.rect.height, 35);

    let crop = loose_crop(&raster, &rect_quad(90, 70, 120, 95), 5).unwrap();
    assert_eq!(
        crop.rect,
        CropRect {
            x: 85,
            y: 65,
            width: 15,
            height: 15
        }
    );
}

#[test]
fn test_loose_crop_copies_pixels() {
    let raster = Raster::from_fn(20, 20, |x, y| [x as u8, y as u8, 0]);
    let crop = loose_crop(&raster, &rect_quad(5, 6, 10, 12), 1).unwrap();
    assert_eq!(crop.rect.x, 4);
    assert_eq!(crop.rect.y, 5);
    assert_eq!(crop.raster.pixel(0, 0), [4, 5, 0]);
    assert_eq!(crop.raster.pixel(2, 3), [6, 8, 0]);
}

#[test]
fn test_loose_crop_outside_image_fails() {
    let raster = gray(100, 80, 200);
    let err = loose_crop(&raster, &rect_quad(200, 200, 260, 240), 5).unwrap_err();
    assert!(matches!(err, GraderError::InvalidGeometry(_)), "got {err:?}");

    let err = loose_crop(&raster, &rect_quad(-50, -50, -20, -10), 5).unwrap_err();
    assert!(matches!(err, GraderError::InvalidGeometry(_)), "got {err:?}");
}

#[test]
fn test_offset_child_maps_to_parent() {
    let parent = CropRect {
        x: 10,
        y: 20,
        width: 50,
        height: 40,
    };
    let child = CropRect {
        x: 5,
        y: 6,
        width: 7,
        height: 8,
    };
    assert_eq!(
        parent.offset_child(&child),
        CropRect {
            x: 15,
            y: 26,
            width: 7,
            height: 8
        }
    );
}

// ---------------------------------------------------------------------------
// Bar isolation
// ---------------------------------------------------------------------------

#[test]
fn test_isolate_solid_block() {
    let raster = with_blocks(120, 60, &[(30, 20, 70, 40)]);
    let rect = isolate_bars(&raster, &GeometryConfig::default()).unwrap();
    assert_eq!(
        rect,
        CropRect {
            x: 30,
            y: 20,
            width: 40,
            height: 20
        }
    );
}

#[test]
fn test_isolate_prefers_largest_blob() {
    // A digit-sized mark next to the symbol must not win.
    let raster = with_blocks(160, 80, &[(10, 10, 20, 20), (50, 20, 140, 60)]);
    let rect = isolate_bars(&raster, &GeometryConfig::default()).unwrap();
    assert_eq!(rect.x, 50);
    assert_eq!(rect.width, 90);
    assert!(rect.y >= 20 && rect.y + rect.height <= 60, "got {rect:?}");
}

#[test]
fn test_isolate_merges_thin_gaps() {
    let block = BarBlock::new(20, 10, 80, 50);
    let raster = bar_raster(100, 60, block, 0, 255);
    let rect = isolate_bars(&raster, &GeometryConfig::default()).unwrap();
    // Last pattern column is a gap, so the blob ends one pixel early.
    assert_eq!(rect.x, 20);
    assert_eq!(rect.x + rect.width, 79);
    assert!(rect.height >= 36, "bars should form one blob, got {rect:?}");
}

#[test]
fn test_isolate_light_region_is_none() {
    let raster = gray(50, 50, 180);
    assert!(isolate_bars(&raster, &GeometryConfig::default()).is_none());
}

#[test]
fn test_isolate_respects_cutoff() {
    let raster = with_blocks(60, 60, &[(20, 20, 40, 40)]);
    let raster = Raster::from_fn(60, 60, |x, y| {
        if raster.pixel(x, y)[0] == 0 {
            [120, 120, 120]
        } else {
            [250, 250, 250]
        }
    });
    assert!(isolate_bars(&raster, &GeometryConfig::default()).is_none());

    let config = GeometryConfig {
        bar_cutoff: 130,
        ..GeometryConfig::default()
    };
    assert!(isolate_bars(&raster, &config).is_some());
}
