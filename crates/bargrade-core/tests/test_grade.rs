mod common;

use approx::assert_relative_eq;
use bargrade_core::error::GraderError;
use bargrade_core::frame::Raster;
use bargrade_core::quality::{
    assign_grade, compute_metrics, grade_region, Grade, GradingThresholds, QualityMetrics,
};

use common::{bar_raster, gray, BarBlock};

fn metrics(contrast_range: u8, edge_density: usize, noise_count: usize) -> QualityMetrics {
    QualityMetrics {
        contrast_range,
        edge_density,
        noise_count,
        mean_luminance: 128.0,
        width: 100,
        height: 100,
    }
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

#[test]
fn test_metrics_of_stripes() {
    // Alternating black and white columns: every horizontal pair is an edge,
    // no vertical pair differs.
    let raster = Raster::from_fn(10, 4, |x, _| if x % 2 == 0 { [0; 3] } else { [255; 3] });
    let m = compute_metrics(&raster, 50, 15);
    assert_eq!(m.contrast_range, 255);
    assert_eq!(m.edge_density, 9 * 4);
    assert_eq!(m.noise_count, 0);
    assert_relative_eq!(m.mean_luminance, 127.5);
    assert_relative_eq!(m.contrast(), 1.0);
    assert_eq!(m.pixel_count(), 40);
}

#[test]
fn test_metrics_deltas_are_strict() {
    let raster = Raster::from_fn(2, 1, |x, _| if x == 0 { [100; 3] } else { [150; 3] });
    assert_eq!(compute_metrics(&raster, 50, 15).edge_density, 0);
    assert_eq!(compute_metrics(&raster, 49, 15).edge_density, 1);
}

#[test]
fn test_noise_skips_first_row_and_column() {
    // Rows alternate 0/100; every vertical pair differs by 100.
    let raster = Raster::from_fn(5, 4, |_, y| if y % 2 == 0 { [0; 3] } else { [100; 3] });
    let m = compute_metrics(&raster, 50, 15);
    // Rows 1..4 times columns 1..5.
    assert_eq!(m.noise_count, 3 * 4);
    assert_eq!(m.edge_density, 0);
}

#[test]
fn test_metrics_use_luminance() {
    // Pure green is brighter than pure blue.
    let raster = Raster::from_fn(2, 1, |x, _| if x == 0 { [0, 255, 0] } else { [0, 0, 255] });
    let m = compute_metrics(&raster, 50, 15);
    // floor(0.587 * 255) - floor(0.114 * 255) = 149 - 29
    assert_eq!(m.contrast_range, 120);
    assert_eq!(m.edge_density, 1);
}

// ---------------------------------------------------------------------------
// Tiers
// ---------------------------------------------------------------------------

#[test]
fn test_assign_each_tier() {
    let t = GradingThresholds::default();
    assert_eq!(assign_grade(&metrics(255, 1000, 0), &t), Grade::A);
    assert_eq!(assign_grade(&metrics(100, 150, 0), &t), Grade::B);
    assert_eq!(assign_grade(&metrics(50, 60, 0), &t), Grade::C);
    assert_eq!(assign_grade(&metrics(20, 60, 0), &t), Grade::D);
}

#[test]
fn test_tier_boundaries_are_strict() {
    let t = GradingThresholds::default();
    // Exactly 200 edges is not enough for A.
    assert_eq!(assign_grade(&metrics(255, 200, 0), &t), Grade::B);
    // Range of exactly 128 is not enough for A.
    assert_eq!(assign_grade(&metrics(128, 1000, 0), &t), Grade::B);
    // 10_000 pixels / 100 = 100 noisy pairs already fails A.
    assert_eq!(assign_grade(&metrics(255, 1000, 100), &t), Grade::B);
    assert_eq!(assign_grade(&metrics(255, 1000, 99), &t), Grade::A);
}

#[test]
fn test_noisy_region_drops_to_d() {
    let t = GradingThresholds::default();
    // 10_000 / 30 = 333; anything at or above fails every tier.
    assert_eq!(assign_grade(&metrics(255, 1000, 333), &t), Grade::D);
    assert_eq!(assign_grade(&metrics(255, 1000, 332), &t), Grade::C);
}

#[test]
fn test_grade_is_monotone_in_metrics() {
    let t = GradingThresholds::default();
    let mut last = Grade::F;
    for range in (0..=255u8).step_by(5) {
        let g = assign_grade(&metrics(range, 1000, 0), &t);
        assert!(g >= last, "range {range}: {g} dropped below {last}");
        last = g;
    }
    assert_eq!(last, Grade::A);
}

#[test]
fn test_grade_order_and_display() {
    assert!(Grade::A > Grade::B);
    assert!(Grade::D > Grade::F);
    assert_eq!(Grade::C.to_string(), "C");
    assert_eq!(Grade::F.as_str(), "F");
}

#[test]
fn test_grade_region_none_is_f() {
    let (grade, metrics) = grade_region(None, &GradingThresholds::default());
    assert_eq!(grade, Grade::F);
    assert!(metrics.is_none());
}

#[test]
fn test_grade_region_flat_is_d() {
    let region = gray(40, 40, 30);
    let (grade, metrics) = grade_region(Some(&region), &GradingThresholds::default());
    assert_eq!(grade, Grade::D);
    assert_eq!(metrics.unwrap().contrast_range, 0);
}

#[test]
fn test_grade_region_crisp_bars_is_a() {
    let block = BarBlock::new(0, 0, 80, 30);
    let region = bar_raster(80, 30, block, 0, 255);
    let (grade, metrics) = grade_region(Some(&region), &GradingThresholds::default());
    let metrics = metrics.unwrap();
    assert_eq!(grade, Grade::A, "metrics: {metrics:?}");
    assert_eq!(metrics.noise_count, 0);
}

// ---------------------------------------------------------------------------
// Threshold validation
// ---------------------------------------------------------------------------

#[test]
fn test_default_thresholds_nest() {
    GradingThresholds::default().validate().unwrap();
}

#[test]
fn test_looser_a_tier_rejected() {
    let mut t = GradingThresholds::default();
    t.a.min_edge_density = 10;
    assert!(matches!(t.validate(), Err(GraderError::InvalidConfig(_))));
}

#[test]
fn test_zero_noise_divisor_rejected() {
    let mut t = GradingThresholds::default();
    t.c.noise_divisor = 0;
    assert!(matches!(t.validate(), Err(GraderError::InvalidConfig(_))));
}
