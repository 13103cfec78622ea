pub mod grade;
pub mod metrics;
pub mod sharpness;

pub use grade::{assign_grade, grade_region, Grade, GradingThresholds, TierThresholds};
pub use metrics::{compute_metrics, QualityMetrics};
pub use sharpness::{laplacian_variance, SharpnessConfig, SharpnessGate};
