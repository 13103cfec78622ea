pub mod config;
pub mod latch;
mod orchestrator;
mod types;

pub use config::{GraderConfig, LatchPolicy};
pub use latch::{CaptureLatch, LatchGuard, LatchState};
pub use orchestrator::GradingPipeline;
pub use types::{FrameOutcome, GradingResult, PipelineStage, Rejection};
