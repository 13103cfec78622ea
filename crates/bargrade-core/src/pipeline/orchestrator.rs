use tracing::{debug, info, warn};

use crate::error::{GraderError, Result};
use crate::frame::{RawFrame, Raster};
use crate::geometry::{count_bars, isolate_bars, loose_crop};
use crate::ingest::ingest_frame;
use crate::locate::{locate, Detector, Location};
use crate::quality::{grade_region, Grade, SharpnessGate};

use super::config::{GraderConfig, LatchPolicy};
use super::latch::{CaptureLatch, LatchGuard, LatchState};
use super::types::{FrameOutcome, GradingResult, PipelineStage, Rejection};

/// Frame-to-grade pipeline bound to one detector and one configuration.
///
/// The pipeline holds no session state; the caller owns a [`CaptureLatch`]
/// per scanning session and passes it to every call.
pub struct GradingPipeline<D> {
    config: GraderConfig,
    gate: SharpnessGate,
    detector: D,
}

impl<D: Detector> GradingPipeline<D> {
    pub fn new(config: GraderConfig, detector: D) -> Result<Self> {
        config.validate()?;
        let gate = SharpnessGate::new(&config.sharpness);
        Ok(Self {
            config,
            gate,
            detector,
        })
    }

    pub fn config(&self) -> &GraderConfig {
        &self.config
    }

    /// Run one camera frame through the pipeline.
    ///
    /// Nothing runs when the session has already captured a frame or
    /// another frame is in flight. Gate failures come back as
    /// [`FrameOutcome::Rejected`]; only contract violations and detector
    /// failures are errors.
    pub async fn process_frame(
        &self,
        latch: &CaptureLatch,
        frame: &RawFrame<'_>,
    ) -> Result<FrameOutcome> {
        let guard = match latch.try_begin() {
            Ok(guard) => guard,
            Err(state) => return Ok(skipped(state)),
        };

        let raster = ingest_frame(frame).inspect_err(|e| report(PipelineStage::Ingest, e))?;
        self.run(guard, &raster).await
    }

    /// Run an already decoded, upright raster through the pipeline.
    pub async fn process_raster(&self, latch: &CaptureLatch, raster: &Raster) -> Result<FrameOutcome> {
        let guard = match latch.try_begin() {
            Ok(guard) => guard,
            Err(state) => return Ok(skipped(state)),
        };
        self.run(guard, raster).await
    }

    /// [`process_frame`](Self::process_frame), blocking the current thread
    /// until the detector resolves.
    pub fn process_frame_blocking(
        &self,
        latch: &CaptureLatch,
        frame: &RawFrame<'_>,
    ) -> Result<FrameOutcome> {
        pollster::block_on(self.process_frame(latch, frame))
    }

    /// [`process_raster`](Self::process_raster), blocking the current thread.
    pub fn process_raster_blocking(
        &self,
        latch: &CaptureLatch,
        raster: &Raster,
    ) -> Result<FrameOutcome> {
        pollster::block_on(self.process_raster(latch, raster))
    }

    async fn run(&self, guard: LatchGuard<'_>, raster: &Raster) -> Result<FrameOutcome> {
        let variance = match self.gate.check(raster) {
            Ok(variance) => variance,
            Err(variance) => {
                debug!(
                    stage = %PipelineStage::Sharpness,
                    variance,
                    threshold = self.gate.threshold(),
                    "Frame not sharp"
                );
                return Ok(FrameOutcome::Rejected(Rejection::NotSharp { variance }));
            }
        };

        let location = match locate(&self.detector, raster)
            .await
            .inspect_err(|e| report(PipelineStage::Locate, e))?
        {
            Some(location) => location,
            None => {
                debug!(variance, "No barcode located");
                return Ok(FrameOutcome::Rejected(Rejection::SymbolNotFound));
            }
        };

        let result = self
            .normalize_and_grade(raster, location)
            .inspect_err(|e| report(PipelineStage::Normalize, e))?;

        let latches = !(self.config.latch == LatchPolicy::GradableOnly && result.grade == Grade::F);
        let captured = latches && guard.commit();

        info!(
            stage = %PipelineStage::Grade,
            grade = %result.grade,
            value = result.value.as_deref().unwrap_or(""),
            variance,
            captured,
            "Frame graded"
        );
        Ok(FrameOutcome::Graded(Box::new(result)))
    }

    /// Crop, isolate and grade a located symbol. Does not touch any latch.
    pub fn normalize_and_grade(&self, raster: &Raster, location: Location) -> Result<GradingResult> {
        let geometry = &self.config.geometry;
        let loose = loose_crop(raster, &location.quad, geometry.padding)?;

        let bar_region = isolate_bars(&loose.raster, geometry);
        if bar_region.is_none() {
            debug!(crop = ?loose.rect, "No dark blob in crop; region is ungradable");
        }
        let region = bar_region.map(|r| loose.raster.crop(&r));
        let (grade, metrics) = grade_region(region.as_ref(), &self.config.grading);

        let bar_count = count_bars(&loose.raster, geometry);
        let expected = location.format.expected_bars(location.value.as_deref());
        debug!(bar_count, expected = ?expected, "Counted bars");

        Ok(GradingResult {
            value: location.value,
            format: location.format,
            corners: Some(location.quad),
            grade,
            normalized_image: loose.raster,
            crop: loose.rect,
            bar_region,
            metrics,
            bar_count: Some(bar_count),
            source_width: raster.width(),
            source_height: raster.height(),
        })
    }
}

fn skipped(state: LatchState) -> FrameOutcome {
    match state {
        LatchState::Processing => FrameOutcome::Rejected(Rejection::Busy),
        _ => FrameOutcome::Rejected(Rejection::Latched),
    }
}

fn report(stage: PipelineStage, err: &GraderError) {
    if err.is_contract_violation() {
        warn!(%stage, error = %err, "Frame violates input contract");
    } else {
        warn!(%stage, error = %err, "Frame failed");
    }
}
