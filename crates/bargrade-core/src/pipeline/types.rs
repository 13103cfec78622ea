use crate::frame::Raster;
use crate::geometry::{CropRect, Quad};
use crate::locate::BarcodeFormat;
use crate::overlay::{draw_quad, OverlayStyle};
use crate::quality::{Grade, QualityMetrics};

/// Pipeline stage, used for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Ingest,
    Sharpness,
    Locate,
    Normalize,
    Grade,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ingest => write!(f, "Decoding frame"),
            Self::Sharpness => write!(f, "Checking focus"),
            Self::Locate => write!(f, "Locating symbol"),
            Self::Normalize => write!(f, "Isolating bars"),
            Self::Grade => write!(f, "Grading"),
        }
    }
}

/// Why a frame produced no result. These are routine on a live stream.
#[derive(Clone, Debug, PartialEq)]
pub enum Rejection {
    /// Laplacian variance at or below the sharpness threshold.
    NotSharp { variance: f64 },
    /// The detector found no symbol.
    SymbolNotFound,
    /// The session already captured a frame; nothing was run.
    Latched,
    /// Another frame of this session is still in flight; this one was dropped.
    Busy,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotSharp { variance } => write!(f, "not sharp (variance {variance:.1})"),
            Self::SymbolNotFound => write!(f, "no barcode located"),
            Self::Latched => write!(f, "already captured"),
            Self::Busy => write!(f, "previous frame still processing"),
        }
    }
}

/// Everything known about an accepted frame.
#[derive(Clone, Debug)]
pub struct GradingResult {
    /// Decoded payload, when the detector could read it.
    pub value: Option<String>,
    pub format: BarcodeFormat,
    /// Symbol corners in source (rotated frame) coordinates.
    pub corners: Option<Quad>,
    pub grade: Grade,
    /// The padded crop around the symbol.
    pub normalized_image: Raster,
    /// Where `normalized_image` sits in the source raster.
    pub crop: CropRect,
    /// Bar region in `normalized_image` coordinates; `None` when the region
    /// could not be isolated (grade F).
    pub bar_region: Option<CropRect>,
    pub metrics: Option<QualityMetrics>,
    pub bar_count: Option<usize>,
    pub source_width: usize,
    pub source_height: usize,
}

impl GradingResult {
    /// The isolated bar pixels, if any.
    pub fn bar_image(&self) -> Option<Raster> {
        self.bar_region.map(|r| self.normalized_image.crop(&r))
    }

    /// The crop with the symbol outline drawn on it.
    pub fn overlay_image(&self, style: &OverlayStyle) -> Raster {
        match &self.corners {
            Some(quad) => {
                let local = quad.translated(self.crop.x as i32, self.crop.y as i32);
                draw_quad(&self.normalized_image, &local, style)
            }
            None => self.normalized_image.clone(),
        }
    }

    /// Bar region in source raster coordinates.
    pub fn bar_region_in_source(&self) -> Option<CropRect> {
        self.bar_region.map(|r| self.crop.offset_child(&r))
    }

    /// Expected bar count for the detected format, when it is known.
    pub fn expected_bars(&self) -> Option<usize> {
        self.format.expected_bars(self.value.as_deref())
    }
}

/// Result of offering one frame to the pipeline.
#[derive(Clone, Debug)]
pub enum FrameOutcome {
    Graded(Box<GradingResult>),
    Rejected(Rejection),
}

impl FrameOutcome {
    pub fn graded(&self) -> Option<&GradingResult> {
        match self {
            Self::Graded(r) => Some(r),
            Self::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Graded(_) => None,
            Self::Rejected(r) => Some(r),
        }
    }

    pub fn into_result(self) -> Option<GradingResult> {
        match self {
            Self::Graded(r) => Some(*r),
            Self::Rejected(_) => None,
        }
    }
}
