use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Malformed frame: {0}")]
    MalformedInput(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Detector failed: {0}")]
    Detector(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Frame index {index} out of range (total: {total})")]
    FrameIndexOutOfRange { index: usize, total: usize },
}

impl GraderError {
    /// True for errors that mean a collaborator broke its contract
    /// (bad buffers, bad corner sets), as opposed to environmental failures.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::MalformedInput(_) | Self::InvalidGeometry(_))
    }
}

pub type Result<T> = std::result::Result<T, GraderError>;
