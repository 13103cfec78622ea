pub mod gaussian_blur;
pub mod morphology;
pub mod threshold;
