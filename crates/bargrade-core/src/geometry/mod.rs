pub mod bars;
pub mod components;
pub mod config;
pub mod crop;
pub mod isolate;
pub mod quad;

pub use bars::count_bars;
pub use config::GeometryConfig;
pub use crop::{loose_crop, CropRect, LooseCrop};
pub use isolate::isolate_bars;
pub use quad::{Point, Quad};
