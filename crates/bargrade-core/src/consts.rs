/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// ITU-R BT.601 luminance weights, scaled by 1000 for exact integer math.
pub const LUMINANCE_R_MILLI: u32 = 299;
pub const LUMINANCE_G_MILLI: u32 = 587;
pub const LUMINANCE_B_MILLI: u32 = 114;

/// Number of channels in a raster pixel (R, G, B).
pub const RGB_CHANNELS: usize = 3;

/// Laplacian variance a frame must exceed to count as in focus.
pub const DEFAULT_SHARPNESS_THRESHOLD: f64 = 100.0;

/// Pixels added on every side of the corner bounding box for the loose crop.
pub const DEFAULT_CROP_PADDING: i32 = 5;

/// Gaussian sigma used before bar isolation. 1.1 is what a 5x5 kernel
/// with automatic sigma resolves to.
pub const DEFAULT_ISOLATION_BLUR_SIGMA: f32 = 1.1;

/// Gaussian kernel radius used before bar isolation (5 taps).
pub const DEFAULT_ISOLATION_BLUR_RADIUS: usize = 2;

/// Luminance at or below which a blurred pixel is treated as bar ink.
pub const DEFAULT_BAR_CUTOFF: u8 = 100;

/// Horizontal luminance step that counts as a bar edge.
pub const DEFAULT_EDGE_DELTA: u32 = 50;

/// Vertical luminance step that counts as noise.
pub const DEFAULT_NOISE_DELTA: u32 = 15;

/// Binary cutoff used when counting individual bars.
pub const DEFAULT_BAR_COUNT_CUTOFF: u8 = 128;

/// Height of the vertical closing element used when counting bars.
pub const DEFAULT_BAR_COUNT_KERNEL_HEIGHT: usize = 20;

/// Modules in an EAN-13 / UPC-A symbol.
pub const EAN13_MODULES: usize = 95;

/// Modules per Code 128 symbol character.
pub const CODE128_MODULES_PER_CHAR: usize = 11;

/// Modules added by Code 128 start/stop patterns and quiet zones.
pub const CODE128_OVERHEAD_MODULES: usize = 13;

/// Default overlay stroke width in pixels.
pub const DEFAULT_OVERLAY_STROKE: u32 = 5;
