use ndarray::Array2;

/// Inverse binary threshold: a pixel is foreground when it is at or below
/// `cutoff`. Dark ink on a light substrate becomes `true`.
pub fn threshold_inverse(data: &Array2<f32>, cutoff: f32) -> Array2<bool> {
    data.mapv(|v| v <= cutoff)
}

/// Inverse binary threshold on 8-bit luminance.
pub fn threshold_inverse_u8(data: &Array2<u8>, cutoff: u8) -> Array2<bool> {
    data.mapv(|v| v <= cutoff)
}
