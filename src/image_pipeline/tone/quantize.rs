/// Scale from `[0, 1]` floats to byte values.
///
/// Slightly above 255 so that `1.0` still lands on 255 after truncation.
pub const SDR_SCALE: f64 = 255.99;

/// Quantizes samples to standard dynamic range bytes.
///
/// Each sample is scaled by [`SDR_SCALE`], clamped to `[0, 255]`, then
/// truncated. NaN samples quantize to 0.
pub fn standard_dynamic_range(samples: &[f64]) -> Vec<u8> {
    samples.iter().map(|&f| quantize(f)).collect()
}

#[inline]
fn quantize(f: f64) -> u8 {
    // clamp keeps NaN as NaN, and `as u8` saturates NaN to 0
    (f * SDR_SCALE).clamp(0.0, 255.0) as u8
}
