use crate::image_pipeline::float_rgb::header::FLOAT_SIZE;

/// Decodes a payload of little-endian IEEE-754 `f32` values, widened to `f64`.
///
/// The payload length must be a multiple of [`FLOAT_SIZE`]; callers validate
/// it against the header before getting here.
pub fn decode_samples(payload: &[u8]) -> Vec<f64> {
    debug_assert!(
        payload.len() % FLOAT_SIZE == 0,
        "payload length {} is not a multiple of {}",
        payload.len(),
        FLOAT_SIZE
    );

    payload
        .chunks_exact(FLOAT_SIZE)
        .map(|bytes| f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as f64)
        .collect()
}
