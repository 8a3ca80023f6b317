//! Decoded float image types

/// Linear floating-point samples decoded from a packed buffer
#[derive(Debug, Clone)]
pub struct FloatImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGB samples interleaved [R, G, B, R, G, B, ...], row-major
    pub samples: Vec<f64>,
}

impl FloatImageData {
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}
