//! PNG conversion types

use crate::image_pipeline::tone::DEFAULT_GAMMA;

/// 8-bit RGBA raster ready for encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGBA pixel data interleaved [R, G, B, A, R, G, B, A, ...], row-major
    pub data: Vec<u8>,
}

impl RgbaImageData {
    /// Builds an opaque raster from interleaved RGB bytes.
    ///
    /// `rgb` must hold exactly `width * height * 3` bytes in row-major order.
    /// Every pixel gets an alpha of 255.
    pub fn from_rgb(width: usize, height: usize, rgb: Vec<u8>) -> Self {
        debug_assert_eq!(rgb.len(), width * height * 3);

        let mut data = Vec::with_capacity(width * height * 4);
        for px in rgb.chunks_exact(3) {
            data.extend_from_slice(&[px[0], px[1], px[2], u8::MAX]);
        }

        Self { width, height, data }
    }

    /// RGBA value at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }
}

/// Configuration for float to PNG conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Gamma exponent; samples become `f^(1/gamma)`, and 1.0 disables correction
    pub gamma: f64,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    gamma: Option<f64>,
}

impl ConversionConfigBuilder {
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = Some(gamma);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            gamma: self.gamma.unwrap_or(default.gamma),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_sets_opaque_alpha() {
        let image = RgbaImageData::from_rgb(2, 2, (0..12).collect());

        assert_eq!(image.data.len(), 16);
        assert_eq!(image.pixel(0, 0), Some([0, 1, 2, 255]));
        assert_eq!(image.pixel(1, 0), Some([3, 4, 5, 255]));
        assert_eq!(image.pixel(0, 1), Some([6, 7, 8, 255]));
        assert_eq!(image.pixel(1, 1), Some([9, 10, 11, 255]));
        assert_eq!(image.pixel(2, 0), None);
        assert_eq!(image.pixel(0, 2), None);
    }

    #[test]
    fn test_config_default_gamma() {
        assert_eq!(ConversionConfig::default().gamma, 2.0);
        assert_eq!(ConversionConfig::builder().build().gamma, 2.0);
    }

    #[test]
    fn test_config_builder() {
        let config = ConversionConfig::builder().gamma(2.2).build();
        assert_eq!(config.gamma, 2.2);
    }
}
