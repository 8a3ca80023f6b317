//! Header parsing and buffer size validation.

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Size of the width/height header in bytes.
pub const HEADER_SIZE: usize = 4;

/// Size of one packed `f32` sample in bytes.
pub const FLOAT_SIZE: usize = 4;

/// Size of one packed RGB pixel in bytes.
pub const ELEMENT_SIZE: usize = 3 * FLOAT_SIZE;

/// Largest width or height accepted.
///
/// Not a format limit: anything bigger almost certainly means the buffer was
/// written wrong.
pub const MAX_IMAGE_DIMENSION: usize = 8192;

/// Image dimensions as stored in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

impl Dimensions {
    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Total buffer length, header included, that these dimensions require.
    pub fn expected_size(&self) -> usize {
        ELEMENT_SIZE * self.width() * self.height() + HEADER_SIZE
    }
}

/// Reads width and height from the first [`HEADER_SIZE`] bytes.
pub fn read_header(data: &[u8]) -> Result<Dimensions> {
    let &[w0, w1, h0, h1, ..] = data else {
        return Err(ConversionError::TooSmallInput { len: data.len() });
    };

    Ok(Dimensions {
        width: u16::from_le_bytes([w0, w1]),
        height: u16::from_le_bytes([h0, h1]),
    })
}

/// Checks the declared dimensions against the limit and the actual buffer length.
///
/// The dimension limit is checked first so an oversized header is always
/// reported as such, whatever the buffer length. Any other length mismatch is
/// a corrupt file, so a zero dimension only surfaces for a header-only buffer.
pub fn validate_size(dims: Dimensions, buffer_len: usize) -> Result<()> {
    let (width, height) = (dims.width(), dims.height());

    if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
        return Err(ConversionError::DimensionTooLarge {
            width,
            height,
            max: MAX_IMAGE_DIMENSION,
        });
    }

    let expected = dims.expected_size();
    if buffer_len != expected {
        return Err(ConversionError::CorruptFile {
            expected,
            actual: buffer_len,
        });
    }

    if width == 0 || height == 0 {
        return Err(ConversionError::InvalidDimensions(width, height));
    }

    Ok(())
}
