//! Reader for the packed width/height-prefixed float RGB format.

use tracing::debug;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::float_rgb::header::{read_header, validate_size, HEADER_SIZE};
use crate::image_pipeline::float_rgb::reader::FloatImageReader;
use crate::image_pipeline::float_rgb::samples::decode_samples;
use crate::image_pipeline::float_rgb::types::FloatImageData;

/// Reads the packed float RGB format.
///
/// The whole buffer is validated before any sample is decoded, so a
/// mismatched header never leads to decoding past the payload.
pub struct PackedFloatReader;

impl FloatImageReader for PackedFloatReader {
    fn read_float(&self, data: &[u8]) -> Result<FloatImageData> {
        debug!("Decoding packed float buffer, {} bytes", data.len());

        let dims = read_header(data)?;
        validate_size(dims, data.len())?;

        debug!("Header: {}x{}", dims.width, dims.height);

        let samples = decode_samples(&data[HEADER_SIZE..]);

        Ok(FloatImageData {
            width: dims.width(),
            height: dims.height(),
            samples,
        })
    }
}
