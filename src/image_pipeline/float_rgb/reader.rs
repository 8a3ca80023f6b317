use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::float_rgb::types::FloatImageData;

pub trait FloatImageReader {
    fn read_float(&self, data: &[u8]) -> Result<FloatImageData>;
}
