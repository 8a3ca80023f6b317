use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::png::types::RgbaImageData;

pub trait PngWriter {
    fn write_png(&self, image: &RgbaImageData, output: &mut dyn Write) -> Result<()>;
}
