use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::{Result, ConversionError};
use crate::image_pipeline::png::types::RgbaImageData;
use crate::image_pipeline::png::writer::PngWriter;

pub struct StandardPngWriter;

impl PngWriter for StandardPngWriter {
    fn write_png(&self, image: &RgbaImageData, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width, image.height);

        let mut buffer = Vec::new();

        let mut encoder = ::png::Encoder::new(&mut buffer, image.width as u32, image.height as u32);
        encoder.set_color(::png::ColorType::Rgba);
        encoder.set_depth(::png::BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;
        writer
            .write_image_data(&image.data)
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("PNG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
