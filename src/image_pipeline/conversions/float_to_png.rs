use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    float_rgb::{FloatImageReader, PackedFloatReader},
    png::{ConversionConfig, PngWriter, RgbaImageData, StandardPngWriter},
    tone::{gamma_correct, standard_dynamic_range},
};

pub struct FloatToPngPipeline<R: FloatImageReader, W: PngWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl FloatToPngPipeline<PackedFloatReader, StandardPngWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: PackedFloatReader,
            writer: StandardPngWriter,
            config,
        }
    }
}

impl<R: FloatImageReader, W: PngWriter> FloatToPngPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Decodes, tone maps and assembles `input_data` into an RGBA raster.
    #[instrument(
        skip(self, input_data),
        fields(input_size = input_data.len(), gamma = self.config.gamma)
    )]
    pub fn unpack(&self, input_data: &[u8]) -> Result<RgbaImageData> {
        let float_image = {
            let _span = tracing::info_span!("decode_float").entered();
            self.reader.read_float(input_data)?
        };
        let (width, height) = (float_image.width, float_image.height);

        let samples = {
            let _span = tracing::info_span!("gamma_correct").entered();
            gamma_correct(float_image.samples, self.config.gamma)
        };

        let rgb = {
            let _span = tracing::info_span!("quantize").entered();
            standard_dynamic_range(&samples)
        };

        let _span = tracing::info_span!("assemble_image", width, height).entered();
        Ok(RgbaImageData::from_rgb(width, height, rgb))
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting float to PNG conversion");

        let image = self.unpack(input_data)?;

        {
            let _span = tracing::info_span!("encode_png").entered();
            self.writer.write_png(&image, output)?;
        }

        info!(
            width = image.width,
            height = image.height,
            "Conversion complete"
        );
        Ok(())
    }

    /// Converts `input_path` into a PNG at `output_path`.
    ///
    /// The output file is only created once the image has been fully decoded
    /// and encoded, so a failed conversion leaves nothing behind.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut encoded = Vec::new();
        self.convert(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file", bytes = encoded.len()).entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
