//! PNG writing module
//!
//! This module assembles quantized RGB bytes into an opaque RGBA raster and
//! encodes it as an 8-bit PNG.

mod writer;
mod standard_png_writer;
pub mod types;

pub use writer::PngWriter;
pub use standard_png_writer::StandardPngWriter;
pub use types::{ConversionConfig, ConversionConfigBuilder, RgbaImageData};
