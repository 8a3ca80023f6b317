//! Image processing pipeline module
//!
//! This module turns packed floating-point RGB buffers into PNG images,
//! with separate modules for buffer decoding, tone mapping, PNG writing and
//! conversion orchestration.

pub mod float_rgb;
pub mod tone;
pub mod png;
pub mod conversions;
pub mod common;

pub use self::common::{
    ConversionError,
    Result,
};

pub use self::float_rgb::{
    FloatImageData,
    FloatImageReader,
    PackedFloatReader,
    MAX_IMAGE_DIMENSION,
};

pub use self::png::{
    ConversionConfig,
    ConversionConfigBuilder,
    PngWriter,
    RgbaImageData,
    StandardPngWriter,
};

pub use self::conversions::{
    FloatToPngPipeline,
};
