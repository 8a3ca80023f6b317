//! Packed float RGB reading module
//!
//! This module decodes the width/height-prefixed little-endian `f32` RGB
//! buffer format into linear floating-point samples.
//!
//! ```text
//! offset 0:  u16 width
//! offset 2:  u16 height
//! offset 4..: { f32 r; f32 g; f32 b; } * width * height, row-major
//! ```

pub mod header;
pub mod samples;
mod reader;
mod packed_reader;
pub mod types;

pub use header::{
    Dimensions, ELEMENT_SIZE, FLOAT_SIZE, HEADER_SIZE, MAX_IMAGE_DIMENSION, read_header,
    validate_size,
};
pub use samples::decode_samples;
pub use reader::FloatImageReader;
pub use packed_reader::PackedFloatReader;
pub use types::FloatImageData;
