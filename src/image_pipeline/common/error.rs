use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("File is too small: {len} bytes, header needs 4")]
    TooSmallInput { len: usize },

    #[error("File is corrupted, image size header incorrect: expected {expected} bytes, got {actual}")]
    CorruptFile { expected: usize, actual: usize },

    #[error("File is too large, width: {width} height: {height} (max {max})")]
    DimensionTooLarge { width: usize, height: usize, max: usize },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to encode PNG image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
