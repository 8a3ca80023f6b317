//! Pipeline conversions module
//!
//! This module contains orchestration logic for float buffer to image conversions.

mod float_to_png;


pub use float_to_png::FloatToPngPipeline;
