//! Tone mapping module
//!
//! Gamma correction and quantization of linear float samples down to 8-bit
//! channel values.

mod gamma;
mod quantize;

pub use gamma::{gamma_correct, DEFAULT_GAMMA};
pub use quantize::{standard_dynamic_range, SDR_SCALE};
