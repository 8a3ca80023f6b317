//! Common utilities module
//!
//! Error type shared by every stage of the unpacking pipeline.

pub mod error;

pub use error::{ConversionError, Result};
