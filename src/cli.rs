//! Command line arguments for the `image-unpacker` binary.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap::error::ErrorKind;

use crate::image_pipeline::png::types::ConversionConfig;
use crate::image_pipeline::tone::DEFAULT_GAMMA;

/// Unpack a PNG image from a raw binary file of width/height-prefixed f32 RGB triples.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct CliArgs {
    /// Input data filepath
    #[arg(short = 'i', value_name = "PATH")]
    pub input: PathBuf,

    /// Output image filepath (must be .png)
    #[arg(short = 'o', value_name = "PATH")]
    pub output: PathBuf,

    /// Gamma correction exponent
    #[arg(
        long = "gamma",
        value_name = "FLOAT",
        default_value_t = DEFAULT_GAMMA,
        value_parser = parse_gamma
    )]
    pub gamma: f64,
}

/// How argument parsing ended when it did not produce usable arguments.
#[derive(Debug)]
pub enum CliExit {
    /// Help or version was requested and printed.
    Info,
    /// Arguments were missing or invalid; usage has been printed.
    Usage,
}

impl CliArgs {
    /// Parses `args` (program name first), printing usage on failure.
    ///
    /// `-gamma` is accepted as a single-dash long flag alongside `--gamma`.
    pub fn parse_args<I, T>(args: I) -> Result<Self, CliExit>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args = normalize_single_dash_long(args);

        let parsed = match Self::try_parse_from(args) {
            Ok(parsed) => parsed,
            Err(e) => {
                return match e.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                        let _ = e.print();
                        Err(CliExit::Info)
                    }
                    _ => {
                        let _ = e.print();
                        Err(CliExit::Usage)
                    }
                };
            }
        };

        if !parsed.has_png_output() {
            eprintln!("error: output path must end in .png: {}", parsed.output.display());
            eprintln!();
            eprintln!("{}", Self::command().render_usage());
            return Err(CliExit::Usage);
        }

        Ok(parsed)
    }

    pub fn has_png_output(&self) -> bool {
        self.output.to_string_lossy().ends_with(".png")
    }

    pub fn conversion_config(&self) -> ConversionConfig {
        ConversionConfig::builder().gamma(self.gamma).build()
    }
}

fn parse_gamma(value: &str) -> Result<f64, String> {
    let gamma: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(format!("gamma must be a positive number, got {value}"));
    }
    Ok(gamma)
}

fn normalize_single_dash_long<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some("-gamma") => OsString::from("--gamma"),
            Some(s) if s.starts_with("-gamma=") => OsString::from(format!("-{s}")),
            _ => arg,
        })
        .collect()
}
