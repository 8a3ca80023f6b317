use std::process::ExitCode;

use anyhow::Context;
use image_unpacker::cli::{CliArgs, CliExit};
use image_unpacker::image_pipeline::FloatToPngPipeline;
use image_unpacker::logger;

use tracing::{debug, info};

fn main() -> anyhow::Result<ExitCode> {
    let args = match CliArgs::parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(CliExit::Info) => return Ok(ExitCode::SUCCESS),
        Err(CliExit::Usage) => return Ok(ExitCode::from(1)),
    };

    logger::init();

    let pipeline = FloatToPngPipeline::new(args.conversion_config());
    debug!("Gamma: {}", pipeline.config().gamma);

    pipeline
        .convert_file(&args.input, &args.output)
        .with_context(|| {
            format!(
                "failed to unpack {} into {}",
                args.input.display(),
                args.output.display()
            )
        })?;

    info!("Wrote {}", args.output.display());
    Ok(ExitCode::SUCCESS)
}
