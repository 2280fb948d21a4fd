use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use ridgeline::cli::Args;
use ridgeline::pipeline;
use ridgeline::OutputType;
use std::io::Write;

fn main() -> Result<()> {
    let args = Args::try_parse().unwrap_or_else(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => {
            let _ = err.print();
            std::process::exit(1);
        }
    });

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let config = args.into_config()?;

    log::info!("Input: {}", config.input.display());
    log::info!("Rows: {}", config.rows);
    log::info!("Type: {}", config.output_type);
    log::debug!(
        "Max height: {}, lookahead: {}, sample rate: {}",
        config.trace.max_height,
        config.trace.lookahead,
        config.trace.sample_rate
    );

    let written = pipeline::run(&config)
        .with_context(|| format!("Failed to convert {}", config.input.display()))?;

    for doc in &written {
        if config.output_type == OutputType::All {
            println!(
                "SVG file for type '{}' has been written to {}",
                doc.mode,
                doc.path.display()
            );
        } else {
            println!("SVG file has been written to {}", doc.path.display());
        }
        log::debug!("  {} polyline(s)", doc.polylines);
    }

    Ok(())
}
