// Command-line arguments
// Flag names keep their camelCase long forms (--maxHeight, --sampleRate)

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use ridgeline_common::OutputType;

use crate::config::{
    RunConfig, TraceConfig, DEFAULT_LOOKAHEAD, DEFAULT_MAX_HEIGHT, DEFAULT_OUTPUT,
    DEFAULT_SAMPLE_RATE,
};
use crate::error::ConfigError;

/// Render evenly spaced image rows as land/water polyline art
#[derive(Parser, Debug)]
#[command(name = "ridgeline", version)]
#[command(about = "Render evenly spaced image rows as land/water line art", long_about = None)]
pub struct Args {
    /// Input image file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Number of rows to sample
    #[arg(short = 'n', long, value_parser = parse_number::<u32>)]
    pub rows: Option<u32>,

    /// Output type
    #[arg(short = 't', long = "type", value_enum, default_value = "all")]
    pub output_type: TypeArg,

    /// Base output SVG file name
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Maximum height for interpolation
    #[arg(short = 'H', long = "maxHeight", value_parser = parse_number::<u32>, default_value_t = DEFAULT_MAX_HEIGHT)]
    pub max_height: u32,

    /// Lookahead steps to reduce fragmentation
    #[arg(short, long, value_parser = parse_number::<usize>, default_value_t = DEFAULT_LOOKAHEAD)]
    pub lookahead: usize,

    /// Keep every Nth point of a segment, larger is sparser
    #[arg(short, long = "sampleRate", value_parser = parse_number::<usize>, default_value_t = DEFAULT_SAMPLE_RATE)]
    pub sample_rate: usize,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TypeArg {
    Land,
    Water,
    Both,
    All,
}

impl From<TypeArg> for OutputType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Land => OutputType::Land,
            TypeArg::Water => OutputType::Water,
            TypeArg::Both => OutputType::Both,
            TypeArg::All => OutputType::All,
        }
    }
}

/// Parse a non-negative integer flag value. The whole value must be digits.
pub fn parse_number<T: FromStr>(value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::NotANumber(value.to_string()))
}

impl Args {
    /// Validate required flags and build the run configuration
    pub fn into_config(self) -> Result<RunConfig, ConfigError> {
        let (input, rows) = match (self.input, self.rows) {
            (Some(input), Some(rows)) if rows > 0 => (input, rows),
            _ => return Err(ConfigError::MissingRequired),
        };
        if self.sample_rate == 0 {
            return Err(ConfigError::ZeroSampleRate);
        }

        Ok(RunConfig {
            input,
            rows,
            output_type: self.output_type.into(),
            output: self.output,
            trace: TraceConfig {
                max_height: self.max_height,
                lookahead: self.lookahead,
                sample_rate: self.sample_rate,
            },
        })
    }
}
