// Run configuration
// Validated settings shared by the pipeline stages, plus output path resolution

use std::path::{Path, PathBuf};

use ridgeline_common::{OutputType, RenderMode};

use crate::error::{Error, Result};

pub const DEFAULT_OUTPUT: &str = "output.svg";
pub const DEFAULT_MAX_HEIGHT: u32 = 100;
pub const DEFAULT_LOOKAHEAD: usize = 5;
pub const DEFAULT_SAMPLE_RATE: usize = 4;

/// Parameters of the row-to-polyline transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceConfig {
    /// Height of a full-intensity sample above its row baseline
    pub max_height: u32,
    /// Columns scanned past a failing column before a segment is closed
    pub lookahead: usize,
    /// Keep every Nth point of a classified segment, at least 1
    pub sample_rate: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            max_height: DEFAULT_MAX_HEIGHT,
            lookahead: DEFAULT_LOOKAHEAD,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

/// Everything one invocation needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    /// Number of rows to sample, never zero
    pub rows: u32,
    pub output_type: OutputType,
    /// Base output path as given by the user
    pub output: PathBuf,
    pub trace: TraceConfig,
}

impl RunConfig {
    /// Destination file for every document this run produces.
    ///
    /// `All` strips a trailing `.svg` from the base and appends `_<mode>.svg`.
    /// A single mode writes to the output path made absolute.
    pub fn output_targets(&self) -> Result<Vec<(RenderMode, PathBuf)>> {
        match self.output_type {
            OutputType::All => Ok(self
                .output_type
                .modes()
                .iter()
                .map(|&mode| (mode, suffixed_path(&self.output, mode)))
                .collect()),
            single => {
                let path = std::path::absolute(&self.output).map_err(|source| Error::Write {
                    path: self.output.clone(),
                    source,
                })?;
                Ok(single.modes().iter().map(|&mode| (mode, path.clone())).collect())
            }
        }
    }
}

/// `out/map.svg` -> `out/map_land.svg`; `map` -> `map_land.svg`
pub fn suffixed_path(base: &Path, mode: RenderMode) -> PathBuf {
    let base = base.to_string_lossy();
    let stem = base.strip_suffix(".svg").unwrap_or(&base);
    PathBuf::from(format!("{}_{}.svg", stem, mode.name()))
}
