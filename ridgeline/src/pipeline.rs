//! End-to-end run: sample rows, assemble documents, write files.
//!
//! Documents are fully built before the first file is written, so a failed
//! row extraction leaves no output behind.
use std::path::PathBuf;

use ridgeline_common::{Document, RenderMode};

use crate::config::RunConfig;
use crate::document::{assemble_all, Canvas};
use crate::error::{ConfigError, Result};
use crate::export_svg::export_svg;
use crate::sampling::{row_indices, row_spacing, sample_rows, ImageFile, RowSource};

/// One document written to disk
#[derive(Debug, Clone)]
pub struct WrittenDocument {
    pub mode: RenderMode,
    pub path: PathBuf,
    pub polylines: usize,
}

/// Sample `config.rows` rows from `source` and build every requested document
pub fn render<S>(source: &S, config: &RunConfig) -> Result<Vec<(RenderMode, Document)>>
where
    S: RowSource + ?Sized,
{
    if config.rows == 0 {
        return Err(ConfigError::MissingRequired.into());
    }
    if config.trace.sample_rate == 0 {
        return Err(ConfigError::ZeroSampleRate.into());
    }

    let height = source.height();
    let spacing = row_spacing(height, config.rows);
    let indices = row_indices(height, config.rows);
    log::debug!("Sampling {} row(s) with spacing {}", indices.len(), spacing);

    let rows = sample_rows(source, &indices)?;

    let canvas = Canvas::new(&rows, source.width(), spacing, config.trace.max_height)?;
    log::debug!("Canvas {}x{}", canvas.width, canvas.height);

    Ok(assemble_all(&rows, config.output_type, &canvas, &config.trace))
}

/// Run the whole conversion for a configuration read from the command line
pub fn run(config: &RunConfig) -> Result<Vec<WrittenDocument>> {
    let targets = config.output_targets()?;

    let image = ImageFile::open(&config.input)?;
    log::info!(
        "Loaded {} ({}x{})",
        image.path().display(),
        image.width(),
        image.height()
    );

    let documents = render(&image, config)?;

    let mut written = Vec::with_capacity(documents.len());
    for ((mode, document), (_, path)) in documents.iter().zip(targets) {
        export_svg(document, &path)?;
        written.push(WrittenDocument {
            mode: *mode,
            path,
            polylines: document.polylines.len(),
        });
    }

    Ok(written)
}
