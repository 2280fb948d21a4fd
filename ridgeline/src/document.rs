// Document assembly
// Combines every sampled row into one polyline document per render mode

use ridgeline_common::{Document, LineClass, OutputType, Polyline, RenderMode};

use crate::classify::{classify_row, trace_row, RowBand};
use crate::config::TraceConfig;
use crate::decimate::decimate_segment;
use crate::error::ConfigError;
use crate::sampling::Row;

/// Canvas shared by every document of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    /// Vertical distance between consecutive row bands
    pub spacing: u32,
}

impl Canvas {
    /// Width comes from the first row, or `fallback_width` with no rows.
    /// Later rows are not checked against it.
    ///
    /// Every y coordinate is bounded by the canvas height, so a height that
    /// fits in `u32` keeps all point arithmetic in range.
    pub fn new(
        rows: &[Row],
        fallback_width: u32,
        spacing: u32,
        max_height: u32,
    ) -> Result<Self, ConfigError> {
        let width = rows
            .first()
            .map(|row| row.len() as u32)
            .unwrap_or(fallback_width);
        let height = u32::try_from(rows.len() as u64 * u64::from(spacing) + u64::from(max_height))
            .map_err(|_| ConfigError::CanvasTooLarge {
                max_height,
                rows: rows.len(),
            })?;
        Ok(Self {
            width,
            height,
            spacing,
        })
    }

    fn band(&self, position: usize, max_height: u32) -> RowBand {
        RowBand::new(position as u32 * self.spacing, max_height)
    }
}

/// Build the document for one render mode
pub fn assemble(rows: &[Row], mode: RenderMode, canvas: &Canvas, config: &TraceConfig) -> Document {
    let mut document = Document::new(canvas.width, canvas.height);

    match mode.class() {
        None => {
            for (position, row) in rows.iter().enumerate() {
                let band = canvas.band(position, config.max_height);
                document.polylines.push(Polyline::new(trace_row(row, band)));
            }
        }
        Some(class) => {
            for (position, row) in rows.iter().enumerate() {
                let band = canvas.band(position, config.max_height);
                document
                    .polylines
                    .extend(classified_polylines(row, class, band, config));
            }
        }
    }

    log::debug!(
        "{} document: {} polyline(s), {} point(s)",
        mode,
        document.polylines.len(),
        document.point_count()
    );

    document
}

fn classified_polylines(
    row: &[u8],
    class: LineClass,
    band: RowBand,
    config: &TraceConfig,
) -> impl Iterator<Item = Polyline> {
    let sample_rate = config.sample_rate;
    classify_row(row, class, config.lookahead, band)
        .into_iter()
        .map(move |segment| Polyline::new(decimate_segment(&segment, sample_rate)))
}

/// Build one document per mode of `output_type`, in output order
pub fn assemble_all(
    rows: &[Row],
    output_type: OutputType,
    canvas: &Canvas,
    config: &TraceConfig,
) -> Vec<(RenderMode, Document)> {
    output_type
        .modes()
        .iter()
        .map(|&mode| (mode, assemble(rows, mode, canvas, config)))
        .collect()
}
