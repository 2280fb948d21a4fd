//! Row sampling.
//!
//! - `RowSource`: anything that can hand out one row of 8-bit intensities.
//! - `ImageFile`: a decoded image on disk, read through its red channel.
//! - `row_indices`: evenly spaced pixel rows for a requested row count.
//! - `sample_rows`: concurrent extraction with results in request order.
use crate::error::ImageAccessError;
use image::{ImageBuffer, ImageError, ImageReader, Pixel, RgbaImage};
use rayon::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// One sampled horizontal line of intensities, left to right
pub type Row = Vec<u8>;

/// Read-only access to per-row intensities.
///
/// Implementations are shared across extraction threads, so they must be `Sync`.
pub trait RowSource: Sync {
    /// Image width in pixels
    fn width(&self) -> u32;

    /// Image height in pixels
    fn height(&self) -> u32;

    /// Intensities of pixel row `index`, one per column
    fn row(&self, index: u32) -> Result<Row, ImageAccessError>;
}

/// Any 8-bit buffer is a row source through its first channel
/// (red for RGB/RGBA, luma for grayscale).
impl<P> RowSource for ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8> + Sync,
{
    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }

    fn row(&self, index: u32) -> Result<Row, ImageAccessError> {
        let height = ImageBuffer::height(self);
        if index >= height {
            return Err(ImageAccessError::RowOutOfBounds { row: index, height });
        }
        Ok((0..ImageBuffer::width(self))
            .map(|x| self.get_pixel(x, index).channels()[0])
            .collect())
    }
}

/// Image decoded from disk, expanded to RGBA8 and sampled on red.
#[derive(Clone, Debug)]
pub struct ImageFile {
    path: PathBuf,
    pixels: RgbaImage,
}

impl ImageFile {
    /// Read dimensions, then decode the pixel data.
    /// The format is sniffed from the file contents, falling back to the extension.
    pub fn open(path: &Path) -> Result<Self, ImageAccessError> {
        let (width, height) = reader(path)
            .and_then(|r| r.into_dimensions())
            .map_err(|source| ImageAccessError::Metadata {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("{}: {}x{}", path.display(), width, height);

        let pixels = reader(path)
            .and_then(|r| r.decode())
            .map_err(|source| ImageAccessError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        Ok(Self {
            path: path.to_path_buf(),
            pixels,
        })
    }

    /// Path the image was read from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSource for ImageFile {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn row(&self, index: u32) -> Result<Row, ImageAccessError> {
        RowSource::row(&self.pixels, index)
    }
}

fn reader(path: &Path) -> Result<ImageReader<BufReader<File>>, ImageError> {
    Ok(ImageReader::open(path)?.with_guessed_format()?)
}

/// Row spacing for `num_rows` sampled lines: `floor(height / num_rows)`
pub fn row_spacing(height: u32, num_rows: u32) -> u32 {
    if num_rows == 0 {
        0
    } else {
        height / num_rows
    }
}

/// Pixel rows to sample: `i * floor(height / num_rows)` for `i in 0..num_rows`
pub fn row_indices(height: u32, num_rows: u32) -> Vec<u32> {
    let step = row_spacing(height, num_rows);
    (0..num_rows).map(|i| i * step).collect()
}

/// Extract all requested rows concurrently.
///
/// The result is indexed like `indices` whatever order the extractions
/// finish in. The first failure fails the whole call.
pub fn sample_rows<S>(source: &S, indices: &[u32]) -> Result<Vec<Row>, ImageAccessError>
where
    S: RowSource + ?Sized,
{
    indices.par_iter().map(|&index| source.row(index)).collect()
}
