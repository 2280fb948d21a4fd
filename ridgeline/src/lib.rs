//! Row-sampled line art from raster images.
//!
//! Evenly spaced pixel rows are read as intensities, mapped to heights and
//! split into land (`> 0`) and water (`== 0`) polylines, with short gaps
//! bridged by a lookahead window. Each requested mode becomes one SVG.

pub mod classify;
pub mod cli;
pub mod config;
pub mod decimate;
pub mod document;
pub mod error;
pub mod export_svg;
pub mod height;
pub mod pipeline;
pub mod sampling;

pub use ridgeline_common::{Document, LineClass, OutputType, Point, Polyline, RenderMode, Segment};
