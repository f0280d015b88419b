//! Error types for chart rendering and report output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering or writing outputs.
#[derive(Debug, Error)]
pub enum ReportError {
    // === Data Errors ===
    /// A series required by the chart has no points.
    #[error("cannot plot empty {series} series")]
    EmptySeries { series: &'static str },

    // === Rendering Errors ===
    /// Writing the SVG document failed.
    #[error("failed to compose SVG: {message}")]
    SvgWrite { message: String },

    /// The composed SVG could not be parsed for rasterization.
    #[error("failed to parse SVG: {message}")]
    SvgParse { message: String },

    /// A font file could not be loaded.
    #[error("failed to load font {path}: {source}")]
    FontLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The raster canvas could not be allocated.
    #[error("invalid canvas size {width}x{height}")]
    Canvas { width: u32, height: u32 },

    // === Output Errors ===
    /// Creating or writing an output file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    PngEncode(#[from] png::EncodingError),

    /// JSON serialization failed.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
