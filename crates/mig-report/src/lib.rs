//! Rendering and report output for the draft overlay.
//!
//! The chart is composed as SVG ([`compose_svg`]), rasterized with `resvg`
//! ([`rasterize`]) and written as a PNG carrying its DPI ([`write_png`]).
//! [`write_run_report`] writes the merged rows and correlations as JSON.

pub mod axis;
pub mod chart;
pub mod error;
pub mod raster;
pub mod report;
pub mod svg;

pub use chart::{
    CANVAS_HEIGHT, CANVAS_WIDTH, CREDIT_CAPTION, OverlayData, SOURCE_CAPTION, TITLE,
    UNITS_PER_INCH, compose_svg,
};
pub use error::{ReportError, Result};
pub use raster::{DEFAULT_DPI, FontOptions, pixels_per_meter, rasterize, write_png, write_svg};
pub use report::{REPORT_SCHEMA, REPORT_SCHEMA_VERSION, write_run_report};
