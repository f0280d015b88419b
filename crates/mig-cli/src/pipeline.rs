//! Pipeline stages: ingest, aggregate, merge, correlate, render.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use mig_core::{DraftTable, YearlyTotals, aggregate, correlate_windows, merge_for_analysis};
use mig_ingest::{IngestStats, read_migration_csv};
use mig_model::{ANALYSIS_START_YEAR, CorrelationResult, MergedRecord};
use mig_report::{FontOptions, OverlayData, compose_svg, rasterize, write_png, write_svg};

/// Everything computed before rendering.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub stats: IngestStats,
    pub totals: YearlyTotals,
    pub merged: Vec<MergedRecord>,
    pub correlations: Vec<CorrelationResult>,
}

/// Chart formats to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Png,
    Svg,
    Both,
}

impl ChartFormat {
    fn wants_png(self) -> bool {
        matches!(self, Self::Png | Self::Both)
    }

    fn wants_svg(self) -> bool {
        matches!(self, Self::Svg | Self::Both)
    }
}

/// Where and how to render the chart.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub output: PathBuf,
    pub dpi: u32,
    pub format: ChartFormat,
    pub fonts: FontOptions,
}

/// Reads the input and computes the merged rows and correlations.
pub fn analyze(input: &Path, draft: &DraftTable) -> Result<Analysis> {
    let start = Instant::now();

    let (records, stats) = {
        let _span = info_span!("ingest", path = %input.display()).entered();
        read_migration_csv(input)
            .with_context(|| format!("load migration data from {}", input.display()))?
    };

    let totals = {
        let _span = info_span!("aggregate", records = records.len()).entered();
        aggregate(&records)
    };

    let merged = {
        let _span = info_span!("merge", years = totals.len()).entered();
        merge_for_analysis(&totals, draft)
    };

    let correlations = {
        let _span = info_span!("correlate", rows = merged.len()).entered();
        correlate_windows(&merged)
    };

    info!(
        rows_kept = stats.rows_kept,
        years = totals.len(),
        merged = merged.len(),
        duration_ms = start.elapsed().as_millis(),
        "analysis complete"
    );
    Ok(Analysis {
        stats,
        totals,
        merged,
        correlations,
    })
}

/// Builds the plotted series: all aggregated years and draft years from 1951.
pub fn overlay_data(analysis: &Analysis, draft: &DraftTable) -> OverlayData {
    OverlayData::new(
        analysis.totals.since(ANALYSIS_START_YEAR).collect(),
        draft.since(ANALYSIS_START_YEAR).collect(),
        analysis.correlations.clone(),
    )
}

/// Renders the chart and returns the paths written.
pub fn render(analysis: &Analysis, draft: &DraftTable, config: &RenderConfig) -> Result<Vec<PathBuf>> {
    let _span = info_span!("render", output = %config.output.display(), dpi = config.dpi).entered();
    let svg = compose_svg(&overlay_data(analysis, draft)).context("compose chart")?;

    let mut written = Vec::new();
    if config.format.wants_svg() {
        let path = svg_path(&config.output);
        write_svg(&svg, &path).context("write chart SVG")?;
        written.push(path);
    }
    if config.format.wants_png() {
        let image = rasterize(&svg, config.dpi, &config.fonts).context("rasterize chart")?;
        write_png(&image, &config.output, config.dpi).context("write chart PNG")?;
        written.push(config.output.clone());
    }
    debug!(files = written.len(), "chart outputs written");
    Ok(written)
}

/// SVG output path derived from the chart output path.
pub fn svg_path(output: &Path) -> PathBuf {
    output.with_extension("svg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_path_swaps_extension() {
        assert_eq!(
            svg_path(Path::new("out/overlay.png")),
            PathBuf::from("out/overlay.svg")
        );
        assert_eq!(svg_path(Path::new("chart")), PathBuf::from("chart.svg"));
    }

    #[test]
    fn format_selection() {
        assert!(ChartFormat::Png.wants_png() && !ChartFormat::Png.wants_svg());
        assert!(!ChartFormat::Svg.wants_png() && ChartFormat::Svg.wants_svg());
        assert!(ChartFormat::Both.wants_png() && ChartFormat::Both.wants_svg());
    }
}
