//! JSON run report.

use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::debug;

use mig_model::{CorrelationResult, MergedRecord};

use crate::error::{ReportError, Result};

pub const REPORT_SCHEMA: &str = "draft-overlay.run-report";
pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    input: String,
    years: &'a [MergedRecord],
    correlations: &'a [CorrelationResult],
}

/// Writes the merged rows and correlation results as pretty JSON.
pub fn write_run_report(
    path: &Path,
    input: &Path,
    merged: &[MergedRecord],
    correlations: &[CorrelationResult],
) -> Result<()> {
    let payload = RunReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        input: input.display().to_string(),
        years: merged,
        correlations,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(path, format!("{json}\n")).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), years = merged.len(), "run report written");
    Ok(())
}
