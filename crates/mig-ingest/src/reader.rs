//! Streaming read of the migration CSV into cleaned records.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, trace};

use mig_model::MigrationRecord;

use crate::clean::{TARGET_COUNTRY, is_excluded_year, select_component, strip_quarter_suffix};
use crate::columns::{COMPONENT_COLUMN, COUNTRY_COLUMN, ColumnLayout, DATE_COLUMN, VALUE_COLUMN};
use crate::error::{IngestError, Result};

/// Row counts gathered while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Data rows read (header excluded).
    pub rows_read: usize,
    /// Rows kept as records.
    pub rows_kept: usize,
    /// Rows dropped by the country/component filter.
    pub skipped_filter: usize,
    /// Rows dropped because their year label is the excluded year.
    pub skipped_excluded_year: usize,
}

/// Reads the CSV at `path` and returns the cleaned records.
pub fn read_migration_csv(path: &Path) -> Result<(Vec<MigrationRecord>, IngestStats)> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_migration_from_reader(file, path)
}

/// Reads cleaned records from any reader; `source` is used in errors.
///
/// Every row is inspected. The first row is treated as a header only when
/// it names at least one known column; otherwise the positional layout
/// applies and that row is processed like the rest.
pub fn read_migration_from_reader<R: Read>(
    reader: R,
    source: &Path,
) -> Result<(Vec<MigrationRecord>, IngestStats)> {
    let start = Instant::now();
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut layout: Option<ColumnLayout> = None;
    let mut records = Vec::new();
    let mut stats = IngestStats::default();

    for result in csv_reader.records() {
        let row = result.map_err(|e| IngestError::CsvParse {
            path: source.to_path_buf(),
            source: e,
        })?;

        let row_layout = match layout {
            Some(known) => known,
            None => {
                let detected = ColumnLayout::from_header(&row);
                let resolved = detected.unwrap_or_default();
                layout = Some(resolved);
                if detected.is_some() {
                    debug!(?resolved, "resolved columns from header");
                    continue;
                }
                debug!("no header row detected, using positional columns");
                resolved
            }
        };

        stats.rows_read += 1;
        match clean_row(&row, row_layout, source)? {
            RowOutcome::Kept(record) => {
                trace!(
                    year = record.year,
                    component = %record.component,
                    value = record.value,
                    "kept row"
                );
                stats.rows_kept += 1;
                records.push(record);
            }
            RowOutcome::Filtered => stats.skipped_filter += 1,
            RowOutcome::ExcludedYear => stats.skipped_excluded_year += 1,
        }
    }

    info!(
        path = %source.display(),
        rows_read = stats.rows_read,
        rows_kept = stats.rows_kept,
        skipped_filter = stats.skipped_filter,
        skipped_excluded_year = stats.skipped_excluded_year,
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok((records, stats))
}

enum RowOutcome {
    Kept(MigrationRecord),
    Filtered,
    ExcludedYear,
}

/// Applies the filters in source order: country, component, date, value.
fn clean_row(row: &StringRecord, layout: ColumnLayout, source: &Path) -> Result<RowOutcome> {
    let country = field(row, layout.country, COUNTRY_COLUMN, source)?;
    if country != TARGET_COUNTRY {
        return Ok(RowOutcome::Filtered);
    }
    let label = field(row, layout.component, COMPONENT_COLUMN, source)?;
    let Some(component) = select_component(country, label) else {
        return Ok(RowOutcome::Filtered);
    };

    let year_label = strip_quarter_suffix(field(row, layout.date, DATE_COLUMN, source)?);
    if is_excluded_year(&year_label) {
        return Ok(RowOutcome::ExcludedYear);
    }

    let raw_value = field(row, layout.value, VALUE_COLUMN, source)?;
    let value = raw_value
        .trim()
        .parse::<i64>()
        .map_err(|_| IngestError::InvalidValue {
            path: source.to_path_buf(),
            line: line_of(row),
            value: raw_value.to_string(),
        })?;
    let year = year_label
        .trim()
        .parse::<i32>()
        .map_err(|_| IngestError::InvalidYear {
            path: source.to_path_buf(),
            line: line_of(row),
            label: year_label.clone(),
        })?;

    Ok(RowOutcome::Kept(MigrationRecord {
        year,
        country: country.to_string(),
        component,
        value,
    }))
}

fn field<'r>(
    row: &'r StringRecord,
    index: usize,
    column: &'static str,
    source: &Path,
) -> Result<&'r str> {
    row.get(index).ok_or_else(|| IngestError::MissingField {
        path: source.to_path_buf(),
        line: line_of(row),
        column,
        index,
    })
}

fn line_of(row: &StringRecord) -> u64 {
    row.position().map_or(0, csv::Position::line)
}
