//! Migration data ingestion.
//!
//! Loads the Statistics Canada "components of population growth" CSV and
//! reduces it to cleaned [`MigrationRecord`](mig_model::MigrationRecord)s:
//!
//! - only `Canada` rows for the `Immigrants` and `Emigrants` components
//! - quarter suffixes stripped from the reference date (`1946-01` → `1946`)
//! - rows for the incomplete year `2025` dropped
//!
//! Columns are located by header name with a positional fallback.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use mig_ingest::read_migration_csv;
//!
//! let (records, stats) = read_migration_csv(Path::new("data.csv"))?;
//! ```

mod clean;
mod columns;
mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Cleaning Rules ===
pub use clean::{
    EXCLUDED_YEAR_LABEL, TARGET_COUNTRY, is_excluded_year, select_component, strip_quarter_suffix,
};

// === Column Resolution ===
pub use columns::{
    COMPONENT_COLUMN, COUNTRY_COLUMN, ColumnLayout, DATE_COLUMN, VALUE_COLUMN, normalize_header,
};

// === CSV Reading ===
pub use reader::{IngestStats, read_migration_csv, read_migration_from_reader};
