//! Column resolution for the Statistics Canada components table.

use csv::StringRecord;

/// Header of the reference period column (e.g. `1946-01`).
pub const DATE_COLUMN: &str = "REF_DATE";
/// Header of the geography column.
pub const COUNTRY_COLUMN: &str = "GEO";
/// Header of the population growth component column.
pub const COMPONENT_COLUMN: &str = "Components of population growth";
/// Header of the numeric value column.
pub const VALUE_COLUMN: &str = "VALUE";

/// Positions of the four columns the loader reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub date: usize,
    pub country: usize,
    pub component: usize,
    pub value: usize,
}

impl ColumnLayout {
    /// Fixed positions of table 17-10-0040-01.
    pub const POSITIONAL: Self = Self {
        date: 0,
        country: 1,
        component: 3,
        value: 10,
    };

    /// Resolves columns by header name, keeping the positional index for
    /// any name that is absent.
    ///
    /// Returns `None` when the record names none of the columns, meaning it
    /// is a data row rather than a header.
    pub fn from_header(record: &StringRecord) -> Option<Self> {
        let headers: Vec<String> = record.iter().map(normalize_header).collect();
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header.eq_ignore_ascii_case(name))
        };

        let date = find(DATE_COLUMN);
        let country = find(COUNTRY_COLUMN);
        let component = find(COMPONENT_COLUMN);
        let value = find(VALUE_COLUMN);
        if date.is_none() && country.is_none() && component.is_none() && value.is_none() {
            return None;
        }

        let fallback = Self::POSITIONAL;
        Some(Self {
            date: date.unwrap_or(fallback.date),
            country: country.unwrap_or(fallback.country),
            component: component.unwrap_or(fallback.component),
            value: value.unwrap_or(fallback.value),
        })
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::POSITIONAL
    }
}

/// Trims whitespace and a UTF-8 BOM, and collapses inner whitespace runs.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}').trim();
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn statcan_header_matches_positional_layout() {
        let header = record(&[
            "\u{feff}REF_DATE",
            "GEO",
            "DGUID",
            "Components of population growth",
            "UOM",
            "UOM_ID",
            "SCALAR_FACTOR",
            "SCALAR_ID",
            "VECTOR",
            "COORDINATE",
            "VALUE",
            "STATUS",
        ]);
        assert_eq!(
            ColumnLayout::from_header(&header),
            Some(ColumnLayout::POSITIONAL)
        );
    }

    #[test]
    fn reordered_header_is_resolved_by_name() {
        let header = record(&["VALUE", "ref_date", "Components  of population growth", "GEO"]);
        assert_eq!(
            ColumnLayout::from_header(&header),
            Some(ColumnLayout {
                date: 1,
                country: 3,
                component: 2,
                value: 0,
            })
        );
    }

    #[test]
    fn partial_header_falls_back_per_column() {
        let header = record(&["Period", "GEO", "x", "Component", "VALUE"]);
        let layout = ColumnLayout::from_header(&header).expect("header detected");
        assert_eq!(layout.date, 0);
        assert_eq!(layout.country, 1);
        assert_eq!(layout.component, 3);
        assert_eq!(layout.value, 4);
    }

    #[test]
    fn data_row_is_not_a_header() {
        let row = record(&["1951-01", "Canada", "", "Immigrants", "", "", "", "", "", "", "100"]);
        assert_eq!(ColumnLayout::from_header(&row), None);
    }
}
