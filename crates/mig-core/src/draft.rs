//! U.S. Selective Service induction counts, 1940-1973.

/// Inductions per calendar year, sorted by year.
const SELECTIVE_SERVICE_INDUCTIONS: &[(i32, u64)] = &[
    (1940, 50_208),
    (1941, 923_842),
    (1942, 3_033_361),
    (1943, 1_915_845),
    (1944, 1_572_277),
    (1945, 945_862),
    (1946, 183_383),
    (1947, 0),
    (1948, 202_517),
    (1949, 96_208),
    (1950, 219_771),
    (1951, 551_806),
    (1952, 474_263),
    (1953, 249_555),
    (1954, 242),
    (1955, 8_758),
    (1956, 1_378),
    (1957, 6_664),
    (1958, 6_341),
    (1959, 8_716),
    (1960, 8_175),
    (1961, 118_586),
    (1962, 82_252),
    (1963, 119_373),
    (1964, 112_386),
    (1965, 230_991),
    (1966, 382_010),
    (1967, 228_263),
    (1968, 296_406),
    (1969, 283_586),
    (1970, 162_746),
    (1971, 94_092),
    (1972, 49_514),
    (1973, 646),
];

/// Immutable year → induction count table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftTable {
    entries: &'static [(i32, u64)],
}

impl DraftTable {
    /// The Selective Service table used by the overlay.
    pub const fn selective_service() -> Self {
        Self {
            entries: SELECTIVE_SERVICE_INDUCTIONS,
        }
    }

    /// Wraps a custom table.
    ///
    /// # Panics
    ///
    /// In debug builds, panics unless `entries` is sorted by year without
    /// duplicates.
    pub fn from_entries(entries: &'static [(i32, u64)]) -> Self {
        debug_assert!(
            is_strictly_ascending(entries),
            "draft table entries must be sorted by year without duplicates"
        );
        Self { entries }
    }

    pub fn inductions(&self, year: i32) -> Option<u64> {
        self.entries
            .binary_search_by_key(&year, |(entry_year, _)| *entry_year)
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Entries at or after `min_year`.
    pub fn since(&self, min_year: i32) -> impl Iterator<Item = (i32, u64)> + '_ {
        self.iter().filter(move |(year, _)| *year >= min_year)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.entries.first().map(|(year, _)| *year)
    }

    pub fn last_year(&self) -> Option<i32> {
        self.entries.last().map(|(year, _)| *year)
    }
}

fn is_strictly_ascending(entries: &[(i32, u64)]) -> bool {
    entries.windows(2).all(|pair| pair[0].0 < pair[1].0)
}

impl Default for DraftTable {
    fn default() -> Self {
        Self::selective_service()
    }
}
