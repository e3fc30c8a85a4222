//! Data models for GIOS processing
//!
//! This module contains the core data structures for representing GIOS station
//! metadata, raw and normalized yearly measurement tables, the combined
//! multi-year dataset, and the derived tables produced by the aggregation
//! engine.
//!
//! Lifecycle: station metadata is loaded once per run and immutable for its
//! duration. Raw and normalized tables are transient, one per year, and are
//! discarded after being folded into the [`CombinedDataset`]. The combined
//! dataset is the single long-lived artifact; every aggregation output is a
//! newly allocated value that never aliases or mutates it.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// =============================================================================
// Station Metadata
// =============================================================================

/// One row of the GIOS station metadata table
///
/// Carries the canonical station code, the comma-joined historical codes as
/// published (zero or more), the locality (town/city) the station is located
/// in, and its region (voivodeship).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StationRecord {
    /// Canonical station code - the single currently valid identifier
    pub code: String,

    /// Comma-joined formerly used codes, as published in the metadata sheet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical_codes: Option<String>,

    /// Locality (town/city) the station is physically located in
    pub locality: String,

    /// Region (voivodeship) grouping multiple localities
    pub region: String,
}

impl StationRecord {
    /// Create a new station metadata record
    pub fn new(
        code: impl Into<String>,
        historical_codes: Option<&str>,
        locality: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            historical_codes: historical_codes.map(str::to_string),
            locality: locality.into(),
            region: region.into(),
        }
    }
}

/// Two-level column key of the combined dataset: canonical station code plus
/// the locality the station belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct StationKey {
    pub code: String,
    pub locality: String,
}

impl StationKey {
    pub fn new(code: impl Into<String>, locality: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            locality: locality.into(),
        }
    }
}

impl std::fmt::Display for StationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code, self.locality)
    }
}

// =============================================================================
// Source Tables
// =============================================================================

/// One year's raw archive sheet, as delivered by the external loader
///
/// Each row is a sequence of cells. The first cell holds either a descriptive
/// marker (discarded during normalization), the header label, or a timestamp
/// string; the remaining cells hold raw station codes (header row) or
/// numeric-or-unparsable measurement text (data rows). Ephemeral: consumed
/// once by the normalizer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Number of rows, marker and header rows included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// A raw table labelled with its source year
///
/// The year is error context only; the timestamps inside the table are
/// authoritative for bucketing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct YearlyTable {
    pub year: i32,
    pub table: RawTable,
}

impl YearlyTable {
    pub fn new(year: i32, table: RawTable) -> Self {
        Self { year, table }
    }
}

// =============================================================================
// Normalized Tables
// =============================================================================

/// One station's measurement column: canonical code plus one value slot per
/// retained row, `None` where the source cell was missing or unparsable
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StationColumn {
    pub code: String,
    pub values: Vec<Option<f64>>,
}

/// One year's table after schema normalization: rows keyed by parsed
/// timestamp, columns keyed by canonical station code
///
/// Transient: produced by the normalizer, consumed by the selector and the
/// locality index builder, then discarded.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NormalizedTable {
    pub year: i32,
    pub timestamps: Vec<NaiveDateTime>,
    pub columns: Vec<StationColumn>,
}

impl NormalizedTable {
    /// Canonical station codes of this table's columns, in column order
    pub fn station_codes(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.code.as_str())
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Return a new table holding only the given stations, in the given order
    ///
    /// Codes absent from this table are skipped. Used by the orchestrator to
    /// restrict every year to the cross-year intersection set so all yearly
    /// contributions share one column layout.
    pub fn restrict(&self, codes: &[String]) -> NormalizedTable {
        let columns = codes
            .iter()
            .filter_map(|code| self.columns.iter().find(|c| &c.code == code).cloned())
            .collect();

        NormalizedTable {
            year: self.year,
            timestamps: self.timestamps.clone(),
            columns,
        }
    }
}

// =============================================================================
// Indexed Tables and the Combined Dataset
// =============================================================================

/// One measurement column keyed by the full (station, locality) pair
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MeasurementColumn {
    pub key: StationKey,
    pub values: Vec<Option<f64>>,
}

/// A normalized table whose columns carry full [`StationKey`]s; one year's
/// contribution to the combined dataset
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IndexedTable {
    pub year: i32,
    pub timestamps: Vec<NaiveDateTime>,
    pub columns: Vec<MeasurementColumn>,
}

/// The durable multi-year dataset
///
/// Rows are corrected hourly timestamps spanning all years; columns are the
/// cross-year intersection set, one (station, locality) pair each. Constructed
/// once by the pipeline orchestrator and read immutably by the aggregation
/// engine; there is no mutating surface.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CombinedDataset {
    timestamps: Vec<NaiveDateTime>,
    columns: Vec<MeasurementColumn>,
}

impl CombinedDataset {
    pub(crate) fn new(timestamps: Vec<NaiveDateTime>, columns: Vec<MeasurementColumn>) -> Self {
        Self {
            timestamps,
            columns,
        }
    }

    /// Row keys: corrected timestamps in source order, all years stacked
    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    /// Measurement columns, one per station of the intersection set
    pub fn columns(&self) -> &[MeasurementColumn] {
        &self.columns
    }

    /// Column keys in column order
    pub fn keys(&self) -> impl Iterator<Item = &StationKey> {
        self.columns.iter().map(|c| &c.key)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Number of station columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

// =============================================================================
// Derived Tables
// =============================================================================

/// A mean-value column keyed by station
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MeanColumn {
    pub key: StationKey,
    pub values: Vec<Option<f64>>,
}

/// Per-station monthly means, rows keyed by (calendar year, calendar month)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MonthlyMeanTable {
    pub(crate) periods: Vec<(i32, u32)>,
    pub(crate) columns: Vec<MeanColumn>,
}

impl MonthlyMeanTable {
    /// (year, month) row keys in chronological order
    pub fn periods(&self) -> &[(i32, u32)] {
        &self.periods
    }

    pub fn columns(&self) -> &[MeanColumn] {
        &self.columns
    }

    /// Look up the column of one station key
    pub fn column(&self, key: &StationKey) -> Option<&MeanColumn> {
        self.columns.iter().find(|c| &c.key == key)
    }
}

/// Per-station daily means, rows keyed by calendar day
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DailyMeanTable {
    pub(crate) days: Vec<NaiveDate>,
    pub(crate) columns: Vec<MeanColumn>,
}

impl DailyMeanTable {
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn columns(&self) -> &[MeanColumn] {
        &self.columns
    }
}

/// Monthly means of one locality, averaged across its stations
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocalitySeries {
    pub locality: String,
    pub periods: Vec<(i32, u32)>,
    pub values: Vec<Option<f64>>,
}

/// A mean-value column keyed by locality
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocalityColumn {
    pub locality: String,
    pub values: Vec<Option<f64>>,
}

/// Monthly means rolled up per locality, one column per locality
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocalityMeanTable {
    pub(crate) periods: Vec<(i32, u32)>,
    pub(crate) columns: Vec<LocalityColumn>,
}

impl LocalityMeanTable {
    pub fn periods(&self) -> &[(i32, u32)] {
        &self.periods
    }

    pub fn columns(&self) -> &[LocalityColumn] {
        &self.columns
    }

    pub fn column(&self, locality: &str) -> Option<&LocalityColumn> {
        self.columns.iter().find(|c| c.locality == locality)
    }
}

/// An exceedance-day count column keyed by station
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CountColumn {
    pub key: StationKey,
    pub counts: Vec<u32>,
}

/// Exceedance-day counts, rows keyed by requested year, columns by station
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExceedanceTable {
    pub(crate) years: Vec<i32>,
    pub(crate) columns: Vec<CountColumn>,
}

impl ExceedanceTable {
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn columns(&self) -> &[CountColumn] {
        &self.columns
    }

    /// Row position of a year, if the table has it
    pub fn year_index(&self, year: i32) -> Option<usize> {
        self.years.iter().position(|&y| y == year)
    }

    pub fn column(&self, key: &StationKey) -> Option<&CountColumn> {
        self.columns.iter().find(|c| &c.key == key)
    }
}

/// An exceedance-day count column keyed by region
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RegionColumn {
    pub region: String,
    pub counts: Vec<u32>,
}

/// Regional exceedance-day counts, rows keyed by requested year, columns by
/// region in alphabetical order
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RegionalExceedanceTable {
    pub(crate) years: Vec<i32>,
    pub(crate) columns: Vec<RegionColumn>,
}

impl RegionalExceedanceTable {
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn columns(&self) -> &[RegionColumn] {
        &self.columns
    }

    pub fn column(&self, region: &str) -> Option<&RegionColumn> {
        self.columns.iter().find(|c| c.region == region)
    }
}

/// Result of a top/bottom ranking: the selected station keys (head-k then
/// tail-k of the descending sort, overlap preserved) and the exceedance
/// sub-table restricted to them
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RankingSelection {
    pub stations: Vec<StationKey>,
    pub table: ExceedanceTable,
}
