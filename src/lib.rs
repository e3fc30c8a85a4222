//! GIOS PM2.5 Processor Library
//!
//! A Rust library for reconciling several years of hourly PM2.5 measurements,
//! published by GIOS as independently formatted yearly tables with drifting
//! station identifiers, into one consistent multi-year time series keyed by
//! stable station identity and locality.
//!
//! This library provides tools for:
//! - Normalizing one year's raw archive table into a clean, timestamp-keyed table
//! - Resolving historical station codes to their canonical identifiers
//! - Intersecting station sets across years and indexing stations by locality
//! - Reattributing end-of-day (hour 0) samples to the correct calendar day
//! - Merging all years into one combined dataset
//! - Computing monthly/daily means, exceedance-day counts, station rankings,
//!   and regional (voivodeship) roll-ups over the combined dataset
//!
//! Network retrieval, archive/spreadsheet decoding, persistence and plotting
//! belong to external collaborators; this crate is a pure batch core that
//! receives in-memory tables and hands back read-only derived tables.

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregation;
        pub mod locality_index;
        pub mod midnight;
        pub mod normalizer;
        pub mod pipeline;
        pub mod selector;
        pub mod station_registry;
    }
}

// Re-export commonly used types
pub use app::models::{
    CombinedDataset, DailyMeanTable, ExceedanceTable, IndexedTable, LocalityMeanTable,
    LocalitySeries, MonthlyMeanTable, NormalizedTable, RankingSelection, RawTable,
    RegionalExceedanceTable, StationKey, StationRecord, YearlyTable,
};
pub use app::services::pipeline::{Pipeline, PipelineResult, PipelineStats};
pub use app::services::station_registry::StationRegistry;

/// Result type alias for GIOS processing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for GIOS processing operations
///
/// Every fatal error carries the offending station or year so failures in a
/// multi-year run can be traced back to one source table. Non-fatal numeric
/// coercion failures never surface here; they degrade to missing values.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Source table has no usable rows left after marker stripping, or the
    /// header row cannot be promoted
    #[error("malformed source table for year {year}: {reason}")]
    MalformedSource { year: i32, reason: String },

    /// Two raw columns of one yearly table resolve to the same canonical code
    #[error(
        "duplicate station in year {year}: raw columns '{first}' and '{second}' both resolve to canonical code '{canonical}'"
    )]
    DuplicateStation {
        year: i32,
        canonical: String,
        first: String,
        second: String,
    },

    /// Station code absent from the metadata table
    #[error("unknown station: '{code}' is not present in the station metadata")]
    UnknownStation { code: String },

    /// No station is present in every yearly table
    #[error("no station is common to all {table_count} yearly tables")]
    EmptyIntersection { table_count: usize },

    /// Requested year is not a row of the exceedance table
    #[error("year {year} is not present in the exceedance table")]
    YearNotFound { year: i32 },
}

impl Error {
    /// Create a malformed source error with year context
    pub fn malformed_source(year: i32, reason: impl Into<String>) -> Self {
        Self::MalformedSource {
            year,
            reason: reason.into(),
        }
    }

    /// Create a duplicate station error
    pub fn duplicate_station(
        year: i32,
        canonical: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::DuplicateStation {
            year,
            canonical: canonical.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create an unknown station error
    pub fn unknown_station(code: impl Into<String>) -> Self {
        Self::UnknownStation { code: code.into() }
    }

    /// Create an empty intersection error
    pub fn empty_intersection(table_count: usize) -> Self {
        Self::EmptyIntersection { table_count }
    }

    /// Create a year not found error
    pub fn year_not_found(year: i32) -> Self {
        Self::YearNotFound { year }
    }
}
