//! Schema normalizer for raw GIOS yearly tables
//!
//! A GIOS archive sheet opens with a block of descriptive rows (running
//! index, indicator, averaging period, unit, instrument code) followed by one
//! header row of raw station codes and then the hourly data rows. Layout and
//! station codes both drift between years. The normalizer turns one such
//! sheet into a clean [`NormalizedTable`]: descriptive rows stripped, header
//! promoted, timestamps parsed, station codes resolved to canonical form.
//!
//! Degradation policy: a data row whose timestamp does not parse is dropped,
//! and a cell that is not a valid number becomes a missing value; neither
//! aborts the table. Structural problems (nothing left after marker
//! stripping, no data after the header, two columns collapsing onto one
//! canonical code) abort the year with a contextual error.

use crate::app::models::{NormalizedTable, RawTable, StationColumn};
use crate::app::services::station_registry::StationRegistry;
use crate::constants::{MARKER_ROWS, TIMESTAMP_FORMATS};
use crate::{Error, Result};
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[cfg(test)]
pub mod tests;

/// Normalizer for raw yearly measurement tables
#[derive(Debug)]
pub struct Normalizer {
    registry: Arc<StationRegistry>,
}

impl Normalizer {
    /// Create a normalizer with its station registry dependency
    pub fn new(registry: Arc<StationRegistry>) -> Self {
        Self { registry }
    }

    /// Normalize one year's raw table
    ///
    /// The input is not mutated; a fresh table is returned.
    ///
    /// # Arguments
    /// * `year` - Source year, used for error context and logging
    /// * `raw` - The raw sheet as delivered by the external loader
    ///
    /// # Errors
    /// * `Error::MalformedSource` if no rows survive marker stripping, the
    ///   header has no station columns, or no data rows follow the header
    /// * `Error::DuplicateStation` if two raw columns resolve to the same
    ///   canonical code
    pub fn normalize(&self, year: i32, raw: &RawTable) -> Result<NormalizedTable> {
        let mut rows = raw.rows.iter().filter(|row| !Self::is_marker_row(row.as_slice()));

        let header = rows.next().ok_or_else(|| {
            Error::malformed_source(year, "no rows survive marker stripping")
        })?;

        let codes = self.promote_header(year, header)?;

        let mut timestamps: Vec<NaiveDateTime> = Vec::new();
        let mut values: Vec<Vec<Option<f64>>> = vec![Vec::new(); codes.len()];
        let mut data_rows = 0usize;
        let mut dropped_rows = 0usize;

        for row in rows {
            data_rows += 1;
            let first = row.first().map(String::as_str).unwrap_or("");

            let Some(timestamp) = parse_timestamp(first) else {
                debug!("Year {}: dropping row with unparsable timestamp '{}'", year, first);
                dropped_rows += 1;
                continue;
            };

            timestamps.push(timestamp);
            for (i, column) in values.iter_mut().enumerate() {
                column.push(row.get(i + 1).and_then(|cell| parse_value(cell)));
            }
        }

        if data_rows == 0 {
            return Err(Error::malformed_source(
                year,
                "no data rows after header promotion",
            ));
        }

        if timestamps.is_empty() {
            warn!(
                "Year {}: every data row failed timestamp parsing, table is empty",
                year
            );
        }

        info!(
            "Normalized year {}: {} stations, {} rows ({} dropped)",
            year,
            codes.len(),
            timestamps.len(),
            dropped_rows
        );

        let columns = codes
            .into_iter()
            .zip(values)
            .map(|(code, values)| StationColumn { code, values })
            .collect();

        Ok(NormalizedTable {
            year,
            timestamps,
            columns,
        })
    }

    /// Resolve the promoted header's raw station codes to canonical codes,
    /// rejecting collisions rather than silently merging columns
    fn promote_header(&self, year: i32, header: &[String]) -> Result<Vec<String>> {
        if header.len() < 2 {
            return Err(Error::malformed_source(
                year,
                "header row has no station columns",
            ));
        }

        let mut codes: Vec<String> = Vec::with_capacity(header.len() - 1);
        // canonical code -> raw code it was first seen as
        let mut seen: HashMap<String, &String> = HashMap::new();

        for raw_code in &header[1..] {
            let canonical = self.registry.resolve(raw_code).to_string();

            if let Some(first) = seen.get(&canonical) {
                return Err(Error::duplicate_station(
                    year,
                    canonical.as_str(),
                    first.as_str(),
                    raw_code.as_str(),
                ));
            }

            seen.insert(canonical.clone(), raw_code);
            codes.push(canonical);
        }

        Ok(codes)
    }

    fn is_marker_row(row: &[String]) -> bool {
        row.first()
            .is_some_and(|cell| MARKER_ROWS.contains(&cell.trim()))
    }
}

fn parse_timestamp(cell: &str) -> Option<NaiveDateTime> {
    let cell = cell.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(cell, format).ok())
}

/// Numeric coercion: sporadic noise in the historical sheets degrades to a
/// missing value, never aborts the row
fn parse_value(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    cell.parse::<f64>().ok()
}
