//! Application constants for the GIOS processor
//!
//! This module contains the fixed vocabulary of the GIOS archive sheets and
//! the reference PM2.5 norms used by callers of the aggregation engine.

// =============================================================================
// GIOS Sheet Structure
// =============================================================================

/// Descriptive first-cell markers of rows that precede the header row in a
/// GIOS archive sheet. Every row opening with one of these labels is metadata
/// about the sheet, not measurement data, and is discarded during
/// normalization: running index, indicator name, averaging period, unit, and
/// instrument (sampling point) code.
pub const MARKER_ROWS: &[&str] = &["Nr", "Wskaźnik", "Czas uśredniania", "Jednostka", "Kod stanowiska"];

/// First cell of the header row; the label of the column that holds
/// timestamps once the header has been promoted
pub const STATION_CODE_LABEL: &str = "Kod stacji";

/// Timestamp formats accepted in the first column of data rows, tried in
/// order. Yearly sheets normally carry second precision; minute precision
/// appears in some older exports.
pub const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

// =============================================================================
// Regional Aggregation
// =============================================================================

/// Bucket for stations that have no region (voivodeship) in the metadata.
/// Regional roll-ups keep such stations rather than dropping them.
pub const UNKNOWN_REGION: &str = "Unknown";

// =============================================================================
// PM2.5 Reference Norms
// =============================================================================

/// Reference daily PM2.5 norms in µg/m³
///
/// The aggregation engine always takes the threshold as a parameter; these are
/// the values callers usually pass.
pub mod pm25 {
    /// WHO 2021 air quality guideline for the 24-hour PM2.5 mean
    pub const WHO_DAILY_GUIDELINE_UG_M3: f64 = 15.0;

    /// EU Ambient Air Quality Directive 24-hour PM2.5 limit value
    pub const EU_DAILY_LIMIT_UG_M3: f64 = 25.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_rows_exclude_header_label() {
        // The header row must survive marker stripping so it can be promoted
        assert!(!MARKER_ROWS.contains(&STATION_CODE_LABEL));
    }

    #[test]
    fn test_marker_rows_are_distinct() {
        for (i, a) in MARKER_ROWS.iter().enumerate() {
            for b in &MARKER_ROWS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_timestamp_formats_parse_hourly_samples() {
        use chrono::NaiveDateTime;

        assert!(NaiveDateTime::parse_from_str("2021-01-01 13:00:00", TIMESTAMP_FORMATS[0]).is_ok());
        assert!(NaiveDateTime::parse_from_str("2021-01-01 13:00", TIMESTAMP_FORMATS[1]).is_ok());
    }

    #[test]
    fn test_norms_are_ordered() {
        assert!(pm25::WHO_DAILY_GUIDELINE_UG_M3 < pm25::EU_DAILY_LIMIT_UG_M3);
    }
}
