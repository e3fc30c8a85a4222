//! Common-station selector
//!
//! Stations come and go between years; only stations present in every year's
//! source data can form a consistent multi-year series. This module computes
//! that intersection set over the normalized yearly tables.

use crate::app::models::NormalizedTable;
use crate::{Error, Result};
use std::collections::HashSet;
use tracing::debug;

/// Compute the set of canonical station codes present in every table
///
/// Pure set semantics: neither the order of the input tables nor the column
/// order within a table affects the result, which is returned sorted so every
/// caller sees one deterministic column layout.
///
/// # Errors
/// * `Error::EmptyIntersection` if no station is common to all tables (or no
///   tables were supplied)
pub fn common_stations(tables: &[NormalizedTable]) -> Result<Vec<String>> {
    let Some((first, rest)) = tables.split_first() else {
        return Err(Error::empty_intersection(0));
    };

    let mut common: HashSet<&str> = first.station_codes().collect();
    for table in rest {
        let codes: HashSet<&str> = table.station_codes().collect();
        common.retain(|code| codes.contains(code));
    }

    if common.is_empty() {
        return Err(Error::empty_intersection(tables.len()));
    }

    let mut sorted: Vec<String> = common.into_iter().map(str::to_string).collect();
    sorted.sort();

    debug!(
        "{} stations common to all {} yearly tables",
        sorted.len(),
        tables.len()
    );

    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::StationColumn;

    fn table(year: i32, codes: &[&str]) -> NormalizedTable {
        NormalizedTable {
            year,
            timestamps: vec![],
            columns: codes
                .iter()
                .map(|code| StationColumn {
                    code: code.to_string(),
                    values: vec![],
                })
                .collect(),
        }
    }

    #[test]
    fn test_single_table_intersects_with_itself() {
        let t = table(2020, &["B", "A", "C"]);

        let common = common_stations(&[t.clone(), t]).unwrap();
        assert_eq!(common, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_intersection_across_years() {
        let tables = [
            table(2020, &["StationA", "StationB"]),
            table(2021, &["StationA", "StationC"]),
        ];

        assert_eq!(common_stations(&tables).unwrap(), vec!["StationA"]);
    }

    #[test]
    fn test_intersection_is_order_independent() {
        let a = table(2020, &["X", "Y", "Z"]);
        let b = table(2021, &["Z", "X"]);
        let c = table(2024, &["X", "W", "Z"]);

        let forward = common_stations(&[a.clone(), b.clone(), c.clone()]).unwrap();
        let backward = common_stations(&[c, b, a]).unwrap();

        assert_eq!(forward, backward);
        assert_eq!(forward, vec!["X", "Z"]);
    }

    #[test]
    fn test_empty_intersection_is_an_error() {
        let tables = [table(2020, &["A"]), table(2021, &["B"])];

        let err = common_stations(&tables).unwrap_err();
        assert!(matches!(err, Error::EmptyIntersection { table_count: 2 }));
    }

    #[test]
    fn test_no_tables_is_an_error() {
        assert!(matches!(
            common_stations(&[]).unwrap_err(),
            Error::EmptyIntersection { table_count: 0 }
        ));
    }
}
