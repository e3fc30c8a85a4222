//! Pipeline orchestration for the multi-year combined dataset
//!
//! Sequences the per-year services into one run: normalize every yearly
//! table, intersect their station sets, restrict each year to the
//! intersection, attach locality keys, correct the midnight boundary, and
//! stack all years into the [`CombinedDataset`].
//!
//! Years are assumed non-overlapping in time. If they do overlap, rows are
//! stacked in input order and neither re-sorted nor deduplicated; that is
//! documented behavior, not corrected automatically.

use crate::app::models::{CombinedDataset, MeasurementColumn, NormalizedTable, YearlyTable};
use crate::app::services::locality_index::attach_localities;
use crate::app::services::midnight::shift_midnight;
use crate::app::services::normalizer::Normalizer;
use crate::app::services::selector::common_stations;
use crate::app::services::station_registry::StationRegistry;
use crate::Result;
use chrono::NaiveDateTime;
use std::sync::Arc;
use tracing::info;

/// Statistics about one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineStats {
    /// Number of yearly tables folded into the dataset
    pub years_processed: usize,

    /// Size of the cross-year station intersection set
    pub common_stations: usize,

    /// Total rows across all years after normalization
    pub total_rows: usize,
}

impl PipelineStats {
    /// One-line human-readable summary for logs and reports
    pub fn summary(&self) -> String {
        format!(
            "{} years, {} common stations, {} rows",
            self.years_processed, self.common_stations, self.total_rows
        )
    }
}

/// Result of a pipeline run: the combined dataset plus run statistics
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub dataset: CombinedDataset,
    pub stats: PipelineStats,
}

/// Orchestrator merging all yearly tables into one combined dataset
///
/// Holds the shared station registry; everything else is per-run state. The
/// per-year stages have no cross-year dependencies, so callers needing
/// parallelism can normalize years on their own threads and feed the results
/// through the same services; this orchestrator runs them sequentially.
#[derive(Debug)]
pub struct Pipeline {
    registry: Arc<StationRegistry>,
}

impl Pipeline {
    /// Create a pipeline with its station registry dependency
    pub fn new(registry: Arc<StationRegistry>) -> Self {
        Self { registry }
    }

    /// Merge all yearly tables into one combined dataset
    ///
    /// # Arguments
    /// * `years` - One labelled raw table per source year, in the order their
    ///   rows should appear in the dataset
    ///
    /// # Errors
    /// * Any `Error::MalformedSource` / `Error::DuplicateStation` from
    ///   normalization of a single year
    /// * `Error::EmptyIntersection` if no station is common to all years
    /// * `Error::UnknownStation` if metadata is stale relative to the data
    pub fn build(&self, years: &[YearlyTable]) -> Result<PipelineResult> {
        info!("Building combined dataset from {} yearly tables", years.len());

        let normalizer = Normalizer::new(Arc::clone(&self.registry));
        let normalized = years
            .iter()
            .map(|yearly| normalizer.normalize(yearly.year, &yearly.table))
            .collect::<Result<Vec<NormalizedTable>>>()?;

        let common = common_stations(&normalized)?;

        let mut timestamps: Vec<NaiveDateTime> = Vec::new();
        let mut columns: Vec<MeasurementColumn> = Vec::new();

        for table in &normalized {
            // Every year is restricted in the same sorted intersection order,
            // so all contributions share one column layout
            let restricted = table.restrict(&common);
            let indexed = attach_localities(&restricted, &self.registry)?;
            let corrected = shift_midnight(indexed);

            if columns.is_empty() {
                timestamps = corrected.timestamps;
                columns = corrected.columns;
            } else {
                timestamps.extend(corrected.timestamps);
                for (column, part) in columns.iter_mut().zip(corrected.columns) {
                    debug_assert_eq!(column.key, part.key);
                    column.values.extend(part.values);
                }
            }
        }

        let stats = PipelineStats {
            years_processed: years.len(),
            common_stations: common.len(),
            total_rows: timestamps.len(),
        };
        info!("Combined dataset built: {}", stats.summary());

        Ok(PipelineResult {
            dataset: CombinedDataset::new(timestamps, columns),
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::app::models::StationKey;
    use crate::app::services::normalizer::tests::{create_raw_table, test_registry};

    fn two_years() -> Vec<YearlyTable> {
        vec![
            YearlyTable::new(
                2020,
                create_raw_table(
                    &["OldStationA", "StationB"],
                    &[
                        ("2020-01-01 00:00:00", &["10", "20"]),
                        ("2020-01-01 01:00:00", &["11", "21"]),
                    ],
                ),
            ),
            YearlyTable::new(
                2021,
                create_raw_table(
                    &["StationA", "OldStationC"],
                    &[
                        ("2021-01-01 00:00:00", &["30", "40"]),
                        ("2021-01-01 01:00:00", &["31", "41"]),
                    ],
                ),
            ),
        ]
    }

    #[test]
    fn test_columns_are_exactly_the_intersection_set() {
        let result = Pipeline::new(test_registry()).build(&two_years()).unwrap();

        let keys: Vec<_> = result.dataset.keys().cloned().collect();
        assert_eq!(keys, vec![StationKey::new("StationA", "Alpha")]);
    }

    #[test]
    fn test_rows_are_stacked_in_source_order() {
        let result = Pipeline::new(test_registry()).build(&two_years()).unwrap();

        assert_eq!(result.dataset.len(), 4);
        assert_eq!(
            result.dataset.columns()[0].values,
            vec![Some(10.0), Some(11.0), Some(30.0), Some(31.0)]
        );
    }

    #[test]
    fn test_stats_reflect_the_run() {
        let result = Pipeline::new(test_registry()).build(&two_years()).unwrap();

        assert_eq!(
            result.stats,
            PipelineStats {
                years_processed: 2,
                common_stations: 1,
                total_rows: 4,
            }
        );
        assert_eq!(result.stats.summary(), "2 years, 1 common stations, 4 rows");
    }

    #[test]
    fn test_disjoint_years_fail_with_empty_intersection() {
        let years = vec![
            YearlyTable::new(
                2020,
                create_raw_table(&["StationA"], &[("2020-01-01 01:00:00", &["1"])]),
            ),
            YearlyTable::new(
                2021,
                create_raw_table(&["StationB"], &[("2021-01-01 01:00:00", &["2"])]),
            ),
        ];

        let err = Pipeline::new(test_registry()).build(&years).unwrap_err();
        assert!(matches!(err, Error::EmptyIntersection { table_count: 2 }));
    }

    #[test]
    fn test_no_years_fail_with_empty_intersection() {
        let err = Pipeline::new(test_registry()).build(&[]).unwrap_err();
        assert!(matches!(err, Error::EmptyIntersection { table_count: 0 }));
    }
}
