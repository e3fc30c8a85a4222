//! Regional (voivodeship) exceedance roll-up

use super::exceedance::daily_means;
use crate::app::models::{CombinedDataset, RegionColumn, RegionalExceedanceTable};
use crate::app::services::station_registry::StationRegistry;
use crate::constants::UNKNOWN_REGION;
use chrono::Datelike;
use std::collections::BTreeMap;
use tracing::debug;

/// Count regional exceedance days per requested year
///
/// A region counts as exceeding on a day if any one of its stations has a
/// daily mean strictly greater than `threshold` (OR per day, not a sum of
/// per-station counts). Stations without a region in the metadata fall into
/// the `Unknown` bucket rather than being dropped. Region columns are
/// alphabetical; a requested year absent from the data yields zeros.
pub fn regional_exceedance(
    dataset: &CombinedDataset,
    registry: &StationRegistry,
    threshold: f64,
    years: &[i32],
) -> RegionalExceedanceTable {
    let daily = daily_means(dataset);

    // region -> member column positions in the daily table
    let mut regions: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (column, mean_column) in daily.columns.iter().enumerate() {
        let region = registry
            .region(&mean_column.key.code)
            .unwrap_or(UNKNOWN_REGION);
        if region == UNKNOWN_REGION {
            debug!(
                "Station {} has no region in the metadata, using '{}'",
                mean_column.key, UNKNOWN_REGION
            );
        }
        regions.entry(region.to_string()).or_default().push(column);
    }

    let columns = regions
        .into_iter()
        .map(|(region, members)| {
            let counts = years
                .iter()
                .map(|&year| {
                    daily
                        .days
                        .iter()
                        .enumerate()
                        .filter(|(row, day)| {
                            day.year() == year
                                && members.iter().any(|&member| {
                                    daily.columns[member].values[*row]
                                        .is_some_and(|mean| mean > threshold)
                                })
                        })
                        .count() as u32
                })
                .collect();

            RegionColumn { region, counts }
        })
        .collect();

    RegionalExceedanceTable {
        years: years.to_vec(),
        columns,
    }
}
