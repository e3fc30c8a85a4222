//! Daily means and threshold-exceedance counting

use super::mean_of;
use crate::app::models::{CombinedDataset, CountColumn, DailyMeanTable, ExceedanceTable, MeanColumn};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Per-station daily means
///
/// Rows are grouped by the calendar day of the corrected timestamps; a day
/// with no present value for a station yields missing for that station.
pub fn daily_means(dataset: &CombinedDataset) -> DailyMeanTable {
    let mut groups: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();
    for (row, timestamp) in dataset.timestamps().iter().enumerate() {
        groups.entry(timestamp.date()).or_default().push(row);
    }

    let days: Vec<NaiveDate> = groups.keys().copied().collect();
    let columns = dataset
        .columns()
        .iter()
        .map(|column| MeanColumn {
            key: column.key.clone(),
            values: groups
                .values()
                .map(|rows| mean_of(rows.iter().map(|&row| column.values[row])))
                .collect(),
        })
        .collect();

    DailyMeanTable { days, columns }
}

/// Count exceedance days per station per requested year
///
/// An exceedance day is a day whose daily mean is strictly greater than
/// `threshold`. Days with a missing daily mean never count. A requested year
/// absent from the data yields count 0, not an error.
pub fn exceedance_days(
    dataset: &CombinedDataset,
    threshold: f64,
    years: &[i32],
) -> ExceedanceTable {
    let daily = daily_means(dataset);

    let columns = daily
        .columns
        .iter()
        .map(|column| CountColumn {
            key: column.key.clone(),
            counts: years
                .iter()
                .map(|&year| {
                    daily
                        .days
                        .iter()
                        .zip(&column.values)
                        .filter(|(day, mean)| {
                            day.year() == year && mean.is_some_and(|m| m > threshold)
                        })
                        .count() as u32
                })
                .collect(),
        })
        .collect();

    ExceedanceTable {
        years: years.to_vec(),
        columns,
    }
}
