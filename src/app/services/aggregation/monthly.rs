//! Monthly means and locality roll-ups

use super::mean_of;
use crate::app::models::{
    CombinedDataset, LocalityColumn, LocalityMeanTable, LocalitySeries, MeanColumn,
    MonthlyMeanTable,
};
use chrono::Datelike;
use std::collections::BTreeMap;

/// Per-station monthly means
///
/// Rows are grouped by (calendar year, calendar month) of the corrected
/// timestamps; per column, the arithmetic mean of the present values in the
/// group. A group with no present value yields missing.
pub fn monthly_means(dataset: &CombinedDataset) -> MonthlyMeanTable {
    let mut groups: BTreeMap<(i32, u32), Vec<usize>> = BTreeMap::new();
    for (row, timestamp) in dataset.timestamps().iter().enumerate() {
        groups
            .entry((timestamp.year(), timestamp.month()))
            .or_default()
            .push(row);
    }

    let periods: Vec<(i32, u32)> = groups.keys().copied().collect();
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

    MonthlyMeanTable { periods, columns }
}

/// Monthly means of one locality, averaged across all of its stations
///
/// Missing station values are ignored; a locality with no station in the
/// table yields an all-missing series.
pub fn locality_mean(table: &MonthlyMeanTable, locality: &str) -> LocalitySeries {
    let members: Vec<&MeanColumn> = table
        .columns
        .iter()
        .filter(|column| column.key.locality == locality)
        .collect();

    let values = (0..table.periods.len())
        .map(|row| mean_of(members.iter().map(|column| column.values[row])))
        .collect();

    LocalitySeries {
        locality: locality.to_string(),
        periods: table.periods.clone(),
        values,
    }
}

/// Monthly means rolled up per locality, one column per locality
///
/// Localities appear in the order their first station appears in the table.
pub fn locality_means(table: &MonthlyMeanTable) -> LocalityMeanTable {
    let mut localities: Vec<&str> = Vec::new();
    for column in &table.columns {
        if !localities.contains(&column.key.locality.as_str()) {
            localities.push(&column.key.locality);
        }
    }

    let columns = localities
        .into_iter()
        .map(|locality| LocalityColumn {
            locality: locality.to_string(),
            values: locality_mean(table, locality).values,
        })
        .collect();

    LocalityMeanTable {
        periods: table.periods.clone(),
        columns,
    }
}
