//! Top/bottom station selection by exceedance count

use crate::app::models::{ExceedanceTable, RankingSelection};
use crate::{Error, Result};
use std::cmp::Reverse;

/// Select the `k` stations with the most and the `k` with the fewest
/// exceedance days in one year
///
/// Stations are sorted descending by that year's count; the sort is stable,
/// so ties keep the table's column order. The selection is the head-k
/// followed by the tail-k of that ordering. With fewer than `2k` stations the
/// two ends overlap; the overlap is kept, not deduplicated. The returned
/// sub-table is restricted to the selected keys, in selection order.
///
/// # Errors
/// * `Error::YearNotFound` if `year` is not a row of the table
pub fn top_bottom_stations(
    table: &ExceedanceTable,
    year: i32,
    k: usize,
) -> Result<RankingSelection> {
    let row = table
        .year_index(year)
        .ok_or_else(|| Error::year_not_found(year))?;

    let mut order: Vec<usize> = (0..table.columns.len()).collect();
    order.sort_by_key(|&column| Reverse(table.columns[column].counts[row]));

    let k = k.min(order.len());
    let selected: Vec<usize> = order[..k]
        .iter()
        .chain(order[order.len() - k..].iter())
        .copied()
        .collect();

    let stations = selected
        .iter()
        .map(|&column| table.columns[column].key.clone())
        .collect();

    let restricted = ExceedanceTable {
        years: table.years.clone(),
        columns: selected
            .iter()
            .map(|&column| table.columns[column].clone())
            .collect(),
    };

    Ok(RankingSelection {
        stations,
        table: restricted,
    })
}
