//! Midnight boundary corrector
//!
//! In the GIOS archives a sample timestamped at hour 0 is the measurement
//! ending at midnight and belongs to the *previous* calendar day. Left as-is,
//! day-level bucketing would credit it to the wrong day. This module moves
//! every hour-0 row to 23:59:59 of the previous day: strictly inside that
//! day, strictly after its 23:00 sample, strictly before the original
//! midnight, and free of collisions at hourly granularity. Strictly
//! increasing input therefore stays strictly increasing.

use crate::app::models::IndexedTable;
use chrono::{Duration, NaiveDateTime, Timelike};
use tracing::debug;

/// Reattribute hour-0 rows to the previous calendar day
///
/// Rows not at hour 0 are untouched. The input's value columns are moved, not
/// copied; only the row keys change.
pub fn shift_midnight(table: IndexedTable) -> IndexedTable {
    let mut shifted = 0usize;
    let timestamps = table
        .timestamps
        .into_iter()
        .map(|ts| {
            if ts.hour() == 0 {
                shifted += 1;
                previous_day_close(ts)
            } else {
                ts
            }
        })
        .collect();

    if shifted > 0 {
        debug!(
            "Year {}: shifted {} hour-0 rows into the previous day",
            table.year, shifted
        );
    }

    IndexedTable {
        year: table.year,
        timestamps,
        columns: table.columns,
    }
}

/// 23:59:59 of the day before `ts`, for any `ts` within hour 0
fn previous_day_close(ts: NaiveDateTime) -> NaiveDateTime {
    let into_hour = Duration::seconds(i64::from(ts.minute()) * 60 + i64::from(ts.second()));
    ts - into_hour - Duration::seconds(1)
}
