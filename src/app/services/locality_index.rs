//! Locality index builder
//!
//! Attaches the (station code, locality) pair to every column of a normalized
//! table, turning it into the per-year contribution to the combined dataset.
//! The locality is looked up per column code in the registry, never paired up
//! positionally, so a filtered or reordered table can not silently misalign
//! stations and localities.

use crate::app::models::{IndexedTable, MeasurementColumn, NormalizedTable, StationKey};
use crate::app::services::station_registry::StationRegistry;
use crate::Result;

/// Attach (station, locality) keys to every column, preserving column order
///
/// # Errors
/// * `Error::UnknownStation` if a retained station is missing from the
///   metadata. Post-intersection this indicates metadata that is stale
///   relative to the raw data.
pub fn attach_localities(
    table: &NormalizedTable,
    registry: &StationRegistry,
) -> Result<IndexedTable> {
    let columns = table
        .columns
        .iter()
        .map(|column| {
            let locality = registry.locality_of(&column.code)?;
            Ok(MeasurementColumn {
                key: StationKey::new(column.code.as_str(), locality),
                values: column.values.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(IndexedTable {
        year: table.year,
        timestamps: table.timestamps.clone(),
        columns,
    })
}
