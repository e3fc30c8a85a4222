//! Shared test fixtures for normalizer tests

use crate::app::models::RawTable;
use crate::app::services::station_registry::StationRegistry;
use crate::app::services::station_registry::tests::create_test_registry;
use std::sync::Arc;


pub fn test_registry() -> Arc<StationRegistry> {
    Arc::new(create_test_registry())
}

fn labelled_row(label: &str, cells: &[&str]) -> Vec<String> {
    std::iter::once(label)
        .chain(cells.iter().copied())
        .map(str::to_string)
        .collect()
}

/// A raw sheet in the published GIOS layout: descriptive marker rows, a
/// header row of raw station codes, then hourly data rows (first cell a
/// timestamp string, remaining cells measurement text)
pub fn create_raw_table(codes: &[&str], data_rows: &[(&str, &[&str])]) -> RawTable {
    let indices: Vec<String> = (1..=codes.len()).map(|i| i.to_string()).collect();
    let index_refs: Vec<&str> = indices.iter().map(String::as_str).collect();
    let per_station = |cell: &'static str| vec![cell; codes.len()];

    let mut rows = vec![
        labelled_row("Nr", &index_refs),
        labelled_row("Kod stacji", codes),
        labelled_row("Wskaźnik", &per_station("PM2.5")),
        labelled_row("Czas uśredniania", &per_station("1g")),
        labelled_row("Jednostka", &per_station("ug/m3")),
        labelled_row("Kod stanowiska", &per_station("XXX")),
    ];

    for (timestamp, cells) in data_rows {
        rows.push(labelled_row(timestamp, cells));
    }

    RawTable::new(rows)
}
