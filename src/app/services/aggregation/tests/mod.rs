//! Shared test fixtures for aggregation engine tests

use crate::app::models::{CombinedDataset, MeasurementColumn, StationKey};
use chrono::NaiveDateTime;

pub mod monthly_tests;

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// A combined dataset built directly from row keys and value columns
pub fn create_dataset(
    timestamps: Vec<NaiveDateTime>,
    columns: Vec<(StationKey, Vec<Option<f64>>)>,
) -> CombinedDataset {
    CombinedDataset::new(
        timestamps,
        columns
            .into_iter()
            .map(|(key, values)| MeasurementColumn { key, values })
            .collect(),
    )
}

/// A dataset with one noon sample per listed day
pub fn create_daily_dataset(
    days: &[&str],
    columns: Vec<(StationKey, Vec<Option<f64>>)>,
) -> CombinedDataset {
    let timestamps = days.iter().map(|day| ts(&format!("{day} 12:00:00"))).collect();
    create_dataset(timestamps, columns)
}
