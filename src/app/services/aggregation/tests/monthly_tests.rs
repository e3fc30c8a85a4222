//! Tests for monthly means and locality roll-ups

use super::{create_dataset, ts};
use crate::app::models::StationKey;
use crate::app::services::aggregation::{locality_mean, locality_means, monthly_means};

#[test]
fn test_monthly_mean_ignores_missing_values() {
    // Six hourly samples in one month, one missing: mean of the five present
    let dataset = create_dataset(
        (1..=6).map(|h| ts(&format!("2021-01-01 0{h}:00:00"))).collect(),
        vec![(
            StationKey::new("StationA", "Alpha"),
            vec![Some(10.0), Some(20.0), None, Some(40.0), Some(50.0), Some(60.0)],
        )],
    );

    let monthly = monthly_means(&dataset);

    assert_eq!(monthly.periods(), &[(2021, 1)]);
    assert_eq!(monthly.columns()[0].values, vec![Some(36.0)]);
}

#[test]
fn test_rows_group_by_calendar_year_and_month() {
    let dataset = create_dataset(
        vec![
            ts("2020-12-31 22:00:00"),
            ts("2020-12-31 23:00:00"),
            ts("2021-01-01 01:00:00"),
        ],
        vec![(
            StationKey::new("StationA", "Alpha"),
            vec![Some(10.0), Some(20.0), Some(30.0)],
        )],
    );

    let monthly = monthly_means(&dataset);

    assert_eq!(monthly.periods(), &[(2020, 12), (2021, 1)]);
    assert_eq!(monthly.columns()[0].values, vec![Some(15.0), Some(30.0)]);
}

#[test]
fn test_all_missing_group_yields_missing_not_zero() {
    let dataset = create_dataset(
        vec![ts("2021-01-01 01:00:00"), ts("2021-02-01 01:00:00")],
        vec![(
            StationKey::new("StationA", "Alpha"),
            vec![None, Some(5.0)],
        )],
    );

    let monthly = monthly_means(&dataset);

    assert_eq!(monthly.columns()[0].values, vec![None, Some(5.0)]);
}

#[test]
fn test_locality_mean_averages_across_member_stations() {
    let dataset = create_dataset(
        vec![ts("2021-01-01 01:00:00")],
        vec![
            (StationKey::new("StationA1", "Alpha"), vec![Some(10.0)]),
            (StationKey::new("StationA2", "Alpha"), vec![Some(30.0)]),
            (StationKey::new("StationB1", "Beta"), vec![Some(100.0)]),
        ],
    );

    let series = locality_mean(&monthly_means(&dataset), "Alpha");

    assert_eq!(series.locality, "Alpha");
    assert_eq!(series.periods, vec![(2021, 1)]);
    assert_eq!(series.values, vec![Some(20.0)]);
}

#[test]
fn test_locality_mean_ignores_missing_member_values() {
    let dataset = create_dataset(
        vec![ts("2021-01-01 01:00:00")],
        vec![
            (StationKey::new("StationA1", "Alpha"), vec![Some(10.0)]),
            (StationKey::new("StationA2", "Alpha"), vec![None]),
        ],
    );

    let series = locality_mean(&monthly_means(&dataset), "Alpha");
    assert_eq!(series.values, vec![Some(10.0)]);
}

#[test]
fn test_locality_means_one_column_per_locality_in_first_appearance_order() {
    let dataset = create_dataset(
        vec![ts("2021-01-01 01:00:00")],
        vec![
            (StationKey::new("StationB1", "Beta"), vec![Some(4.0)]),
            (StationKey::new("StationA1", "Alpha"), vec![Some(10.0)]),
            (StationKey::new("StationB2", "Beta"), vec![Some(8.0)]),
        ],
    );

    let table = locality_means(&monthly_means(&dataset));

    let localities: Vec<_> = table.columns().iter().map(|c| c.locality.as_str()).collect();
    assert_eq!(localities, vec!["Beta", "Alpha"]);
    assert_eq!(table.column("Beta").unwrap().values, vec![Some(6.0)]);
    assert_eq!(table.column("Alpha").unwrap().values, vec![Some(10.0)]);
}
