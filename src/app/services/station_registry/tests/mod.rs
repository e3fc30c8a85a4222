//! Shared test fixtures for station registry tests

use crate::app::models::StationRecord;
use crate::app::services::station_registry::StationRegistry;


/// Metadata mirroring the drift seen in real GIOS archives: one station with a
/// single historical code, one without, one whose historical field carries two
/// comma-joined codes
pub fn create_test_registry() -> StationRegistry {
    StationRegistry::from_records(&[
        StationRecord::new("StationA", Some("OldStationA"), "Alpha", "Mazowieckie"),
        StationRecord::new("StationB", None, "Beta", "Śląskie"),
        StationRecord::new(
            "StationC",
            Some("OldStationC,AncientStationC"),
            "Gamma",
            "Śląskie",
        ),
    ])
}
