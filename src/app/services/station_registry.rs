//! Station registry service for station identity and locality lookups
//!
//! This module builds the two lookup tables the rest of the pipeline depends
//! on from the GIOS station metadata sheet: historical code → canonical code,
//! and canonical code → (locality, region). The registry is built once per
//! run, is read-only thereafter, and is shared as `Arc<StationRegistry>`
//! across per-year processing without synchronization.

use crate::app::models::StationRecord;
use crate::{Error, Result};
use std::collections::HashMap;
use tracing::{debug, info, warn};

#[cfg(test)]
pub mod tests;

/// Locality and region of one canonical station
#[derive(Debug, Clone)]
struct StationInfo {
    locality: String,
    region: String,
}

/// Station registry providing canonical-code resolution and locality/region
/// lookups
///
/// Historical (alias) codes are split out of the comma-joined metadata field.
/// A redeclared alias resolves last-write-wins; every overwrite is logged so
/// the ambiguity is visible in the run log.
#[derive(Debug, Clone)]
pub struct StationRegistry {
    /// Historical code → canonical code
    aliases: HashMap<String, String>,

    /// Canonical code → locality and region
    stations: HashMap<String, StationInfo>,
}

impl StationRegistry {
    /// Build a registry from station metadata records
    ///
    /// # Arguments
    /// * `records` - One record per station, as delivered by the external
    ///   metadata loader
    pub fn from_records(records: &[StationRecord]) -> Self {
        let mut aliases: HashMap<String, String> = HashMap::new();
        let mut stations: HashMap<String, StationInfo> = HashMap::new();

        for record in records {
            if let Some(previous) = stations.insert(
                record.code.clone(),
                StationInfo {
                    locality: record.locality.clone(),
                    region: record.region.clone(),
                },
            ) {
                warn!(
                    "Canonical code '{}' declared more than once (was locality '{}'), keeping the later record",
                    record.code, previous.locality
                );
            }

            if let Some(joined) = &record.historical_codes {
                for alias in joined.split(',') {
                    let alias = alias.trim();
                    if alias.is_empty() {
                        continue;
                    }

                    if let Some(previous) =
                        aliases.insert(alias.to_string(), record.code.clone())
                    {
                        if previous != record.code {
                            warn!(
                                "Alias '{}' redeclared: was '{}', now '{}' (last declaration wins)",
                                alias, previous, record.code
                            );
                        }
                    } else {
                        debug!("Registered alias '{}' -> '{}'", alias, record.code);
                    }
                }
            }
        }

        info!(
            "Station registry built: {} stations, {} historical codes",
            stations.len(),
            aliases.len()
        );

        Self { aliases, stations }
    }

    /// Resolve a station code to its canonical form
    ///
    /// Returns the canonical code if `code` is a known historical code, else
    /// `code` unchanged. Idempotent: `resolve(resolve(x)) == resolve(x)`.
    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        self.aliases.get(code).map(String::as_str).unwrap_or(code)
    }

    /// Locality of a station, `None` if its canonical code is absent from the
    /// metadata
    pub fn locality(&self, code: &str) -> Option<&str> {
        self.stations
            .get(self.resolve(code))
            .map(|info| info.locality.as_str())
    }

    /// Region (voivodeship) of a station, `None` if its canonical code is
    /// absent from the metadata
    pub fn region(&self, code: &str) -> Option<&str> {
        self.stations
            .get(self.resolve(code))
            .map(|info| info.region.as_str())
    }

    /// Locality of a station
    ///
    /// # Errors
    /// * `Error::UnknownStation` if the canonical code is absent from metadata
    pub fn locality_of(&self, code: &str) -> Result<&str> {
        self.locality(code)
            .ok_or_else(|| Error::unknown_station(code))
    }

    /// Region of a station
    ///
    /// # Errors
    /// * `Error::UnknownStation` if the canonical code is absent from metadata
    pub fn region_of(&self, code: &str) -> Result<&str> {
        self.region(code).ok_or_else(|| Error::unknown_station(code))
    }

    /// Whether a code is known, either canonically or as a historical code
    pub fn contains(&self, code: &str) -> bool {
        self.stations.contains_key(self.resolve(code))
    }

    /// Number of canonical stations in the registry
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of registered historical codes
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}
