//! Flight records and the snapshot/checkpoint envelopes served over HTTP.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

/// One row of the `live_flights` table: the latest state vector for an aircraft.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// ICAO 24-bit transponder address (hex). Primary key.
    pub icao24: String,
    pub callsign: Option<String>,
    pub origin_country: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub time_position: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_contact: Option<OffsetDateTime>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    /// Barometric altitude in meters.
    pub baro_altitude: Option<f64>,
    pub on_ground: Option<bool>,
    /// Ground speed in m/s.
    pub velocity: Option<f64>,
    /// Track angle in decimal degrees clockwise from north.
    pub true_track: Option<f64>,
    /// Vertical rate in m/s; positive means climbing.
    pub vertical_rate: Option<f64>,
    /// Geometric altitude in meters.
    pub geo_altitude: Option<f64>,
    pub squawk: Option<String>,
    /// Special purpose indicator.
    pub spi: Option<bool>,
    pub position_source: Option<i64>,
    pub category: Option<i64>,
}

impl FlightRecord {
    /// Record with only the primary key set.
    #[must_use]
    pub fn new(icao24: impl Into<String>) -> Self {
        Self {
            icao24: icao24.into(),
            callsign: None,
            origin_country: None,
            time_position: None,
            last_contact: None,
            longitude: None,
            latitude: None,
            baro_altitude: None,
            on_ground: None,
            velocity: None,
            true_track: None,
            vertical_rate: None,
            geo_altitude: None,
            squawk: None,
            spi: None,
            position_source: None,
            category: None,
        }
    }

    /// `Some(true)` when the aircraft reports being in the air.
    #[must_use]
    pub fn is_airborne(&self) -> Option<bool> {
        self.on_ground.map(|g| !g)
    }

    /// Human-facing label: the callsign when present, otherwise the address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.callsign.as_deref().unwrap_or(&self.icao24)
    }

    /// Whether both coordinates are known.
    #[must_use]
    pub fn has_position(&self) -> bool {
        self.longitude.is_some() && self.latitude.is_some()
    }
}

/// A filtered view of the flight store at a point in time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightSnapshot {
    /// When the underlying data was last synced, if ever.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub synced_at: Option<OffsetDateTime>,
    /// Number of flights in the store before filtering.
    pub total: usize,
    pub flights: Vec<FlightRecord>,
}

/// Bookkeeping for the last successful sync run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncCheckpoint {
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub synced_at: Option<OffsetDateTime>,
    /// Upstream `time` field of the response the store was built from.
    pub source_time: Option<i64>,
    /// Records kept from the last run.
    pub flight_count: usize,
    /// Rows dropped from the last run because they could not be decoded.
    pub skipped: usize,
    /// Successful runs since process start.
    pub runs: u64,
}
