//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the live flight store, the optional database pool, and the upstream
//! source. The store is rebuilt wholesale by each successful sync; handlers
//! only ever read it.

use std::collections::BTreeMap;
use std::sync::Arc;

use flights::{FlightRecord, FlightSnapshot, SyncCheckpoint};
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::config::SyncConfig;
use crate::opensky::StatesSource;

// =============================================================================
// FLIGHT STORE
// =============================================================================

/// Filters accepted by [`FlightStore::snapshot`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightFilter {
    /// Case-insensitive exact match on origin country.
    pub country: Option<String>,
    /// `Some(true)` keeps only flights in the air; `Some(false)` only grounded ones.
    pub airborne: Option<bool>,
    pub limit: Option<usize>,
}

impl FlightFilter {
    fn matches(&self, rec: &FlightRecord) -> bool {
        if let Some(country) = self.country.as_deref() {
            let Some(origin) = rec.origin_country.as_deref() else {
                return false;
            };
            if !origin.eq_ignore_ascii_case(country.trim()) {
                return false;
            }
        }
        if let Some(airborne) = self.airborne {
            if rec.is_airborne() != Some(airborne) {
                return false;
            }
        }
        true
    }
}

/// Latest state vector per aircraft plus the checkpoint that produced them.
#[derive(Debug, Default)]
pub struct FlightStore {
    /// Records keyed by `icao24`; iteration order is the API order.
    pub flights: BTreeMap<String, FlightRecord>,
    pub checkpoint: SyncCheckpoint,
}

impl FlightStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the store with `records`. Duplicate addresses collapse to the
    /// last occurrence.
    pub fn apply_batch(&mut self, records: Vec<FlightRecord>, checkpoint: SyncCheckpoint) {
        self.flights.clear();
        for rec in records {
            self.flights.insert(rec.icao24.clone(), rec);
        }
        self.checkpoint = SyncCheckpoint { flight_count: self.flights.len(), ..checkpoint };
    }

    #[must_use]
    pub fn get(&self, icao24: &str) -> Option<&FlightRecord> {
        self.flights.get(&icao24.trim().to_ascii_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Filtered copy of the store, ordered by `icao24`.
    #[must_use]
    pub fn snapshot(&self, filter: &FlightFilter) -> FlightSnapshot {
        let limit = filter.limit.unwrap_or(usize::MAX);
        let flights = self
            .flights
            .values()
            .filter(|rec| filter.matches(rec))
            .take(limit)
            .cloned()
            .collect();
        FlightSnapshot { synced_at: self.checkpoint.synced_at, total: self.flights.len(), flights }
    }

    /// All records, for summary computation.
    #[must_use]
    pub fn records(&self) -> Vec<FlightRecord> {
        self.flights.values().cloned().collect()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// `None` when `DATABASE_URL` is unset; the store is then memory-only.
    pub pool: Option<PgPool>,
    pub store: Arc<RwLock<FlightStore>>,
    pub source: Arc<dyn StatesSource>,
    pub config: Arc<SyncConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(pool: Option<PgPool>, source: Arc<dyn StatesSource>, config: SyncConfig) -> Self {
        Self { pool, store: Arc::new(RwLock::new(FlightStore::new())), source, config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::opensky::FetchError;
    use serde_json::Value;
    use std::sync::Mutex;

    /// Source that replays canned results in order, then repeats the last one.
    pub struct MockSource {
        responses: Mutex<Vec<Result<Value, FetchError>>>,
        pub calls: Mutex<usize>,
    }

    impl MockSource {
        #[must_use]
        pub fn new(responses: Vec<Result<Value, FetchError>>) -> Self {
            Self { responses: Mutex::new(responses), calls: Mutex::new(0) }
        }
    }

    #[async_trait::async_trait]
    impl StatesSource for MockSource {
        async fn fetch_states(&self) -> Result<Value, FetchError> {
            *self.calls.lock().expect("mock mutex should lock") += 1;
            let mut responses = self.responses.lock().expect("mock mutex should lock");
            if responses.len() > 1 {
                return responses.remove(0);
            }
            responses.first().cloned().unwrap_or_else(|| Ok(serde_json::json!({ "time": 0, "states": null })))
        }

        fn describe(&self) -> String {
            "mock".to_owned()
        }
    }

    /// A record with the fields the API filters on.
    #[must_use]
    pub fn flight(icao24: &str, country: &str, on_ground: Option<bool>) -> FlightRecord {
        let mut rec = FlightRecord::new(icao24);
        rec.origin_country = Some(country.to_owned());
        rec.on_ground = on_ground;
        rec
    }

    /// Test `AppState` with no database and the given canned responses.
    #[must_use]
    pub fn test_app_state(responses: Vec<Result<Value, FetchError>>) -> AppState {
        AppState::new(None, Arc::new(MockSource::new(responses)), SyncConfig::default())
    }

    /// Test `AppState` whose store already holds `records`.
    pub async fn seeded_app_state(records: Vec<FlightRecord>) -> AppState {
        let state = test_app_state(Vec::new());
        state.store.write().await.apply_batch(records, SyncCheckpoint { runs: 1, ..SyncCheckpoint::default() });
        state
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
