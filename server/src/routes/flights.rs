//! Read-only flight API routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use flights::{FlightRecord, FlightSnapshot, FlightSummary, SyncCheckpoint, TableSchema, live_flights_schema};
use serde::Deserialize;

use crate::state::{AppState, FlightFilter};

/// Upper bound on `limit` so one request cannot clone an unbounded store.
pub const MAX_PAGE_SIZE: usize = 5_000;

#[derive(Debug, Default, Deserialize)]
pub struct FlightQuery {
    pub limit: Option<usize>,
    pub country: Option<String>,
    pub airborne: Option<bool>,
}

impl FlightQuery {
    fn into_filter(self) -> FlightFilter {
        FlightFilter {
            country: self.country.filter(|c| !c.trim().is_empty()),
            airborne: self.airborne,
            limit: Some(self.limit.unwrap_or(MAX_PAGE_SIZE).min(MAX_PAGE_SIZE)),
        }
    }
}

/// `GET /api/flights`: filtered snapshot of the live store.
pub async fn list_flights(State(state): State<AppState>, Query(query): Query<FlightQuery>) -> Json<FlightSnapshot> {
    let filter = query.into_filter();
    let store = state.store.read().await;
    Json(store.snapshot(&filter))
}

/// `GET /api/flights/summary`: aggregate figures over the whole store.
pub async fn flight_summary(State(state): State<AppState>) -> Json<FlightSummary> {
    let records = state.store.read().await.records();
    Json(FlightSummary::from_records(&records))
}

/// `GET /api/flights/{icao24}`: one aircraft by transponder address.
pub async fn get_flight(
    State(state): State<AppState>,
    Path(icao24): Path<String>,
) -> Result<Json<FlightRecord>, StatusCode> {
    let store = state.store.read().await;
    store.get(&icao24).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// `GET /api/schema`: declared `live_flights` table schema.
pub async fn table_schema() -> Json<TableSchema> {
    Json(live_flights_schema())
}

/// `GET /api/sync/status`: checkpoint of the last successful sync.
pub async fn sync_status(State(state): State<AppState>) -> Json<SyncCheckpoint> {
    Json(state.store.read().await.checkpoint.clone())
}

#[cfg(test)]
#[path = "flights_test.rs"]
mod tests;
