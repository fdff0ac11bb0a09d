//! REST helpers for the flight API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since polling only runs in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as `Err(String)` messages for the dashboard banner;
//! nothing here panics, so a flaky API never breaks hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use flights::{FlightSnapshot, FlightSummary, SyncCheckpoint};

#[cfg(any(test, feature = "hydrate"))]
const FLIGHTS_PATH: &str = "/api/flights";
#[cfg(any(test, feature = "hydrate"))]
const SUMMARY_PATH: &str = "/api/flights/summary";
#[cfg(any(test, feature = "hydrate"))]
const SYNC_STATUS_PATH: &str = "/api/sync/status";

/// Query pairs for `GET /api/flights`.
#[cfg(any(test, feature = "hydrate"))]
fn flights_query(limit: usize) -> [(&'static str, String); 1] {
    [("limit", limit.to_string())]
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(path: &str, status: u16) -> String {
    format!("{path} failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(
    request: gloo_net::http::RequestBuilder,
    path: &str,
) -> Result<T, String> {
    let resp = request.send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(path, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch up to `limit` flights, ordered by `icao24`.
pub async fn fetch_flights(limit: usize) -> Result<FlightSnapshot, String> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(FLIGHTS_PATH).query(flights_query(limit));
        get_json(request, FLIGHTS_PATH).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        Err("not available on server".to_owned())
    }
}

/// Fetch aggregate statistics over the whole store.
pub async fn fetch_summary() -> Result<FlightSummary, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(gloo_net::http::Request::get(SUMMARY_PATH), SUMMARY_PATH).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the latest sync checkpoint.
pub async fn fetch_sync_status() -> Result<SyncCheckpoint, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(gloo_net::http::Request::get(SYNC_STATUS_PATH), SYNC_STATUS_PATH).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
