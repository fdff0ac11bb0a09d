//! Sync service: pulls OpenSky state vectors into the flight store.
//!
//! DESIGN
//! ======
//! One run is fetch -> decode -> persist (optional) -> swap store. Network and
//! database I/O happen without holding the store lock; the write lock is
//! taken only for the final swap, so readers never wait on upstream latency.
//!
//! ERROR HANDLING
//! ==============
//! Any failure ends the run early and leaves the store and checkpoint as they
//! were. The periodic task logs the error and waits for the next tick.

use std::time::Duration;

use flights::{ParseError, SyncCheckpoint, parse_states};
use time::OffsetDateTime;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use crate::opensky::FetchError;
use crate::services::persistence;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("OpenSky response malformed: {0}")]
    Parse(#[from] ParseError),

    #[error("flight persistence failed: {0}")]
    Persist(#[from] sqlx::Error),
}

impl SyncError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Fetch(e) => e.error_code(),
            Self::Parse(_) => "E_OPENSKY_SHAPE",
            Self::Persist(_) => "E_PERSIST",
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub flights: usize,
    pub skipped: usize,
    pub persisted: bool,
}

/// Run one sync against the configured source.
///
/// # Errors
///
/// Returns [`SyncError`] when fetching, decoding, or persisting fails. The
/// store is untouched in that case.
pub async fn sync_once(state: &AppState) -> Result<SyncReport, SyncError> {
    let limit = state.config.flight_limit;
    info!(source = %state.source.describe(), limit, "starting flight sync");

    let body = state.source.fetch_states().await?;
    let parsed = parse_states(&body, limit)?;
    if parsed.records.is_empty() {
        info!("no flight states returned from upstream");
    }
    if parsed.skipped > 0 {
        warn!(skipped = parsed.skipped, "skipped undecodable state vectors");
    }

    let previous_runs = state.store.read().await.checkpoint.runs;
    let checkpoint = SyncCheckpoint {
        synced_at: Some(OffsetDateTime::now_utc()),
        source_time: parsed.time,
        flight_count: parsed.records.len(),
        skipped: parsed.skipped,
        runs: previous_runs + 1,
    };

    let persisted = match &state.pool {
        Some(pool) => {
            persistence::persist_batch(pool, &parsed.records, &checkpoint).await?;
            true
        }
        None => false,
    };

    let report = SyncReport { flights: parsed.records.len(), skipped: parsed.skipped, persisted };
    state.store.write().await.apply_batch(parsed.records, checkpoint);

    info!(flights = report.flights, skipped = report.skipped, persisted, "flight sync finished");
    Ok(report)
}

/// Spawn the periodic sync task. The first run starts immediately.
pub fn spawn_sync_task(state: AppState) -> JoinHandle<()> {
    let interval_secs = state.config.interval_secs;
    info!(interval_secs, "flight sync configured");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            if let Err(e) = sync_once(&state).await {
                let retryable = matches!(&e, SyncError::Fetch(f) if f.retryable());
                error!(error = %e, code = e.error_code(), retryable, "flight sync failed");
            }
        }
    })
}

#[cfg(test)]
#[path = "sync_test.rs"]
mod tests;
