//! Live-flight data shown by the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled by the polling loop in the home page from `/api/flights`,
//! `/api/flights/summary`, and `/api/sync/status`. Components only read it.

use flights::{FlightRecord, FlightSnapshot, FlightSummary, SyncCheckpoint};

#[cfg(test)]
#[path = "flights_test.rs"]
mod flights_test;

/// Rows shown in the dashboard flight table.
pub const TABLE_ROWS: usize = 50;

#[derive(Clone, Debug, Default)]
pub struct FlightsState {
    pub snapshot: Option<FlightSnapshot>,
    pub summary: Option<FlightSummary>,
    pub checkpoint: Option<SyncCheckpoint>,
    pub loading: bool,
    pub error: Option<String>,
}

impl FlightsState {
    /// Store a successful poll result and clear any previous error.
    pub fn apply(&mut self, snapshot: FlightSnapshot, summary: FlightSummary, checkpoint: Option<SyncCheckpoint>) {
        self.snapshot = Some(snapshot);
        self.summary = Some(summary);
        if checkpoint.is_some() {
            self.checkpoint = checkpoint;
        }
        self.loading = false;
        self.error = None;
    }

    /// Record a failed poll. Previously loaded data stays visible.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// True once any snapshot has been received.
    pub fn has_data(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Rows for the flight table, airborne first then by callsign.
    pub fn table_rows(&self) -> Vec<FlightRecord> {
        let Some(snapshot) = &self.snapshot else {
            return Vec::new();
        };
        let mut rows = snapshot.flights.clone();
        rows.sort_by(|a, b| {
            let a_air = a.is_airborne() == Some(true);
            let b_air = b.is_airborne() == Some(true);
            b_air.cmp(&a_air).then_with(|| a.display_name().cmp(b.display_name()))
        });
        rows.truncate(TABLE_ROWS);
        rows
    }
}
