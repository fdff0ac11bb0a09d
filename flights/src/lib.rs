//! Shared live-flight model for the server, client, and CLI.
//!
//! This crate owns the `live_flights` record shape and the tolerant decoding
//! of OpenSky `states/all` responses. Everything here is pure and
//! platform-neutral so the WASM client can depend on it as well.

pub mod parse;
pub mod record;
pub mod schema;
pub mod summary;

pub use parse::{DEFAULT_FLIGHT_LIMIT, ParseError, ParsedStates, parse_states, safe_bool, safe_int};
pub use record::{FlightRecord, FlightSnapshot, SyncCheckpoint};
pub use schema::{Column, ColumnType, LIVE_FLIGHTS_TABLE, TableSchema, live_flights_schema};
pub use summary::{CountryCount, FlightSummary, TOP_COUNTRIES};
