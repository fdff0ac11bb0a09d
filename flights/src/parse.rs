//! Decoding of OpenSky `states/all` responses into [`FlightRecord`]s.
//!
//! DESIGN
//! ======
//! Upstream rows are positional JSON arrays with loosely typed cells. The
//! decoder is tolerant at the cell level (bad cells become `None`) and at the
//! row level (undecodable rows are counted and skipped). Only a body whose
//! overall shape is wrong is an error.

use serde_json::Value;
use time::OffsetDateTime;

use crate::record::FlightRecord;

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;

/// Upper bound on rows taken from one response unless configured otherwise.
pub const DEFAULT_FLIGHT_LIMIT: usize = 300;

/// Error returned by [`parse_states`] when the response body has the wrong shape.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// The body is not a JSON object.
    #[error("response body is not a JSON object")]
    NotAnObject,
    /// `states` is present but neither an array nor null.
    #[error("`states` is not an array")]
    StatesNotArray,
}

/// Result of decoding one response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedStates {
    /// Upstream `time` field (epoch seconds) when present.
    pub time: Option<i64>,
    pub records: Vec<FlightRecord>,
    /// Rows within the limit that could not be decoded.
    pub skipped: usize,
}

/// Decode up to `limit` state vectors from a `states/all` body.
///
/// A missing or null `states` field yields zero records.
///
/// # Errors
///
/// Returns [`ParseError`] if the body is not an object or `states` has the
/// wrong type.
pub fn parse_states(body: &Value, limit: usize) -> Result<ParsedStates, ParseError> {
    let obj = body.as_object().ok_or(ParseError::NotAnObject)?;
    let time = obj.get("time").and_then(safe_int);

    let rows = match obj.get("states") {
        None | Some(Value::Null) => return Ok(ParsedStates { time, ..ParsedStates::default() }),
        Some(Value::Array(rows)) => rows,
        Some(_) => return Err(ParseError::StatesNotArray),
    };

    let mut parsed = ParsedStates { time, records: Vec::with_capacity(rows.len().min(limit)), skipped: 0 };
    for row in rows.iter().take(limit) {
        match parse_row(row) {
            Some(record) => parsed.records.push(record),
            None => parsed.skipped += 1,
        }
    }
    Ok(parsed)
}

/// Decode one positional state vector. `None` when the row is not an array
/// or has no string address. Addresses are normalized to lowercase hex.
fn parse_row(row: &Value) -> Option<FlightRecord> {
    let cells = row.as_array()?;
    let cell = |i: usize| cells.get(i).unwrap_or(&Value::Null);

    let icao24 = cell(0).as_str()?.trim();
    if icao24.is_empty() {
        return None;
    }

    Some(FlightRecord {
        icao24: icao24.to_ascii_lowercase(),
        callsign: trimmed_string(cell(1)),
        origin_country: cell(2).as_str().map(str::to_owned),
        time_position: epoch_seconds(cell(3)),
        last_contact: epoch_seconds(cell(4)),
        longitude: cell(5).as_f64(),
        latitude: cell(6).as_f64(),
        baro_altitude: cell(7).as_f64(),
        on_ground: safe_bool(cell(8)),
        velocity: cell(9).as_f64(),
        true_track: cell(10).as_f64(),
        vertical_rate: cell(11).as_f64(),
        // 12 is the receiver sensor list; not stored.
        geo_altitude: cell(13).as_f64(),
        squawk: cell(14).as_str().map(str::to_owned),
        spi: safe_bool(cell(15)),
        position_source: safe_int(cell(16)),
        category: safe_int(cell(17)),
    })
}

fn trimmed_string(value: &Value) -> Option<String> {
    let trimmed = value.as_str()?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Epoch seconds to a UTC timestamp. Zero and null mean "unknown".
fn epoch_seconds(value: &Value) -> Option<OffsetDateTime> {
    let secs = safe_int(value).filter(|s| *s != 0)?;
    OffsetDateTime::from_unix_timestamp(secs).ok()
}

/// Lenient boolean coercion.
///
/// Numbers are true when non-zero; strings are true when they read `true`,
/// `1`, or `yes` (case-insensitive) and false otherwise.
#[must_use]
pub fn safe_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => Some(matches!(s.to_ascii_lowercase().as_str(), "true" | "1" | "yes")),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Lenient integer coercion. Floats truncate toward zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn safe_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
