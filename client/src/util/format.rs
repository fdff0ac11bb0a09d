//! Display formatting for flight telemetry.
//!
//! OpenSky reports SI units (meters, m/s, degrees). The dashboard shows
//! aviation units: feet, knots, and whole-degree headings.

use time::OffsetDateTime;

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const FEET_PER_METER: f64 = 3.280_84;
const KNOTS_PER_MPS: f64 = 1.943_84;
const PLACEHOLDER: &str = "—";

/// Altitude in feet, e.g. `"35,000 ft"`.
#[must_use]
pub fn altitude(meters: Option<f64>) -> String {
    match meters {
        Some(m) if m.is_finite() => format!("{} ft", group_thousands(round_to_i64(m * FEET_PER_METER))),
        _ => PLACEHOLDER.to_owned(),
    }
}

/// Ground speed in knots.
#[must_use]
pub fn speed(mps: Option<f64>) -> String {
    match mps {
        Some(v) if v.is_finite() => format!("{} kt", round_to_i64(v * KNOTS_PER_MPS)),
        _ => PLACEHOLDER.to_owned(),
    }
}

/// Heading in whole degrees, normalized into `0..360`.
#[must_use]
pub fn heading(degrees: Option<f64>) -> String {
    match degrees {
        Some(d) if d.is_finite() => format!("{:03}°", round_to_i64(d).rem_euclid(360)),
        _ => PLACEHOLDER.to_owned(),
    }
}

/// Coarse age relative to `now`: `"just now"`, `"42s ago"`, `"5m ago"`, `"3h ago"`.
#[must_use]
pub fn relative_time(at: Option<OffsetDateTime>, now: OffsetDateTime) -> String {
    let Some(at) = at else {
        return "never".to_owned();
    };
    let secs = (now - at).whole_seconds();
    match secs {
        s if s < 5 => "just now".to_owned(),
        s if s < 60 => format!("{s}s ago"),
        s if s < 3600 => format!("{}m ago", s / 60),
        s => format!("{}h ago", s / 3600),
    }
}

/// Text for optional string cells.
#[must_use]
pub fn or_placeholder(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(PLACEHOLDER)
}

#[allow(clippy::cast_possible_truncation)]
fn round_to_i64(value: f64) -> i64 {
    value.round() as i64
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
