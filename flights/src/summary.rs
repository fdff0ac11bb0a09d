//! Aggregate figures shown on the dashboard stat cards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::FlightRecord;

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

/// How many countries the summary ranks.
pub const TOP_COUNTRIES: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCount {
    pub country: String,
    pub count: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightSummary {
    pub total: usize,
    pub airborne: usize,
    pub on_ground: usize,
    /// Records with no ground/air flag.
    pub unknown_ground_state: usize,
    /// Distinct origin countries.
    pub countries: usize,
    /// Busiest origin countries, descending by count, ties by name.
    pub top_countries: Vec<CountryCount>,
    /// Mean ground speed (m/s) over records that report one.
    pub mean_velocity: Option<f64>,
    /// Highest barometric altitude (m) in the set.
    pub max_baro_altitude: Option<f64>,
}

impl FlightSummary {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_records(records: &[FlightRecord]) -> Self {
        let mut summary = Self { total: records.len(), ..Self::default() };
        let mut by_country: HashMap<&str, usize> = HashMap::new();
        let mut velocity_sum = 0.0;
        let mut velocity_n = 0usize;

        for rec in records {
            match rec.on_ground {
                Some(true) => summary.on_ground += 1,
                Some(false) => summary.airborne += 1,
                None => summary.unknown_ground_state += 1,
            }
            if let Some(country) = rec.origin_country.as_deref() {
                *by_country.entry(country).or_default() += 1;
            }
            if let Some(v) = rec.velocity.filter(|v| v.is_finite()) {
                velocity_sum += v;
                velocity_n += 1;
            }
            if let Some(alt) = rec.baro_altitude.filter(|a| a.is_finite()) {
                summary.max_baro_altitude = Some(summary.max_baro_altitude.map_or(alt, |m: f64| m.max(alt)));
            }
        }

        summary.countries = by_country.len();
        summary.mean_velocity = (velocity_n > 0).then(|| velocity_sum / velocity_n as f64);

        let mut ranked: Vec<CountryCount> = by_country
            .into_iter()
            .map(|(country, count)| CountryCount { country: country.to_owned(), count })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.country.cmp(&b.country)));
        ranked.truncate(TOP_COUNTRIES);
        summary.top_countries = ranked;

        summary
    }
}
