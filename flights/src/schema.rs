//! Declared shape of the `live_flights` destination table.
//!
//! The schema is data, not DDL: the server serves it at `/api/schema` and
//! the CLI prints it. Column order matches the record field order.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

pub const LIVE_FLIGHTS_TABLE: &str = "live_flights";

/// Logical column type, named the way connector schemas name them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnType {
    String,
    UtcDatetime,
    Double,
    Boolean,
    Int,
}

impl ColumnType {
    /// Postgres column type used by the migrations.
    #[must_use]
    pub fn sql_type(self) -> &'static str {
        match self {
            Self::String => "TEXT",
            Self::UtcDatetime => "TIMESTAMPTZ",
            Self::Double => "DOUBLE PRECISION",
            Self::Boolean => "BOOLEAN",
            Self::Int => "BIGINT",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ColumnType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub table: String,
    pub primary_key: Vec<String>,
    pub columns: Vec<Column>,
}

impl TableSchema {
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

const LIVE_FLIGHTS_COLUMNS: [(&str, ColumnType); 17] = [
    ("icao24", ColumnType::String),
    ("callsign", ColumnType::String),
    ("origin_country", ColumnType::String),
    ("time_position", ColumnType::UtcDatetime),
    ("last_contact", ColumnType::UtcDatetime),
    ("longitude", ColumnType::Double),
    ("latitude", ColumnType::Double),
    ("baro_altitude", ColumnType::Double),
    ("on_ground", ColumnType::Boolean),
    ("velocity", ColumnType::Double),
    ("true_track", ColumnType::Double),
    ("vertical_rate", ColumnType::Double),
    ("geo_altitude", ColumnType::Double),
    ("squawk", ColumnType::String),
    ("spi", ColumnType::Boolean),
    ("position_source", ColumnType::Int),
    ("category", ColumnType::Int),
];

/// Schema of the `live_flights` table, keyed by `icao24`.
#[must_use]
pub fn live_flights_schema() -> TableSchema {
    TableSchema {
        table: LIVE_FLIGHTS_TABLE.to_owned(),
        primary_key: vec!["icao24".to_owned()],
        columns: LIVE_FLIGHTS_COLUMNS
            .iter()
            .map(|(name, kind)| Column { name: (*name).to_owned(), kind: *kind })
            .collect(),
    }
}
