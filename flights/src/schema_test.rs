use super::*;
use crate::FlightRecord;

#[test]
fn schema_is_keyed_by_icao24() {
    let schema = live_flights_schema();
    assert_eq!(schema.table, "live_flights");
    assert_eq!(schema.primary_key, vec!["icao24".to_owned()]);
    assert_eq!(schema.columns.len(), 17);
}

#[test]
fn schema_columns_match_record_fields() {
    let schema = live_flights_schema();
    let json = serde_json::to_value(FlightRecord::new("x")).unwrap();
    let fields = json.as_object().unwrap();
    assert_eq!(fields.len(), schema.columns.len());
    for column in &schema.columns {
        assert!(fields.contains_key(&column.name), "record lacks column {}", column.name);
    }
}

#[test]
fn column_types_serialize_in_connector_spelling() {
    assert_eq!(serde_json::to_value(ColumnType::UtcDatetime).unwrap(), "UTC_DATETIME");
    assert_eq!(serde_json::to_value(ColumnType::String).unwrap(), "STRING");
    assert_eq!(serde_json::to_value(ColumnType::Int).unwrap(), "INT");
}

#[test]
fn column_lookup_by_name() {
    let schema = live_flights_schema();
    assert_eq!(schema.column("spi").map(|c| c.kind), Some(ColumnType::Boolean));
    assert_eq!(schema.column("last_contact").map(|c| c.kind), Some(ColumnType::UtcDatetime));
    assert!(schema.column("sensors").is_none());
}

#[test]
fn schema_json_uses_type_key() {
    let json = serde_json::to_value(live_flights_schema()).unwrap();
    assert_eq!(json["columns"][0]["name"], "icao24");
    assert_eq!(json["columns"][0]["type"], "STRING");
}

#[test]
fn sql_types_cover_every_column_kind() {
    assert_eq!(ColumnType::Double.sql_type(), "DOUBLE PRECISION");
    assert_eq!(ColumnType::UtcDatetime.sql_type(), "TIMESTAMPTZ");
    assert_eq!(ColumnType::Int.sql_type(), "BIGINT");
}
