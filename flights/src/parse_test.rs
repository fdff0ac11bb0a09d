use super::*;
use serde_json::json;

fn sample_row() -> Value {
    json!([
        "3c6444",
        "DLH9LF  ",
        "Germany",
        1_714_566_600,
        1_714_566_601,
        6.1024,
        50.9031,
        10972.8,
        false,
        232.3,
        98.6,
        0.33,
        null,
        11049.0,
        "1000",
        false,
        0,
        3
    ])
}

// =============================================================
// safe_bool
// =============================================================

#[test]
fn safe_bool_null_is_none() {
    assert_eq!(safe_bool(&Value::Null), None);
}

#[test]
fn safe_bool_passes_booleans_through() {
    assert_eq!(safe_bool(&json!(true)), Some(true));
    assert_eq!(safe_bool(&json!(false)), Some(false));
}

#[test]
fn safe_bool_numbers_are_truthy_when_non_zero() {
    assert_eq!(safe_bool(&json!(0)), Some(false));
    assert_eq!(safe_bool(&json!(2)), Some(true));
    assert_eq!(safe_bool(&json!(0.5)), Some(true));
}

#[test]
fn safe_bool_strings_match_truthy_words() {
    assert_eq!(safe_bool(&json!("TRUE")), Some(true));
    assert_eq!(safe_bool(&json!("yes")), Some(true));
    assert_eq!(safe_bool(&json!("1")), Some(true));
    assert_eq!(safe_bool(&json!("no")), Some(false));
    assert_eq!(safe_bool(&json!("")), Some(false));
}

#[test]
fn safe_bool_containers_are_none() {
    assert_eq!(safe_bool(&json!([true])), None);
    assert_eq!(safe_bool(&json!({"a": 1})), None);
}

// =============================================================
// safe_int
// =============================================================

#[test]
fn safe_int_handles_numbers() {
    assert_eq!(safe_int(&json!(7)), Some(7));
    assert_eq!(safe_int(&json!(-3)), Some(-3));
    assert_eq!(safe_int(&json!(2.9)), Some(2));
    assert_eq!(safe_int(&json!(-2.9)), Some(-2));
}

#[test]
fn safe_int_handles_bools_and_strings() {
    assert_eq!(safe_int(&json!(true)), Some(1));
    assert_eq!(safe_int(&json!(" 42 ")), Some(42));
    assert_eq!(safe_int(&json!("4.2")), None);
    assert_eq!(safe_int(&json!("abc")), None);
}

#[test]
fn safe_int_null_and_containers_are_none() {
    assert_eq!(safe_int(&Value::Null), None);
    assert_eq!(safe_int(&json!([1])), None);
}

// =============================================================
// parse_states
// =============================================================

#[test]
fn parse_states_decodes_full_row() {
    let body = json!({ "time": 1_714_566_605, "states": [sample_row()] });
    let parsed = parse_states(&body, DEFAULT_FLIGHT_LIMIT).unwrap();

    assert_eq!(parsed.time, Some(1_714_566_605));
    assert_eq!(parsed.skipped, 0);
    assert_eq!(parsed.records.len(), 1);

    let rec = &parsed.records[0];
    assert_eq!(rec.icao24, "3c6444");
    assert_eq!(rec.callsign.as_deref(), Some("DLH9LF"));
    assert_eq!(rec.origin_country.as_deref(), Some("Germany"));
    assert_eq!(rec.time_position.map(OffsetDateTime::unix_timestamp), Some(1_714_566_600));
    assert_eq!(rec.last_contact.map(OffsetDateTime::unix_timestamp), Some(1_714_566_601));
    assert_eq!(rec.baro_altitude, Some(10972.8));
    assert_eq!(rec.on_ground, Some(false));
    assert_eq!(rec.geo_altitude, Some(11049.0));
    assert_eq!(rec.squawk.as_deref(), Some("1000"));
    assert_eq!(rec.spi, Some(false));
    assert_eq!(rec.position_source, Some(0));
    assert_eq!(rec.category, Some(3));
}

#[test]
fn parse_states_null_states_is_empty() {
    let parsed = parse_states(&json!({ "time": 1, "states": null }), 10).unwrap();
    assert!(parsed.records.is_empty());
    assert_eq!(parsed.time, Some(1));
}

#[test]
fn parse_states_missing_states_is_empty() {
    let parsed = parse_states(&json!({}), 10).unwrap();
    assert!(parsed.records.is_empty());
    assert_eq!(parsed.time, None);
}

#[test]
fn parse_states_rejects_non_object_body() {
    assert_eq!(parse_states(&json!([1, 2]), 10), Err(ParseError::NotAnObject));
}

#[test]
fn parse_states_rejects_non_array_states() {
    assert_eq!(parse_states(&json!({ "states": "nope" }), 10), Err(ParseError::StatesNotArray));
}

#[test]
fn parse_states_applies_limit_before_decoding() {
    let rows: Vec<Value> = (0..5).map(|i| json!([format!("a{i}")])).collect();
    let parsed = parse_states(&json!({ "states": rows }), 3).unwrap();
    let ids: Vec<&str> = parsed.records.iter().map(|r| r.icao24.as_str()).collect();
    assert_eq!(ids, vec!["a0", "a1", "a2"]);
}

#[test]
fn parse_states_zero_limit_yields_nothing() {
    let parsed = parse_states(&json!({ "states": [sample_row()] }), 0).unwrap();
    assert!(parsed.records.is_empty());
    assert_eq!(parsed.skipped, 0);
}

#[test]
fn parse_states_skips_undecodable_rows() {
    let body = json!({ "states": [sample_row(), "garbage", [null, "X"], ["  "], ["ok1"]] });
    let parsed = parse_states(&body, 10).unwrap();
    assert_eq!(parsed.records.len(), 2);
    assert_eq!(parsed.skipped, 3);
}

#[test]
fn parse_states_short_row_leaves_optional_tail_empty() {
    let row = json!(["abc", null, "France", null, 0, 1.0, 2.0, null, true, null, null, null, null, null, null, null]);
    let parsed = parse_states(&json!({ "states": [row] }), 10).unwrap();
    let rec = &parsed.records[0];
    assert!(rec.callsign.is_none());
    assert!(rec.time_position.is_none());
    assert!(rec.last_contact.is_none(), "zero timestamp means unknown");
    assert_eq!(rec.on_ground, Some(true));
    assert!(rec.position_source.is_none());
    assert!(rec.category.is_none());
}

#[test]
fn parse_states_blank_callsign_is_none() {
    let row = json!(["abc", "        "]);
    let parsed = parse_states(&json!({ "states": [row] }), 10).unwrap();
    assert!(parsed.records[0].callsign.is_none());
}

#[test]
fn parse_states_coerces_loose_cells() {
    let row = json!([
        "abc", "X", "Y", 100, 100, "not-a-number", 1, 2, "true", 3, 4, 5, null, 6, null, 1, "2", 4.0
    ]);
    let parsed = parse_states(&json!({ "states": [row] }), 10).unwrap();
    let rec = &parsed.records[0];
    assert!(rec.longitude.is_none());
    assert_eq!(rec.latitude, Some(1.0));
    assert_eq!(rec.on_ground, Some(true));
    assert_eq!(rec.spi, Some(true));
    assert_eq!(rec.position_source, Some(2));
    assert_eq!(rec.category, Some(4));
}

#[test]
fn parse_states_lowercases_address() {
    let parsed = parse_states(&json!({ "states": [[" 3C6444 "]] }), 10).unwrap();
    assert_eq!(parsed.records[0].icao24, "3c6444");
}
