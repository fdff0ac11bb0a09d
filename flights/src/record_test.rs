use super::*;
use time::macros::datetime;

#[test]
fn new_record_has_only_primary_key() {
    let rec = FlightRecord::new("abc123");
    assert_eq!(rec.icao24, "abc123");
    assert!(rec.callsign.is_none());
    assert!(rec.on_ground.is_none());
    assert!(!rec.has_position());
}

#[test]
fn display_name_prefers_callsign() {
    let mut rec = FlightRecord::new("abc123");
    assert_eq!(rec.display_name(), "abc123");
    rec.callsign = Some("DLH4AB".to_owned());
    assert_eq!(rec.display_name(), "DLH4AB");
}

#[test]
fn is_airborne_inverts_on_ground() {
    let mut rec = FlightRecord::new("abc123");
    assert_eq!(rec.is_airborne(), None);
    rec.on_ground = Some(false);
    assert_eq!(rec.is_airborne(), Some(true));
    rec.on_ground = Some(true);
    assert_eq!(rec.is_airborne(), Some(false));
}

#[test]
fn timestamps_serialize_as_rfc3339() {
    let mut rec = FlightRecord::new("abc123");
    rec.last_contact = Some(datetime!(2024-05-01 12:30:00 UTC));
    let json = serde_json::to_value(&rec).unwrap();
    assert_eq!(json["last_contact"], "2024-05-01T12:30:00Z");
    assert!(json["time_position"].is_null());
}

#[test]
fn record_deserializes_with_missing_timestamps() {
    let raw = r#"{
        "icao24": "4b1805", "callsign": "SWR12", "origin_country": "Switzerland",
        "longitude": 8.5, "latitude": 47.4, "baro_altitude": null, "on_ground": true,
        "velocity": 0.0, "true_track": null, "vertical_rate": null, "geo_altitude": null,
        "squawk": null, "spi": false, "position_source": 0, "category": null
    }"#;
    let rec: FlightRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(rec.icao24, "4b1805");
    assert!(rec.time_position.is_none());
    assert!(rec.last_contact.is_none());
    assert_eq!(rec.on_ground, Some(true));
    assert!(rec.has_position());
}

#[test]
fn checkpoint_default_is_empty() {
    let cp = SyncCheckpoint::default();
    assert!(cp.synced_at.is_none());
    assert_eq!(cp.runs, 0);
    assert_eq!(cp.flight_count, 0);
}
