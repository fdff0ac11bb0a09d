use super::*;

#[test]
fn row_cells_follow_column_order() {
    let mut record = FlightRecord::new("3c6444");
    record.callsign = Some("DLH9LF".to_owned());
    record.origin_country = Some("Germany".to_owned());
    record.baro_altitude = Some(10_668.0);
    record.velocity = Some(257.222);
    record.true_track = Some(90.0);
    record.on_ground = Some(false);

    let cells = row_cells(&record);
    assert_eq!(cells.len(), COLUMNS.len());
    assert_eq!(cells, ["DLH9LF", "3c6444", "Germany", "35,000 ft", "500 kt", "090°", "Airborne"].map(String::from));
}

#[test]
fn row_cells_for_sparse_record() {
    let cells = row_cells(&FlightRecord::new("abc123"));
    assert_eq!(cells[0], "abc123");
    assert_eq!(cells[2], "—");
    assert_eq!(cells[6], "Unknown");
}

#[test]
fn status_label_on_ground() {
    let mut record = FlightRecord::new("abc123");
    record.on_ground = Some(true);
    assert_eq!(status_label(&record), "On ground");
}
