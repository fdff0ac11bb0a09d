use super::*;

fn flight(id: &str, callsign: &str, on_ground: Option<bool>) -> FlightRecord {
    let mut record = FlightRecord::new(id);
    record.callsign = Some(callsign.to_owned());
    record.on_ground = on_ground;
    record
}

fn snapshot(flights: Vec<FlightRecord>) -> FlightSnapshot {
    FlightSnapshot { synced_at: None, total: flights.len(), flights }
}

#[test]
fn default_state_has_no_data() {
    let state = FlightsState::default();
    assert!(!state.has_data());
    assert!(state.table_rows().is_empty());
}

#[test]
fn apply_clears_error_and_loading() {
    let mut state = FlightsState { loading: true, error: Some("boom".into()), ..FlightsState::default() };
    state.apply(snapshot(vec![]), FlightSummary::default(), None);
    assert!(state.has_data());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn apply_without_checkpoint_keeps_previous_one() {
    let mut state = FlightsState::default();
    let checkpoint = SyncCheckpoint { runs: 4, ..SyncCheckpoint::default() };
    state.apply(snapshot(vec![]), FlightSummary::default(), Some(checkpoint));
    state.apply(snapshot(vec![]), FlightSummary::default(), None);
    assert_eq!(state.checkpoint.as_ref().map(|c| c.runs), Some(4));
}

#[test]
fn fail_keeps_previous_snapshot() {
    let mut state = FlightsState::default();
    state.apply(snapshot(vec![flight("abc123", "DLH1", Some(false))]), FlightSummary::default(), None);
    state.fail("request failed: 503");
    assert!(state.has_data());
    assert_eq!(state.error.as_deref(), Some("request failed: 503"));
}

#[test]
fn table_rows_put_airborne_first_then_sort_by_name() {
    let mut state = FlightsState::default();
    state.apply(
        snapshot(vec![
            flight("a1", "ZZZ9", Some(true)),
            flight("a2", "AAA1", Some(false)),
            flight("a3", "BBB2", Some(true)),
            flight("a4", "CCC3", None),
        ]),
        FlightSummary::default(),
        None,
    );
    let names: Vec<String> = state.table_rows().iter().map(|r| r.display_name().to_owned()).collect();
    assert_eq!(names, vec!["BBB2", "ZZZ9", "AAA1", "CCC3"]);
}

#[test]
fn table_rows_are_capped() {
    let flights = (0..TABLE_ROWS + 10).map(|i| flight(&format!("x{i:05}"), &format!("CS{i:05}"), Some(true))).collect();
    let mut state = FlightsState::default();
    state.apply(snapshot(flights), FlightSummary::default(), None);
    assert_eq!(state.table_rows().len(), TABLE_ROWS);
}
