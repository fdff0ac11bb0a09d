//! Tabular list of live flights.

use flights::FlightRecord;
use leptos::prelude::*;

use crate::state::flights::FlightsState;
use crate::util::format::{altitude, heading, or_placeholder, speed};

#[cfg(test)]
#[path = "flight_table_test.rs"]
mod flight_table_test;

pub const COLUMNS: [&str; 7] = ["Callsign", "ICAO24", "Country", "Altitude", "Speed", "Heading", "Status"];

fn status_label(record: &FlightRecord) -> &'static str {
    match record.is_airborne() {
        Some(true) => "Airborne",
        Some(false) => "On ground",
        None => "Unknown",
    }
}

/// Display cells for one row, aligned with [`COLUMNS`].
fn row_cells(record: &FlightRecord) -> [String; 7] {
    [
        record.display_name().to_owned(),
        record.icao24.clone(),
        or_placeholder(record.origin_country.as_deref()).to_owned(),
        altitude(record.baro_altitude),
        speed(record.velocity),
        heading(record.true_track),
        status_label(record).to_owned(),
    ]
}

#[component]
pub fn FlightTable() -> impl IntoView {
    let flights = expect_context::<RwSignal<FlightsState>>();

    view! {
        <table class="flight-table">
            <thead>
                <tr>{COLUMNS.into_iter().map(|c| view! { <th>{c}</th> }).collect_view()}</tr>
            </thead>
            <tbody>
                <For
                    each=move || flights.get().table_rows()
                    key=|record| record.icao24.clone()
                    children=|record| {
                        view! {
                            <tr>{row_cells(&record).into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}</tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
