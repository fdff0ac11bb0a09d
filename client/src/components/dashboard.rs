//! Content region: summary tiles, busiest origin countries, and the flight
//! table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `FlightsState` only. Polling lives in the home page so the
//! dashboard can be swapped for another content renderer without moving the
//! data loop.

use flights::{CountryCount, FlightSummary};
use leptos::prelude::*;

use crate::components::flight_table::FlightTable;
use crate::components::stat_card::StatCard;
use crate::state::flights::FlightsState;
use crate::util::format::{altitude, speed};

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Tile labels in display order.
pub const TILE_LABELS: [&str; 6] = ["Tracked", "Airborne", "On ground", "Countries", "Mean speed", "Highest"];

/// Tile values aligned with [`TILE_LABELS`]. Dashes until a summary arrives.
fn tile_values(summary: Option<&FlightSummary>) -> [String; 6] {
    let Some(s) = summary else {
        return std::array::from_fn(|_| "—".to_owned());
    };
    [
        s.total.to_string(),
        s.airborne.to_string(),
        s.on_ground.to_string(),
        s.countries.to_string(),
        speed(s.mean_velocity),
        altitude(s.max_baro_altitude),
    ]
}

/// Bar width for a country row as a percentage of the busiest country.
fn share_percent(entry: &CountryCount, busiest: usize) -> u32 {
    if busiest == 0 {
        return 0;
    }
    let pct = entry.count.saturating_mul(100) / busiest;
    u32::try_from(pct.min(100)).unwrap_or(100)
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let flights = expect_context::<RwSignal<FlightsState>>();

    let tiles = TILE_LABELS
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let value = Signal::derive(move || tile_values(flights.get().summary.as_ref())[i].clone());
            view! { <StatCard label=label value=value/> }
        })
        .collect_view();

    let top_countries = move || flights.get().summary.map(|s| s.top_countries).unwrap_or_default();

    view! {
        <div class="dashboard">
            <Show when=move || flights.get().error.is_some()>
                <div class="dashboard__error" role="alert">
                    {move || flights.get().error.unwrap_or_default()}
                </div>
            </Show>
            <Show when=move || flights.get().loading && !flights.get().has_data()>
                <div class="dashboard__loading">"Loading flights…"</div>
            </Show>

            <section id="overview" class="dashboard__tiles">{tiles}</section>

            <section id="countries" class="dashboard__countries">
                <h2>"Busiest origin countries"</h2>
                <ol>
                    {move || {
                        let rows = top_countries();
                        let busiest = rows.first().map_or(0, |c| c.count);
                        rows.into_iter()
                            .map(|entry| {
                                let width = format!("width: {}%", share_percent(&entry, busiest));
                                view! {
                                    <li class="dashboard__country">
                                        <span>{entry.country.clone()}</span>
                                        <span class="dashboard__bar" style=width></span>
                                        <span>{entry.count}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ol>
            </section>

            <section id="flights" class="dashboard__flights">
                <h2>"Flights"</h2>
                <FlightTable/>
            </section>
        </div>
    }
}
