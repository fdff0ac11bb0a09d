//! Header region: drawer toggle, title, sync freshness, and theme switch.

use leptos::prelude::*;
use time::OffsetDateTime;

use crate::state::flights::FlightsState;
use crate::state::ui::UiState;
use crate::util::format::relative_time;

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

fn sync_label(synced_at: Option<OffsetDateTime>, now: Option<OffsetDateTime>) -> String {
    match (synced_at, now) {
        (None, _) => "Waiting for first sync".to_owned(),
        (Some(at), Some(now)) => format!("Synced {}", relative_time(Some(at), now)),
        (Some(_), None) => "Synced".to_owned(),
    }
}

fn theme_button_label(dark_mode: bool) -> &'static str {
    if dark_mode { "Light mode" } else { "Dark mode" }
}

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let flights = expect_context::<RwSignal<FlightsState>>();

    let synced = move || {
        let synced_at = flights.get().checkpoint.and_then(|c| c.synced_at);
        sync_label(synced_at, crate::util::viewport::now())
    };

    let on_menu = move |_| ui.update(UiState::toggle_nav);
    let on_theme = move |_| {
        let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <header class="page-header">
            <button
                class="page-header__menu"
                aria-label="Toggle navigation"
                aria-expanded=move || ui.get().nav_open.to_string()
                on:click=on_menu
            >
                "☰"
            </button>
            <h1 class="page-header__title">"Live flights"</h1>
            <span class="page-header__sync">{synced}</span>
            <button class="page-header__theme" on:click=on_theme>
                {move || theme_button_label(ui.get().dark_mode)}
            </button>
        </header>
    }
}
