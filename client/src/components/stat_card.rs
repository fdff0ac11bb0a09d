//! Single labeled metric tile.

use leptos::prelude::*;

#[component]
pub fn StatCard(#[prop(into)] label: String, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{move || value.get()}</div>
        </div>
    }
}
