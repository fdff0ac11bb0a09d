//! Navigation region: brand mark and section links.

use leptos::prelude::*;

use crate::state::ui::{NavSection, UiState};

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

fn link_class(active: bool) -> &'static str {
    if active { "sidebar__link sidebar__link--active" } else { "sidebar__link" }
}

/// Sidebar listing dashboard sections. Selecting one closes the drawer.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"SkyDeck"</div>
            <ul class="sidebar__links">
                {NavSection::ALL
                    .into_iter()
                    .map(|section| {
                        let class = move || link_class(ui.get().section == section);
                        view! {
                            <li>
                                <a
                                    class=class
                                    href=section.anchor()
                                    on:click=move |_| ui.update(|u| u.select_section(section))
                                >
                                    {section.label()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="sidebar__footer">"Data: OpenSky Network"</div>
        </nav>
    }
}
