//! Home route: the page shell filled with sidebar, header, and dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It wires the concrete region components into
//! `PageShell` and runs the browser-side polling loop that keeps
//! `FlightsState` current.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::dashboard::Dashboard;
use crate::components::header::Header;
use crate::components::page_shell::{ContentRenderer, HeaderRenderer, NavigationRenderer, PageShell};
use crate::components::sidebar::Sidebar;
use crate::state::flights::FlightsState;
use crate::state::ui::UiState;

/// Seconds between dashboard refreshes.
pub const POLL_INTERVAL_SECS: u64 = 30;

/// Flights requested per refresh; the table shows a subset.
pub const FETCH_LIMIT: usize = 500;

#[component]
pub fn HomePage() -> impl IntoView {
    let flights = expect_context::<RwSignal<FlightsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Theme preference is browser-only; apply it after hydration.
    Effect::new(move || {
        let enabled = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            while alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                refresh(flights).await;
                gloo_timers::future::sleep(std::time::Duration::from_secs(POLL_INTERVAL_SECS)).await;
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        flights.update(|f| f.loading = true);
    }

    let navigation: Arc<dyn NavigationRenderer> = Arc::new(|| view! { <Sidebar/> }.into_any());
    let header: Arc<dyn HeaderRenderer> = Arc::new(|| view! { <Header/> }.into_any());
    let content: Arc<dyn ContentRenderer> = Arc::new(|| view! { <Dashboard/> }.into_any());

    view! { <PageShell navigation=navigation header=header content=content/> }
}

#[cfg(feature = "hydrate")]
async fn refresh(flights: RwSignal<FlightsState>) {
    use crate::net::api;

    flights.update(|f| f.loading = true);
    let result = async {
        let snapshot = api::fetch_flights(FETCH_LIMIT).await?;
        let summary = api::fetch_summary().await?;
        Ok::<_, String>((snapshot, summary))
    }
    .await;

    match result {
        Ok((snapshot, summary)) => {
            // Sync status is informational; a failure there keeps the last one.
            let checkpoint = api::fetch_sync_status().await.ok();
            flights.update(|f| f.apply(snapshot, summary, checkpoint));
        }
        Err(e) => {
            log::warn!("flight refresh failed: {e}");
            flights.update(|f| f.fail(e));
        }
    }
}
