//! Top-level page layout: navigation, header, and content regions.
//!
//! ARCHITECTURE
//! ============
//! The shell owns geometry only. What goes in each region is injected
//! through the three renderer traits below, so the shell can be composed
//! with any sidebar, header, or dashboard (or with stubs in tests).
//!
//! Region order in the document is fixed: navigation, then a main region
//! containing the header followed by the content. On wide viewports the
//! navigation is pinned and the main region is inset by its width; on
//! narrow ones the inset is zero and the navigation becomes a drawer
//! toggled through `UiState::nav_open`.
//!
//! Before hydration the viewport width is unknown, so the inset comes from
//! the media query in [`shell_css`]. Once measured, [`layout`] drives an
//! inline style on the main region.
//!
//! [`layout`]: crate::util::layout::layout

use std::sync::Arc;

use leptos::prelude::*;
use leptos::tachys::view::any_view::AnyView;

use crate::state::ui::UiState;
use crate::state::viewport::ViewportState;
use crate::util::layout::{LayoutMetrics, shell_css};

#[cfg(test)]
#[path = "page_shell_test.rs"]
mod page_shell_test;

// =============================================================
// Region renderers
// =============================================================

/// Produces the navigation region.
pub trait NavigationRenderer: Send + Sync + 'static {
    fn render_navigation(&self) -> AnyView;
}

/// Produces the header region.
pub trait HeaderRenderer: Send + Sync + 'static {
    fn render_header(&self) -> AnyView;
}

/// Produces the primary content region.
pub trait ContentRenderer: Send + Sync + 'static {
    fn render_content(&self) -> AnyView;
}

impl<F> NavigationRenderer for F
where
    F: Fn() -> AnyView + Send + Sync + 'static,
{
    fn render_navigation(&self) -> AnyView {
        self()
    }
}

impl<F> HeaderRenderer for F
where
    F: Fn() -> AnyView + Send + Sync + 'static,
{
    fn render_header(&self) -> AnyView {
        self()
    }
}

impl<F> ContentRenderer for F
where
    F: Fn() -> AnyView + Send + Sync + 'static,
{
    fn render_content(&self) -> AnyView {
        self()
    }
}

/// Rendered regions in document order.
pub struct ShellRegions {
    pub navigation: AnyView,
    pub header: AnyView,
    pub content: AnyView,
}

/// Invoke each renderer exactly once, in document order.
pub fn render_regions(
    navigation: &dyn NavigationRenderer,
    header: &dyn HeaderRenderer,
    content: &dyn ContentRenderer,
) -> ShellRegions {
    let navigation = navigation.render_navigation();
    let header = header.render_header();
    let content = content.render_content();
    ShellRegions { navigation, header, content }
}

// =============================================================
// Presentation helpers
// =============================================================

fn shell_class(nav_open: bool) -> &'static str {
    if nav_open { "page-shell page-shell--nav-open" } else { "page-shell" }
}

/// Inline style for the main region; empty until the viewport is measured.
fn main_style(metrics: Option<LayoutMetrics>) -> String {
    metrics.map(|m| m.main_style()).unwrap_or_default()
}

fn viewport_label(metrics: Option<LayoutMetrics>) -> &'static str {
    metrics.map_or("unmeasured", |m| m.class.as_str())
}

// =============================================================
// Component
// =============================================================

/// Page shell composing injected navigation, header, and content.
#[component]
pub fn PageShell(
    navigation: Arc<dyn NavigationRenderer>,
    header: Arc<dyn HeaderRenderer>,
    content: Arc<dyn ContentRenderer>,
) -> impl IntoView {
    let viewport = use_context::<RwSignal<ViewportState>>().unwrap_or_else(|| RwSignal::new(ViewportState::default()));
    let ui = use_context::<RwSignal<UiState>>().unwrap_or_else(|| RwSignal::new(UiState::default()));

    #[cfg(feature = "hydrate")]
    {
        let measure = move || viewport.set(ViewportState { width: crate::util::viewport::window_width() });
        Effect::new(move || measure());
        let handle = window_event_listener(leptos::ev::resize, move |_| measure());
        on_cleanup(move || handle.remove());
    }

    let ShellRegions { navigation, header, content } =
        render_regions(navigation.as_ref(), header.as_ref(), content.as_ref());

    let class = move || shell_class(ui.get().nav_open);
    let style = move || main_style(viewport.get().metrics());
    let label = move || viewport_label(viewport.get().metrics());
    let close_nav = move |_| ui.update(|u| u.nav_open = false);

    view! {
        <style>{shell_css()}</style>
        <div class=class data-viewport=label>
            <aside class="page-shell__nav" aria-label="Navigation">
                {navigation}
            </aside>
            <Show when=move || ui.get().nav_open>
                <div class="page-shell__scrim" on:click=close_nav></div>
            </Show>
            <div class="page-shell__main" style=style>
                <div class="page-shell__header">{header}</div>
                <main class="page-shell__content">{content}</main>
            </div>
        </div>
    }
}
