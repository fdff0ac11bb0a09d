//! Local UI chrome state (theme, navigation drawer, active section).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of flight data so the shell
//! regions can evolve independently of the API models.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Dashboard sections reachable from the navigation region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavSection {
    #[default]
    Overview,
    Flights,
    Countries,
}

impl NavSection {
    pub const ALL: [Self; 3] = [Self::Overview, Self::Flights, Self::Countries];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Flights => "Flights",
            Self::Countries => "Countries",
        }
    }

    /// In-page anchor the navigation link scrolls to.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Overview => "#overview",
            Self::Flights => "#flights",
            Self::Countries => "#countries",
        }
    }
}

/// UI state for theme, navigation drawer, and section highlight.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    /// Whether the navigation drawer is open on narrow viewports. Ignored
    /// when the navigation region is pinned.
    pub nav_open: bool,
    pub section: NavSection,
}

impl UiState {
    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    /// Select a section; closes the drawer so the content is visible.
    pub fn select_section(&mut self, section: NavSection) {
        self.section = section;
        self.nav_open = false;
    }
}
