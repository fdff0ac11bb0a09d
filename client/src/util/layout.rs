//! Responsive layout policy for the page shell.
//!
//! DESIGN
//! ======
//! The breakpoint rule lives here as a pure function so it can be tested
//! without a browser. `shell_css` renders the same rule as a media query for
//! the server-rendered page, where the viewport width is not yet known; both
//! read the constants below, so they cannot drift apart.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Width reserved for the navigation region on wide viewports (16rem).
pub const NAVIGATION_WIDTH_PX: f64 = 256.0;

/// Viewports wider than this are `Wide`; at or below it they are `Narrow`.
pub const WIDE_BREAKPOINT_PX: f64 = 1024.0;

/// Viewport class of the two layout outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    /// Navigation overlays the content; the main region has no inset.
    Narrow,
    /// Navigation is pinned; the main region is inset by its width.
    Wide,
}

impl ViewportClass {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Wide => "wide",
        }
    }
}

/// Geometry the shell applies for a given viewport width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    pub class: ViewportClass,
    /// Leading (left) inset of the main region in CSS pixels.
    pub left_inset: f64,
    pub navigation_width: f64,
}

impl LayoutMetrics {
    /// Whether the navigation region stays on screen beside the main region.
    #[must_use]
    pub fn navigation_pinned(&self) -> bool {
        self.class == ViewportClass::Wide
    }

    /// Inline style for the main region.
    #[must_use]
    pub fn main_style(&self) -> String {
        format!("margin-left: {}px", self.left_inset)
    }
}

/// Classify a viewport width. Non-finite and negative widths are `Narrow`.
#[must_use]
pub fn classify(viewport_width: f64) -> ViewportClass {
    if viewport_width.is_finite() && viewport_width > WIDE_BREAKPOINT_PX {
        ViewportClass::Wide
    } else {
        ViewportClass::Narrow
    }
}

/// Layout policy: the main region reserves the navigation width only on wide
/// viewports.
#[must_use]
pub fn layout(viewport_width: f64) -> LayoutMetrics {
    let class = classify(viewport_width);
    let left_inset = match class {
        ViewportClass::Wide => NAVIGATION_WIDTH_PX,
        ViewportClass::Narrow => 0.0,
    };
    LayoutMetrics { class, left_inset, navigation_width: NAVIGATION_WIDTH_PX }
}

/// Stylesheet for the shell containers.
///
/// Wide styling is the default; the single media query switches to the
/// narrow layout at or below the breakpoint.
#[must_use]
pub fn shell_css() -> String {
    format!(
        ".page-shell {{ display: flex; height: 100vh; }}\n\
         .page-shell__nav {{ position: fixed; top: 0; bottom: 0; left: 0; width: {nav}px; z-index: 20; \
         transition: transform 150ms ease-out; }}\n\
         .page-shell__main {{ flex: 1 1 auto; display: flex; flex-direction: column; min-width: 0; \
         margin-left: {nav}px; }}\n\
         .page-shell__content {{ flex: 1 1 auto; overflow-y: auto; }}\n\
         .page-shell__scrim {{ display: none; }}\n\
         @media (max-width: {bp}px) {{\n\
         \x20 .page-shell__main {{ margin-left: 0; }}\n\
         \x20 .page-shell__nav {{ transform: translateX(-100%); }}\n\
         \x20 .page-shell--nav-open .page-shell__nav {{ transform: none; }}\n\
         \x20 .page-shell__scrim {{ display: block; position: fixed; inset: 0; z-index: 10; \
         background: rgba(0, 0, 0, 0.4); }}\n\
         }}\n",
        nav = NAVIGATION_WIDTH_PX,
        bp = WIDE_BREAKPOINT_PX,
    )
}
