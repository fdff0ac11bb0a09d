//! Viewport width as seen by the page shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders before any width is known, so `width` starts as
//! `None` and the shell falls back to the stylesheet's media query. After
//! hydration the browser reports the real width and the shell applies
//! [`layout`] directly.

use crate::util::layout::{LayoutMetrics, layout};

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportState {
    /// CSS pixel width of the window, once measured.
    pub width: Option<f64>,
}

impl ViewportState {
    #[must_use]
    pub fn measured(width: f64) -> Self {
        Self { width: Some(width) }
    }

    /// Layout for the measured width; `None` until measured.
    #[must_use]
    pub fn metrics(&self) -> Option<LayoutMetrics> {
        self.width.map(layout)
    }
}
