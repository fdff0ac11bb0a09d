//! Theme preference for the dashboard.
//!
//! The preference lives in `localStorage`; the active theme is exposed as a
//! `data-theme` attribute on `<html>` so the stylesheet can switch palettes.
//! Without a stored value the system `prefers-color-scheme` wins.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort and browser-only. Server rendering always
//! starts light, and hydration corrects it on the first effect.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "skydeck_dark";

/// Value written to the `data-theme` attribute.
#[must_use]
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Decode a stored preference. Anything other than `"true"`/`"false"` is
/// treated as unset.
#[must_use]
pub fn parse_stored(value: &str) -> Option<bool> {
    match value.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Stored preference, or the system preference when nothing is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|value| parse_stored(&value));
        if let Some(enabled) = stored {
            return enabled;
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set `data-theme` on the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if el.set_attribute("data-theme", theme_name(enabled)).is_err() {
                log::warn!("failed to set data-theme");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it, and persist the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(STORAGE_KEY, if next { "true" } else { "false" }).is_err() {
                log::warn!("failed to persist theme preference");
            }
        }
    }
    next
}
