//! Browser viewport and clock access.
//!
//! Both return `None` outside the browser so server rendering stays
//! deterministic.

use time::OffsetDateTime;

/// Current `window.innerWidth` in CSS pixels.
pub fn window_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Wall clock from the browser. `time`'s own clock is unavailable on
/// `wasm32-unknown-unknown`.
pub fn now() -> Option<OffsetDateTime> {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let millis = js_sys::Date::now() as i128;
        OffsetDateTime::from_unix_timestamp_nanos(millis * 1_000_000).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
