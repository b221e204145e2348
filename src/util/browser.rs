//! Small `window`/`document` helpers.
//!
//! Browser-only behavior lives behind `csr`; without it these are inert so
//! components stay renderable in native builds and tests.

/// Lock or unlock page scrolling behind an open dialog.
pub fn set_body_scroll_locked(locked: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body
                .style()
                .set_property("overflow", if locked { "hidden" } else { "unset" });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = locked;
    }
}

/// Current time as an ISO 8601 string, or empty outside the browser.
pub fn now_iso8601() -> String {
    #[cfg(feature = "csr")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
