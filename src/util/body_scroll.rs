//! Page scroll lock while a modal is open.
//!
//! Sets `overflow: hidden` on `<body>` when locked and clears it when
//! released. Requires a browser environment; SSR builds no-op.

#[cfg(test)]
#[path = "body_scroll_test.rs"]
mod body_scroll_test;

/// Inline `overflow` value for the requested lock state.
pub fn overflow_value(locked: bool) -> &'static str {
    if locked { "hidden" } else { "" }
}

/// Apply the lock state to `<body>`.
pub fn set_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        if let Err(err) = body.style().set_property("overflow", overflow_value(locked)) {
            leptos::logging::warn!("body scroll lock failed: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}
