//! Browser side effects: blocking alerts, opening links and the carousel timer.

use std::time::Duration;

use leptos::prelude::*;

/// Show a blocking alert.
#[cfg(target_arch = "wasm32")]
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        _ = window.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn alert(_message: &str) {}

/// Open `url` in a new browsing context.
#[cfg(target_arch = "wasm32")]
pub(crate) fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        _ = window.open_with_url_and_target(url, "_blank");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn open_in_new_tab(_url: &str) {}

/// Run `tick` every `interval` until the returned handle is cleared.
#[cfg(target_arch = "wasm32")]
pub(crate) fn start_interval(
    tick: impl Fn() + 'static,
    interval: Duration,
) -> Option<IntervalHandle> {
    set_interval_with_handle(tick, interval).ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn start_interval(
    _tick: impl Fn() + 'static,
    _interval: Duration,
) -> Option<IntervalHandle> {
    None
}
