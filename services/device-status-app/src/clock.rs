//! Clock signal for the "last updated" display

use std::time::Duration;

#[cfg(feature = "csr")]
use device_model::advance;
use leptos::prelude::*;

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Current time in epoch milliseconds
pub fn now_ms() -> u64 {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        js_sys::Date::now() as u64
    }

    #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Clock that ticks every `interval` while the calling component is mounted.
///
/// The browser interval is cleared when the owning component is cleaned up.
pub fn use_clock(interval: Duration) -> ReadSignal<u64> {
    let (now, set_now) = signal(now_ms());
    start_ticking(set_now, interval);
    now
}

#[cfg(feature = "csr")]
fn start_ticking(set_now: WriteSignal<u64>, interval: Duration) {
    match set_interval_with_handle(
        move || set_now.update(|current| *current = advance(*current, now_ms())),
        interval,
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => leptos::logging::error!("Failed to start clock: {:?}", e),
    }
}

// No browser timers outside the WASM client
#[cfg(not(feature = "csr"))]
fn start_ticking(_set_now: WriteSignal<u64>, _interval: Duration) {}

/// Locale-formatted timestamp
pub fn format_time(epoch_ms: u64) -> String {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(epoch_ms as f64));
        String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }

    #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
    {
        let secs = epoch_ms / 1000;
        format!(
            "{:02}:{:02}:{:02} UTC",
            (secs / 3600) % 24,
            (secs / 60) % 60,
            secs % 60
        )
    }
}
