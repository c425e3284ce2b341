//! Status badge component

use leptos::prelude::*;

/// Label and (foreground, background) colors for a device status
pub fn badge_style(online: bool) -> (&'static str, &'static str, &'static str) {
    if online {
        ("Online", "#155724", "#d4edda")
    } else {
        ("Offline", "#721c24", "#f8d7da")
    }
}

/// A colored badge showing Online (green) or Offline (red)
#[component]
pub fn StatusBadge(online: bool) -> impl IntoView {
    let (label, color, bg) = badge_style(online);
    let class = if online { "status-online" } else { "status-offline" };

    let style = format!(
        "display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; \
         font-size: 0.85em; font-weight: 600; color: {}; background-color: {};",
        color, bg
    );

    view! {
        <span class=class style=style>{label}</span>
    }
}
