//! Main App component

use device_model::DeviceStore;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::clock::{format_time, now_ms, use_clock, TICK_INTERVAL};
use crate::components::device_detail::DeviceDetail;
use crate::components::device_list::DeviceList;
use crate::components::device_reports::DeviceReportsPanel;

/// Randomize every device status in the root-owned store
pub fn refresh_devices(devices: RwSignal<DeviceStore>, rng: StoredValue<SmallRng>) {
    rng.update_value(|rng| devices.update(|store| store.refresh_status_with(rng)));
}

/// Root application component; owns the device store
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let devices = RwSignal::new(DeviceStore::sample());
    let rng = StoredValue::new(SmallRng::seed_from_u64(now_ms()));
    let now = use_clock(TICK_INTERVAL);

    view! {
        <Title text="IoT Device Status" />
        <Router>
            <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
                <h1>"IoT Device Status"</h1>
                <button
                    class="refresh-button"
                    style="padding: 0.5rem 1rem; border: none; border-radius: 0.25rem; background-color: #0d6efd; color: #fff; cursor: pointer;"
                    on:click=move |_| refresh_devices(devices, rng)
                >
                    "Refresh status"
                </button>
                <p style="color: #6c757d;">"Last updated: " {move || format_time(now.get())}</p>
                <Routes fallback=|| view! { <p>"Page not found."</p> }>
                    <Route
                        path=path!("/")
                        view=move || view! {
                            <DeviceList devices=devices />
                            <DeviceReportsPanel />
                        }
                    />
                    <Route
                        path=path!("/device/:id")
                        view=move || view! { <DeviceDetail devices=devices now=now /> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
