//! Device list component

use device_model::{detail_path, DeviceStore};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::status_badge::StatusBadge;

/// One link per device, in store order
#[component]
pub fn DeviceList(devices: RwSignal<DeviceStore>) -> impl IntoView {
    let summary = move || {
        devices.with(|store| format!("({} of {} online)", store.online_count(), store.len()))
    };

    view! {
        <section>
            <h2>
                "Devices "
                <small style="font-weight: normal; color: #6c757d;">{summary}</small>
            </h2>
            <div class="device-list">
                {move || {
                    devices.with(|store| {
                        store.devices().iter().cloned().map(|device| {
                            view! {
                                <A href=detail_path(device.id)>
                                    <div
                                        class="device-entry"
                                        style="display: flex; justify-content: space-between; padding: 0.75rem; border-bottom: 1px solid #dee2e6;"
                                    >
                                        <span>
                                            <strong>{device.name}</strong>
                                            <span style="color: #6c757d;">{format!(" #{}", device.id)}</span>
                                        </span>
                                        <StatusBadge online=device.status />
                                    </div>
                                </A>
                            }
                        }).collect::<Vec<_>>()
                    })
                }}
            </div>
        </section>
    }
}
