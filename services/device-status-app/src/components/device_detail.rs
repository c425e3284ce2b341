//! Device detail component

use device_model::{parse_device_id, Device, DeviceStore};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::clock::format_time;
use crate::components::status_badge::StatusBadge;

/// Look up the device a route's `:id` segment points at
pub fn resolve_device(store: &DeviceStore, raw_id: Option<&str>) -> Option<Device> {
    let id = parse_device_id(raw_id?)?;
    store.get(id).cloned()
}

/// Shows one device, selected by the router's `:id` parameter
#[component]
pub fn DeviceDetail(devices: RwSignal<DeviceStore>, now: ReadSignal<u64>) -> impl IntoView {
    let params = use_params_map();
    let device = move || {
        let raw_id = params.with(|p| p.get("id"));
        devices.with(|store| resolve_device(store, raw_id.as_deref()))
    };

    view! {
        <section class="device-detail">
            {move || match device() {
                Some(device) => view! {
                    <h2>{format!("{} Details", device.name)}</h2>
                    <p>"Device ID: " <strong>{device.id}</strong></p>
                    <p>"Status: " <StatusBadge online=device.status /></p>
                    <p>"Last updated: " {move || format_time(now.get())}</p>
                }.into_any(),
                None => view! {
                    <h2>"Device not found"</h2>
                    <p>"No device matches this address."</p>
                }.into_any(),
            }}
            <A href="/">"Back"</A>
        </section>
    }
}
