//! Device report panel component

use device_model::DeviceReports;
use leptos::prelude::*;

use crate::api::{fetch_reports, FetchAbort};

/// Fetches /api/devices and lists what the device API reports.
///
/// A failed fetch is logged and shows as an empty panel. The request is
/// aborted if the panel unmounts first.
#[component]
pub fn DeviceReportsPanel() -> impl IntoView {
    let abort = FetchAbort::new();
    let fetch_abort = abort.clone();
    let reports = LocalResource::new(move || {
        let abort = fetch_abort.clone();
        async move {
            fetch_reports(&abort).await.unwrap_or_else(|e| {
                leptos::logging::error!("Error fetching device status: {}", e);
                DeviceReports::new()
            })
        }
    });
    on_cleanup(move || abort.abort());

    view! {
        <section>
            <h2>"Device Status"</h2>
            <Suspense fallback=move || view! { <p>"Loading device status..."</p> }>
                {move || {
                    reports.get().map(|data| {
                        if data.is_empty() {
                            view! { <p>"No device reports."</p> }.into_any()
                        } else {
                            view! {
                                <ul>
                                    {data.into_iter().map(|(id, report)| {
                                        view! {
                                            <li>
                                                <strong>{id}</strong>
                                                {format!(": {} (last seen: {})", report.status, report.last_seen)}
                                            </li>
                                        }
                                    }).collect::<Vec<_>>()}
                                </ul>
                            }.into_any()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}
