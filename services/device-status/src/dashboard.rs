//! Web dashboard: HTML pages, the device API and JSON store endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use device_model::parse_device_id;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::clock::format_display;
use crate::pages;
use crate::reports::ReportCache;
use crate::source::DeviceSource;
use crate::state::{self, StoreHandle};

/// Dashboard application state
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub store: StoreHandle,
    pub source: Arc<dyn DeviceSource>,
    pub reports: ReportCache,
    pub clock: watch::Receiver<u64>,
    pub cancel: CancellationToken,
}

impl DashboardState {
    pub fn new(
        store: StoreHandle,
        source: Arc<dyn DeviceSource>,
        clock: watch::Receiver<u64>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            store,
            source,
            reports: ReportCache::new(),
            clock,
            cancel,
        }
    }

    fn now_ms(&self) -> u64 {
        *self.clock.borrow()
    }
}

/// Build the dashboard axum router
pub fn build_router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/device/{id}", get(detail_handler))
        .route("/refresh", post(refresh_form_handler))
        .route("/api/devices", get(reports_handler))
        .route("/api/devices/{id}", get(report_handler))
        .route("/api/store", get(store_handler))
        .route("/api/refresh", post(refresh_api_handler))
        .route("/api/clock", get(clock_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn index_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let devices = state::snapshot(&dashboard.store).await;
    let reports = dashboard
        .reports
        .load(dashboard.source.as_ref(), &dashboard.cancel)
        .await;

    Html(pages::render_list(&devices, &reports, dashboard.now_ms()))
}

async fn detail_handler(
    State(dashboard): State<DashboardState>,
    Path(raw_id): Path<String>,
) -> Response {
    let now_ms = dashboard.now_ms();
    let device = match parse_device_id(&raw_id) {
        Some(id) => dashboard.store.read().await.get(id).cloned(),
        None => None,
    };

    match device {
        Some(device) => Html(pages::render_detail(&device, now_ms)).into_response(),
        None => {
            tracing::debug!("Detail requested for unknown device '{}'", raw_id);
            (
                StatusCode::NOT_FOUND,
                Html(pages::render_not_found(&raw_id, now_ms)),
            )
                .into_response()
        }
    }
}

async fn refresh_form_handler(State(dashboard): State<DashboardState>) -> Redirect {
    state::refresh_status(&dashboard.store).await;
    Redirect::to("/")
}

async fn reports_handler(State(dashboard): State<DashboardState>) -> Response {
    match dashboard.source.get_devices().await {
        Ok(reports) => Json(reports).into_response(),
        Err(e) => {
            tracing::warn!("Device API request failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

async fn report_handler(
    State(dashboard): State<DashboardState>,
    Path(id): Path<String>,
) -> Response {
    match dashboard.source.get_devices().await {
        Ok(mut reports) => match reports.remove(&id) {
            Some(report) => Json(report).into_response(),
            None => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "Device not found" })),
            )
                .into_response(),
        },
        Err(e) => {
            tracing::warn!("Device API request for '{}' failed: {}", id, e);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

async fn store_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    Json(state::snapshot(&dashboard.store).await)
}

async fn refresh_api_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    Json(state::refresh_status(&dashboard.store).await)
}

async fn clock_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let now_ms = dashboard.now_ms();
    Json(serde_json::json!({
        "now_epoch_ms": now_ms,
        "display": format_display(now_ms),
    }))
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}
