//! BDD test world for the device status service

use std::sync::Arc;

use axum::http::StatusCode;
use cucumber::World;
use device_status::dashboard::DashboardState;
use device_status::source::DeviceSource;
use device_status::state::StoreHandle;

#[derive(Debug, Default, World)]
pub struct DeviceStatusWorld {
    pub store: Option<StoreHandle>,
    pub source: Option<Arc<dyn DeviceSource>>,

    pub last_status: Option<StatusCode>,
    pub last_body: Option<String>,
    /// Device ids in the order the last list page showed them
    pub listed_ids: Vec<Vec<u32>>,
}

impl DeviceStatusWorld {
    pub fn dashboard_state(&self) -> DashboardState {
        let store = self.store.clone().expect("store not set");
        let source = self.source.clone().expect("source not set");
        let (_, clock) = tokio::sync::watch::channel(0);
        DashboardState::new(
            store,
            source,
            clock,
            tokio_util::sync::CancellationToken::new(),
        )
    }
}
