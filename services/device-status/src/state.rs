//! Shared device store handle

use std::sync::Arc;

use device_model::{Device, DeviceStore};
use tokio::sync::RwLock;

/// Thread-safe store handle shared by the dashboard and the simulated source
pub type StoreHandle = Arc<RwLock<DeviceStore>>;

pub fn new_store_handle(store: DeviceStore) -> StoreHandle {
    Arc::new(RwLock::new(store))
}

/// Copy of the current device list, in store order
pub async fn snapshot(store: &StoreHandle) -> Vec<Device> {
    store.read().await.devices().to_vec()
}

/// Randomize every device's status and return the new list
pub async fn refresh_status(store: &StoreHandle) -> Vec<Device> {
    let mut store = store.write().await;
    store.refresh_status_with(&mut rand::rng());
    tracing::debug!(
        "Refreshed {} devices, {} online",
        store.len(),
        store.online_count()
    );
    store.devices().to_vec()
}
