//! Device report sources: the simulated device API and an HTTP-backed one

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use device_model::{DeviceReport, DeviceReports};

use crate::clock::{current_epoch_ms, format_rfc3339};
use crate::config::SourceConfig;
use crate::io::{HttpClient, ReqwestHttpClient};
use crate::state::StoreHandle;

/// Anything that can answer "what is the status of every device"
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait DeviceSource: Send + Sync + std::fmt::Debug {
    /// Fetch reports for every known device, keyed by device id
    async fn get_devices(&self) -> crate::Result<DeviceReports>;
}

/// Reports derived from the in-memory store.
///
/// Online devices were last seen now; offline ones were last seen when the
/// source was created.
#[derive(Debug)]
pub struct SimulatedDeviceSource {
    store: StoreHandle,
    started_at: String,
}

impl SimulatedDeviceSource {
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            started_at: format_rfc3339(current_epoch_ms()),
        }
    }
}

#[async_trait]
impl DeviceSource for SimulatedDeviceSource {
    async fn get_devices(&self) -> crate::Result<DeviceReports> {
        let now = format_rfc3339(current_epoch_ms());
        let store = self.store.read().await;

        Ok(store
            .devices()
            .iter()
            .map(|device| {
                let last_seen = if device.status {
                    now.clone()
                } else {
                    self.started_at.clone()
                };
                (
                    device.id.to_string(),
                    DeviceReport::for_device(device, last_seen),
                )
            })
            .collect())
    }
}

/// Reports fetched from an external device API
pub struct HttpDeviceSource {
    url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for HttpDeviceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDeviceSource")
            .field("url", &self.url)
            .finish()
    }
}

impl HttpDeviceSource {
    pub fn new(base_url: &str, http: Arc<dyn HttpClient>) -> Self {
        let url = format!("{}/api/devices", base_url.trim_end_matches('/'));
        tracing::debug!("Created HttpDeviceSource at {}", url);
        Self { url, http }
    }
}

#[async_trait]
impl DeviceSource for HttpDeviceSource {
    async fn get_devices(&self) -> crate::Result<DeviceReports> {
        let response = self.http.get(&self.url).await?;
        if response.status != 200 {
            return Err(crate::DeviceStatusError::Source(format!(
                "GET {} returned status {}",
                self.url, response.status
            )));
        }
        let reports: DeviceReports = serde_json::from_str(&response.body)?;
        tracing::debug!("Fetched {} device reports from {}", reports.len(), self.url);
        Ok(reports)
    }
}

/// Build the configured source
pub fn build_source(
    config: &SourceConfig,
    store: StoreHandle,
) -> crate::Result<Arc<dyn DeviceSource>> {
    let source: Arc<dyn DeviceSource> = match config {
        SourceConfig::Simulated => Arc::new(SimulatedDeviceSource::new(store)),
        SourceConfig::Http {
            base_url,
            timeout_seconds,
        } => {
            let http = ReqwestHttpClient::with_timeout(Duration::from_secs(*timeout_seconds))?;
            Arc::new(HttpDeviceSource::new(base_url, Arc::new(http)))
        }
    };
    tracing::debug!("Using '{}' device source", config.type_name());
    Ok(source)
}
