//! Cached device reports for the status panel

use std::sync::Arc;

use device_model::DeviceReports;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::source::DeviceSource;

/// Last successfully fetched reports, starting empty.
#[derive(Debug, Clone, Default)]
pub struct ReportCache {
    reports: Arc<RwLock<DeviceReports>>,
}

impl ReportCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> DeviceReports {
        self.reports.read().await.clone()
    }

    /// Fetch fresh reports unless `cancel` fires first.
    ///
    /// A failed or cancelled fetch leaves the cache untouched and returns the
    /// previous reports. Errors are logged, never returned.
    pub async fn load(
        &self,
        source: &dyn DeviceSource,
        cancel: &CancellationToken,
    ) -> DeviceReports {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Device report fetch cancelled");
                self.snapshot().await
            }
            result = source.get_devices() => match result {
                Ok(reports) => {
                    tracing::debug!("Loaded {} device reports", reports.len());
                    *self.reports.write().await = reports.clone();
                    reports
                }
                Err(e) => {
                    tracing::error!("Error fetching device status: {}", e);
                    self.snapshot().await
                }
            },
        }
    }
}
