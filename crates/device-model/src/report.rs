//! Device reports as served by the simulated device API

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::device::Device;

pub const STATUS_ONLINE: &str = "online";
pub const STATUS_OFFLINE: &str = "offline";

/// What the device API knows about one device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceReport {
    pub status: String,
    pub last_seen: String,
}

impl DeviceReport {
    pub fn for_device(device: &Device, last_seen: impl Into<String>) -> Self {
        let status = if device.status {
            STATUS_ONLINE
        } else {
            STATUS_OFFLINE
        };
        Self {
            status: status.to_string(),
            last_seen: last_seen.into(),
        }
    }

    pub fn is_online(&self) -> bool {
        self.status == STATUS_ONLINE
    }
}

/// Device id (as a string key) to report, ordered by key
pub type DeviceReports = BTreeMap<String, DeviceReport>;
