//! Device record

use serde::{Deserialize, Serialize};

/// A single simulated IoT device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: u32,
    pub name: String,
    /// `true` when the device is online
    pub status: bool,
}

impl Device {
    pub fn new(id: u32, name: impl Into<String>, status: bool) -> Self {
        Self {
            id,
            name: name.into(),
            status,
        }
    }

    /// Human-readable status label
    pub fn status_label(&self) -> &'static str {
        if self.status {
            "Online"
        } else {
            "Offline"
        }
    }
}

/// The sample set the dashboard starts with when nothing else is configured
pub fn sample_devices() -> Vec<Device> {
    (1..=5)
        .map(|id| Device::new(id, format!("Device {}", id), id % 2 == 1))
        .collect()
}
