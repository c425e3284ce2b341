//! In-memory device store

use std::collections::HashSet;

use rand::Rng;

use crate::device::{sample_devices, Device};

/// Errors raised while building a store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Duplicate device id: {0}")]
    DuplicateId(u32),
}

/// Ordered list of devices, the source of truth for every list view.
///
/// Ids are unique. Entries are never added or removed after construction;
/// only `status` changes, through [`DeviceStore::refresh_status_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceStore {
    devices: Vec<Device>,
}

impl DeviceStore {
    pub fn new(devices: Vec<Device>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(devices.len());
        for device in &devices {
            if !seen.insert(device.id) {
                return Err(StoreError::DuplicateId(device.id));
            }
        }
        Ok(Self { devices })
    }

    /// Store holding [`sample_devices`]
    pub fn sample() -> Self {
        Self {
            devices: sample_devices(),
        }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn get(&self, id: u32) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    pub fn ids(&self) -> Vec<u32> {
        self.devices.iter().map(|d| d.id).collect()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn online_count(&self) -> usize {
        self.devices.iter().filter(|d| d.status).count()
    }

    /// Give every device an independent coin-flip status.
    ///
    /// Ids, names and order are left untouched.
    pub fn refresh_status_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for device in &mut self.devices {
            device.status = rng.random_bool(0.5);
        }
    }
}

impl Default for DeviceStore {
    fn default() -> Self {
        Self::sample()
    }
}
