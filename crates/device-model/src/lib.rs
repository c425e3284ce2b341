//! Device model for the IoT device status dashboard
//!
//! Holds the device record, the in-memory store that backs every list view,
//! and the report shape served by the simulated device API. Used by both the
//! axum server and the Leptos frontend.

pub mod clock;
pub mod device;
pub mod report;
pub mod route;
pub mod store;

pub use clock::advance;
pub use device::{sample_devices, Device};
pub use report::{DeviceReport, DeviceReports};
pub use route::{detail_path, parse_device_id};
pub use store::{DeviceStore, StoreError};
