pub mod device_detail;
pub mod device_list;
pub mod device_reports;
pub mod status_badge;
