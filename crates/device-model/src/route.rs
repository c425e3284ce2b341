//! Detail route helpers

/// Path of a device's detail view
pub fn detail_path(id: u32) -> String {
    format!("/device/{}", id)
}

/// Parse the `:id` segment of a detail route.
///
/// Returns `None` for anything that isn't a plain decimal `u32`.
pub fn parse_device_id(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
