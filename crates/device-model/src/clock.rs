//! "Last updated" clock arithmetic shared by the server ticker and the frontend

/// Next displayed value for a clock sampled at `sampled` epoch ms.
///
/// Never moves backwards, so a wall clock stepping back leaves the display
/// where it was.
pub fn advance(current: u64, sampled: u64) -> u64 {
    current.max(sampled)
}
