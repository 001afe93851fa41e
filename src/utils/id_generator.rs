//! History entry id generation.
//!
//! Ids are the creation time in epoch milliseconds followed by a short random
//! suffix, so two links generated within the same millisecond still get
//! distinct ids while sorting roughly by time.

use base64::Engine as _;

/// Random bytes appended to the timestamp (4 base64 characters).
const SUFFIX_BYTES: usize = 3;

/// Generates a unique entry id for an entry created at `created_at` (epoch millis).
///
/// Falls back to the bare timestamp if the system random source fails.
///
/// # Examples
///
/// ```ignore
/// let id = generate_entry_id(1718000000000);
/// assert!(id.starts_with("1718000000000-"));
/// assert_eq!(id.len(), 13 + 1 + 4);
/// ```
pub fn generate_entry_id(created_at: i64) -> String {
    let mut buffer = [0u8; SUFFIX_BYTES];

    match getrandom::fill(&mut buffer) {
        Ok(()) => format!(
            "{created_at}-{}",
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
        ),
        Err(e) => {
            tracing::warn!("random source unavailable, using timestamp id: {}", e);
            created_at.to_string()
        }
    }
}
