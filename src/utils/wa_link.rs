//! Building and parsing `wa.me` chat links.

use url::Url;

/// Prefix of every generated link.
pub const WA_ME_BASE: &str = "https://wa.me/";

const WA_ME_HOST: &str = "wa.me";

/// Builds `https://wa.me/<dial digits><national digits>`.
///
/// Both parts are digits only, so no URL encoding is applied.
pub fn build_link(dial_code: &str, normalized_number: &str) -> String {
    format!("{WA_ME_BASE}{}{normalized_number}", dial_code.trim_start_matches('+'))
}

/// Extracts the full international digit string from a `wa.me` link.
///
/// Returns `None` for other hosts, non-HTTPS schemes, extra path segments, or
/// a path that is not all digits. Query strings (e.g. `?text=`) are ignored.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_link("https://wa.me/201012345678").as_deref(), Some("201012345678"));
/// assert_eq!(parse_link("https://example.com/201012345678"), None);
/// ```
pub fn parse_link(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;

    if url.scheme() != "https" || url.host_str() != Some(WA_ME_HOST) {
        return None;
    }

    let mut segments = url.path_segments()?;
    let number = segments.next()?;
    if segments.next().is_some_and(|s| !s.is_empty()) {
        return None;
    }

    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    Some(number.to_string())
}
