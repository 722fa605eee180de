//! URL detection

use once_cell::sync::Lazy;
use regex::Regex;

/// Scheme prefixes recognized as URLs, anchored at the start.
/// `file:\` covers Windows-style file URIs.
static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:http://|https://|ftp://|file://|file:\\)").unwrap());

/// Return true if `resource` starts with an http, https, ftp or file scheme
///
/// Only the prefix is checked; the rest of the string is not validated.
pub fn is_url(resource: &str) -> bool {
    URL_PATTERN.is_match(resource)
}
