//! Footer line classification.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static FOOTER_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9_-]*): ").unwrap());

/// Returns the key of a `Key: value` footer line, case preserved.
///
/// Lines without that shape still belong to the footer but carry no key.
pub fn footer_key(line: &str) -> Option<&str> {
    FOOTER_KEY
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
