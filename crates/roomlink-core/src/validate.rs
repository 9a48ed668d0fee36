//! Input validation helpers.

use std::sync::OnceLock;

use regex::Regex;

static UUID_RE: OnceLock<Regex> = OnceLock::new();

/// Returns true iff `value` is a canonical 8-4-4-4-12 hyphenated
/// hexadecimal UUID, case-insensitive.
///
/// ASCII hex only; Unicode digit characters do not count.
pub fn is_valid_uuid(value: &str) -> bool {
    let re = UUID_RE.get_or_init(|| {
        Regex::new(r"^[0-9a-fA-F]{8}-([0-9a-fA-F]{4}-){3}[0-9a-fA-F]{12}$").unwrap()
    });
    re.is_match(value)
}
