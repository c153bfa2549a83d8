//! SWIFT/BIC code format rules: pure logic, no database access.
//!
//! A code is 8 or 11 characters: 4 letters (institution) + 2 letters
//! (country) + 2 alphanumerics (location) + optional 3 alphanumerics
//! (branch). The first 8 characters form the group key that associates
//! a headquarters with its branches; the relation is structural, not a
//! stored foreign key.

use std::sync::LazyLock;

use regex::Regex;

/// Branch suffix reserved for a banking group's main entity.
pub const HEADQUARTER_SUFFIX: &str = "XXX";

/// Length of the shared code prefix used for grouping.
pub const GROUP_KEY_LEN: usize = 8;

/// Full code format. Length is checked separately so out-of-range input
/// gets its own violation message.
pub static SWIFT_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{4}[A-Z]{2}[A-Z0-9]{2}([A-Z0-9]{3})?$").unwrap());

/// Exactly two uppercase letters.
pub static COUNTRY_ISO2_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").unwrap());

/// Canonical form for storage and lookups: trimmed and uppercased.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// First [`GROUP_KEY_LEN`] characters of a well-formed, normalized code.
/// Recomputed on every write; never accepted as independent input.
///
/// Callers must validate the code first; this slices by byte index.
pub fn group_key(code: &str) -> String {
    code[..GROUP_KEY_LEN].to_string()
}

/// Whether a normalized code carries the reserved headquarters suffix.
pub fn has_headquarter_suffix(code: &str) -> bool {
    code.ends_with(HEADQUARTER_SUFFIX)
}
