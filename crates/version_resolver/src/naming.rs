// crates/version_resolver/src/naming.rs

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Stand-in text for a missing name or version.
pub const UNDEFINED: &str = "undefined";

const NAME_SUFFIX: &str = "_VERSION";

// Anything but an ASCII word character, except line terminators, which are left alone.
static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\n\r\x{2028}\x{2029}]").unwrap());

/// Derives the constant name for a package name.
///
/// Non-word characters become `_`, the result is upper-cased and suffixed
/// with `_VERSION`, so `"my-app"` gives `"MY_APP_VERSION"`. A character
/// outside the Basic Multilingual Plane counts as two characters and becomes
/// `"__"`. A missing name never fails and gives `"undefined_VERSION"`.
pub fn derive_print_name(name: Option<&str>) -> String {
    match name {
        Some(name) => {
            let sanitized = NON_WORD_RE.replace_all(name, |caps: &Captures| {
                let units: usize = caps[0].chars().map(char::len_utf16).sum();
                "_".repeat(units)
            });
            format!("{}{}", sanitized.to_uppercase(), NAME_SUFFIX)
        }
        None => format!("{}{}", UNDEFINED, NAME_SUFFIX),
    }
}

/// Joins the constant name and version into the human-readable info line.
pub fn compose_info(print_name: &str, print_version: Option<&str>) -> String {
    format!("{}: {}", print_name, print_version.unwrap_or(UNDEFINED))
}
