//! Filename slugs

use regex::Regex;
use std::sync::OnceLock;

/// Convert text to kebab case for use as a filename stem
///
/// Whitespace, underscores and hyphens collapse to a single `-`; anything
/// outside `[a-z0-9-]` is dropped. The result may be empty.
pub fn to_kebab_case(text: &str) -> String {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    static DISALLOWED: OnceLock<Regex> = OnceLock::new();
    let separators =
        SEPARATORS.get_or_init(|| Regex::new(r"[\s_-]+").expect("hardcoded regex is valid"));
    let disallowed =
        DISALLOWED.get_or_init(|| Regex::new(r"[^a-z0-9-]").expect("hardcoded regex is valid"));

    let lowered = text.trim().to_lowercase();
    let dashed = separators.replace_all(&lowered, "-");
    disallowed.replace_all(&dashed, "").into_owned()
}
