//! Free-form code input parsing — tokenize, validate, stable dedup.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::CodeNumber;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,\s;]+").unwrap());

/// Parse raw user text into an ordered, deduplicated list of code numbers.
///
/// Tokens are split on any run of commas, whitespace or semicolons. A single
/// leading `P`/`p` is stripped; tokens that are not purely decimal after
/// that, or whose value falls outside 1..=999, are dropped silently.
/// Duplicates keep their first-occurrence position.
///
/// An empty result is a valid outcome, not an error — the caller decides
/// how to surface "no codes recognized" to the user.
pub fn parse_codes(text: &str) -> Vec<CodeNumber> {
    let mut seen = HashSet::new();
    let mut codes = Vec::new();

    for token in SEPARATORS.split(text.trim()) {
        if token.is_empty() {
            continue;
        }
        let digits = token
            .strip_prefix('P')
            .or_else(|| token.strip_prefix('p'))
            .unwrap_or(token);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            tracing::debug!(token, "dropping non-numeric token");
            continue;
        }
        let Ok(value) = digits.parse::<u16>() else {
            tracing::debug!(token, "dropping oversized token");
            continue;
        };
        let Some(code) = CodeNumber::new(value) else {
            tracing::debug!(value, "dropping out-of-range code");
            continue;
        };
        if seen.insert(code) {
            codes.push(code);
        }
    }

    codes
}
