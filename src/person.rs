use std::sync::LazyLock;

use regex::Regex;

use crate::casing::{capitalize, collapse_whitespace};
use crate::vocab::is_generational_suffix;

// ── Regex patterns ─────────────────────────────────────────────────
//
// Real data examples:
//   John (Johnny) Smith      → preferred name in parentheses
//   "Nick" John              → preferred name in quotes
//   Dr. Jane Smith           → honorific to keep
//   J. Robert Oppenheimer    → leading initial to skip
//   John Smith Jr.           → generational suffix to skip

// Contents of the first (...) span.
static RE_PAREN_CONTENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

// Contents of the first quoted span, straight or curly, single or double.
static RE_QUOTED_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\"'\u{201c}\u{201d}\u{2018}\u{2019}]([^\"'\u{201c}\u{201d}\u{2018}\u{2019}]+)[\"'\u{201c}\u{201d}\u{2018}\u{2019}]").unwrap());

// Leading Dr/Dr./Doctor honorific and the whitespace after it.
static RE_HONORIFIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:dr\.?|doctor)\s+").unwrap());

/// Extract a person's preferred first name from a raw "first name" field.
///
/// Total over all inputs, like [`crate::canonicalize_org_name`]. An input
/// that reduces to nothing returns `""` even when an honorific was seen; a
/// bare "Dr." is never produced.
pub fn extract_first_name(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let mut name = raw.trim().to_string();
    if name.is_empty() {
        return String::new();
    }

    // Preferred-name extraction: a parenthetical wins over a quoted span,
    // and only one of the two applies.
    if let Some(caps) = RE_PAREN_CONTENT.captures(&name) {
        name = caps[1].trim().to_string();
    } else if contains_quote(&name) {
        if let Some(caps) = RE_QUOTED_CONTENT.captures(&name) {
            name = caps[1].trim().to_string();
        }
    }

    let mut prefix = "";
    if let Some(m) = RE_HONORIFIC.find(&name) {
        prefix = "Dr. ";
        name = name[m.end()..].trim_start().to_string();
    }

    let name = filter_chars(&name);
    let name = collapse_whitespace(&name);
    if name.is_empty() {
        return String::new();
    }

    let words: Vec<&str> = name.split(' ').collect();
    let real_words: Vec<&str> = words
        .iter()
        .copied()
        .filter(|w| !is_initial(w) && !is_generational_suffix(w))
        .collect();
    // If everything looked like initials/suffixes, fall back to the raw list.
    let pool = if real_words.is_empty() { &words } else { &real_words };
    let Some(first) = pool.first() else {
        return String::new();
    };

    format!("{prefix}{}", recase_token(first))
}

fn contains_quote(s: &str) -> bool {
    s.chars()
        .any(|c| matches!(c, '"' | '\'' | '\u{201c}' | '\u{201d}' | '\u{2018}' | '\u{2019}'))
}

/// Character filter. Unlike the organization pipeline this one keeps any
/// Unicode letter, so "José" and "François" survive intact.
fn filter_chars(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphabetic()
                || c.is_whitespace()
                || matches!(c, '\'' | '\u{2019}' | '-' | '.')
            {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// A bare initial: one ASCII letter, optionally followed by a period.
fn is_initial(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(c), None, None) => c.is_ascii_alphabetic(),
        (Some(c), Some('.'), None) => c.is_ascii_alphabetic(),
        _ => false,
    }
}

/// Title-case one name token. Hyphenated parts are cased independently
/// ("mary-jane" → "Mary-Jane"); segments around apostrophes likewise
/// ("o'brien" → "O'Brien"), with the apostrophes passed through.
fn recase_token(token: &str) -> String {
    if token.contains('-') {
        return token
            .split('-')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join("-");
    }
    if token.contains(['\'', '\u{2019}']) {
        let mut out = String::with_capacity(token.len());
        let mut segment = String::new();
        for c in token.chars() {
            if matches!(c, '\'' | '\u{2019}') {
                out.push_str(&capitalize(&segment));
                segment.clear();
                out.push(c);
            } else {
                segment.push(c);
            }
        }
        out.push_str(&capitalize(&segment));
        return out;
    }
    capitalize(token)
}
