use std::sync::LazyLock;

use regex::Regex;

use crate::casing::{
    capitalize, capitalize_keep_rest, collapse_whitespace, is_fully_lowercase, is_fully_uppercase,
};
use crate::vocab::{is_comma_suffix, is_known_acronym, is_lowercase_connector, legal_suffix_len};

// ── Regex patterns ─────────────────────────────────────────────────
//
// Real data examples:
//   Acme Corp (formerly XYZ)         → parenthetical aside
//   Acme Holdings LLC dba Acme Coffee → trade-name clause
//   Legal Name LLC d/b/a Cool Brand
//   Widget Co trading as Widgets R Us

// Any non-nested (...) span plus the whitespace immediately before it.
static RE_PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)").unwrap());

// DBA / d.b.a. / d/b/a / trading as / t/a, surrounded by whitespace.
static RE_TRADE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+(?:d\.?b\.?a\.?|d/b/a|trading\s+as|t/a)\s+").unwrap()
});

// Leading article, stripped once.
static RE_LEADING_THE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^the\s+").unwrap());

/// Canonicalize an organization name for display and deduplication.
///
/// Total over all inputs: `None` and unparseable values come back as `""`,
/// never an error. Stages run in fixed order; see the stage helpers below.
pub fn canonicalize_org_name(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let name = raw.trim();
    if name.is_empty() {
        return String::new();
    }

    let name = RE_PARENTHETICAL.replace_all(name, "");
    let name = keep_legal_name(&name);
    let name = collapse_comma_suffix(name);
    let name = strip_legal_suffixes(&name);
    let name = RE_LEADING_THE.replace(&name, "").into_owned();
    let name = filter_chars(&name);
    let name = name
        .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, '&' | '-' | ',' | '.'));
    let name = collapse_whitespace(name);
    if name.is_empty() {
        return String::new();
    }
    let name = name.trim_end_matches('.');

    recase(name)
}

/// Trade-name split: "Acme Holdings LLC dba Acme Coffee" keeps the legal
/// name before the first separator.
fn keep_legal_name(name: &str) -> &str {
    RE_TRADE_NAME.splitn(name, 2).next().unwrap_or("").trim_end()
}

/// "Name, Inc." collapse: drop everything from the first comma on, but only
/// when the segment right after it is one of the twelve comma-style legal
/// forms. "Smith, Johnson & Associates" stays whole.
fn collapse_comma_suffix(name: &str) -> String {
    if let Some((before, after)) = name.split_once(',') {
        let second = after.split(',').next().unwrap_or("");
        if is_comma_suffix(second) {
            return before.trim().to_string();
        }
    }
    name.to_string()
}

/// Remove every whole-word legal-suffix occurrence, anywhere in the name,
/// along with an immediately preceding "and"/"&". Repeated removal: "Acme
/// Holdings International LLC" loses all three trailing tokens.
fn strip_legal_suffixes(name: &str) -> String {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        match legal_suffix_len(&tokens[i..]) {
            Some(span) => {
                if let Some(prev) = kept.last() {
                    if prev.eq_ignore_ascii_case("and") || *prev == "&" {
                        kept.pop();
                    }
                }
                i += span;
            }
            None => {
                kept.push(tokens[i]);
                i += 1;
            }
        }
    }
    kept.join(" ")
}

/// Character filter. ASCII-oriented on purpose: the person pipeline accepts
/// any Unicode letter, this one does not, and the two must not be unified.
fn filter_chars(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric()
                || c.is_whitespace()
                || matches!(c, '&' | '-' | '\'' | '.')
            {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Smart title-casing. Token precedence, highest first: known acronym,
/// short &-token (AT&T, H&M), all-caps-input reflow with connector words,
/// preserved mixed case (McDonald's, iPhone), short all-caps kept as a
/// likely acronym, long all-caps reflowed, plain word capitalized.
fn recase(name: &str) -> String {
    let all_caps_input = is_fully_uppercase(name);

    let recased: Vec<String> = name
        .split(' ')
        .enumerate()
        .map(|(i, word)| {
            let upper = word.to_uppercase();
            if is_known_acronym(&upper) {
                return upper;
            }
            if word.contains('&') && word.chars().count() <= 5 {
                return upper;
            }
            if all_caps_input {
                let lower = word.to_lowercase();
                if i > 0 && is_lowercase_connector(&lower) {
                    return lower;
                }
                return capitalize(word);
            }
            if !is_fully_uppercase(word) && !is_fully_lowercase(word) {
                return word.to_string();
            }
            if is_fully_uppercase(word) && word.chars().count() <= 4 {
                return word.to_string();
            }
            if is_fully_uppercase(word) {
                return capitalize(word);
            }
            capitalize_keep_rest(word)
        })
        .collect();

    recased.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_suffix_removal() {
        assert_eq!(canonicalize_org_name(Some("Acme Inc.")), "Acme");
        assert_eq!(canonicalize_org_name(Some("Acme Corp, Inc.")), "Acme");
        assert_eq!(canonicalize_org_name(Some("Acme Corporation")), "Acme");
        assert_eq!(canonicalize_org_name(Some("Acme LLC")), "Acme");
        assert_eq!(canonicalize_org_name(Some("Acme Ltd.")), "Acme");
        assert_eq!(canonicalize_org_name(Some("Acme Limited")), "Acme");
        assert_eq!(canonicalize_org_name(Some("Acme Holdings")), "Acme");
        assert_eq!(canonicalize_org_name(Some("Acme Group")), "Acme");
    }

    #[test]
    fn test_international_suffixes() {
        assert_eq!(canonicalize_org_name(Some("Acme GmbH")), "Acme");
        assert_eq!(canonicalize_org_name(Some("Acme S.A.")), "Acme");
        assert_eq!(canonicalize_org_name(Some("Acme B.V.")), "Acme");
        assert_eq!(canonicalize_org_name(Some("Acme Pte. Ltd.")), "Acme");
        assert_eq!(canonicalize_org_name(Some("Acme Pty Ltd")), "Acme");
        assert_eq!(canonicalize_org_name(Some("Acme Pvt. Ltd.")), "Acme");
        assert_eq!(canonicalize_org_name(Some("Acme AB")), "Acme");
        assert_eq!(canonicalize_org_name(Some("Acme K.K.")), "Acme");
    }

    #[test]
    fn test_repeated_removal() {
        assert_eq!(
            canonicalize_org_name(Some("Global Holdings International LLC")),
            "Global"
        );
        assert_eq!(canonicalize_org_name(Some("Acme, LLC.")), "Acme");
    }

    #[test]
    fn test_connector_before_suffix() {
        assert_eq!(canonicalize_org_name(Some("Acme and Company")), "Acme");
        assert_eq!(canonicalize_org_name(Some("Acme & Co.")), "Acme");
        // an ampersand joining two real words survives
        assert_eq!(
            canonicalize_org_name(Some("Johnson & Johnson")),
            "Johnson & Johnson"
        );
        assert_eq!(canonicalize_org_name(Some("Ben & Jerry's")), "Ben & Jerry's");
        assert_eq!(canonicalize_org_name(Some("Ernst & Young")), "Ernst & Young");
    }

    #[test]
    fn test_parentheticals() {
        assert_eq!(canonicalize_org_name(Some("Acme Corp (formerly XYZ)")), "Acme");
        assert_eq!(canonicalize_org_name(Some("Acme Inc. (US)")), "Acme");
    }

    #[test]
    fn test_trade_name_precedence() {
        assert_eq!(
            canonicalize_org_name(Some("Legal Name LLC DBA Cool Brand")),
            "Legal Name"
        );
        assert_eq!(canonicalize_org_name(Some("Acme Corp d/b/a Widget Co")), "Acme");
        assert_eq!(
            canonicalize_org_name(Some("Acme Holdings LLC dba Acme Coffee")),
            "Acme"
        );
        assert_eq!(
            canonicalize_org_name(Some("Widgets Ltd trading as Widget World")),
            "Widgets"
        );
    }

    #[test]
    fn test_comma_suffix_subset_only() {
        assert_eq!(canonicalize_org_name(Some("Acme, Inc.")), "Acme");
        // "Boston" is no legal form, so the comma path leaves it alone;
        // stage 7 turns the comma itself into a space
        assert_eq!(canonicalize_org_name(Some("Acme Inc., Boston")), "Acme Boston");
        assert_eq!(
            canonicalize_org_name(Some("Smith, Johnson & Associates")),
            "Smith Johnson & Associates"
        );
    }

    #[test]
    fn test_leading_article() {
        assert_eq!(canonicalize_org_name(Some("The Coca-Cola Company")), "Coca-Cola");
        assert_eq!(canonicalize_org_name(Some("The Home Depot")), "Home Depot");
        assert_eq!(canonicalize_org_name(Some("THE BOEING COMPANY")), "Boeing");
        // only a leading article is stripped
        assert_eq!(canonicalize_org_name(Some("Theodore Designs")), "Theodore Designs");
    }

    #[test]
    fn test_all_caps_reflow() {
        assert_eq!(canonicalize_org_name(Some("ACME CORPORATION")), "Acme");
        assert_eq!(canonicalize_org_name(Some("IBM CORPORATION")), "IBM");
        assert_eq!(
            canonicalize_org_name(Some("JOHNSON & JOHNSON")),
            "Johnson & Johnson"
        );
        assert_eq!(canonicalize_org_name(Some("BANK OF AMERICA")), "Bank of America");
    }

    #[test]
    fn test_acronyms_preserved() {
        assert_eq!(canonicalize_org_name(Some("BMW AG")), "BMW");
        assert_eq!(canonicalize_org_name(Some("3M Company")), "3M");
        assert_eq!(canonicalize_org_name(Some("at&t inc.")), "AT&T");
        assert_eq!(canonicalize_org_name(Some("AT&T Inc.")), "AT&T");
        // short all-caps token outside the known list is kept verbatim
        assert_eq!(canonicalize_org_name(Some("NASA Contractors")), "NASA Contractors");
    }

    #[test]
    fn test_mixed_case_preserved() {
        assert_eq!(
            canonicalize_org_name(Some("McDonald's Corporation")),
            "McDonald's"
        );
        assert_eq!(canonicalize_org_name(Some("iPhone Repair")), "iPhone Repair");
    }

    #[test]
    fn test_character_filter_and_trailing_junk() {
        assert_eq!(canonicalize_org_name(Some("Acme,")), "Acme");
        assert_eq!(canonicalize_org_name(Some("Acme***")), "Acme");
        assert_eq!(canonicalize_org_name(Some("Acme - ")), "Acme");
        assert_eq!(canonicalize_org_name(Some("Acme! @Widgets#")), "Acme Widgets");
    }

    #[test]
    fn test_totality() {
        assert_eq!(canonicalize_org_name(None), "");
        assert_eq!(canonicalize_org_name(Some("")), "");
        assert_eq!(canonicalize_org_name(Some("   ")), "");
        assert_eq!(canonicalize_org_name(Some("LLC")), "");
        assert_eq!(canonicalize_org_name(Some("(formerly XYZ)")), "");
        assert_eq!(canonicalize_org_name(Some("🚀🚀🚀")), "");
    }

    #[test]
    fn test_idempotent() {
        for raw in [
            "Acme Corp, Inc.",
            "The Coca-Cola Company",
            "JOHNSON & JOHNSON",
            "at&t inc.",
            "McDonald's Corporation",
            "Global Holdings International LLC",
            "Acme Inc., Boston",
            "",
        ] {
            let once = canonicalize_org_name(Some(raw));
            assert_eq!(canonicalize_org_name(Some(&once)), once, "input {raw:?}");
        }
    }
}
