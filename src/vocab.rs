use std::collections::HashSet;
use std::sync::LazyLock;

/// Legal-entity suffix tokens, normalized: lowercase, no trailing period,
/// internal periods kept ("l.l.c" and "llc" are separate entries).
/// A token in running text matches case-insensitively with optional
/// trailing punctuation ("Ltd.", "LTD," → "ltd").
pub const LEGAL_SUFFIXES: &[&str] = &[
    // English
    "inc", "incorporated", "corp", "corporation", "company", "co", "llc", "l.l.c", "llp",
    "l.l.p", "lp", "l.p", "ltd", "limited", "plc", "p.l.c", "holding", "holdings", "enterprise",
    "enterprises", "group", "intl", "international",
    // German
    "gmbh", "g.m.b.h", "ag", "a.g", "kg", "k.g", "ohg", "ug",
    // French
    "sarl", "s.a.r.l", "sas", "s.a.s", "sa", "s.a", "snc", "sci",
    // Spanish / Portuguese
    "s.l", "sl", "ltda", "cia",
    // Italian
    "spa", "s.p.a", "srl", "s.r.l",
    // Dutch / Belgian
    "bv", "b.v", "nv", "n.v", "bvba", "cvba",
    // Nordic
    "ab", "a.b", "as", "a.s", "oy", "oyj", "aps",
    // Czech / Slovak
    "s.r.o", "sro",
    // Japanese (romanized)
    "kk", "k.k", "gk", "g.k",
    // Australian
    "pty", "proprietary",
    // Indian
    "pvt", "private",
    // Other professional forms
    "psc", "pc", "pllc", "professional",
];

/// Multi-token legal suffixes ("Acme Pte. Ltd."). Each entry is a sequence of
/// normalized tokens. Ordered by length descending so the longest phrase
/// wins at any position.
pub const LEGAL_SUFFIX_PHRASES: &[&[&str]] = &[
    &["spol", "s", "r", "o"],
    &["spol", "s", "r.o"],
    &["kabushiki", "kaisha"],
    &["pte", "ltd"],
    &["pty", "ltd"],
    &["pvt", "ltd"],
];

/// The suffixes recognized in "Name, Inc." comma style. Deliberately a strict
/// subset of [`LEGAL_SUFFIXES`]: "Acme, GmbH" keeps its comma segment and is
/// cleaned by whole-word removal instead.
pub const COMMA_SUFFIXES: &[&str] = &[
    "inc", "incorporated", "corp", "corporation", "llc", "ltd", "limited", "gmbh", "plc", "sa",
    "bv", "ag",
];

/// Acronyms that stay fully upper-case in recased output.
pub const KNOWN_ACRONYMS: &[&str] = &[
    "IBM", "BMW", "SAP", "AWS", "USA", "UK", "AI", "IT", "HR", "CEO", "CFO", "CTO", "VP", "3M",
];

/// Short words kept lower-case in title-cased output, except as first token.
pub const LOWERCASE_CONNECTORS: &[&str] = &[
    "and", "or", "the", "a", "an", "of", "for", "to", "in", "on", "at", "by",
];

/// Person-name generational suffixes, matched with or without a trailing
/// period ("Jr", "Jr.", "III", "iii.").
pub const GENERATIONAL_SUFFIXES: &[&str] = &["jr", "sr", "ii", "iii", "iv", "v"];

static LEGAL_SUFFIX_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| LEGAL_SUFFIXES.iter().copied().collect());

static KNOWN_ACRONYM_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| KNOWN_ACRONYMS.iter().copied().collect());

static LOWERCASE_CONNECTOR_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| LOWERCASE_CONNECTORS.iter().copied().collect());

/// Normalize a whitespace token for vocabulary lookup: lowercase, with any
/// trailing non-alphanumeric run ("Inc.", "Inc.,", "Co-") stripped. Internal
/// punctuation survives, so "L.L.C." → "l.l.c".
pub fn normalize_token(token: &str) -> String {
    token
        .to_lowercase()
        .trim_end_matches(|c: char| !c.is_alphanumeric())
        .to_string()
}

/// If the token sequence starts with a legal suffix, return how many tokens
/// it spans. Phrases are tried first (longest match), then single tokens.
pub fn legal_suffix_len(tokens: &[&str]) -> Option<usize> {
    for phrase in LEGAL_SUFFIX_PHRASES {
        if phrase.len() <= tokens.len()
            && phrase
                .iter()
                .zip(tokens)
                .all(|(want, tok)| normalize_token(tok) == *want)
        {
            return Some(phrase.len());
        }
    }
    match tokens.first() {
        Some(tok) if LEGAL_SUFFIX_SET.contains(normalize_token(tok).as_str()) => Some(1),
        _ => None,
    }
}

/// "Name, Inc." style check: does a trimmed post-comma segment name a legal
/// form? At most one trailing period is ignored ("Inc." yes, "Inc.." no).
pub fn is_comma_suffix(segment: &str) -> bool {
    let lower = segment.trim().to_lowercase();
    let bare = lower.strip_suffix('.').unwrap_or(&lower);
    COMMA_SUFFIXES.contains(&bare)
}

pub fn is_known_acronym(upper: &str) -> bool {
    KNOWN_ACRONYM_SET.contains(upper)
}

pub fn is_lowercase_connector(lower: &str) -> bool {
    LOWERCASE_CONNECTOR_SET.contains(lower)
}

/// Generational suffix test for person-name tokens ("Jr", "Sr.", "III").
pub fn is_generational_suffix(token: &str) -> bool {
    let lower = token.to_lowercase();
    let bare = lower.trim_end_matches('.');
    GENERATIONAL_SUFFIXES.contains(&bare)
}
