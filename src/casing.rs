/// First character upper-cased, the rest lower-cased ("bOEING" → "Boeing").
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// First character upper-cased, the rest untouched ("iphone" → "Iphone",
/// but "nVidia" → "NVidia").
pub fn capitalize_keep_rest(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// True when the string equals its own upper-casing. A string with no
/// letters at all ("3", "&") counts as upper-case, matching how all-caps
/// input is detected.
pub fn is_fully_uppercase(s: &str) -> bool {
    s == s.to_uppercase()
}

pub fn is_fully_lowercase(s: &str) -> bool {
    s == s.to_lowercase()
}

/// Collapse internal whitespace runs to single spaces and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
