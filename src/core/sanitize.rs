// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

static PAREN_GROUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\([^)]*\)").unwrap());

/// Strip leading/trailing whitespace the way browsers trim text content
/// (Unicode whitespace plus the BOM).
pub fn trim_text(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Short single-line preview of a text blob for log lines.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat = normalize_ws(s);
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut cut: String = flat.chars().take(max_chars).collect();
    cut.push('…');
    cut
}

/// "Operating Systems (02)" → "Operating Systems".
/// Only applies when the name ends with ')'; then every "(…)" group goes,
/// together with the whitespace before it.
pub fn strip_course_suffix(course: &str) -> String {
    if course.ends_with(')') {
        PAREN_GROUP.replace_all(course, "").into_owned()
    } else {
        s!(course)
    }
}

/// SQL string literal: single quotes doubled, wrapped in quotes.
pub fn sql_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
