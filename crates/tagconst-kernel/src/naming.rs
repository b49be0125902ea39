//! Constant names and value paths.
//!
//! Both are derived from the same segment slice. Names are title-cased per
//! segment, hyphens become underscores, and segments are joined with `_`.
//! Values are the raw segments joined with `.`.

use std::fmt::Write as _;

/// Build a constant name from path segments.
///
/// ```
/// use tagconst_kernel::format_constant_name;
///
/// assert_eq!(format_constant_name(&["errors", "not-found"]), "Errors_Not_Found");
/// assert_eq!(format_constant_name(&["messages", "subMessages"]), "Messages_SubMessages");
/// ```
pub fn format_constant_name<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|segment| title_case(segment.as_ref()).replace('-', "_"))
        .collect::<Vec<_>>()
        .join("_")
}

/// Build a dotted value path from path segments. Segments are not altered.
pub fn format_js_path<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|segment| segment.as_ref())
        .collect::<Vec<&str>>()
        .join(".")
}

/// Upper-case the first letter of every word, leaving other letters alone.
///
/// A word starts after any separator. ASCII characters other than letters,
/// digits and `_` are separators; beyond ASCII only whitespace is.
pub fn title_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut prev = ' ';
    for c in segment.chars() {
        if is_word_separator(prev) {
            out.push(title_char(c));
        } else {
            out.push(c);
        }
        prev = c;
    }
    out
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphabetic() || c.is_numeric() {
        return false;
    }
    c.is_whitespace()
}

fn title_char(c: char) -> char {
    let mut mapped = unicode_case_mapping::to_titlecase(c)
        .into_iter()
        .filter(|&code| code != 0)
        .filter_map(char::from_u32);
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        // Unmapped, or a multi-char expansion (e.g. `ß` -> `Ss`).
        _ => c,
    }
}

/// Render `value` as a Go interpreted string literal, quotes included.
pub fn quote_go_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
