// src/core/sanitize.rs

/// Characters that render as nothing but still break word matching.
pub const ZERO_WIDTH: &[char] = &['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}'];

/// No-break spaces that content editors paste in from word processors.
pub const NO_BREAK: &[char] = &['\u{00A0}', '\u{202F}'];

/// NBSP → ' ', zero-width characters dropped. Everything else untouched.
pub fn clean_invisible(s: &str) -> String {
    s.chars()
        .filter(|c| !ZERO_WIDTH.contains(c))
        .map(|c| if NO_BREAK.contains(&c) { ' ' } else { c })
        .collect()
}

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

/// Phone numbers as `tel:` wants them: digits and a leading '+', nothing else.
pub fn dial_string(phone: &str) -> String {
    let mut out = String::with_capacity(phone.len());
    for ch in phone.trim().chars() {
        if ch.is_ascii_digit() || (ch == '+' && out.is_empty()) {
            out.push(ch);
        }
    }
    out
}
