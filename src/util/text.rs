//! Name normalization for identity claims and nicknames.

/// Uppercases the first letter of every word, leaving the rest untouched.
///
/// A word starts after any character that is not alphanumeric or `_`, so
/// `"mary-jane o'neil"` becomes `"Mary-Jane O'Neil"`.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_word_start = true;

    for c in value.chars() {
        if at_word_start {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }

    result
}

/// First character of `value` after leading whitespace.
pub fn first_char(value: &str) -> Option<char> {
    value.trim_start().chars().next()
}

/// Last whitespace-separated word of `value`.
pub fn last_word(value: &str) -> Option<&str> {
    value.split_whitespace().last()
}
