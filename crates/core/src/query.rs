//! Query normalization and outbound path construction.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left unescaped by URI-component encoding: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Trim the raw input. Returns `None` for empty or whitespace-only text.
pub fn normalize(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Percent-encode `value` as a single URI component (UTF-8).
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Build `{endpoint}?{param}={encoded query}`.
pub fn search_path(endpoint: &str, param: &str, query: &str) -> String {
    format!("{endpoint}?{}={}", encode_component(param), encode_component(query))
}
