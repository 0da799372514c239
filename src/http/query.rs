//! URL query string helpers
//!
//! Minimal single-parameter extraction: `+` is treated as space and percent
//! sequences are decoded.

use std::borrow::Cow;

/// First value of the named parameter, decoded.
///
/// Pairs without `=` and values that do not decode to UTF-8 are skipped.
pub fn first_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key != name {
            return None;
        }
        urlencoding::decode(&value.replace('+', " "))
            .ok()
            .map(Cow::into_owned)
    })
}
