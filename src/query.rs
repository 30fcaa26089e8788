//! Query-string adapter for sharing a scenario as a link.
//!
//! Overrides are only applied when the query carries a `vsl` parameter;
//! a link without it is treated as a plain page visit.

use crate::engine::Calculator;
use crate::inputs::{InputKey, InputSet};
use strum::IntoEnumIterator;
use tracing::info;

/// Parameter whose presence marks a query as carrying overrides.
pub const MARKER_PARAM: &str = "vsl";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// No overrides present; the calculator was not touched.
    Untouched,
    /// Overrides were applied; the state no longer matches a named preset.
    Custom { applied: usize },
}

/// Splits `a=1&b=2` (optionally prefixed by a URL and `?`, with an optional
/// `#fragment`) into key/value pairs. Keys without `=` get an empty value.
pub fn parse_query(input: &str) -> Vec<(String, String)> {
    let query = match input.split_once('?') {
        Some((_, q)) => q,
        None => input,
    };
    let query = query.split('#').next().unwrap_or_default();

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (decode(k), decode(v)),
            None => (decode(pair), String::new()),
        })
        .collect()
}

/// Form-style decoding: `+` is a space and every valid `%XX` escape becomes its
/// byte. Malformed escapes are kept as written.
fn decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let escaped = match bytes.get(i + 1..i + 3) {
            Some(&[hi, lo]) if bytes[i] == b'%' => hex_pair(hi, lo),
            _ => None,
        };
        match (escaped, bytes[i]) {
            (Some(b), _) => {
                out.push(b);
                i += 3;
            }
            (None, b'+') => {
                out.push(b' ');
                i += 1;
            }
            (None, b) => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}

/// Applies every recognised input found in the query, if it carries the marker.
pub fn apply_query(calc: &mut Calculator, query: &str) -> QueryOutcome {
    let params = parse_query(query);
    if !params.iter().any(|(k, _)| k == MARKER_PARAM) {
        return QueryOutcome::Untouched;
    }

    let mut applied = 0;
    for key in InputKey::iter() {
        let name: &'static str = key.into();
        // A repeated key keeps its first value.
        if let Some((_, raw)) = params.iter().find(|(k, _)| k == name) {
            if calc.update_input(name, raw) {
                applied += 1;
            }
        }
    }
    info!("Applied {} override(s) from query", applied);
    QueryOutcome::Custom { applied }
}

/// Serialises every input, in key order, as a query string (no leading `?`).
pub fn share_query(inputs: &InputSet) -> String {
    InputKey::iter()
        .map(|key| format!("{}={}", key, inputs.get(key)))
        .collect::<Vec<_>>()
        .join("&")
}
