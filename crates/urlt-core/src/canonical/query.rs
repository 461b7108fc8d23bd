//! Query-string parsing and rendering for [`CanonicalPath`](super::CanonicalPath).

use crate::error::FormatError;

/// Ordered multi-valued query parameters, keyed by first-seen order.
pub(super) type QueryParams = Vec<(String, Vec<String>)>;

/// Parses a raw query string (`a=1&b=2&a=3`) into grouped parameters.
///
/// Grouping preserves first-seen key order; values append in encounter
/// order. A piece without `=` is rejected.
pub(super) fn parse_query(raw: &str) -> Result<QueryParams, FormatError> {
    let mut params = QueryParams::new();
    for piece in raw.split('&') {
        let (key, value) = piece.split_once('=').ok_or_else(|| FormatError::MalformedQuery {
            piece: piece.to_string(),
        })?;
        push_value(&mut params, key, value);
    }
    Ok(params)
}

/// Appends `value` under `key`, keeping first-seen key order.
pub(super) fn push_value(params: &mut QueryParams, key: &str, value: &str) {
    match params.iter_mut().find(|(k, _)| k == key) {
        Some((_, values)) => values.push(value.to_string()),
        None => params.push((key.to_string(), vec![value.to_string()])),
    }
}

/// Renders grouped parameters back to `key=value&…`. Repeated keys render as
/// repeated pairs, never merged into one comma-joined value.
pub(super) fn render_query(params: &QueryParams) -> String {
    let mut out = String::new();
    for (key, values) in params {
        for value in values {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_first_seen_key_order() {
        let q = parse_query("b=1&a=2&b=3").unwrap();
        assert_eq!(
            q,
            vec![
                ("b".to_string(), vec!["1".to_string(), "3".to_string()]),
                ("a".to_string(), vec!["2".to_string()]),
            ]
        );
    }

    #[test]
    fn repeated_keys_render_as_repeated_pairs() {
        let q = parse_query("b=1&a=2&b=3").unwrap();
        assert_eq!(render_query(&q), "b=1&b=3&a=2");
    }

    #[test]
    fn piece_without_equals_is_rejected() {
        let err = parse_query("a=1&flag").unwrap_err();
        assert!(err.to_string().contains("flag"));
    }

    #[test]
    fn empty_value_is_kept() {
        let q = parse_query("a=").unwrap();
        assert_eq!(render_query(&q), "a=");
    }
}
