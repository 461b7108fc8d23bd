//! Placeholder expression grammar.
//!
//! Two syntaxes resolve against the same namespaces: `{name}` /
//! `{name:pattern}` and the shorthand `:name`. The inline pattern may itself
//! contain balanced `{…}` (regex quantifiers like `{8,12}`), so the closing
//! `}` is found with an explicit depth counter, not a flat scan.

/// A parsed placeholder: identifier plus optional inline pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderExpression<'a> {
    pub name: &'a str,
    pub pattern: Option<&'a str>,
}

impl<'a> PlaceholderExpression<'a> {
    /// Parses the text between `{` and `}`. The first `:` separates name
    /// from pattern; an empty pattern counts as no pattern. Returns `None`
    /// when the name is not a valid identifier (such text is copied through
    /// literally by the rewriter).
    pub fn parse_braced(inner: &'a str) -> Option<Self> {
        let (name, pattern) = match inner.split_once(':') {
            Some((n, p)) if !p.is_empty() => (n, Some(p)),
            Some((n, _)) => (n, None),
            None => (inner, None),
        };
        if name.is_empty() || !name.bytes().all(is_ident_byte) {
            return None;
        }
        Some(PlaceholderExpression { name, pattern })
    }
}

/// Identifier charset: letters, digits, `_`, `.`, `-`.
pub fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-')
}

/// Given `input` with an opening `{` at byte `open`, returns the byte index
/// of the matching `}`: the first `}` seen at brace depth zero. `None` when
/// the expression never closes.
pub fn find_closing_brace(input: &str, open: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    debug_assert_eq!(bytes[open], b'{');
    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate().skip(open + 1) {
        match b {
            b'{' => depth += 1,
            b'}' if depth == 0 => return Some(i),
            b'}' => depth -= 1,
            _ => {}
        }
    }
    None
}
