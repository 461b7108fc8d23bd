//! URL template formatting.
//!
//! The formatter scans a URL-like template for `{name[:pattern]}` and
//! `:name` placeholders, resolves each against one of four disjoint
//! namespace maps (path, matrix, query, fragment), validates resolved values
//! against inline patterns, and reassembles a canonical URL.

mod expression;
mod rewrite;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::authority;
use crate::canonical::CanonicalPath;
use crate::error::{FormatError, ParamScope};
use crate::pattern::PatternEngine;

use rewrite::rewrite_component;

/// What happens when a resolved value does not match its inline pattern.
///
/// A pattern that fails to compile is fatal under both `Fail` and `Warn`;
/// `Ignore` never compiles patterns at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Mismatch aborts formatting.
    #[default]
    Fail,
    /// Mismatch logs a warning; the value is substituted anyway.
    Warn,
    /// Patterns are never compiled or checked.
    Ignore,
}

/// A namespace map shared between the caller and the formatter.
///
/// The formatter holds these by reference, not by copy: mutations made after
/// construction are visible to the next `format_url` call. Single-threaded
/// by design; there is no internal locking.
pub type ParamMap = Rc<RefCell<HashMap<String, String>>>;

/// Builds a [`ParamMap`] from owned key/value pairs.
pub fn param_map<I, K, V>(pairs: I) -> ParamMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    Rc::new(RefCell::new(
        pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
    ))
}

/// The template engine. Holds the pattern backend, the validation mode, and
/// the four caller-owned namespace maps.
pub struct UrlTemplateFormatter {
    engine: Box<dyn PatternEngine>,
    mode: ValidationMode,
    path_params: ParamMap,
    matrix_params: ParamMap,
    query_params: ParamMap,
    fragment_params: ParamMap,
}

impl UrlTemplateFormatter {
    pub fn new(
        engine: Box<dyn PatternEngine>,
        mode: ValidationMode,
        path_params: ParamMap,
        matrix_params: ParamMap,
        query_params: ParamMap,
        fragment_params: ParamMap,
    ) -> Self {
        UrlTemplateFormatter {
            engine,
            mode,
            path_params,
            matrix_params,
            query_params,
            fragment_params,
        }
    }

    /// Legacy constructor: one shared map serves all four namespaces.
    pub fn with_shared(engine: Box<dyn PatternEngine>, mode: ValidationMode, shared: ParamMap) -> Self {
        UrlTemplateFormatter::new(
            engine,
            mode,
            Rc::clone(&shared),
            Rc::clone(&shared),
            Rc::clone(&shared),
            shared,
        )
    }

    /// Formats `url`, resolving every placeholder and normalizing the result.
    ///
    /// `None` is an invalid argument; a blank template formats to `""`. A
    /// template containing no `{…}` pair and no `:` is returned unchanged,
    /// byte-for-byte, with normalization skipped entirely: duplicate-slash
    /// collapse only fires when placeholder syntax is present somewhere in
    /// the string. The authority prefix (scheme, host, port) is never
    /// rewritten or normalized.
    pub fn format_url<'a>(&self, url: impl Into<Option<&'a str>>) -> Result<String, FormatError> {
        let url = url.into().ok_or(FormatError::NullUrl)?;
        let url = url.trim();
        if url.is_empty() {
            return Ok(String::new());
        }
        if !has_placeholder_syntax(url) {
            return Ok(url.to_string());
        }

        let split = authority::split(url);
        let token = split.token.as_str();

        let (path_query, fragment) = match rsplit_outside_braces(token, b'#') {
            Some((before, after)) => (before, Some(after)),
            None => (token, None),
        };
        let (path_matrix, query) = match rsplit_outside_braces(path_query, b'?') {
            Some((before, after)) => (before, Some(after)),
            None => (path_query, None),
        };

        // Per-segment pass: empty segments are kept here so duplicate-slash
        // information survives until canonical normalization.
        let mut segments = Vec::new();
        for segment in path_matrix.split('/') {
            if segment.is_empty() {
                segments.push(String::new());
                continue;
            }
            let (name, matrix) = match segment.split_once(';') {
                Some((n, m)) => (n, Some(m)),
                None => (segment, None),
            };
            let mut rewritten = self.rewrite(name, ParamScope::Path, &self.path_params)?;
            if let Some(matrix) = matrix {
                rewritten.push(';');
                rewritten.push_str(&self.rewrite(matrix, ParamScope::Matrix, &self.matrix_params)?);
            }
            segments.push(rewritten);
        }
        let mut assembled = segments.join("/");

        if let Some(query) = query {
            let rewritten = self.rewrite(query, ParamScope::Query, &self.query_params)?;
            if !rewritten.is_empty() {
                assembled.push('?');
                assembled.push_str(&rewritten);
            }
        }
        if let Some(fragment) = fragment {
            let rewritten = self.rewrite(fragment, ParamScope::Fragment, &self.fragment_params)?;
            if !rewritten.is_empty() {
                assembled.push('#');
                assembled.push_str(&rewritten);
            }
        }

        let canonical = CanonicalPath::parse("", &assembled)?;
        Ok(format!("{}{}", split.authority_prefix, canonical.value()))
    }

    fn rewrite(&self, input: &str, scope: ParamScope, params: &ParamMap) -> Result<String, FormatError> {
        rewrite_component(input, scope, &params.borrow(), self.engine.as_ref(), self.mode)
    }
}

/// True when the template carries any placeholder syntax: a `{…}` pair or a
/// `:` anywhere in the string.
fn has_placeholder_syntax(url: &str) -> bool {
    if url.contains(':') {
        return true;
    }
    match url.find('{') {
        Some(open) => url[open..].contains('}'),
        None => false,
    }
}

/// Splits at the last occurrence of `delim` that sits outside `{…}`
/// expressions, returning the text before and after it. `None` when no such
/// occurrence exists.
fn rsplit_outside_braces(input: &str, delim: u8) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    let mut found = None;
    for (i, &b) in input.as_bytes().iter().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            b if b == delim && depth == 0 => found = Some(i),
            _ => {}
        }
    }
    found.map(|i| (&input[..i], &input[i + 1..]))
}
