//! Canonical representation of a path/query/fragment token.
//!
//! Splits a token into ordered path segments (empty segments collapsed), an
//! ordered multi-valued query list, and fragment segments, then reconstructs
//! a canonical string. The broader request pipeline also mutates the query
//! and path through this type, with the same ordering invariants as
//! construction.

mod query;

use crate::error::FormatError;
use query::QueryParams;

/// Normalized path + query + fragment, with an optional root-path prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalPath {
    root_path: String,
    /// The rebased token started with `/`.
    absolute: bool,
    segments: Vec<String>,
    query: QueryParams,
    fragment_segments: Vec<String>,
}

impl CanonicalPath {
    /// Parses `token`, first stripping `root_path` when the token starts
    /// with it.
    ///
    /// Path segments are split on `/` with empty segments discarded (this is
    /// where duplicate-slash collapse happens). The fragment is the portion
    /// after the first `#`; a run of consecutive `#` collapses into one.
    pub fn parse(root_path: &str, token: &str) -> Result<Self, FormatError> {
        let rebased = match token.strip_prefix(root_path) {
            Some(rest) if !root_path.is_empty() => rest,
            _ => token,
        };

        let (head, fragment_raw) = match rebased.split_once('#') {
            Some((h, f)) => (h, Some(f)),
            None => (rebased, None),
        };
        let (path_raw, query_raw) = match head.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (head, None),
        };

        let query = match query_raw {
            Some(q) if !q.is_empty() => query::parse_query(q)?,
            _ => QueryParams::new(),
        };

        let fragment_segments = fragment_raw
            .map(|f| split_segments(f.trim_start_matches('#')))
            .unwrap_or_default();

        Ok(CanonicalPath {
            root_path: root_path.to_string(),
            absolute: path_raw.starts_with('/'),
            segments: split_segments(path_raw),
            query,
            fragment_segments,
        })
    }

    /// Non-empty path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Fragment segments in order (empty when there is no fragment).
    pub fn fragment_segments(&self) -> &[String] {
        &self.fragment_segments
    }

    /// Values bound to `key`, in encounter order.
    pub fn query_values(&self, key: &str) -> Option<&[String]> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    /// Replaces all values of `key` with the single `value`. The key keeps
    /// its first-seen position; an unknown key appends at the end.
    pub fn set_query_parameter(&mut self, key: &str, value: &str) {
        match self.query.iter_mut().find(|(k, _)| k == key) {
            Some((_, values)) => {
                values.clear();
                values.push(value.to_string());
            }
            None => self.query.push((key.to_string(), vec![value.to_string()])),
        }
    }

    /// Appends `value` under `key`, preserving first-seen key order.
    pub fn append_parameter(&mut self, key: &str, value: &str) {
        query::push_value(&mut self.query, key, value);
    }

    /// Removes `key` and all its values.
    pub fn remove_parameter(&mut self, key: &str) {
        self.query.retain(|(k, _)| k != key);
    }

    /// Replaces the path portion, re-segmenting `path` like construction
    /// does. Query and fragment are untouched.
    pub fn replace_path(&mut self, path: &str) {
        self.absolute = path.starts_with('/');
        self.segments = split_segments(path);
    }

    /// Reconstructs the canonical string:
    /// `root_path + separator + path [?query] [#fragment]`.
    ///
    /// The separator is empty when the root path is empty or ends with `/`,
    /// or when the path is empty or starts with `/`; the result never
    /// contains two adjacent `/`.
    pub fn value(&self) -> String {
        let mut path = String::new();
        if self.absolute {
            path.push('/');
        }
        path.push_str(&self.segments.join("/"));

        let mut out = self.root_path.clone();
        if !path.is_empty() {
            if out.ends_with('/') && path.starts_with('/') {
                out.push_str(&path[1..]);
            } else if !out.is_empty() && !out.ends_with('/') && !path.starts_with('/') {
                out.push('/');
                out.push_str(&path);
            } else {
                out.push_str(&path);
            }
        }
        if !self.query.is_empty() {
            out.push('?');
            out.push_str(&query::render_query(&self.query));
        }
        if !self.fragment_segments.is_empty() {
            out.push('#');
            out.push_str(&self.fragment_segments.join("/"));
        }
        out
    }
}

/// Splits on `/`, discarding empty segments.
fn split_segments(raw: &str) -> Vec<String> {
    raw.split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests;
