//! Error taxonomy for URL template formatting.
//!
//! Messages carry the raw placeholder token text and the literal namespace
//! name (`path`, `matrix`, `query`, `fragment`) so callers can assert on
//! them without parsing structured fields.

use std::fmt;

use thiserror::Error;

use crate::pattern::PatternCompileError;

/// The four disjoint parameter namespaces a placeholder can resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamScope {
    Path,
    Matrix,
    Query,
    Fragment,
}

impl ParamScope {
    /// Literal namespace name as it appears in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            ParamScope::Path => "path",
            ParamScope::Matrix => "matrix",
            ParamScope::Query => "query",
            ParamScope::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ParamScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single `format_url` call. No partial output is ever produced.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The URL argument was absent.
    #[error("URL cannot be null")]
    NullUrl,

    /// A query piece had no `=` separator.
    #[error("malformed query piece `{piece}`: expected key=value")]
    MalformedQuery { piece: String },

    /// A placeholder resolved to a name with no entry in its namespace map.
    #[error("no value bound for placeholder `{token}` in {scope} parameters")]
    MissingParameter { token: String, scope: ParamScope },

    /// The inline pattern of a `{name:pattern}` expression failed to compile.
    /// Fatal under both FAIL and WARN validation modes.
    #[error("invalid pattern in placeholder `{token}` for {scope} parameters: {source}")]
    InvalidPattern {
        token: String,
        scope: ParamScope,
        #[source]
        source: PatternCompileError,
    },

    /// A compiled pattern did not whole-match the resolved value.
    #[error("value `{value}` does not match pattern of placeholder `{token}` in {scope} parameters")]
    ValueMismatch {
        value: String,
        token: String,
        scope: ParamScope,
    },
}
