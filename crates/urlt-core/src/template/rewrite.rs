//! Single-pass placeholder rewriting of one URL sub-string.

use std::collections::HashMap;

use crate::error::{FormatError, ParamScope};
use crate::pattern::PatternEngine;

use super::expression::{find_closing_brace, is_ident_byte, PlaceholderExpression};
use super::ValidationMode;

/// Rewrites every placeholder in `input` against `params`, copying all other
/// characters through verbatim. Values are inserted without escaping or
/// percent-encoding. An unclosed `{`, a bare `:`, or a brace pair whose
/// content is not a valid expression are all copied through literally.
pub(super) fn rewrite_component(
    input: &str,
    scope: ParamScope,
    params: &HashMap<String, String>,
    engine: &dyn PatternEngine,
    mode: ValidationMode,
) -> Result<String, FormatError> {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => match find_closing_brace(input, i) {
                Some(close) => {
                    let raw = &input[i..=close];
                    match PlaceholderExpression::parse_braced(&input[i + 1..close]) {
                        Some(expr) => {
                            out.push_str(&resolve(&expr, raw, scope, params, engine, mode)?);
                        }
                        None => out.push_str(raw),
                    }
                    i = close + 1;
                }
                None => {
                    out.push('{');
                    i += 1;
                }
            },
            b':' => {
                let start = i + 1;
                let mut end = start;
                while end < bytes.len() && is_ident_byte(bytes[end]) {
                    end += 1;
                }
                if end > start {
                    let raw = &input[i..end];
                    let expr = PlaceholderExpression {
                        name: &input[start..end],
                        pattern: None,
                    };
                    out.push_str(&resolve(&expr, raw, scope, params, engine, mode)?);
                    i = end;
                } else {
                    out.push(':');
                    i += 1;
                }
            }
            _ => {
                // Copy verbatim up to the next possible placeholder start.
                let next = input[i..]
                    .find(['{', ':'])
                    .map_or(input.len(), |p| i + p);
                out.push_str(&input[i..next]);
                i = next;
            }
        }
    }

    Ok(out)
}

/// Looks up the placeholder value and applies inline-pattern validation
/// according to the mode matrix.
fn resolve(
    expr: &PlaceholderExpression<'_>,
    raw: &str,
    scope: ParamScope,
    params: &HashMap<String, String>,
    engine: &dyn PatternEngine,
    mode: ValidationMode,
) -> Result<String, FormatError> {
    let value = params
        .get(expr.name)
        .ok_or_else(|| FormatError::MissingParameter {
            token: raw.to_string(),
            scope,
        })?;

    if let Some(pattern) = expr.pattern {
        match mode {
            // Never compiled, even when the pattern is malformed.
            ValidationMode::Ignore => {}
            ValidationMode::Fail | ValidationMode::Warn => {
                let compiled =
                    engine
                        .compile(pattern)
                        .map_err(|source| FormatError::InvalidPattern {
                            token: raw.to_string(),
                            scope,
                            source,
                        })?;
                if !compiled.matches(value) {
                    if mode == ValidationMode::Fail {
                        return Err(FormatError::ValueMismatch {
                            value: value.clone(),
                            token: raw.to_string(),
                            scope,
                        });
                    }
                    tracing::warn!(
                        "value `{}` does not match pattern of placeholder `{}` in {} parameters",
                        value,
                        raw,
                        scope
                    );
                }
            }
        }
    }

    Ok(value.clone())
}
