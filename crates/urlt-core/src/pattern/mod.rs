//! Pattern-engine contract for inline placeholder validation.
//!
//! The formatter validates `{name:pattern}` values through these traits only,
//! so the concrete backend can be swapped without touching the engine.

mod regex_engine;

pub use regex_engine::RegexEngine;

use thiserror::Error;

/// A malformed inline pattern, as reported by the backend.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PatternCompileError {
    pub message: String,
}

/// A compiled pattern ready for whole-string matching.
pub trait CompiledPattern {
    /// True when `text` matches the pattern in its entirety.
    fn matches(&self, text: &str) -> bool;
}

/// Compiles inline placeholder patterns.
pub trait PatternEngine {
    fn compile(&self, pattern: &str) -> Result<Box<dyn CompiledPattern>, PatternCompileError>;
}
