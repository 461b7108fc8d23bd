//! Production pattern engine backed by the `regex` crate.

use regex::Regex;

use super::{CompiledPattern, PatternCompileError, PatternEngine};

/// Whole-string matcher built on `regex`. Anchors every pattern so a partial
/// match never passes validation.
#[derive(Debug, Default)]
pub struct RegexEngine;

struct CompiledRegex(Regex);

impl CompiledPattern for CompiledRegex {
    fn matches(&self, text: &str) -> bool {
        self.0.is_match(text)
    }
}

impl PatternEngine for RegexEngine {
    fn compile(&self, pattern: &str) -> Result<Box<dyn CompiledPattern>, PatternCompileError> {
        // The non-capturing group keeps alternations like `a|b` anchored as
        // a whole, not just their first branch.
        let anchored = format!("^(?:{pattern})$");
        match Regex::new(&anchored) {
            Ok(re) => Ok(Box::new(CompiledRegex(re))),
            Err(e) => Err(PatternCompileError {
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_string_match_only() {
        let engine = RegexEngine;
        let p = engine.compile(r"\d+").unwrap();
        assert!(p.matches("42"));
        assert!(!p.matches("a42"));
        assert!(!p.matches("42b"));
    }

    #[test]
    fn alternation_is_anchored_as_a_whole() {
        let engine = RegexEngine;
        let p = engine.compile("cat|dog").unwrap();
        assert!(p.matches("dog"));
        assert!(!p.matches("dogs"));
    }

    #[test]
    fn quantifier_with_braces() {
        let engine = RegexEngine;
        let p = engine.compile("[a-z]{2,4}").unwrap();
        assert!(p.matches("abc"));
        assert!(!p.matches("a"));
        assert!(!p.matches("abcde"));
    }

    #[test]
    fn malformed_pattern_is_a_compile_error() {
        let engine = RegexEngine;
        assert!(engine.compile(r"(\d+").is_err());
    }
}
