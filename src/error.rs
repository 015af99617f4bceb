use thiserror::Error;

/// The only way a parser can fail
///
/// Carries no position or expectation. Whoever receives it knows the
/// cursor they passed in, which is exactly where the failed attempt began.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("no match")]
pub struct NoMatch;

/// Misuse detected while building a grammar, never while parsing
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("a sequence needs at least one parser")]
    EmptySequence,
    #[error("a choice needs at least one alternative")]
    EmptyChoice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_display() {
        assert_eq!(NoMatch.to_string(), "no match");
    }

    #[test]
    fn test_grammar_error_display() {
        assert!(GrammarError::EmptySequence.to_string().contains("sequence"));
        assert!(GrammarError::EmptyChoice.to_string().contains("alternative"));
    }
}
