use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// A named grammar rule
///
/// Cloning is cheap and every clone shares the same parser, so one rule
/// can appear in many places of a grammar. Rules are `Send + Sync` and can
/// be run from several threads at once.
pub struct Rule<'code, T> {
    name: &'static str,
    parser: Arc<dyn Parser<'code, Output = T> + Send + Sync + 'code>,
}

impl<'code, T> Rule<'code, T> {
    pub fn new<P>(name: &'static str, parser: P) -> Self
    where
        P: Parser<'code, Output = T> + Send + Sync + 'code,
    {
        Self {
            name,
            parser: Arc::new(parser),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<'code, T> Clone for Rule<'code, T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<'code, T> fmt::Debug for Rule<'code, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<'code, T> Parser<'code> for Rule<'code, T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let start = cursor.position();
        trace!(rule = self.name, position = start, "trying rule");

        let result = self.parser.parse(cursor);
        match &result {
            Ok((output, remainder)) => trace!(
                rule = self.name,
                position = start,
                consumed = remainder.position().saturating_sub(start),
                tokens = output.len(),
                "rule matched"
            ),
            Err(_) => trace!(rule = self.name, position = start, "rule did not match"),
        }
        result
    }
}

/// Convenience function to create a Rule
pub fn rule<'code, P>(name: &'static str, parser: P) -> Rule<'code, P::Output>
where
    P: Parser<'code> + Send + Sync + 'code,
{
    Rule::new(name, parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::chars::{digit, letter};
    use crate::error::NoMatch;
    use crate::literal::literal;
    use crate::repeating::RepeatingExt;

    #[test_log::test]
    fn test_rule_delegates() {
        let number = rule("number", digit().at_least(1));

        let (output, remainder) = number.parse_str("42;").unwrap();
        assert_eq!(output, vec!["4", "2"]);
        assert_eq!(remainder.rest(), ";");
        assert_eq!(number.parse_str("x"), Err(NoMatch));
    }

    #[test_log::test]
    fn test_clones_share_parser() {
        let keyword = rule("keyword", literal("let"));
        let pair = keyword.clone().and(keyword.clone());

        assert_eq!(pair.parse_str("letlet").unwrap().0, vec!["let", "let"]);
        assert_eq!(keyword.name(), "keyword");
    }

    #[test]
    fn test_debug_shows_name() {
        let identifier = rule("identifier", letter());

        assert!(format!("{:?}", identifier).contains("identifier"));
    }

    // Returns a cursor rewound to the start of the source
    struct Rewind;

    impl<'code> Parser<'code> for Rewind {
        type Output = &'code str;

        fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
            Ok((Vec::new(), Cursor::new(cursor.source())))
        }
    }

    #[test]
    fn test_trace_tolerates_backwards_cursor() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        let rewinding = rule("rewinding", literal("ab").and(rule("rewind", Rewind)));

        tracing::subscriber::with_default(subscriber, || {
            let (output, remainder) = rewinding.parse_str("abc").unwrap();
            assert_eq!(output, vec!["ab"]);
            assert_eq!(remainder.position(), 0);
        });
    }

    #[test]
    fn test_rule_is_shared_across_threads() {
        let word = rule("word", letter().at_least(1));
        let inputs = ["alpha", "beta", "gamma1", "9delta"];

        std::thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .into_iter()
                .map(|input| {
                    let word = &word;
                    scope.spawn(move || word.parse_str(input).map(|(output, _)| output.len()))
                })
                .collect();

            let counts: Vec<_> = handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect();
            assert_eq!(counts, vec![Ok(5), Ok(4), Ok(5), Err(NoMatch)]);
        });
    }
}
