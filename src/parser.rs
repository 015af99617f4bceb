use crate::cursor::Cursor;
use crate::error::NoMatch;

/// Output tokens in match order plus the cursor after the match
pub type ParseResult<'code, T> = Result<(Vec<T>, Cursor<'code>), NoMatch>;

/// Type-erased parser, for grammars that need one concrete type per slot
pub type BoxedParser<'code, T> = Box<dyn Parser<'code, Output = T> + Send + Sync + 'code>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    /// Token type; each successful parse yields zero or more of these
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// On success the returned cursor is a suffix of `cursor`. On failure
    /// nothing is consumed: the caller just keeps using the cursor it had.
    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;

    /// Run the parser once over a whole input
    fn parse_str(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        self.parse(Cursor::new(input))
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed(self) -> BoxedParser<'code, Self::Output>
    where
        Self: Send + Sync + 'code,
    {
        Box::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{character, digit};
    use crate::literal::literal;

    #[test]
    fn test_parse_str_runs_on_whole_input() {
        let (output, remainder) = literal("ab").parse_str("abc").unwrap();
        assert_eq!(output, vec!["ab"]);
        assert_eq!(remainder.rest(), "c");
    }

    #[test]
    fn test_reference_is_a_parser() {
        let parser = digit();
        let by_ref = &parser;

        let (output, _) = by_ref.parse_str("7").unwrap();
        assert_eq!(output, vec!["7"]);
    }

    #[test]
    fn test_boxed_parsers_share_a_type() {
        let parsers: Vec<BoxedParser<'_, &str>> =
            vec![literal("let").boxed(), character('x').boxed(), digit().boxed()];

        assert!(parsers[0].parse_str("let").is_ok());
        assert!(parsers[1].parse_str("x").is_ok());
        assert_eq!(parsers[2].parse_str("y"), Err(NoMatch));
    }
}
