use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that replaces the output of a match with the input it consumed
///
/// Useful to glue single-character tokens into one, e.g. an identifier.
/// A match that consumes nothing yields no token at all.
#[derive(Debug, Clone, Copy)]
pub struct Recognize<P> {
    parser: P,
}

impl<P> Recognize<P> {
    pub fn new(parser: P) -> Self {
        Recognize { parser }
    }
}

impl<'code, P> Parser<'code> for Recognize<P>
where
    P: Parser<'code>,
{
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, remainder) = self.parser.parse(cursor)?;
        let consumed = cursor.consumed_until(&remainder);

        let output = if consumed.is_empty() {
            Vec::new()
        } else {
            vec![consumed]
        };
        Ok((output, remainder))
    }
}

/// Convenience function to create a Recognize parser
pub fn recognize<'code, P>(parser: P) -> Recognize<P>
where
    P: Parser<'code>,
{
    Recognize::new(parser)
}

/// Extension trait to add .recognize() method support for parsers
pub trait RecognizeExt<'code>: Parser<'code> + Sized {
    fn recognize(self) -> Recognize<Self> {
        Recognize::new(self)
    }
}

impl<'code, P> RecognizeExt<'code> for P where P: Parser<'code> {}
