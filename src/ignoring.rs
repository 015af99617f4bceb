use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use crate::repeating::{Repeating, any_number};

/// Parser combinator that keeps the consumption of a parser but drops its output
///
/// Failure of the wrapped parser is still a failure.
#[derive(Debug, Clone, Copy)]
pub struct IgnoringOutput<P> {
    parser: P,
}

impl<P> IgnoringOutput<P> {
    pub fn new(parser: P) -> Self {
        IgnoringOutput { parser }
    }
}

impl<'code, P> Parser<'code> for IgnoringOutput<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, remainder) = self.parser.parse(cursor)?;
        Ok((Vec::new(), remainder))
    }
}

/// Convenience function to create an IgnoringOutput parser
pub fn ignoring_output<'code, P>(parser: P) -> IgnoringOutput<P>
where
    P: Parser<'code>,
{
    IgnoringOutput::new(parser)
}

/// Consume zero or more matches of `parser` and discard them
pub fn skip<'code, P>(
    parser: P,
) -> IgnoringOutput<Repeating<P, impl Fn(usize) -> bool + Copy + Send + Sync>>
where
    P: Parser<'code>,
{
    IgnoringOutput::new(any_number(parser))
}

/// Extension trait to add .ignoring_output() method support for parsers
pub trait IgnoringOutputExt<'code>: Parser<'code> + Sized {
    fn ignoring_output(self) -> IgnoringOutput<Self> {
        IgnoringOutput::new(self)
    }
}

impl<'code, P> IgnoringOutputExt<'code> for P where P: Parser<'code> {}
