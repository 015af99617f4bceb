use crate::cursor::Cursor;
use crate::error::{GrammarError, NoMatch};
use crate::parser::{ParseResult, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both run against the same cursor. The first success wins even when the
/// second parser would also match, possibly consuming more.
#[derive(Debug, Clone, Copy)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, T> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = T>,
    P2: Parser<'code, Output = T>,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(NoMatch) => self.parser2.parse(cursor),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, T>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = T>,
    P2: Parser<'code, Output = T>,
{
    Or::new(parser1, parser2)
}

/// Ordered choice over a runtime list of parsers of one type
#[derive(Debug, Clone)]
pub struct Choice<P> {
    alternatives: Vec<P>,
}

impl<'code, P> Parser<'code> for Choice<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.alternatives
            .iter()
            .find_map(|alternative| alternative.parse(cursor).ok())
            .ok_or(NoMatch)
    }
}

/// Build a Choice, rejecting an empty list
pub fn choice<'code, P>(alternatives: Vec<P>) -> Result<Choice<P>, GrammarError>
where
    P: Parser<'code>,
{
    if alternatives.is_empty() {
        return Err(GrammarError::EmptyChoice);
    }
    Ok(Choice { alternatives })
}

/// Ordered choice between one or more parsers: `or!(p)` is `p`
#[macro_export]
macro_rules! or {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::or::Or::new($first, $crate::or!($($rest),+))
    };
}
