use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact string character by character
///
/// Produces a single token equal to the expected string. Nothing is
/// consumed unless the whole string matches.
#[derive(Debug, Clone)]
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        if !cursor.rest().starts_with(self.expected.as_ref()) {
            return Err(NoMatch);
        }

        let remainder = cursor.advance(self.expected.len());
        Ok((vec![cursor.consumed_until(&remainder)], remainder))
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}
