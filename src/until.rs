use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser that captures everything up to, not including, a stop character
///
/// Runs to end of input when the stop character never appears. Always
/// succeeds with exactly one token, which may be empty.
#[derive(Debug, Clone, Copy)]
pub struct Until {
    stop: char,
}

impl Until {
    pub fn new(stop: char) -> Self {
        Self { stop }
    }
}

impl<'code> Parser<'code> for Until {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let rest = cursor.rest();
        let captured = rest.find(self.stop).unwrap_or(rest.len());

        let remainder = cursor.advance(captured);
        Ok((vec![cursor.consumed_until(&remainder)], remainder))
    }
}

/// Convenience function to create an Until parser
pub fn until(stop: char) -> Until {
    Until::new(stop)
}
