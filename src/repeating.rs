use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::{ParseResult, Parser};
use std::ops::RangeInclusive;

/// Parser combinator that applies a parser as many times as it makes progress
///
/// The loop ends at the first attempt that fails, yields no output, or
/// leaves the cursor where it was; that attempt is discarded and not
/// counted. The count of kept matches is then checked against
/// `count_predicate`: if it is rejected the whole repetition fails and none
/// of the matched input counts as consumed.
///
/// Repetition is greedy and never gives matches back, so
/// `between(1..=2, p)` on three consecutive matches of `p` fails.
#[derive(Debug, Clone, Copy)]
pub struct Repeating<P, F> {
    parser: P,
    count_predicate: F,
}

impl<P, F> Repeating<P, F> {
    pub fn new(parser: P, count_predicate: F) -> Self {
        Repeating {
            parser,
            count_predicate,
        }
    }
}

impl<'code, P, F> Parser<'code> for Repeating<P, F>
where
    P: Parser<'code>,
    F: Fn(usize) -> bool,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut output = Vec::new();
        let mut count = 0;
        let mut remainder = cursor;

        while let Ok((items, next)) = self.parser.parse(remainder) {
            if items.is_empty() || next.position() == remainder.position() {
                break;
            }
            count += 1;
            output.extend(items);
            remainder = next;
        }

        if (self.count_predicate)(count) {
            Ok((output, remainder))
        } else {
            Err(NoMatch)
        }
    }
}

/// Repeat `parser` and accept when `count_predicate(count)` holds
pub fn repeating<'code, P, F>(parser: P, count_predicate: F) -> Repeating<P, F>
where
    P: Parser<'code>,
    F: Fn(usize) -> bool,
{
    Repeating::new(parser, count_predicate)
}

/// Zero or more
pub fn any_number<'code, P>(parser: P) -> Repeating<P, impl Fn(usize) -> bool + Copy + Send + Sync>
where
    P: Parser<'code>,
{
    repeating(parser, |_| true)
}

/// `minimum` or more
pub fn at_least<'code, P>(
    minimum: usize,
    parser: P,
) -> Repeating<P, impl Fn(usize) -> bool + Copy + Send + Sync>
where
    P: Parser<'code>,
{
    repeating(parser, move |count| count >= minimum)
}

/// Between `range.start()` and `range.end()` matches, both inclusive
pub fn between<'code, P>(
    range: RangeInclusive<usize>,
    parser: P,
) -> Repeating<P, impl Fn(usize) -> bool + Clone + Send + Sync>
where
    P: Parser<'code>,
{
    repeating(parser, move |count| range.contains(&count))
}

/// Extension trait to add repetition methods to all parsers
pub trait RepeatingExt<'code>: Parser<'code> + Sized {
    fn repeating<F>(self, count_predicate: F) -> Repeating<Self, F>
    where
        F: Fn(usize) -> bool,
    {
        Repeating::new(self, count_predicate)
    }

    fn any_number(self) -> Repeating<Self, impl Fn(usize) -> bool + Copy + Send + Sync> {
        any_number(self)
    }

    fn at_least(
        self,
        minimum: usize,
    ) -> Repeating<Self, impl Fn(usize) -> bool + Copy + Send + Sync> {
        at_least(minimum, self)
    }

    fn between(
        self,
        range: RangeInclusive<usize>,
    ) -> Repeating<Self, impl Fn(usize) -> bool + Clone + Send + Sync> {
        between(range, self)
    }
}

impl<'code, P> RepeatingExt<'code> for P where P: Parser<'code> {}
