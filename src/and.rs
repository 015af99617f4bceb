use crate::cursor::Cursor;
use crate::error::GrammarError;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that runs two parsers in order and concatenates their output
///
/// Fails as soon as either side fails; the caller keeps its original cursor.
///
/// Example:
/// ```
/// use charcomb::and::AndExt;
/// use charcomb::chars::digit;
/// use charcomb::literal::literal;
/// use charcomb::parser::Parser;
///
/// let (output, remainder) = literal("x").and(digit()).parse_str("x1y").unwrap();
/// assert_eq!(output, vec!["x", "1"]);
/// assert_eq!(remainder.rest(), "y");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2, T> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code, Output = T>,
    P2: Parser<'code, Output = T>,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (mut output, cursor) = self.parser1.parse(cursor)?;
        let (rest, cursor) = self.parser2.parse(cursor)?;
        output.extend(rest);
        Ok((output, cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2, T>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code, Output = T>,
    P2: Parser<'code, Output = T>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}

/// Sequence over a runtime list of parsers of one type
#[derive(Debug, Clone)]
pub struct Sequence<P> {
    parsers: Vec<P>,
}

impl<'code, P> Parser<'code> for Sequence<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut output = Vec::new();
        let mut remainder = cursor;

        for parser in &self.parsers {
            let (items, next) = parser.parse(remainder)?;
            output.extend(items);
            remainder = next;
        }

        Ok((output, remainder))
    }
}

/// Build a Sequence, rejecting an empty list
pub fn sequence<'code, P>(parsers: Vec<P>) -> Result<Sequence<P>, GrammarError>
where
    P: Parser<'code>,
{
    if parsers.is_empty() {
        return Err(GrammarError::EmptySequence);
    }
    Ok(Sequence { parsers })
}

/// Sequence one or more parsers: `and!(p)` is `p`, `and!(p, q, r)` runs
/// `p`, then `q`, then `r`
#[macro_export]
macro_rules! and {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::and::And::new($first, $crate::and!($($rest),+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{character, digit, letter};
    use crate::error::NoMatch;
    use crate::literal::literal;
    use crate::parser::BoxedExt;

    #[test]
    fn test_and_both_succeed() {
        let cursor = Cursor::new("A5xyz");
        let parser = character('A').and(character('5'));

        let (output, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(output, vec!["A", "5"]);
        assert_eq!(cursor.rest(), "xyz");
    }

    #[test]
    fn test_and_first_fails() {
        let parser = character('A').and(character('x'));

        assert_eq!(parser.parse_str("Bxyz"), Err(NoMatch));
    }

    #[test]
    fn test_and_second_fails() {
        let parser = character('A').and(character('5'));

        assert_eq!(parser.parse_str("Axyz"), Err(NoMatch));
    }

    #[test]
    fn test_and_function_syntax() {
        let parser = and(literal("XY"), digit());

        let (output, cursor) = parser.parse_str("XY9").unwrap();
        assert_eq!(output, vec!["XY", "9"]);
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_and_is_associative() {
        let inputs = ["", "a", "a1", "a1b", "a1bc", "1ab", "ab1"];

        for input in inputs {
            let left = and(and(letter(), digit()), letter());
            let right = and(letter(), and(digit(), letter()));
            let flat = crate::and!(letter(), digit(), letter());

            let expected = flat.parse_str(input);
            assert_eq!(left.parse_str(input), expected, "Left grouping on: {:?}", input);
            assert_eq!(right.parse_str(input), expected, "Right grouping on: {:?}", input);
        }
    }

    #[test]
    fn test_sequence_from_vec() {
        let parser = sequence(vec![
            literal("let").boxed(),
            character(' ').boxed(),
            letter().boxed(),
        ])
        .unwrap();

        let (output, cursor) = parser.parse_str("let x = 1").unwrap();
        assert_eq!(output, vec!["let", " ", "x"]);
        assert_eq!(cursor.rest(), " = 1");
    }

    #[test]
    fn test_sequence_of_one_is_identity() {
        let inputs = ["", "4", "4a", "a4", "!"];
        let parser = sequence(vec![digit()]).unwrap();

        for input in inputs {
            assert_eq!(
                parser.parse_str(input),
                digit().parse_str(input),
                "Differs on: {:?}",
                input
            );
        }
        assert_eq!(parser.parse_str("a4"), Err(NoMatch));
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        let result = sequence(Vec::<crate::literal::Literal>::new());

        assert!(matches!(result, Err(GrammarError::EmptySequence)));
    }
}
