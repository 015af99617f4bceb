use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::{ParseResult, Parser};
use std::ops::RangeInclusive;

/// Parser that consumes one character accepted by a predicate
///
/// The output is that character, as a one-character slice of the input.
///
/// At end of input this parser succeeds with no output and does not move.
/// Grammars built from it can therefore "match" past the end of input;
/// an explicit end-of-input check is the caller's job.
#[derive(Debug, Clone, Copy)]
pub struct CharacterMatching<F> {
    predicate: F,
}

impl<F> CharacterMatching<F> {
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<'code, F> Parser<'code> for CharacterMatching<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let Some((head, tail)) = cursor.split_front() else {
            return Ok((Vec::new(), cursor));
        };

        if (self.predicate)(head) {
            Ok((vec![cursor.consumed_until(&tail)], tail))
        } else {
            Err(NoMatch)
        }
    }
}

/// Convenience function to create a CharacterMatching parser
pub fn character_matching<F>(predicate: F) -> CharacterMatching<F>
where
    F: Fn(char) -> bool,
{
    CharacterMatching::new(predicate)
}

/// Any single character
pub fn any_character() -> CharacterMatching<fn(char) -> bool> {
    let predicate: fn(char) -> bool = |_| true;
    CharacterMatching::new(predicate)
}

/// Exactly `expected`
pub fn character(expected: char) -> CharacterMatching<impl Fn(char) -> bool + Copy + Send + Sync> {
    character_matching(move |c: char| c == expected)
}

/// Any character contained in `set`
pub fn character_in(
    set: impl Into<String>,
) -> CharacterMatching<impl Fn(char) -> bool + Clone + Send + Sync> {
    let set = set.into();
    character_matching(move |c: char| set.contains(c))
}

/// Any character inside an inclusive range
pub fn character_in_range(
    range: RangeInclusive<char>,
) -> CharacterMatching<impl Fn(char) -> bool + Clone + Send + Sync> {
    character_matching(move |c: char| range.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_character_is_consumed() {
        let cursor = Cursor::new("abc");
        let parser = character_matching(|c| c == 'a');

        let (output, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(output, vec!["a"]);
        assert_eq!(cursor.rest(), "bc");
    }

    #[test]
    fn test_rejected_character_fails() {
        let cursor = Cursor::new("xbc");
        let parser = character_matching(|c| c == 'a');

        assert_eq!(parser.parse(cursor), Err(NoMatch));
    }

    #[test]
    fn test_end_of_input_is_a_no_op_match() {
        let cursor = Cursor::new("");
        let parser = character('a');

        let (output, remainder) = parser.parse(cursor).unwrap();
        assert!(output.is_empty());
        assert_eq!(remainder, cursor);
    }

    #[test]
    fn test_end_of_input_after_consumption() {
        let (_, cursor) = Cursor::new("a").split_front().unwrap();
        let parser = any_character();

        let (output, remainder) = parser.parse(cursor).unwrap();
        assert!(output.is_empty());
        assert!(remainder.is_eof());
    }

    #[test]
    fn test_multibyte_character_output() {
        let parser = any_character();

        let (output, remainder) = parser.parse_str("🦀!").unwrap();
        assert_eq!(output, vec!["🦀"]);
        assert_eq!(remainder.rest(), "!");
    }

    #[test]
    fn test_character_in_set() {
        let parser = character_in("+-*/");

        for input in ["+", "-", "*", "/"] {
            let (output, _) = parser.parse_str(input).unwrap();
            assert_eq!(output, vec![input], "Failed for operator: {}", input);
        }
        assert!(parser.parse_str("%").is_err());
    }

    #[test]
    fn test_character_in_range() {
        let parser = character_in_range('a'..='f');

        assert!(parser.parse_str("a").is_ok());
        assert!(parser.parse_str("f").is_ok());
        assert!(parser.parse_str("g").is_err());
        assert!(parser.parse_str("A").is_err());
    }
}
