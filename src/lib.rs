//! # CharComb - Character-Level Parser Combinators
//!
//! Small, composable recursive-descent parsers over in-memory text.
//!
//! Every parser maps a [`Cursor`] to either a list of output tokens plus the
//! remaining cursor, or [`NoMatch`]. The library emphasizes:
//!
//! - **Full backtracking**: a failed parser never consumes input
//! - **Ordered choice**: the first matching alternative wins
//! - **Terminating repetition**: matches that make no progress end a loop
//! - **Zero-copy tokens**: primitive matchers hand out slices of the input
//!
//! ```
//! use charcomb::prelude::*;
//!
//! let identifier = (letter() | character('_'))
//!     .and(any_number(alphanumeric() | character('_')))
//!     .recognize();
//! let assignment = identifier + skip(whitespace()) + literal("=");
//!
//! let (output, remainder) = assignment.parse_str("total =1").unwrap();
//! assert_eq!(output, vec!["total", "="]);
//! assert_eq!(remainder.rest(), "1");
//! ```
//!
//! Recursive rules are plain functions that reach themselves through
//! [`lazy`]:
//!
//! ```
//! use charcomb::prelude::*;
//!
//! // list ::= '[' { list } ']'
//! fn list<'code>() -> BoxedParser<'code, &'code str> {
//!     (character('[') + any_number(lazy(list)) + character(']')).boxed()
//! }
//!
//! let (output, remainder) = list().parse_str("[[][[]]]").unwrap();
//! assert_eq!(output.len(), 8);
//! assert!(remainder.is_eof());
//! assert!(list().parse_str("[[]x").is_err());
//! ```

pub mod and;
pub mod chars;
pub mod cursor;
pub mod error;
pub mod grammar;
pub mod ignoring;
pub mod lazy;
pub mod literal;
pub mod map;
pub mod ops;
pub mod optional;
pub mod or;
pub mod parser;
pub mod recognize;
pub mod repeating;
pub mod rule;
pub mod until;

pub use and::{and, sequence};
pub use cursor::Cursor;
pub use error::{GrammarError, NoMatch};
pub use ignoring::{ignoring_output, skip};
pub use lazy::lazy;
pub use literal::literal;
pub use map::map;
pub use optional::optional;
pub use or::{choice, or};
pub use parser::{BoxedParser, ParseResult, Parser};
pub use recognize::recognize;
pub use repeating::{any_number, at_least, between, repeating};
pub use rule::{Rule, rule};
pub use until::until;

/// Everything needed to write a grammar
pub mod prelude {
    pub use crate::and::{AndExt, and, sequence};
    pub use crate::chars::{
        alphanumeric, any_character, character, character_in, character_in_range,
        character_matching, digit, letter, lowercase, uppercase, whitespace,
    };
    pub use crate::cursor::Cursor;
    pub use crate::error::{GrammarError, NoMatch};
    pub use crate::ignoring::{IgnoringOutputExt, ignoring_output, skip};
    pub use crate::lazy::lazy;
    pub use crate::literal::literal;
    pub use crate::map::{MapExt, map};
    pub use crate::optional::{OptionalExt, optional};
    pub use crate::or::{OrExt, choice, or};
    pub use crate::parser::{BoxedExt, BoxedParser, ParseResult, Parser};
    pub use crate::recognize::{RecognizeExt, recognize};
    pub use crate::repeating::{RepeatingExt, any_number, at_least, between, repeating};
    pub use crate::rule::{Rule, rule};
    pub use crate::until::until;
}
