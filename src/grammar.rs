//! A toy statement language built from the combinators
//!
//! ```text
//! string_value       ::= '"' ~'"' '"'
//! expression         ::= <string_value>
//! identifier         ::= [A-Za-z_] { [A-Za-z0-9_] }
//! builtin_identifier ::= 'print'
//! parameter_list     ::= <expression> { ',' <expression> }
//! builtin            ::= <builtin_identifier> '(' <parameter_list> ')'
//! assignment         ::= <identifier> '=' <expression>
//! statement          ::= ( <builtin> | <assignment> ) ';'
//! program            ::= { <statement> }
//! ```
//!
//! Spaces, tabs and newlines may appear between tokens. Identifiers come
//! out as a single token; everything else keeps one token per literal,
//! with the body of a string as its own token.

use crate::and::AndExt;
use crate::chars::{alphanumeric, character, letter, whitespace};
use crate::ignoring::skip;
use crate::literal::literal;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::recognize::RecognizeExt;
use crate::repeating::any_number;
use crate::rule::{Rule, rule};
use crate::until::until;
use std::fmt;
use std::str::FromStr;

pub type Token<'code> = &'code str;

/// Root rules a caller can parse from
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RuleName {
    Program,
    Statement,
    Builtin,
    Assignment,
    Expression,
    Identifier,
}

impl RuleName {
    pub const ALL: [RuleName; 6] = [
        RuleName::Program,
        RuleName::Statement,
        RuleName::Builtin,
        RuleName::Assignment,
        RuleName::Expression,
        RuleName::Identifier,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::Program => "program",
            RuleName::Statement => "statement",
            RuleName::Builtin => "builtin",
            RuleName::Assignment => "assignment",
            RuleName::Expression => "expression",
            RuleName::Identifier => "identifier",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule `{0}`, expected one of: {known}", known = known_rules())]
pub struct UnknownRule(String);

fn known_rules() -> String {
    RuleName::ALL.map(|name| name.as_str()).join(", ")
}

impl FromStr for RuleName {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownRule(s.to_owned()))
    }
}

/// All rules of the toy language, built once
#[derive(Debug, Clone)]
pub struct Grammar<'code> {
    pub string_value: Rule<'code, Token<'code>>,
    pub expression: Rule<'code, Token<'code>>,
    pub identifier: Rule<'code, Token<'code>>,
    pub builtin_identifier: Rule<'code, Token<'code>>,
    pub parameter_list: Rule<'code, Token<'code>>,
    pub builtin: Rule<'code, Token<'code>>,
    pub assignment: Rule<'code, Token<'code>>,
    pub statement: Rule<'code, Token<'code>>,
    pub program: Rule<'code, Token<'code>>,
}

/// `parser` preceded by optional whitespace
fn lexeme<'code, P>(parser: P) -> impl Parser<'code, Output = Token<'code>> + Send + Sync + 'code
where
    P: Parser<'code, Output = Token<'code>> + Send + Sync + 'code,
{
    skip(whitespace()).and(parser)
}

impl<'code> Grammar<'code> {
    pub fn new() -> Self {
        let string_value = rule(
            "string_value",
            lexeme(literal("\"")).and(until('"')).and(literal("\"")),
        );

        let expression = rule("expression", string_value.clone());

        let identifier = rule(
            "identifier",
            lexeme(
                letter()
                    .or(character('_'))
                    .and(any_number(alphanumeric().or(character('_'))))
                    .recognize(),
            ),
        );

        let builtin_identifier = rule("builtin_identifier", lexeme(literal("print")));

        let parameter_list = rule(
            "parameter_list",
            expression
                .clone()
                .and(any_number(lexeme(literal(",")).and(expression.clone()))),
        );

        let builtin = rule(
            "builtin",
            builtin_identifier
                .clone()
                .and(lexeme(literal("(")))
                .and(parameter_list.clone())
                .and(lexeme(literal(")"))),
        );

        let assignment = rule(
            "assignment",
            identifier
                .clone()
                .and(lexeme(literal("=")))
                .and(expression.clone()),
        );

        let statement = rule(
            "statement",
            builtin
                .clone()
                .or(assignment.clone())
                .and(lexeme(literal(";"))),
        );

        let program = rule(
            "program",
            any_number(statement.clone()).and(skip(whitespace())),
        );

        Self {
            string_value,
            expression,
            identifier,
            builtin_identifier,
            parameter_list,
            builtin,
            assignment,
            statement,
            program,
        }
    }

    pub fn rule(&self, name: RuleName) -> &Rule<'code, Token<'code>> {
        match name {
            RuleName::Program => &self.program,
            RuleName::Statement => &self.statement,
            RuleName::Builtin => &self.builtin,
            RuleName::Assignment => &self.assignment,
            RuleName::Expression => &self.expression,
            RuleName::Identifier => &self.identifier,
        }
    }
}

impl Default for Grammar<'_> {
    fn default() -> Self {
        Self::new()
    }
}
