use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use std::sync::OnceLock;

/// Builds its parser on first use and keeps it
///
/// A grammar function can refer to itself through `lazy(self_fn)` without
/// recursing at construction time. Each nesting level is built the first
/// time input reaches it, and only once.
pub struct Lazy<F, P> {
    factory: F,
    built: OnceLock<P>,
}

impl<F, P> Lazy<F, P> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            built: OnceLock::new(),
        }
    }

    pub fn is_built(&self) -> bool {
        self.built.get().is_some()
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.built.get_or_init(&self.factory).parse(cursor)
    }
}

pub fn lazy<'code, F, P>(factory: F) -> Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}
