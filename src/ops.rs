//! `+` for sequencing and `|` for ordered choice
//!
//! `a + b` is `And::new(a, b)` and `a | b` is `Or::new(a, b)`; the
//! resulting value only parses when both sides share an output type.

use crate::and::{And, Sequence};
use crate::chars::CharacterMatching;
use crate::ignoring::IgnoringOutput;
use crate::literal::Literal;
use crate::map::Map;
use crate::optional::Optional;
use crate::or::{Choice, Or};
use crate::recognize::Recognize;
use crate::repeating::Repeating;
use crate::rule::Rule;
use crate::until::Until;
use std::ops::{Add, BitOr};

macro_rules! impl_operators {
    ([$($generics:tt)*] $ty:ty) => {
        impl<$($generics)* Rhs> Add<Rhs> for $ty {
            type Output = And<Self, Rhs>;

            fn add(self, rhs: Rhs) -> Self::Output {
                And::new(self, rhs)
            }
        }

        impl<$($generics)* Rhs> BitOr<Rhs> for $ty {
            type Output = Or<Self, Rhs>;

            fn bitor(self, rhs: Rhs) -> Self::Output {
                Or::new(self, rhs)
            }
        }
    };
}

impl_operators!(['code, T,] Rule<'code, T>);
impl_operators!([P1, P2,] And<P1, P2>);
impl_operators!([P1, P2,] Or<P1, P2>);
impl_operators!([P,] Sequence<P>);
impl_operators!([P,] Choice<P>);
impl_operators!([P, F,] Repeating<P, F>);
impl_operators!([P,] Optional<P>);
impl_operators!([P,] IgnoringOutput<P>);
impl_operators!([P,] Recognize<P>);
impl_operators!([P, F,] Map<P, F>);
impl_operators!([F,] CharacterMatching<F>);
impl_operators!([] Literal);
impl_operators!([] Until);
