//! Primitive operators applied by expression nodes.
//!
//! Operators are small, usually zero-sized values rather than closures so that node types stay
//! nameable, eg `Binary<&Sequence<f64>, &Sequence<f64>, Plus>`.
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An operator combining two values, one from each operand of a node.
pub trait BinaryOp<A, B> {
    type Output;

    fn apply(&self, lhs: A, rhs: B) -> Self::Output;
}

/// An operator applied to each element of a single operand.
pub trait UnaryOp<A> {
    type Output;

    fn apply(&self, value: A) -> Self::Output;
}

/// `lhs + rhs`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Plus;

/// `lhs - rhs`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Minus;

/// `lhs * rhs`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Times;

/// `lhs / rhs`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Divide;

impl<A: Add<B>, B> BinaryOp<A, B> for Plus {
    type Output = A::Output;

    #[inline(always)]
    fn apply(&self, lhs: A, rhs: B) -> Self::Output {
        lhs + rhs
    }
}

impl<A: Sub<B>, B> BinaryOp<A, B> for Minus {
    type Output = A::Output;

    #[inline(always)]
    fn apply(&self, lhs: A, rhs: B) -> Self::Output {
        lhs - rhs
    }
}

impl<A: Mul<B>, B> BinaryOp<A, B> for Times {
    type Output = A::Output;

    #[inline(always)]
    fn apply(&self, lhs: A, rhs: B) -> Self::Output {
        lhs * rhs
    }
}

impl<A: Div<B>, B> BinaryOp<A, B> for Divide {
    type Output = A::Output;

    #[inline(always)]
    fn apply(&self, lhs: A, rhs: B) -> Self::Output {
        lhs / rhs
    }
}

/// Multiplies each element by a bound constant, `value * c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scale<C>(pub C);

/// Divides each element by a bound constant, `value / c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DivideBy<C>(pub C);

/// `-value`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Negate;

impl<A: Mul<C>, C: Clone> UnaryOp<A> for Scale<C> {
    type Output = A::Output;

    #[inline(always)]
    fn apply(&self, value: A) -> Self::Output {
        value * self.0.clone()
    }
}

impl<A: Div<C>, C: Clone> UnaryOp<A> for DivideBy<C> {
    type Output = A::Output;

    #[inline(always)]
    fn apply(&self, value: A) -> Self::Output {
        value / self.0.clone()
    }
}

impl<A: Neg> UnaryOp<A> for Negate {
    type Output = A::Output;

    #[inline(always)]
    fn apply(&self, value: A) -> Self::Output {
        -value
    }
}

/// Adapts a closure into an operator. Unary closures act as [`UnaryOp`], two-argument closures
/// as [`BinaryOp`].
#[derive(Clone, Copy)]
pub struct FnOp<F>(pub F);

impl<F> std::fmt::Debug for FnOp<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnOp(..)")
    }
}

impl<A, O, F: Fn(A) -> O> UnaryOp<A> for FnOp<F> {
    type Output = O;

    #[inline(always)]
    fn apply(&self, value: A) -> O {
        (self.0)(value)
    }
}

impl<A, B, O, F: Fn(A, B) -> O> BinaryOp<A, B> for FnOp<F> {
    type Output = O;

    #[inline(always)]
    fn apply(&self, lhs: A, rhs: B) -> O {
        (self.0)(lhs, rhs)
    }
}
