//! The operator layer: mapping `+ - * /` onto expression nodes.
//!
//! Two flavours are provided. The free functions in this module are fallible and return
//! [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) when two operands differ in length. The
//! `std::ops` overloads on `&Sequence<T>` and on every node type build the same nodes but panic on
//! a length mismatch, in every build profile, since operator traits can't return a `Result`.
//!
//! ```rust
//! use lazyvec::{seq, ExpressionExt, Sequence};
//!
//! let a: Sequence<f64> = seq![1.0, 2.0, 3.0];
//! let b: Sequence<f64> = seq![4.0, 5.0, 6.0];
//!
//! // nothing is computed until `materialize`
//! let c = (&a + &b) * 2.0_f64 - &a;
//! assert_eq!(c.materialize(), seq![9.0, 12.0, 15.0]);
//! ```
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::Result;
use crate::expression::Expression;
use crate::functor::{BinaryOp, Divide, DivideBy, Minus, Negate, Plus, Scale, Times};
use crate::node::{Binary, Concat, Map, ScalarLeft, ScalarRight};
use crate::reduce::Scan;
use crate::sequence::Sequence;

/// `lhs + rhs`, element-wise.
pub fn add<L: Expression, R: Expression>(lhs: L, rhs: R) -> Result<Binary<L, R, Plus>> {
    Binary::new(lhs, rhs, Plus)
}

/// `lhs - rhs`, element-wise.
pub fn sub<L: Expression, R: Expression>(lhs: L, rhs: R) -> Result<Binary<L, R, Minus>> {
    Binary::new(lhs, rhs, Minus)
}

/// `lhs * rhs`, element-wise.
pub fn mul<L: Expression, R: Expression>(lhs: L, rhs: R) -> Result<Binary<L, R, Times>> {
    Binary::new(lhs, rhs, Times)
}

/// `lhs / rhs`, element-wise.
pub fn div<L: Expression, R: Expression>(lhs: L, rhs: R) -> Result<Binary<L, R, Divide>> {
    Binary::new(lhs, rhs, Divide)
}

/// `expr * factor`, with the factor bound into a transform.
pub fn scale<E, C>(expr: E, factor: C) -> Map<E, Scale<C>>
where
    E: Expression,
    Scale<C>: crate::functor::UnaryOp<E::Elem>,
{
    Map::new(expr, Scale(factor))
}

/// `factor * expr`
pub fn scale_left<C, E>(factor: C, expr: E) -> ScalarLeft<C, E, Times>
where
    C: Clone,
    E: Expression,
    Times: BinaryOp<C, E::Elem>,
{
    ScalarLeft::new(factor, expr, Times)
}

/// `expr / divisor`, with the divisor bound into a transform.
pub fn divide<E, C>(expr: E, divisor: C) -> Map<E, DivideBy<C>>
where
    E: Expression,
    DivideBy<C>: crate::functor::UnaryOp<E::Elem>,
{
    Map::new(expr, DivideBy(divisor))
}

// Operator overloads. Generic parameters are passed as a single `{..}` token tree so they can be
// spliced inside the per-scalar repetition.

macro_rules! binary_operator {
    ({$($gen:tt)*} $lhs:ty, $Trait:ident, $method:ident, $Op:ident) => {
        impl<$($gen)*, Rhs> $Trait<Rhs> for $lhs
        where
            Self: Expression,
            Rhs: Expression,
        {
            type Output = Binary<Self, Rhs, $Op>;

            /// # Panics
            ///
            /// Panics if the operands have different lengths.
            #[inline]
            fn $method(self, rhs: Rhs) -> Self::Output {
                Binary::new(self, rhs, $Op).unwrap_or_else(|err| panic!("{err}"))
            }
        }
    };
}

macro_rules! scalar_operator {
    ({$($gen:tt)*} $lhs:ty, $scalar:ty, $Trait:ident, $method:ident, $Op:ident) => {
        impl<$($gen)*> $Trait<$scalar> for $lhs
        where
            Self: Expression<Elem = $scalar>,
        {
            type Output = ScalarRight<Self, $scalar, $Op>;

            #[inline]
            fn $method(self, rhs: $scalar) -> Self::Output {
                ScalarRight::new(self, rhs, $Op)
            }
        }

        impl<$($gen)*> $Trait<$lhs> for $scalar
        where
            $lhs: Expression<Elem = $scalar>,
        {
            type Output = ScalarLeft<$scalar, $lhs, $Op>;

            #[inline]
            fn $method(self, rhs: $lhs) -> Self::Output {
                ScalarLeft::new(self, rhs, $Op)
            }
        }
    };
}

macro_rules! scalar_operators {
    ($gen:tt $lhs:ty; $($scalar:ident)*) => {
        $(
            scalar_operator!($gen $lhs, $scalar, Add, add, Plus);
            scalar_operator!($gen $lhs, $scalar, Sub, sub, Minus);
            scalar_operator!($gen $lhs, $scalar, Mul, mul, Times);
            scalar_operator!($gen $lhs, $scalar, Div, div, Divide);
        )*
    };
}

macro_rules! expression_operators {
    ($({$($gen:tt)*} $lhs:ty),* $(,)?) => {
        $(
            binary_operator!({$($gen)*} $lhs, Add, add, Plus);
            binary_operator!({$($gen)*} $lhs, Sub, sub, Minus);
            binary_operator!({$($gen)*} $lhs, Mul, mul, Times);
            binary_operator!({$($gen)*} $lhs, Div, div, Divide);

            impl<$($gen)*> Neg for $lhs
            where
                Self: Expression,
            {
                type Output = Map<Self, Negate>;

                #[inline]
                fn neg(self) -> Self::Output {
                    Map::new(self, Negate)
                }
            }

            scalar_operators!(
                {$($gen)*} $lhs;
                i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64
            );
        )*
    };
}

expression_operators!(
    {'a, T} &'a Sequence<T>,
    {L, R, Op} Binary<L, R, Op>,
    {'a, L, R, Op} &'a Binary<L, R, Op>,
    {S, E, Op} ScalarLeft<S, E, Op>,
    {'a, S, E, Op} &'a ScalarLeft<S, E, Op>,
    {E, S, Op} ScalarRight<E, S, Op>,
    {'a, E, S, Op} &'a ScalarRight<E, S, Op>,
    {E, Op} Map<E, Op>,
    {'a, E, Op} &'a Map<E, Op>,
    {L, R} Concat<L, R>,
    {'a, L, R} &'a Concat<L, R>,
    {E, Op, Acc} Scan<E, Op, Acc>,
    {'a, E, Op, Acc} &'a Scan<E, Op, Acc>,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::expression::ExpressionExt;
    use crate::seq;

    #[test]
    fn free_functions_build_nodes() {
        let a: Sequence<i32> = seq![6, 8, 10];
        let b: Sequence<i32> = seq![3, 2, 5];

        assert_eq!(add(&a, &b).unwrap().materialize(), seq![9, 10, 15]);
        assert_eq!(sub(&a, &b).unwrap().materialize(), seq![3, 6, 5]);
        assert_eq!(mul(&a, &b).unwrap().materialize(), seq![18, 16, 50]);
        assert_eq!(div(&a, &b).unwrap().materialize(), seq![2, 4, 2]);
        assert_eq!(scale(&a, 2_i32).materialize(), seq![12, 16, 20]);
        assert_eq!(scale_left(2_i32, &a).materialize(), seq![12, 16, 20]);
        assert_eq!(divide(&a, 4_i32).materialize(), seq![1, 2, 2]);
    }

    #[test]
    fn free_functions_report_mismatch() {
        let a: Sequence<i32> = seq![1, 2, 3];
        let b: Sequence<i32> = seq![1, 2, 3, 4, 5];
        let expected = Error::ShapeMismatch { lhs: 3, rhs: 5 };

        assert_eq!(add(&a, &b).unwrap_err(), expected);
        assert_eq!(sub(&a, &b).unwrap_err(), expected);
        assert_eq!(mul(&a, &b).unwrap_err(), expected);
        assert_eq!(div(&a, &b).unwrap_err(), expected);
    }

    #[test]
    fn operators_compose() {
        let a: Sequence<i64> = seq![1, 2, 3];
        let b: Sequence<i64> = seq![4, 5, 6];
        let c: Sequence<i64> = seq![7, 8, 9];

        let e = (&a + &b) * &c - &a / &a;
        assert_eq!(e.materialize(), seq![34, 55, 80]);

        let neg = -(&a - &b);
        assert_eq!(neg.materialize(), seq![3, 3, 3]);
    }

    #[test]
    fn scalar_operators_on_both_sides() {
        let a: Sequence<i32> = seq![1, 2, 3];

        assert_eq!((&a * 3_i32).materialize(), seq![3, 6, 9]);
        assert_eq!((3_i32 * &a).materialize(), seq![3, 6, 9]);
        assert_eq!((&a + 1_i32).materialize(), seq![2, 3, 4]);
        assert_eq!((10_i32 - &a).materialize(), seq![9, 8, 7]);
        assert_eq!((&a - 1_i32).materialize(), seq![0, 1, 2]);
        assert_eq!((6_i32 / &a).materialize(), seq![6, 3, 2]);
        assert_eq!((&a / 2_i32).materialize(), seq![0, 1, 1]);
    }

    #[test]
    fn scalar_operators_on_nodes() {
        let a: Sequence<f64> = seq![1.0, 2.0];
        let b: Sequence<f64> = seq![3.0, 4.0];

        let sum = &a + &b;
        let halved = &sum / 2.0_f64;
        let doubled = 2.0_f64 * &sum;

        assert_eq!(halved.materialize(), seq![2.0, 3.0]);
        assert_eq!(doubled.materialize(), seq![8.0, 12.0]);
        assert_eq!((halved + doubled).materialize(), seq![10.0, 15.0]);
    }

    #[test]
    fn operators_accept_node_references() {
        let a: Sequence<u32> = seq![1, 2, 3];
        let shared = &a * &a;

        let e = &shared + &shared;
        assert_eq!(e.materialize(), seq![2, 8, 18]);
        assert_eq!(shared.materialize(), seq![1, 4, 9]);
    }

    #[test]
    fn concat_and_scan_take_operators() {
        let a: Sequence<i32> = seq![1, 2];
        let b: Sequence<i32> = seq![3];
        let joined = a.concat(&b);

        assert_eq!((&joined * 10_i32).materialize(), seq![10, 20, 30]);
        assert_eq!((joined + &b.concat(&a)).materialize(), seq![4, 3, 5]);

        let running = a.scan::<i32, _>(Plus);
        assert_eq!((running - &a).materialize(), seq![0, 1]);
    }

    #[test]
    #[should_panic(expected = "left operand has 3 elements")]
    fn operator_panics_on_mismatch() {
        let a: Sequence<i32> = seq![1, 2, 3];
        let b: Sequence<i32> = seq![1, 2, 3, 4, 5];
        let _ = &a + &b;
    }
}
