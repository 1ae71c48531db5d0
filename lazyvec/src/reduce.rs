//! Folding expressions into single values.
use std::marker::PhantomData;
use std::ops::{Add, Mul};

use log::trace;

use crate::error::Result;
use crate::expression::Expression;
use crate::functor::{BinaryOp, Plus, Times};
use crate::node::Binary;

/// A pending left-to-right fold of `expr` with `op`, seeded with `Acc::default()`.
///
/// Nothing is cached: every call to [`Reduction::eval`] walks the full range again. The order is
/// always `0` to `len() - 1`, which matters for floating point accumulation.
#[derive(Debug, Clone, Copy)]
pub struct Reduction<E, Op, Acc> {
    expr: E,
    op: Op,
    _acc: PhantomData<fn() -> Acc>,
}

impl<E, Op, Acc> Reduction<E, Op, Acc>
where
    E: Expression,
    Op: BinaryOp<Acc, E::Elem, Output = Acc>,
    Acc: Default,
{
    pub fn new(expr: E, op: Op) -> Self {
        Self {
            expr,
            op,
            _acc: PhantomData,
        }
    }

    /// Pull every element through the source expression and fold it into the accumulator.
    pub fn eval(&self) -> Acc {
        let len = self.expr.len();
        trace!("reducing expression of {len} elements");

        let mut acc = Acc::default();
        for i in 0..len {
            acc = self.op.apply(acc, self.expr.at(i));
        }
        acc
    }

    pub fn source(&self) -> &E {
        &self.expr
    }
}

/// Evaluate a reduction, same as [`Reduction::eval`].
pub fn evaluate<E, Op, Acc>(reduction: &Reduction<E, Op, Acc>) -> Acc
where
    E: Expression,
    Op: BinaryOp<Acc, E::Elem, Output = Acc>,
    Acc: Default,
{
    reduction.eval()
}

/// The pending dot product of two expressions: their element-wise product, reduced with addition.
///
/// ```rust
/// use lazyvec::{dot_product, evaluate, seq, Sequence};
///
/// let a: Sequence<i32> = seq![1, 2, 3];
/// let b: Sequence<i32> = seq![4, 5, 6];
///
/// let product = dot_product(&a, &b).unwrap();
/// assert_eq!(evaluate(&product), 32);
/// ```
pub fn dot_product<L, R, T>(lhs: L, rhs: R) -> Result<Reduction<Binary<L, R, Times>, Plus, T>>
where
    L: Expression<Elem = T>,
    R: Expression<Elem = T>,
    T: Mul<Output = T> + Add<Output = T> + Default,
{
    Ok(Reduction::new(Binary::new(lhs, rhs, Times)?, Plus))
}

/// Compute the dot product of two expressions right away.
pub fn dot<L, R, T>(lhs: L, rhs: R) -> Result<T>
where
    L: Expression<Elem = T>,
    R: Expression<Elem = T>,
    T: Mul<Output = T> + Add<Output = T> + Default,
{
    Ok(dot_product(lhs, rhs)?.eval())
}

/// Running-prefix fold: element `i` is the fold of source elements `0..=i`.
///
/// Each read folds its whole prefix again, so reading every element costs `O(len²)` operator
/// applications. Materialize it once if the prefixes are needed repeatedly.
#[derive(Debug, Clone, Copy)]
pub struct Scan<E, Op, Acc> {
    expr: E,
    op: Op,
    _acc: PhantomData<fn() -> Acc>,
}

impl<E, Op, Acc> Scan<E, Op, Acc>
where
    E: Expression,
    Op: BinaryOp<Acc, E::Elem, Output = Acc>,
    Acc: Default,
{
    pub fn new(expr: E, op: Op) -> Self {
        Self {
            expr,
            op,
            _acc: PhantomData,
        }
    }
}

impl<E, Op, Acc> Expression for Scan<E, Op, Acc>
where
    E: Expression,
    Op: BinaryOp<Acc, E::Elem, Output = Acc>,
    Acc: Default,
{
    type Elem = Acc;

    #[inline(always)]
    fn len(&self) -> usize {
        self.expr.len()
    }

    fn at(&self, index: usize) -> Acc {
        (0..=index).fold(Acc::default(), |acc, i| self.op.apply(acc, self.expr.at(i)))
    }
}
