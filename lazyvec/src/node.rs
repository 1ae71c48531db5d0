//! The expression node family.
//!
//! Every node is an immutable view over its operands plus an operator. Leaf sequences are held by
//! reference, so a node can never outlive the storage it reads; nested nodes are held by value.
use log::debug;

use crate::error::{Error, Result};
use crate::expression::Expression;
use crate::functor::{BinaryOp, UnaryOp};

/// `op(lhs[i], rhs[i])` for two expressions of equal length.
#[derive(Debug, Clone, Copy)]
pub struct Binary<L, R, Op> {
    lhs: L,
    rhs: R,
    op: Op,
}

impl<L: Expression, R: Expression, Op> Binary<L, R, Op> {
    /// Combine `lhs` and `rhs` element-wise, failing if their lengths differ.
    pub fn new(lhs: L, rhs: R, op: Op) -> Result<Self> {
        let (lhs_len, rhs_len) = (lhs.len(), rhs.len());
        if lhs_len != rhs_len {
            debug!("rejecting element-wise combination of {lhs_len} and {rhs_len} elements");
            return Err(Error::ShapeMismatch {
                lhs: lhs_len,
                rhs: rhs_len,
            });
        }
        Ok(Self { lhs, rhs, op })
    }
}

impl<L, R, Op> Binary<L, R, Op> {
    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    pub fn rhs(&self) -> &R {
        &self.rhs
    }
}

impl<L, R, Op> Expression for Binary<L, R, Op>
where
    L: Expression,
    R: Expression,
    Op: BinaryOp<L::Elem, R::Elem>,
{
    type Elem = Op::Output;

    // both operands have the same length, rhs is used by convention
    #[inline(always)]
    fn len(&self) -> usize {
        self.rhs.len()
    }

    #[inline(always)]
    fn at(&self, index: usize) -> Self::Elem {
        self.op.apply(self.lhs.at(index), self.rhs.at(index))
    }
}

/// `op(scalar, expr[i])`
#[derive(Debug, Clone, Copy)]
pub struct ScalarLeft<S, E, Op> {
    scalar: S,
    expr: E,
    op: Op,
}

impl<S, E, Op> ScalarLeft<S, E, Op> {
    pub fn new(scalar: S, expr: E, op: Op) -> Self {
        Self { scalar, expr, op }
    }
}

impl<S, E, Op> Expression for ScalarLeft<S, E, Op>
where
    S: Clone,
    E: Expression,
    Op: BinaryOp<S, E::Elem>,
{
    type Elem = Op::Output;

    #[inline(always)]
    fn len(&self) -> usize {
        self.expr.len()
    }

    #[inline(always)]
    fn at(&self, index: usize) -> Self::Elem {
        self.op.apply(self.scalar.clone(), self.expr.at(index))
    }
}

/// `op(expr[i], scalar)`
#[derive(Debug, Clone, Copy)]
pub struct ScalarRight<E, S, Op> {
    expr: E,
    scalar: S,
    op: Op,
}

impl<E, S, Op> ScalarRight<E, S, Op> {
    pub fn new(expr: E, scalar: S, op: Op) -> Self {
        Self { expr, scalar, op }
    }
}

impl<E, S, Op> Expression for ScalarRight<E, S, Op>
where
    E: Expression,
    S: Clone,
    Op: BinaryOp<E::Elem, S>,
{
    type Elem = Op::Output;

    #[inline(always)]
    fn len(&self) -> usize {
        self.expr.len()
    }

    #[inline(always)]
    fn at(&self, index: usize) -> Self::Elem {
        self.op.apply(self.expr.at(index), self.scalar.clone())
    }
}

/// `op(expr[i])`, a unary transform.
///
/// Scalar multiply and divide can be expressed either as a scalar node or as a transform with the
/// scalar bound into the operator (see [`crate::functor::Scale`]); both read the same elements.
#[derive(Debug, Clone, Copy)]
pub struct Map<E, Op> {
    expr: E,
    op: Op,
}

impl<E, Op> Map<E, Op> {
    pub fn new(expr: E, op: Op) -> Self {
        Self { expr, op }
    }
}

impl<E, Op> Expression for Map<E, Op>
where
    E: Expression,
    Op: UnaryOp<E::Elem>,
{
    type Elem = Op::Output;

    #[inline(always)]
    fn len(&self) -> usize {
        self.expr.len()
    }

    #[inline(always)]
    fn at(&self, index: usize) -> Self::Elem {
        self.op.apply(self.expr.at(index))
    }
}

/// The elements of `lhs` followed by the elements of `rhs`.
#[derive(Debug, Clone, Copy)]
pub struct Concat<L, R> {
    lhs: L,
    rhs: R,
}

impl<L, R> Concat<L, R> {
    pub fn new(lhs: L, rhs: R) -> Self {
        Self { lhs, rhs }
    }
}

impl<L, R> Expression for Concat<L, R>
where
    L: Expression,
    R: Expression<Elem = L::Elem>,
{
    type Elem = L::Elem;

    #[inline(always)]
    fn len(&self) -> usize {
        self.lhs.len() + self.rhs.len()
    }

    #[inline]
    fn at(&self, index: usize) -> Self::Elem {
        let split = self.lhs.len();
        if index < split {
            self.lhs.at(index)
        } else {
            self.rhs.at(index - split)
        }
    }
}
