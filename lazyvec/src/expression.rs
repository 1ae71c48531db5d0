//! The [`Expression`] capability shared by every lazy node, and the [`ExpressionExt`]
//! combinators built on top of it.
use std::iter::FusedIterator;
use std::ops::Add;

use crate::error::{Error, Result};
use crate::functor::{BinaryOp, Divide, DivideBy, FnOp, Minus, Plus, Scale, Times, UnaryOp};
use crate::node::{Binary, Concat, Map};
use crate::reduce::{Reduction, Scan};
use crate::sequence::Sequence;

/// A sized, indexable, read-only view of a pending element-wise computation.
///
/// Nothing is computed when an expression is built. Reading element `i` reads element `i` of
/// every operand and applies the node's operator, so evaluation is demand-driven and per index.
///
/// # Implementing this trait
///
/// Any type with a length and a way to produce the element at an index can take part in an
/// expression, eg a generated ramp that owns no storage at all:
///
/// ```rust
/// use lazyvec::{seq, Expression, ExpressionExt, Sequence};
///
/// struct Ramp(usize);
///
/// impl Expression for Ramp {
///     type Elem = i64;
///
///     fn len(&self) -> usize {
///         self.0
///     }
///
///     fn at(&self, index: usize) -> i64 {
///         index as i64
///     }
/// }
///
/// let weights: Sequence<i64> = seq![10, 20, 30];
/// let weighted = Ramp(3).try_mul(&weights).unwrap();
///
/// assert_eq!(weighted.materialize(), seq![0, 20, 60]);
/// ```
pub trait Expression {
    /// the element type produced by `at`
    type Elem;

    /// Number of elements, the shape of this expression.
    fn len(&self) -> usize;

    /// Compute the element at `index`.
    ///
    /// `index` must be below `len()`. Leaf sequences panic on out-of-range reads; use
    /// [`ExpressionExt::checked_at`] for a fallible read.
    fn at(&self, index: usize) -> Self::Elem;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: Expression + ?Sized> Expression for &E {
    type Elem = E::Elem;

    #[inline(always)]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline(always)]
    fn at(&self, index: usize) -> Self::Elem {
        (**self).at(index)
    }
}

// lets dynamically shaped trees be built from `Box<dyn Expression<Elem = T>>`
impl<E: Expression + ?Sized> Expression for Box<E> {
    type Elem = E::Elem;

    #[inline(always)]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline(always)]
    fn at(&self, index: usize) -> Self::Elem {
        (**self).at(index)
    }
}

/// Iterator pulling each element of an expression through the tree, front to back or back to
/// front.
#[derive(Debug)]
pub struct Elements<'e, E: ?Sized> {
    expr: &'e E,
    front: usize,
    back: usize,
}

impl<'e, E: Expression + ?Sized> Elements<'e, E> {
    pub fn new(expr: &'e E) -> Self {
        Self {
            expr,
            front: 0,
            back: expr.len(),
        }
    }
}

impl<E: Expression + ?Sized> Iterator for Elements<'_, E> {
    type Item = E::Elem;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let elem = self.expr.at(self.front);
            self.front += 1;
            Some(elem)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<E: Expression + ?Sized> DoubleEndedIterator for Elements<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.expr.at(self.back))
        } else {
            None
        }
    }
}

impl<E: Expression + ?Sized> ExactSizeIterator for Elements<'_, E> {}

impl<E: Expression + ?Sized> FusedIterator for Elements<'_, E> {}

/// Combinators available on every [`Expression`].
///
/// Methods taking `self` by value consume a node into a larger one. Sequences enter by reference,
/// so `seq.map(f)` borrows `seq` rather than moving it.
pub trait ExpressionExt: Expression + Sized {
    /// Iterate over the elements, computing each one on demand.
    fn elements(&self) -> Elements<'_, Self> {
        Elements::new(self)
    }

    /// Read element `index`, failing instead of panicking when it is out of range.
    fn checked_at(&self, index: usize) -> Result<Self::Elem> {
        let len = self.len();
        if index < len {
            Ok(self.at(index))
        } else {
            Err(Error::IndexOutOfRange { index, len })
        }
    }

    /// Evaluate every element into a new [`Sequence`].
    fn materialize(&self) -> Sequence<Self::Elem> {
        Sequence::materialize(self)
    }

    /// Apply `f` to each element.
    fn map<O, F: Fn(Self::Elem) -> O>(self, f: F) -> Map<Self, FnOp<F>> {
        Map::new(self, FnOp(f))
    }

    /// Apply a unary operator to each element.
    fn transform<Op: UnaryOp<Self::Elem>>(self, op: Op) -> Map<Self, Op> {
        Map::new(self, op)
    }

    /// Multiply each element by `factor`, the transform encoding of `self * factor`.
    fn scaled<C>(self, factor: C) -> Map<Self, Scale<C>>
    where
        Scale<C>: UnaryOp<Self::Elem>,
    {
        Map::new(self, Scale(factor))
    }

    /// Divide each element by `divisor`, the transform encoding of `self / divisor`.
    fn divided_by<C>(self, divisor: C) -> Map<Self, DivideBy<C>>
    where
        DivideBy<C>: UnaryOp<Self::Elem>,
    {
        Map::new(self, DivideBy(divisor))
    }

    /// Combine with `rhs` element by element using `f`.
    fn zip_with<R, O, F>(self, rhs: R, f: F) -> Result<Binary<Self, R, FnOp<F>>>
    where
        R: Expression,
        F: Fn(Self::Elem, R::Elem) -> O,
    {
        Binary::new(self, rhs, FnOp(f))
    }

    fn try_add<R: Expression>(self, rhs: R) -> Result<Binary<Self, R, Plus>> {
        Binary::new(self, rhs, Plus)
    }

    fn try_sub<R: Expression>(self, rhs: R) -> Result<Binary<Self, R, Minus>> {
        Binary::new(self, rhs, Minus)
    }

    fn try_mul<R: Expression>(self, rhs: R) -> Result<Binary<Self, R, Times>> {
        Binary::new(self, rhs, Times)
    }

    fn try_div<R: Expression>(self, rhs: R) -> Result<Binary<Self, R, Divide>> {
        Binary::new(self, rhs, Divide)
    }

    /// Join `rhs` after the elements of `self`.
    fn concat<R: Expression<Elem = Self::Elem>>(self, rhs: R) -> Concat<Self, R> {
        Concat::new(self, rhs)
    }

    /// Fold the elements left to right with `op`, starting from `Acc::default()`.
    fn reduce<Acc, Op>(self, op: Op) -> Reduction<Self, Op, Acc>
    where
        Acc: Default,
        Op: BinaryOp<Acc, Self::Elem, Output = Acc>,
    {
        Reduction::new(self, op)
    }

    /// Running prefix folds: element `i` is the fold of elements `0..=i`.
    fn scan<Acc, Op>(self, op: Op) -> Scan<Self, Op, Acc>
    where
        Acc: Default,
        Op: BinaryOp<Acc, Self::Elem, Output = Acc>,
    {
        Scan::new(self, op)
    }

    /// Sum of all elements; the default value when empty.
    fn sum(&self) -> Self::Elem
    where
        Self::Elem: Add<Output = Self::Elem> + Default,
    {
        Reduction::<_, _, Self::Elem>::new(self, Plus).eval()
    }
}

impl<E: Expression> ExpressionExt for E {}
