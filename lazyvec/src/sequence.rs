//! [`Sequence`], the dense owned container at the leaves of every expression.
use std::fmt;
use std::ops::{Add, Index, IndexMut};

use log::trace;

use crate::expression::{Expression, ExpressionExt};

/// Dense, contiguous, zero-indexed storage. The only type in this crate that owns elements.
///
/// A sequence takes part in expressions by reference: `&a + &b` builds a lazy node that borrows
/// both sequences, and the borrow checker keeps them alive and unmodified for as long as that
/// node exists. Copies are always deep and always explicit (`clone`); evaluating an expression
/// into a sequence goes through [`Sequence::materialize`] or [`Sequence::assign`].
///
/// ```rust
/// use lazyvec::{seq, ExpressionExt, Sequence};
///
/// let mut a: Sequence<i32> = seq![1, 9, -8, 5, 2, 9, 0];
/// a = ((3_i32 * &a) / 2_i32).materialize();
///
/// assert_eq!(a, seq![1, 13, -12, 7, 3, 13, 0]);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    elems: Vec<T>,
}

/// Build a [`Sequence`] from a literal list of elements, or from a value and a length.
///
/// ```rust
/// use lazyvec::{seq, Sequence};
///
/// let a: Sequence<u8> = seq![1, 2, 3];
/// let zeros: Sequence<f64> = seq![0.0; 4];
///
/// assert_eq!(a.len(), 3);
/// assert_eq!(zeros.len(), 4);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::Sequence::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Sequence::from(vec![$($x),+])
    };
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self { elems: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elems: Vec::with_capacity(capacity),
        }
    }

    /// Evaluate every element of `expr`, in ascending index order, into a new sequence.
    pub fn materialize<E: Expression<Elem = T>>(expr: E) -> Self {
        let len = expr.len();
        trace!("materializing expression of {len} elements");

        let mut elems = Vec::with_capacity(len);
        elems.extend((0..len).map(|i| expr.at(i)));
        Self { elems }
    }

    /// Replace the contents of this sequence with the elements of `expr`.
    ///
    /// The new contents are built completely before the old storage is released, so a panic
    /// while evaluating `expr` leaves `self` untouched. `expr` can't borrow `self`; to rewrite a
    /// sequence in terms of itself, materialize first: `a = (&a * 2).materialize()`.
    pub fn assign<E: Expression<Elem = T>>(&mut self, expr: E) {
        let mut tmp = Self::materialize(expr);
        self.swap(&mut tmp);
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.elems.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.elems.get_mut(index)
    }

    /// Append an element at the end.
    pub fn push(&mut self, value: T) {
        self.elems.push(value)
    }

    /// Exchange storage with `other` without copying any elements.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.elems, &mut other.elems)
    }

    /// Iterate front to back; `.rev()` iterates back to front.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elems.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elems.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elems
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elems
    }
}

impl<T: Clone> Sequence<T> {
    /// A sequence of `len` copies of `value`.
    pub fn from_elem(len: usize, value: T) -> Self {
        Self {
            elems: vec![value; len],
        }
    }

    /// Sum of all elements; the default value when empty.
    pub fn sum(&self) -> T
    where
        T: Add<Output = T> + Default,
    {
        ExpressionExt::sum(&self)
    }
}

impl<T: Default> Sequence<T> {
    /// A sequence of `len` default-initialized elements.
    pub fn with_len(len: usize) -> Self {
        let mut elems = Vec::with_capacity(len);
        elems.resize_with(len, T::default);
        Self { elems }
    }
}

impl<'a, T: Clone> Expression for &'a Sequence<T> {
    type Elem = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.elems.len()
    }

    #[inline(always)]
    fn at(&self, index: usize) -> T {
        self.elems[index].clone()
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.elems[index]
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elems[index]
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elems: Vec<T>) -> Self {
        Self { elems }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(elems: [T; N]) -> Self {
        Self {
            elems: elems.into(),
        }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(elems: &[T]) -> Self {
        Self {
            elems: elems.to_vec(),
        }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(seq: Sequence<T>) -> Self {
        seq.elems
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elems: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elems.extend(iter)
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter_mut()
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.elems
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elems.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, elem) in self.elems.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        f.write_str("]")
    }
}
