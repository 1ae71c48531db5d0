use crate::expr::SeqExpr;
#[cfg(test)]
use crate::expr::naive::{arb_expr, arb_leaves, naive_eval};
use lazyvec::{Expression, ExpressionExt, Sequence};
#[cfg(test)]
use proptest::prelude::*;

/// A lazy expression whose shape is only known at runtime.
pub type BoxedExpr<'a> = Box<dyn Expression<Elem = i64> + 'a>;

/// Build the lazy counterpart of `expr`, borrowing `leaves`. No element is computed here.
pub fn build_lazy<'a>(expr: &SeqExpr, leaves: &'a [Sequence<i64>]) -> lazyvec::Result<BoxedExpr<'a>> {
    let lazy: BoxedExpr<'a> = match expr {
        SeqExpr::Leaf(i) => Box::new(&leaves[*i]),
        SeqExpr::Add(a, b) => Box::new(
            build_lazy(a, leaves)?.zip_with(build_lazy(b, leaves)?, i64::wrapping_add)?,
        ),
        SeqExpr::Sub(a, b) => Box::new(
            build_lazy(a, leaves)?.zip_with(build_lazy(b, leaves)?, i64::wrapping_sub)?,
        ),
        SeqExpr::Mul(a, b) => Box::new(
            build_lazy(a, leaves)?.zip_with(build_lazy(b, leaves)?, i64::wrapping_mul)?,
        ),
        SeqExpr::Scale(a, s) => {
            let s = *s;
            Box::new(build_lazy(a, leaves)?.map(move |x| x.wrapping_mul(s)))
        }
        SeqExpr::Neg(a) => Box::new(build_lazy(a, leaves)?.map(i64::wrapping_neg)),
    };
    Ok(lazy)
}

pub fn eval_lazy(expr: &SeqExpr, leaves: &[Sequence<i64>]) -> lazyvec::Result<Sequence<i64>> {
    Ok(build_lazy(expr, leaves)?.materialize())
}

#[cfg(test)]
fn to_sequences(leaves: &[Vec<i64>]) -> Vec<Sequence<i64>> {
    leaves.iter().map(|l| Sequence::from(&l[..])).collect()
}

#[cfg(test)]
#[test]
fn mismatched_leaves_are_rejected() {
    let leaves = vec![Sequence::from(vec![1, 2, 3]), Sequence::from(vec![1, 2])];
    let expr = SeqExpr::Add(Box::new(SeqExpr::Leaf(0)), Box::new(SeqExpr::Leaf(1)));

    assert_eq!(
        eval_lazy(&expr, &leaves).unwrap_err(),
        lazyvec::Error::ShapeMismatch { lhs: 3, rhs: 2 }
    );
}

// generate a bunch of expression trees and evaluate them both ways
#[cfg(test)]
proptest! {
    #[test]
    fn lazy_matches_naive(expr in arb_expr(), leaves in arb_leaves()) {
        let expected = naive_eval(&expr, &leaves);
        let sequences = to_sequences(&leaves);

        let lazy = build_lazy(&expr, &sequences).unwrap();
        prop_assert_eq!(lazy.len(), expected.len());

        let materialized = Sequence::materialize(&lazy);
        prop_assert_eq!(materialized.as_slice(), &expected[..]);

        // random access agrees with the full walk, from either end
        for (i, x) in expected.iter().enumerate() {
            prop_assert_eq!(lazy.at(i), *x);
        }
        let reversed: Vec<i64> = lazy.elements().rev().collect();
        let mut expected_reversed = expected.clone();
        expected_reversed.reverse();
        prop_assert_eq!(reversed, expected_reversed);

        // evaluation never touches the leaves
        prop_assert_eq!(&to_sequences(&leaves), &sequences);
    }
}
