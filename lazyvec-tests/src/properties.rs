//! Element-wise laws every lazy expression must obey, checked against plain `Vec` arithmetic.
use lazyvec::{dot, evaluate, ops, seq, Error, Expression, ExpressionExt, Sequence};
use proptest::collection::vec;
use proptest::prelude::*;

fn arb_values(len: usize) -> impl Strategy<Value = Vec<i32>> {
    vec(any::<i16>().prop_map(i32::from), len)
}

fn arb_nonzero(len: usize) -> impl Strategy<Value = Vec<i32>> {
    vec(
        any::<i16>()
            .prop_filter("non-zero divisor", |x| *x != 0)
            .prop_map(i32::from),
        len,
    )
}

fn arb_pair() -> impl Strategy<Value = (Vec<i32>, Vec<i32>)> {
    (0usize..32).prop_flat_map(|len| (arb_values(len), arb_values(len)))
}

fn arb_triple() -> impl Strategy<Value = (Vec<i32>, Vec<i32>, Vec<i32>)> {
    (0usize..32).prop_flat_map(|len| (arb_values(len), arb_values(len), arb_values(len)))
}

fn elementwise(a: &[i32], b: &[i32], f: impl Fn(i32, i32) -> i32) -> Vec<i32> {
    a.iter().zip(b).map(|(x, y)| f(*x, *y)).collect()
}

proptest! {
    #[test]
    fn elementwise_arithmetic((a, b) in arb_pair()) {
        let (sa, sb) = (Sequence::from(a.clone()), Sequence::from(b.clone()));

        prop_assert_eq!((&sa + &sb).materialize().into_vec(), elementwise(&a, &b, |x, y| x + y));
        prop_assert_eq!((&sa - &sb).materialize().into_vec(), elementwise(&a, &b, |x, y| x - y));
        prop_assert_eq!((&sa * &sb).materialize().into_vec(), elementwise(&a, &b, |x, y| x * y));
    }

    #[test]
    fn elementwise_division(
        (a, b) in (0usize..32).prop_flat_map(|len| (arb_values(len), arb_nonzero(len)))
    ) {
        let (sa, sb) = (Sequence::from(a.clone()), Sequence::from(b.clone()));

        prop_assert_eq!((&sa / &sb).materialize().into_vec(), elementwise(&a, &b, |x, y| x / y));
    }

    #[test]
    fn scalar_distribution(a in (0usize..32).prop_flat_map(arb_values), s in -100i32..100) {
        let sa = Sequence::from(a.clone());

        let right: Vec<i32> = a.iter().map(|x| x * s).collect();
        let left: Vec<i32> = a.iter().map(|x| s * x).collect();
        prop_assert_eq!((&sa * s).materialize().into_vec(), right.clone());
        prop_assert_eq!((s * &sa).materialize().into_vec(), left);
        prop_assert_eq!(ops::scale(&sa, s).materialize().into_vec(), right);

        if s != 0 {
            let quotient: Vec<i32> = a.iter().map(|x| x / s).collect();
            prop_assert_eq!((&sa / s).materialize().into_vec(), quotient.clone());
            prop_assert_eq!(ops::divide(&sa, s).materialize().into_vec(), quotient);
        }
    }

    #[test]
    fn addition_associates((a, b, c) in arb_triple()) {
        let (sa, sb, sc) = (Sequence::from(a), Sequence::from(b), Sequence::from(c));

        let left_first = ((&sa + &sb) + &sc).materialize();
        let right_first = (&sa + (&sb + &sc)).materialize();
        prop_assert_eq!(left_first, right_first);
    }

    #[test]
    fn mismatched_shapes_are_rejected(lhs_len in 0usize..16, rhs_len in 0usize..16) {
        prop_assume!(lhs_len != rhs_len);
        let a: Sequence<i32> = Sequence::from_elem(lhs_len, 1);
        let b: Sequence<i32> = Sequence::from_elem(rhs_len, 1);
        let expected = Error::ShapeMismatch { lhs: lhs_len, rhs: rhs_len };

        prop_assert_eq!(ops::add(&a, &b).err(), Some(expected));
        prop_assert_eq!(ops::sub(&a, &b).err(), Some(expected));
        prop_assert_eq!(ops::mul(&a, &b).err(), Some(expected));
        prop_assert_eq!(ops::div(&a, &b).err(), Some(expected));
        prop_assert_eq!(dot(&a, &b).err(), Some(expected));
    }

    #[test]
    fn sources_are_untouched((a, b) in arb_pair()) {
        let (sa, sb) = (Sequence::from(a.clone()), Sequence::from(b.clone()));
        let mut dest: Sequence<i32> = seq![42; 3];

        dest.assign((&sa - &sb) * 2_i32);

        prop_assert_eq!(dest.len(), a.len());
        prop_assert_eq!(sa.into_vec(), a);
        prop_assert_eq!(sb.into_vec(), b);
    }

    #[test]
    fn reduction_matches_iterator_sum(a in (0usize..64).prop_flat_map(arb_values)) {
        let sa = Sequence::from(a.clone());
        let expected: i64 = a.iter().map(|x| i64::from(*x)).sum();

        let widened = sa.map(i64::from);
        prop_assert_eq!(widened.sum(), expected);
        prop_assert_eq!(evaluate(&widened.reduce::<i64, _>(lazyvec::functor::Plus)), expected);
    }

    #[test]
    fn float_reduction_is_left_to_right(a in vec(-1.0e6f64..1.0e6, 0..64)) {
        let sa = Sequence::from(a.clone());
        let expected = a.iter().fold(0.0, |acc, x| acc + x);

        // bitwise equal, not approximately: the fold order is fixed
        prop_assert_eq!(sa.sum().to_bits(), expected.to_bits());
    }

    #[test]
    fn dot_matches_iterator((a, b) in arb_pair()) {
        let (sa, sb) = (Sequence::from(a.clone()), Sequence::from(b.clone()));
        let wide_a = sa.map(i64::from);
        let wide_b = sb.map(i64::from);
        let expected: i64 = a.iter().zip(&b).map(|(x, y)| i64::from(*x) * i64::from(*y)).sum();

        prop_assert_eq!(dot(wide_a, wide_b), Ok(expected));
    }

    #[test]
    fn concat_matches_vec_concat(
        a in (0usize..16).prop_flat_map(arb_values),
        b in (0usize..16).prop_flat_map(arb_values),
    ) {
        let (sa, sb) = (Sequence::from(a.clone()), Sequence::from(b.clone()));
        let joined = sa.concat(&sb);

        prop_assert_eq!(joined.len(), a.len() + b.len());
        prop_assert_eq!(joined.materialize().into_vec(), [a, b].concat());
    }
}

#[test]
fn sum_of_small_sequence() {
    let a: Sequence<i32> = seq![1, 2, 3, 4];
    assert_eq!(a.sum(), 10);

    let empty: Sequence<i32> = seq![];
    assert_eq!(empty.sum(), 0);
}

#[test]
fn dot_product_example() {
    let a: Sequence<i32> = seq![1, 2, 3];
    let b: Sequence<i32> = seq![4, 5, 6];

    assert_eq!(dot(&a, &b), Ok(32));
}

#[test]
fn rescale_in_place_with_integer_truncation() {
    let mut a: Sequence<i32> = seq![1, 9, -8, 5, 2, 9, 0];
    a = ((3_i32 * &a) / 2_i32).materialize();

    assert_eq!(a, seq![1, 13, -12, 7, 3, 13, 0]);
}

#[test]
fn nodes_are_readable_without_materializing() {
    let a: Sequence<i32> = seq![2, 4, 6];
    let b: Sequence<i32> = seq![1, 1, 1];
    let e = (&a - &b) * 10_i32;

    assert_eq!(e.len(), 3);
    assert_eq!(e.at(1), 30);
    assert_eq!(e.checked_at(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
}
