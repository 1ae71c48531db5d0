use crate::expr::SeqExpr;
use proptest::collection::vec;
use proptest::prelude::*;

/// number of leaf sequences every generated expression can refer to
pub const LEAVES: usize = 3;

/// Eager reference evaluation: every node allocates its full result before its parent runs.
/// Arithmetic wraps so that arbitrarily deep products can't overflow.
pub fn naive_eval(expr: &SeqExpr, leaves: &[Vec<i64>]) -> Vec<i64> {
    match expr {
        SeqExpr::Leaf(i) => leaves[*i].clone(),
        SeqExpr::Add(a, b) => zip(naive_eval(a, leaves), naive_eval(b, leaves), i64::wrapping_add),
        SeqExpr::Sub(a, b) => zip(naive_eval(a, leaves), naive_eval(b, leaves), i64::wrapping_sub),
        SeqExpr::Mul(a, b) => zip(naive_eval(a, leaves), naive_eval(b, leaves), i64::wrapping_mul),
        SeqExpr::Scale(a, s) => naive_eval(a, leaves)
            .into_iter()
            .map(|x| x.wrapping_mul(*s))
            .collect(),
        SeqExpr::Neg(a) => naive_eval(a, leaves)
            .into_iter()
            .map(i64::wrapping_neg)
            .collect(),
    }
}

fn zip(a: Vec<i64>, b: Vec<i64>, f: fn(i64, i64) -> i64) -> Vec<i64> {
    assert_eq!(a.len(), b.len());
    a.into_iter().zip(b).map(|(x, y)| f(x, y)).collect()
}

/// `LEAVES` sequences sharing one random length.
pub fn arb_leaves() -> impl Strategy<Value = Vec<Vec<i64>>> {
    (0usize..24).prop_flat_map(|len| vec(vec(any::<i16>().prop_map(i64::from), len), LEAVES))
}

pub fn arb_expr() -> impl Strategy<Value = SeqExpr> {
    let leaf = (0..LEAVES).prop_map(SeqExpr::Leaf);
    leaf.prop_recursive(
        6,  // 6 levels deep
        64, // Shoot for maximum size of 64 nodes
        2,  // binary nodes at most
        |inner| {
            prop_oneof![
                (inner.clone(), inner.clone())
                    .prop_map(|(a, b)| SeqExpr::Add(Box::new(a), Box::new(b))),
                (inner.clone(), inner.clone())
                    .prop_map(|(a, b)| SeqExpr::Sub(Box::new(a), Box::new(b))),
                (inner.clone(), inner.clone())
                    .prop_map(|(a, b)| SeqExpr::Mul(Box::new(a), Box::new(b))),
                (inner.clone(), any::<i8>())
                    .prop_map(|(a, s)| SeqExpr::Scale(Box::new(a), i64::from(s))),
                inner.prop_map(|a| SeqExpr::Neg(Box::new(a))),
            ]
        },
    )
}

/// A left-leaning chain of additions over leaf 0, `depth` nodes deep.
pub fn addition_chain(depth: usize) -> SeqExpr {
    (1..depth).fold(SeqExpr::Leaf(0), |acc, _| {
        SeqExpr::Add(Box::new(acc), Box::new(SeqExpr::Leaf(0)))
    })
}
