pub mod eval;
pub mod naive;

/// Simple expression language over a fixed set of equal-length integer sequences.
///
/// Every variant keeps the shape of its operands, so any tree built from leaves of one length
/// evaluates to a sequence of that same length.
#[derive(Debug, Clone)]
pub enum SeqExpr {
    /// index into the set of leaf sequences
    Leaf(usize),
    Add(Box<SeqExpr>, Box<SeqExpr>),
    Sub(Box<SeqExpr>, Box<SeqExpr>),
    Mul(Box<SeqExpr>, Box<SeqExpr>),
    Scale(Box<SeqExpr>, i64),
    Neg(Box<SeqExpr>),
}

impl SeqExpr {
    pub fn depth(&self) -> usize {
        match self {
            SeqExpr::Leaf(_) => 1,
            SeqExpr::Add(a, b) | SeqExpr::Sub(a, b) | SeqExpr::Mul(a, b) => {
                1 + a.depth().max(b.depth())
            }
            SeqExpr::Scale(a, _) | SeqExpr::Neg(a) => 1 + a.depth(),
        }
    }
}
