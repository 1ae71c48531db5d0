use thiserror::Error;

/// Failures surfaced while composing or reading expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// Two expressions combined element-wise have different lengths.
    #[error(
        "Cannot combine expressions element-wise: the left operand has {lhs} elements but the right operand has {rhs}."
    )]
    ShapeMismatch { lhs: usize, rhs: usize },

    /// A checked read past the end of an expression.
    #[error("Index {index} is out of range for an expression of {len} elements.")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
