//! Lazy element-wise arithmetic over dense sequences.
//!
//! Arithmetic on [`Sequence`]s builds a tree of lightweight [`Expression`] nodes instead of
//! computing anything. Elements are only computed when the tree is materialized into a new
//! sequence, reduced to a single value, or indexed, and no intermediate sequence is ever
//! allocated along the way.
//!
//! ```rust
//! use lazyvec::{dot, seq, Expression, ExpressionExt, Sequence};
//!
//! let a: Sequence<i64> = seq![1, 2, 3];
//! let b: Sequence<i64> = seq![4, 5, 6];
//!
//! let expr = &a * &b + 1_i64;
//! assert_eq!(expr.at(2), 19);
//! assert_eq!(expr.materialize(), seq![5, 11, 19]);
//! assert_eq!(dot(&a, &b).unwrap(), 32);
//! ```
//!
//! Nodes borrow the sequences they read, so the compiler rejects any attempt to modify or drop a
//! sequence while an expression over it is still alive.
mod error;
mod expression;
pub mod functor;
pub mod node;
pub mod ops;
mod reduce;
mod sequence;

pub use error::{Error, Result};
pub use expression::{Elements, Expression, ExpressionExt};
pub use node::{Binary, Concat, Map, ScalarLeft, ScalarRight};
pub use reduce::{dot, dot_product, evaluate, Reduction, Scan};
pub use sequence::Sequence;
