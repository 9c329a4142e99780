//! Construction-time simplification.
//!
//! Every operator constructor of [`Sx`] goes through one function of this module before a
//! node is allocated. Each function is a fixed list of local pattern matches tried in order;
//! the first one that fires returns an already existing node (or a node it is allowed to
//! build, such as the negation in `0 - x`) and nothing else is allocated. A rule never
//! builds intermediate nodes that do not end up in the result.
//!
//! Constant folding is always the last check before allocation. The identity rules keep
//! precedence over it, which is observable for degenerate operands: `1/0` is NaN through
//! the zero-divisor rule rather than `+inf` through folding.
//!
//! Operand equality inside a rule is decided by the bounded equivalence check at
//! [`DEFAULT_EQUIVALENCE_DEPTH`](crate::magic::DEFAULT_EQUIVALENCE_DEPTH).
use log::trace;

use crate::{operation::Operation, sx::Sx};

pub(crate) mod arith;
pub(crate) mod compare;
pub(crate) mod unary;

/// Value of `op(x)` when `x` is a constant and `op` has a numeric definition.
pub(crate) fn fold_unary(op: Operation, x: &Sx) -> Option<Sx> {
    let value = op.fold(x.const_value()?, f64::NAN)?;
    Some(folded(op, value))
}

/// Value of `op(x, y)` when both operands are constants and `op` has a numeric definition.
pub(crate) fn fold_binary(op: Operation, x: &Sx, y: &Sx) -> Option<Sx> {
    let value = op.fold(x.const_value()?, y.const_value()?)?;
    Some(folded(op, value))
}

fn folded(op: Operation, value: f64) -> Sx {
    if !value.is_finite() {
        trace!("Folding `{op}` produced the non-finite value {value}.");
    }
    Sx::constant(value)
}

/// Fold when possible, otherwise allocate the unary node.
pub(crate) fn unary_or_fold(op: Operation, x: &Sx) -> Sx {
    fold_unary(op, x).unwrap_or_else(|| Sx::new_unary(op, x))
}

/// Fold when possible, otherwise allocate the binary node.
pub(crate) fn binary_or_fold(op: Operation, x: &Sx, y: &Sx) -> Sx {
    fold_binary(op, x, y).unwrap_or_else(|| Sx::new_binary(op, x, y))
}
