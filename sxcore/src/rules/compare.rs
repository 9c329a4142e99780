//! Comparisons and logic.
//!
//! Only two comparison operators exist in the graph: [`Operation::Step`] (`x >= 0`) and
//! [`Operation::Equality`]. Everything else is derived from them with arithmetic, truth
//! values being the constants `0` and `1`:
//!
//! | expression | built as                |
//! |------------|-------------------------|
//! | `a >= b`   | `step(a - b)`           |
//! | `a <= b`   | `b >= a`                |
//! | `a < b`    | `!(a >= b)`             |
//! | `a > b`    | `!(a <= b)`             |
//! | `a != b`   | `!(a == b)`             |
//! | `!a`       | `1 - a`                 |
//! | `a && b`   | `(a + b) >= 2`          |
//! | `a \|\| b` | `!(!a && !b)`           |
//!
//! `!!a` collapses back to `a` through the `x - (x - z) = z` subtraction rule.
use crate::{
    operation::Operation,
    rules::arith::{add, mul, sub},
    sx::Sx,
};

pub(crate) fn ge(a: &Sx, b: &Sx) -> Sx {
    let x = sub(a, b);
    if x.is_squared() || x.is_op(Operation::Fabs) {
        return Sx::one();
    }
    if let Some(v) = x.const_value() {
        return Sx::from(v >= 0.0);
    }
    Sx::new_unary(Operation::Step, &x)
}

pub(crate) fn le(a: &Sx, b: &Sx) -> Sx {
    ge(b, a)
}

pub(crate) fn lt(a: &Sx, b: &Sx) -> Sx {
    not(&ge(a, b))
}

pub(crate) fn gt(a: &Sx, b: &Sx) -> Sx {
    not(&le(a, b))
}

/// Identity-equal operands are equal (this includes equal constants), distinct constants
/// are not.
pub(crate) fn equal(a: &Sx, b: &Sx) -> Sx {
    if a.is_equal(b) {
        return Sx::one();
    }
    if a.is_constant() && b.is_constant() {
        return Sx::zero();
    }
    Sx::new_binary(Operation::Equality, a, b)
}

pub(crate) fn not_equal(a: &Sx, b: &Sx) -> Sx {
    not(&equal(a, b))
}

pub(crate) fn not(a: &Sx) -> Sx {
    sub(&Sx::one(), a)
}

pub(crate) fn and(a: &Sx, b: &Sx) -> Sx {
    ge(&add(a, b), &Sx::two())
}

pub(crate) fn or(a: &Sx, b: &Sx) -> Sx {
    not(&and(&not(a), &not(b)))
}

/// `if_false + (if_true - if_false) * cond`, for a condition valued `0` or `1`.
pub(crate) fn if_else(cond: &Sx, if_true: &Sx, if_false: &Sx) -> Sx {
    add(if_false, &mul(&sub(if_true, if_false), cond))
}
