//! Elementary functions.
use crate::{
    operation::Operation,
    rules::{arith, binary_or_fold, unary_or_fold},
    sx::Sx,
};

/// Functions vanishing at zero: `sin`, `tan`, `sinh`, `tanh`, `erf` and `erfinv`.
fn odd_at_zero(op: Operation, x: &Sx) -> Sx {
    if x.is_zero() {
        return Sx::zero();
    }
    unary_or_fold(op, x)
}

/// Functions equal to one at zero: `cos` and `cosh`.
fn one_at_zero(op: Operation, x: &Sx) -> Sx {
    if x.is_zero() {
        return Sx::one();
    }
    unary_or_fold(op, x)
}

pub(crate) fn sin(x: &Sx) -> Sx {
    odd_at_zero(Operation::Sin, x)
}

pub(crate) fn cos(x: &Sx) -> Sx {
    one_at_zero(Operation::Cos, x)
}

pub(crate) fn tan(x: &Sx) -> Sx {
    odd_at_zero(Operation::Tan, x)
}

pub(crate) fn sinh(x: &Sx) -> Sx {
    odd_at_zero(Operation::Sinh, x)
}

pub(crate) fn cosh(x: &Sx) -> Sx {
    one_at_zero(Operation::Cosh, x)
}

pub(crate) fn tanh(x: &Sx) -> Sx {
    odd_at_zero(Operation::Tanh, x)
}

pub(crate) fn erf(x: &Sx) -> Sx {
    odd_at_zero(Operation::Erf, x)
}

pub(crate) fn erfinv(x: &Sx) -> Sx {
    odd_at_zero(Operation::Erfinv, x)
}

pub(crate) fn sqrt(x: &Sx) -> Sx {
    if x.is_one() || x.is_zero() {
        return x.clone();
    }
    // sqrt(z * z) = |z|
    if x.is_squared() {
        if let Some([z, _]) = x.as_op(Operation::Mul) {
            return fabs(z);
        }
    }
    unary_or_fold(Operation::Sqrt, x)
}

pub(crate) fn fabs(x: &Sx) -> Sx {
    if x.const_value().is_some_and(|v| v >= 0.0) {
        return x.clone();
    }
    if x.is_op(Operation::Fabs) || x.is_squared() {
        return x.clone();
    }
    unary_or_fold(Operation::Fabs, x)
}

pub(crate) fn sign(x: &Sx) -> Sx {
    unary_or_fold(Operation::Sign, x)
}

/// `floor` and `ceil` leave integer constants untouched.
fn rounding(op: Operation, x: &Sx) -> Sx {
    if x.is_integer() {
        return x.clone();
    }
    unary_or_fold(op, x)
}

pub(crate) fn floor(x: &Sx) -> Sx {
    rounding(Operation::Floor, x)
}

pub(crate) fn ceil(x: &Sx) -> Sx {
    rounding(Operation::Ceil, x)
}

pub(crate) fn exp(x: &Sx) -> Sx {
    unary_or_fold(Operation::Exp, x)
}

pub(crate) fn log(x: &Sx) -> Sx {
    unary_or_fold(Operation::Log, x)
}

pub(crate) fn log10(x: &Sx) -> Sx {
    arith::mul(&log(x), &Sx::constant(std::f64::consts::LOG10_E))
}

pub(crate) fn asin(x: &Sx) -> Sx {
    unary_or_fold(Operation::Asin, x)
}

pub(crate) fn acos(x: &Sx) -> Sx {
    unary_or_fold(Operation::Acos, x)
}

pub(crate) fn atan(x: &Sx) -> Sx {
    unary_or_fold(Operation::Atan, x)
}

/// `fmin` and `fmax` of a node with itself.
fn extremum(op: Operation, x: &Sx, y: &Sx) -> Sx {
    if x.is_equal(y) {
        return x.clone();
    }
    binary_or_fold(op, x, y)
}

pub(crate) fn fmin(x: &Sx, y: &Sx) -> Sx {
    extremum(Operation::Fmin, x, y)
}

pub(crate) fn fmax(x: &Sx, y: &Sx) -> Sx {
    extremum(Operation::Fmax, x, y)
}

/// Never folded: evaluating the node has a side effect.
pub(crate) fn printme(x: &Sx, y: &Sx) -> Sx {
    Sx::new_binary(Operation::Printme, x, y)
}
