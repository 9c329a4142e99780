//! Named constructors on [`Sx`].
//!
//! Every method returns either an existing node, when a simplification rule applies, or a
//! single freshly allocated operator node.
use crate::{
    rules::{arith, compare, unary},
    sx::Sx,
};

impl Sx {
    /// Reciprocal `1/x`.
    pub fn inv(&self) -> Sx {
        arith::inv(self)
    }

    /// `x^n`. Constant integer exponents are expanded into products, see [`Sx::powi`].
    pub fn pow(&self, n: &Sx) -> Sx {
        arith::pow(self, n)
    }

    /// `x^n` for an integer exponent.
    ///
    /// For `0 < n <= 100` the power is expanded by halving, so `x^n` costs `O(log n)` products.
    /// Negative exponents go through the reciprocal. Larger magnitudes yield a single
    /// constant-power node.
    ///
    /// ```
    /// use sxcore::prelude::*;
    ///
    /// let x = Sx::symbol("x");
    /// assert_eq!(x.powi(4).to_string(), "((x*x)*(x*x))");
    /// assert!(x.powi(0).is_one());
    /// ```
    pub fn powi(&self, n: i64) -> Sx {
        arith::powi(self, n)
    }

    /// `x^n` for a real exponent.
    pub fn powf(&self, n: f64) -> Sx {
        arith::pow(self, &Sx::constant(n))
    }

    /// Constant power node, never expanded.
    pub fn constpow(&self, n: &Sx) -> Sx {
        arith::constpow(self, n)
    }

    pub fn sqrt(&self) -> Sx {
        unary::sqrt(self)
    }

    pub fn exp(&self) -> Sx {
        unary::exp(self)
    }

    /// Natural logarithm.
    pub fn log(&self) -> Sx {
        unary::log(self)
    }

    /// Base 10 logarithm, built as `log(x) * (1/ln 10)`.
    pub fn log10(&self) -> Sx {
        unary::log10(self)
    }

    pub fn sin(&self) -> Sx {
        unary::sin(self)
    }

    pub fn cos(&self) -> Sx {
        unary::cos(self)
    }

    pub fn tan(&self) -> Sx {
        unary::tan(self)
    }

    pub fn asin(&self) -> Sx {
        unary::asin(self)
    }

    pub fn acos(&self) -> Sx {
        unary::acos(self)
    }

    pub fn atan(&self) -> Sx {
        unary::atan(self)
    }

    pub fn sinh(&self) -> Sx {
        unary::sinh(self)
    }

    pub fn cosh(&self) -> Sx {
        unary::cosh(self)
    }

    pub fn tanh(&self) -> Sx {
        unary::tanh(self)
    }

    pub fn floor(&self) -> Sx {
        unary::floor(self)
    }

    pub fn ceil(&self) -> Sx {
        unary::ceil(self)
    }

    /// Error function.
    pub fn erf(&self) -> Sx {
        unary::erf(self)
    }

    /// Inverse error function.
    pub fn erfinv(&self) -> Sx {
        unary::erfinv(self)
    }

    /// Absolute value.
    pub fn fabs(&self) -> Sx {
        unary::fabs(self)
    }

    /// `-1`, `0` or `1`.
    pub fn sign(&self) -> Sx {
        unary::sign(self)
    }

    pub fn fmin(&self, other: &Sx) -> Sx {
        unary::fmin(self, other)
    }

    pub fn fmax(&self, other: &Sx) -> Sx {
        unary::fmax(self, other)
    }

    /// Node evaluating to `self` that prints `other` when evaluated.
    pub fn printme(&self, other: &Sx) -> Sx {
        unary::printme(self, other)
    }

    /// `self >= other`, the only ordering primitive: `step(self - other)`.
    pub fn ge(&self, other: &Sx) -> Sx {
        compare::ge(self, other)
    }

    /// `self <= other`, built as `other >= self`.
    pub fn le(&self, other: &Sx) -> Sx {
        compare::le(self, other)
    }

    /// `self < other`, built as `!(self >= other)`.
    pub fn lt(&self, other: &Sx) -> Sx {
        compare::lt(self, other)
    }

    /// `self > other`, built as `!(self <= other)`.
    pub fn gt(&self, other: &Sx) -> Sx {
        compare::gt(self, other)
    }

    /// Symbolic equality, valued `0` or `1`.
    pub fn equal(&self, other: &Sx) -> Sx {
        compare::equal(self, other)
    }

    /// `!(self == other)`.
    pub fn not_equal(&self, other: &Sx) -> Sx {
        compare::not_equal(self, other)
    }

    /// `1 - self`.
    pub fn logic_not(&self) -> Sx {
        compare::not(self)
    }

    /// `(self + other) >= 2` on truth values.
    pub fn logic_and(&self, other: &Sx) -> Sx {
        compare::and(self, other)
    }

    /// `!(!self && !other)`.
    pub fn logic_or(&self, other: &Sx) -> Sx {
        compare::or(self, other)
    }
}

/// `if_false + (if_true - if_false) * cond` for a condition valued `0` or `1`.
pub fn if_else(cond: &Sx, if_true: &Sx, if_false: &Sx) -> Sx {
    compare::if_else(cond, if_true, if_false)
}
