//! Arithmetic constructors: negation, the four operations, reciprocal and powers.
use crate::{
    magic::MAX_POW_EXPANSION,
    operation::Operation,
    rules::{binary_or_fold, unary_or_fold},
    sx::Sx,
};

pub(crate) fn neg(x: &Sx) -> Sx {
    if let Some([inner]) = x.as_op(Operation::Neg) {
        return inner.clone();
    }
    if x.is_zero() {
        return Sx::zero();
    }
    if x.is_minus_one() {
        return Sx::one();
    }
    if x.is_one() {
        return Sx::minus_one();
    }
    unary_or_fold(Operation::Neg, x)
}

pub(crate) fn add(x: &Sx, y: &Sx) -> Sx {
    if x.is_zero() {
        return y.clone();
    }
    if y.is_zero() {
        return x.clone();
    }
    // x + (-z) = x - z
    if let Some([z]) = y.as_op(Operation::Neg) {
        return sub(x, z);
    }
    // (-z) + y = y - z
    if let Some([z]) = x.as_op(Operation::Neg) {
        return sub(y, z);
    }
    // 0.5*z + 0.5*z = z
    if let (Some([c, a]), Some([d, b])) = (x.as_op(Operation::Mul), y.as_op(Operation::Mul)) {
        if c.has_value(0.5) && d.has_value(0.5) && b.is_equivalent(a) {
            return a.clone();
        }
    }
    // z/2 + z/2 = z
    if let (Some([a, c]), Some([b, d])) = (x.as_op(Operation::Div), y.as_op(Operation::Div)) {
        if c.has_value(2.0) && d.has_value(2.0) && b.is_equivalent(a) {
            return a.clone();
        }
    }
    binary_or_fold(Operation::Add, x, y)
}

pub(crate) fn sub(x: &Sx, y: &Sx) -> Sx {
    if y.is_zero() {
        return x.clone();
    }
    if x.is_zero() {
        return neg(y);
    }
    if x.is_equivalent(y) {
        return Sx::zero();
    }
    // x - (-z) = x + z
    if let Some([z]) = y.as_op(Operation::Neg) {
        return add(x, z);
    }
    // x - (x - z) = z
    if let Some([a, z]) = y.as_op(Operation::Sub) {
        if a.is_equivalent(x) {
            return z.clone();
        }
    }
    binary_or_fold(Operation::Sub, x, y)
}

pub(crate) fn mul(x: &Sx, y: &Sx) -> Sx {
    // Constants go to the left.
    if !x.is_constant() && y.is_constant() {
        return mul(y, x);
    }
    if x.is_zero() || y.is_zero() {
        return Sx::zero();
    }
    if x.is_one() {
        return y.clone();
    }
    if y.is_one() {
        return x.clone();
    }
    if y.is_minus_one() {
        return neg(x);
    }
    if x.is_minus_one() {
        return neg(y);
    }
    // x * (1/z) = x / z
    if let Some([z]) = y.as_op(Operation::Inv) {
        return div(x, z);
    }
    // (1/z) * y = y / z
    if let Some([z]) = x.as_op(Operation::Inv) {
        return div(y, z);
    }
    if let Some(c) = x.const_value() {
        // c * (d * z) = z when c * d == 1
        if let Some([d, z]) = y.as_op(Operation::Mul) {
            if d.const_value().is_some_and(|d| c * d == 1.0) {
                return z.clone();
            }
        }
        // c * (z / c) = z
        if let Some([z, d]) = y.as_op(Operation::Div) {
            if d.has_value(c) {
                return z.clone();
            }
        }
    }
    // (c / z) * z = c
    if let Some([c, z]) = x.as_op(Operation::Div) {
        if z.is_equivalent(y) {
            return c.clone();
        }
    }
    // x * (c / x) = c
    if let Some([c, z]) = y.as_op(Operation::Div) {
        if z.is_equivalent(x) {
            return c.clone();
        }
    }
    binary_or_fold(Operation::Mul, x, y)
}

/// The zero-divisor rule comes first, so `0/0` is NaN rather than `1`.
pub(crate) fn div(x: &Sx, y: &Sx) -> Sx {
    if y.is_zero() {
        return Sx::nan();
    }
    if x.is_zero() {
        return Sx::zero();
    }
    if y.is_one() {
        return x.clone();
    }
    if x.is_equivalent(y) {
        return Sx::one();
    }
    // (z + z) / 2 = z
    if y.is_two() && x.is_doubled() {
        if let Some([z, _]) = x.as_op(Operation::Add) {
            return z.clone();
        }
    }
    // (a * b) / a = b and (a * b) / b = a
    if let Some([a, b]) = x.as_op(Operation::Mul) {
        if y.is_equivalent(a) {
            return b.clone();
        }
        if y.is_equivalent(b) {
            return a.clone();
        }
    }
    if x.is_one() {
        return inv(y);
    }
    // x / (1/z) = x * z
    if let Some([z]) = y.as_op(Operation::Inv) {
        return mul(x, z);
    }
    // (a + a) / (b + b) = a / b
    if x.is_doubled() && y.is_doubled() {
        if let (Some([a, _]), Some([b, _])) = (x.as_op(Operation::Add), y.as_op(Operation::Add)) {
            return div(a, b);
        }
    }
    // (z / c) / d = z when c * d == 1
    if let (Some(d), Some([z, c])) = (y.const_value(), x.as_op(Operation::Div)) {
        if c.const_value().is_some_and(|c| c * d == 1.0) {
            return z.clone();
        }
    }
    // x / (c * x) = 1/c
    if let Some([c, z]) = y.as_op(Operation::Mul) {
        if z.is_equivalent(x) {
            return inv(c);
        }
    }
    // (-z) / z = -1
    if let Some([z]) = x.as_op(Operation::Neg) {
        if z.is_equivalent(y) {
            return Sx::minus_one();
        }
    }
    // z / (-z) = -1
    if let Some([z]) = y.as_op(Operation::Neg) {
        if z.is_equivalent(x) {
            return Sx::minus_one();
        }
    }
    // (-a) / (-b) = 1 when a and b are equivalent
    if let (Some([a]), Some([b])) = (x.as_op(Operation::Neg), y.as_op(Operation::Neg)) {
        if a.is_equivalent(b) {
            return Sx::one();
        }
    }
    binary_or_fold(Operation::Div, x, y)
}

pub(crate) fn inv(x: &Sx) -> Sx {
    if let Some([inner]) = x.as_op(Operation::Inv) {
        return inner.clone();
    }
    if x.is_zero() {
        return Sx::nan();
    }
    unary_or_fold(Operation::Inv, x)
}

/// Power.
///
/// Integer exponents up to [`MAX_POW_EXPANSION`] in magnitude are expanded into products by
/// repeated halving, negative ones through the reciprocal. `x^0.5` is `sqrt(x)`. Any other
/// constant exponent yields a dedicated constant-power node and a symbolic exponent a
/// general power node.
pub(crate) fn pow(x: &Sx, n: &Sx) -> Sx {
    let Some(value) = n.const_value() else {
        return binary_or_fold(Operation::Pow, x, n);
    };

    match n.node().as_constant().and_then(|c| c.int_value()) {
        Some(nn) => powi(x, nn),
        None if value == 0.5 => super::unary::sqrt(x),
        None => constpow(x, n),
    }
}

pub(crate) fn powi(x: &Sx, n: i64) -> Sx {
    if n == 0 {
        return Sx::one();
    }
    if !(-MAX_POW_EXPANSION..=MAX_POW_EXPANSION).contains(&n) {
        return constpow(x, &Sx::integer(n));
    }
    if n < 0 {
        return div(&Sx::one(), &powi(x, -n));
    }
    if n % 2 == 1 {
        return mul(x, &powi(x, n - 1));
    }
    let root = powi(x, n / 2);
    mul(&root, &root)
}

/// Constant power without expansion.
pub(crate) fn constpow(x: &Sx, n: &Sx) -> Sx {
    binary_or_fold(Operation::ConstPow, x, n)
}
