//! Operator enumeration.
//!
//! Every operator node of the graph carries one [`Operation`]. The enumeration is closed
//! and deliberately small: comparisons other than `>= 0` ([`Operation::Step`]) and equality
//! are expressed through arithmetic identities by the construction layer (see
//! [`Sx::ge`](crate::sx::Sx::ge)), so consumers walking a graph only ever meet these tags.
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoStaticStr};

/// Operator tag of an operator node.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumCount,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Addition `x + y`
    Add,
    /// Subtraction `x - y`
    Sub,
    /// Multiplication `x * y`
    Mul,
    /// Division `x / y`
    Div,
    /// Negation `-x`
    Neg,
    /// Natural exponential
    Exp,
    /// Natural logarithm
    Log,
    /// Power with a symbolic exponent
    Pow,
    /// Power with a constant exponent that was not expanded into products
    ConstPow,
    /// Square root
    Sqrt,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    /// Unit step, `1` if `x >= 0` and `0` otherwise. The only ordering comparison.
    Step,
    Floor,
    Ceil,
    /// Equality `x == y`, yields `1` or `0`
    Equality,
    /// Absolute value
    Fabs,
    /// Sign, `-1`, `0` or `1`
    Sign,
    /// Error function
    Erf,
    Fmin,
    Fmax,
    /// Reciprocal `1 / x`
    Inv,
    Sinh,
    Cosh,
    Tanh,
    /// Inverse error function
    Erfinv,
    /// Evaluates to its first operand and prints the second when evaluated
    Printme,
}

/// How an operator node is rendered around its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// `(x<sym>y)`
    Infix(&'static str),
    /// `(<sym>x)`
    Prefix(&'static str),
    /// `(x<sym>)`
    Postfix(&'static str),
    /// `name(x)` or `name(x,y)`
    Call(&'static str),
}

impl Operation {
    /// Number of operands (1 or 2).
    pub fn ndeps(self) -> usize {
        use Operation::*;
        match self {
            Add | Sub | Mul | Div | Pow | ConstPow | Equality | Fmin | Fmax | Printme => 2,
            Neg | Exp | Log | Sqrt | Sin | Cos | Tan | Asin | Acos | Atan | Step | Floor
            | Ceil | Fabs | Sign | Erf | Inv | Sinh | Cosh | Tanh | Erfinv => 1,
        }
    }

    /// Whether the two operands may be swapped without changing the value.
    pub fn is_commutative(self) -> bool {
        matches!(
            self,
            Operation::Add | Operation::Mul | Operation::Equality | Operation::Fmin | Operation::Fmax
        )
    }

    /// Textual notation used by the printer.
    pub fn notation(self) -> Notation {
        use Notation::*;
        match self {
            Operation::Add => Infix("+"),
            Operation::Sub => Infix("-"),
            Operation::Mul => Infix("*"),
            Operation::Div => Infix("/"),
            Operation::Equality => Infix("=="),
            Operation::Neg => Prefix("-"),
            Operation::Inv => Prefix("1/"),
            Operation::Step => Postfix(">=0"),
            Operation::Pow | Operation::ConstPow => Call("pow"),
            Operation::Printme => Call("printme"),
            other => Call(other.into()),
        }
    }

    /// Numeric value of the operator applied to constant operands. The second operand is
    /// ignored by unary operators.
    ///
    /// Returns `None` for operators without a numeric definition in the standard library
    /// (`erf`, `erfinv`) and for [`Operation::Printme`], whose evaluation has a side effect.
    pub fn fold(self, x: f64, y: f64) -> Option<f64> {
        use Operation::*;
        let value = match self {
            Add => x + y,
            Sub => x - y,
            Mul => x * y,
            Div => x / y,
            Neg => -x,
            Exp => x.exp(),
            Log => x.ln(),
            Pow | ConstPow => x.powf(y),
            Sqrt => x.sqrt(),
            Sin => x.sin(),
            Cos => x.cos(),
            Tan => x.tan(),
            Asin => x.asin(),
            Acos => x.acos(),
            Atan => x.atan(),
            Step => bool_to_f64(x >= 0.0),
            Floor => x.floor(),
            Ceil => x.ceil(),
            Equality => bool_to_f64(x == y),
            Fabs => x.abs(),
            Sign => sign(x),
            Fmin => x.min(y),
            Fmax => x.max(y),
            Inv => 1.0 / x,
            Sinh => x.sinh(),
            Cosh => x.cosh(),
            Tanh => x.tanh(),
            Erf | Erfinv | Printme => return None,
        };
        Some(value)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).into())
    }
}

#[inline]
fn bool_to_f64(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

/// Sign with `sign(0) = 0` and `sign(NaN) = NaN`.
pub(crate) fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else if x > 0.0 {
        1.0
    } else {
        x
    }
}
