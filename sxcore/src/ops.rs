//! Operator sugar for expressions.
//!
//! Arithmetic operators (`+ - * /`, unary `-` and the compound assignments) go through the
//! construction rules. `&`, `|` and `!` are the logical operators on truth values, built as
//! described in [`Sx::logic_and`].
//!
//! Every binary operator accepts any mix of `Sx`, `&Sx` and `f64` operands except `f64`
//! on both sides.
use std::ops::{
    Add, AddAssign, BitAnd, BitOr, Div, DivAssign, Mul, MulAssign, Neg, Not, Sub, SubAssign,
};

use crate::{
    rules::{arith, compare},
    sx::Sx,
};

macro_rules! define_ops_sx {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $rule:path) => {
        define_ops_sx!($trait, $method, $rule);

        impl $assign_trait<&Sx> for Sx {
            fn $assign_method(&mut self, rhs: &Sx) {
                let result = $rule(self, rhs);
                self.assign(&result);
            }
        }

        impl $assign_trait<Sx> for Sx {
            fn $assign_method(&mut self, rhs: Sx) {
                let result = $rule(self, &rhs);
                self.assign(&result);
            }
        }

        impl $assign_trait<f64> for Sx {
            fn $assign_method(&mut self, rhs: f64) {
                let result = $rule(self, &Sx::constant(rhs));
                self.assign(&result);
            }
        }
    };
    ($trait:ident, $method:ident, $rule:path) => {
        impl $trait<&Sx> for &Sx {
            type Output = Sx;

            fn $method(self, rhs: &Sx) -> Sx {
                $rule(self, rhs)
            }
        }

        impl $trait<Sx> for &Sx {
            type Output = Sx;

            fn $method(self, rhs: Sx) -> Sx {
                $rule(self, &rhs)
            }
        }

        impl $trait<&Sx> for Sx {
            type Output = Sx;

            fn $method(self, rhs: &Sx) -> Sx {
                $rule(&self, rhs)
            }
        }

        impl $trait<Sx> for Sx {
            type Output = Sx;

            fn $method(self, rhs: Sx) -> Sx {
                $rule(&self, &rhs)
            }
        }

        impl $trait<f64> for &Sx {
            type Output = Sx;

            fn $method(self, rhs: f64) -> Sx {
                $rule(self, &Sx::constant(rhs))
            }
        }

        impl $trait<f64> for Sx {
            type Output = Sx;

            fn $method(self, rhs: f64) -> Sx {
                $rule(&self, &Sx::constant(rhs))
            }
        }

        impl $trait<&Sx> for f64 {
            type Output = Sx;

            fn $method(self, rhs: &Sx) -> Sx {
                $rule(&Sx::constant(self), rhs)
            }
        }

        impl $trait<Sx> for f64 {
            type Output = Sx;

            fn $method(self, rhs: Sx) -> Sx {
                $rule(&Sx::constant(self), &rhs)
            }
        }
    };
}

define_ops_sx!(Add, add, AddAssign, add_assign, arith::add);
define_ops_sx!(Sub, sub, SubAssign, sub_assign, arith::sub);
define_ops_sx!(Mul, mul, MulAssign, mul_assign, arith::mul);
define_ops_sx!(Div, div, DivAssign, div_assign, arith::div);
define_ops_sx!(BitAnd, bitand, compare::and);
define_ops_sx!(BitOr, bitor, compare::or);

impl Neg for &Sx {
    type Output = Sx;

    fn neg(self) -> Sx {
        arith::neg(self)
    }
}

impl Neg for Sx {
    type Output = Sx;

    fn neg(self) -> Sx {
        arith::neg(&self)
    }
}

impl Not for &Sx {
    type Output = Sx;

    fn not(self) -> Sx {
        compare::not(self)
    }
}

impl Not for Sx {
    type Output = Sx;

    fn not(self) -> Sx {
        compare::not(&self)
    }
}
