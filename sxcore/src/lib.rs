//! Scalar symbolic expressions.
//!
//! Expressions are nodes of a shared, immutable, reference-counted DAG reached through the
//! [`Sx`](sx::Sx) handle. Constants of equal value share a node ([`registry`]), symbols never
//! do, and every operator constructor first tries a fixed list of algebraic rewrites that
//! return an existing node. A new node is allocated only when no rewrite applies.
//!
//! ```
//! use sxcore::prelude::*;
//!
//! let x = Sx::symbol("x");
//! let y = Sx::symbol("y");
//!
//! assert!((&x * 1.0).is_equal(&x));
//! assert!((-(-&y)).is_equal(&y));
//! assert!((&x / &x).is_one());
//! assert!(Sx::constant(5.0).ge(&Sx::constant(3.0)).is_one());
//!
//! let e = (&x + &y).sin();
//! assert_eq!(e.to_string(), "sin((x+y))");
//! assert_eq!(e.to_string_with_budget(1), "sin(...)");
//! ```
//!
//! Handles are `Send + Sync`: reference counts are atomic and the constant caches are
//! guarded by read-write locks.

mod equivalence;
pub mod magic;
pub mod math;
pub mod node;
pub mod operation;
mod ops;
pub mod print;
pub mod registry;
pub(crate) mod rules;
pub mod sx;
pub mod utils;

pub mod prelude {
    pub use crate::{
        math::if_else,
        node::{Constant, NodeKind},
        operation::Operation,
        print::{max_num_calls_in_print, set_max_num_calls_in_print},
        registry::ConstantRegistry,
        sx::{Sx, WeakSx},
        utils::{
            conf::{ColorMode, SxConfig},
            error::{SxError, SxResult},
        },
    };
}
