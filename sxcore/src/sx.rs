//! The expression handle.
//!
//! [`Sx`] is the only way to build or inspect the graph. A handle owns one share of a
//! node: cloning it is a reference-count increment, dropping it a decrement, and the node
//! (together with every operand that becomes unreachable) is released when the last share
//! goes away.
//!
//! Three notions of "sameness" coexist and are not interchangeable:
//! - identity ([`Sx::is_equal`], also `==` and [`Hash`]): both handles point to the same node;
//! - value equality ([`Sx::has_same_value`]): both are constants with the same value;
//! - bounded equivalence ([`Sx::is_equivalent`]): a depth-limited structural check used by the
//!   construction rules.
//!
//! Example
//! ```
//! use sxcore::prelude::*;
//!
//! let x = Sx::symbol("x");
//! let zero = Sx::from(0.0);
//! assert!((&x + &zero).is_equal(&x));
//! assert!((&x - &x).is_zero());
//! assert_eq!((&x * 2.0).to_string(), "(2*x)");
//! ```
use std::{
    hash::{Hash, Hasher},
    sync::{Arc, Weak},
};

use smallvec::smallvec;

use crate::{
    node::{Constant, NodeKind, SxNode},
    operation::Operation,
    registry::ConstantRegistry,
    utils::error::{SxError, SxResult},
};

/// Shared handle to a node of the expression graph.
#[derive(Clone)]
pub struct Sx {
    node: Arc<SxNode>,
}

/// Non-owning handle, see [`Sx::downgrade`].
#[derive(Clone)]
pub struct WeakSx {
    node: Weak<SxNode>,
}

impl WeakSx {
    /// Recover a handle if the node is still alive.
    pub fn upgrade(&self) -> Option<Sx> {
        self.node.upgrade().map(|node| Sx { node })
    }

    /// Whether the node has been released.
    pub fn is_released(&self) -> bool {
        self.node.strong_count() == 0
    }
}

impl Sx {
    // ---------------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------------

    pub(crate) fn from_node(node: SxNode) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// Unwrap the node if this is its last handle.
    pub(crate) fn into_unique_node(self) -> Option<SxNode> {
        Arc::into_inner(self.node)
    }

    /// Constant from a float, going through the constant cache.
    #[inline]
    pub fn constant(value: f64) -> Self {
        ConstantRegistry::global().constant(value)
    }

    /// Constant from an integer, going through the constant cache.
    #[inline]
    pub fn integer(value: i64) -> Self {
        ConstantRegistry::global().integer(value)
    }

    /// Fresh symbol. Every call allocates a new node, even for a name already in use.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::from_node(SxNode::symbol(name.into()))
    }

    #[inline]
    pub fn zero() -> Self {
        ConstantRegistry::global().zero().clone()
    }

    #[inline]
    pub fn one() -> Self {
        ConstantRegistry::global().one().clone()
    }

    #[inline]
    pub fn two() -> Self {
        ConstantRegistry::global().two().clone()
    }

    #[inline]
    pub fn minus_one() -> Self {
        ConstantRegistry::global().minus_one().clone()
    }

    #[inline]
    pub fn nan() -> Self {
        ConstantRegistry::global().nan().clone()
    }

    #[inline]
    pub fn inf() -> Self {
        ConstantRegistry::global().inf().clone()
    }

    #[inline]
    pub fn minus_inf() -> Self {
        ConstantRegistry::global().minus_inf().clone()
    }

    /// Allocate a unary operator node without applying any simplification.
    ///
    /// Fails if `op` is not unary.
    pub fn unary(op: Operation, x: &Sx) -> SxResult<Self> {
        if op.ndeps() != 1 {
            return Err(SxError::invalid("unary", "operator is not unary"));
        }
        Ok(Self::new_unary(op, x))
    }

    /// Allocate a binary operator node without applying any simplification.
    ///
    /// Fails if `op` is not binary.
    pub fn binary(op: Operation, x: &Sx, y: &Sx) -> SxResult<Self> {
        if op.ndeps() != 2 {
            return Err(SxError::invalid("binary", "operator is not binary"));
        }
        Ok(Self::new_binary(op, x, y))
    }

    pub(crate) fn new_unary(op: Operation, x: &Sx) -> Self {
        Self::from_node(SxNode::operation(op, smallvec![x.clone()]))
    }

    pub(crate) fn new_binary(op: Operation, x: &Sx, y: &Sx) -> Self {
        Self::from_node(SxNode::operation(op, smallvec![x.clone(), y.clone()]))
    }

    /// Replace the node held by this handle. Assigning a handle to itself (or to another
    /// handle of the same node) leaves the reference count untouched.
    pub fn assign(&mut self, other: &Sx) {
        if self.is_equal(other) {
            return;
        }
        self.node = Arc::clone(&other.node);
    }

    /// Non-owning handle to the same node.
    pub fn downgrade(&self) -> WeakSx {
        WeakSx {
            node: Arc::downgrade(&self.node),
        }
    }

    /// Number of live handles to this node, including `self` and operand slots of parents.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.node)
    }

    // ---------------------------------------------------------------------
    // Structural predicates
    // ---------------------------------------------------------------------

    /// The underlying node.
    #[inline]
    pub fn node(&self) -> &SxNode {
        &self.node
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind {
        self.node.kind()
    }

    /// Symbol or constant.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        !self.node.has_dep()
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        self.node.is_constant()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.node.is_integer()
    }

    #[inline]
    pub fn is_symbolic(&self) -> bool {
        self.node.is_symbolic()
    }

    /// Operator application.
    #[inline]
    pub fn is_binary(&self) -> bool {
        self.node.has_dep()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.node.is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.node.is_one()
    }

    #[inline]
    pub fn is_two(&self) -> bool {
        self.node.is_two()
    }

    #[inline]
    pub fn is_minus_one(&self) -> bool {
        self.node.is_minus_one()
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.node.is_nan()
    }

    #[inline]
    pub fn is_inf(&self) -> bool {
        self.node.is_inf()
    }

    #[inline]
    pub fn is_minus_inf(&self) -> bool {
        self.node.is_minus_inf()
    }

    /// Operator application with the given tag.
    #[inline]
    pub fn is_op(&self, op: Operation) -> bool {
        self.node.op() == Some(op)
    }

    /// `z + z` for some `z`, up to bounded equivalence of the two terms.
    pub fn is_doubled(&self) -> bool {
        matches!(self.as_op(Operation::Add), Some([a, b]) if a.is_equivalent(b))
    }

    /// `z * z` for some `z`, up to bounded equivalence of the two factors.
    pub fn is_squared(&self) -> bool {
        matches!(self.as_op(Operation::Mul), Some([a, b]) if a.is_equivalent(b))
    }

    /// Whether the operator of this node is commutative.
    pub fn is_commutative(&self) -> SxResult<bool> {
        self.node
            .op()
            .map(Operation::is_commutative)
            .ok_or(SxError::invalid("is_commutative", "node is not an operator application"))
    }

    /// Identity: both handles refer to the same node.
    #[inline]
    pub fn is_equal(&self, other: &Sx) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// Value equality: both are constants with the same numeric value.
    pub fn has_same_value(&self, other: &Sx) -> bool {
        match (self.node.value(), other.node.value()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Identity hash, stable for the lifetime of the node.
    #[inline]
    pub fn id(&self) -> usize {
        Arc::as_ptr(&self.node) as usize
    }

    // ---------------------------------------------------------------------
    // Checked accessors
    // ---------------------------------------------------------------------

    /// Numeric value of a constant.
    pub fn value(&self) -> SxResult<f64> {
        self.node
            .value()
            .ok_or(SxError::invalid("value", "node is not a constant"))
    }

    /// Integral value of an integer constant.
    pub fn int_value(&self) -> SxResult<i64> {
        self.node
            .as_constant()
            .and_then(Constant::int_value)
            .ok_or(SxError::invalid("int_value", "node is not an integer constant"))
    }

    /// Name of a symbol.
    pub fn name(&self) -> SxResult<&str> {
        self.node
            .name()
            .ok_or(SxError::invalid("name", "node is not a symbol"))
    }

    /// Operator tag of an operator application.
    pub fn op(&self) -> SxResult<Operation> {
        self.node
            .op()
            .ok_or(SxError::invalid("op", "node is not an operator application"))
    }

    /// Number of operands of an operator application.
    pub fn ndeps(&self) -> SxResult<usize> {
        self.node
            .op()
            .map(Operation::ndeps)
            .ok_or(SxError::invalid("ndeps", "node is not an operator application"))
    }

    /// Operand at `index` (0 or 1) of an operator application.
    pub fn dep(&self, index: usize) -> SxResult<&Sx> {
        let op = self
            .node
            .op()
            .ok_or(SxError::invalid("dep", "node is not an operator application"))?;
        self.node
            .deps()
            .get(index)
            .ok_or(SxError::DepIndexOutOfRange {
                index,
                ndeps: op.ndeps(),
                op,
            })
    }

    /// Scratch value of the node. External traversals may use it for marking; its value is
    /// not preserved across unrelated operations.
    #[inline]
    pub fn temp(&self) -> i32 {
        self.node.temp()
    }

    #[inline]
    pub fn set_temp(&self, t: i32) {
        self.node.set_temp(t)
    }

    // ---------------------------------------------------------------------
    // Internal helpers for the construction rules
    // ---------------------------------------------------------------------

    /// Operands if this node is an application of `op`.
    #[inline]
    pub(crate) fn as_op(&self, op: Operation) -> Option<&[Sx]> {
        match self.node.kind() {
            NodeKind::Operation { op: o, deps } if *o == op => Some(deps.as_slice()),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn const_value(&self) -> Option<f64> {
        self.node.value()
    }

    #[inline]
    pub(crate) fn has_value(&self, value: f64) -> bool {
        self.node.value() == Some(value)
    }
}

impl Default for Sx {
    /// The NaN singleton.
    fn default() -> Self {
        Sx::nan()
    }
}

impl PartialEq for Sx {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for Sx {}

impl Hash for Sx {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl From<f64> for Sx {
    fn from(value: f64) -> Self {
        Sx::constant(value)
    }
}

impl From<i64> for Sx {
    fn from(value: i64) -> Self {
        Sx::integer(value)
    }
}

impl From<i32> for Sx {
    fn from(value: i32) -> Self {
        Sx::integer(value.into())
    }
}

impl From<bool> for Sx {
    fn from(value: bool) -> Self {
        if value { Sx::one() } else { Sx::zero() }
    }
}
