//! Graph nodes.
//!
//! A node is one of three kinds: a numeric constant, a named symbol or an operator applied
//! to one or two operand handles. Nodes are immutable once built; the only interior
//! mutability is the scratch [`SxNode::temp`] field reserved for graph algorithms run by
//! collaborators.
//!
//! Operand handles are owned by their parent node. Dropping the last handle to a node tears
//! down every operand that becomes unreachable, using an explicit work list so that very
//! deep chains (e.g. a running sum of a million terms) are released without recursion.
use std::sync::atomic::{AtomicI32, Ordering};

use smallvec::SmallVec;
use strum::EnumIs;

use crate::{operation::Operation, sx::Sx};

/// Operand storage of an operator node. Every operator has at most two operands.
pub type Deps = SmallVec<[Sx; 2]>;

/// Numeric payload of a constant node.
///
/// The dedicated variants exist so that the most common predicates (`is_zero`, `is_one`,
/// ...) are a tag comparison. `2` is an ordinary [`Constant::Integer`].
#[derive(Debug, Clone, Copy, PartialEq, EnumIs)]
pub enum Constant {
    Zero,
    One,
    MinusOne,
    /// Integral value other than `0`, `1` and `-1`.
    Integer(i64),
    /// Any other finite value (non-integral, or integral with a magnitude above `2^53`).
    Real(f64),
    Nan,
    Inf,
    MinusInf,
}

impl Constant {
    /// Numeric value as a float.
    pub fn value(self) -> f64 {
        match self {
            Constant::Zero => 0.0,
            Constant::One => 1.0,
            Constant::MinusOne => -1.0,
            Constant::Integer(v) => v as f64,
            Constant::Real(v) => v,
            Constant::Nan => f64::NAN,
            Constant::Inf => f64::INFINITY,
            Constant::MinusInf => f64::NEG_INFINITY,
        }
    }

    /// Integral value, if the constant is integral.
    pub fn int_value(self) -> Option<i64> {
        match self {
            Constant::Zero => Some(0),
            Constant::One => Some(1),
            Constant::MinusOne => Some(-1),
            Constant::Integer(v) => Some(v),
            Constant::Real(_) | Constant::Nan | Constant::Inf | Constant::MinusInf => None,
        }
    }
}

impl std::fmt::Display for Constant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constant::Zero => f.write_str("0"),
            Constant::One => f.write_str("1"),
            Constant::MinusOne => f.write_str("-1"),
            Constant::Integer(v) => write!(f, "{v}"),
            Constant::Real(v) => write!(f, "{v}"),
            Constant::Nan => f.write_str("nan"),
            Constant::Inf => f.write_str("inf"),
            Constant::MinusInf => f.write_str("-inf"),
        }
    }
}

/// What a node is.
#[derive(Debug, EnumIs)]
pub enum NodeKind {
    Constant(Constant),
    /// Named symbol. Two symbol nodes are distinct identities even when their names agree.
    Symbol(Box<str>),
    Operation { op: Operation, deps: Deps },
}

/// A node of the expression graph. Only ever reached through an [`Sx`] handle.
pub struct SxNode {
    kind: NodeKind,
    temp: AtomicI32,
}

impl SxNode {
    pub(crate) fn constant(c: Constant) -> Self {
        Self::new(NodeKind::Constant(c))
    }

    pub(crate) fn symbol(name: impl Into<Box<str>>) -> Self {
        Self::new(NodeKind::Symbol(name.into()))
    }

    pub(crate) fn operation(op: Operation, deps: Deps) -> Self {
        debug_assert_eq!(
            deps.len(),
            op.ndeps(),
            "operator `{op}` built with a wrong number of operands"
        );
        Self::new(NodeKind::Operation { op, deps })
    }

    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            temp: AtomicI32::new(0),
        }
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[inline]
    pub fn as_constant(&self) -> Option<Constant> {
        match self.kind {
            NodeKind::Constant(c) => Some(c),
            _ => None,
        }
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        self.kind.is_constant()
    }

    #[inline]
    pub fn is_symbolic(&self) -> bool {
        self.kind.is_symbol()
    }

    #[inline]
    pub fn has_dep(&self) -> bool {
        self.kind.is_operation()
    }

    /// Constant with an integral value (this includes `0`, `1`, `-1` and `2`).
    pub fn is_integer(&self) -> bool {
        self.as_constant().is_some_and(|c| c.int_value().is_some())
    }

    pub fn is_zero(&self) -> bool {
        matches!(self.kind, NodeKind::Constant(Constant::Zero))
    }

    pub fn is_one(&self) -> bool {
        matches!(self.kind, NodeKind::Constant(Constant::One))
    }

    pub fn is_two(&self) -> bool {
        matches!(self.kind, NodeKind::Constant(Constant::Integer(2)))
    }

    pub fn is_minus_one(&self) -> bool {
        matches!(self.kind, NodeKind::Constant(Constant::MinusOne))
    }

    pub fn is_nan(&self) -> bool {
        matches!(self.kind, NodeKind::Constant(Constant::Nan))
    }

    pub fn is_inf(&self) -> bool {
        matches!(self.kind, NodeKind::Constant(Constant::Inf))
    }

    pub fn is_minus_inf(&self) -> bool {
        matches!(self.kind, NodeKind::Constant(Constant::MinusInf))
    }

    /// Numeric value, `None` unless the node is a constant.
    pub fn value(&self) -> Option<f64> {
        self.as_constant().map(Constant::value)
    }

    /// Symbol name, `None` unless the node is a symbol.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Symbol(name) => Some(&**name),
            _ => None,
        }
    }

    /// Operator tag, `None` unless the node is an operator application.
    pub fn op(&self) -> Option<Operation> {
        match self.kind {
            NodeKind::Operation { op, .. } => Some(op),
            _ => None,
        }
    }

    /// Operand handles; empty for leaves.
    pub fn deps(&self) -> &[Sx] {
        match &self.kind {
            NodeKind::Operation { deps, .. } => deps.as_slice(),
            _ => &[],
        }
    }

    /// Scratch value. Not preserved across unrelated operations.
    #[inline]
    pub fn temp(&self) -> i32 {
        self.temp.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn set_temp(&self, t: i32) {
        self.temp.store(t, Ordering::Relaxed);
    }

    fn take_deps(&mut self) -> Deps {
        match &mut self.kind {
            NodeKind::Operation { deps, .. } => std::mem::take(deps),
            _ => Deps::new(),
        }
    }
}

impl std::fmt::Debug for SxNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            NodeKind::Constant(c) => write!(f, "SxNode::Constant({c})"),
            NodeKind::Symbol(name) => write!(f, "SxNode::Symbol({name})"),
            NodeKind::Operation { op, deps } => {
                write!(f, "SxNode::Operation({op}, {} operand(s))", deps.len())
            }
        }
    }
}

impl Drop for SxNode {
    fn drop(&mut self) {
        let deps = self.take_deps();
        if deps.is_empty() {
            return;
        }

        // Release operands iteratively: a child whose last handle we hold is unwrapped,
        // its own operands are queued, and it is dropped with an empty operand list.
        let mut pending: Vec<Sx> = deps.into_iter().collect();
        while let Some(sx) = pending.pop() {
            if let Some(mut node) = sx.into_unique_node() {
                pending.extend(node.take_deps());
            }
        }
    }
}
