//! Bounded structural equivalence.
//!
//! A cheap, incomplete test used by the construction rules to recognise that two operands
//! denote the same value. It never builds anything and never looks deeper than the budget it
//! is given, so it may answer `false` for expressions that are mathematically equal.
use crate::{magic::DEFAULT_EQUIVALENCE_DEPTH, node::NodeKind, sx::Sx};

impl Sx {
    /// Equivalence at the depth used by the construction rules.
    #[inline]
    pub fn is_equivalent(&self, other: &Sx) -> bool {
        self.is_equivalent_within(other, DEFAULT_EQUIVALENCE_DEPTH)
    }

    /// Bounded equivalence.
    ///
    /// - identical nodes, or constants of equal value, are equivalent whatever the depth;
    /// - otherwise a depth of `0` answers `false`;
    /// - two applications of the same operator are equivalent when their operands are
    ///   pairwise equivalent at `depth - 1`, in order or, for a commutative operator, swapped;
    /// - anything else is not equivalent.
    pub fn is_equivalent_within(&self, other: &Sx, depth: u32) -> bool {
        if self.is_equal(other) || self.has_same_value(other) {
            return true;
        }
        if depth == 0 {
            return false;
        }

        let (
            NodeKind::Operation { op: op_a, deps: a },
            NodeKind::Operation { op: op_b, deps: b },
        ) = (self.kind(), other.kind())
        else {
            return false;
        };
        if op_a != op_b || a.len() != b.len() {
            return false;
        }

        let next = depth - 1;
        match (a.as_slice(), b.as_slice()) {
            ([x], [y]) => x.is_equivalent_within(y, next),
            ([x0, x1], [y0, y1]) => {
                (x0.is_equivalent_within(y0, next) && x1.is_equivalent_within(y1, next))
                    || (op_a.is_commutative()
                        && x0.is_equivalent_within(y1, next)
                        && x1.is_equivalent_within(y0, next))
            }
            _ => false,
        }
    }
}
