//! Process-wide constant cache.
//!
//! The [`ConstantRegistry`] guarantees that two constant constructions with bit-identical
//! values return the very same node. The equivalence checker and every construction rule
//! rely on this: comparing two constants for identity is the same as comparing their values.
//!
//! The registry holds a permanent handle to each of the singleton constants
//! (`0`, `1`, `2`, `-1`, `NaN`, `+inf`, `-inf`) and grows two caches monotonically, one
//! for integral values and one for the remaining finite reals. Nothing is ever evicted.
use std::collections::HashMap;

use log::{debug, trace};
use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::{
    node::{Constant, SxNode},
    sx::Sx,
};

static GLOBAL_REGISTRY: Lazy<ConstantRegistry> = Lazy::new(ConstantRegistry::new);

/// Largest magnitude below which every integer is exactly representable as an `f64`.
const MAX_EXACT_INTEGER: i64 = 1 << 53;

/// Owner of the singleton constants and of the value-to-node caches.
///
/// # A note on concurrency
/// Lookups take an upgradable read lock on the relevant cache, upgraded to a write lock only
/// when the value has never been seen. Both caches are independent, so integral and real
/// constants never contend with each other.
pub struct ConstantRegistry {
    zero: Sx,
    one: Sx,
    two: Sx,
    minus_one: Sx,
    nan: Sx,
    inf: Sx,
    minus_inf: Sx,
    integers: RwLock<HashMap<i64, Sx>>,
    /// Keyed by the bit pattern of the `f64`.
    reals: RwLock<HashMap<u64, Sx>>,
}

impl ConstantRegistry {
    fn new() -> Self {
        let make = |c: Constant| Sx::from_node(SxNode::constant(c));
        let registry = Self {
            zero: make(Constant::Zero),
            one: make(Constant::One),
            two: make(Constant::Integer(2)),
            minus_one: make(Constant::MinusOne),
            nan: make(Constant::Nan),
            inf: make(Constant::Inf),
            minus_inf: make(Constant::MinusInf),
            integers: Default::default(),
            reals: Default::default(),
        };
        debug!("Constant registry initialized with singletons 0, 1, 2, -1, nan, inf and -inf.");
        registry
    }

    /// The single registry of the process.
    #[inline]
    pub fn global() -> &'static ConstantRegistry {
        &GLOBAL_REGISTRY
    }

    #[inline]
    pub fn zero(&self) -> &Sx {
        &self.zero
    }

    #[inline]
    pub fn one(&self) -> &Sx {
        &self.one
    }

    #[inline]
    pub fn two(&self) -> &Sx {
        &self.two
    }

    #[inline]
    pub fn minus_one(&self) -> &Sx {
        &self.minus_one
    }

    #[inline]
    pub fn nan(&self) -> &Sx {
        &self.nan
    }

    #[inline]
    pub fn inf(&self) -> &Sx {
        &self.inf
    }

    #[inline]
    pub fn minus_inf(&self) -> &Sx {
        &self.minus_inf
    }

    /// Node for an arbitrary `f64`.
    ///
    /// Integral values of magnitude at most `2^53` (including `-0.0`) take the integer path,
    /// NaN and the infinities map to their singletons and every other value goes through
    /// the real cache.
    pub fn constant(&self, value: f64) -> Sx {
        if value.is_nan() {
            self.nan.clone()
        } else if value.is_infinite() {
            if value > 0.0 {
                self.inf.clone()
            } else {
                self.minus_inf.clone()
            }
        } else if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER as f64 {
            self.integer(value as i64)
        } else {
            self.real(value)
        }
    }

    /// Node for an integral value.
    ///
    /// Values beyond `2^53` in magnitude are not exact as `f64` and are looked up by their
    /// rounded float value, so two integers with the same `f64` value share a node.
    pub fn integer(&self, value: i64) -> Sx {
        if !(-MAX_EXACT_INTEGER..=MAX_EXACT_INTEGER).contains(&value) {
            return self.constant(value as f64);
        }
        match value {
            0 => self.zero.clone(),
            1 => self.one.clone(),
            2 => self.two.clone(),
            -1 => self.minus_one.clone(),
            _ => {
                let mut cache = self.integers.upgradable_read();
                if let Some(sx) = cache.get(&value) {
                    return sx.clone();
                }

                cache.with_upgraded(|cache| {
                    trace!("Caching new integer constant {value}.");
                    let sx = Sx::from_node(SxNode::constant(Constant::Integer(value)));
                    cache.insert(value, sx.clone());
                    sx
                })
            }
        }
    }

    fn real(&self, value: f64) -> Sx {
        let key = value.to_bits();
        let mut cache = self.reals.upgradable_read();
        if let Some(sx) = cache.get(&key) {
            return sx.clone();
        }

        cache.with_upgraded(|cache| {
            trace!("Caching new real constant {value}.");
            let sx = Sx::from_node(SxNode::constant(Constant::Real(value)));
            cache.insert(key, sx.clone());
            sx
        })
    }

    /// Number of cached integral constants, singletons excluded.
    pub fn cached_integers(&self) -> usize {
        self.integers.read().len()
    }

    /// Number of cached real constants.
    pub fn cached_reals(&self) -> usize {
        self.reals.read().len()
    }
}
