#![allow(dead_code)]

use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sxcore::prelude::*;

/// Values bound to symbols, keyed by node identity.
#[derive(Default)]
pub struct Env {
    values: HashMap<usize, f64>,
}

impl Env {
    pub fn bind(&mut self, symbol: &Sx, value: f64) -> &mut Self {
        self.values.insert(symbol.id(), value);
        self
    }
}

/// Evaluate `e`, or `None` as soon as any intermediate value is not finite or the operator
/// has no numeric definition.
pub fn eval(e: &Sx, env: &Env) -> Option<f64> {
    let value = match e.kind() {
        NodeKind::Constant(c) => c.value(),
        NodeKind::Symbol(_) => *env.values.get(&e.id())?,
        NodeKind::Operation { op, deps } => {
            let x = eval(&deps[0], env)?;
            let y = match deps.get(1) {
                Some(dep) => eval(dep, env)?,
                None => f64::NAN,
            };
            op.fold(x, y)?
        }
    };
    value.is_finite().then_some(value)
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

/// Deterministic sample source, away from zero where most rewrites are singular.
pub struct Samples {
    rng: ChaCha20Rng,
}

impl Samples {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn next(&mut self) -> f64 {
        let magnitude = self.rng.random_range(0.1..3.0);
        if self.rng.random_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    }
}

/// Number of operator nodes reachable from `e`, shared nodes counted once.
pub fn count_ops(e: &Sx, op: Operation) -> usize {
    let mut seen = std::collections::HashSet::new();
    let mut stack = vec![e.clone()];
    let mut count = 0;
    while let Some(sx) = stack.pop() {
        if !seen.insert(sx.id()) {
            continue;
        }
        if sx.is_op(op) {
            count += 1;
        }
        stack.extend(sx.node().deps().iter().cloned());
    }
    count
}
