//! The numeric abstraction the pivot engine is generic over (§9 "Numeric type").
//!
//! `f64` runs the ε-scaled pricing gate described in §4.3; `i64` runs exact
//! with ε = 0, as the design note says integer mode admits.

use num_traits::{Bounded, Num, NumAssign, Signed};
use std::fmt::Debug;

/// Bound required of a cost/flow/potential scalar.
///
/// `below_negative_eps` is the one place the ε-scaling behavior differs
/// between exact (integer) and approximate (floating point) instantiations;
/// everything else in the crate is written purely in terms of the
/// arithmetic/ordering supertraits.
pub trait FlowNum: Num + NumAssign + Signed + Bounded + PartialOrd + Copy + Debug + Default {
    /// True iff `self` is negative enough, relative to `scale`, to count as
    /// a pricing violation (§4.3: `r(e) < -eps * a`). `scale` is the
    /// `a = max(|pi_i|, |pi_j|, |cost|)` term computed by the caller.
    fn below_negative_eps(self, eps: Self, scale: Self) -> bool;

    /// Sentinel "infinite" capacity used when the caller doesn't supply one
    /// (§9: "an explicit sentinel constant distinct from numeric-type
    /// maxima to permit arithmetic (+δ) without overflow").
    fn default_inf_capacity() -> Self;

    /// Sentinel artificial-arc cost (§4.1 `ART_COST`).
    fn default_art_cost() -> Self;

    /// Default pricing/balance tolerance.
    fn default_eps() -> Self;

    /// Converts a small node/arc count into this scalar type, used only to
    /// spread a tiny supply-balance residual evenly across nodes.
    fn from_usize(v: usize) -> Self;
}

impl FlowNum for f64 {
    fn below_negative_eps(self, eps: Self, scale: Self) -> bool {
        self < -eps * scale
    }

    fn default_inf_capacity() -> Self {
        1e12
    }

    fn default_art_cost() -> Self {
        1e9
    }

    fn default_eps() -> Self {
        1e-9
    }

    fn from_usize(v: usize) -> Self {
        v as f64
    }
}

impl FlowNum for i64 {
    fn below_negative_eps(self, _eps: Self, _scale: Self) -> bool {
        self < 0
    }

    fn default_inf_capacity() -> Self {
        i64::MAX / 4
    }

    fn default_art_cost() -> Self {
        i64::MAX / 16
    }

    fn default_eps() -> Self {
        0
    }

    fn from_usize(v: usize) -> Self {
        v as i64
    }
}

/// Sentinel for "no node" in parent/pred-style arrays.
pub const NONE: usize = usize::MAX;

/// Basis classification of an arc (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ArcState {
    Lower,
    Tree,
    Upper,
}

impl ArcState {
    /// Sign used by the reduced-cost formula in §4.3: `r(e) = state(e) * (...)`.
    pub fn sign<F: FlowNum>(self) -> F {
        match self {
            ArcState::Lower => F::one(),
            ArcState::Tree => F::zero(),
            ArcState::Upper => -F::one(),
        }
    }
}
