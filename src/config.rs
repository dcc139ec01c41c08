//! Solver configuration (§6 "Configuration").
//!
//! `sssp_core` reads its tunables from `std::env::var(...)` inline, which
//! suits an FFI-facing CLI/bench harness. This crate has no FFI boundary in
//! scope, so the tunables are instead an explicit struct passed into
//! [`crate::solve`] — the ordinary shape for a library entry point.

use crate::types::FlowNum;

/// Which [`crate::pricing::PricingRule`] the driver uses (§9 "Polymorphic
/// pricing rules"). Only `BlockSearch` is required by spec.md; the other two
/// are supplemented alternatives sharing the same trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PricingRuleKind {
    BlockSearch,
    Dantzig,
    FirstEligible,
}

#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct SolverConfig<F> {
    /// 0 means unbounded (§6).
    pub max_iter: u64,
    /// `ART_COST`: must exceed the largest finite path cost the optimum
    /// could use (§4.1, §6).
    pub art_cost: F,
    /// Sentinel standing in for "+∞" capacity; chosen distinct from the
    /// numeric type's true maximum so that `capacity - flow` and `flow + δ`
    /// never overflow (§9).
    pub inf_capacity: F,
    /// Pricing tolerance ε (§4.3). Admissible as exactly zero for integer
    /// flow types (§9).
    pub eps: F,
    /// Tolerance for `|Σ supply|` before rejecting as unbalanced (§9 Open
    /// Question; resolution recorded in DESIGN.md).
    pub balance_tol: F,
    pub pricing_rule: PricingRuleKind,
}

impl<F: FlowNum> SolverConfig<F> {
    /// Construct with the caller's domain-specific `art_cost` /
    /// `inf_capacity` and every other field defaulted.
    pub fn new(art_cost: F, inf_capacity: F) -> Self {
        Self {
            max_iter: 0,
            art_cost,
            inf_capacity,
            eps: F::default_eps(),
            balance_tol: F::default_eps(),
            pricing_rule: PricingRuleKind::BlockSearch,
        }
    }
}

impl<F: FlowNum> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new(F::default_art_cost(), F::default_inf_capacity())
    }
}
