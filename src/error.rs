//! Pre-solve validation errors (§7 INVALID_INPUT).
//!
//! Mid-solve outcomes (OPTIMAL / INFEASIBLE / UNBOUNDED / MAX_ITER_REACHED)
//! are not errors — they're reported through [`crate::Status`] inside a
//! successful [`crate::Solution`], same as `network-algorithms`' own
//! `Status` return value.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("node count must be nonzero")]
    EmptyGraph,

    #[error("supply does not balance: total supply = {total} exceeds tolerance {eps}")]
    Unbalanced { total: String, eps: String },

    #[error("arc {arc} references node {node}, but there are only {node_count} nodes")]
    NodeOutOfRange {
        arc: usize,
        node: usize,
        node_count: usize,
    },

    #[error("arc {arc} has negative capacity {capacity}")]
    NegativeCapacity { arc: usize, capacity: String },

    #[error("supply length {got} does not match node count {expected}")]
    SupplyLengthMismatch { got: usize, expected: usize },
}
