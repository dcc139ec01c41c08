//! Minimum-cost flow via the network simplex method (§1 OVERVIEW).
//!
//! Entry point is [`solve`]. Build a node count, an [`ArcSpec`] list and a
//! balanced supply vector, pick a [`SolverConfig`], and get back a
//! [`Solution`] carrying the flow on every arc, the node potentials and the
//! termination [`Status`].

mod config;
mod error;
mod graph;
mod heuristics;
mod init;
mod join;
mod pivot;
mod potential;
mod pricing;
mod restructure;
mod solver;
mod tree;
mod types;

pub use config::{PricingRuleKind, SolverConfig};
pub use error::SolveError;
pub use graph::ArcSpec;
pub use pricing::{BlockSearch, Dantzig, FirstEligible, PricingRule};
pub use solver::{solve, PivotStats, Solution, Status};
pub use types::{ArcState, FlowNum};

#[cfg(test)]
mod tests {
    use super::*;

    fn balanced_supply(values: &[f64]) -> Vec<f64> {
        values.to_vec()
    }

    #[test]
    fn trivial_single_arc_transport() {
        let arcs = vec![ArcSpec::new(0, 1, 3.0, 10.0)];
        let supply = balanced_supply(&[5.0, -5.0]);
        let config = SolverConfig::<f64>::default();
        let sol = solve(2, &arcs, &supply, &config).unwrap();
        assert_eq!(sol.status, Status::Optimal);
        assert!((sol.total_cost - 15.0).abs() < 1e-6);
        assert!((sol.flow[0] - 5.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_unbalanced_supply() {
        let arcs: Vec<ArcSpec<f64>> = vec![];
        let supply = vec![1.0, 1.0];
        let config = SolverConfig::<f64>::default();
        let err = solve(2, &arcs, &supply, &config).unwrap_err();
        assert!(matches!(err, SolveError::Unbalanced { .. }));
    }

    #[test]
    fn rejects_wrong_supply_length() {
        let arcs: Vec<ArcSpec<f64>> = vec![];
        let supply = vec![0.0];
        let config = SolverConfig::<f64>::default();
        let err = solve(2, &arcs, &supply, &config).unwrap_err();
        assert!(matches!(err, SolveError::SupplyLengthMismatch { got: 1, expected: 2 }));
    }

    #[test]
    fn rejects_node_out_of_range() {
        let arcs = vec![ArcSpec::new(0, 5, 1.0, 10.0)];
        let supply = vec![0.0, 0.0];
        let config = SolverConfig::<f64>::default();
        let err = solve(2, &arcs, &supply, &config).unwrap_err();
        assert!(matches!(err, SolveError::NodeOutOfRange { arc: 0, node: 5, node_count: 2 }));
    }

    #[test]
    fn integer_flow_type_is_exact() {
        let arcs = vec![ArcSpec::new(0, 1, 2, 10), ArcSpec::new(0, 1, 5, 10)];
        let supply = vec![7i64, -7];
        let config = SolverConfig::<i64>::default();
        let sol = solve(2, &arcs, &supply, &config).unwrap();
        assert_eq!(sol.status, Status::Optimal);
        assert_eq!(sol.total_cost, 14);
        assert_eq!(sol.flow[0], 7);
        assert_eq!(sol.flow[1], 0);
    }
}
