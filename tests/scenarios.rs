use network_simplex_core::{solve, ArcSpec, SolverConfig, Status};
use rstest::rstest;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn trivial_transport() {
    let arcs = vec![ArcSpec::new(0, 1, 3.0, f64::INFINITY.min(1e12))];
    let supply = vec![1.0, -1.0];
    let config = SolverConfig::<f64>::default();
    let sol = solve(2, &arcs, &supply, &config).unwrap();
    assert_eq!(sol.status, Status::Optimal);
    assert!(approx(sol.flow[0], 1.0));
    assert!(approx(sol.total_cost, 3.0));
    assert!(approx(sol.pi[1] - sol.pi[0], 3.0));
}

#[test]
fn two_to_two_assignment() {
    let arcs = vec![
        ArcSpec::new(0, 2, 1.0, 1e12),
        ArcSpec::new(0, 3, 2.0, 1e12),
        ArcSpec::new(1, 2, 2.0, 1e12),
        ArcSpec::new(1, 3, 1.0, 1e12),
    ];
    let supply = vec![1.0, 1.0, -1.0, -1.0];
    let config = SolverConfig::<f64>::default();
    let sol = solve(4, &arcs, &supply, &config).unwrap();
    assert_eq!(sol.status, Status::Optimal);
    assert!(approx(sol.flow[0], 1.0));
    assert!(approx(sol.flow[1], 0.0));
    assert!(approx(sol.flow[2], 0.0));
    assert!(approx(sol.flow[3], 1.0));
    assert!(approx(sol.total_cost, 2.0));
}

#[test]
fn bottleneck_routing() {
    let arcs = vec![ArcSpec::new(0, 1, 1.0, 1e12), ArcSpec::new(1, 2, 1.0, 1e12)];
    let supply = vec![2.0, 0.0, -2.0];
    let config = SolverConfig::<f64>::default();
    let sol = solve(3, &arcs, &supply, &config).unwrap();
    assert_eq!(sol.status, Status::Optimal);
    assert!(approx(sol.flow[0], 2.0));
    assert!(approx(sol.flow[1], 2.0));
    assert!(approx(sol.total_cost, 4.0));
}

#[test]
fn infeasible_without_arcs() {
    let arcs: Vec<ArcSpec<f64>> = vec![];
    let supply = vec![1.0, -1.0];
    let config = SolverConfig::<f64>::default();
    let sol = solve(2, &arcs, &supply, &config).unwrap();
    assert_eq!(sol.status, Status::Infeasible);
}

#[test]
fn diagonal_optimal() {
    let mut arcs = Vec::new();
    for i in 0..3usize {
        for j in 0..3usize {
            let cost = (i as f64 - j as f64).abs();
            arcs.push(ArcSpec::new(i, 3 + j, cost, 1e12));
        }
    }
    let supply = vec![1.0, 1.0, 1.0, -1.0, -1.0, -1.0];
    let config = SolverConfig::<f64>::default();
    let sol = solve(6, &arcs, &supply, &config).unwrap();
    assert_eq!(sol.status, Status::Optimal);
    assert!(approx(sol.total_cost, 0.0));
}

#[test]
fn degenerate_pivot_survival() {
    let arcs = vec![
        ArcSpec::new(0, 1, 1.0, 1e12),
        ArcSpec::new(0, 2, 1.0, 1e12),
        ArcSpec::new(1, 3, 1.0, 1e12),
        ArcSpec::new(2, 3, 1.0, 1e12),
    ];
    let supply = vec![1.0, 0.0, 0.0, -1.0];
    let config = SolverConfig::<f64>::default();
    let sol = solve(4, &arcs, &supply, &config).unwrap();
    assert_eq!(sol.status, Status::Optimal);
    assert!(approx(sol.total_cost, 2.0));
    assert!(sol.stats.iterations < 1000);
}

/// Reordering the arc list must not change the optimum value (§8 permutation
/// invariance), across a handful of independently-interesting instances.
#[rstest]
#[case(vec![ArcSpec::new(0, 2, 1.0, 1e12), ArcSpec::new(0, 3, 2.0, 1e12), ArcSpec::new(1, 2, 2.0, 1e12), ArcSpec::new(1, 3, 1.0, 1e12)], vec![1.0, 1.0, -1.0, -1.0], 4)]
#[case(vec![ArcSpec::new(0, 1, 1.0, 1e12), ArcSpec::new(1, 2, 1.0, 1e12)], vec![2.0, 0.0, -2.0], 3)]
fn permutation_invariant_optimum(#[case] arcs: Vec<ArcSpec<f64>>, #[case] supply: Vec<f64>, #[case] n: usize) {
    let config = SolverConfig::<f64>::default();
    let base = solve(n, &arcs, &supply, &config).unwrap();

    let mut reversed = arcs.clone();
    reversed.reverse();
    let flipped = solve(n, &reversed, &supply, &config).unwrap();

    assert_eq!(base.status, flipped.status);
    assert!(approx(base.total_cost, flipped.total_cost));
}
