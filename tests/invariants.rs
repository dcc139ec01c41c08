use network_simplex_core::{solve, ArcSpec, SolverConfig, Status};
use rand::{rngs::SmallRng, Rng, SeedableRng};

struct RandomInstance {
    n: usize,
    arcs: Vec<ArcSpec<f64>>,
    supply: Vec<f64>,
}

fn random_transport_instance(seed: u64, n_supply: usize, n_demand: usize) -> RandomInstance {
    let mut rng = SmallRng::seed_from_u64(seed);
    let n = n_supply + n_demand;
    let mut raw_supply = vec![0.0f64; n_supply];
    let mut total = 0.0f64;
    for s in raw_supply.iter_mut() {
        *s = rng.gen_range(1.0..10.0);
        total += *s;
    }
    let mut supply = vec![0.0f64; n];
    supply[..n_supply].copy_from_slice(&raw_supply);
    let share = total / n_demand as f64;
    for j in 0..n_demand {
        supply[n_supply + j] = -share;
    }

    let mut arcs = Vec::new();
    for u in 0..n_supply {
        for j in 0..n_demand {
            if rng.gen_bool(0.7) {
                arcs.push(ArcSpec::new(u, n_supply + j, rng.gen_range(1.0..20.0), 1e12));
            }
        }
    }
    // guarantee at least one spanning arc per demand node so the instance stays feasible
    for j in 0..n_demand {
        if !arcs.iter().any(|a| a.target == n_supply + j) {
            arcs.push(ArcSpec::new(0, n_supply + j, rng.gen_range(1.0..20.0), 1e12));
        }
    }

    RandomInstance { n, arcs, supply }
}

/// Flow conservation: for each node, inflow - outflow == supply (§8 Invariants).
fn assert_flow_conservation(inst: &RandomInstance, flow: &[f64]) {
    let mut net = vec![0.0f64; inst.n];
    for (e, a) in inst.arcs.iter().enumerate() {
        net[a.source] -= flow[e];
        net[a.target] += flow[e];
    }
    for u in 0..inst.n {
        assert!((net[u] - inst.supply[u]).abs() < 1e-4, "conservation violated at node {u}: net={} supply={}", net[u], inst.supply[u]);
    }
}

/// LOWER arcs (flow == 0, non-basic) must have reduced cost >= -eps; UPPER
/// arcs (flow == capacity, non-basic) must have reduced cost <= +eps (§8).
fn assert_reduced_cost_bounds(inst: &RandomInstance, flow: &[f64], pi: &[f64], eps: f64) {
    for (e, a) in inst.arcs.iter().enumerate() {
        let reduced = a.cost + pi[a.source] - pi[a.target];
        let scale = pi[a.source].abs().max(pi[a.target].abs()).max(a.cost.abs()).max(1.0);
        if flow[e].abs() < 1e-7 {
            assert!(reduced >= -eps * scale * 10.0, "lower arc {e} reduced cost {reduced} too negative");
        } else if (flow[e] - a.capacity).abs() < 1e-7 {
            assert!(reduced <= eps * scale * 10.0, "upper arc {e} reduced cost {reduced} too positive");
        }
    }
}

#[test]
fn randomized_transport_instances_satisfy_invariants() {
    for seed in 0..12u64 {
        let inst = random_transport_instance(seed, 4, 3);
        let config = SolverConfig::<f64>::default();
        let sol = solve(inst.n, &inst.arcs, &inst.supply, &config).unwrap();
        assert_eq!(sol.status, Status::Optimal, "seed {seed} expected optimal");

        assert_flow_conservation(&inst, &sol.flow);
        assert_reduced_cost_bounds(&inst, &sol.flow, &sol.pi, config.eps);

        let lhs: f64 = (0..inst.n).map(|u| inst.supply[u] * sol.pi[u]).sum();
        assert!((lhs - sol.total_cost).abs() < 1e-3, "duality violated: {lhs} != {}", sol.total_cost);
    }
}

#[test]
fn same_input_and_tie_break_gives_same_output() {
    let inst = random_transport_instance(7, 5, 4);
    let config = SolverConfig::<f64>::default();
    let first = solve(inst.n, &inst.arcs, &inst.supply, &config).unwrap();
    let second = solve(inst.n, &inst.arcs, &inst.supply, &config).unwrap();
    assert_eq!(first.status, second.status);
    assert_eq!(first.flow, second.flow);
    assert_eq!(first.stats.iterations, second.stats.iterations);
}

#[test]
fn permutation_of_arcs_preserves_optimum_value() {
    let inst = random_transport_instance(11, 4, 4);
    let config = SolverConfig::<f64>::default();
    let base = solve(inst.n, &inst.arcs, &inst.supply, &config).unwrap();

    let mut permuted = inst.arcs.clone();
    permuted.reverse();
    let perm = solve(inst.n, &permuted, &inst.supply, &config).unwrap();

    assert_eq!(base.status, perm.status);
    assert!((base.total_cost - perm.total_cost).abs() < 1e-3);
}

#[test]
fn larger_random_instances_terminate_and_balance_duality() {
    for seed in 20..26u64 {
        let inst = random_transport_instance(seed, 8, 6);
        let config = SolverConfig::<f64>::default();
        let sol = solve(inst.n, &inst.arcs, &inst.supply, &config).unwrap();
        assert_eq!(sol.status, Status::Optimal);
        assert!(sol.stats.iterations < 10_000);
        let lhs: f64 = (0..inst.n).map(|u| inst.supply[u] * sol.pi[u]).sum();
        assert!((lhs - sol.total_cost).abs() < 1e-2);
    }
}
