use network_simplex_core::{solve, ArcSpec, SolverConfig};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::time::Instant;

fn make_random_transport(n_supply: usize, n_demand: usize, seed: u64) -> (usize, Vec<ArcSpec<f64>>, Vec<f64>) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let n = n_supply + n_demand;
    let mut supply = vec![0.0f64; n];
    let mut total = 0.0f64;
    for u in 0..n_supply {
        let s = rng.gen_range(1.0..20.0);
        supply[u] = s;
        total += s;
    }
    for j in 0..n_demand {
        let share = total / n_demand as f64;
        supply[n_supply + j] = -share;
    }

    let mut arcs = Vec::with_capacity(n_supply * n_demand);
    for u in 0..n_supply {
        for j in 0..n_demand {
            let cost = rng.gen_range(1.0..50.0);
            arcs.push(ArcSpec::new(u, n_supply + j, cost, 1e9));
        }
    }
    (n, arcs, supply)
}

fn run_one(n_supply: usize, n_demand: usize, seed: u64) -> serde_json::Value {
    let (n, arcs, supply) = make_random_transport(n_supply, n_demand, seed);
    let config = SolverConfig::<f64>::default();

    let t0 = Instant::now();
    let sol = solve(n, &arcs, &supply, &config).expect("valid instance");
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

    serde_json::json!({
        "n_supply": n_supply,
        "n_demand": n_demand,
        "m": arcs.len(),
        "status": format!("{:?}", sol.status),
        "total_cost": sol.total_cost,
        "iterations": sol.stats.iterations,
        "heuristic_pivots": sol.stats.heuristic_pivots_applied,
        "degenerate_pivots": sol.stats.degenerate_pivots,
        "elapsed_ms": elapsed_ms,
    })
}

fn main() {
    let sizes = [(10, 10), (50, 50), (100, 80), (200, 150)];
    let mut results = Vec::new();
    for (i, &(ns, nd)) in sizes.iter().enumerate() {
        let r = run_one(ns, nd, 1000 + i as u64);
        eprintln!("{}", r);
        results.push(r);
    }
    let report = serde_json::json!({ "runs": results });
    println!("{}", serde_json::to_string_pretty(&report).unwrap());
}
