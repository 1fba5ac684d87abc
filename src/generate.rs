//! Seeded random graphs for tests and benchmarks.

use std::ops::RangeInclusive;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::{Graph, VertexId, Weight};

/// Benchmark weights: no negative cycle can occur.
pub const NON_NEGATIVE: RangeInclusive<Weight> = 0..=99;
/// Editor weights with negative edges.
pub const MIXED: RangeInclusive<Weight> = -10..=10;
pub const POSITIVE: RangeInclusive<Weight> = 1..=20;

/// `m` edges with uniform endpoints (self loops and duplicates allowed) and
/// uniform weights in `weights`.
pub fn random_graph(n: usize, m: usize, weights: RangeInclusive<Weight>, seed: u64) -> Graph {
    let mut g = Graph::with_capacity(n, if n == 0 { 0 } else { m });
    if n == 0 { return g; }
    let mut rng = SmallRng::seed_from_u64(seed);
    let hi = n.min(VertexId::MAX as usize + 1) as u64;
    for _ in 0..m {
        let u = rng.gen_range(0..hi) as VertexId;
        let v = rng.gen_range(0..hi) as VertexId;
        let w = rng.gen_range(weights.clone());
        // endpoints are drawn in range
        let _ = g.add_edge(u, v, w);
    }
    g
}

/// Random vertex of `g`, `None` for an empty graph.
pub fn random_source(g: &Graph, seed: u64) -> Option<VertexId> {
    if g.vertex_count() == 0 { return None; }
    let hi = g.vertex_count().min(VertexId::MAX as usize + 1) as u64;
    Some(SmallRng::seed_from_u64(seed).gen_range(0..hi) as VertexId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_a_seed() {
        let a = random_graph(50, 200, MIXED, 7);
        let b = random_graph(50, 200, MIXED, 7);
        assert_eq!(a, b);
        assert_eq!(a.edge_count(), 200);
        assert!(a.edges().iter().all(|e| MIXED.contains(&e.weight) && a.contains(e.u) && a.contains(e.v)));
        assert_ne!(a, random_graph(50, 200, MIXED, 8));
    }

    #[test]
    fn empty_graph() {
        let g = random_graph(0, 10, POSITIVE, 1);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(random_source(&g, 1), None);
    }
}
