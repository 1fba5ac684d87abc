//! Single-threaded reference Bellman-Ford.
//! Edges are scanned in list order and updates are visible immediately within
//! a round. This engine is the oracle the parallel one is checked against.

use std::time::Instant;

use log::{debug, trace};

use crate::config::Config;
use crate::distance::{Distance, DistanceVector};
use crate::engine::{RoundObserver, RunInfo, ShortestPaths, Solution};
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::relax::{self, Candidate};

#[derive(Debug, Clone)]
pub struct SequentialBellmanFord {
    early_exit: bool,
}

impl Default for SequentialBellmanFord {
    fn default() -> Self { Self::new(Config::sequential()) }
}

impl SequentialBellmanFord {
    /// Only `early_exit` is relevant here.
    pub fn new(cfg: Config) -> Self { Self { early_exit: cfg.early_exit } }
}

impl ShortestPaths for SequentialBellmanFord {
    fn solve_observed(&self, graph: &Graph, source: VertexId, observer: &mut dyn RoundObserver) -> Result<Solution> {
        graph.check_source(source)?;
        let t0 = Instant::now();
        let n = graph.vertex_count();
        let edges = graph.edges();
        let mut dist = relax::initial(n, source);
        let mut info = RunInfo { workers: 1, chunk_size: edges.len(), ..RunInfo::default() };

        for round in 0..n.saturating_sub(1) {
            let mut updated = false;
            for e in edges {
                match relax::candidate(dist[e.u as usize], e) {
                    Candidate::Skip => {}
                    Candidate::Value(c) => {
                        let v = e.v as usize;
                        if relax::improves(c, dist[v]) { dist[v] = Distance::Finite(c); updated = true; info.relaxations += 1; }
                    }
                    Candidate::Overflow => {
                        debug!("sequential: distance overflow in round {round}, negative cycle");
                        return Err(Error::NegativeCycleDetected);
                    }
                }
            }
            info.rounds = round + 1;
            trace!("sequential: round {} updated={}", round, updated);
            observer.round_completed(round, &dist);
            if !updated && self.early_exit { info.converged_early = true; break; }
        }

        if let Some(e) = relax::find_violation(edges, &dist) {
            debug!("sequential: edge {} -> {} still relaxable after {} rounds", e.u, e.v, info.rounds);
            return Err(Error::NegativeCycleDetected);
        }
        debug!("sequential: n={} m={} rounds={} relaxations={} in {:?}", n, edges.len(), info.rounds, info.relaxations, t0.elapsed());
        Ok(Solution { distances: DistanceVector::new(dist), info })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Distance::{Finite, Unreachable};

    fn g(n: usize, edges: &[(u32, u32, i32)]) -> Graph { Graph::from_edges(n, edges.iter().copied()).unwrap() }

    #[test]
    fn classic_example() {
        let graph = g(5, &[(0, 1, 3), (0, 2, 8), (1, 3, 2), (2, 3, -4), (3, 4, 1)]);
        let d = SequentialBellmanFord::default().shortest_paths(&graph, 0).unwrap();
        assert_eq!(d.as_slice(), &[Finite(0), Finite(3), Finite(8), Finite(4), Finite(5)]);
    }

    #[test]
    fn early_exit_counts_rounds() {
        // edges listed in path order converge in one round, the second confirms
        let graph = g(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1)]);
        let s = SequentialBellmanFord::default().solve(&graph, 0).unwrap();
        assert_eq!(s.info.rounds, 2);
        assert!(s.info.converged_early);
        assert_eq!(s.info.relaxations, 3);
        let full = SequentialBellmanFord::new(Config::sequential().with_early_exit(false)).solve(&graph, 0).unwrap();
        assert_eq!(full.info.rounds, 3);
        assert_eq!(full.distances, s.distances);
    }

    #[test]
    fn negative_self_loop_single_vertex() {
        let graph = g(1, &[(0, 0, -1)]);
        assert_eq!(SequentialBellmanFord::default().shortest_paths(&graph, 0), Err(Error::NegativeCycleDetected));
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let graph = g(4, &[(0, 1, 2), (2, 3, -1), (3, 2, -1)]);
        let d = SequentialBellmanFord::default().shortest_paths(&graph, 0).unwrap();
        assert_eq!(d.as_slice(), &[Finite(0), Finite(2), Unreachable, Unreachable]);
    }

    #[test]
    fn observer_sees_every_round() {
        let graph = g(3, &[(1, 2, 1), (0, 1, 1)]);
        let mut seen: Vec<Vec<Distance>> = Vec::new();
        let mut obs = |_: usize, d: &[Distance]| seen.push(d.to_vec());
        SequentialBellmanFord::default().solve_observed(&graph, 0, &mut obs).unwrap();
        assert_eq!(seen, vec![vec![Finite(0), Finite(1), Unreachable], vec![Finite(0), Finite(1), Finite(2)]]);
    }

    #[test]
    fn invalid_source() {
        assert!(matches!(SequentialBellmanFord::default().solve(&Graph::new(2), 5), Err(Error::InvalidSource { .. })));
    }
}
