//! Pieces shared by both engines: initial state, guarded candidates and the
//! post-pass negative-cycle check.

use crate::distance::Distance;
use crate::graph::{Edge, VertexId};

/// Outcome of evaluating `dist[u] + w` for one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Candidate {
    /// Tail unreachable, nothing to do.
    Skip,
    Value(i64),
    /// Sum out of range: only possible below a negative cycle.
    Overflow,
}

#[inline(always)]
pub(crate) fn candidate(du: Distance, e: &Edge) -> Candidate {
    match du.extend(e.weight) { None => Candidate::Skip, Some(Ok(x)) => Candidate::Value(x), Some(Err(())) => Candidate::Overflow }
}

/// True iff `cand` strictly improves `dv`.
#[inline(always)]
pub(crate) fn improves(cand: i64, dv: Distance) -> bool {
    match dv { Distance::Finite(d) => cand < d, Distance::Unreachable => true }
}

pub(crate) fn initial(n: usize, source: VertexId) -> Vec<Distance> {
    let mut dist = vec![Distance::Unreachable; n];
    dist[source as usize] = Distance::Finite(0);
    dist
}

/// First edge that can still be relaxed, if any. A hit means a negative cycle
/// is reachable from a vertex with finite distance.
pub(crate) fn find_violation<'a>(edges: &'a [Edge], dist: &[Distance]) -> Option<&'a Edge> {
    edges.iter().find(|e| match candidate(dist[e.u as usize], e) {
        Candidate::Skip => false,
        Candidate::Value(c) => improves(c, dist[e.v as usize]),
        Candidate::Overflow => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_guards_unreachable() {
        let e = Edge::new(0, 1, 7);
        assert_eq!(candidate(Distance::Unreachable, &e), Candidate::Skip);
        assert_eq!(candidate(Distance::Finite(-2), &e), Candidate::Value(5));
        assert_eq!(candidate(Distance::Finite(i64::MIN), &Edge::new(0, 1, -1)), Candidate::Overflow);
    }

    #[test]
    fn improves_is_strict() {
        assert!(improves(3, Distance::Unreachable));
        assert!(improves(3, Distance::Finite(4)));
        assert!(!improves(4, Distance::Finite(4)));
    }

    #[test]
    fn violation_found_only_when_relaxable() {
        let edges = [Edge::new(0, 1, 2), Edge::new(1, 0, -3)];
        let stable = [Distance::Finite(0), Distance::Finite(2)];
        assert_eq!(find_violation(&edges, &stable), Some(&edges[1]));
        let edges = [Edge::new(0, 1, 2), Edge::new(2, 0, -3)];
        let unreachable_tail = [Distance::Finite(0), Distance::Finite(2), Distance::Unreachable];
        assert_eq!(find_violation(&edges, &unreachable_tail), None);
    }
}
