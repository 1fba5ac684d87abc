//! Shortest-path tree derived from final distances.
//!
//! An edge `u -> v` is tight when `dist[u] + w == dist[v]`. Every reachable
//! vertex has a tight path from the source; a breadth-first search over tight
//! edges (out-edges in edge-list order) picks one deterministically, so the
//! tree depends only on the graph and the distances, not on which engine ran.

use std::collections::VecDeque;

use crate::distance::{Distance, DistanceVector};
use crate::graph::{Graph, VertexId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorTree {
    source: VertexId,
    parent: Vec<Option<VertexId>>,
}

impl PredecessorTree {
    /// `dist` must be the result of a shortest-path call on `graph` from `source`.
    pub fn from_distances(graph: &Graph, source: VertexId, dist: &DistanceVector) -> Self {
        let n = graph.vertex_count();
        let edges = graph.edges();
        let (offsets, order) = graph.out_index();
        let mut parent = vec![None; n];
        let mut seen = vec![false; n];
        let mut queue = VecDeque::new();
        if (source as usize) < n { seen[source as usize] = true; queue.push_back(source); }
        while let Some(u) = queue.pop_front() {
            let Distance::Finite(du) = dist[u as usize] else { continue };
            for &i in &order[offsets[u as usize]..offsets[u as usize + 1]] {
                let e = &edges[i];
                let v = e.v as usize;
                if seen[v] { continue; }
                if du.checked_add(e.weight as i64).map(Distance::Finite) == Some(dist[v]) {
                    seen[v] = true;
                    parent[v] = Some(u);
                    queue.push_back(e.v);
                }
            }
        }
        Self { source, parent }
    }

    #[inline] pub fn source(&self) -> VertexId { self.source }
    #[inline] pub fn parent(&self, v: VertexId) -> Option<VertexId> { self.parent.get(v as usize).copied().flatten() }
    pub fn as_slice(&self) -> &[Option<VertexId>] { &self.parent }

    /// Vertices from the source to `v` inclusive, or `None` if `v` is not in the tree.
    pub fn path_to(&self, v: VertexId) -> Option<Vec<VertexId>> {
        if v == self.source { return Some(vec![v]); }
        self.parent(v)?;
        let mut path = vec![v];
        let mut cur = v;
        while let Some(p) = self.parent(cur) {
            path.push(p);
            cur = p;
        }
        path.reverse();
        Some(path)
    }
}
