//! Directed, edge-weighted graph: a vertex count plus an ordered edge list.
//!
//! Vertices are the dense range `0..vertex_count`. Edges keep insertion order,
//! which the parallel engine relies on for deterministic chunking.

use crate::error::{Error, Result};

pub type VertexId = u32;
pub type Weight = i32;

/// One directed edge `u -> v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub u: VertexId,
    pub v: VertexId,
    pub weight: Weight,
}

impl Edge {
    #[inline] pub fn new(u: VertexId, v: VertexId, weight: Weight) -> Self { Self { u, v, weight } }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    n: usize,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Self { Self { n: vertex_count, edges: Vec::new() } }

    pub fn with_capacity(vertex_count: usize, edge_capacity: usize) -> Self {
        Self { n: vertex_count, edges: Vec::with_capacity(edge_capacity) }
    }

    /// Builds a graph from an edge iterator, rejecting the first out-of-range endpoint.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (VertexId, VertexId, Weight)>,
    {
        let edges = edges.into_iter();
        let mut g = Self::with_capacity(vertex_count, edges.size_hint().0);
        for (u, v, w) in edges { g.add_edge(u, v, w)?; }
        Ok(g)
    }

    /// Appends `u -> v` with the given weight. Both endpoints must lie in `0..vertex_count`.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> Result<()> {
        if !self.contains(u) || !self.contains(v) {
            return Err(Error::InvalidEdge { u, v, vertex_count: self.n });
        }
        self.edges.push(Edge::new(u, v, weight));
        Ok(())
    }

    #[inline] pub fn vertex_count(&self) -> usize { self.n }
    #[inline] pub fn edge_count(&self) -> usize { self.edges.len() }
    #[inline] pub fn edges(&self) -> &[Edge] { &self.edges }
    #[inline] pub fn contains(&self, x: VertexId) -> bool { (x as usize) < self.n }

    pub(crate) fn check_source(&self, source: VertexId) -> Result<()> {
        if self.contains(source) { Ok(()) } else { Err(Error::InvalidSource { vertex: source, vertex_count: self.n }) }
    }

    /// Out-edge offsets in CSR form (len n+1) plus edge indices grouped by tail,
    /// each group in edge-list order.
    pub(crate) fn out_index(&self) -> (Vec<usize>, Vec<usize>) {
        let mut offsets = vec![0usize; self.n + 1];
        for e in &self.edges { offsets[e.u as usize + 1] += 1; }
        for i in 0..self.n { offsets[i + 1] += offsets[i]; }
        let mut cursor = offsets.clone();
        let mut order = vec![0usize; self.edges.len()];
        for (i, e) in self.edges.iter().enumerate() {
            let slot = &mut cursor[e.u as usize];
            order[*slot] = i;
            *slot += 1;
        }
        (offsets, order)
    }
}
