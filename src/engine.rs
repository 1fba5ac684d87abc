//! Compute interface shared by the sequential and the parallel engine.

use serde::Serialize;

use crate::config::{Config, Mode};
use crate::distance::{Distance, DistanceVector};
use crate::error::Result;
use crate::graph::{Graph, VertexId};
use crate::parallel::ParallelBellmanFord;
use crate::sequential::SequentialBellmanFord;

/// Per-call statistics. Observational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RunInfo {
    /// Relaxation rounds performed, including a final round that changed nothing.
    pub rounds: usize,
    /// Successful distance updates.
    pub relaxations: u64,
    /// Workers that actually ran (1 for the sequential engine or after a pool failure).
    pub workers: usize,
    /// Edges per parallel chunk (`m` for the sequential engine).
    pub chunk_size: usize,
    pub converged_early: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub distances: DistanceVector,
    pub info: RunInfo,
}

/// Called after every relaxation round with the distances the next round reads.
pub trait RoundObserver {
    fn round_completed(&mut self, round: usize, dist: &[Distance]);
}

impl<F: FnMut(usize, &[Distance])> RoundObserver for F {
    fn round_completed(&mut self, round: usize, dist: &[Distance]) { self(round, dist) }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl RoundObserver for NoObserver {
    #[inline] fn round_completed(&mut self, _: usize, _: &[Distance]) {}
}

pub trait ShortestPaths {
    /// Runs Bellman-Ford from `source`, reporting every round to `observer`.
    fn solve_observed(&self, graph: &Graph, source: VertexId, observer: &mut dyn RoundObserver) -> Result<Solution>;

    fn solve(&self, graph: &Graph, source: VertexId) -> Result<Solution> {
        self.solve_observed(graph, source, &mut NoObserver)
    }

    /// Distances from `source`, or `Error::NegativeCycleDetected`.
    fn shortest_paths(&self, graph: &Graph, source: VertexId) -> Result<DistanceVector> {
        self.solve(graph, source).map(|s| s.distances)
    }
}

/// Either engine, chosen by [`Config::mode`].
#[derive(Debug, Clone)]
pub enum Engine {
    Sequential(SequentialBellmanFord),
    Parallel(ParallelBellmanFord),
}

impl Engine {
    pub fn new(cfg: Config) -> Self {
        match cfg.mode {
            Mode::Sequential => Engine::Sequential(SequentialBellmanFord::new(cfg)),
            Mode::Parallel => Engine::Parallel(ParallelBellmanFord::new(cfg)),
        }
    }

    pub fn mode(&self) -> Mode {
        match self { Engine::Sequential(_) => Mode::Sequential, Engine::Parallel(_) => Mode::Parallel }
    }
}

impl Default for Engine {
    fn default() -> Self { Self::new(Config::default()) }
}

impl ShortestPaths for Engine {
    fn solve_observed(&self, graph: &Graph, source: VertexId, observer: &mut dyn RoundObserver) -> Result<Solution> {
        match self {
            Engine::Sequential(e) => e.solve_observed(graph, source, observer),
            Engine::Parallel(e) => e.solve_observed(graph, source, observer),
        }
    }
}

pub fn sequential_shortest_paths(graph: &Graph, source: VertexId) -> Result<DistanceVector> {
    SequentialBellmanFord::default().shortest_paths(graph, source)
}

pub fn parallel_shortest_paths(graph: &Graph, source: VertexId) -> Result<DistanceVector> {
    ParallelBellmanFord::default().shortest_paths(graph, source)
}
