//! Runs both engines on the same input and checks that they agree.
//!
//! Agreement means both report a negative cycle, or both return vectors that
//! are equal slot by slot (unreachable only matches unreachable). Wall-clock
//! times are recorded for reporting and play no part in the verdict.

use std::time::{Duration, Instant};

use log::{debug, error};
use serde::Serialize;

use crate::distance::DistanceVector;
use crate::engine::{RunInfo, ShortestPaths, Solution};
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::parallel::ParallelBellmanFord;
use crate::sequential::SequentialBellmanFord;

/// What one engine produced for a valid source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Distances(DistanceVector),
    NegativeCycle,
}

impl Outcome {
    fn label(&self) -> &'static str {
        match self { Outcome::Distances(_) => "returned distances", Outcome::NegativeCycle => "detected a negative cycle" }
    }
}

#[derive(Debug, Clone)]
pub struct EngineRun {
    pub outcome: Outcome,
    pub info: Option<RunInfo>,
    pub elapsed: Duration,
}

fn timed<E: ShortestPaths>(engine: &E, graph: &Graph, source: VertexId) -> Result<EngineRun> {
    let t0 = Instant::now();
    let res = engine.solve(graph, source);
    let elapsed = t0.elapsed();
    let (outcome, info) = match res {
        Ok(Solution { distances, info }) => (Outcome::Distances(distances), Some(info)),
        Err(Error::NegativeCycleDetected) => (Outcome::NegativeCycle, None),
        Err(e) => return Err(e),
    };
    Ok(EngineRun { outcome, info, elapsed })
}

/// Both runs of a successful comparison.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub sequential: EngineRun,
    pub parallel: EngineRun,
}

impl Comparison {
    /// The outcome both engines agreed on.
    pub fn outcome(&self) -> &Outcome { &self.sequential.outcome }

    pub fn report(&self, graph: &Graph, source: VertexId) -> Report {
        let ms = |d: Duration| d.as_secs_f64() * 1000.0;
        Report {
            n: graph.vertex_count(),
            m: graph.edge_count(),
            source,
            negative_cycle: matches!(self.outcome(), Outcome::NegativeCycle),
            reachable: match self.outcome() { Outcome::Distances(d) => d.iter().filter(|x| x.is_finite()).count(), Outcome::NegativeCycle => 0 },
            sequential_ms: ms(self.sequential.elapsed),
            parallel_ms: ms(self.parallel.elapsed),
            speedup: ms(self.sequential.elapsed) / ms(self.parallel.elapsed).max(1e-9),
            sequential: self.sequential.info,
            parallel: self.parallel.info,
        }
    }
}

/// Serializable summary of one comparison (benchmark output).
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub n: usize,
    pub m: usize,
    pub source: VertexId,
    pub negative_cycle: bool,
    pub reachable: usize,
    pub sequential_ms: f64,
    pub parallel_ms: f64,
    pub speedup: f64,
    pub sequential: Option<RunInfo>,
    pub parallel: Option<RunInfo>,
}

/// `Ok(())` when the two outcomes agree, otherwise the first discrepancy.
pub fn check_equivalent(sequential: &Outcome, parallel: &Outcome) -> Result<()> {
    match (sequential, parallel) {
        (Outcome::NegativeCycle, Outcome::NegativeCycle) => Ok(()),
        (Outcome::Distances(a), Outcome::Distances(b)) => {
            if a.len() != b.len() { return Err(Error::OutcomeMismatch { sequential: "returned distances", parallel: "returned a vector of a different length" }); }
            match a.iter().zip(b.iter()).enumerate().find(|(_, (x, y))| x != y) {
                None => Ok(()),
                Some((v, (x, y))) => Err(Error::Mismatch { vertex: v as VertexId, sequential: x, parallel: y }),
            }
        }
        (a, b) => Err(Error::OutcomeMismatch { sequential: a.label(), parallel: b.label() }),
    }
}

/// Runs `seq` then `par` on `graph` from `source` and compares them.
/// Invalid sources are reported as such, before either engine relaxes anything.
pub fn compare_with(seq: &SequentialBellmanFord, par: &ParallelBellmanFord, graph: &Graph, source: VertexId) -> Result<Comparison> {
    let sequential = timed(seq, graph, source)?;
    let parallel = timed(par, graph, source)?;
    if let Err(e) = check_equivalent(&sequential.outcome, &parallel.outcome) {
        error!("engine mismatch on n={} m={} source={}: {}", graph.vertex_count(), graph.edge_count(), source, e);
        return Err(e);
    }
    debug!("engines agree ({}): sequential {:?}, parallel {:?}", sequential.outcome.label(), sequential.elapsed, parallel.elapsed);
    Ok(Comparison { sequential, parallel })
}

/// [`compare_with`] using default engines.
pub fn compare(graph: &Graph, source: VertexId) -> Result<Comparison> {
    compare_with(&SequentialBellmanFord::default(), &ParallelBellmanFord::default(), graph, source)
}
