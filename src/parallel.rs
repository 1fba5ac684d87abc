//! Multi-threaded Bellman-Ford.
//!
//! The edge list is cut into contiguous chunks of `ceil(m / workers)` edges.
//! Every round the workers read the distances as of the start of the round
//! and lower entries of a shared next buffer; the round ends when the rayon
//! scope joins all chunk tasks, after which the buffer is copied back. The
//! pool is built once per call and dropped when the call returns.

mod buffer;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

use crossbeam_utils::CachePadded;
use log::{debug, trace, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::{Config, SyncStrategy, Workers};
use crate::distance::{Distance, DistanceVector};
use crate::engine::{RoundObserver, RunInfo, ShortestPaths, Solution};
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, VertexId};
use crate::relax::{self, Candidate};
use buffer::{AtomicBuffer, LockedBuffer, RoundBuffer};

#[derive(Debug, Clone)]
pub struct ParallelBellmanFord {
    workers: Workers,
    sync: SyncStrategy,
    early_exit: bool,
}

impl Default for ParallelBellmanFord {
    fn default() -> Self { Self::new(Config::parallel(Workers::Auto)) }
}

impl ParallelBellmanFord {
    pub fn new(cfg: Config) -> Self { Self { workers: cfg.workers, sync: cfg.sync, early_exit: cfg.early_exit } }

    pub fn with_workers(workers: usize) -> Self { Self::new(Config::parallel(Workers::Fixed(workers))) }

    /// `None` means relax inline on the calling thread.
    fn build_pool(workers: usize) -> Option<ThreadPool> {
        if workers <= 1 { return None; }
        match ThreadPoolBuilder::new().num_threads(workers).thread_name(|i| format!("bf-worker-{i}")).build() {
            Ok(pool) => Some(pool),
            Err(e) => { warn!("could not create a pool of {workers} workers ({e}); relaxing on the calling thread"); None }
        }
    }

    fn run<B: RoundBuffer>(&self, graph: &Graph, source: VertexId, observer: &mut dyn RoundObserver) -> Result<Solution> {
        let t0 = Instant::now();
        let n = graph.vertex_count();
        let edges = graph.edges();
        let pool = Self::build_pool(self.workers.resolve());
        let workers = pool.as_ref().map_or(1, ThreadPool::current_num_threads);
        let chunk_size = edges.len().div_ceil(workers).max(1);
        let mut info = RunInfo { workers, chunk_size, ..RunInfo::default() };
        debug!("parallel: n={} m={} workers={} chunk_size={} sync={:?}", n, edges.len(), workers, chunk_size, self.sync);

        let mut dist = relax::initial(n, source);
        let mut next = B::with_len(n);

        for round in 0..n.saturating_sub(1) {
            next.load(&dist);
            let updated = CachePadded::new(AtomicBool::new(false));
            let overflow = AtomicBool::new(false);
            let relaxations = AtomicU64::new(0);
            {
                let (snapshot, next): (&[Distance], &B) = (dist.as_slice(), &next);
                let relax_chunk = |chunk: &[Edge]| {
                    let mut local = 0u64;
                    for e in chunk {
                        match relax::candidate(snapshot[e.u as usize], e) {
                            Candidate::Skip => {}
                            Candidate::Value(c) => if next.lower(e.v as usize, c) { local += 1; },
                            Candidate::Overflow => { overflow.store(true, Ordering::Relaxed); break; }
                        }
                    }
                    if local > 0 {
                        updated.store(true, Ordering::Relaxed);
                        relaxations.fetch_add(local, Ordering::Relaxed);
                    }
                };
                match &pool {
                    // the scope returns only after every chunk task has finished
                    Some(pool) => pool.scope(|s| {
                        for chunk in edges.chunks(chunk_size) {
                            let relax_chunk = &relax_chunk;
                            s.spawn(move |_| relax_chunk(chunk));
                        }
                    }),
                    None => edges.chunks(chunk_size).for_each(relax_chunk),
                }
            }
            info.rounds = round + 1;
            info.relaxations += relaxations.into_inner();
            if overflow.into_inner() {
                debug!("parallel: distance overflow in round {round}, negative cycle");
                return Err(Error::NegativeCycleDetected);
            }
            let updated = updated.load(Ordering::Relaxed);
            trace!("parallel: round {} updated={}", round, updated);
            if updated { next.store(&mut dist); }
            observer.round_completed(round, &dist);
            if !updated && self.early_exit { info.converged_early = true; break; }
        }

        if let Some(e) = relax::find_violation(edges, &dist) {
            debug!("parallel: edge {} -> {} still relaxable after {} rounds", e.u, e.v, info.rounds);
            return Err(Error::NegativeCycleDetected);
        }
        debug!("parallel: rounds={} relaxations={} in {:?}", info.rounds, info.relaxations, t0.elapsed());
        Ok(Solution { distances: DistanceVector::new(dist), info })
    }
}

impl ShortestPaths for ParallelBellmanFord {
    fn solve_observed(&self, graph: &Graph, source: VertexId, observer: &mut dyn RoundObserver) -> Result<Solution> {
        graph.check_source(source)?;
        match self.sync {
            SyncStrategy::Atomic => self.run::<AtomicBuffer>(graph, source, observer),
            SyncStrategy::Locked => self.run::<LockedBuffer>(graph, source, observer),
        }
    }
}
