//! Single-source shortest paths with Bellman-Ford, in two interchangeable engines:
//!  - [`SequentialBellmanFord`]: single-threaded reference, in-place relaxation.
//!  - [`ParallelBellmanFord`]: edge list split across a rayon worker pool, one
//!    barrier per round, shared next-round buffer.
//!
//! Both return a [`DistanceVector`] or [`Error::NegativeCycleDetected`] and must
//! agree on every input; [`harness`] checks exactly that. A stable C ABI lives
//! in [`ffi`].
//!
//! ```
//! use bf_core::{Graph, ShortestPaths, ParallelBellmanFord, Distance};
//!
//! let mut g = Graph::new(3);
//! g.add_edge(0, 1, 5).unwrap();
//! let d = ParallelBellmanFord::with_workers(2).shortest_paths(&g, 0).unwrap();
//! assert_eq!(d.as_slice(), &[Distance::Finite(0), Distance::Finite(5), Distance::Unreachable]);
//! ```

pub mod config;
pub mod distance;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod generate;
pub mod graph;
pub mod harness;
pub mod parallel;
pub mod paths;
mod relax;
pub mod sequential;

pub use config::{Config, Mode, SyncStrategy, Workers};
pub use distance::{Distance, DistanceVector};
pub use engine::{parallel_shortest_paths, sequential_shortest_paths, Engine, NoObserver, RoundObserver, RunInfo, ShortestPaths, Solution};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, VertexId, Weight};
pub use parallel::ParallelBellmanFord;
pub use paths::PredecessorTree;
pub use sequential::SequentialBellmanFord;
