//! C ABI over the two engines.
//!
//! The graph is passed as three parallel edge arrays (`us`, `vs`, `ws`, each of
//! length `m`). Unreachable vertices are reported through `out_reachable`,
//! their `out_dist` slot is left at 0.

use core::slice;

use crate::config::{Config, Workers};
use crate::engine::{Engine, ShortestPaths};
use crate::error::Error;
use crate::graph::Graph;

pub const BF_OK: i32 = 0;
pub const BF_ERR_NULL: i32 = -1;
pub const BF_ERR_SOURCE: i32 = -2;
pub const BF_ERR_EDGE: i32 = -3;
pub const BF_ERR_NEGATIVE_CYCLE: i32 = -4;
pub const BF_ERR_MODE: i32 = -5;

pub const BF_MODE_SEQUENTIAL: u32 = 0;
pub const BF_MODE_PARALLEL: u32 = 1;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct BfRunInfo {
    pub rounds: u32,
    pub relaxations: u64,
    pub workers: u32,
    pub converged_early: u8,
    pub error_code: i32, // same value as the return code
}

#[inline(always)]
unsafe fn as_slice<'a, T>(ptr: *const T, len: usize) -> &'a [T] {
    if len == 0 { &[] } else { slice::from_raw_parts(ptr, len) }
}

/// Runs one engine. `mode` is `BF_MODE_SEQUENTIAL` or `BF_MODE_PARALLEL`;
/// `workers == 0` picks one worker per CPU. `info` may be null.
///
/// # Safety
/// `us`, `vs`, `ws` must point to `m` readable elements and `out_dist`,
/// `out_reachable` to `n` writable elements.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn bf_shortest_paths(
    mode: u32,
    n: u32,
    us: *const u32,
    vs: *const u32,
    ws: *const i32,
    m: u32,
    source: u32,
    workers: u32,
    out_dist: *mut i64,
    out_reachable: *mut u8,
    info: *mut BfRunInfo,
) -> i32 {
    let rc = run(mode, n, us, vs, ws, m, source, workers, out_dist, out_reachable, info);
    if !info.is_null() { (*info).error_code = rc; }
    rc
}

#[allow(clippy::too_many_arguments)]
unsafe fn run(
    mode: u32, n: u32, us: *const u32, vs: *const u32, ws: *const i32, m: u32, source: u32, workers: u32,
    out_dist: *mut i64, out_reachable: *mut u8, info: *mut BfRunInfo,
) -> i32 {
    if out_dist.is_null() || out_reachable.is_null() { return BF_ERR_NULL; }
    if m > 0 && (us.is_null() || vs.is_null() || ws.is_null()) { return BF_ERR_NULL; }
    let mut cfg = match mode { BF_MODE_SEQUENTIAL => Config::sequential(), BF_MODE_PARALLEL => Config::parallel(Workers::Auto), _ => return BF_ERR_MODE };
    if workers > 0 { cfg.workers = Workers::Fixed(workers as usize); }

    let (m, n) = (m as usize, n as usize);
    let (us, vs, ws) = (as_slice(us, m), as_slice(vs, m), as_slice(ws, m));
    let graph = match Graph::from_edges(n, us.iter().zip(vs).zip(ws).map(|((&u, &v), &w)| (u, v, w))) {
        Ok(g) => g,
        Err(_) => return BF_ERR_EDGE,
    };
    let solution = match Engine::new(cfg).solve(&graph, source) {
        Ok(s) => s,
        Err(Error::InvalidSource { .. }) => return BF_ERR_SOURCE,
        Err(Error::NegativeCycleDetected) => return BF_ERR_NEGATIVE_CYCLE,
        Err(_) => return BF_ERR_EDGE,
    };

    let dist = slice::from_raw_parts_mut(out_dist, n);
    let reach = slice::from_raw_parts_mut(out_reachable, n);
    for ((d, r), x) in dist.iter_mut().zip(reach.iter_mut()).zip(solution.distances.iter()) {
        match x.finite() { Some(v) => { *d = v; *r = 1; } None => { *d = 0; *r = 0; } }
    }
    if !info.is_null() {
        let i = solution.info;
        *info = BfRunInfo {
            rounds: i.rounds as u32,
            relaxations: i.relaxations,
            workers: i.workers as u32,
            converged_early: i.converged_early as u8,
            error_code: BF_OK,
        };
    }
    BF_OK
}
