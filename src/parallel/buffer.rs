//! Shared "next round" distance buffers.
//!
//! During a round workers only call [`RoundBuffer::lower`], concurrently.
//! `load`/`store` take `&mut self` and run on the orchestrating thread
//! between rounds, so they need no synchronization.

use std::sync::atomic::{AtomicI64, Ordering};

use parking_lot::Mutex;

use crate::distance::Distance;
use crate::relax;

pub(crate) trait RoundBuffer: Sync {
    fn with_len(n: usize) -> Self where Self: Sized;
    /// Overwrites the buffer with `dist`.
    fn load(&mut self, dist: &[Distance]);
    /// Lowers slot `v` to `cand` if that is an improvement. The compare and the
    /// write form one indivisible step. Returns whether this call lowered it.
    fn lower(&self, v: usize, cand: i64) -> bool;
    fn store(&mut self, dist: &mut [Distance]);
}

// i64::MAX never occurs as a finite distance (see `Distance::extend`).
const UNREACHABLE: i64 = i64::MAX;

#[inline(always)] fn encode(d: Distance) -> i64 { d.finite().unwrap_or(UNREACHABLE) }
#[inline(always)] fn decode(x: i64) -> Distance { if x == UNREACHABLE { Distance::Unreachable } else { Distance::Finite(x) } }

/// One atomic per vertex, lowered with `fetch_min`.
pub(crate) struct AtomicBuffer(Vec<AtomicI64>);

impl RoundBuffer for AtomicBuffer {
    fn with_len(n: usize) -> Self { Self((0..n).map(|_| AtomicI64::new(UNREACHABLE)).collect()) }

    fn load(&mut self, dist: &[Distance]) {
        for (slot, &d) in self.0.iter_mut().zip(dist) { *slot.get_mut() = encode(d); }
    }

    #[inline]
    fn lower(&self, v: usize, cand: i64) -> bool {
        let slot = &self.0[v];
        // cheap pre-check avoids an RMW on slots that cannot improve
        if slot.load(Ordering::Relaxed) <= cand { return false; }
        slot.fetch_min(cand, Ordering::Relaxed) > cand
    }

    fn store(&mut self, dist: &mut [Distance]) {
        for (d, slot) in dist.iter_mut().zip(self.0.iter_mut()) { *d = decode(*slot.get_mut()); }
    }
}

/// A single mutex over the whole buffer.
pub(crate) struct LockedBuffer(Mutex<Vec<Distance>>);

impl RoundBuffer for LockedBuffer {
    fn with_len(n: usize) -> Self { Self(Mutex::new(vec![Distance::Unreachable; n])) }

    fn load(&mut self, dist: &[Distance]) { self.0.get_mut().copy_from_slice(dist); }

    #[inline]
    fn lower(&self, v: usize, cand: i64) -> bool {
        let mut next = self.0.lock();
        if relax::improves(cand, next[v]) { next[v] = Distance::Finite(cand); true } else { false }
    }

    fn store(&mut self, dist: &mut [Distance]) { dist.copy_from_slice(self.0.get_mut()); }
}
