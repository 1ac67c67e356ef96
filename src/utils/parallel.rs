//! Process-wide switch for the rayon worker pool.
//!
//! Outputs never depend on the switch; it only selects between the
//! sequential and the pooled code path.  Without the `parallel` feature
//! every helper takes the sequential path.

#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "parallel")]
static POOL_ENABLED: AtomicBool = AtomicBool::new(true);

/// Smallest number of items a worker takes at once.
const MIN_ITEMS_PER_TASK: usize = 64;

/// Task granularity for `total_items` items, never zero.
pub fn preferred_chunk_size(total_items: usize) -> usize {
    total_items.clamp(1, MIN_ITEMS_PER_TASK)
}

/// Whether pooled code paths are currently selected.
pub fn parallelism_enabled() -> bool {
    #[cfg(feature = "parallel")]
    {
        POOL_ENABLED.load(Ordering::Relaxed)
    }
    #[cfg(not(feature = "parallel"))]
    {
        false
    }
}

/// Enables or disables the pool until the returned guard is dropped.
pub fn set_parallelism(enabled: bool) -> ParallelismGuard {
    #[cfg(feature = "parallel")]
    {
        ParallelismGuard {
            previous: POOL_ENABLED.swap(enabled, Ordering::Relaxed),
        }
    }
    #[cfg(not(feature = "parallel"))]
    {
        let _ = enabled;
        ParallelismGuard {}
    }
}

/// Restores the previous pool setting on drop.
#[must_use = "parallelism reverts when the guard is dropped"]
#[derive(Debug)]
pub struct ParallelismGuard {
    #[cfg(feature = "parallel")]
    previous: bool,
}

impl Drop for ParallelismGuard {
    fn drop(&mut self) {
        #[cfg(feature = "parallel")]
        POOL_ENABLED.store(self.previous, Ordering::Relaxed);
    }
}

/// Computes `f(0), .., f(len - 1)` in index order, on the worker pool when
/// parallelism is enabled.
pub fn map_indexed<T, F>(len: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    #[cfg(feature = "parallel")]
    if parallelism_enabled() {
        use rayon::prelude::*;
        return (0..len)
            .into_par_iter()
            .with_min_len(preferred_chunk_size(len))
            .map(f)
            .collect();
    }
    (0..len).map(f).collect()
}
