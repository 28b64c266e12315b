//! Mutation lock serializing DDL-class commands.
//!
//! Each router owns one lock. It is released when the [`MutationGuard`]
//! drops, whether the backend call returned, failed, or panicked.

use parking_lot::{Mutex, MutexGuard};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::debug;

/// Exclusive lock around mutating backend calls.
#[derive(Debug, Default)]
pub struct MutationLock {
    inner: Mutex<()>,
    acquisitions: AtomicU64,
}

/// Proof that the [`MutationLock`] is held; releases it on drop.
#[must_use = "the mutation lock is released as soon as the guard is dropped"]
#[derive(Debug)]
pub struct MutationGuard<'a> {
    _guard: MutexGuard<'a, ()>,
}

impl MutationLock {
    /// Unlocked lock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Block until the lock is free and take it.
    pub fn acquire(&self) -> MutationGuard<'_> {
        let guard = match self.inner.try_lock() {
            Some(guard) => guard,
            None => {
                let started = Instant::now();
                let guard = self.inner.lock();
                debug!(
                    waited_us = started.elapsed().as_micros() as u64,
                    "waited for mutation lock"
                );
                guard
            }
        };
        self.acquisitions.fetch_add(1, Ordering::Relaxed);
        MutationGuard { _guard: guard }
    }

    /// Run `f` while holding the lock.
    pub fn run<T>(&self, f: impl FnOnce() -> T) -> T {
        let _guard = self.acquire();
        f()
    }

    /// Whether some caller currently holds the lock.
    pub fn is_locked(&self) -> bool {
        self.inner.is_locked()
    }

    /// Total number of successful acquisitions.
    pub fn acquisitions(&self) -> u64 {
        self.acquisitions.load(Ordering::Relaxed)
    }
}
