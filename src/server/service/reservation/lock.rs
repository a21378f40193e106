//! Per-space write locks.
//!
//! Serialises the check-then-write sequence of reservation writes that target the same
//! space. Writes on different spaces never wait on each other. Locks live in process memory,
//! so running several server processes against one database needs a database-level guard
//! instead.
//!
//! An entry only lives while someone holds or waits on it; the last guard to drop removes
//! it, so the map is bounded by the number of in-flight writes.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

type LockMap = DashMap<i32, Arc<Mutex<()>>>;

#[derive(Clone, Default)]
pub struct SpaceLocks {
    locks: Arc<LockMap>,
}

/// Exclusive access to one space. Releasing it evicts the entry when nobody else waits.
pub struct SpaceGuard {
    space_id: i32,
    guard: Option<OwnedMutexGuard<()>>,
    locks: Arc<LockMap>,
}

impl SpaceLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `space_id`. Access is released when the guard drops.
    pub async fn acquire(&self, space_id: i32) -> SpaceGuard {
        // Clone the Arc out so the map shard is unlocked before awaiting.
        let lock = Arc::clone(self.locks.entry(space_id).or_default().value());

        SpaceGuard {
            space_id,
            guard: Some(lock.lock_owned().await),
            locks: Arc::clone(&self.locks),
        }
    }

    /// Number of spaces that currently have a holder or waiter.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

impl Drop for SpaceGuard {
    fn drop(&mut self) {
        self.guard.take();

        // The shard lock is held while checking, so no acquire can clone the Arc in between.
        self.locks
            .remove_if(&self.space_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}
