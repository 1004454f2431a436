//! Single-slot snapshot cache with a fixed TTL.
//!
//! Holds at most one materialized listing; writers drop it, the next
//! unfiltered read refills it. Uses `tokio::time::Instant` so tests can
//! drive the clock deterministically.

use tokio::time::{Duration, Instant};

pub struct ListCache<T> {
    ttl: Duration,
    slot: Option<Snapshot<T>>,
}

struct Snapshot<T> {
    items: Vec<T>,
    taken_at: Instant,
}

impl<T: Clone> ListCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, slot: None }
    }

    /// Return the cached snapshot if it is younger than the TTL.
    /// A snapshot exactly `ttl` old counts as stale.
    pub fn fresh(&self) -> Option<Vec<T>> {
        let snap = self.slot.as_ref()?;
        if snap.taken_at.elapsed() < self.ttl {
            Some(snap.items.clone())
        } else {
            None
        }
    }

    pub fn fill(&mut self, items: Vec<T>) {
        self.slot = Some(Snapshot { items, taken_at: Instant::now() });
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}
