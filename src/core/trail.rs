use super::constants::{TRAIL_CAPACITY, TRAIL_LIFETIME_MS};
use super::schedule::Deferred;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u64);

/// Result of spawning one trail marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spawned {
    pub id: MarkerId,
    /// Oldest marker pushed out because the queue went over capacity.
    pub evicted: Option<MarkerId>,
    pub expiry: Deferred<MarkerId>,
}

/// Bounded queue of live cursor-trail markers, oldest at the front.
#[derive(Clone, Debug)]
pub struct Trail {
    live: VecDeque<MarkerId>,
    capacity: usize,
    next_id: u64,
}

impl Default for Trail {
    fn default() -> Self {
        Self::with_capacity(TRAIL_CAPACITY)
    }
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            live: VecDeque::with_capacity(capacity + 1),
            capacity,
            next_id: 0,
        }
    }

    pub fn spawn(&mut self) -> Spawned {
        let id = MarkerId(self.next_id);
        self.next_id += 1;
        self.live.push_back(id);
        let evicted = if self.live.len() > self.capacity {
            self.live.pop_front()
        } else {
            None
        };
        Spawned {
            id,
            evicted,
            expiry: Deferred::after(TRAIL_LIFETIME_MS, id),
        }
    }

    /// Drop `id` from the queue if it is still there. Returns false when the
    /// marker was already evicted.
    pub fn expire(&mut self, id: MarkerId) -> bool {
        match self.live.iter().position(|m| *m == id) {
            Some(i) => {
                self.live.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: MarkerId) -> bool {
        self.live.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn oldest(&self) -> Option<MarkerId> {
        self.live.front().copied()
    }
}
