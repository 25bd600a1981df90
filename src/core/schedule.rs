// Deferred work described as plain data.
//
// Handlers never start timers themselves. They return [`Deferred`] values
// that the browser layer hands to `setTimeout` and that host tests feed into
// a [`Timeline`], a virtual clock that fires tasks in due order.

/// A task to run once `delay_ms` has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deferred<T> {
    pub delay_ms: u32,
    pub task: T,
}

impl<T> Deferred<T> {
    pub fn after(delay_ms: u32, task: T) -> Self {
        Self { delay_ms, task }
    }
}

#[derive(Debug)]
struct Pending<T> {
    due_ms: u64,
    seq: u64,
    task: T,
}

/// Virtual timer queue. Tasks with the same due time fire in the order they
/// were scheduled, like browser timers.
#[derive(Debug)]
pub struct Timeline<T> {
    now_ms: u64,
    seq: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            seq: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn schedule(&mut self, deferred: Deferred<T>) {
        self.pending.push(Pending {
            due_ms: self.now_ms + u64::from(deferred.delay_ms),
            seq: self.seq,
            task: deferred.task,
        });
        self.seq += 1;
    }

    pub fn schedule_all(&mut self, deferred: impl IntoIterator<Item = Deferred<T>>) {
        for d in deferred {
            self.schedule(d);
        }
    }

    /// Move the clock forward and return every task that came due, oldest
    /// first.
    pub fn advance(&mut self, ms: u64) -> Vec<T> {
        self.now_ms += ms;
        let now = self.now_ms;
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due_ms <= now);
        self.pending = rest;
        due.sort_by_key(|p| (p.due_ms, p.seq));
        due.into_iter().map(|p| p.task).collect()
    }

    /// Fire everything still pending regardless of due time.
    pub fn drain(&mut self) -> Vec<T> {
        let latest = self.pending.iter().map(|p| p.due_ms).max();
        match latest {
            Some(due) => self.advance(due.saturating_sub(self.now_ms)),
            None => Vec::new(),
        }
    }
}
