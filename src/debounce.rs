// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debouncing as an explicit delayed-task scheduler.
//!
//! Holds at most one pending task. Scheduling a new task cancels the pending
//! one, so in a burst of keystrokes only the last one survives the quiet
//! period. Time is whatever monotonic millisecond clock the host has
//! (`performance.now()` in a browser, `Instant` natively); the scheduler never
//! reads a clock itself, which keeps it usable from WASM and from tests.
//!
//! ```text
//! t=0    schedule("r")      pending: "r"   due 300
//! t=120  schedule("ru")     pending: "ru"  due 420   ("r" cancelled)
//! t=300  poll               → None
//! t=420  poll               → Some("ru")
//! t=500  poll               → None         (fires once)
//! ```

/// Identifies a scheduled task, so a host timer can tell whether it is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct Pending<T> {
    id: TaskId,
    due: u64,
    payload: T,
}

/// Single-slot cancellable scheduler.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    next_id: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            next_id: 0,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Replace any pending task with `payload`, due `delay_ms` after `now_ms`.
    pub fn schedule(&mut self, now_ms: u64, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending = Some(Pending {
            id,
            due: now_ms.saturating_add(self.delay_ms),
            payload,
        });
        id
    }

    /// Drop the pending task, if any, without running it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.payload)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending task becomes due.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Take the pending task if it is due at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        self.take_if(|p| now_ms >= p.due)
    }

    /// Take the pending task if it is still `id` and due. A timer armed for a
    /// task that has since been superseded gets `None`.
    pub fn fire(&mut self, id: TaskId, now_ms: u64) -> Option<T> {
        self.take_if(|p| p.id == id && now_ms >= p.due)
    }

    fn take_if(&mut self, ready: impl FnOnce(&Pending<T>) -> bool) -> Option<T> {
        if self.pending.as_ref().is_some_and(ready) {
            self.pending.take().map(|p| p.payload)
        } else {
            None
        }
    }
}
