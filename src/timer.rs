// SPDX-License-Identifier: MPL-2.0
//! Cancellable-delay primitive driving toast lifecycle transitions.
//!
//! Timers are data, not callbacks: scheduling enqueues a [`TimerEvent`]
//! against a virtual monotonic clock, and the owner drains due events by
//! advancing the clock. The host maps real elapsed time onto
//! [`TimerQueue::advance`]; tests drive virtual time directly, which makes
//! pause/resume arithmetic exactly reproducible.

use crate::toast::ToastId;

/// Handle for cancelling a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Deferred lifecycle transition for a rendered toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Deferred mount, one scheduling tick after creation, so the renderer
    /// can measure layout height.
    Mount(ToastId),
    /// The unpaused auto-dismiss duration elapsed.
    Expire(ToastId),
    /// The removal transition of a dismissed toast finished; detach it and
    /// purge the record from the store.
    FinishRemove(ToastId),
    /// The removal transition of an evicted toast finished; detach it but
    /// leave the record in store history.
    FinishEvict(ToastId),
}

#[derive(Debug)]
struct Entry {
    id: TimerId,
    deadline_ms: u64,
    event: TimerEvent,
}

/// Single-threaded timer queue over a virtual millisecond clock.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

impl TimerQueue {
    /// Creates an empty queue with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Returns the number of pending entries.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Schedules `event` to fire once `delay_ms` has elapsed.
    ///
    /// A zero delay fires on the next [`advance`](Self::advance) call,
    /// including `advance(0)`, never re-entrantly within the current one.
    pub fn schedule(&mut self, delay_ms: u64, event: TimerEvent) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline_ms: self.now_ms.saturating_add(delay_ms),
            event,
        });
        id
    }

    /// Cancels a pending entry.
    ///
    /// Returns `false` if the entry already fired or was already cancelled;
    /// cancelling twice is a guarded no-op.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        if let Some(position) = self.entries.iter().position(|entry| entry.id == id) {
            self.entries.swap_remove(position);
            true
        } else {
            false
        }
    }

    /// Advances the clock by `elapsed_ms` and drains every entry whose
    /// deadline was reached, ordered by (deadline, schedule order).
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<TimerEvent> {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        let now = self.now_ms;

        let mut due = Vec::new();
        let mut remaining = Vec::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            if entry.deadline_ms <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;

        // TimerId doubles as the schedule-order tiebreaker.
        due.sort_by_key(|entry| (entry.deadline_ms, entry.id.0));
        due.into_iter().map(|entry| entry.event).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> ToastId {
        ToastId::new(id)
    }

    #[test]
    fn entries_fire_only_once_deadline_is_reached() {
        let mut queue = TimerQueue::new();
        queue.schedule(100, TimerEvent::Expire(toast(0)));

        assert!(queue.advance(99).is_empty());
        assert_eq!(queue.advance(1), vec![TimerEvent::Expire(toast(0))]);
        assert!(queue.advance(1000).is_empty());
    }

    #[test]
    fn zero_delay_fires_on_next_advance() {
        let mut queue = TimerQueue::new();
        queue.schedule(0, TimerEvent::Mount(toast(0)));
        assert_eq!(queue.advance(0), vec![TimerEvent::Mount(toast(0))]);
    }

    #[test]
    fn due_entries_come_out_in_deadline_then_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(50, TimerEvent::Expire(toast(0)));
        queue.schedule(10, TimerEvent::Mount(toast(1)));
        queue.schedule(10, TimerEvent::Mount(toast(2)));

        let due = queue.advance(60);
        assert_eq!(
            due,
            vec![
                TimerEvent::Mount(toast(1)),
                TimerEvent::Mount(toast(2)),
                TimerEvent::Expire(toast(0)),
            ]
        );
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut queue = TimerQueue::new();
        let keep = queue.schedule(10, TimerEvent::Expire(toast(0)));
        let cancelled = queue.schedule(10, TimerEvent::Expire(toast(1)));

        assert!(queue.cancel(cancelled));
        assert!(!queue.cancel(cancelled));

        assert_eq!(queue.advance(10), vec![TimerEvent::Expire(toast(0))]);
        assert!(!queue.cancel(keep));
    }

    #[test]
    fn clock_accumulates_across_advances() {
        let mut queue = TimerQueue::new();
        queue.advance(30);
        queue.advance(12);
        assert_eq!(queue.now_ms(), 42);

        queue.schedule(8, TimerEvent::Expire(toast(0)));
        assert!(queue.advance(7).is_empty());
        assert_eq!(queue.advance(1).len(), 1);
    }

    #[test]
    fn pending_reflects_outstanding_entries() {
        let mut queue = TimerQueue::new();
        assert_eq!(queue.pending(), 0);
        let id = queue.schedule(5, TimerEvent::Mount(toast(0)));
        queue.schedule(5, TimerEvent::Mount(toast(1)));
        assert_eq!(queue.pending(), 2);
        queue.cancel(id);
        assert_eq!(queue.pending(), 1);
        queue.advance(5);
        assert_eq!(queue.pending(), 0);
    }
}
