// SPDX-License-Identifier: MPL-2.0
//! Single source of truth for toast records and stack-wide UI flags.
//!
//! The `ToastStore` owns the ordered toast history plus the `expanded` and
//! `interacting` flags, and fans every change out to subscribers
//! synchronously. Subscribers always observe a fully consistent snapshot,
//! and notification order matches call order; there is no batching and no
//! deferred dispatch.

use crate::toast::{ToastId, ToastOptions, ToastRecord};
use std::fmt;

/// Immutable view of the store's state, delivered to subscribers on every
/// change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// All live toasts, oldest first. May exceed what is actually rendered;
    /// the controller windows this to the newest `max_toasts` entries.
    pub toasts: Vec<ToastRecord>,
    /// Whether the stack is shown in expanded (all-visible) layout.
    pub expanded: bool,
    /// Whether the pointer is currently over the stack.
    pub interacting: bool,
}

/// Handle for removing a subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type SubscriberFn = Box<dyn FnMut(&Snapshot)>;

/// Owns the toast history and publishes every mutation to subscribers.
///
/// Mutations are delivered synchronously, in subscriber registration order,
/// before the mutating call returns. Single-threaded by design; construct
/// one per notification surface rather than sharing a global.
#[derive(Default)]
pub struct ToastStore {
    data: Snapshot,
    subscribers: Vec<(SubscriberId, SubscriberFn)>,
    next_subscriber_id: u64,
    next_toast_id: u64,
}

impl ToastStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback invoked with the full snapshot on every change.
    ///
    /// Callbacks run in registration order. Use the returned id with
    /// [`unsubscribe`](Self::unsubscribe) to deregister.
    pub fn subscribe(&mut self, callback: SubscriberFn) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber_id);
        self.next_subscriber_id += 1;
        self.subscribers.push((id, callback));
        id
    }

    /// Removes a subscriber. Returns `false` if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Appends a new toast and returns its assigned id.
    ///
    /// Ids start at 0 and increase strictly; an id is never reused even
    /// after its toast is removed.
    pub fn create(&mut self, options: ToastOptions) -> ToastId {
        let id = ToastId::new(self.next_toast_id);
        self.next_toast_id += 1;
        self.data.toasts.push(options.into_record(id));
        self.publish();
        id
    }

    /// Removes the toast with the given id, if present.
    ///
    /// Removing an absent id is a no-op, never an error. Publishes either
    /// way, so subscribers must be idempotent to a same-value publish.
    pub fn remove(&mut self, id: ToastId) {
        self.data.toasts.retain(|toast| toast.id() != id);
        self.publish();
    }

    /// Removes every toast.
    pub fn clear(&mut self) {
        self.data.toasts.clear();
        self.publish();
    }

    /// Sets the expanded flag and publishes unconditionally.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.data.expanded = expanded;
        self.publish();
    }

    /// Sets the interacting flag and publishes unconditionally.
    pub fn set_interacting(&mut self, interacting: bool) {
        self.data.interacting = interacting;
        self.publish();
    }

    /// Republishes the current snapshot without changing it.
    pub fn touch(&mut self) {
        self.publish();
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.data
    }

    fn publish(&mut self) {
        let data = &self.data;
        for (_, callback) in &mut self.subscribers {
            callback(data);
        }
    }
}

impl fmt::Debug for ToastStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastStore")
            .field("data", &self.data)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
