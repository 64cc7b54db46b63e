// SPDX-License-Identifier: MPL-2.0
//! Composition root wiring a store and controller into one toast stack.
//!
//! `ToastStack` owns an explicitly constructed [`ToastStore`] and
//! [`StackController`] pair: there is no process-wide singleton; whoever
//! composes the widget owns the stack's lifecycle. The controller is
//! subscribed to the store, so every mutation reconciles synchronously
//! before the mutating call returns. The host drives timers by reporting
//! elapsed time through [`advance`](ToastStack::advance).

use crate::config::Config;
use crate::controller::StackController;
use crate::render::Renderer;
use crate::store::{Snapshot, ToastStore};
use crate::toast::{ToastId, ToastOptions};
use std::cell::RefCell;
use std::rc::Rc;

/// A complete toast notification stack.
///
/// Single-threaded by design: store publish, reconciliation, and timer
/// delivery all run on the calling thread with no interleaving.
#[derive(Debug)]
pub struct ToastStack {
    store: Rc<RefCell<ToastStore>>,
    controller: Rc<RefCell<StackController>>,
    config: Config,
}

impl ToastStack {
    /// Wires a fresh store and controller together behind `renderer`.
    pub fn new(config: Config, renderer: Box<dyn Renderer>) -> Self {
        let store = Rc::new(RefCell::new(ToastStore::new()));
        let controller = Rc::new(RefCell::new(StackController::new(
            config.clone(),
            renderer,
        )));

        let reconciler = Rc::clone(&controller);
        store.borrow_mut().subscribe(Box::new(move |snapshot| {
            reconciler.borrow_mut().reconcile(snapshot);
        }));

        if config.expanded_by_default {
            store.borrow_mut().set_expanded(true);
        }

        Self {
            store,
            controller,
            config,
        }
    }

    /// Creates a stack with default configuration.
    pub fn with_renderer(renderer: Box<dyn Renderer>) -> Self {
        Self::new(Config::default(), renderer)
    }

    /// Creates a toast from a full options payload.
    pub fn create(&self, options: ToastOptions) -> ToastId {
        self.store.borrow_mut().create(options)
    }

    /// Creates a plain message toast.
    pub fn message(&self, title: impl Into<String>) -> ToastId {
        self.create(ToastOptions::message(title))
    }

    /// Creates a success toast.
    pub fn success(&self, title: impl Into<String>) -> ToastId {
        self.create(ToastOptions::success(title))
    }

    /// Creates an info toast.
    pub fn info(&self, title: impl Into<String>) -> ToastId {
        self.create(ToastOptions::info(title))
    }

    /// Creates a warning toast.
    pub fn warning(&self, title: impl Into<String>) -> ToastId {
        self.create(ToastOptions::warning(title))
    }

    /// Creates an error toast.
    pub fn error(&self, title: impl Into<String>) -> ToastId {
        self.create(ToastOptions::error(title))
    }

    /// Dismisses a toast through the removal transition, exactly as timer
    /// expiry would. Dismissing twice, or dismissing an unknown id, is a
    /// no-op.
    pub fn dismiss(&self, id: ToastId) {
        self.controller.borrow_mut().dismiss(id);
    }

    /// Removes a toast from the store immediately, skipping the transition.
    pub fn remove(&self, id: ToastId) {
        self.store.borrow_mut().remove(id);
    }

    /// Removes every toast immediately.
    pub fn clear(&self) {
        self.store.borrow_mut().clear();
    }

    /// Reports pointer presence over the stack; pauses or resumes every
    /// visible toast's timer.
    pub fn set_interacting(&self, interacting: bool) {
        self.store.borrow_mut().set_interacting(interacting);
    }

    /// Switches between compact and expanded layout; expanded layout also
    /// pauses auto-dismiss.
    pub fn set_expanded(&self, expanded: bool) {
        self.store.borrow_mut().set_expanded(expanded);
    }

    /// Advances the stack's virtual clock by `elapsed_ms`, firing due
    /// mounts, expiries, and transition ends, then purging completed
    /// removals from the store.
    pub fn advance(&self, elapsed_ms: u64) {
        let completed = self.controller.borrow_mut().advance(elapsed_ms);
        for id in completed {
            self.store.borrow_mut().remove(id);
        }
    }

    /// Returns a copy of the store's current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.store.borrow().snapshot().clone()
    }

    /// Number of toasts in the visible window.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        let live = self.store.borrow().snapshot().toasts.len();
        live.min(self.config.max_toasts)
    }

    /// The stack's configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingRenderer;

    fn stack() -> (ToastStack, crate::test_utils::RenderLog) {
        let renderer = RecordingRenderer::new(40.0);
        let log = renderer.log();
        (ToastStack::with_renderer(Box::new(renderer)), log)
    }

    #[test]
    fn create_reconciles_synchronously() {
        let (stack, _log) = stack();
        let id = stack.message("hello");
        assert!(stack.controller.borrow().is_rendered(id));
        assert_eq!(stack.visible_count(), 1);
    }

    #[test]
    fn kind_helpers_create_one_toast_each() {
        let (stack, _log) = stack();
        stack.message("m");
        stack.success("s");
        stack.info("i");
        stack.warning("w");
        stack.error("e");
        assert_eq!(stack.snapshot().toasts.len(), 5);
        assert_eq!(stack.visible_count(), 3);
    }

    #[test]
    fn expanded_by_default_is_applied() {
        let config = Config {
            expanded_by_default: true,
            ..Config::default()
        };
        let stack = ToastStack::new(config, Box::new(RecordingRenderer::new(40.0)));
        assert!(stack.snapshot().expanded);
    }

    #[test]
    fn remove_bypasses_the_transition() {
        let (stack, log) = stack();
        let id = stack.message("gone");
        stack.advance(0);

        stack.remove(id);
        assert!(stack.snapshot().toasts.is_empty());
        // The controller still walks the visual out through the transition.
        assert_eq!(log.removed_ids(), vec![id]);
    }

    #[test]
    fn clear_empties_the_stack() {
        let (stack, _log) = stack();
        for i in 0..4 {
            stack.message(format!("toast-{i}"));
        }
        stack.clear();
        assert_eq!(stack.visible_count(), 0);
    }
}
