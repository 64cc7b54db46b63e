// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle and stacking-layout control.
//!
//! The `StackController` subscribes to store snapshots and keeps a cache of
//! per-toast presentation state in sync with the visible window: it mounts
//! new toasts, runs their auto-dismiss timers (pausing while the pointer is
//! over the stack or the stack is expanded), computes stacking offsets, and
//! walks dismissed toasts through the fixed removal transition before their
//! records are purged from the store.
//!
//! Reconciliation is idempotent and never fails: a pass over an identical
//! snapshot creates and disposes nothing, and missing cache entries are
//! treated as no-ops.

use crate::config::defaults::{MOUNT_DELAY_MS, REMOVE_TRANSITION_MS};
use crate::config::Config;
use crate::render::{Renderer, StackLayout, ToastLayout};
use crate::store::Snapshot;
use crate::timer::{TimerEvent, TimerId, TimerQueue};
use crate::toast::{ToastId, ToastRecord};
use std::collections::HashMap;
use std::fmt;

/// Presentation state for one toast in the visible window.
///
/// Exists iff its id is in the window or mid removal transition; destroyed
/// the moment its finish event fires.
#[derive(Debug)]
struct RenderedToast {
    mounted: bool,
    removed: bool,
    paused: bool,
    /// Remaining unpaused display time. Only decremented when pausing.
    time_left_ms: u64,
    /// Virtual timestamp of the last resume.
    started_at_ms: u64,
    /// Measured at mount, immutable thereafter.
    initial_height: f32,
    mount_timer: Option<TimerId>,
    expiry_timer: Option<TimerId>,
}

impl RenderedToast {
    fn new(mount_timer: TimerId) -> Self {
        Self {
            mounted: false,
            removed: false,
            paused: false,
            time_left_ms: 0,
            started_at_ms: 0,
            initial_height: 0.0,
            mount_timer: Some(mount_timer),
            expiry_timer: None,
        }
    }
}

/// Derives the rendered window from store snapshots and manages per-toast
/// timers and layout.
///
/// Owned by a [`ToastStack`](crate::stack::ToastStack) in normal use; the
/// store's publish invokes [`reconcile`](Self::reconcile) synchronously, and
/// the host drives timers through [`advance`](Self::advance).
pub struct StackController {
    config: Config,
    renderer: Box<dyn Renderer>,
    timers: TimerQueue,
    rendered: HashMap<ToastId, RenderedToast>,
    last: Snapshot,
    pending_removals: Vec<ToastId>,
}

impl StackController {
    /// Creates a controller with no rendered toasts.
    pub fn new(config: Config, renderer: Box<dyn Renderer>) -> Self {
        Self {
            config,
            renderer,
            timers: TimerQueue::new(),
            rendered: HashMap::new(),
            last: Snapshot::default(),
            pending_removals: Vec::new(),
        }
    }

    /// Brings the rendered cache, timers, and layout in line with a new
    /// store snapshot. Idempotent; runs once per publish.
    pub fn reconcile(&mut self, snapshot: &Snapshot) {
        self.last = snapshot.clone();
        self.sync();
    }

    /// Advances virtual time, firing due mounts, expiries, and transition
    /// ends. Returns the ids whose removal transition completed; the owner
    /// must purge those from the store.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<ToastId> {
        for event in self.timers.advance(elapsed_ms) {
            self.handle_event(event);
        }
        std::mem::take(&mut self.pending_removals)
    }

    /// Starts the removal transition for a toast: the shared path for timer
    /// expiry and manual close actions.
    ///
    /// Dismissing an already-dismissed or unknown id is a no-op; the first
    /// dismissal wins.
    pub fn dismiss(&mut self, id: ToastId) {
        let Some(entry) = self.rendered.get_mut(&id) else {
            return;
        };
        if entry.removed {
            return;
        }
        entry.removed = true;
        entry.paused = false;
        if let Some(timer) = entry.mount_timer.take() {
            self.timers.cancel(timer);
        }
        if let Some(timer) = entry.expiry_timer.take() {
            self.timers.cancel(timer);
        }
        self.renderer.on_remove(id);
        self.timers
            .schedule(REMOVE_TRANSITION_MS, TimerEvent::FinishRemove(id));
        self.sync();
    }

    /// Number of cached presentation entries, including those mid removal
    /// transition.
    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.rendered.len()
    }

    /// Whether a presentation entry exists for this id.
    #[must_use]
    pub fn is_rendered(&self, id: ToastId) -> bool {
        self.rendered.contains_key(&id)
    }

    /// Whether the toast is in its removal transition.
    #[must_use]
    pub fn is_removing(&self, id: ToastId) -> bool {
        self.rendered.get(&id).is_some_and(|entry| entry.removed)
    }

    /// Whether the toast's auto-dismiss timer is currently paused.
    #[must_use]
    pub fn is_paused(&self, id: ToastId) -> bool {
        self.rendered.get(&id).is_some_and(|entry| entry.paused)
    }

    /// Remaining unpaused display time, as of the last pause.
    ///
    /// Only meaningful while paused; a running timer's remainder lives in
    /// the timer queue.
    #[must_use]
    pub fn time_left_ms(&self, id: ToastId) -> Option<u64> {
        self.rendered.get(&id).map(|entry| entry.time_left_ms)
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    fn handle_event(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Mount(id) => self.handle_mount(id),
            TimerEvent::Expire(id) => self.dismiss(id),
            TimerEvent::FinishRemove(id) => {
                if self.rendered.remove(&id).is_some() {
                    self.renderer.on_detach(id);
                }
                self.pending_removals.push(id);
            }
            TimerEvent::FinishEvict(id) => {
                if self.rendered.remove(&id).is_some() {
                    self.renderer.on_detach(id);
                    // The window may have slid back over this id while it
                    // was animating out; sync re-materializes any window
                    // member without an entry.
                    self.sync();
                }
            }
        }
    }

    fn handle_mount(&mut self, id: ToastId) {
        let duration = self.duration_for(id);
        let Some(entry) = self.rendered.get_mut(&id) else {
            return;
        };
        if entry.mounted || entry.removed {
            return;
        }
        entry.mounted = true;
        entry.mount_timer = None;
        entry.time_left_ms = duration;
        // Mount paused; sync() starts the timer unless interaction holds it.
        entry.paused = true;
        entry.initial_height = self.renderer.on_mount(id);
        self.sync();
    }

    /// The rendered window: the newest `max_toasts` records.
    fn window(&self) -> &[ToastRecord] {
        let toasts = &self.last.toasts;
        let start = toasts.len().saturating_sub(self.config.max_toasts);
        &toasts[start..]
    }

    fn duration_for(&self, id: ToastId) -> u64 {
        self.last
            .toasts
            .iter()
            .find(|record| record.id() == id)
            .and_then(ToastRecord::duration_ms)
            .unwrap_or(self.config.duration_ms)
    }

    fn sync(&mut self) {
        let window: Vec<ToastRecord> = self.window().to_vec();

        // Materialize entries for ids that newly entered the window. Mounting
        // is deferred one tick so the renderer can measure height first.
        for record in &window {
            if !self.rendered.contains_key(&record.id()) {
                let mount_timer = self
                    .timers
                    .schedule(MOUNT_DELAY_MS, TimerEvent::Mount(record.id()));
                self.rendered
                    .insert(record.id(), RenderedToast::new(mount_timer));
            }
        }

        // Dispose entries whose id left the window (evicted, or removed from
        // the store without going through dismiss).
        let stale: Vec<ToastId> = self
            .rendered
            .keys()
            .copied()
            .filter(|id| !window.iter().any(|record| record.id() == *id))
            .collect();
        for id in stale {
            self.dispose(id);
        }

        self.update_timers(&window);
        self.emit_layout(&window);
    }

    fn dispose(&mut self, id: ToastId) {
        let Some(entry) = self.rendered.get_mut(&id) else {
            return;
        };
        if entry.removed {
            // Already transitioning out; its finish event purges it.
            return;
        }
        entry.removed = true;
        entry.paused = false;
        if let Some(timer) = entry.mount_timer.take() {
            self.timers.cancel(timer);
        }
        if let Some(timer) = entry.expiry_timer.take() {
            self.timers.cancel(timer);
        }
        self.renderer.on_remove(id);
        self.timers
            .schedule(REMOVE_TRANSITION_MS, TimerEvent::FinishEvict(id));
    }

    /// Pauses or resumes every mounted entry based on the interaction state.
    ///
    /// Pausing folds the elapsed run time into `time_left_ms` and cancels
    /// the pending expiry; resuming restarts the countdown from the exact
    /// remainder. Double-pause and double-resume are no-ops.
    fn update_timers(&mut self, window: &[ToastRecord]) {
        let hold = self.last.interacting || self.last.expanded;
        let now = self.timers.now_ms();

        for record in window {
            let Some(entry) = self.rendered.get_mut(&record.id()) else {
                continue;
            };
            if !entry.mounted || entry.removed {
                continue;
            }
            if hold && !entry.paused {
                entry.paused = true;
                let elapsed = now.saturating_sub(entry.started_at_ms);
                entry.time_left_ms = entry.time_left_ms.saturating_sub(elapsed);
                if let Some(timer) = entry.expiry_timer.take() {
                    self.timers.cancel(timer);
                }
            } else if !hold && entry.paused {
                entry.paused = false;
                entry.started_at_ms = now;
                let delay = entry.time_left_ms;
                entry.expiry_timer = Some(
                    self.timers
                        .schedule(delay, TimerEvent::Expire(record.id())),
                );
            }
        }
    }

    /// Emits per-toast and stack-level layout values.
    ///
    /// Offsets are measured from the stack's anchored edge: each toast is
    /// pushed out by the boxes (height plus gap) of every newer toast.
    /// Unmounted entries have no height yet and contribute nothing; entries
    /// mid removal report offset 0 so they collapse in place.
    fn emit_layout(&mut self, window: &[ToastRecord]) {
        let gap = self.config.gap;
        let count = window.len();

        let boxes: Vec<f32> = window
            .iter()
            .map(|record| {
                self.rendered
                    .get(&record.id())
                    .filter(|entry| entry.mounted)
                    .map_or(0.0, |entry| entry.initial_height + gap)
            })
            .collect();
        let total: f32 = boxes.iter().sum();

        let mut before = 0.0;
        for (index, record) in window.iter().enumerate() {
            let Some(entry) = self.rendered.get(&record.id()) else {
                continue;
            };
            if !entry.mounted {
                continue;
            }
            let offset = if entry.removed {
                0.0
            } else {
                total - before - boxes[index]
            };
            let layout = ToastLayout {
                index,
                offset,
                toasts_before: count - index - 1,
                front: index + 1 == count,
                expanded: self.last.expanded,
                height: entry.initial_height,
            };
            self.renderer.on_layout(record.id(), &layout);
            before += boxes[index];
        }

        if let Some(front) = window.last() {
            let front_height = self
                .rendered
                .get(&front.id())
                .map_or(0.0, |entry| entry.initial_height);
            self.renderer.on_stack_layout(&StackLayout {
                front_height,
                expanded: self.last.expanded,
                visible: count,
            });
        }
    }
}

impl fmt::Debug for StackController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackController")
            .field("rendered", &self.rendered)
            .field("timers", &self.timers)
            .field("last", &self.last)
            .finish()
    }
}
