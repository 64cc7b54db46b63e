// SPDX-License-Identifier: MPL-2.0
//! Test helpers: a recording renderer and its shared event log.
//!
//! `RecordingRenderer` stands in for a real widget layer in unit and
//! integration tests. It answers every mount with a fixed height and records
//! each callback into a `RenderLog` the test keeps a handle to.

use crate::render::{Renderer, StackLayout, ToastLayout};
use crate::toast::ToastId;
use std::cell::RefCell;
use std::rc::Rc;

/// One recorded renderer callback.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Mounted(ToastId),
    Layout(ToastId, ToastLayout),
    Removed(ToastId),
    Detached(ToastId),
    StackLayout(StackLayout),
}

/// Shared, cloneable view of the events a `RecordingRenderer` captured.
#[derive(Debug, Clone, Default)]
pub struct RenderLog {
    events: Rc<RefCell<Vec<RenderEvent>>>,
}

impl RenderLog {
    /// Returns a copy of all recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.borrow().clone()
    }

    /// Drops all recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Ids that were mounted, in mount order.
    #[must_use]
    pub fn mounted_ids(&self) -> Vec<ToastId> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                RenderEvent::Mounted(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Ids whose removal transition started, in order.
    #[must_use]
    pub fn removed_ids(&self) -> Vec<ToastId> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                RenderEvent::Removed(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Ids that were detached, in order.
    #[must_use]
    pub fn detached_ids(&self) -> Vec<ToastId> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                RenderEvent::Detached(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// All layout emissions, in order.
    #[must_use]
    pub fn layouts(&self) -> Vec<(ToastId, ToastLayout)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                RenderEvent::Layout(id, layout) => Some((*id, *layout)),
                _ => None,
            })
            .collect()
    }

    /// The most recent layout emitted for `id`.
    #[must_use]
    pub fn last_layout(&self, id: ToastId) -> Option<ToastLayout> {
        self.layouts()
            .into_iter()
            .rev()
            .find_map(|(layout_id, layout)| (layout_id == id).then_some(layout))
    }

    fn push(&self, event: RenderEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// A renderer that records every callback and reports a fixed mount height.
#[derive(Debug)]
pub struct RecordingRenderer {
    log: RenderLog,
    mount_height: f32,
}

impl RecordingRenderer {
    /// Creates a renderer whose every toast measures `mount_height`.
    #[must_use]
    pub fn new(mount_height: f32) -> Self {
        Self {
            log: RenderLog::default(),
            mount_height,
        }
    }

    /// Returns a handle to the shared event log.
    #[must_use]
    pub fn log(&self) -> RenderLog {
        self.log.clone()
    }
}

impl Renderer for RecordingRenderer {
    fn on_mount(&mut self, id: ToastId) -> f32 {
        self.log.push(RenderEvent::Mounted(id));
        self.mount_height
    }

    fn on_layout(&mut self, id: ToastId, layout: &ToastLayout) {
        self.log.push(RenderEvent::Layout(id, *layout));
    }

    fn on_remove(&mut self, id: ToastId) {
        self.log.push(RenderEvent::Removed(id));
    }

    fn on_detach(&mut self, id: ToastId) {
        self.log.push(RenderEvent::Detached(id));
    }

    fn on_stack_layout(&mut self, layout: &StackLayout) {
        self.log.push(RenderEvent::StackLayout(*layout));
    }
}
