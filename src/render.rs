// SPDX-License-Identifier: MPL-2.0
//! Interface between the lifecycle core and the host rendering layer.
//!
//! The core never builds visuals itself; it emits mount, layout, and removal
//! callbacks through the [`Renderer`] trait and accepts measured heights as
//! inputs. Any widget toolkit can sit behind this seam.

use crate::toast::ToastId;

/// Layout values for one visible toast, emitted on every reconciliation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastLayout {
    /// Position in the visible window, 0 = oldest visible.
    pub index: usize,
    /// Distance from the stack's anchored edge, in the host's units:
    /// the summed heights (plus gap) of every newer toast. A toast in its
    /// removal transition reports 0 so it collapses in place.
    pub offset: f32,
    /// Count of entries stacked after (newer than) this one.
    pub toasts_before: usize,
    /// Whether this is the front (newest visible) toast.
    pub front: bool,
    /// Whether the stack is in expanded layout.
    pub expanded: bool,
    /// The height measured at mount, immutable thereafter.
    pub height: f32,
}

/// Stack-level layout values, emitted once per reconciliation when at least
/// one toast is visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackLayout {
    /// Measured height of the front toast.
    pub front_height: f32,
    /// Whether the stack is in expanded layout.
    pub expanded: bool,
    /// Number of entries in the visible window.
    pub visible: usize,
}

/// Callbacks the host rendering layer implements.
///
/// All calls happen synchronously on the thread driving the stack. None of
/// them may call back into the core.
pub trait Renderer {
    /// Called once per rendered toast, one scheduling tick after it enters
    /// the visible window. The renderer inserts the visual element and
    /// returns its measured height.
    fn on_mount(&mut self, id: ToastId) -> f32;

    /// Called for every visible toast, in index order, on every
    /// reconciliation pass.
    fn on_layout(&mut self, id: ToastId, layout: &ToastLayout);

    /// Called when a toast enters its removal transition; the renderer
    /// should start the removal animation.
    fn on_remove(&mut self, id: ToastId);

    /// Called when the removal transition has elapsed; the renderer should
    /// detach the visual element.
    fn on_detach(&mut self, id: ToastId);

    /// Called with stack-level values after the per-toast layouts.
    fn on_stack_layout(&mut self, _layout: &StackLayout) {}
}
