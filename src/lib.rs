// SPDX-License-Identifier: MPL-2.0
//! `toast_stack` is the lifecycle, timing, and stacking-layout core for
//! transient toast notifications.
//!
//! It decides which toasts are visible, in what order and at what offset,
//! and when each one auto-dismisses, pausing timers while the pointer is
//! over the stack or the stack is expanded. Visual concerns stay behind the
//! [`render::Renderer`] trait, so any widget toolkit can host it.
//!
//! # Usage
//!
//! ```
//! use toast_stack::config::Config;
//! use toast_stack::stack::ToastStack;
//! use toast_stack::test_utils::RecordingRenderer;
//!
//! let stack = ToastStack::new(Config::default(), Box::new(RecordingRenderer::new(48.0)));
//! let id = stack.success("Saved");
//!
//! // The host reports elapsed time; timers, mounts, and removal
//! // transitions all run off this clock.
//! stack.advance(16);
//! assert_eq!(stack.visible_count(), 1);
//!
//! stack.dismiss(id);
//! stack.advance(400);
//! assert_eq!(stack.visible_count(), 0);
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod stack;
pub mod store;
pub mod test_utils;
pub mod timer;
pub mod toast;

pub use config::Config;
pub use render::{Renderer, StackLayout, ToastLayout};
pub use stack::ToastStack;
pub use store::{Snapshot, ToastStore};
pub use toast::{ToastId, ToastKind, ToastOptions, ToastRecord};
