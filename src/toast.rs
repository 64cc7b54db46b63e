// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `ToastRecord` held by the store, the `ToastKind`
//! severity-like classification, and the `ToastOptions` payload callers use
//! to create toasts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a toast.
///
/// Assigned by the store at creation time, strictly increasing within a
/// store's lifetime, never reused even after the toast is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of a toast, used by renderers for icon and color choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Plain message without an icon.
    #[default]
    Plain,
    /// Operation completed successfully.
    Success,
    /// Informational message.
    Info,
    /// Warning that doesn't block operation.
    Warning,
    /// Error requiring attention.
    Error,
}

/// Creation payload for a toast.
///
/// Built with the kind-specific constructors and optional builder methods,
/// then handed to [`ToastStore::create`](crate::store::ToastStore::create).
#[derive(Debug, Clone, Default)]
pub struct ToastOptions {
    title: String,
    description: Option<String>,
    kind: ToastKind,
    duration_ms: Option<u64>,
}

impl ToastOptions {
    /// Creates a plain message toast.
    pub fn message(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Creates a success toast.
    pub fn success(title: impl Into<String>) -> Self {
        Self::message(title).with_kind(ToastKind::Success)
    }

    /// Creates an info toast.
    pub fn info(title: impl Into<String>) -> Self {
        Self::message(title).with_kind(ToastKind::Info)
    }

    /// Creates a warning toast.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::message(title).with_kind(ToastKind::Warning)
    }

    /// Creates an error toast.
    pub fn error(title: impl Into<String>) -> Self {
        Self::message(title).with_kind(ToastKind::Error)
    }

    /// Sets the toast kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ToastKind) -> Self {
        self.kind = kind;
        self
    }

    /// Adds secondary descriptive text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the auto-dismiss duration for this toast only.
    ///
    /// Useful for messages that need more time to read.
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub(crate) fn into_record(self, id: ToastId) -> ToastRecord {
        ToastRecord {
            id,
            title: self.title,
            description: self.description,
            kind: self.kind,
            duration_ms: self.duration_ms,
        }
    }
}

/// A toast as held by the store.
///
/// Creation order is significant: the store appends new records at the tail,
/// so position in the store's sequence doubles as the creation timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastRecord {
    id: ToastId,
    title: String,
    description: Option<String>,
    kind: ToastKind,
    duration_ms: Option<u64>,
}

impl ToastRecord {
    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the optional secondary text.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the toast kind.
    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    /// Returns the per-toast auto-dismiss override, if any.
    #[must_use]
    pub fn duration_ms(&self) -> Option<u64> {
        self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_correct_kind() {
        assert_eq!(ToastOptions::message("m").kind, ToastKind::Plain);
        assert_eq!(ToastOptions::success("s").kind, ToastKind::Success);
        assert_eq!(ToastOptions::info("i").kind, ToastKind::Info);
        assert_eq!(ToastOptions::warning("w").kind, ToastKind::Warning);
        assert_eq!(ToastOptions::error("e").kind, ToastKind::Error);
    }

    #[test]
    fn builder_carries_fields_into_record() {
        let record = ToastOptions::warning("Low disk space")
            .with_description("Less than 1 GB remaining")
            .with_duration_ms(8000)
            .into_record(ToastId::new(7));

        assert_eq!(record.id(), ToastId::new(7));
        assert_eq!(record.title(), "Low disk space");
        assert_eq!(record.description(), Some("Less than 1 GB remaining"));
        assert_eq!(record.kind(), ToastKind::Warning);
        assert_eq!(record.duration_ms(), Some(8000));
    }

    #[test]
    fn default_options_have_no_description_or_override() {
        let record = ToastOptions::message("hello").into_record(ToastId::new(0));
        assert!(record.description().is_none());
        assert!(record.duration_ms().is_none());
    }

    #[test]
    fn toast_id_displays_as_number() {
        assert_eq!(ToastId::new(42).to_string(), "42");
    }
}
