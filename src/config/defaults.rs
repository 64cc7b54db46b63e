// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for stack configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Window**: visible-toast bound
//! - **Timing**: auto-dismiss and transition durations
//! - **Geometry**: stack spacing and placement

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Maximum number of toasts rendered at once; older ones stay in history.
pub const DEFAULT_MAX_TOASTS: usize = 3;

/// Lower bound for the configurable window size.
pub const MIN_MAX_TOASTS: usize = 1;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Auto-dismiss duration of unpaused display time (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 4000;

/// Minimum allowed auto-dismiss duration.
pub const MIN_DURATION_MS: u64 = 100;

/// Fixed length of the visual removal transition (in milliseconds).
/// A dismissed toast keeps its store record alive for this long so the
/// renderer can animate it out.
pub const REMOVE_TRANSITION_MS: u64 = 400;

/// Delay before a freshly created toast mounts. One scheduling tick, so the
/// renderer can measure layout height before the first timer starts.
pub const MOUNT_DELAY_MS: u64 = 0;

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Vertical spacing between stacked toasts.
pub const DEFAULT_GAP: f32 = 14.0;

/// Toast width handed through to the renderer.
pub const DEFAULT_WIDTH: f32 = 356.0;

/// Distance between the stack and the viewport edge.
pub const DEFAULT_VIEWPORT_OFFSET: f32 = 32.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Window validation
    assert!(MIN_MAX_TOASTS > 0);
    assert!(DEFAULT_MAX_TOASTS >= MIN_MAX_TOASTS);

    // Timing validation
    assert!(MIN_DURATION_MS > 0);
    assert!(DEFAULT_DURATION_MS >= MIN_DURATION_MS);
    assert!(REMOVE_TRANSITION_MS > 0);

    // Geometry validation
    assert!(DEFAULT_GAP >= 0.0);
    assert!(DEFAULT_WIDTH > 0.0);
    assert!(DEFAULT_VIEWPORT_OFFSET >= 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_defaults_are_valid() {
        assert_eq!(DEFAULT_MAX_TOASTS, 3);
        assert!(DEFAULT_MAX_TOASTS >= MIN_MAX_TOASTS);
    }

    #[test]
    fn timing_defaults_are_valid() {
        assert_eq!(DEFAULT_DURATION_MS, 4000);
        assert_eq!(REMOVE_TRANSITION_MS, 400);
        assert!(DEFAULT_DURATION_MS > REMOVE_TRANSITION_MS);
    }

    #[test]
    fn geometry_defaults_are_valid() {
        assert_eq!(DEFAULT_GAP, 14.0);
        assert!(DEFAULT_WIDTH > 0.0);
        assert!(DEFAULT_VIEWPORT_OFFSET >= 0.0);
    }
}
