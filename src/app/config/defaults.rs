// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Counter**: Count-up animation duration, frame cadence, visibility threshold
//! - **Carousel**: Auto-advance interval
//! - **Scroll**: Smooth section scrolling

// ==========================================================================
// Counter Defaults
// ==========================================================================

/// Default total duration of a count-up animation (in milliseconds).
pub const DEFAULT_COUNTER_DURATION_MS: u64 = 2000;

/// Minimum count-up duration (in milliseconds).
pub const MIN_COUNTER_DURATION_MS: u64 = 100;

/// Maximum count-up duration (in milliseconds).
pub const MAX_COUNTER_DURATION_MS: u64 = 10_000;

/// Default interval between two animation frames (~60 frames per second).
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Minimum frame interval (in milliseconds).
pub const MIN_FRAME_INTERVAL_MS: u64 = 8;

/// Maximum frame interval (in milliseconds).
pub const MAX_FRAME_INTERVAL_MS: u64 = 100;

/// Fraction of the counter that must be on screen before it starts counting.
pub const COUNTER_VISIBILITY_THRESHOLD: f32 = 0.5;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Default delay between two automatic carousel advances (in milliseconds).
pub const DEFAULT_AUTO_ADVANCE_MS: u64 = 5000;

/// Minimum auto-advance delay (in milliseconds).
pub const MIN_AUTO_ADVANCE_MS: u64 = 1000;

/// Maximum auto-advance delay (in milliseconds).
pub const MAX_AUTO_ADVANCE_MS: u64 = 60_000;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Duration of the animated scroll to a section (in milliseconds).
pub const SMOOTH_SCROLL_DURATION_MS: u64 = 450;

const _: () = {
    assert!(MIN_COUNTER_DURATION_MS <= DEFAULT_COUNTER_DURATION_MS);
    assert!(DEFAULT_COUNTER_DURATION_MS <= MAX_COUNTER_DURATION_MS);
    assert!(MIN_FRAME_INTERVAL_MS <= DEFAULT_FRAME_INTERVAL_MS);
    assert!(DEFAULT_FRAME_INTERVAL_MS <= MAX_FRAME_INTERVAL_MS);
    assert!(MIN_AUTO_ADVANCE_MS <= DEFAULT_AUTO_ADVANCE_MS);
    assert!(DEFAULT_AUTO_ADVANCE_MS <= MAX_AUTO_ADVANCE_MS);
};
