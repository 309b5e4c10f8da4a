// SPDX-License-Identifier: MPL-2.0
//! Animation timing domain types.
//!
//! Each newtype clamps a millisecond value read from the settings file to the
//! range the page widgets can animate with.

use crate::app::config::{
    DEFAULT_AUTO_ADVANCE_MS, DEFAULT_COUNTER_DURATION_MS, DEFAULT_FRAME_INTERVAL_MS,
    MAX_AUTO_ADVANCE_MS, MAX_COUNTER_DURATION_MS, MAX_FRAME_INTERVAL_MS, MIN_AUTO_ADVANCE_MS,
    MIN_COUNTER_DURATION_MS, MIN_FRAME_INTERVAL_MS,
};
use std::time::Duration;

macro_rules! clamped_millis {
    ($(#[$meta:meta])* $name:ident, $min:expr, $max:expr, $default:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(u64);

        impl $name {
            /// Creates a new value, clamping to the valid range.
            #[must_use]
            pub fn new(millis: u64) -> Self {
                Self(millis.clamp($min, $max))
            }

            /// Reads an optional setting, using the default when unset.
            #[must_use]
            pub fn from_setting(millis: Option<u64>) -> Self {
                millis.map_or_else(Self::default, Self::new)
            }

            #[must_use]
            pub fn millis(self) -> u64 {
                self.0
            }

            #[must_use]
            pub fn as_duration(self) -> Duration {
                Duration::from_millis(self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self($default)
            }
        }
    };
}

clamped_millis!(
    /// Total length of a count-up animation.
    ///
    /// ```
    /// use iced_folio::ui::state::CounterDuration;
    ///
    /// assert_eq!(CounterDuration::new(1500).millis(), 1500);
    /// assert_eq!(CounterDuration::new(0).millis(), 100);
    /// ```
    CounterDuration,
    MIN_COUNTER_DURATION_MS,
    MAX_COUNTER_DURATION_MS,
    DEFAULT_COUNTER_DURATION_MS
);

impl CounterDuration {
    /// Duration requested by a single statistic. Only zero is rejected;
    /// the settings range does not apply.
    ///
    /// ```
    /// use iced_folio::ui::state::CounterDuration;
    ///
    /// assert_eq!(CounterDuration::per_stat(20_000).millis(), 20_000);
    /// assert_eq!(CounterDuration::per_stat(0).millis(), 1);
    /// ```
    #[must_use]
    pub fn per_stat(millis: u64) -> Self {
        Self(millis.max(1))
    }
}

clamped_millis!(
    /// Delay between two count-up frames.
    FrameInterval,
    MIN_FRAME_INTERVAL_MS,
    MAX_FRAME_INTERVAL_MS,
    DEFAULT_FRAME_INTERVAL_MS
);

clamped_millis!(
    /// Delay between two automatic carousel advances.
    AutoAdvanceInterval,
    MIN_AUTO_ADVANCE_MS,
    MAX_AUTO_ADVANCE_MS,
    DEFAULT_AUTO_ADVANCE_MS
);
