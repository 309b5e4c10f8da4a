// SPDX-License-Identifier: MPL-2.0
//! Animated scrolling of the page to a section anchor.

use crate::app::config::SMOOTH_SCROLL_DURATION_MS;
use std::time::{Duration, Instant};

/// Offsets closer than this are considered equal.
const OFFSET_TOLERANCE: f32 = 1.0;

/// An in-flight scroll from one vertical offset to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    /// Last offset this animation asked the scrollable for.
    last_emitted: f32,
    /// Last reported offset matched to this animation. Samples emitted since
    /// then lie between it and `last_emitted`.
    acknowledged: f32,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(from: f32, to: f32, now: Instant) -> Self {
        Self::with_duration(
            from,
            to,
            now,
            Duration::from_millis(SMOOTH_SCROLL_DURATION_MS),
        )
    }

    #[must_use]
    pub fn with_duration(from: f32, to: f32, now: Instant, duration: Duration) -> Self {
        Self {
            from,
            to: to.max(0.0),
            started_at: now,
            duration,
            last_emitted: from,
            acknowledged: from,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset at `now`, remembered so later scroll reports can be matched.
    pub fn sample(&mut self, now: Instant) -> f32 {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_duration_since(self.started_at);
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        let offset = self.from + (self.to - self.from) * ease_in_out(progress);
        self.last_emitted = offset;
        offset
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    /// Matches a reported offset against the samples emitted since the last
    /// report. Reports may trail several frames behind, so any offset between
    /// the last acknowledged one and the latest sample belongs to this
    /// animation. Anything else means the user scrolled.
    ///
    /// Returns false when the animation should stop.
    pub fn follows(&mut self, reported: f32) -> bool {
        let low = self.acknowledged.min(self.last_emitted) - OFFSET_TOLERANCE;
        let high = self.acknowledged.max(self.last_emitted) + OFFSET_TOLERANCE;
        if (low..=high).contains(&reported) {
            self.acknowledged = reported;
            true
        } else {
            false
        }
    }
}

/// Cubic ease-in-out over `[0, 1]`.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < f32::EPSILON);
        assert!(ease_in_out(0.25) < 0.25);
        assert!(ease_in_out(0.75) > 0.75);
    }

    #[test]
    fn sample_moves_from_start_to_target() {
        let start = Instant::now();
        let mut scroll =
            SmoothScroll::with_duration(0.0, 1000.0, start, Duration::from_millis(400));

        assert_eq!(scroll.sample(start), 0.0);
        let mid = scroll.sample(start + Duration::from_millis(200));
        assert!((mid - 500.0).abs() < 0.5);
        assert_eq!(scroll.sample(start + Duration::from_millis(400)), 1000.0);
        assert_eq!(scroll.sample(start + Duration::from_secs(5)), 1000.0);
    }

    #[test]
    fn scrolling_up_works() {
        let start = Instant::now();
        let mut scroll =
            SmoothScroll::with_duration(800.0, 200.0, start, Duration::from_millis(100));
        assert_eq!(scroll.sample(start + Duration::from_millis(100)), 200.0);
    }

    #[test]
    fn negative_target_is_clamped() {
        let scroll = SmoothScroll::new(100.0, -40.0, Instant::now());
        assert_eq!(scroll.target(), 0.0);
    }

    #[test]
    fn finishes_after_duration() {
        let start = Instant::now();
        let scroll = SmoothScroll::with_duration(0.0, 10.0, start, Duration::from_millis(450));
        assert!(!scroll.is_finished(start + Duration::from_millis(449)));
        assert!(scroll.is_finished(start + Duration::from_millis(450)));
    }

    #[test]
    fn own_offsets_are_followed() {
        let start = Instant::now();
        let mut scroll =
            SmoothScroll::with_duration(0.0, 1000.0, start, Duration::from_millis(400));
        let offset = scroll.sample(start + Duration::from_millis(100));
        assert!(scroll.follows(0.0));
        assert!(scroll.follows(offset + 0.5));
        assert!(!scroll.follows(offset + 120.0));
    }

    #[test]
    fn trailing_report_does_not_stop_the_animation() {
        let start = Instant::now();
        let mut scroll =
            SmoothScroll::with_duration(0.0, 1000.0, start, Duration::from_millis(400));
        let first = scroll.sample(start + Duration::from_millis(150));
        let second = scroll.sample(start + Duration::from_millis(166));
        assert!(second - first > OFFSET_TOLERANCE);

        assert!(scroll.follows(first));
        assert!(scroll.follows(second));
    }

    #[test]
    fn scrolling_back_past_acknowledged_offset_stops() {
        let start = Instant::now();
        let mut scroll =
            SmoothScroll::with_duration(0.0, 1000.0, start, Duration::from_millis(400));
        let offset = scroll.sample(start + Duration::from_millis(200));
        assert!(scroll.follows(offset));
        assert!(!scroll.follows(offset - 80.0));
    }

    #[test]
    fn scrolling_up_is_followed_too() {
        let start = Instant::now();
        let mut scroll =
            SmoothScroll::with_duration(900.0, 100.0, start, Duration::from_millis(400));
        let first = scroll.sample(start + Duration::from_millis(150));
        let _ = scroll.sample(start + Duration::from_millis(166));
        assert!(scroll.follows(first));
        assert!(!scroll.follows(950.0));
    }
}
