// SPDX-License-Identifier: MPL-2.0
//! Count-up animation state.
//!
//! A counter starts dormant at zero, is triggered once when it first becomes
//! visible, then climbs to its target in equal fractional increments, one per
//! frame, and stays there.

use crate::ui::state::{CounterDuration, FrameInterval};
use std::time::Duration;

/// Where a counter is in its one-way lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting to be seen; shows zero.
    Dormant,
    /// Counting up on every frame.
    Running,
    /// Showing the target; no more frames.
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterState {
    target: u64,
    duration: CounterDuration,
    frame_interval: FrameInterval,
    increment: f64,
    accumulator: f64,
    current: u64,
    phase: Phase,
}

impl CounterState {
    #[must_use]
    pub fn new(target: u64, duration: CounterDuration, frame_interval: FrameInterval) -> Self {
        let steps = duration.millis() as f64 / frame_interval.millis() as f64;
        Self {
            target,
            duration,
            frame_interval,
            increment: target as f64 / steps,
            accumulator: 0.0,
            current: 0,
            phase: Phase::Dormant,
        }
    }

    /// Starts counting. Only the first call has an effect.
    ///
    /// Returns true when this call triggered the counter.
    pub fn trigger(&mut self) -> bool {
        if self.phase != Phase::Dormant {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    /// Advances one frame. Ignored unless running.
    ///
    /// Returns true when this frame finished the animation.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.accumulator += self.increment;
        if self.accumulator >= self.target as f64 {
            self.current = self.target;
            self.phase = Phase::Finished;
            return true;
        }

        self.current = (self.accumulator.floor() as u64).min(self.target);
        false
    }

    /// Frame timer period, present only while the counter is running.
    #[must_use]
    pub fn tick_interval(&self) -> Option<Duration> {
        (self.phase == Phase::Running).then(|| self.frame_interval.as_duration())
    }

    #[must_use]
    pub fn current(&self) -> u64 {
        self.current
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_dormant(&self) -> bool {
        self.phase == Phase::Dormant
    }

    #[must_use]
    pub fn duration(&self) -> CounterDuration {
        self.duration
    }

    /// Current value with its optional prefix and suffix, e.g. `650+`.
    #[must_use]
    pub fn display(&self, prefix: Option<&str>, suffix: Option<&str>) -> String {
        format!(
            "{}{}{}",
            prefix.unwrap_or_default(),
            self.current,
            suffix.unwrap_or_default()
        )
    }
}
