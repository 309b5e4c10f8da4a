// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State logic kept apart from the widgets that render it.

pub mod scroll;
pub mod timing;

pub use scroll::SmoothScroll;
pub use timing::{AutoAdvanceInterval, CounterDuration, FrameInterval};
