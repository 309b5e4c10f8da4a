// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Interactive widgets
//!
//! - [`counter`] - Count-up statistic triggered when scrolled into view
//! - [`carousel`] - Auto-advancing gallery with a lightbox
//!
//! # Page
//!
//! - [`navbar`] - Navigation bar with section links
//! - [`sections`] - Hero, timeline, education and the other page sections
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state (timing settings, smooth scrolling)
//! - [`widgets`] - Custom Iced widgets (visibility sensor)
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod carousel;
pub mod counter;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
