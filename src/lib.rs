// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` renders a personal portfolio and résumé as a single
//! scrolling page built with the Iced GUI framework.
//!
//! The page content is data ([`content`]), the interactive pieces are an
//! animated statistics counter and a gallery carousel ([`ui`]), and [`app`]
//! ties them together in the Elm architecture.

pub mod app;
pub mod content;
pub mod error;
pub mod i18n;
pub mod ui;
