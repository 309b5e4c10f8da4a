// SPDX-License-Identifier: MPL-2.0
//! Gallery carousel with an enlarged lightbox view.
//!
//! The carousel cycles through pictures on its own timer and on arrow,
//! indicator and keyboard input. Clicking the picture opens the lightbox,
//! which suspends the timer until it is closed again.

pub mod state;
mod view;

pub use state::CarouselState;
pub use view::{modal, view, ViewContext};

use crate::content::{self, MediaItem};
use iced::widget::image::Handle;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Next,
    Previous,
    JumpTo(usize),
    OpenModal,
    CloseModal,
    /// The auto-advance timer fired.
    AutoAdvance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    ModalOpened,
    ModalClosed,
}

/// Process a carousel message and return the corresponding event.
pub fn update(state: &mut CarouselState, message: Message) -> Event {
    match message {
        Message::Next => {
            state.next();
            Event::None
        }
        Message::Previous => {
            state.previous();
            Event::None
        }
        Message::JumpTo(index) => {
            if !state.jump_to(index) {
                log::debug!("Ignoring carousel jump to out-of-range index {index}");
            }
            Event::None
        }
        Message::OpenModal => {
            if state.is_modal_open() {
                return Event::None;
            }
            state.open_modal();
            Event::ModalOpened
        }
        Message::CloseModal => {
            if !state.is_modal_open() {
                return Event::None;
            }
            state.close_modal();
            Event::ModalClosed
        }
        Message::AutoAdvance => {
            state.auto_advance();
            Event::None
        }
    }
}

/// Resolves every item to an image handle, or `None` when the picture
/// cannot be shown and the alt text should be drawn instead.
///
/// Without a base directory the content is the embedded one, and its
/// pictures are looked up among the bundled assets first.
#[must_use]
pub fn resolve_handles(items: &[MediaItem], base_dir: Option<&Path>) -> Vec<Option<Handle>> {
    items
        .iter()
        .map(|item| {
            if base_dir.is_none() {
                if let Some(bytes) = content::embedded_picture(&item.source) {
                    return Some(Handle::from_bytes(bytes));
                }
            }
            let path = item.local_path(base_dir).filter(|path| path.is_file());
            if path.is_none() {
                log::debug!("No local picture for {}", item.source);
            }
            path.map(Handle::from_path)
        })
        .collect()
}
