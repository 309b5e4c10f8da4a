// SPDX-License-Identifier: MPL-2.0
//! Cyclic cursor over the gallery pictures.

use crate::content::MediaItem;
use crate::ui::state::AutoAdvanceInterval;
use std::time::Duration;

/// What the carousel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Inline on the page; advances on its own.
    Browsing,
    /// Enlarged over the page; automatic advance is suspended.
    Lightbox,
}

/// Carousel state. Always holds at least one item.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    items: Vec<MediaItem>,
    index: usize,
    mode: Mode,
    auto_advance: AutoAdvanceInterval,
}

impl CarouselState {
    /// Returns `None` for an empty list: there is nothing to cycle through.
    #[must_use]
    pub fn new(items: Vec<MediaItem>, auto_advance: AutoAdvanceInterval) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            items,
            index: 0,
            mode: Mode::Browsing,
            auto_advance,
        })
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.items.len();
    }

    pub fn previous(&mut self) {
        let len = self.items.len();
        self.index = (self.index + len - 1) % len;
    }

    /// Moves to `index`. Out-of-range indices are ignored.
    ///
    /// Returns true when the index was valid.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn open_modal(&mut self) {
        self.mode = Mode::Lightbox;
    }

    pub fn close_modal(&mut self) {
        self.mode = Mode::Browsing;
    }

    /// Timer-driven advance; does nothing while the modal is open.
    ///
    /// Returns true when the index moved.
    pub fn auto_advance(&mut self) -> bool {
        if self.mode == Mode::Lightbox {
            return false;
        }
        self.next();
        true
    }

    /// Auto-advance timer period; `None` while the modal is open, so the
    /// timer is dropped and a fresh one starts when it closes.
    #[must_use]
    pub fn tick_interval(&self) -> Option<Duration> {
        (self.mode == Mode::Browsing).then(|| self.auto_advance.as_duration())
    }

    #[must_use]
    pub fn current(&self) -> &MediaItem {
        &self.items[self.index]
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for the `len` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.mode == Mode::Lightbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize) -> Vec<MediaItem> {
        (0..count)
            .map(|i| MediaItem::new(format!("gallery/{i}.jpg"), format!("picture {i}")))
            .collect()
    }

    fn carousel(count: usize) -> CarouselState {
        CarouselState::new(items(count), AutoAdvanceInterval::default())
            .expect("non-empty carousel")
    }

    #[test]
    fn empty_list_has_no_carousel() {
        assert!(CarouselState::new(Vec::new(), AutoAdvanceInterval::default()).is_none());
    }

    #[test]
    fn index_stays_in_range_under_any_navigation() {
        for count in 1..=6 {
            let mut state = carousel(count);
            // Deterministic pseudo-random walk of next/previous calls.
            let mut seed: u32 = 0x9e37_79b9;
            for _ in 0..500 {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                if seed % 2 == 0 {
                    state.next();
                } else {
                    state.previous();
                }
                assert!(state.current_index() < count);
            }
        }
    }

    #[test]
    fn next_and_previous_are_inverse() {
        for count in 1..=5 {
            for start in 0..count {
                let mut state = carousel(count);
                state.jump_to(start);

                state.next();
                state.previous();
                assert_eq!(state.current_index(), start);

                state.previous();
                state.next();
                assert_eq!(state.current_index(), start);
            }
        }
    }

    #[test]
    fn two_items_wrap_both_ways() {
        let mut state = carousel(2);
        assert_eq!(state.current_index(), 0);
        state.previous();
        assert_eq!(state.current_index(), 1);
        state.next();
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn single_item_stays_put() {
        let mut state = carousel(1);
        state.next();
        state.previous();
        assert!(state.auto_advance());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn jump_to_rejects_out_of_range() {
        let mut state = carousel(4);
        assert!(state.jump_to(2));
        assert_eq!(state.current_index(), 2);
        assert!(!state.jump_to(4));
        assert!(!state.jump_to(usize::MAX));
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn auto_advance_is_suspended_while_modal_is_open() {
        let mut state = carousel(3);
        state.open_modal();
        for _ in 0..10 {
            assert!(!state.auto_advance());
        }
        assert_eq!(state.current_index(), 0);
        assert!(state.tick_interval().is_none());

        state.close_modal();
        assert!(state.auto_advance());
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn open_then_close_keeps_index() {
        let mut state = carousel(4);
        state.jump_to(3);
        state.open_modal();
        assert_eq!(state.mode, Mode::Lightbox);
        state.close_modal();
        assert_eq!(state.mode, Mode::Browsing);
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn manual_navigation_works_in_lightbox() {
        let mut state = carousel(3);
        state.open_modal();
        state.next();
        assert_eq!(state.current_index(), 1);
        state.previous();
        state.previous();
        assert_eq!(state.current_index(), 2);
        assert!(state.jump_to(0));
        assert!(state.is_modal_open());
    }

    #[test]
    fn timer_period_follows_setting() {
        let state = CarouselState::new(items(2), AutoAdvanceInterval::new(7000))
            .expect("non-empty carousel");
        assert_eq!(state.tick_interval(), Some(Duration::from_millis(7000)));
    }

    #[test]
    fn current_item_follows_index() {
        let mut state = carousel(3);
        state.next();
        assert_eq!(state.current().alt_text, "picture 1");
        assert_eq!(state.len(), 3);
        assert!(!state.is_empty());
    }
}
