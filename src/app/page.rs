// SPDX-License-Identifier: MPL-2.0
//! Interactive widgets mounted for the current content.
//!
//! Every mount gets a fresh generation number. Widget messages carry a
//! [`WidgetKey`] so that anything still in flight for a previous mount
//! (timer ticks, visibility reports) is recognised and dropped.

use super::config::Config;
use crate::content::{LoadedContent, Stat};
use crate::ui::carousel::{self, CarouselState};
use crate::ui::counter::CounterState;
use crate::ui::state::{AutoAdvanceInterval, CounterDuration, FrameInterval};
use iced::widget::image::Handle;

/// Addresses one widget of one mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetKey {
    pub generation: u64,
    pub index: usize,
}

/// Counters and carousel for one mount of the page.
#[derive(Debug, Clone)]
pub struct PageWidgets {
    generation: u64,
    /// One slot per stat; `Some` where the stat is a counter.
    counters: Vec<Option<CounterState>>,
    carousel: Option<CarouselState>,
    handles: Vec<Option<Handle>>,
}

impl PageWidgets {
    /// Builds fresh widgets for `content`. Counters start dormant and the
    /// carousel starts on its first item.
    #[must_use]
    pub fn mount(generation: u64, content: &LoadedContent, config: &Config) -> Self {
        let frame = FrameInterval::from_setting(config.counter.frame_interval_ms);
        let counters = content
            .portfolio
            .stats
            .iter()
            .map(|stat| match stat {
                Stat::Counter(entry) => {
                    let duration = entry.duration_ms.map_or_else(
                        || CounterDuration::from_setting(config.counter.duration_ms),
                        CounterDuration::per_stat,
                    );
                    Some(CounterState::new(entry.target, duration, frame))
                }
                Stat::Text { .. } => None,
            })
            .collect();

        let gallery = &content.portfolio.gallery;
        let handles = carousel::resolve_handles(gallery, content.base_dir.as_deref());
        let carousel = CarouselState::new(
            gallery.clone(),
            AutoAdvanceInterval::from_setting(config.carousel.auto_advance_ms),
        );

        log::debug!(
            "Mounted page generation {generation}: {} counters, {} gallery items",
            content
                .portfolio
                .stats
                .iter()
                .filter(|stat| matches!(stat, Stat::Counter(_)))
                .count(),
            gallery.len()
        );

        Self {
            generation,
            counters,
            carousel,
            handles,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Key for the widget at `index` in this mount.
    #[must_use]
    pub fn key(&self, index: usize) -> WidgetKey {
        WidgetKey {
            generation: self.generation,
            index,
        }
    }

    /// Key of the carousel; there is at most one per page.
    #[must_use]
    pub fn carousel_key(&self) -> WidgetKey {
        self.key(0)
    }

    pub fn counters(&self) -> &[Option<CounterState>] {
        &self.counters
    }

    /// Live counters with their keys.
    pub fn keyed_counters(&self) -> impl Iterator<Item = (WidgetKey, &CounterState)> {
        self.counters
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|state| (self.key(index), state)))
    }

    /// The counter addressed by `key`, unless the key is stale or points at
    /// a text stat.
    pub fn counter_mut(&mut self, key: WidgetKey) -> Option<&mut CounterState> {
        if key.generation != self.generation {
            return None;
        }
        self.counters.get_mut(key.index)?.as_mut()
    }

    pub fn carousel(&self) -> Option<&CarouselState> {
        self.carousel.as_ref()
    }

    pub fn carousel_mut(&mut self, key: WidgetKey) -> Option<&mut CarouselState> {
        if key != self.carousel_key() {
            return None;
        }
        self.carousel.as_mut()
    }

    pub fn handles(&self) -> &[Option<Handle>] {
        &self.handles
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.carousel
            .as_ref()
            .is_some_and(CarouselState::is_modal_open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CounterStat, MediaItem, Portfolio};
    use crate::ui::counter::Phase;

    fn embedded() -> LoadedContent {
        LoadedContent {
            portfolio: Portfolio::embedded().expect("embedded content"),
            base_dir: None,
        }
    }

    #[test]
    fn mount_creates_one_slot_per_stat() {
        let content = embedded();
        let widgets = PageWidgets::mount(1, &content, &Config::default());
        assert_eq!(widgets.counters().len(), content.portfolio.stats.len());
        for (slot, stat) in widgets.counters().iter().zip(&content.portfolio.stats) {
            assert_eq!(slot.is_some(), matches!(stat, Stat::Counter(_)));
        }
        assert!(widgets
            .keyed_counters()
            .all(|(_, state)| state.phase() == Phase::Dormant));
    }

    #[test]
    fn stale_keys_are_rejected() {
        let content = embedded();
        let mut widgets = PageWidgets::mount(2, &content, &Config::default());
        let (live, _) = widgets.keyed_counters().next().expect("a counter");
        let stale = WidgetKey {
            generation: 1,
            index: live.index,
        };
        assert!(widgets.counter_mut(stale).is_none());
        assert!(widgets.counter_mut(live).is_some());

        let stale_carousel = WidgetKey {
            generation: 1,
            index: 0,
        };
        assert!(widgets.carousel_mut(stale_carousel).is_none());
        let key = widgets.carousel_key();
        assert!(widgets.carousel_mut(key).is_some());
    }

    #[test]
    fn text_stat_slot_is_not_a_counter() {
        let content = embedded();
        let mut widgets = PageWidgets::mount(1, &content, &Config::default());
        let text_index = content
            .portfolio
            .stats
            .iter()
            .position(|stat| matches!(stat, Stat::Text { .. }))
            .expect("a text stat");
        let key = widgets.key(text_index);
        assert!(widgets.counter_mut(key).is_none());
    }

    #[test]
    fn empty_gallery_mounts_no_carousel() {
        let mut content = embedded();
        content.portfolio.gallery.clear();
        let widgets = PageWidgets::mount(1, &content, &Config::default());
        assert!(widgets.carousel().is_none());
        assert!(!widgets.is_modal_open());
    }

    #[test]
    fn missing_pictures_resolve_to_placeholders() {
        let mut content = embedded();
        content.portfolio.gallery = vec![MediaItem::new("https://example.com/a.jpg", "Remote")];
        let widgets = PageWidgets::mount(1, &content, &Config::default());
        assert_eq!(widgets.handles().len(), 1);
        assert!(widgets.handles()[0].is_none());
    }

    #[test]
    fn per_stat_duration_overrides_setting() {
        let content = embedded();
        let mut config = Config::default();
        config.counter.duration_ms = Some(4000);
        let widgets = PageWidgets::mount(1, &content, &config);
        for ((_, state), stat) in widgets.keyed_counters().zip(
            content
                .portfolio
                .stats
                .iter()
                .filter_map(|stat| match stat {
                    Stat::Counter(entry) => Some(entry),
                    Stat::Text { .. } => None,
                }),
        ) {
            let expected = stat.duration_ms.unwrap_or(4000);
            assert_eq!(state.duration().millis(), expected);
        }
    }

    #[test]
    fn long_stat_duration_is_honoured() {
        let mut content = embedded();
        content.portfolio.stats = vec![Stat::Counter(CounterStat {
            target: 650,
            duration_ms: Some(20_000),
            label: "Slow".to_string(),
            prefix: None,
            suffix: None,
            highlight: false,
        })];
        let mut widgets = PageWidgets::mount(1, &content, &Config::default());
        let key = widgets.key(0);
        let state = widgets.counter_mut(key).expect("counter mounted");
        assert_eq!(state.duration().millis(), 20_000);

        state.trigger();
        let mut frames = 0;
        while state.phase() == Phase::Running {
            state.tick();
            frames += 1;
        }
        assert!((1249..=1251).contains(&frames), "took {frames} frames");
        assert_eq!(state.current(), 650);
    }
}
