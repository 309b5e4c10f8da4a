// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-frame work of the interactive widgets.
//!
//! Measures the performance of:
//! - A full count-up animation (trigger + every frame tick)
//! - Carousel stepping (arrows, indicator jumps, auto-advance)
//! - Visibility checks performed by the sensor on every event

use criterion::{criterion_group, criterion_main, Criterion};
use iced::Rectangle;
use iced_folio::content::MediaItem;
use iced_folio::ui::carousel::{self, CarouselState};
use iced_folio::ui::counter::{self, CounterState, Phase};
use iced_folio::ui::state::{AutoAdvanceInterval, CounterDuration, FrameInterval};
use iced_folio::ui::widgets::sensor::visible_fraction;
use std::hint::black_box;

/// Benchmark one complete counter animation.
fn bench_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter");

    group.bench_function("count_to_650", |b| {
        b.iter(|| {
            let mut state =
                CounterState::new(650, CounterDuration::default(), FrameInterval::default());
            counter::update(&mut state, counter::Message::BecameVisible);
            while state.phase() == Phase::Running {
                counter::update(&mut state, counter::Message::Tick);
            }
            black_box(state.current());
        });
    });

    group.bench_function("display_while_running", |b| {
        let mut state =
            CounterState::new(40, CounterDuration::default(), FrameInterval::default());
        state.trigger();
        state.tick();
        b.iter(|| black_box(state.display(None, Some("TB+"))));
    });

    group.finish();
}

/// Benchmark carousel navigation.
fn bench_carousel(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel");

    let items: Vec<MediaItem> = (0..12)
        .map(|i| MediaItem::new(format!("gallery/{i}.jpg"), format!("Picture {i}")))
        .collect();
    let Some(carousel_state) = CarouselState::new(items, AutoAdvanceInterval::default()) else {
        return;
    };

    group.bench_function("mixed_navigation", |b| {
        b.iter(|| {
            let mut state = carousel_state.clone();
            for step in 0..64 {
                let message = match step % 4 {
                    0 => carousel::Message::Next,
                    1 => carousel::Message::Previous,
                    2 => carousel::Message::JumpTo(step % 12),
                    _ => carousel::Message::AutoAdvance,
                };
                carousel::update(&mut state, message);
            }
            black_box(state.current_index());
        });
    });

    group.finish();
}

/// Benchmark the visibility ratio computed for every sensor event.
fn bench_visibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("sensor");

    let viewport = Rectangle {
        x: 0.0,
        y: 0.0,
        width: 1280.0,
        height: 836.0,
    };

    group.bench_function("visible_fraction_scroll_sweep", |b| {
        b.iter(|| {
            let mut visible = 0.0;
            for y in (0..4000).step_by(16) {
                let bounds = Rectangle {
                    x: 0.0,
                    y: y as f32,
                    width: 260.0,
                    height: 110.0,
                };
                visible += visible_fraction(black_box(bounds), viewport);
            }
            black_box(visible)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_counter, bench_carousel, bench_visibility);
criterion_main!(benches);
