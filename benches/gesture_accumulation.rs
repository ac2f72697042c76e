// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gesture handling.
//!
//! Measures the performance of:
//! - Folding a long stream of zoom/pan deltas into the transform
//! - Turning raw two-finger touch events into deltas

use criterion::{criterion_group, criterion_main, Criterion};
use iced::touch::{self, Finger};
use iced::{Point, Vector};
use pinch_lens::ui::state::{GestureDelta, TouchState, ZoomTransformState};
use std::hint::black_box;

const STREAM_LEN: usize = 10_000;

fn delta_stream() -> Vec<GestureDelta> {
    (0..STREAM_LEN)
        .map(|i| {
            if i % 2 == 0 {
                GestureDelta::Zoom(if i % 4 == 0 { 1.01 } else { 0.99 })
            } else {
                GestureDelta::Pan(Vector::new(0.5, -0.25))
            }
        })
        .collect()
}

fn bench_apply_deltas(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_accumulation");
    let deltas = delta_stream();

    group.bench_function("apply_10k_deltas", |b| {
        b.iter(|| {
            let mut state = ZoomTransformState::new();
            for delta in &deltas {
                state.apply(*delta);
            }
            black_box(state.current_transform());
        });
    });

    group.finish();
}

#[allow(clippy::cast_precision_loss)]
fn bench_pinch_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_accumulation");

    group.bench_function("pinch_1k_moves", |b| {
        b.iter(|| {
            let mut touch = TouchState::new(0.0);
            let mut state = ZoomTransformState::new();
            touch.handle(touch::Event::FingerPressed {
                id: Finger(1),
                position: Point::new(100.0, 100.0),
            });
            touch.handle(touch::Event::FingerPressed {
                id: Finger(2),
                position: Point::new(120.0, 100.0),
            });
            for step in 1..=1_000 {
                let deltas = touch.handle(touch::Event::FingerMoved {
                    id: Finger(2),
                    position: Point::new(120.0 + step as f32 * 0.1, 100.0),
                });
                for delta in deltas {
                    state.apply(delta);
                }
            }
            black_box(state.current_transform());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_apply_deltas, bench_pinch_events);
criterion_main!(benches);
