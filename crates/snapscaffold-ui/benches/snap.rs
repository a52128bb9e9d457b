use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use snapscaffold_foundation::{LazyListState, ScrollState, ScrollableState, Velocity};
use snapscaffold_ui::{
    compute_fraction, BodyPadding, CollapsibleSnapScaffold, ScaffoldMeasureScope, ScaffoldSlot,
    ScrollPosition, SnapAreaState, SnapController,
};
use snapscaffold_ui_layout::{Constraints, Size};

struct Slots;

impl ScaffoldMeasureScope for Slots {
    fn measure(&mut self, slot: ScaffoldSlot, _constraints: Constraints) -> Option<Size> {
        let height = match slot {
            ScaffoldSlot::TopBar => 56.0,
            ScaffoldSlot::SnapArea => 240.0,
            ScaffoldSlot::StickyHeader => 48.0,
            ScaffoldSlot::BottomBar => 64.0,
            ScaffoldSlot::Body => return None,
        };
        Some(Size::new(400.0, height))
    }

    fn measure_body(&mut self, constraints: Constraints, _padding: BodyPadding) -> Option<Size> {
        Some(Size::new(400.0, constraints.max_height))
    }
}

fn bench_fraction(c: &mut Criterion) {
    c.bench_function("compute_fraction", |b| {
        let mut value = 0.0f32;
        b.iter(|| {
            value = (value + 7.0) % 1_000.0;
            compute_fraction(
                black_box(ScrollPosition::Continuous {
                    value,
                    max_value: 1_000.0,
                }),
                black_box(240.0),
            )
        })
    });
}

fn bench_settle(c: &mut Criterion) {
    c.bench_function("collapse_settle", |b| {
        b.iter(|| {
            let scroll = ScrollState::new(0);
            scroll.set_max_value(5_000);
            let state = SnapAreaState::new(240.0, true, scroll.clone());
            let mut controller = SnapController::new(state.clone());
            controller.on_frame(0);
            scroll.consume_scroll_delta(150.0);
            state.on_fling_did_finish(Velocity::vertical(-3_000.0));
            let mut t = 16_000_000;
            while controller.on_frame(t) {
                t += 16_000_000;
            }
            black_box(scroll.value())
        })
    });
}

fn bench_layout(c: &mut Criterion) {
    let list = LazyListState::new();
    list.set_item_count(200);
    list.set_viewport_size(700.0);
    let state = SnapAreaState::new(240.0, true, list.clone());
    let scaffold = CollapsibleSnapScaffold::new(state);
    let mut slots = Slots;
    c.bench_function("scaffold_layout", |b| {
        b.iter(|| {
            list.consume_scroll_delta(3.0);
            if !list.can_scroll_forward() {
                list.scroll_to_item(0, 0.0);
            }
            black_box(scaffold.layout(&mut slots, Constraints::fixed(400.0, 800.0)))
        })
    });
}

criterion_group!(benches, bench_fraction, bench_settle, bench_layout);
criterion_main!(benches);
