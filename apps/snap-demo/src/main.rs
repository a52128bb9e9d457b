//! Scripts a scroll session against two scaffolds and prints where the
//! sticky header sits after each step.
//!
//! Run with `--features logging` and `RUST_LOG=debug` to see snap decisions.

use anyhow::{ensure, Result};
use snapscaffold_foundation::{LazyListState, ScrollState};
use snapscaffold_testing::{FixedSlots, ScaffoldTestRule};
use snapscaffold_ui::{ScaffoldSlot, SnapAreaState};
use snapscaffold_ui_layout::Constraints;

const SNAP_AREA_HEIGHT: f32 = 240.0;
const TOP_BAR_HEIGHT: f32 = 56.0;
const STICKY_HEADER_HEIGHT: f32 = 48.0;
const BOTTOM_BAR_HEIGHT: f32 = 64.0;
const ITEM_HEIGHT: f32 = 72.0;
const ITEM_COUNT: usize = 60;

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scroll = ScrollState::new(0);
    scroll.set_max_value((ITEM_COUNT as f32 * ITEM_HEIGHT) as i32);
    run_session("scroll column", &scroll)?;

    let list = LazyListState::new();
    list.set_item_count(ITEM_COUNT + 1);
    for index in 1..=ITEM_COUNT {
        list.cache_item_size(index, ITEM_HEIGHT);
    }
    run_session("lazy list", &list)?;
    Ok(())
}

fn run_session<S: std::any::Any>(name: &str, container: &S) -> Result<()> {
    let state = SnapAreaState::try_new(SNAP_AREA_HEIGHT, true, container)?;
    let constraints = Constraints::fixed(412.0, 915.0);
    let slots = FixedSlots::new()
        .top_bar(TOP_BAR_HEIGHT)
        .snap_area(SNAP_AREA_HEIGHT)
        .sticky_header(STICKY_HEADER_HEIGHT)
        .bottom_bar(BOTTOM_BAR_HEIGHT);
    let mut rule = ScaffoldTestRule::new(state.clone(), slots, constraints);
    if let Some(list) = container_as_list(container) {
        list.set_viewport_size(constraints.max_height - TOP_BAR_HEIGHT - STICKY_HEADER_HEIGHT);
    }

    println!("== {name} ==");
    report(&rule, "initial");

    rule.perform_scroll_input(|scope| scope.swipe_up(150.0));
    report(&rule, "slow drag up 150px");

    rule.report_fling(-3_200.0);
    let frames = rule.await_idle();
    report(&rule, &format!("fast fling, settled in {frames} frames"));
    ensure!(
        state.scroll_offset() > 0.999,
        "{name}: snap area did not collapse (fraction {})",
        state.scroll_offset()
    );

    rule.perform_scroll_input(|scope| {
        scope.move_by(200.0);
    });
    report(&rule, "drag down 200px");

    rule.perform_scroll_input(|scope| {
        scope.move_by(-30.0);
        scope.move_by(15.0);
        scope.up_with_velocity(2_800.0);
    });
    let frames = rule.await_idle();
    report(&rule, &format!("fling down, settled in {frames} frames"));
    ensure!(
        state.scroll_offset() < 0.001,
        "{name}: snap area did not expand (fraction {})",
        state.scroll_offset()
    );
    println!();
    Ok(())
}

fn container_as_list<S: std::any::Any>(container: &S) -> Option<&LazyListState> {
    (container as &dyn std::any::Any).downcast_ref::<LazyListState>()
}

fn report(rule: &ScaffoldTestRule, step: &str) {
    let layout = rule.layout();
    println!(
        "{step:<36} fraction={:.3} sticky_y={:>5.1} alpha={:.2} value={:?}",
        layout.fraction,
        rule.y_of(ScaffoldSlot::StickyHeader),
        layout.snap_area_alpha,
        rule.controller().value(),
    );
    log::info!("{step}: {:?}", rule.state());
}
